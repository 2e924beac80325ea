/// 题目与答案匹配
///
/// 纯粹按题目 ID 中的序号关联，与文档中的出现顺序无关。
use crate::models::{Question, QuestionId};
use std::collections::BTreeMap;

/// 将答案按序号绑定到题目
///
/// # 参数
/// - `questions`: 已提取的题目
/// - `answers`: 序号 -> 答案文本
///
/// # 返回
/// 题目 ID -> 答案文本；没有对应答案的题目不会出现在结果中
pub fn match_answers(
    questions: &[Question],
    answers: &BTreeMap<u32, String>,
) -> BTreeMap<QuestionId, String> {
    questions
        .iter()
        .filter_map(|q| {
            answers
                .get(&q.id.sequence)
                .map(|answer| (q.id.clone(), answer.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Level;

    fn questions() -> Vec<Question> {
        vec![
            Question::new("topic", 1, "What is your favorite season?", Level::IH),
            Question::new("topic", 2, "Describe your last vacation.", Level::IH),
        ]
    }

    #[test]
    fn test_join_on_sequence() {
        let answers = BTreeMap::from([(1, "Answer text.".to_string())]);
        let matched = match_answers(&questions()[..1], &answers);

        assert_eq!(matched.len(), 1);
        assert_eq!(matched[&QuestionId::new("topic", 1)], "Answer text.");
        assert_eq!(
            matched.keys().next().map(ToString::to_string).as_deref(),
            Some("topic-q1")
        );
    }

    #[test]
    fn test_empty_answers_give_empty_result() {
        assert!(match_answers(&questions(), &BTreeMap::new()).is_empty());
    }

    #[test]
    fn test_unmatched_questions_are_absent() {
        let answers = BTreeMap::from([
            (2, "I went to Jeju island last summer.".to_string()),
            (7, "An answer with no question.".to_string()),
        ]);
        let matched = match_answers(&questions(), &answers);

        assert_eq!(matched.len(), 1);
        assert!(matched.contains_key(&QuestionId::new("topic", 2)));
    }
}
