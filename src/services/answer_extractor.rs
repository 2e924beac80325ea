//! 模范答案提取 - 业务能力层

use crate::services::markers::{
    sections, ANSWER_HEADING, ANSWER_MARKER, EXPRESSION_MARKER, QUESTION_MARKER,
};
use crate::services::question_extractor::MIN_BODY_CHARS;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use tracing::debug;

/// 从文本中提取模范答案
///
/// 同一序号出现多次时保留较长的文本（OCR 常把其中一份截断）。
pub fn extract_answers(text: &str) -> BTreeMap<u32, String> {
    let stops = [
        &*ANSWER_MARKER,
        &*ANSWER_HEADING,
        &*QUESTION_MARKER,
        &*EXPRESSION_MARKER,
    ];

    let mut answers: BTreeMap<u32, String> = BTreeMap::new();
    for section in sections(text, &ANSWER_MARKER, &stops) {
        let Some(number) = section.number else {
            continue;
        };
        let length = section.body.chars().count();
        if length < MIN_BODY_CHARS {
            debug!("忽略过短的答案 {}: {:?}", number, section.body);
            continue;
        }

        match answers.entry(number) {
            Entry::Vacant(slot) => {
                slot.insert(section.body.to_string());
            }
            Entry::Occupied(mut slot) => {
                if length > slot.get().chars().count() {
                    debug!("答案 {} 重复出现，保留较长的版本", number);
                    slot.insert(section.body.to_string());
                }
            }
        }
    }

    answers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answers_by_number() {
        let text = "Q1: What is your job? Q2: Describe your hometown. \
                    Sample Answer 1: I am a teacher. \
                    Sample Answer 2: My hometown is small and quiet.";
        let answers = extract_answers(text);

        assert_eq!(answers.len(), 2);
        assert_eq!(answers[&1], "I am a teacher.");
        assert_eq!(answers[&2], "My hometown is small and quiet.");
    }

    #[test]
    fn test_longer_duplicate_wins() {
        let short = "a".repeat(29) + ".";
        let long = "b".repeat(79) + ".";
        let text = format!("Answer 5: {}\nAnswer 5: {}", short, long);

        let answers = extract_answers(&text);
        assert_eq!(answers.len(), 1);
        assert_eq!(answers[&5].chars().count(), 80);
        assert_eq!(answers[&5], long);

        // 顺序颠倒时结果相同
        let text = format!("Answer 5: {}\nAnswer 5: {}", long, short);
        assert_eq!(extract_answers(&text)[&5], long);
    }

    #[test]
    fn test_korean_marker_and_question_boundary() {
        let text = "모범 답안 1: 저는 조용한 동네에 살고 있습니다. Q2: Next question please.";
        let answers = extract_answers(text);
        assert_eq!(answers[&1], "저는 조용한 동네에 살고 있습니다.");
    }

    #[test]
    fn test_short_answers_are_noise() {
        let answers = extract_answers("Answer 1: Yes, I do.");
        assert!(answers.is_empty());
    }

    #[test]
    fn test_answer_stops_at_expressions() {
        let text = "Answer 1: I go to the park every weekend. Useful Expressions: • on top of that";
        let answers = extract_answers(text);
        assert_eq!(answers[&1], "I go to the park every weekend.");
    }

    #[test]
    fn test_answer_stops_at_unnumbered_heading() {
        let text = "Sample Answer 1: I really love kimchi stew a lot. 모범 답안\n\
                    모범 답안 2: My mother makes it every Sunday for the family.";
        let answers = extract_answers(text);
        assert_eq!(answers[&1], "I really love kimchi stew a lot.");
        assert_eq!(answers[&2], "My mother makes it every Sunday for the family.");
    }
}
