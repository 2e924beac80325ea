//! 标记识别：题目 / 答案 / 表达三类标记的正则与区段切分
//!
//! 每类标记的正文从标记结束处开始，到下一个"终止标记"或文本末尾为止。

use regex::Regex;
use std::sync::LazyLock;

/// 题目标记：`Q1:`、`Question 1.`、`질문 1:`
pub static QUESTION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\bq|\bquestion\s+|질문\s*)(\d+)[:.]").expect("题目标记正则无效")
});

/// 答案标记：`Sample Answer 1:`、`Answer 1.`、`모범 답안 1:`
pub static ANSWER_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\bsample\s+answer\s*|\banswer\s+|모범\s*답안\s*)(\d+)[:.]")
        .expect("答案标记正则无效")
});

/// 不带序号的答案区标题：`Sample Answers`、`모범 답안`
pub static ANSWER_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bsample\s+answers?\b|모범\s*답안").expect("答案区标题正则无效")
});

/// 表达标记：`Useful Expressions:`、`유용한 표현:`、`표현:`
pub static EXPRESSION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\buseful\s+expressions?|유용한\s*표현|표현)\s*[:.]")
        .expect("表达标记正则无效")
});

/// 一个被标记的区段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    /// 标记中的序号（表达标记没有序号）
    pub number: Option<u32>,
    /// 去掉首尾空白后的正文
    pub body: &'a str,
}

/// 按标记切分文本
///
/// # 参数
/// - `text`: 原始文本（只读）
/// - `marker`: 区段起始标记；若含捕获组 1，则作为序号解析
/// - `stops`: 终止标记，正文在其中最早出现的位置截断
///
/// # 返回
/// 按出现顺序返回所有区段。序号无法解析（溢出）或为 0 的标记仍然
/// 参与截断，但不产出区段。
pub fn sections<'a>(text: &'a str, marker: &Regex, stops: &[&Regex]) -> Vec<Section<'a>> {
    let mut result = Vec::new();

    for caps in marker.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };

        let number = match caps.get(1) {
            Some(m) => match m.as_str().parse::<u32>() {
                Ok(n) if n > 0 => Some(n),
                _ => continue,
            },
            None => None,
        };

        let start = whole.end();
        let end = next_stop(text, start, stops);
        result.push(Section {
            number,
            body: text[start..end].trim(),
        });
    }

    result
}

/// 从 `from` 开始，找到最早出现的终止标记位置
fn next_stop(text: &str, from: usize, stops: &[&Regex]) -> usize {
    stops
        .iter()
        .filter_map(|re| re.find_at(text, from).map(|m| m.start()))
        .min()
        .unwrap_or(text.len())
}
