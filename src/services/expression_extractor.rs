//! 常用表达提取 - 业务能力层

use crate::services::markers::{
    sections, ANSWER_HEADING, ANSWER_MARKER, EXPRESSION_MARKER, QUESTION_MARKER,
};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// 项目符号或换行
static ITEM_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[•\-*]\s*|\n+").expect("表达分隔正则无效"));

/// 不超过该长度的候选项被丢弃
const MAX_NOISE_CHARS: usize = 3;

/// 提取常用表达，跨区块去重并保持首次出现的顺序
pub fn extract_expressions(text: &str) -> Vec<String> {
    let stops = [
        &*QUESTION_MARKER,
        &*ANSWER_MARKER,
        &*ANSWER_HEADING,
        &*EXPRESSION_MARKER,
    ];

    let mut seen = HashSet::new();
    let mut expressions = Vec::new();

    for section in sections(text, &EXPRESSION_MARKER, &stops) {
        for item in ITEM_SEPARATOR.split(section.body) {
            let item = item.trim();
            if item.chars().count() <= MAX_NOISE_CHARS {
                continue;
            }
            if seen.insert(item) {
                expressions.push(item.to_string());
            }
        }
    }

    expressions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullets_dashes_and_stars() {
        let text = "Useful Expressions: • on top of that - in my opinion * as a matter of fact";
        assert_eq!(
            extract_expressions(text),
            vec!["on top of that", "in my opinion", "as a matter of fact"]
        );
    }

    #[test]
    fn test_dedup_across_blocks_keeps_first_order() {
        let text = "Useful Expressions: • on top of that • in my opinion\n\
                    Q1: Describe your favorite cafe.\n\
                    유용한 표현: • in my opinion • to be honest\n• on top of that";
        assert_eq!(
            extract_expressions(text),
            vec!["on top of that", "in my opinion", "to be honest"]
        );
    }

    #[test]
    fn test_newlines_split_and_short_items_dropped() {
        let text = "표현: I'd say\nok\n\nwhat's more";
        assert_eq!(extract_expressions(text), vec!["I'd say", "what's more"]);
    }

    #[test]
    fn test_block_stops_at_answer_marker() {
        let text = "Useful Expression: • needless to say Sample Answer 1: It is a long answer.";
        assert_eq!(extract_expressions(text), vec!["needless to say"]);
    }

    #[test]
    fn test_no_block_no_expressions() {
        assert!(extract_expressions("Q1: What is your favorite food?").is_empty());
    }
}
