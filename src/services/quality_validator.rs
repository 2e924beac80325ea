//! 答案质量检查 - 业务能力层
//!
//! 只报告问题，从不拒绝答案文本。

use crate::models::{QualityIssue, QualityReport};

const MIN_ANSWER_CHARS: usize = 20;
const MAX_ANSWER_CHARS: usize = 5000;
/// 每 50 个字符最多 1 个换行
const CHARS_PER_NEWLINE: usize = 50;

/// 检查一段答案文本
pub fn validate_answer(answer: &str) -> QualityReport {
    let text = answer.trim();
    let length = text.chars().count();
    let mut issues = Vec::new();

    if length < MIN_ANSWER_CHARS {
        issues.push(QualityIssue::TooShort);
    }
    if length > MAX_ANSWER_CHARS {
        issues.push(QualityIssue::AbnormallyLong);
    }
    if !text.ends_with(['.', '!', '?']) {
        issues.push(QualityIssue::LooksIncomplete);
    }
    let newlines = text.matches('\n').count();
    if newlines * CHARS_PER_NEWLINE > length {
        issues.push(QualityIssue::AbnormalLineBreaks);
    }

    QualityReport::from_issues(issues)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_boundary() {
        let nineteen = "a".repeat(18) + ".";
        assert_eq!(nineteen.chars().count(), 19);
        assert!(validate_answer(&nineteen).has(QualityIssue::TooShort));

        let twenty = "a".repeat(19) + ".";
        let report = validate_answer(&twenty);
        assert!(!report.has(QualityIssue::TooShort));
        assert!(!report.has(QualityIssue::AbnormallyLong));
        assert!(report.is_valid);
    }

    #[test]
    fn test_abnormally_long() {
        let text = "a".repeat(5000) + ".";
        let report = validate_answer(&text);
        assert_eq!(report.issues, vec![QualityIssue::AbnormallyLong]);
    }

    #[test]
    fn test_missing_terminal_punctuation() {
        let report = validate_answer("My hometown is small and quiet and");
        assert_eq!(report.issues, vec![QualityIssue::LooksIncomplete]);

        assert!(validate_answer("Do you really like living here?").is_valid);
        assert!(validate_answer("I absolutely love living here!  ").is_valid);
    }

    #[test]
    fn test_line_break_density() {
        // 60 个字符里 2 个换行：超过每 50 字符 1 个
        let dense = format!("{}\n{}\n{}.", "a".repeat(20), "b".repeat(20), "c".repeat(17));
        assert_eq!(dense.chars().count(), 60);
        assert!(validate_answer(&dense).has(QualityIssue::AbnormalLineBreaks));

        // 100 个字符里 2 个换行：恰好在阈值上，不报告
        let sparse = format!("{}\n{}\n{}.", "a".repeat(40), "b".repeat(40), "c".repeat(17));
        assert_eq!(sparse.chars().count(), 100);
        assert!(validate_answer(&sparse).is_valid);
    }

    #[test]
    fn test_multiple_issues_are_ordered() {
        let report = validate_answer("Yes\nno\nmaybe");
        assert_eq!(
            report.issues,
            vec![
                QualityIssue::TooShort,
                QualityIssue::LooksIncomplete,
                QualityIssue::AbnormalLineBreaks,
            ]
        );
        assert!(!report.is_valid);
    }
}
