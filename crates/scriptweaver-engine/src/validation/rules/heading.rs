use regex::Regex;

use super::{RuleChecker, RuleError};
use crate::parsing::blocks::kinds::HashHeading;
use crate::validation::types::{Severity, ValidationResult};

pub const MAX_TEXT_CHARS: usize = 100;

/// Checks single heading lines. Level skips across lines are a document
/// check, see [`crate::validation::ValidationEngine`].
#[derive(Debug, Clone)]
pub struct HeadingChecker {
    too_deep: Regex,
}

impl HeadingChecker {
    pub fn new() -> Self {
        Self {
            too_deep: Regex::new(r"^\d+(?:-\d+){3,}").expect("Invalid heading depth regex"),
        }
    }
}

impl Default for HeadingChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleChecker for HeadingChecker {
    fn name(&self) -> &'static str {
        "HeadingChecker"
    }

    fn inspect(&self, line: &str) -> Result<Vec<ValidationResult>, RuleError> {
        let line = line.trim();
        let mut results = Vec::new();

        if HashHeading::matches(line) {
            let text = HashHeading::text(line);
            if text.is_empty() {
                results.push(
                    ValidationResult::new(Severity::Critical, "HEADING_EMPTY", "見出しが空です")
                        .with_suggestion("見出しテキストを追加してください"),
                );
            } else if text.chars().count() > MAX_TEXT_CHARS {
                results.push(
                    ValidationResult::new(
                        Severity::Warning,
                        "HEADING_TOO_LONG",
                        "見出しが長すぎます（100文字以内推奨）",
                    )
                    .with_suggestion("簡潔な見出しに修正することを推奨します"),
                );
            }
        } else if self.too_deep.is_match(line) {
            results.push(
                ValidationResult::new(
                    Severity::Info,
                    "HEADING_TOO_DEEP",
                    "見出し階層が深すぎます（3階層まで推奨）",
                )
                .with_suggestion("構造を見直すことを検討してください"),
            );
        }

        Ok(results)
    }
}
