use regex::{Captures, Regex};

use super::{RuleChecker, RuleError};
use crate::validation::types::{Severity, ValidationResult};

pub const STANDARD_SIDES: [u64; 9] = [2, 3, 4, 6, 8, 10, 12, 20, 100];
pub const MAX_COUNT: u64 = 100;
pub const MAX_MODIFIER: u64 = 50;

/// Sanity checks on `NdM[±K]` rolls.
#[derive(Debug, Clone)]
pub struct DiceChecker {
    roll: Regex,
}

impl DiceChecker {
    pub fn new() -> Self {
        Self {
            roll: Regex::new(r"(?i)([0-9]+)d([0-9]+)(?:([+\-])([0-9]+))?").expect("Invalid dice regex"),
        }
    }
}

impl Default for DiceChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Digit runs too long for `u64` saturate, so they still land above every bound.
fn number(caps: &Captures<'_>, group: usize) -> u64 {
    caps.get(group)
        .map(|m| m.as_str().parse::<u64>().unwrap_or(u64::MAX))
        .unwrap_or_default()
}

impl RuleChecker for DiceChecker {
    fn name(&self) -> &'static str {
        "DiceChecker"
    }

    fn inspect(&self, line: &str) -> Result<Vec<ValidationResult>, RuleError> {
        let mut results = Vec::new();

        for caps in self.roll.captures_iter(line) {
            let count = number(&caps, 1);
            let sides = number(&caps, 2);
            let modifier = number(&caps, 4);
            let roll = &caps[0];

            if count > MAX_COUNT {
                results.push(
                    ValidationResult::new(Severity::Warning, "DICE_COUNT_HIGH", "ダイス数が多すぎます")
                        .with_suggestion("現実的なダイス数に調整してください")
                        .with_original(roll),
                );
            }
            if !STANDARD_SIDES.contains(&sides) {
                results.push(
                    ValidationResult::new(
                        Severity::Info,
                        "DICE_SIDES_UNUSUAL",
                        "一般的でないダイス面数です",
                    )
                    .with_suggestion("標準的なダイス（d6, d10, d100等）の使用を推奨")
                    .with_original(roll),
                );
            }
            if modifier > MAX_MODIFIER {
                results.push(
                    ValidationResult::new(Severity::Warning, "DICE_MODIFIER_HIGH", "修正値が大きすぎます")
                        .with_suggestion("適切な修正値に調整してください")
                        .with_original(roll),
                );
            }
        }

        Ok(results)
    }
}
