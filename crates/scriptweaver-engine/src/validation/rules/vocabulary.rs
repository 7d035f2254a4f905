use regex::Regex;

use super::{RuleChecker, RuleError};
use crate::validation::distance::closest;
use crate::validation::types::{Severity, ValidationConfig, ValidationResult};
use crate::validation::vocabulary::Vocabulary;

pub const CODE: &str = "SKILL_UNKNOWN";
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// Flags `【name】` skill references whose name is not in the vocabulary.
#[derive(Debug, Clone)]
pub struct VocabularyChecker {
    vocabulary: Vocabulary,
    strict: bool,
    reference: Regex,
    modifier: Regex,
    alternative: Regex,
}

impl VocabularyChecker {
    pub fn new(vocabulary: Vocabulary, config: &ValidationConfig) -> Self {
        Self {
            vocabulary,
            strict: config.strict_mode,
            reference: Regex::new(r"【([^】]+)】").expect("Invalid skill reference regex"),
            modifier: Regex::new(r"[+\-]\d+$").expect("Invalid skill modifier regex"),
            alternative: Regex::new(r"or.+$").expect("Invalid skill alternative regex"),
        }
    }

    /// `目星+20` and `目星or聞き耳` both reduce to `目星`.
    pub fn base_name(&self, name: &str) -> String {
        let without_modifier = self.modifier.replace(name, "");
        self.alternative.replace(&without_modifier, "").into_owned()
    }

    pub fn suggest(&self, base: &str) -> Option<&str> {
        closest(base, self.vocabulary.iter(), MAX_SUGGESTION_DISTANCE)
    }
}

impl RuleChecker for VocabularyChecker {
    fn name(&self) -> &'static str {
        "VocabularyChecker"
    }

    fn inspect(&self, line: &str) -> Result<Vec<ValidationResult>, RuleError> {
        let level = if self.strict {
            Severity::Warning
        } else {
            Severity::Suggestion
        };

        let mut results = Vec::new();
        for caps in self.reference.captures_iter(line) {
            let name = &caps[1];
            let base = self.base_name(name);
            if self.vocabulary.contains(&base) {
                continue;
            }

            let result = ValidationResult::new(level, CODE, format!("未知の技能名です: {name}"))
                .with_original(&caps[0]);
            let result = match self.suggest(&base) {
                Some(known) => result
                    .with_suggestion(format!("【{known}】でしょうか？"))
                    .with_fix(format!("【{known}】")),
                None => result.with_suggestion("標準技能名を確認してください"),
            };
            results.push(result);
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::vocabulary::COC6_SKILLS;
    use rstest::rstest;

    fn checker(config: &ValidationConfig) -> VocabularyChecker {
        VocabularyChecker::new(
            Vocabulary::new(COC6_SKILLS, &config.extra_vocabulary),
            config,
        )
    }

    #[test]
    fn near_miss_gets_a_proposed_fix() {
        // Given a misspelled skill
        let c = checker(&ValidationConfig::default());

        // When inspecting the line
        let results = c.inspect("【目だま】判定で何かを見つける").unwrap();

        // Then exactly one suggestion proposes the closest skill
        assert_eq!(results.len(), 1);
        let r = &results[0];
        assert_eq!(r.level, Severity::Suggestion);
        assert_eq!(r.code.as_deref(), Some(CODE));
        assert_eq!(r.original_text.as_deref(), Some("【目だま】"));
        assert_eq!(r.proposed_fix.as_deref(), Some("【目星】"));
        assert_eq!(r.suggestion.as_deref(), Some("【目星】でしょうか？"));
    }

    #[test]
    fn strict_mode_raises_to_warning() {
        let config = ValidationConfig {
            strict_mode: true,
            ..Default::default()
        };
        let results = checker(&config).inspect("【目だま】").unwrap();
        assert_eq!(results[0].level, Severity::Warning);
    }

    #[test]
    fn far_miss_gets_generic_advice_and_no_fix() {
        let results = checker(&ValidationConfig::default())
            .inspect("【量子力学的な観測】")
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].proposed_fix, None);
        assert_eq!(
            results[0].suggestion.as_deref(),
            Some("標準技能名を確認してください")
        );
    }

    #[rstest]
    #[case("【目星】")]
    #[case("【目星+20】")]
    #[case("【聞き耳-10】")]
    #[case("【目星or聞き耳】")]
    #[case("【図書館】と【説得】")]
    fn known_names_pass(#[case] line: &str) {
        assert!(checker(&ValidationConfig::default()).inspect(line).unwrap().is_empty());
    }

    #[test]
    fn extra_vocabulary_is_accepted() {
        let config = ValidationConfig {
            extra_vocabulary: vec!["魔術".to_string()],
            ..Default::default()
        };
        assert!(checker(&config).inspect("【魔術】").unwrap().is_empty());
    }

    #[test]
    fn each_unknown_reference_is_reported() {
        let results = checker(&ValidationConfig::default())
            .inspect("【目だま】のあと【きき耳】")
            .unwrap();
        let fixes: Vec<_> = results.iter().map(|r| r.proposed_fix.as_deref()).collect();
        assert_eq!(fixes, vec![Some("【目星】"), Some("【聞き耳】")]);
    }
}
