use super::rules::{DiceChecker, HeadingChecker, RuleChecker, RuleRegistry, VocabularyChecker};
use super::types::{Severity, ValidationConfig, ValidationReport, ValidationResult};
use super::vocabulary::Vocabulary;
use crate::parsing::blocks::kinds::{HashHeading, NumberedHeading};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Unknown rule system: {0}")]
    UnknownRuleSystem(String),
}

/// Runs every registered checker over each non-empty line, then checks the
/// heading structure of the whole document.
#[derive(Debug)]
pub struct ValidationEngine {
    config: ValidationConfig,
    registry: RuleRegistry,
    numbered: NumberedHeading,
}

impl ValidationEngine {
    /// An engine with no checkers registered.
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            config,
            registry: RuleRegistry::new(),
            numbered: NumberedHeading::new(),
        }
    }

    /// Vocabulary, heading and dice checkers, in that order.
    pub fn with_default_checkers(config: ValidationConfig) -> Result<Self, EngineError> {
        let vocabulary = Vocabulary::for_system(&config.rule_system, &config.extra_vocabulary)?;
        let mut engine = Self::new(config);
        let vocabulary_checker = VocabularyChecker::new(vocabulary, &engine.config);
        engine.register(Box::new(vocabulary_checker));
        engine.register(Box::new(HeadingChecker::new()));
        engine.register(Box::new(DiceChecker::new()));
        Ok(engine)
    }

    pub fn register(&mut self, checker: Box<dyn RuleChecker>) {
        self.registry.register(checker);
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    pub fn validate(&self, content: &str) -> ValidationReport {
        let mut report = ValidationReport::new();

        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            report.extend(self.validate_line(line, idx + 1));
        }
        report.extend(self.check_heading_hierarchy(content));

        let summary = report.summary();
        log::debug!(
            "validated {} lines: {} critical, {} warning, {} info, {} suggestion",
            content.lines().count(),
            summary.critical,
            summary.warning,
            summary.info,
            summary.suggestion
        );
        if report.exceeds_warning_threshold(self.config.warning_threshold) {
            log::warn!(
                "{} warnings exceed the threshold of {}",
                summary.warning,
                self.config.warning_threshold
            );
        }
        report
    }

    /// Results of every checker for one line, tagged with `line_number`.
    pub fn validate_line(&self, line: &str, line_number: usize) -> Vec<ValidationResult> {
        let mut results = Vec::new();
        for checker in self.registry.checkers() {
            match checker.inspect(line) {
                Ok(found) => results.extend(found.into_iter().map(|r| r.at_line(line_number))),
                Err(err) => {
                    log::warn!("{} failed on line {}: {}", checker.name(), line_number, err);
                    results.push(
                        ValidationResult::new(
                            Severity::Critical,
                            "VALIDATOR_ERROR",
                            format!("バリデータエラー ({}): {}", checker.name(), err),
                        )
                        .at_line(line_number),
                    );
                }
            }
        }
        results
    }

    /// Flags headings that go more than one level deeper than the previous
    /// heading. The first heading is compared against level 0.
    pub fn check_heading_hierarchy(&self, content: &str) -> Vec<ValidationResult> {
        let mut results = Vec::new();
        let mut prev_level = 0u8;

        for (idx, line) in content.lines().enumerate() {
            let line = line.trim();
            let level = if HashHeading::matches(line) {
                HashHeading::level(line)
            } else if let Some(level) = self.numbered.level(line) {
                level
            } else {
                continue;
            };

            if level > prev_level + 1 {
                results.push(
                    ValidationResult::new(
                        Severity::Warning,
                        "HEADING_HIERARCHY",
                        format!("見出し階層が飛んでいます（レベル{prev_level}の次にレベル{level}）"),
                    )
                    .with_suggestion("段階的な見出し階層を推奨します")
                    .at_line(idx + 1),
                );
            }
            prev_level = level;
        }
        results
    }
}
