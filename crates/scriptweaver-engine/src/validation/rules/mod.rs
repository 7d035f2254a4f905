//! Line-level rule checkers.
//!
//! Each checker sees one non-empty line at a time and returns its
//! diagnostics. The engine attaches the line number, so checkers only
//! describe what they found.

pub mod dice;
pub mod heading;
pub mod vocabulary;

pub use dice::DiceChecker;
pub use heading::HeadingChecker;
pub use vocabulary::VocabularyChecker;

use super::types::ValidationResult;

/// Internal failure of a checker. Recorded as a critical result by the
/// engine; the run continues.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("invalid number: {token}")]
    InvalidNumber { token: String },
}

pub trait RuleChecker: Send + Sync {
    fn name(&self) -> &'static str;

    fn inspect(&self, line: &str) -> Result<Vec<ValidationResult>, RuleError>;
}

/// Checkers in registration order.
#[derive(Default)]
pub struct RuleRegistry {
    checkers: Vec<Box<dyn RuleChecker>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, checker: Box<dyn RuleChecker>) {
        self.checkers.push(checker);
    }

    pub fn checkers(&self) -> &[Box<dyn RuleChecker>] {
        &self.checkers
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.checkers.iter().map(|c| c.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
