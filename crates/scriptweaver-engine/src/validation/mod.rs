//! # Validation
//!
//! Scans raw scenario text independently of rendering and produces a
//! [`ValidationReport`]. Line checks run through the [`RuleChecker`]s held
//! by a [`ValidationEngine`]; the heading hierarchy is checked once per
//! document.
//!
//! ```text
//! text ──lines──▶ VocabularyChecker ─┐
//!               ▶ HeadingChecker    ─┼─▶ ValidationReport
//!               ▶ DiceChecker       ─┤
//!      ──whole──▶ heading hierarchy ─┘
//! ```

pub mod distance;
pub mod engine;
pub mod fixer;
pub mod rules;
pub mod types;
pub mod vocabulary;

pub use engine::{EngineError, ValidationEngine};
pub use fixer::{FixOutcome, apply_fixes};
pub use rules::{RuleChecker, RuleError, RuleRegistry};
pub use types::{Severity, Summary, ValidationConfig, ValidationReport, ValidationResult};
pub use vocabulary::Vocabulary;
