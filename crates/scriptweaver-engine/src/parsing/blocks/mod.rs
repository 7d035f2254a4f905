//! # Block Classification
//!
//! Segmented blocks are classified into one [`BlockKind`] each.
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `BlockNode`, `BlockKind`)
//! - **`kinds`**: Per-kind markers and predicates (headings, dividers, tables,
//!   lists, NPC blocks, dialogue)
//! - **`classify`**: `BlockClassifier` applying the kinds in precedence order
//!
//! ## Key Invariants
//!
//! - Classification is total: every block gets exactly one kind
//! - Precedence is fixed; `Paragraph` is the fallback, never an error

pub mod classify;
pub mod kinds;
pub mod types;

pub use classify::BlockClassifier;
pub use types::{Block, BlockKind, BlockNode};
