//! ScriptWeaver engine: converts tabletop RPG scenario text into HTML and
//! checks its notation.

pub mod convert;
pub mod headings;
pub mod io;
pub mod notation;
pub mod parsing;
pub mod render;
pub mod validation;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use convert::{ConvertError, ConvertOptions, ScenarioConverter};
pub use headings::{Heading, HeadingOrigin, HeadingRegistry, heading_id};
pub use io::{IoError, SourceFormat, read_source, write_output};
pub use notation::NotationTranspiler;
pub use parsing::{DocumentParser, ParsedDoc, parse_document};
pub use render::{RenderOptions, Renderer};
pub use validation::{
    FixOutcome, Severity, ValidationConfig, ValidationEngine, ValidationReport, ValidationResult,
    apply_fixes,
};
