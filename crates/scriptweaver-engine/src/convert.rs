//! # Conversion
//!
//! [`ScenarioConverter`] runs the whole pipeline for one document:
//! parse, collect headings, optionally validate, render. The parser, the
//! renderer and the validation engine are built once and reused.

use std::path::{Path, PathBuf};

use crate::headings::HeadingRegistry;
use crate::io::{self, IoError};
use crate::parsing::DocumentParser;
use crate::render::{RenderOptions, Renderer};
use crate::validation::{EngineError, ValidationConfig, ValidationEngine, ValidationReport};

pub const DEFAULT_OUTPUT_EXTENSION: &str = "html";

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("Strict mode: {critical} critical issue(s) found, output not written")]
    StrictModeRefusal { critical: usize },
    #[error("Validation is not enabled")]
    ValidationDisabled,
}

#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub render: RenderOptions,
    /// `None` disables validation.
    pub validation: Option<ValidationConfig>,
    /// Replaces the input extension when no output path is given.
    /// Defaults to `html`.
    pub output_extension: Option<String>,
}

#[derive(Debug)]
pub struct ScenarioConverter {
    options: ConvertOptions,
    parser: DocumentParser,
    renderer: Renderer,
    validator: Option<ValidationEngine>,
}

impl ScenarioConverter {
    pub fn new(options: ConvertOptions) -> Result<Self, ConvertError> {
        let validator = options
            .validation
            .clone()
            .map(ValidationEngine::with_default_checkers)
            .transpose()?;
        Ok(Self {
            options,
            parser: DocumentParser::new(),
            renderer: Renderer::new(),
            validator,
        })
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    pub fn validation_enabled(&self) -> bool {
        self.validator.is_some()
    }

    pub fn supported_extensions(&self) -> Vec<&'static str> {
        io::supported_extensions()
    }

    pub fn validate_text(&self, content: &str) -> Result<ValidationReport, ConvertError> {
        let engine = self
            .validator
            .as_ref()
            .ok_or(ConvertError::ValidationDisabled)?;
        Ok(engine.validate(content))
    }

    /// Renders `content` as a complete HTML document.
    ///
    /// With `include_report` and validation enabled the report is embedded
    /// at the top of the body. A strict validator always runs, and a report
    /// with critical results refuses the conversion.
    pub fn convert_text(&self, content: &str, include_report: bool) -> Result<String, ConvertError> {
        let report = match &self.validator {
            Some(engine) if include_report || engine.config().strict_mode => {
                let report = engine.validate(content);
                if engine.config().strict_mode && report.has_errors() {
                    return Err(ConvertError::StrictModeRefusal {
                        critical: report.summary().critical,
                    });
                }
                include_report.then_some(report)
            }
            _ => None,
        };

        let doc = self.parser.parse(content);
        let headings = HeadingRegistry::collect(&doc.blocks);
        Ok(self
            .renderer
            .render_document(&doc, &headings, report.as_ref(), &self.options.render))
    }

    /// Output path for `input` when none is given explicitly.
    pub fn default_output_path(&self, input: &Path) -> PathBuf {
        let ext = self
            .options
            .output_extension
            .as_deref()
            .map(|e| e.trim_start_matches('.'))
            .unwrap_or(DEFAULT_OUTPUT_EXTENSION);
        input.with_extension(ext)
    }

    /// Converts `input` and writes the result, returning the written path.
    pub fn convert_file(
        &self,
        input: &Path,
        output: Option<&Path>,
        include_report: bool,
    ) -> Result<PathBuf, ConvertError> {
        let content = io::read_source(input)?;
        let html = self.convert_text(&content, include_report)?;
        let output = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.default_output_path(input));

        io::write_output(&output, &html)?;
        log::info!("{} -> {}", input.display(), output.display());
        Ok(output)
    }
}
