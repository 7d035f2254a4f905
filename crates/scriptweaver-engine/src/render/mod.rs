//! # Rendering
//!
//! Turns a parsed document into HTML: one fragment per block, a nested table
//! of contents, an optional validation report and the document wrapper.
//!
//! Body order: validation report, table of contents, blocks.

pub mod blocks;
pub mod document;
pub mod report;
pub mod toc;

pub use document::wrap_document;
pub use report::{render_report, render_report_text};
pub use toc::render_toc;

use crate::headings::HeadingRegistry;
use crate::notation::NotationTranspiler;
use crate::parsing::ParsedDoc;
use crate::parsing::blocks::kinds::{Dialogue, NpcStatus};
use crate::validation::ValidationReport;

pub(crate) const INDENT: &str = "    ";

pub const DEFAULT_TITLE: &str = "TRPGシナリオ";
pub const DEFAULT_TOC_TITLE: &str = "目次";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub title: String,
    pub toc_title: String,
    pub include_toc: bool,
    /// Inserted verbatim into `<style>`.
    pub stylesheet: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            toc_title: DEFAULT_TOC_TITLE.to_string(),
            include_toc: true,
            stylesheet: String::new(),
        }
    }
}

/// Block renderer with its pattern tables compiled once.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    transpiler: NotationTranspiler,
    npc: NpcStatus,
    dialogue: Dialogue,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_body(
        &self,
        doc: &ParsedDoc,
        headings: &HeadingRegistry,
        report: Option<&ValidationReport>,
        options: &RenderOptions,
    ) -> String {
        let mut parts = Vec::new();

        if let Some(report) = report {
            let html = render_report(report);
            if !html.is_empty() {
                parts.push(html);
            }
        }
        if options.include_toc && !headings.is_empty() {
            parts.push(render_toc(headings.headings(), &options.toc_title));
        }
        parts.extend(
            doc.blocks
                .iter()
                .enumerate()
                .map(|(idx, block)| self.render_block(block, headings.for_block(idx))),
        );

        parts.join("\n")
    }

    pub fn render_document(
        &self,
        doc: &ParsedDoc,
        headings: &HeadingRegistry,
        report: Option<&ValidationReport>,
        options: &RenderOptions,
    ) -> String {
        let body = self.render_body(doc, headings, report, options);
        log::debug!("rendered {} blocks", doc.blocks.len());
        wrap_document(&body, &options.title, &options.stylesheet)
    }
}
