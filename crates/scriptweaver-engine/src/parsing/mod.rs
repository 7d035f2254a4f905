pub mod blocks;
pub mod segment;
pub mod span;

#[cfg(test)]
mod tests;

use blocks::{BlockClassifier, BlockNode};
use segment::Segmenter;

#[derive(Debug, Clone, Default)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

/// Segmenter and classifier with their pattern tables compiled once.
///
/// Build one and reuse it across documents.
#[derive(Debug, Clone, Default)]
pub struct DocumentParser {
    segmenter: Segmenter,
    classifier: BlockClassifier,
}

impl DocumentParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(&self, text: &str) -> ParsedDoc {
        let blocks = self
            .segmenter
            .segment(text)
            .into_iter()
            .map(|b| BlockNode {
                kind: self.classifier.classify(&b.text),
                text: b.text,
                lines: b.lines,
            })
            .collect::<Vec<_>>();

        log::debug!("parsed {} blocks", blocks.len());
        ParsedDoc { blocks }
    }
}

/// Convenience: parse with a throwaway [`DocumentParser`].
pub fn parse_document(text: &str) -> ParsedDoc {
    DocumentParser::new().parse(text)
}
