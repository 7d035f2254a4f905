//! # Heading Registry
//!
//! Collects headings in document order and assigns each an anchor id used
//! by the rendered heading element and the table of contents.
//!
//! Id derivation:
//!
//! 1. drop everything except word characters, whitespace and `-`; collapse
//!    whitespace/hyphen runs to one `-`; trim `-`; lowercase ASCII
//! 2. a leading numeric path wins: `2-1. 主要NPC` → `heading-2-1`
//! 3. no ASCII alphanumerics left: `heading-` + first 8 hex chars of the
//!    SHA-256 of the original heading text
//! 4. otherwise `heading-` + the cleaned text
//!
//! There is no second dedup pass; two headings that clean to the same
//! text share an id.

use std::collections::HashMap;

use regex::Regex;
use sha2::{Digest, Sha256};

use crate::parsing::blocks::{BlockKind, BlockNode, kinds::HashHeading};

pub const ID_PREFIX: &str = "heading-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingOrigin {
    Hash,
    Numbered,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Display text. Numbered headings keep their number.
    pub text: String,
    pub level: u8,
    pub id: String,
    pub origin: HeadingOrigin,
    /// Index of the owning block in the parsed document.
    pub block_index: usize,
}

/// Derives heading ids, memoising per text for the lifetime of one registry.
#[derive(Debug, Clone)]
pub struct HeadingIds {
    disallowed: Regex,
    separators: Regex,
    numeric_path: Regex,
    cache: HashMap<String, String>,
}

impl HeadingIds {
    pub fn new() -> Self {
        Self {
            disallowed: Regex::new(r"[^\w\s-]").expect("Invalid heading id regex"),
            separators: Regex::new(r"[-\s]+").expect("Invalid heading id regex"),
            numeric_path: Regex::new(r"^\d+(?:-\d+)*").expect("Invalid heading id regex"),
            cache: HashMap::new(),
        }
    }

    pub fn derive(&mut self, text: &str) -> String {
        if let Some(id) = self.cache.get(text) {
            return id.clone();
        }
        let id = self.compute(text);
        self.cache.insert(text.to_string(), id.clone());
        id
    }

    fn compute(&self, text: &str) -> String {
        let stripped = self.disallowed.replace_all(text, "");
        let collapsed = self.separators.replace_all(&stripped, "-");
        let cleaned = collapsed.trim_matches('-').to_ascii_lowercase();

        if let Some(path) = self.numeric_path.find(&cleaned) {
            return format!("{ID_PREFIX}{}", path.as_str());
        }
        if !cleaned.chars().any(|c| c.is_ascii_alphanumeric()) {
            return format!("{ID_PREFIX}{}", short_hash(text));
        }
        format!("{ID_PREFIX}{cleaned}")
    }
}

impl Default for HeadingIds {
    fn default() -> Self {
        Self::new()
    }
}

/// First 8 hex characters of the SHA-256 of `text`.
fn short_hash(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    digest[..4].iter().map(|b| format!("{b:02x}")).collect()
}

/// Convenience: derive one id without keeping a registry around.
pub fn heading_id(text: &str) -> String {
    HeadingIds::new().derive(text)
}

#[derive(Debug, Clone, Default)]
pub struct HeadingRegistry {
    headings: Vec<Heading>,
    by_block: HashMap<usize, usize>,
}

impl HeadingRegistry {
    /// Collects every heading block in order.
    pub fn collect(blocks: &[BlockNode]) -> Self {
        let mut ids = HeadingIds::new();
        let mut registry = Self::default();

        for (block_index, block) in blocks.iter().enumerate() {
            let (text, level, origin) = match block.kind {
                BlockKind::HashHeading { level } => (
                    HashHeading::text(&block.text).to_string(),
                    level,
                    HeadingOrigin::Hash,
                ),
                BlockKind::NumberedHeading { level } => {
                    (block.text.trim().to_string(), level, HeadingOrigin::Numbered)
                }
                _ => continue,
            };
            let id = ids.derive(&text);
            registry
                .by_block
                .insert(block_index, registry.headings.len());
            registry.headings.push(Heading {
                text,
                level,
                id,
                origin,
                block_index,
            });
        }

        log::debug!("collected {} headings", registry.headings.len());
        registry
    }

    pub fn headings(&self) -> &[Heading] {
        &self.headings
    }

    pub fn for_block(&self, block_index: usize) -> Option<&Heading> {
        self.by_block
            .get(&block_index)
            .and_then(|&i| self.headings.get(i))
    }

    pub fn len(&self) -> usize {
        self.headings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_document;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    #[case("1. 概要", "heading-1")]
    #[case("2-1. 主要NPCについて", "heading-2-1")]
    #[case("3-2-1.詳細", "heading-3-2-1")]
    #[case("Introduction", "heading-introduction")]
    #[case("Act 1: The Manor!", "heading-act-1-the-manor")]
    #[case("  --Spaced   Out--  ", "heading-spaced-out")]
    #[case("snake_case title", "heading-snake_case-title")]
    fn derives_ids(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(heading_id(text), expected);
    }

    #[test]
    fn non_latin_titles_fall_back_to_hash() {
        let id = heading_id("導入");
        assert!(id.starts_with(ID_PREFIX));
        let hash = &id[ID_PREFIX.len()..];
        assert_eq!(hash.len(), 8);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(id, heading_id("導入"));
    }

    #[test]
    fn hash_fallback_keeps_distinct_titles_apart() {
        let doc = parse_document("# 導入\n\n本文\n\n# 結末\n\n## 後日談\n\n# 真相");
        let registry = HeadingRegistry::collect(&doc.blocks);

        let ids: HashSet<_> = registry.headings().iter().map(|h| h.id.as_str()).collect();
        assert_eq!(registry.len(), 4);
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn mixed_script_collision_is_not_deduplicated() {
        // Punctuation is stripped before the slug is built and no dedup
        // pass follows, so these two share an id.
        assert_eq!(heading_id("NPC!"), heading_id("NPC?"));
    }

    #[test]
    fn collects_levels_text_and_origin() {
        let doc = parse_document("# シナリオ\n\n1. 概要\n\n本文\n\n2-1. 主要NPCについて");
        let registry = HeadingRegistry::collect(&doc.blocks);
        let h = registry.headings();

        assert_eq!(h.len(), 3);
        assert_eq!(
            (h[0].text.as_str(), h[0].level, h[0].origin),
            ("シナリオ", 1, HeadingOrigin::Hash)
        );
        assert_eq!(
            (h[1].text.as_str(), h[1].level, h[1].origin),
            ("1. 概要", 1, HeadingOrigin::Numbered)
        );
        assert_eq!(h[2].level, 2);
        assert_eq!(h[2].id, "heading-2-1");
        assert_eq!(registry.for_block(2).map(|h| h.text.as_str()), None);
        assert_eq!(registry.for_block(3).map(|h| h.id.as_str()), Some("heading-2-1"));
    }

    #[test]
    fn ids_are_memoised_per_registry() {
        let mut ids = HeadingIds::new();
        let first = ids.derive("導入");
        assert_eq!(ids.cache.len(), 1);
        assert_eq!(ids.derive("導入"), first);
        assert_eq!(ids.cache.len(), 1);
    }
}
