//! # Notation Transpiler
//!
//! Rewrites inline scenario notations into marked spans:
//!
//! | notation | example | class |
//! |----------|---------|-------|
//! | sanity loss | `SANc1/1d6` | `coc-san` |
//! | dice | `1d4+1` | `coc-dice` |
//! | skill | `【目星】` | `coc-skill` |
//! | item | `『古びた日記』` | `coc-item` |
//!
//! Text is HTML-escaped once, before any pass, so injected tags are never
//! escaped and the CJK bracket glyphs stay intact as anchors. Passes run in
//! the order above. Each pass only looks at text outside spans it must not
//! re-enter, which keeps `SANc0/1d3` from also being wrapped as dice and
//! makes re-wrapping output a no-op. Bracketed notations may enclose spans
//! from earlier passes, so `【こぶし1d3】` becomes a skill span holding a
//! dice span.

use std::borrow::Cow;

use regex::{Captures, Regex};

/// Any span with no nested markup.
const LEAF_SPAN: &str = r#"<span class="coc-(?:san|dice|skill|item)">[^<]*</span>"#;
/// A sanity or dice span, the only spans a skill may enclose.
const NUMERIC_SPAN: &str = r#"<span class="coc-(?:san|dice)">[^<]*</span>"#;
const SKILL_SPAN: &str =
    r#"<span class="coc-skill">(?:[^<]|<span class="coc-(?:san|dice)">[^<]*</span>)*</span>"#;
const ITEM_SPAN: &str = concat!(
    r#"<span class="coc-item">(?:[^<]|<span class="coc-(?:san|dice)">[^<]*</span>"#,
    r#"|<span class="coc-skill">(?:[^<]|<span class="coc-(?:san|dice)">[^<]*</span>)*</span>)*</span>"#,
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    Sanity,
    Dice,
    Skill,
    Item,
}

impl Notation {
    /// Pass order.
    pub const ALL: [Notation; 4] = [
        Notation::Sanity,
        Notation::Dice,
        Notation::Skill,
        Notation::Item,
    ];

    pub fn class(self) -> &'static str {
        match self {
            Notation::Sanity => "coc-san",
            Notation::Dice => "coc-dice",
            Notation::Skill => "coc-skill",
            Notation::Item => "coc-item",
        }
    }

    fn pattern(self) -> String {
        match self {
            Notation::Sanity => r"SANc?\d+/\d+(?:d\d+)?(?:[+\-]\d+)?".to_string(),
            Notation::Dice => r"\d+[dD]\d+(?:[+\-]\d+)?".to_string(),
            Notation::Skill => format!("【(?:[^】<]|{NUMERIC_SPAN})+】"),
            Notation::Item => format!("『(?:[^』<]|{NUMERIC_SPAN}|{SKILL_SPAN})+』"),
        }
    }

    /// Spans this pass leaves untouched.
    fn skip(self) -> String {
        match self {
            Notation::Sanity | Notation::Dice => LEAF_SPAN.to_string(),
            Notation::Skill => format!("{SKILL_SPAN}|{ITEM_SPAN}"),
            Notation::Item => ITEM_SPAN.to_string(),
        }
    }

    pub fn wrap(self, text: &str) -> String {
        format!(r#"<span class="{}">{}</span>"#, self.class(), text)
    }
}

/// HTML-escapes `&`, `<`, `>`, `"` and `'`.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

#[derive(Debug, Clone)]
struct Pass {
    notation: Notation,
    pattern: Regex,
    skip: Regex,
}

#[derive(Debug, Clone)]
pub struct NotationTranspiler {
    passes: Vec<Pass>,
}

impl NotationTranspiler {
    pub fn new() -> Self {
        let passes = Notation::ALL
            .iter()
            .map(|&notation| Pass {
                notation,
                pattern: Regex::new(&notation.pattern()).expect("Invalid notation regex"),
                skip: Regex::new(&notation.skip()).expect("Invalid emitted span regex"),
            })
            .collect();
        Self { passes }
    }

    /// Escapes `text` and wraps every notation it contains.
    pub fn transpile(&self, text: &str) -> String {
        self.wrap(&escape_html(text))
    }

    /// Runs the wrapping passes over already-escaped text.
    pub fn wrap(&self, escaped: &str) -> String {
        let mut out = escaped.to_string();
        for pass in &self.passes {
            out = pass.apply(&out);
        }
        out
    }
}

impl Pass {
    fn apply(&self, text: &str) -> String {
        let wrap_gap = |gap: &str| -> String {
            self.pattern
                .replace_all(gap, |caps: &Captures<'_>| self.notation.wrap(&caps[0]))
                .into_owned()
        };

        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for zone in self.skip.find_iter(text) {
            out.push_str(&wrap_gap(&text[last..zone.start()]));
            out.push_str(zone.as_str());
            last = zone.end();
        }
        out.push_str(&wrap_gap(&text[last..]));
        out
    }
}

impl Default for NotationTranspiler {
    fn default() -> Self {
        Self::new()
    }
}
