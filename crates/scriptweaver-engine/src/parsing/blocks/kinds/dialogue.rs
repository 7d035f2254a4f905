use regex::Regex;

/// Blocks carrying `「…」` quoted speech.
#[derive(Debug, Clone)]
pub struct Dialogue {
    quote: Regex,
}

impl Dialogue {
    pub const OPEN: char = '「';
    pub const CLOSE: char = '」';
    pub const SPAN_CLASS: &'static str = "dialogue";

    pub fn new() -> Self {
        Self {
            quote: Regex::new(r"「[^」]+」").expect("Invalid dialogue regex"),
        }
    }

    pub fn matches(text: &str) -> bool {
        text.contains(Self::OPEN) && text.contains(Self::CLOSE)
    }

    /// Wraps every closed quotation in a dialogue span, glyphs included.
    pub fn emphasize(&self, text: &str) -> String {
        self.quote
            .replace_all(text, |caps: &regex::Captures<'_>| {
                format!(r#"<span class="{}">{}</span>"#, Self::SPAN_CLASS, &caps[0])
            })
            .into_owned()
    }
}

impl Default for Dialogue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needs_both_glyphs() {
        assert!(Dialogue::matches("彼は「こんにちは」と言った。"));
        assert!(!Dialogue::matches("彼は「こんにちは"));
    }

    #[test]
    fn emphasize_wraps_each_quote() {
        let d = Dialogue::new();
        assert_eq!(
            d.emphasize("「はい」と「いいえ」"),
            r#"<span class="dialogue">「はい」</span>と<span class="dialogue">「いいえ」</span>"#
        );
    }

    #[test]
    fn empty_quotes_are_left_alone() {
        let d = Dialogue::new();
        assert_eq!(d.emphasize("「」"), "「」");
    }
}
