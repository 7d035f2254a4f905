use regex::Regex;

/// `#`-prefixed headings. Level is the run length of `#`, capped at six.
pub struct HashHeading;

impl HashHeading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    pub fn matches(text: &str) -> bool {
        text.starts_with(Self::MARKER)
    }

    /// Number of leading `#` characters, uncapped.
    pub fn marker_len(text: &str) -> usize {
        text.chars().take_while(|&c| c == Self::MARKER).count()
    }

    /// Heading level clamped to `1..=6`.
    pub fn level(text: &str) -> u8 {
        let len = Self::marker_len(text).min(Self::MAX_LEVEL as usize);
        len.max(1) as u8
    }

    /// The heading text with the `#` run and surrounding whitespace removed.
    pub fn text(text: &str) -> &str {
        text.trim_start_matches(Self::MARKER).trim()
    }
}

/// Numbered headings such as `1.`, `2-1.概要` or `3-2-1. 詳細`.
///
/// One numeric segment is level 1, two segments level 2, three level 3.
/// Deeper paths (`1-2-3-4.`) are not headings.
#[derive(Debug, Clone)]
pub struct NumberedHeading {
    pattern: Regex,
}

impl NumberedHeading {
    pub const SEGMENT_SEPARATOR: char = '-';

    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"^(\d+(?:-\d+){0,2})\.").expect("Invalid numbered heading regex"),
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// The numeric path (`2-1`) when `text` is a numbered heading.
    pub fn number_path<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    pub fn level(&self, text: &str) -> Option<u8> {
        self.number_path(text)
            .map(|path| path.split(Self::SEGMENT_SEPARATOR).count() as u8)
    }
}

impl Default for NumberedHeading {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# タイトル", 1)]
    #[case("### 小見出し", 3)]
    #[case("####### 見出し7", 6)]
    fn hash_heading_level(#[case] text: &str, #[case] expected: u8) {
        assert!(HashHeading::matches(text));
        assert_eq!(HashHeading::level(text), expected);
    }

    #[test]
    fn hash_heading_text_is_trimmed() {
        assert_eq!(HashHeading::text("##   導入  "), "導入");
        assert_eq!(HashHeading::text("###"), "");
    }

    #[rstest]
    #[case("1.", Some(1))]
    #[case("1. 概要", Some(1))]
    #[case("12.導入", Some(1))]
    #[case("2-1. 主要NPCについて", Some(2))]
    #[case("2-1.主要NPC", Some(2))]
    #[case("3-2-1.", Some(3))]
    #[case("3-2-1. 詳細", Some(3))]
    #[case("1-2-3-4. 深すぎる", None)]
    #[case("1 概要", None)]
    #[case("第1章", None)]
    #[case("-1. 負数", None)]
    fn numbered_heading_level(#[case] text: &str, #[case] expected: Option<u8>) {
        let heading = NumberedHeading::new();
        assert_eq!(heading.level(text), expected);
        assert_eq!(heading.matches(text), expected.is_some());
    }

    #[test]
    fn numbered_heading_number_path() {
        let heading = NumberedHeading::new();
        assert_eq!(heading.number_path("2-1. 主要NPC"), Some("2-1"));
        assert_eq!(heading.number_path("本文"), None);
    }
}
