/// Section dividers: a line starting with three or more `=` or `-`.
pub struct SectionDivider;

impl SectionDivider {
    pub const EQUALS: &'static str = "===";
    pub const DASHES: &'static str = "---";

    pub fn is_divider_line(line: &str) -> bool {
        let t = line.trim();
        t.starts_with(Self::EQUALS) || t.starts_with(Self::DASHES)
    }

    /// A block is a divider block when any of its lines is a divider.
    pub fn matches(text: &str) -> bool {
        text.lines().any(Self::is_divider_line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_equals_and_dashes() {
        assert!(SectionDivider::is_divider_line("==="));
        assert!(SectionDivider::is_divider_line("----------"));
        assert!(SectionDivider::is_divider_line("=====  第二部"));
    }

    #[test]
    fn short_runs_are_not_dividers() {
        assert!(!SectionDivider::is_divider_line("=="));
        assert!(!SectionDivider::is_divider_line("--"));
        assert!(!SectionDivider::is_divider_line("a ---"));
    }

    #[test]
    fn any_line_makes_a_divider_block() {
        assert!(SectionDivider::matches("前置き\n---\n後書き"));
        assert!(!SectionDivider::matches("前置き\n後書き"));
    }
}
