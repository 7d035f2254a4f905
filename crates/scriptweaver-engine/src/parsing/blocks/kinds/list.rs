/// `◆term：description` definition lists.
pub struct DefinitionList;

impl DefinitionList {
    pub const MARKER: char = '◆';
    pub const FULLWIDTH_COLON: char = '：';
    pub const COLON: char = ':';

    pub fn matches(text: &str) -> bool {
        marker_lines(text, Self::MARKER) >= 2
    }

    /// Content after the `◆` marker, if the line carries one.
    pub fn item(line: &str) -> Option<&str> {
        line.trim().strip_prefix(Self::MARKER).map(str::trim)
    }

    /// Splits an item on the first full-width colon, falling back to the
    /// first ASCII colon. Items without either are a bare term.
    pub fn split_term(item: &str) -> (&str, Option<&str>) {
        let split = item
            .split_once(Self::FULLWIDTH_COLON)
            .or_else(|| item.split_once(Self::COLON));
        match split {
            Some((term, description)) => {
                let description = description.trim();
                (
                    term.trim(),
                    (!description.is_empty()).then_some(description),
                )
            }
            None => (item.trim(), None),
        }
    }
}

/// `・item` bullet lists.
pub struct BulletList;

impl BulletList {
    pub const MARKER: char = '・';

    pub fn matches(text: &str) -> bool {
        marker_lines(text, Self::MARKER) >= 2
    }

    pub fn item(line: &str) -> Option<&str> {
        line.trim().strip_prefix(Self::MARKER).map(str::trim)
    }
}

fn marker_lines(text: &str, marker: char) -> usize {
    text.lines()
        .filter(|l| l.trim_start().starts_with(marker))
        .count()
}
