/// Pipe-delimited tables.
///
/// The first pipe line seen before any separator line is the header; every
/// later pipe line is a body row. A table without a separator therefore
/// still treats its first row as the header.
pub struct Table;

/// Header and body cells of a table block, untranspiled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRows {
    pub header: Option<Vec<String>>,
    pub body: Vec<Vec<String>>,
}

impl Table {
    pub const PIPE: char = '|';
    pub const SEPARATOR: &'static str = "---";

    /// Two pipe-bearing lines are enough; a separator line is optional.
    pub fn matches(text: &str) -> bool {
        text.lines().filter(|l| l.contains(Self::PIPE)).count() >= 2
    }

    pub fn is_separator(line: &str) -> bool {
        line.contains(Self::SEPARATOR)
    }

    /// Splits a row on `|`, trimming cells and discarding the empty cells
    /// produced by leading and trailing pipes.
    pub fn split_cells(line: &str) -> Vec<String> {
        let mut cells: Vec<&str> = line.split(Self::PIPE).map(str::trim).collect();
        if cells.first().is_some_and(|c| c.is_empty()) {
            cells.remove(0);
        }
        if cells.last().is_some_and(|c| c.is_empty()) {
            cells.pop();
        }
        cells.into_iter().map(str::to_string).collect()
    }

    pub fn rows(text: &str) -> TableRows {
        let mut rows = TableRows::default();
        let mut separator_seen = false;

        for line in text.lines() {
            if Self::is_separator(line) {
                separator_seen = true;
                continue;
            }
            if !line.contains(Self::PIPE) {
                continue;
            }
            let cells = Self::split_cells(line);
            if !separator_seen && rows.header.is_none() {
                rows.header = Some(cells);
            } else {
                rows.body.push(cells);
            }
        }

        rows
    }
}
