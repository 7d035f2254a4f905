use super::types::ValidationReport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutcome {
    pub content: String,
    pub applied: usize,
}

/// Applies every proposed fix in `report` to `content`.
///
/// Each fix replaces the first remaining occurrence of its `original_text`
/// on its own line. Results without a line number, original text or fix
/// are skipped, as are fixes whose original text is no longer on the line.
pub fn apply_fixes(content: &str, report: &ValidationReport) -> FixOutcome {
    let mut lines: Vec<String> = content.split('\n').map(str::to_string).collect();
    let mut applied = 0;

    for result in report.results() {
        let (Some(line_number), Some(original), Some(fix)) = (
            result.line_number,
            result.original_text.as_deref(),
            result.proposed_fix.as_deref(),
        ) else {
            continue;
        };
        let Some(line) = line_number.checked_sub(1).and_then(|i| lines.get_mut(i)) else {
            continue;
        };
        if line.contains(original) {
            *line = line.replacen(original, fix, 1);
            applied += 1;
        }
    }

    if applied > 0 {
        log::debug!("applied {applied} fixes");
    }
    FixOutcome {
        content: lines.join("\n"),
        applied,
    }
}
