use serde::{Deserialize, Serialize};

/// Diagnostic severity, declared in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
    Suggestion,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::Warning,
        Severity::Info,
        Severity::Suggestion,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Suggestion => "suggestion",
        }
    }
}

/// One diagnostic produced by a rule checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub level: Severity,
    pub message: String,
    pub suggestion: Option<String>,
    /// 1-based.
    pub line_number: Option<usize>,
    pub code: Option<String>,
    /// The exact source text the diagnostic is about.
    pub original_text: Option<String>,
    /// Replacement for `original_text`.
    pub proposed_fix: Option<String>,
}

impl ValidationResult {
    pub fn new(level: Severity, code: &str, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            suggestion: None,
            line_number: None,
            code: Some(code.to_string()),
            original_text: None,
            proposed_fix: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn at_line(mut self, line_number: usize) -> Self {
        self.line_number = Some(line_number);
        self
    }

    pub fn with_original(mut self, original_text: impl Into<String>) -> Self {
        self.original_text = Some(original_text.into());
        self
    }

    pub fn with_fix(mut self, proposed_fix: impl Into<String>) -> Self {
        self.proposed_fix = Some(proposed_fix.into());
        self
    }
}

/// Per-severity tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub critical: usize,
    pub warning: usize,
    pub info: usize,
    pub suggestion: usize,
}

impl Summary {
    pub fn count(&self, level: Severity) -> usize {
        match level {
            Severity::Critical => self.critical,
            Severity::Warning => self.warning,
            Severity::Info => self.info,
            Severity::Suggestion => self.suggestion,
        }
    }

    fn bump(&mut self, level: Severity) {
        match level {
            Severity::Critical => self.critical += 1,
            Severity::Warning => self.warning += 1,
            Severity::Info => self.info += 1,
            Severity::Suggestion => self.suggestion += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.critical + self.warning + self.info + self.suggestion
    }
}

/// Append-only list of results. The summary is only updated through
/// [`ValidationReport::add`], so it always matches `results`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    summary: Summary,
    results: Vec<ValidationResult>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, result: ValidationResult) {
        self.summary.bump(result.level);
        self.results.push(result);
    }

    pub fn extend(&mut self, results: impl IntoIterator<Item = ValidationResult>) {
        for result in results {
            self.add(result);
        }
    }

    pub fn results(&self) -> &[ValidationResult] {
        &self.results
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn has_errors(&self) -> bool {
        self.summary.critical > 0
    }

    pub fn results_by_level(&self, level: Severity) -> impl Iterator<Item = &ValidationResult> {
        self.results.iter().filter(move |r| r.level == level)
    }

    pub fn exceeds_warning_threshold(&self, threshold: usize) -> bool {
        self.summary.warning > threshold
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    pub strict_mode: bool,
    /// Selects the built-in vocabulary, e.g. `CoC6`.
    pub rule_system: String,
    /// Accepted in addition to the built-in vocabulary.
    pub extra_vocabulary: Vec<String>,
    pub warning_threshold: usize,
    pub auto_fix: bool,
    pub beginner_mode: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            strict_mode: false,
            rule_system: "CoC6".to_string(),
            extra_vocabulary: Vec::new(),
            warning_threshold: 10,
            auto_fix: true,
            beginner_mode: false,
        }
    }
}
