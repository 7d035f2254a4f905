use super::INDENT;
use crate::notation::escape_html;
use crate::validation::{Severity, ValidationReport};

fn summary_label(level: Severity) -> &'static str {
    match level {
        Severity::Critical => "🚨 重大エラー",
        Severity::Warning => "⚠️ 警告",
        Severity::Info => "ℹ️ 情報",
        Severity::Suggestion => "💡 提案",
    }
}

/// Validation report section. Empty when the report has no results.
pub fn render_report(report: &ValidationReport) -> String {
    if report.is_empty() {
        return String::new();
    }

    let i2 = INDENT.repeat(2);
    let i3 = INDENT.repeat(3);
    let i4 = INDENT.repeat(4);

    let mut html = format!("{INDENT}<div class=\"validation-report\">\n");
    html.push_str(&format!(
        "{i2}<h2 class=\"validation-title\">📋 記法チェック結果</h2>\n"
    ));

    let summary = report.summary();
    for level in Severity::ALL {
        let count = summary.count(level);
        if count > 0 {
            html.push_str(&format!(
                "{i2}<div class=\"validation-summary {}\">{}: {count}個</div>\n",
                level.as_str(),
                summary_label(level)
            ));
        }
    }

    html.push_str(&format!("{i2}<div class=\"validation-details\">\n"));
    for result in report.results() {
        let line = result
            .line_number
            .map(|n| format!("{n}行目: "))
            .unwrap_or_default();
        html.push_str(&format!(
            "{i3}<div class=\"validation-item {}\">\n",
            result.level.as_str()
        ));
        html.push_str(&format!(
            "{i4}<div class=\"validation-message\">{line}{}</div>\n",
            escape_html(&result.message)
        ));
        if let Some(suggestion) = &result.suggestion {
            html.push_str(&format!(
                "{i4}<div class=\"validation-suggestion\">💡 {}</div>\n",
                escape_html(suggestion)
            ));
        }
        if let Some(fix) = &result.proposed_fix {
            html.push_str(&format!(
                "{i4}<div class=\"validation-fix\">✏️ 修正案: {}</div>\n",
                escape_html(fix)
            ));
        }
        html.push_str(&format!("{i3}</div>\n"));
    }
    html.push_str(&format!("{i2}</div>\n"));
    html.push_str(&format!("{INDENT}</div>"));
    html
}

/// Plain-text rendering for terminals.
pub fn render_report_text(report: &ValidationReport) -> String {
    let summary = report.summary();
    let mut out = String::from("📋 記法チェック結果\n");
    if report.is_empty() {
        out.push_str("問題は見つかりませんでした\n");
        return out;
    }

    for level in Severity::ALL {
        let count = summary.count(level);
        if count > 0 {
            out.push_str(&format!("{}: {count}個\n", summary_label(level)));
        }
    }
    for result in report.results() {
        let line = result
            .line_number
            .map(|n| format!("{n}行目: "))
            .unwrap_or_default();
        out.push_str(&format!("[{}] {line}{}\n", result.level.as_str(), result.message));
        if let Some(suggestion) = &result.suggestion {
            out.push_str(&format!("    💡 {suggestion}\n"));
        }
        if let Some(fix) = &result.proposed_fix {
            out.push_str(&format!("    ✏️ 修正案: {fix}\n"));
        }
    }
    out
}
