use crate::notation::escape_html;

/// Wraps a body fragment in a complete HTML document. The style sheet is
/// inserted verbatim.
pub fn wrap_document(body: &str, title: &str, stylesheet: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{stylesheet}
    </style>
</head>
<body>
    <div class="container">
{body}
    </div>
</body>
</html>"#,
        title = escape_html(title),
    )
}
