use super::INDENT;
use crate::headings::Heading;
use crate::notation::escape_html;

struct TocNode<'a> {
    heading: &'a Heading,
    children: Vec<TocNode<'a>>,
}

/// Nests headings under the nearest preceding heading of a lower level.
fn nest(headings: &[Heading]) -> Vec<TocNode<'_>> {
    fn attach<'a>(node: TocNode<'a>, stack: &mut [TocNode<'a>], roots: &mut Vec<TocNode<'a>>) {
        match stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => roots.push(node),
        }
    }

    let mut roots = Vec::new();
    let mut stack: Vec<TocNode<'_>> = Vec::new();
    for heading in headings {
        while stack
            .last()
            .is_some_and(|open| open.heading.level >= heading.level)
        {
            if let Some(done) = stack.pop() {
                attach(done, &mut stack, &mut roots);
            }
        }
        stack.push(TocNode {
            heading,
            children: Vec::new(),
        });
    }
    while let Some(done) = stack.pop() {
        attach(done, &mut stack, &mut roots);
    }
    roots
}

fn render_list(nodes: &[TocNode<'_>], class: Option<&str>, depth: usize, out: &mut String) {
    let pad = INDENT.repeat(depth);
    match class {
        Some(class) => out.push_str(&format!("{pad}<ul class=\"{class}\">\n")),
        None => out.push_str(&format!("{pad}<ul>\n")),
    }
    for node in nodes {
        let h = node.heading;
        out.push_str(&format!(
            "{pad}{INDENT}<li class=\"toc-level-{}\"><a href=\"#{}\">{}</a>",
            h.level,
            h.id,
            escape_html(&h.text)
        ));
        if node.children.is_empty() {
            out.push_str("</li>\n");
        } else {
            out.push('\n');
            render_list(&node.children, None, depth + 2, out);
            out.push_str(&format!("{pad}{INDENT}</li>\n"));
        }
    }
    out.push_str(&format!("{pad}</ul>\n"));
}

/// Table of contents, or an empty string when there are no headings.
pub fn render_toc(headings: &[Heading], title: &str) -> String {
    if headings.is_empty() {
        return String::new();
    }

    let mut html = format!("{INDENT}<nav class=\"table-of-contents\">\n");
    html.push_str(&format!(
        "{INDENT}{INDENT}<h2 class=\"toc-title\">{}</h2>\n",
        escape_html(title)
    ));
    render_list(&nest(headings), Some("toc-list"), 2, &mut html);
    html.push_str(&format!("{INDENT}</nav>"));
    html
}
