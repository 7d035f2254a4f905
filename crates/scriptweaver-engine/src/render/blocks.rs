//! One markup fragment per classified block.

use super::{INDENT, Renderer};
use crate::headings::Heading;
use crate::notation::escape_html;
use crate::parsing::blocks::kinds::{BulletList, DefinitionList, NpcLine, SectionDivider, Table};
use crate::parsing::blocks::{BlockKind, BlockNode};

impl Renderer {
    /// `heading` is the registry entry for `block`, if it is a heading.
    pub fn render_block(&self, block: &BlockNode, heading: Option<&Heading>) -> String {
        match (block.kind, heading) {
            (BlockKind::HashHeading { .. } | BlockKind::NumberedHeading { .. }, Some(h)) => {
                render_heading(h)
            }
            (BlockKind::SectionDivider, _) => self.render_divider(&block.text),
            (BlockKind::Table, _) => self.render_table(&block.text),
            (BlockKind::DefinitionList, _) => self.render_definitions(&block.text),
            (BlockKind::BulletList, _) => self.render_bullets(&block.text),
            (BlockKind::NpcStatus, _) => self.render_npc(&block.text),
            (BlockKind::Dialogue, _) => format!(
                "{INDENT}<p class=\"dialogue-paragraph\">{}</p>",
                self.dialogue.emphasize(&self.transpiler.transpile(&block.text))
            ),
            _ => self.paragraph(INDENT, &block.text),
        }
    }

    fn paragraph(&self, indent: &str, text: &str) -> String {
        format!("{indent}<p>{}</p>", self.transpiler.transpile(text))
    }

    fn render_divider(&self, text: &str) -> String {
        text.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|line| {
                if SectionDivider::is_divider_line(line) {
                    format!("{INDENT}<hr class=\"section-divider\">")
                } else {
                    self.paragraph(INDENT, line)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_table(&self, text: &str) -> String {
        let rows = Table::rows(text);
        let row = |cells: &[String], tag: &str| {
            let mut out = format!("{INDENT}{INDENT}<tr>\n");
            for cell in cells {
                out.push_str(&format!(
                    "{INDENT}{INDENT}{INDENT}<{tag}>{}</{tag}>\n",
                    self.transpiler.transpile(cell)
                ));
            }
            out.push_str(&format!("{INDENT}{INDENT}</tr>\n"));
            out
        };

        let mut html = format!("{INDENT}<table class=\"scenario-table\">\n");
        if let Some(header) = &rows.header {
            html.push_str(&format!("{INDENT}{INDENT}<thead>\n"));
            html.push_str(&row(header.as_slice(), "th"));
            html.push_str(&format!("{INDENT}{INDENT}</thead>\n"));
        }
        if !rows.body.is_empty() {
            html.push_str(&format!("{INDENT}{INDENT}<tbody>\n"));
            for cells in &rows.body {
                html.push_str(&row(cells.as_slice(), "td"));
            }
            html.push_str(&format!("{INDENT}{INDENT}</tbody>\n"));
        }
        html.push_str(&format!("{INDENT}</table>"));
        html
    }

    fn render_definitions(&self, text: &str) -> String {
        let inner = format!("{INDENT}{INDENT}");
        let mut html = format!("{INDENT}<dl class=\"scenario-definitions\">\n");
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            match DefinitionList::item(line) {
                Some(item) => {
                    let (term, description) = DefinitionList::split_term(item);
                    html.push_str(&format!(
                        "{inner}<dt>{}</dt>\n",
                        self.transpiler.transpile(term)
                    ));
                    if let Some(desc) = description {
                        html.push_str(&format!(
                            "{inner}<dd>{}</dd>\n",
                            self.transpiler.transpile(desc)
                        ));
                    }
                }
                None => {
                    html.push_str(&self.paragraph(&inner, line));
                    html.push('\n');
                }
            }
        }
        html.push_str(&format!("{INDENT}</dl>"));
        html
    }

    fn render_bullets(&self, text: &str) -> String {
        let inner = format!("{INDENT}{INDENT}");
        let mut html = format!("{INDENT}<ul class=\"scenario-bullets\">\n");
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            match BulletList::item(line) {
                Some(item) => html.push_str(&format!(
                    "{inner}<li>{}</li>\n",
                    self.transpiler.transpile(item)
                )),
                None => {
                    html.push_str(&self.paragraph(&inner, line));
                    html.push('\n');
                }
            }
        }
        html.push_str(&format!("{INDENT}</ul>"));
        html
    }

    fn render_npc(&self, text: &str) -> String {
        let inner = format!("{INDENT}{INDENT}");
        let region = |class: &str, label: Option<&str>, content: &str| {
            let label = label
                .map(|l| format!("<strong>{l}:</strong> "))
                .unwrap_or_default();
            format!(
                "{inner}<div class=\"{class}\">{label}{}</div>\n",
                self.transpiler.transpile(content)
            )
        };

        let mut html = format!("{INDENT}<div class=\"npc-status-block\">\n");
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            match self.npc.classify_line(line) {
                NpcLine::Stats { name, stats, note } => {
                    if let Some(name) = name {
                        html.push_str(&region("npc-name", None, name));
                    }
                    html.push_str(&region("npc-stats", None, stats));
                    if let Some(note) = note {
                        html.push_str(&region("npc-note", None, note));
                    }
                }
                NpcLine::Skills(s) => html.push_str(&region("npc-skills", Some("技能"), s)),
                NpcLine::Equipment(s) => {
                    html.push_str(&region("npc-equipment", Some("装備"), s))
                }
                NpcLine::Attack(s) => html.push_str(&region("npc-attacks", Some("攻撃"), s)),
                NpcLine::Note(s) => html.push_str(&region("npc-other", None, s)),
            }
        }
        html.push_str(&format!("{INDENT}</div>"));
        html
    }
}

fn render_heading(heading: &Heading) -> String {
    format!(
        "{INDENT}<h{level} id=\"{id}\">{text}</h{level}>",
        level = heading.level,
        id = heading.id,
        text = escape_html(&heading.text)
    )
}
