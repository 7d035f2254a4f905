use regex::Regex;

/// One line of an NPC status block, classified by role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NpcLine<'a> {
    /// `name (STR 12 CON 10 ...) trailing note`
    Stats {
        name: Option<&'a str>,
        stats: &'a str,
        note: Option<&'a str>,
    },
    /// `技能: ...` with the prefix removed.
    Skills(&'a str),
    /// `装備: ...` with the prefix removed.
    Equipment(&'a str),
    /// A line naming an attack or carrying a damage roll.
    Attack(&'a str),
    Note(&'a str),
}

/// NPC stat blocks: any line with a parenthesised run naming a core
/// attribute (STR, CON, SIZ, INT, POW, DEX) or HP.
#[derive(Debug, Clone)]
pub struct NpcStatus {
    stats: Regex,
    name_stats_note: Regex,
    attack: Regex,
}

impl NpcStatus {
    pub const SKILLS_PREFIXES: [&'static str; 2] = ["技能:", "技能："];
    pub const EQUIPMENT_PREFIXES: [&'static str; 2] = ["装備:", "装備："];

    pub fn new() -> Self {
        Self {
            stats: Regex::new(r"\(.*(?:STR|CON|SIZ|INT|POW|DEX|HP).*\)")
                .expect("Invalid NPC stats regex"),
            name_stats_note: Regex::new(r"^([^()]+?)\s*(\(.*\))(.*)$")
                .expect("Invalid NPC line regex"),
            attack: Regex::new(r"噛みつき|爪|ダメージ|\d+[dD]\d+").expect("Invalid NPC attack regex"),
        }
    }

    pub fn is_stats_line(&self, line: &str) -> bool {
        self.stats.is_match(line)
    }

    pub fn matches(&self, text: &str) -> bool {
        text.lines().any(|l| self.is_stats_line(l))
    }

    pub fn classify_line<'a>(&self, line: &'a str) -> NpcLine<'a> {
        let line = line.trim();

        if self.is_stats_line(line) {
            return match self.name_stats_note.captures(line) {
                Some(caps) => {
                    let part = |i: usize| caps.get(i).map(|m| m.as_str().trim()).unwrap_or("");
                    let note = part(3);
                    NpcLine::Stats {
                        name: Some(part(1)),
                        stats: part(2),
                        note: (!note.is_empty()).then_some(note),
                    }
                }
                None => NpcLine::Stats {
                    name: None,
                    stats: line,
                    note: None,
                },
            };
        }
        if let Some(rest) = strip_any_prefix(line, &Self::SKILLS_PREFIXES) {
            return NpcLine::Skills(rest);
        }
        if let Some(rest) = strip_any_prefix(line, &Self::EQUIPMENT_PREFIXES) {
            return NpcLine::Equipment(rest);
        }
        if self.attack.is_match(line) {
            return NpcLine::Attack(line);
        }
        NpcLine::Note(line)
    }
}

impl Default for NpcStatus {
    fn default() -> Self {
        Self::new()
    }
}

fn strip_any_prefix<'a>(line: &'a str, prefixes: &[&str]) -> Option<&'a str> {
    prefixes
        .iter()
        .find_map(|p| line.strip_prefix(p))
        .map(str::trim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn detects_attribute_parentheticals() {
        let npc = NpcStatus::new();
        assert!(npc.matches("執事 (STR 10 CON 12 HP 11)"));
        assert!(npc.matches("説明\n怪物 (HP 20)"));
        assert!(!npc.matches("彼は(たぶん)嘘をついている"));
        assert!(!npc.matches("STR 10 CON 12"));
    }

    #[test]
    fn splits_name_stats_and_note() {
        let npc = NpcStatus::new();
        assert_eq!(
            npc.classify_line("山田太郎 (STR 10 CON 12 HP 11) 館の主人"),
            NpcLine::Stats {
                name: Some("山田太郎"),
                stats: "(STR 10 CON 12 HP 11)",
                note: Some("館の主人"),
            }
        );
    }

    #[test]
    fn stats_without_name() {
        let npc = NpcStatus::new();
        assert_eq!(
            npc.classify_line("(STR 15 HP 14)"),
            NpcLine::Stats {
                name: None,
                stats: "(STR 15 HP 14)",
                note: None,
            }
        );
    }

    #[test]
    fn classifies_labelled_lines() {
        let npc = NpcStatus::new();
        assert_eq!(npc.classify_line("技能: 【目星】60%"), NpcLine::Skills("【目星】60%"));
        assert_eq!(npc.classify_line("装備：ナイフ"), NpcLine::Equipment("ナイフ"));
        assert_eq!(
            npc.classify_line("噛みつき 1d6"),
            NpcLine::Attack("噛みつき 1d6")
        );
        assert_eq!(npc.classify_line("臆病な性格"), NpcLine::Note("臆病な性格"));
    }
}
