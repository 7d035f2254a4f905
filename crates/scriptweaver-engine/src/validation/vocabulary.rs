use super::EngineError;

/// Call of Cthulhu 6th edition skill names.
#[rustfmt::skip]
pub const COC6_SKILLS: &[&str] = &[
    "目星", "聞き耳", "図書館", "説得", "信用", "隠れる", "忍び歩き",
    "鍵開け", "機械修理", "コンピュータ", "運転", "操縦", "心理学",
    "医学", "応急手当", "精神分析", "オカルト", "人類学", "考古学",
    "歴史", "自然史", "物理学", "化学", "生物学", "地質学", "天文学",
    "電気修理", "電子工学", "ナビゲート", "追跡", "写真術", "芸術",
    "クトゥルフ神話", "母国語", "他の言語", "回避", "キック", "組み付き",
    "こぶし", "頭突き", "投擲", "マーシャルアーツ", "剣道", "拳銃",
    "サブマシンガン", "ショットガン", "マシンガン", "ライフル",
];

/// Built-in names for a rule-system identifier (case-insensitive).
pub fn for_system(rule_system: &str) -> Result<&'static [&'static str], EngineError> {
    match rule_system.to_ascii_lowercase().as_str() {
        "coc6" => Ok(COC6_SKILLS),
        _ => Err(EngineError::UnknownRuleSystem(rule_system.to_string())),
    }
}

/// Built-in names plus configured extras, in lookup order.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    terms: Vec<String>,
}

impl Vocabulary {
    pub fn new(builtin: &[&str], extra: &[String]) -> Self {
        let terms = builtin
            .iter()
            .map(|s| s.to_string())
            .chain(extra.iter().cloned())
            .collect();
        Self { terms }
    }

    pub fn for_system(rule_system: &str, extra: &[String]) -> Result<Self, EngineError> {
        Ok(Self::new(for_system(rule_system)?, extra))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.terms.iter().any(|t| t == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
