use super::kinds::{
    BulletList, DefinitionList, Dialogue, HashHeading, NpcStatus, NumberedHeading, SectionDivider,
    Table,
};
use super::types::BlockKind;

/// Decides the [`BlockKind`] of one block.
///
/// Several predicates overlap (a table row may contain a colon, a bullet
/// item may contain dialogue), so they are tested in a fixed order and the
/// first match wins:
///
/// 1. hash heading
/// 2. numbered heading
/// 3. section divider
/// 4. table
/// 5. definition list
/// 6. bullet list
/// 7. NPC status block
/// 8. dialogue
/// 9. paragraph
#[derive(Debug, Clone, Default)]
pub struct BlockClassifier {
    numbered: NumberedHeading,
    npc: NpcStatus,
}

impl BlockClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classify(&self, text: &str) -> BlockKind {
        if HashHeading::matches(text) {
            return BlockKind::HashHeading {
                level: HashHeading::level(text),
            };
        }
        if let Some(level) = self.numbered.level(text) {
            return BlockKind::NumberedHeading { level };
        }
        if SectionDivider::matches(text) {
            return BlockKind::SectionDivider;
        }
        if Table::matches(text) {
            return BlockKind::Table;
        }
        if DefinitionList::matches(text) {
            return BlockKind::DefinitionList;
        }
        if BulletList::matches(text) {
            return BlockKind::BulletList;
        }
        if self.npc.matches(text) {
            return BlockKind::NpcStatus;
        }
        if Dialogue::matches(text) {
            return BlockKind::Dialogue;
        }
        BlockKind::Paragraph
    }
}
