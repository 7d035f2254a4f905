use crate::parsing::span::LineSpan;

/// The structural kind of a block, decided by [`super::BlockClassifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// `#`-prefixed heading.
    HashHeading {
        /// `1..=6`, from the `#` run length.
        level: u8,
    },
    /// `1.`, `1-2.` or `1-2-3.` heading.
    NumberedHeading {
        /// `1..=3`, from the number of numeric segments.
        level: u8,
    },
    /// Block containing at least one `===`/`---` line.
    SectionDivider,
    /// Pipe-delimited table.
    Table,
    /// Two or more `◆` lines.
    DefinitionList,
    /// Two or more `・` lines.
    BulletList,
    /// NPC stat block.
    NpcStatus,
    /// Prose containing `「…」` speech.
    Dialogue,
    /// Fallback.
    Paragraph,
}

impl BlockKind {
    pub fn is_heading(self) -> bool {
        matches!(
            self,
            BlockKind::HashHeading { .. } | BlockKind::NumberedHeading { .. }
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            BlockKind::HashHeading { .. } => "HashHeading",
            BlockKind::NumberedHeading { .. } => "NumberedHeading",
            BlockKind::SectionDivider => "SectionDivider",
            BlockKind::Table => "Table",
            BlockKind::DefinitionList => "DefinitionList",
            BlockKind::BulletList => "BulletList",
            BlockKind::NpcStatus => "NpcStatus",
            BlockKind::Dialogue => "Dialogue",
            BlockKind::Paragraph => "Paragraph",
        }
    }
}

/// A segmented, not yet classified run of non-blank lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Trimmed lines joined with `\n`. Never blank.
    pub text: String,
    /// Source lines this block was cut from.
    pub lines: LineSpan,
}

/// A classified block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode {
    pub kind: BlockKind,
    pub text: String,
    pub lines: LineSpan,
}
