pub mod dialogue;
pub mod divider;
pub mod heading;
pub mod list;
pub mod npc;
pub mod table;

pub use dialogue::Dialogue;
pub use divider::SectionDivider;
pub use heading::{HashHeading, NumberedHeading};
pub use list::{BulletList, DefinitionList};
pub use npc::{NpcLine, NpcStatus};
pub use table::{Table, TableRows};
