//! Whole-document parsing tests.
//!
//! Kind sequences are pinned with inline `insta` snapshots.

use super::{blocks::BlockKind, parse_document};

fn kinds(text: &str) -> Vec<String> {
    parse_document(text)
        .blocks
        .iter()
        .map(|b| format!("{:?}", b.kind))
        .collect()
}

#[test]
fn scenario_outline() {
    let text = "\
# 嵐の館

1. 概要
このシナリオは森の館を舞台とします。

◆推奨人数：3-4人
◆プレイ時間：4時間

===

2-1. 主要NPC
執事 (STR 10 CON 12 HP 11)
技能: 【目星】60%

・懐中電灯
・ロープ

| 時刻 | 出来事 |
|---|---|
| 20:00 | 停電 |

「誰かいるのか？」と声がする。
";

    insta::assert_debug_snapshot!(kinds(text), @r#"
    [
        "HashHeading { level: 1 }",
        "NumberedHeading { level: 1 }",
        "Paragraph",
        "DefinitionList",
        "SectionDivider",
        "NumberedHeading { level: 2 }",
        "NpcStatus",
        "BulletList",
        "Table",
        "Dialogue",
    ]
    "#);
}

#[test]
fn every_block_is_non_blank_and_classified() {
    let text = "a\n\n  \n\nb\n---\nc\n\n1.\n\n";
    let doc = parse_document(text);

    assert!(!doc.blocks.is_empty());
    for block in &doc.blocks {
        assert!(!block.text.trim().is_empty());
    }
}

#[test]
fn empty_document() {
    assert!(parse_document("").blocks.is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(parse_document("\n\n\n").blocks.is_empty());
}

#[test]
fn hash_heading_keeps_following_prose_in_block() {
    // Only dividers and numbered headings are peeled off; a `#` heading
    // written without a blank line absorbs the next line.
    let doc = parse_document("# 見出し\n本文");
    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(doc.blocks[0].kind, BlockKind::HashHeading { level: 1 });
}

#[test]
fn lines_point_back_to_source() {
    let doc = parse_document("1. 概要\n\nこのシナリオは森の館を舞台とします。\n\n2-1. 主要NPCについて");
    let spans: Vec<_> = doc.blocks.iter().map(|b| (b.lines.start, b.lines.end)).collect();
    assert_eq!(spans, vec![(1, 1), (3, 3), (5, 5)]);
}
