//! End-to-end properties of the conversion pipeline and the validation
//! engine.

use pretty_assertions::assert_eq;
use scriptweaver_engine::headings::HeadingRegistry;
use scriptweaver_engine::notation::NotationTranspiler;
use scriptweaver_engine::parsing::blocks::BlockKind;
use scriptweaver_engine::render::Renderer;
use scriptweaver_engine::validation::rules::{RuleChecker, VocabularyChecker};
use scriptweaver_engine::validation::{Severity, ValidationConfig, ValidationResult, Vocabulary};
use scriptweaver_engine::{
    ConvertOptions, RenderOptions, ScenarioConverter, ValidationReport, parse_document,
};

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn render_body(text: &str) -> String {
    let doc = parse_document(text);
    let headings = HeadingRegistry::collect(&doc.blocks);
    Renderer::new().render_body(&doc, &headings, None, &RenderOptions::default())
}

#[test]
fn every_block_is_non_blank_and_classified() {
    let doc = parse_document(&fixture("mansion.txt"));

    assert!(!doc.blocks.is_empty());
    for block in &doc.blocks {
        assert!(!block.text.trim().is_empty());
        assert!(block.text.lines().all(|l| !l.trim().is_empty()));
    }
}

#[test]
fn fixture_classifies_every_structural_kind() {
    let doc = parse_document(&fixture("mansion.txt"));
    let kinds: Vec<BlockKind> = doc.blocks.iter().map(|b| b.kind).collect();

    for expected in [
        BlockKind::HashHeading { level: 1 },
        BlockKind::NumberedHeading { level: 1 },
        BlockKind::NumberedHeading { level: 2 },
        BlockKind::Paragraph,
        BlockKind::NpcStatus,
        BlockKind::Dialogue,
        BlockKind::Table,
        BlockKind::SectionDivider,
        BlockKind::DefinitionList,
        BlockKind::BulletList,
    ] {
        assert!(kinds.contains(&expected), "missing {expected:?} in {kinds:?}");
    }
}

#[test]
fn numbered_headings_and_prose() {
    // Given two numbered headings around one prose line
    let text = "1. 概要\n\nこのシナリオは森の館を舞台とします。\n\n2-1. 主要NPCについて";

    // When rendering
    let html = render_body(text);

    // Then both headings and one paragraph are emitted at their levels
    assert!(html.contains(r#"<h1 id="heading-1">1. 概要</h1>"#));
    assert!(html.contains(r#"<h2 id="heading-2-1">2-1. 主要NPCについて</h2>"#));
    assert_eq!(html.matches("<p>").count(), 1);
    assert!(html.contains("<p>このシナリオは森の館を舞台とします。</p>"));
}

#[test]
fn misspelled_skill_gets_exactly_one_suggestion() {
    let config = ValidationConfig::default();
    let checker = VocabularyChecker::new(
        Vocabulary::for_system(&config.rule_system, &config.extra_vocabulary).unwrap(),
        &config,
    );

    let results = checker.inspect("【目だま】判定で何かを見つける").unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].level, Severity::Suggestion);
    assert_eq!(results[0].proposed_fix.as_deref(), Some("【目星】"));
}

#[test]
fn sanity_loss_is_one_span_and_dice_another() {
    let out = NotationTranspiler::new().transpile("1d4+1のダメージ、SANc0/1の減少");

    assert!(out.contains(r#"<span class="coc-dice">1d4+1</span>"#));
    assert!(out.contains(r#"<span class="coc-san">SANc0/1</span>"#));
    assert_eq!(out.matches("<span").count(), 2);
}

#[test]
fn table_rows_match_header_width() {
    let html = render_body("| 名前 | 職業 | 年齢 |\n|---|---|---|\n| 田中 | 探偵 | 32 |\n| 佐藤 | 医師 | 45 |");

    let thead = &html[html.find("<thead>").unwrap()..html.find("</thead>").unwrap()];
    let tbody = &html[html.find("<tbody>").unwrap()..html.find("</tbody>").unwrap()];
    assert_eq!(thead.matches("<tr>").count(), 1);
    assert_eq!(thead.matches("<th>").count(), 3);
    assert_eq!(tbody.matches("<tr>").count(), 2);
    assert_eq!(tbody.matches("<td>").count(), 6);
}

#[test]
fn has_errors_tracks_critical_results_only() {
    let mut report = ValidationReport::new();
    for level in [Severity::Warning, Severity::Info, Severity::Suggestion] {
        report.add(ValidationResult::new(level, "X", "x"));
        assert!(!report.has_errors());
    }

    report.add(ValidationResult::new(Severity::Critical, "X", "x"));
    assert!(report.has_errors());
}

#[test]
fn transpiling_twice_does_not_double_wrap() {
    let tr = NotationTranspiler::new();
    let text = fixture("mansion.txt");

    for line in text.lines() {
        let once = tr.transpile(line);
        assert_eq!(tr.wrap(&once), once, "line {line:?}");
    }
}

#[test]
fn japanese_only_headings_get_distinct_hash_ids() {
    let doc = parse_document("# 導入\n\n# 館の探索\n\n# 結末");
    let registry = HeadingRegistry::collect(&doc.blocks);

    let ids: Vec<&str> = registry.headings().iter().map(|h| h.id.as_str()).collect();
    assert_eq!(ids.len(), 3);
    for id in &ids {
        assert!(id.starts_with("heading-"));
        assert_eq!(id.len(), "heading-".len() + 8);
    }
    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 3);
}

#[test]
fn validation_is_repeatable() {
    let converter = ScenarioConverter::new(ConvertOptions {
        validation: Some(ValidationConfig::default()),
        ..Default::default()
    })
    .unwrap();
    let text = fixture("mansion.txt");

    let first = converter.validate_text(&text).unwrap();
    let second = converter.validate_text(&text).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn fixture_report_points_at_the_misspelling() {
    let converter = ScenarioConverter::new(ConvertOptions {
        validation: Some(ValidationConfig::default()),
        ..Default::default()
    })
    .unwrap();
    let text = fixture("mansion.txt");

    let report = converter.validate_text(&text).unwrap();

    let skill: Vec<_> = report
        .results()
        .iter()
        .filter(|r| r.code.as_deref() == Some("SKILL_UNKNOWN"))
        .collect();
    assert_eq!(skill.len(), 1);
    let line = skill[0].line_number.unwrap();
    assert!(text.lines().nth(line - 1).unwrap().contains("【目だま】"));
    assert!(!report.has_errors());
}
