/*!
 * End-to-end tests for the expand workflow
 */

use variorum::app_config::Config;
use variorum::app_controller::Controller;
use variorum::bibliography::BibliographyTable;
use variorum::document::PlayDocument;

use crate::common;

/// Test expanding a small annotated play end to end
#[test]
fn test_runExpand_withAnnotatedPlay_shouldExpandNotesAndReport() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let input = common::create_test_play(&dir, "hamlet.json").unwrap();
    let output = dir.join("hamlet_expanded.json");
    let report_path = dir.join("report.json");

    let config = Config {
        report_path: Some(report_path.to_string_lossy().into_owned()),
        ..Config::default()
    };
    let controller = Controller::with_config(config).unwrap();
    let report = controller.run_expand(&input, &output).unwrap();

    // Capell, Furness and the curated Abott spelling are all known
    assert_eq!(report.total_expansions, 3);
    assert!(report.resolved_keys.contains("Capell"));
    assert!(report.resolved_keys.contains("Furness"));
    assert!(report.resolved_keys.contains("Abott"));
    // Theobald is not in the table and must be left alone
    assert!(report.unresolved_tokens.contains("Theobald"));
    assert_eq!(report.scenes_processed, 2);
    assert_eq!(report.lines_processed, 3);
    assert_eq!(report.notes_processed, 3);

    // The expanded document carries the citation text in its notes
    let text = std::fs::read_to_string(&output).unwrap();
    let expanded: PlayDocument = serde_json::from_str(&text).unwrap();
    let table = BibliographyTable::build();
    let scene = expanded
        .scenes
        .get("ACT 1. SCENE 1.")
        .unwrap()
        .as_object()
        .unwrap();
    let notes = &scene.get("1").unwrap()["notes"];
    assert!(notes[0]
        .as_str()
        .unwrap()
        .contains(table.citation_for("Capell").unwrap()));

    // The unresolved Theobald token stays in place in the second scene
    let scene_two = expanded
        .scenes
        .get("ACT 1. SCENE 2.")
        .unwrap()
        .as_object()
        .unwrap();
    let note = scene_two.get("1").unwrap()["notes"][0].as_str().unwrap();
    assert!(note.contains("Theobald"));
    assert!(note.contains(table.citation_for("Abbott").unwrap()));

    // Dialogue text survives untouched
    assert_eq!(
        scene.get("1").unwrap()["play"],
        "Bernardo: Who's there?"
    );

    // The report file mirrors the returned report
    let report_text = std::fs::read_to_string(&report_path).unwrap();
    let report_json: serde_json::Value = serde_json::from_str(&report_text).unwrap();
    assert_eq!(report_json["total_expansions"], 3);
}

/// Test that scene and line order survives expansion
#[test]
fn test_runExpand_shouldPreserveDocumentOrder() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let input = common::create_test_play(&dir, "play.json").unwrap();
    let output = dir.join("play_expanded.json");

    let controller = Controller::with_config(Config::default()).unwrap();
    controller.run_expand(&input, &output).unwrap();

    let text = std::fs::read_to_string(&output).unwrap();
    let expanded: PlayDocument = serde_json::from_str(&text).unwrap();
    let scenes: Vec<&String> = expanded.scenes.keys().collect();
    assert_eq!(scenes, vec!["ACT 1. SCENE 1.", "ACT 1. SCENE 2."]);
}

/// Test expanding a malformed input file fails cleanly
#[test]
fn test_runExpand_withMalformedJson_shouldError() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let input = common::create_test_file(&dir, "broken.json", "{ not json").unwrap();

    let controller = Controller::with_config(Config::default()).unwrap();
    assert!(controller.run_expand(&input, dir.join("out.json")).is_err());
}
