/*!
 * End-to-end tests for the clean workflow
 */

use variorum::app_config::Config;
use variorum::app_controller::Controller;
use variorum::document::{play_text, PlayDocument};

use crate::common;

const REPEATED_SPEAKERS: &str = r#"{
  "ACT I, SCENE I": {
    "1": { "play": "First Witch: When shall we three meet again", "notes": [] },
    "2": { "play": "First Witch: In thunder, lightning, or in rain?", "notes": ["2. rain?] a note"] },
    "3": { "play": "Second Witch: When the hurlyburly's done", "notes": [] }
  }
}"#;

/// Test cleaning a document end to end
#[test]
fn test_runClean_withRepeatedSpeakers_shouldStripAndSave() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let input = common::create_test_file(&dir, "play.json", REPEATED_SPEAKERS).unwrap();
    let output = dir.join("play_clean.json");

    let controller = Controller::with_config(Config::default()).unwrap();
    let report = controller.run_clean(&input, &output).unwrap();

    assert_eq!(report.scenes_processed, 1);
    assert_eq!(report.lines_examined, 3);
    assert_eq!(report.prefixes_stripped, 1);

    let text = std::fs::read_to_string(&output).unwrap();
    let cleaned: PlayDocument = serde_json::from_str(&text).unwrap();
    let scene = cleaned.scenes.get("ACT I, SCENE I").unwrap().as_object().unwrap();

    assert_eq!(
        play_text(scene.get("1").unwrap()),
        Some("First Witch: When shall we three meet again")
    );
    assert_eq!(
        play_text(scene.get("2").unwrap()),
        Some("In thunder, lightning, or in rain?")
    );
    assert_eq!(scene.get("2").unwrap()["notes"], serde_json::json!(["2. rain?] a note"]));
}

/// Test compact output when pretty printing is disabled
#[test]
fn test_runClean_withCompactConfig_shouldWriteSingleLine() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let input = common::create_test_file(&dir, "play.json", REPEATED_SPEAKERS).unwrap();
    let output = dir.join("play_clean.json");

    let config = Config {
        pretty_output: false,
        ..Config::default()
    };
    let controller = Controller::with_config(config).unwrap();
    controller.run_clean(&input, &output).unwrap();

    let text = std::fs::read_to_string(&output).unwrap();
    assert_eq!(text.lines().count(), 1);
}

/// Test cleaning a missing input file fails cleanly
#[test]
fn test_runClean_withMissingInput_shouldError() {
    let temp_dir = common::create_temp_dir().unwrap();

    let controller = Controller::with_config(Config::default()).unwrap();
    let result = controller.run_clean(
        temp_dir.path().join("absent.json"),
        temp_dir.path().join("out.json"),
    );
    assert!(result.is_err());
}
