/*!
 * End-to-end tests for the convert workflow
 */

use variorum::app_config::Config;
use variorum::app_controller::Controller;
use variorum::document::{play_text, PlayDocument};

use crate::common;

const STRUCTURED: &str = "\
ACT I, SCENE I
1: First Witch: When shall we three meet again
2: In thunder, lightning, or in rain?

ACT I, SCENE II
1: DUNCAN: What bloody man is that?
";

/// Test converting a single file writes its JSON sibling
#[test]
fn test_runConvert_withSingleFile_shouldWriteJson() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let input = common::create_test_file(&dir, "macbeth_structured.txt", STRUCTURED).unwrap();

    let controller = Controller::with_config(Config::default()).unwrap();
    let summary = controller.run_convert(&input).unwrap();

    assert_eq!(summary.converted, 1);
    assert_eq!(summary.failed, 0);

    let text = std::fs::read_to_string(dir.join("macbeth.json")).unwrap();
    let doc: PlayDocument = serde_json::from_str(&text).unwrap();
    assert_eq!(doc.scene_count(), 2);

    let scene = doc.scenes.get("ACT I, SCENE I").unwrap().as_object().unwrap();
    assert_eq!(
        play_text(scene.get("2").unwrap()),
        Some("First Witch: In thunder, lightning, or in rain?")
    );
}

/// Test converting a directory tree of structured files
#[test]
fn test_runConvert_withDirectory_shouldConvertAllStructuredFiles() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let nested = dir.join("plays");
    std::fs::create_dir_all(&nested).unwrap();
    common::create_test_file(&dir, "macbeth_structured.txt", STRUCTURED).unwrap();
    common::create_test_file(&nested, "hamlet_structured.txt", STRUCTURED).unwrap();
    common::create_test_file(&dir, "README.txt", "nothing structured here").unwrap();

    let controller = Controller::with_config(Config::default()).unwrap();
    let summary = controller.run_convert(&dir).unwrap();

    assert_eq!(summary.converted, 2);
    assert_eq!(summary.failed, 0);
    assert!(dir.join("macbeth.json").exists());
    assert!(nested.join("hamlet.json").exists());
}

/// Test a converted document feeds straight into the expand workflow
#[test]
fn test_runConvert_thenExpand_shouldChainWorkflows() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let structured = "\
ACT I, SCENE I
1: Macbeth: So foul and fair a day I have not seen
";
    let input = common::create_test_file(&dir, "macbeth_structured.txt", structured).unwrap();

    let controller = Controller::with_config(Config::default()).unwrap();
    controller.run_convert(&input).unwrap();

    let report = controller
        .run_expand(dir.join("macbeth.json"), dir.join("macbeth_expanded.json"))
        .unwrap();

    // Freshly converted documents have no annotations yet
    assert_eq!(report.notes_processed, 0);
    assert_eq!(report.lines_processed, 1);
    assert_eq!(report.total_expansions, 0);
}
