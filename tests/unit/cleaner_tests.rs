/*!
 * Tests for speaker prefix clean-up
 */

use serde_json::json;
use variorum::cleaner::SpeakerCleaner;
use variorum::document::{play_text, PlayDocument};

fn document(value: serde_json::Value) -> PlayDocument {
    serde_json::from_value(value).unwrap()
}

/// Test a full document clean-up over several scenes
#[test]
fn test_cleanDocument_withRepeatedSpeakers_shouldStripContinuations() {
    let doc = document(json!({
        "ACT I, SCENE I": {
            "1": { "play": "First Witch: When shall we three meet again", "notes": [] },
            "2": { "play": "First Witch: In thunder, lightning, or in rain?", "notes": [] },
            "3": { "play": "Second Witch: When the hurlyburly's done", "notes": [] }
        },
        "ACT I, SCENE II": {
            "1": { "play": "DUNCAN: What bloody man is that?", "notes": [] }
        }
    }));

    let mut cleaner = SpeakerCleaner::new();
    let cleaned = cleaner.clean_document(&doc);

    let scene = cleaned.scenes.get("ACT I, SCENE I").unwrap().as_object().unwrap();
    assert_eq!(
        play_text(scene.get("2").unwrap()),
        Some("In thunder, lightning, or in rain?")
    );
    assert_eq!(
        play_text(scene.get("3").unwrap()),
        Some("Second Witch: When the hurlyburly's done")
    );
    assert_eq!(cleaner.report().scenes_processed, 2);
    assert_eq!(cleaner.report().lines_examined, 4);
    assert_eq!(cleaner.report().prefixes_stripped, 1);
}

/// Test that speaker runs do not leak across scene boundaries within a scene walk
#[test]
fn test_cleanDocument_newScene_shouldStartFreshSpeakerRun() {
    let doc = document(json!({
        "ACT I, SCENE I": {
            "1": { "play": "MACBETH: So foul and fair a day", "notes": [] }
        },
        "ACT I, SCENE II": {
            "1": { "play": "MACBETH: I have not seen", "notes": [] }
        }
    }));

    let mut cleaner = SpeakerCleaner::new();
    let cleaned = cleaner.clean_document(&doc);

    // Each scene walk starts with no previous speaker
    let scene = cleaned.scenes.get("ACT I, SCENE II").unwrap().as_object().unwrap();
    assert_eq!(play_text(scene.get("1").unwrap()), Some("MACBETH: I have not seen"));
    assert_eq!(cleaner.report().prefixes_stripped, 0);
}

/// Test that annotations survive clean-up untouched
#[test]
fn test_cleanDocument_shouldPreserveNotes() {
    let doc = document(json!({
        "ACT I, SCENE I": {
            "1": { "play": "MACBETH: So foul", "notes": ["1. foul] Capell"] },
            "2": { "play": "MACBETH: and fair", "notes": ["2. fair] Furness"] }
        }
    }));

    let mut cleaner = SpeakerCleaner::new();
    let cleaned = cleaner.clean_document(&doc);

    let scene = cleaned.scenes.get("ACT I, SCENE I").unwrap().as_object().unwrap();
    assert_eq!(scene.get("2").unwrap()["notes"], json!(["2. fair] Furness"]));
}

/// Test that a non-object scene value passes through unchanged
#[test]
fn test_cleanDocument_malformedScene_shouldPassThrough() {
    let doc = document(json!({
        "PROLOGUE": "spoken by the Chorus",
        "ACT I, SCENE I": {
            "1": { "play": "MACBETH: So foul", "notes": [] }
        }
    }));

    let mut cleaner = SpeakerCleaner::new();
    let cleaned = cleaner.clean_document(&doc);

    assert_eq!(cleaned.scenes.get("PROLOGUE").unwrap(), &json!("spoken by the Chorus"));
    assert_eq!(cleaner.report().scenes_processed, 1);
}
