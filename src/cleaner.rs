/*!
 * Speaker label clean-up for play text.
 *
 * Scraped editions repeat the speaker prefix on every dialogue line of a
 * speech ("MACBETH: ..." five lines in a row). The cleaner walks each scene
 * in line order and strips the prefix from lines that continue the previous
 * speaker's speech, leaving the first line of each speech intact.
 */

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::document::{notes_array, play_text, sorted_line_keys, PlayDocument};

/// Speaker prefixes like "First Witch: ..." or "DUNCAN: ...".
static SPEAKER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Z][a-zA-Z\s]+):\s*(.*)$").unwrap()
});

/// Counters for a clean-up run.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct CleanReport {
    /// Act/scene sections cleaned
    pub scenes_processed: usize,

    /// Dialogue lines examined
    pub lines_examined: usize,

    /// Speaker prefixes removed
    pub prefixes_stripped: usize,
}

/// Removes repeated speaker prefixes from consecutive dialogue lines.
#[derive(Debug, Default)]
pub struct SpeakerCleaner {
    report: CleanReport,
}

impl SpeakerCleaner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a dialogue line into (speaker, text) when it carries a prefix.
    pub fn extract_speaker(line: &str) -> Option<(String, String)> {
        let captures = SPEAKER_REGEX.captures(line)?;
        let speaker = captures.get(1)?.as_str().trim().to_string();
        let text = captures.get(2)?.as_str().trim().to_string();
        Some((speaker, text))
    }

    /// Clean every scene of a document, returning a new document.
    pub fn clean_document(&mut self, doc: &PlayDocument) -> PlayDocument {
        let mut cleaned = PlayDocument::new();

        for (scene_label, scene_value) in &doc.scenes {
            match scene_value.as_object() {
                Some(lines) => {
                    debug!("Cleaning {} ({} lines)", scene_label, lines.len());
                    let cleaned_lines = self.clean_scene(lines);
                    cleaned
                        .scenes
                        .insert(scene_label.clone(), Value::Object(cleaned_lines));
                    self.report.scenes_processed += 1;
                }
                None => {
                    warn!("Unexpected structure for {}, keeping as is", scene_label);
                    cleaned.scenes.insert(scene_label.clone(), scene_value.clone());
                }
            }
        }

        cleaned
    }

    /// Clean one scene. Lines are visited in numeric order first, then
    /// symbolic keys; the output map follows that order.
    pub fn clean_scene(&mut self, lines: &Map<String, Value>) -> Map<String, Value> {
        let mut cleaned = Map::new();
        let mut previous_speaker = String::new();

        for line_key in sorted_line_keys(lines) {
            let Some(line_value) = lines.get(&line_key) else {
                continue;
            };

            let Some(play) = play_text(line_value) else {
                // Not a dialogue record, keep untouched
                cleaned.insert(line_key, line_value.clone());
                continue;
            };

            self.report.lines_examined += 1;
            let cleaned_play = match Self::extract_speaker(play) {
                Some((speaker, text)) if speaker == previous_speaker => {
                    self.report.prefixes_stripped += 1;
                    text
                }
                Some((speaker, text)) => {
                    previous_speaker = speaker.clone();
                    format!("{}: {}", speaker, text)
                }
                None => {
                    previous_speaker.clear();
                    play.to_string()
                }
            };

            let notes = notes_array(line_value).cloned().unwrap_or_default();
            cleaned.insert(line_key, json!({ "play": cleaned_play, "notes": notes }));
        }

        cleaned
    }

    /// Snapshot of the running counters.
    pub fn report(&self) -> CleanReport {
        self.report
    }
}
