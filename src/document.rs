/*!
 * Document model for annotated play editions.
 *
 * A play document is a nested JSON structure keyed by act/scene label, then by
 * line key, with each line holding the dialogue text and an ordered list of
 * annotation strings:
 *
 * ```json
 * { "ACT I, SCENE I": { "1": { "play": "...", "notes": ["..."] } } }
 * ```
 *
 * Line keys may be numeric or symbolic and keep the insertion order of the
 * source file. Lines that do not match the expected shape are carried as raw
 * JSON values so they can pass through processing unchanged.
 */

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A complete annotated play document.
///
/// The wrapper is transparent: it serializes to and from the plain nested
/// object shape shown above, preserving key order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayDocument {
    /// Act/scene label -> scene contents
    pub scenes: Map<String, Value>,
}

impl PlayDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of act/scene sections in the document.
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Insert a line record into a scene, creating the scene if needed.
    pub fn insert_line(&mut self, scene: &str, line_key: &str, record: LineRecord) {
        let scene_entry = self
            .scenes
            .entry(scene.to_string())
            .or_insert_with(|| Value::Object(Map::new()));

        if let Value::Object(lines) = scene_entry {
            lines.insert(line_key.to_string(), record.into_value());
        }
    }

    /// Gather structure statistics for diagnostics.
    pub fn stats(&self) -> DocumentStats {
        let mut stats = DocumentStats::default();
        stats.scenes = self.scenes.len();

        for scene_value in self.scenes.values() {
            let Some(lines) = scene_value.as_object() else {
                continue;
            };
            stats.lines += lines.len();

            for line_value in lines.values() {
                if play_text(line_value).is_some() {
                    stats.play_texts += 1;
                }
                if let Some(notes) = notes_array(line_value) {
                    stats.notes += notes.len();
                }
            }
        }

        stats
    }
}

/// A well-formed line record with dialogue text and annotations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineRecord {
    /// Dialogue text, optionally prefixed with "Speaker: "
    pub play: String,

    /// Ordered annotation strings; a missing list is valid and means none
    #[serde(default)]
    pub notes: Vec<String>,
}

impl LineRecord {
    /// Create a record with dialogue text and no annotations.
    pub fn new(play: &str) -> Self {
        Self {
            play: play.to_string(),
            notes: Vec::new(),
        }
    }

    /// Convert into the raw JSON value stored in a scene.
    pub fn into_value(self) -> Value {
        // Serializing a two-field struct cannot fail
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Extract the dialogue text from a raw line value, if it has the expected shape.
pub fn play_text(line_value: &Value) -> Option<&str> {
    line_value.as_object()?.get("play")?.as_str()
}

/// Extract the annotation list from a raw line value, if present.
pub fn notes_array(line_value: &Value) -> Option<&Vec<Value>> {
    line_value.as_object()?.get("notes")?.as_array()
}

/// Order line keys numerically where possible, then lexicographically.
///
/// Source files mix numeric line numbers with symbolic keys; numeric keys sort
/// first by value, symbolic keys follow in string order.
pub fn sorted_line_keys(lines: &Map<String, Value>) -> Vec<String> {
    let mut keys: Vec<String> = lines.keys().cloned().collect();
    keys.sort_by(|a, b| match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(na), Ok(nb)) => na.cmp(&nb),
        (Ok(_), Err(_)) => std::cmp::Ordering::Less,
        (Err(_), Ok(_)) => std::cmp::Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    });
    keys
}

/// Structure statistics for an annotation document.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct DocumentStats {
    /// Number of act/scene sections
    pub scenes: usize,

    /// Number of line entries across all scenes
    pub lines: usize,

    /// Number of lines carrying dialogue text
    pub play_texts: usize,

    /// Number of annotation strings across all lines
    pub notes: usize,
}
