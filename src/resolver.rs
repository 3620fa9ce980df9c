/*!
 * Reference resolution for annotation text.
 *
 * The resolver scans free-form footnote text for candidate author tokens,
 * matches them against the bibliography table exactly or fuzzily, and
 * substitutes matches with full citations. Every call feeds a running
 * resolution report; the report only ever grows during a run.
 */

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::collections::BTreeSet;

use crate::bibliography::BibliographyTable;
use crate::document::{notes_array, play_text, PlayDocument};

/// Maximal runs of capitalized words, multi-word runs allowed ("Van Dam").
/// A heuristic over raw text: it over-matches sentence-initial words and
/// under-matches lowercased references, by design of the source edition.
static CANDIDATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)\b").unwrap()
});

/// Candidates shorter than this never reach matching.
const MIN_CANDIDATE_LEN: usize = 3;

/// A fuzzy match is accepted only strictly above this score.
const ACCEPTANCE_THRESHOLD: f32 = 0.7;

/// Running statistics for a resolution run.
///
/// Sets deduplicate tokens; the expansion counter counts every accepted
/// candidate occurrence. Nothing here is ever reset mid-run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResolutionReport {
    /// Accepted candidate occurrences across all `resolve` calls
    pub total_expansions: usize,

    /// Distinct reference keys that were matched
    pub resolved_keys: BTreeSet<String>,

    /// Distinct candidate tokens with no accepted match
    pub unresolved_tokens: BTreeSet<String>,

    /// Act/scene sections walked by `process_document`
    pub scenes_processed: usize,

    /// Well-formed lines walked by `process_document`
    pub lines_processed: usize,

    /// Annotation strings walked by `process_document`
    pub notes_processed: usize,
}

impl ResolutionReport {
    /// Number of distinct reference keys resolved.
    pub fn resolved_key_count(&self) -> usize {
        self.resolved_keys.len()
    }

    /// Number of distinct candidate tokens left unresolved.
    pub fn unresolved_token_count(&self) -> usize {
        self.unresolved_tokens.len()
    }
}

/// Resolves abbreviated references in annotation text against a bibliography.
#[derive(Debug)]
pub struct ReferenceResolver {
    table: BibliographyTable,
    report: ResolutionReport,
}

impl ReferenceResolver {
    /// Create a resolver bound to a bibliography table.
    pub fn new(table: BibliographyTable) -> Self {
        Self {
            table,
            report: ResolutionReport::default(),
        }
    }

    /// Expand every recognized reference in `text`, returning the new text.
    ///
    /// Each distinct candidate is matched once. A run that is itself a table
    /// key is replaced whole-word. A multi-word run like "See Murray" is not
    /// a key, so its words are looked up on their own and each known word is
    /// replaced in place, keeping its neighbours. Only then does the run go
    /// to fuzzy matching, where substitution targets the portion of the run
    /// the matched key accounts for, never the surrounding words. The
    /// expansion counter grows by the candidate's occurrence count per
    /// accepted match; unmatched candidates stay in place and are recorded
    /// as unresolved.
    pub fn resolve(&mut self, text: &str) -> String {
        let mut expanded = text.to_string();

        for (candidate, occurrences) in candidate_occurrences(text) {
            if self.table.contains_key(&candidate) {
                expanded = self.expand_candidate(expanded, &candidate, &candidate, occurrences);
                continue;
            }

            if candidate.contains(' ') {
                let known_words = self.known_words(&candidate);
                if !known_words.is_empty() {
                    for word in known_words {
                        expanded = self.expand_candidate(expanded, &word, &word, occurrences);
                    }
                    continue;
                }
            }

            match self.closest_key(&candidate) {
                Some(key) => {
                    // A multi-word run only reaches the fuzzy path through the
                    // substring tier, so the key names a portion of the run;
                    // a single-word run is itself the misspelled token.
                    let target = if candidate.contains(' ') {
                        matched_portion(&candidate, &key).unwrap_or(candidate.as_str())
                    } else {
                        candidate.as_str()
                    };
                    let target = target.to_string();
                    expanded = self.expand_candidate(expanded, &target, &key, occurrences);
                }
                None => {
                    debug!("Unresolved reference: {}", candidate);
                    self.report.unresolved_tokens.insert(candidate);
                }
            }
        }

        expanded
    }

    /// Replace all whole-word occurrences of `target` with the citation for
    /// `key`, recording the expansion.
    fn expand_candidate(
        &mut self,
        text: String,
        target: &str,
        key: &str,
        occurrences: usize,
    ) -> String {
        // citation_for cannot miss for a key the table produced
        let citation = self.table.citation_for(key).unwrap_or_default().to_string();

        let expanded = replace_whole_word(&text, target, &citation);
        self.report.total_expansions += occurrences;
        self.report.resolved_keys.insert(key.to_string());
        debug!("Expanded '{}' to '{}'", target, citation);
        expanded
    }

    /// Distinct words of a multi-word run that are table keys on their own.
    fn known_words(&self, run: &str) -> Vec<String> {
        let mut words: Vec<String> = Vec::new();

        for word in run.split_whitespace() {
            if word.chars().count() < MIN_CANDIDATE_LEN || !self.table.contains_key(word) {
                continue;
            }
            if !words.iter().any(|seen| seen == word) {
                words.push(word.to_string());
            }
        }

        words
    }

    /// Walk a whole document, resolving every annotation string.
    ///
    /// Returns a new document of identical shape. Dialogue text passes
    /// through unchanged. Lines without the expected `play` field pass
    /// through unchanged and are logged as structural anomalies; they do not
    /// count as processed lines.
    pub fn process_document(&mut self, doc: &PlayDocument) -> PlayDocument {
        let mut processed = PlayDocument::new();

        for (scene_label, scene_value) in &doc.scenes {
            let Some(lines) = scene_value.as_object() else {
                warn!("Unexpected structure for {}, keeping as is", scene_label);
                processed.scenes.insert(scene_label.clone(), scene_value.clone());
                continue;
            };

            debug!("Processing {} ({} lines)", scene_label, lines.len());
            let mut processed_lines = Map::new();

            for (line_key, line_value) in lines {
                match play_text(line_value) {
                    Some(play) => {
                        let notes = self.resolve_notes(line_value);
                        processed_lines
                            .insert(line_key.clone(), json!({ "play": play, "notes": notes }));
                        self.report.lines_processed += 1;
                    }
                    None => {
                        warn!(
                            "Unexpected line structure in {}, line {}",
                            scene_label, line_key
                        );
                        processed_lines.insert(line_key.clone(), line_value.clone());
                    }
                }
            }

            processed
                .scenes
                .insert(scene_label.clone(), Value::Object(processed_lines));
            self.report.scenes_processed += 1;
        }

        processed
    }

    /// Snapshot of the running statistics.
    pub fn report(&self) -> &ResolutionReport {
        &self.report
    }

    /// Consume the resolver and return the final report.
    pub fn into_report(self) -> ResolutionReport {
        self.report
    }

    /// Resolve the annotation list of a well-formed line.
    ///
    /// A missing list is valid and yields an empty one. Blank or non-string
    /// annotations become empty strings, keeping list positions stable.
    fn resolve_notes(&mut self, line_value: &Value) -> Vec<Value> {
        let Some(notes) = notes_array(line_value) else {
            return Vec::new();
        };

        self.report.notes_processed += notes.len();
        notes
            .iter()
            .map(|note| match note.as_str() {
                Some(text) if !text.trim().is_empty() => Value::String(self.resolve(text)),
                _ => Value::String(String::new()),
            })
            .collect()
    }

    /// Best fuzzy match for a candidate, if any key scores above threshold.
    ///
    /// Table iteration order is unspecified, so score ties are broken
    /// deterministically: a key appearing verbatim in the candidate beats
    /// one that does not (the case forms of a key all tie with it on the
    /// substring tier), then the lexicographically smaller key wins.
    fn closest_key(&self, candidate: &str) -> Option<String> {
        let mut best: Option<(&str, f32)> = None;

        for (key, _) in self.table.iter() {
            let score = similarity(candidate, key);
            if score <= ACCEPTANCE_THRESHOLD {
                continue;
            }

            let better = match best {
                None => true,
                Some((best_key, best_score)) => {
                    score > best_score
                        || (score == best_score && tie_prefers(candidate, key, best_key))
                }
            };
            if better {
                best = Some((key, score));
            }
        }

        best.map(|(key, _)| key.to_string())
    }
}

/// Tie-break between two equally scored keys for a candidate.
fn tie_prefers(candidate: &str, key: &str, best: &str) -> bool {
    let key_verbatim = candidate.contains(key);
    let best_verbatim = candidate.contains(best);
    if key_verbatim != best_verbatim {
        return key_verbatim;
    }
    key < best
}

/// The slice of a candidate run that a key accounts for, located by
/// case-folded search but returned as it appears in the run.
fn matched_portion<'a>(candidate: &'a str, key: &str) -> Option<&'a str> {
    let folded = candidate.to_lowercase();
    let key_folded = key.to_lowercase();
    let start = folded.find(&key_folded)?;
    candidate.get(start..start + key_folded.len())
}

/// Heuristic similarity between a candidate and a reference key, in [0, 1].
///
/// The tiers and thresholds reproduce the source edition's behavior and are
/// deliberately not a principled edit-distance metric: downstream output
/// (which tokens end up unresolved) depends on these exact values.
pub fn similarity(a: &str, b: &str) -> f32 {
    let a_folded = a.to_lowercase();
    let b_folded = b.to_lowercase();

    if a_folded == b_folded {
        return 0.95;
    }

    if is_likely_typo(&a_folded, &b_folded) {
        return 0.9;
    }

    if a_folded.chars().count() > 2
        && b_folded.chars().count() > 2
        && (a_folded.contains(&b_folded) || b_folded.contains(&a_folded))
    {
        return 0.8;
    }

    0.0
}

/// Equal length with at most two differing character positions.
fn is_likely_typo(a_folded: &str, b_folded: &str) -> bool {
    let a_chars: Vec<char> = a_folded.chars().collect();
    let b_chars: Vec<char> = b_folded.chars().collect();

    if a_chars.len() != b_chars.len() {
        return false;
    }

    let differences = a_chars
        .iter()
        .zip(b_chars.iter())
        .filter(|(a, b)| a != b)
        .count();
    differences <= 2
}

/// Distinct candidates in first-seen order, with their occurrence counts.
fn candidate_occurrences(text: &str) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();

    for capture in CANDIDATE_REGEX.captures_iter(text) {
        let Some(token) = capture.get(1) else {
            continue;
        };
        let candidate = token.as_str();
        if candidate.chars().count() < MIN_CANDIDATE_LEN {
            continue;
        }

        match counts.iter_mut().find(|(seen, _)| seen == candidate) {
            Some((_, count)) => *count += 1,
            None => counts.push((candidate.to_string(), 1)),
        }
    }

    counts
}

/// Replace all whole-word occurrences of `token` in `text` with `replacement`.
fn replace_whole_word(text: &str, token: &str, replacement: &str) -> String {
    let pattern = format!(r"\b{}\b", regex::escape(token));
    match Regex::new(&pattern) {
        Ok(word_regex) => word_regex
            .replace_all(text, NoExpand(replacement))
            .into_owned(),
        // An escaped literal always compiles; keep the text if it somehow doesn't
        Err(_) => text.to_string(),
    }
}
