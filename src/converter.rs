/*!
 * Structured play text to JSON conversion.
 *
 * Structured text files carry one `ACT X, SCENE Y` header per scene followed
 * by dialogue records of the form `line: speaker: dialogue` or, for speech
 * continuations, `line: dialogue`. The converter parses them into the
 * document model; directory mode converts every `*_structured.txt` file it
 * finds, writing `<stem>.json` next to each.
 */

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::document::{LineRecord, PlayDocument};

/// Suffix identifying convertible text files.
const STRUCTURED_SUFFIX: &str = "_structured.txt";

/// Outcome of a directory conversion run.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ConvertSummary {
    /// Files converted and written
    pub converted: usize,

    /// Files that failed to convert
    pub failed: usize,
}

/// Parses structured play text into annotation documents.
#[derive(Debug, Default)]
pub struct TextConverter;

impl TextConverter {
    pub fn new() -> Self {
        Self
    }

    /// Parse structured text into a document.
    ///
    /// Dialogue before the first scene header is ignored. The current
    /// speaker carries across continuation lines (and scene headers, as the
    /// source files rely on).
    pub fn convert_text(&self, text: &str) -> PlayDocument {
        let mut doc = PlayDocument::new();
        let mut current_scene: Option<String> = None;
        let mut current_speaker: Option<String> = None;

        for raw_line in text.lines() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            if line.starts_with("ACT ") && line.contains("SCENE ") {
                doc.scenes
                    .entry(line.to_string())
                    .or_insert_with(|| serde_json::Value::Object(serde_json::Map::new()));
                current_scene = Some(line.to_string());
                continue;
            }

            if !line.contains(':') {
                continue;
            }

            let mut parts = line.splitn(3, ':');
            let line_key = parts.next().unwrap_or_default().trim().to_string();
            let second = parts.next().map(|part| part.trim().to_string());
            let third = parts.next().map(|part| part.trim().to_string());

            let dialogue = match (second, third) {
                (Some(speaker), Some(dialogue)) => {
                    current_speaker = Some(speaker);
                    dialogue
                }
                (Some(dialogue), None) => dialogue,
                _ => continue,
            };

            let Some(scene) = &current_scene else {
                warn!("Skipping dialogue before any scene header: {}", line);
                continue;
            };

            let play = match &current_speaker {
                Some(speaker) => format!("{}: {}", speaker, dialogue),
                None => dialogue,
            };
            doc.insert_line(scene, &line_key, LineRecord::new(&play));
        }

        doc
    }

    /// Convert a single structured text file.
    pub fn convert_file(&self, path: &Path) -> Result<PlayDocument> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read structured text: {}", path.display()))?;

        let doc = self.convert_text(&text);
        let stats = doc.stats();
        info!(
            "Converted {}: {} scenes, {} dialogue lines",
            path.display(),
            stats.scenes,
            stats.lines
        );

        Ok(doc)
    }

    /// Output path for a converted file: `<stem>.json` next to the input.
    pub fn output_path(path: &Path) -> PathBuf {
        let file_name = path.file_name().map(|name| name.to_string_lossy()).unwrap_or_default();
        let stem = file_name
            .strip_suffix(STRUCTURED_SUFFIX)
            .unwrap_or(&file_name);
        path.with_file_name(format!("{}.json", stem))
    }

    /// Convert every `*_structured.txt` file under `dir`.
    pub fn convert_dir(&self, dir: &Path) -> Result<ConvertSummary> {
        let mut summary = ConvertSummary::default();

        for entry in WalkDir::new(dir).into_iter().filter_map(|entry| entry.ok()) {
            let path = entry.path();
            if path.is_dir()
                || !path
                    .file_name()
                    .map(|name| name.to_string_lossy().ends_with(STRUCTURED_SUFFIX))
                    .unwrap_or(false)
            {
                continue;
            }

            match self.write_converted(path) {
                Ok(output) => {
                    info!("Converted {} -> {}", path.display(), output.display());
                    summary.converted += 1;
                }
                Err(error) => {
                    warn!("Failed to convert {}: {:#}", path.display(), error);
                    summary.failed += 1;
                }
            }
        }

        info!(
            "Conversion complete: {} converted, {} failed",
            summary.converted, summary.failed
        );
        Ok(summary)
    }

    fn write_converted(&self, path: &Path) -> Result<PathBuf> {
        let doc = self.convert_file(path)?;
        let output = Self::output_path(path);
        let json = serde_json::to_string_pretty(&doc)
            .context("Failed to serialize converted document")?;
        fs::write(&output, json)
            .with_context(|| format!("Failed to write converted document: {}", output.display()))?;
        Ok(output)
    }
}
