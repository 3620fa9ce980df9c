use anyhow::{Context, Result};
use log::debug;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::document::PlayDocument;

// @module: File and document I/O utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_parent_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
        }
        Ok(())
    }

    // @loads: Annotation document from a JSON file
    pub fn load_document<P: AsRef<Path>>(path: P) -> Result<PlayDocument> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read document: {}", path.display()))?;
        let doc: PlayDocument = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse document: {}", path.display()))?;

        debug!("Loaded document with {} scenes from {}", doc.scene_count(), path.display());
        Ok(doc)
    }

    // @saves: Annotation document as JSON, pretty or compact
    pub fn save_document<P: AsRef<Path>>(doc: &PlayDocument, path: P, pretty: bool) -> Result<()> {
        let path = path.as_ref();
        Self::ensure_parent_dir(path)?;

        let json = if pretty {
            serde_json::to_string_pretty(doc)
        } else {
            serde_json::to_string(doc)
        }
        .context("Failed to serialize document")?;

        fs::write(path, json)
            .with_context(|| format!("Failed to write document: {}", path.display()))?;
        debug!("Saved document with {} scenes to {}", doc.scene_count(), path.display());
        Ok(())
    }

    // @saves: Any serializable report as pretty JSON
    pub fn save_report<P: AsRef<Path>, R: Serialize>(report: &R, path: P) -> Result<()> {
        let path = path.as_ref();
        Self::ensure_parent_dir(path)?;

        let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        Ok(())
    }
}
