use anyhow::{anyhow, Result};
use log::{debug, info};
use std::path::Path;

use crate::app_config::Config;
use crate::bibliography::BibliographyTable;
use crate::cleaner::{CleanReport, SpeakerCleaner};
use crate::converter::{ConvertSummary, TextConverter};
use crate::file_utils::FileManager;
use crate::resolver::{ReferenceResolver, ResolutionReport};

// @module: Application controller for annotation processing

/// Main application controller driving each subcommand end to end
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Expand bibliography references in every annotation of a document.
    pub fn run_expand<P1: AsRef<Path>, P2: AsRef<Path>>(
        &self,
        input: P1,
        output: P2,
    ) -> Result<ResolutionReport> {
        let input = input.as_ref();
        let output = output.as_ref();

        let doc = FileManager::load_document(input)?;
        let stats = doc.stats();
        info!(
            "Loaded {}: {} scenes, {} lines, {} notes",
            input.display(),
            stats.scenes,
            stats.lines,
            stats.notes
        );

        let table = BibliographyTable::build();
        info!("Bibliography table ready with {} reference keys", table.len());

        let mut resolver = ReferenceResolver::new(table);
        let expanded = resolver.process_document(&doc);
        FileManager::save_document(&expanded, output, self.config.pretty_output)?;
        info!("Expanded document saved to {}", output.display());

        let report = resolver.into_report();
        self.log_resolution_report(&report);

        if let Some(report_path) = &self.config.report_path {
            FileManager::save_report(&report, report_path)?;
            info!("Resolution report saved to {}", report_path);
        }

        Ok(report)
    }

    /// Strip repeated speaker prefixes from consecutive dialogue lines.
    pub fn run_clean<P1: AsRef<Path>, P2: AsRef<Path>>(
        &self,
        input: P1,
        output: P2,
    ) -> Result<CleanReport> {
        let input = input.as_ref();
        let output = output.as_ref();

        let doc = FileManager::load_document(input)?;
        info!("Loaded {}: {} scenes", input.display(), doc.scene_count());

        let mut cleaner = SpeakerCleaner::new();
        let cleaned = cleaner.clean_document(&doc);
        FileManager::save_document(&cleaned, output, self.config.pretty_output)?;

        let report = cleaner.report();
        info!(
            "Cleaned {} scenes: {} lines examined, {} speaker prefixes stripped",
            report.scenes_processed, report.lines_examined, report.prefixes_stripped
        );
        info!("Cleaned document saved to {}", output.display());

        Ok(report)
    }

    /// Convert structured play text to JSON, for one file or a directory.
    pub fn run_convert<P: AsRef<Path>>(&self, input: P) -> Result<ConvertSummary> {
        let input = input.as_ref();
        let converter = TextConverter::new();

        if input.is_dir() {
            converter.convert_dir(input)
        } else if input.is_file() {
            let doc = converter.convert_file(input)?;
            let output = TextConverter::output_path(input);
            FileManager::save_document(&doc, &output, true)?;
            info!("Converted {} -> {}", input.display(), output.display());
            Ok(ConvertSummary {
                converted: 1,
                failed: 0,
            })
        } else {
            Err(anyhow!("Input path does not exist: {}", input.display()))
        }
    }

    fn log_resolution_report(&self, report: &ResolutionReport) {
        info!(
            "Processed {} scenes, {} lines, {} notes",
            report.scenes_processed, report.lines_processed, report.notes_processed
        );
        info!(
            "Expansions: {} total, {} distinct references resolved, {} unresolved",
            report.total_expansions,
            report.resolved_key_count(),
            report.unresolved_token_count()
        );

        for token in &report.unresolved_tokens {
            debug!("Unresolved reference: {}", token);
        }
    }
}
