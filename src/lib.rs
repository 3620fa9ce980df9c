/*!
 * # variorum
 *
 * A Rust library and CLI for post-processing annotated Shakespeare editions
 * stored as line-indexed JSON.
 *
 * ## Features
 *
 * - Expand abbreviated bibliography references in footnotes into full
 *   citations, with fuzzy matching for misspelled and OCR-mangled author
 *   names
 * - Strip repeated speaker prefixes from consecutive dialogue lines
 * - Convert structured play text files into the JSON document format
 * - Accumulate resolution statistics across a whole document
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `document`: Annotation document model (act/scene -> line -> record)
 * - `bibliography`: Bibliography table construction and variant generation
 * - `resolver`: Reference detection, fuzzy matching, and substitution
 * - `cleaner`: Speaker prefix de-duplication
 * - `converter`: Structured text to JSON conversion
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod bibliography;
pub mod cleaner;
pub mod converter;
pub mod document;
pub mod errors;
pub mod file_utils;
pub mod resolver;

// Re-export main types for easier usage
pub use app_config::Config;
pub use bibliography::BibliographyTable;
pub use cleaner::SpeakerCleaner;
pub use converter::TextConverter;
pub use document::{LineRecord, PlayDocument};
pub use errors::{AppError, ConvertError, DocumentError};
pub use resolver::{ReferenceResolver, ResolutionReport};
