/*!
 * Error types for the variorum application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when loading or saving annotation documents
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Error reading or writing a document file
    #[error("Document I/O failed: {0}")]
    Io(String),

    /// Error parsing a document from JSON
    #[error("Failed to parse document: {0}")]
    ParseError(String),

    /// Document does not have the expected act/scene -> line shape
    #[error("Unexpected document structure: {0}")]
    InvalidStructure(String),
}

/// Errors that can occur when converting structured play text
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Error reading the structured text file
    #[error("Failed to read structured text: {0}")]
    ReadFailed(String),

    /// A dialogue line appeared before any ACT/SCENE header
    #[error("Dialogue line outside of any scene: {0}")]
    LineOutsideScene(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from document handling
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Error from structured text conversion
    #[error("Conversion error: {0}")]
    Convert(#[from] ConvertError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
