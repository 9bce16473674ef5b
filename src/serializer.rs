//! Serialization module for converting Swagger documents to YAML or JSON format.
//!
//! This module provides functions to serialize generated documents into standard
//! formats and write them to files or return them as strings.

use crate::document::SwaggerDocument;
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Serializes a Swagger document to YAML format.
///
/// The output is standard YAML, suitable for OpenAPI 2.0 tooling and
/// documentation viewers.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_yaml(doc: &SwaggerDocument) -> Result<String> {
    debug!("Serializing Swagger document to YAML");
    serde_yaml::to_string(doc).context("Failed to serialize Swagger document to YAML")
}

/// Serializes a Swagger document to JSON format with pretty printing.
///
/// The output is indented for readability, making it suitable for human review
/// and version control.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_json(doc: &SwaggerDocument) -> Result<String> {
    debug!("Serializing Swagger document to JSON");
    serde_json::to_string_pretty(doc).context("Failed to serialize Swagger document to JSON")
}

/// Writes string content to a file.
///
/// Creates the file if it doesn't exist, or overwrites it if it does. Missing
/// parent directories are created.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    debug!("Writing content to file: {}", path.display());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;

    debug!("Successfully wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
