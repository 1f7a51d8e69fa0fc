//! Portfolio document loading.
//!
//! Reads and parses the JSON document from disk. Failure handling is the
//! caller's choice: [`try_load`] surfaces the error, and the API layer
//! pairs it with [`PortfolioData::fallback`] so pages always render.

use std::path::{Path, PathBuf};

use crate::content::{self, PortfolioData};
use crate::error::CoreError;

/// Resolve the document path, mirroring the legacy lookup order.
///
/// Uses the configured path when the file exists, otherwise falls back to
/// the bare file name in the working directory (the project root).
pub fn resolve_data_path(configured: &Path) -> PathBuf {
    if configured.exists() {
        return configured.to_path_buf();
    }
    match configured.file_name() {
        Some(name) => PathBuf::from(name),
        None => configured.to_path_buf(),
    }
}

/// Read and parse the portfolio document at `path`.
///
/// Any I/O failure, JSON syntax error, missing top-level key, or malformed
/// experience date fails the whole load.
pub fn try_load(path: &Path) -> Result<PortfolioData, CoreError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(content::parse(&raw)?)
}
