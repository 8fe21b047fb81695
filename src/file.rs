// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::EXPORT_HEADERS;
use crate::config::options::ExportOptions;
use crate::csv::rows_to_string;
use crate::error::Result;
use crate::specs::DomainEntry;

/// Write all entries as one table (header row first).
/// Returns `None` without touching the filesystem when there is nothing to write.
pub fn write_export(export: &ExportOptions, entries: &[DomainEntry]) -> Result<Option<PathBuf>> {
    if entries.is_empty() {
        return Ok(None);
    }

    let path = export.out_path();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let rows: Vec<Vec<String>> = entries.iter().map(DomainEntry::to_row).collect();
    let contents = rows_to_string(&EXPORT_HEADERS, &rows, export.format.delim())?;

    fs::write(&path, contents)?;
    logf!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(Some(path))
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        )
        .into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
