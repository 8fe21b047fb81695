// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not read reference file {path}: {source}")]
    Reference {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Page(#[from] PageError),
}

/// Failures of the page capability. None of these stop a run; the cluster is skipped.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("could not load page for {id}: {reason}")]
    Load { id: String, reason: String },

    #[error("domain panel unavailable for {id}")]
    PanelUnavailable { id: String },

    #[error("malformed page capture for {id}: {reason}")]
    Parse { id: String, reason: String },

    #[error("no page open")]
    NotOpen,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
