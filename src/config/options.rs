// src/config/options.rs
use std::path::{ Path, PathBuf };
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClusterSelector {
    /// Every PKS cluster in the reference file
    All,
    /// Only these accessions (still filtered to PKS)
    Ids(Vec<String>),
}

impl ClusterSelector {
    /// Apply the selection to the PKS id list, keeping reference-file order.
    pub fn apply(&self, pks_ids: Vec<String>) -> Vec<String> {
        match self {
            ClusterSelector::All => pks_ids,
            ClusterSelector::Ids(wanted) => pks_ids
                .into_iter()
                .filter(|id| wanted.iter().any(|w| w.eq_ignore_ascii_case(id)))
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub reference: PathBuf,
    pub snapshots: PathBuf,
    pub clusters: ClusterSelector,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            reference: PathBuf::from(DEFAULT_REFERENCE_FILE),
            snapshots: PathBuf::from(DEFAULT_SNAPSHOT_DIR),
            clusters: ClusterSelector::All,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: PathBuf::from(DEFAULT_OUT_FILE),
        }
    }
}

impl ExportOptions {
    /// Final output path. A path without an extension gets the format's one.
    pub fn out_path(&self) -> PathBuf {
        if self.out_path.extension().is_none() {
            self.out_path.with_extension(self.format.ext())
        } else {
            self.out_path.clone()
        }
    }

    pub fn set_path(&mut self, path: impl AsRef<Path>) {
        self.out_path = path.as_ref().to_path_buf();
    }
}
