// src/reference.rs
//! Local MIBiG reference dump → list of PKS cluster accessions.
//!
//! Only two fields of each record matter: `mibig_accession` and `biosyn_class`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::config::consts::PKS_CLASS;
use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct ReferenceFile {
    records: Vec<ReferenceRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceRecord {
    pub mibig_accession: String,
    #[serde(default)]
    pub biosyn_class: Vec<String>,
}

impl ReferenceRecord {
    pub fn is_pks(&self) -> bool {
        self.biosyn_class.iter().any(|c| c.eq_ignore_ascii_case(PKS_CLASS))
    }
}

/// Parse the dump and keep PKS accessions, file order.
pub fn pks_ids_from_str(json: &str) -> Result<Vec<String>> {
    let file: ReferenceFile = serde_json::from_str(json)?;
    Ok(file
        .records
        .into_iter()
        .filter(ReferenceRecord::is_pks)
        .map(|r| r.mibig_accession)
        .collect())
}

pub fn load_pks_ids(path: &Path) -> Result<Vec<String>> {
    logf!("Reading reference file {}", path.display());

    let ids = fs::read_to_string(path)
        .map_err(Error::from)
        .and_then(|text| pks_ids_from_str(&text))
        .map_err(|e| Error::Reference { path: path.to_path_buf(), source: Box::new(e) })?;

    logf!("Found {} PKS clusters", ids.len());
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_pks_case_insensitively_in_order() {
        let json = r#"{ "records": [
            { "mibig_accession": "BGC0000001", "biosyn_class": ["Polyketide", "PKS"] },
            { "mibig_accession": "BGC0000002", "biosyn_class": ["NRP"] },
            { "mibig_accession": "BGC0000003", "biosyn_class": ["NRP", "pks"] },
            { "mibig_accession": "BGC0000004" }
        ] }"#;
        assert_eq!(pks_ids_from_str(json).unwrap(), vec!["BGC0000001", "BGC0000003"]);
    }

    #[test]
    fn class_must_match_whole_tag() {
        let json = r#"{ "records": [
            { "mibig_accession": "BGC1", "biosyn_class": ["pks-like"] }
        ] }"#;
        assert!(pks_ids_from_str(json).unwrap().is_empty());
    }

    #[test]
    fn missing_records_key_is_an_error() {
        assert!(pks_ids_from_str(r#"{ "entries": [] }"#).is_err());
    }
}
