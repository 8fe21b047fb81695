// src/specs/tooltip.rs
//! Reading a single `div.jsdomain-tooltip` block.
//!
//! The tooltip's raw markup starts with the domain's profile name (e.g. `PKS_KS(Modular-KS)`)
//! and carries a location line plus two sequence widgets whose payload sits in a
//! `data-seq="…"` attribute. Everything here is a pure function of that markup.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::{NOT_FOUND, UNKNOWN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainType {
    KS,
    ACP,
}

impl DomainType {
    pub fn as_str(&self) -> &'static str {
        match self { DomainType::KS => "KS", DomainType::ACP => "ACP" }
    }
}

impl fmt::Display for DomainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Leading-text prefixes and the domain class they map to. First hit wins.
const PREFIXES: &[(&str, DomainType)] = &[
    ("PKS_KS", DomainType::KS),
    ("ACP", DomainType::ACP),
    ("PKS_PP", DomainType::ACP),
    ("PP-binding", DomainType::ACP),
    ("ACP_beta", DomainType::ACP),
];

static LOCATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Location:\s*(\d+-\d+ AA)").expect("location pattern"));
static AA_SEQ_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"AA sequence:.*?data-seq="([^"]+)""#).expect("aa pattern"));
static NT_SEQ_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"Nucleotide sequence:.*?data-seq="([^"]+)""#).expect("nt pattern"));

/// Fields pulled out of one qualifying tooltip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipInfo {
    pub domain_type: DomainType,
    pub location: String,
    pub aa_sequence: String,
    pub nt_sequence: String,
}

/// Classify by the tooltip's leading text. `None` means "not a KS/ACP domain".
pub fn classify(text: &str) -> Option<DomainType> {
    PREFIXES
        .iter()
        .find(|(prefix, _)| text.starts_with(prefix))
        .map(|&(_, kind)| kind)
}

pub fn extract_location(text: &str) -> String {
    first_capture(&LOCATION_RE, text).unwrap_or_else(|| s!(UNKNOWN))
}

pub fn extract_aa_sequence(text: &str) -> String {
    first_capture(&AA_SEQ_RE, text).unwrap_or_else(|| s!(NOT_FOUND))
}

pub fn extract_nt_sequence(text: &str) -> String {
    first_capture(&NT_SEQ_RE, text).unwrap_or_else(|| s!(NOT_FOUND))
}

/// Classify and extract in one go. Missing fields degrade to sentinels.
pub fn parse_tooltip(text: &str) -> Option<TooltipInfo> {
    let domain_type = classify(text)?;
    Some(TooltipInfo {
        domain_type,
        location: extract_location(text),
        aa_sequence: extract_aa_sequence(text),
        nt_sequence: extract_nt_sequence(text),
    })
}

fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const KS_TIP: &str = concat!(
        r#"PKS_KS(Modular-KS)<br>Location: 12-437 AA<br>"#,
        r#"AA sequence: <span class="copy" data-seq="MKLSEQ">copy</span><br>"#,
        r#"Nucleotide sequence: <span class="copy" data-seq="ATGAAA">copy</span>"#,
    );

    #[test]
    fn classify_prefix_table() {
        assert_eq!(classify("PKS_KS(Trans-AT-KS)"), Some(DomainType::KS));
        assert_eq!(classify("ACP"), Some(DomainType::ACP));
        assert_eq!(classify("ACP_beta"), Some(DomainType::ACP));
        assert_eq!(classify("PKS_PP"), Some(DomainType::ACP));
        assert_eq!(classify("PP-binding<br>"), Some(DomainType::ACP));
        assert_eq!(classify("PKS_AT"), None);
        assert_eq!(classify("Condensation_LCL"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn classify_is_anchored_at_start() {
        assert_eq!(classify(" PKS_KS"), None);
        assert_eq!(classify("<b>ACP</b>"), None);
    }

    #[test]
    fn extracts_all_fields() {
        let info = parse_tooltip(KS_TIP).unwrap();
        assert_eq!(info.domain_type, DomainType::KS);
        assert_eq!(info.location, "12-437 AA");
        assert_eq!(info.aa_sequence, "MKLSEQ");
        assert_eq!(info.nt_sequence, "ATGAAA");
    }

    #[test]
    fn missing_fields_fall_back_to_sentinels() {
        let info = parse_tooltip("ACP<br>no details here").unwrap();
        assert_eq!(info.location, "Unknown");
        assert_eq!(info.aa_sequence, "Not found");
        assert_eq!(info.nt_sequence, "Not found");
    }

    #[test]
    fn location_needs_start_end_and_unit() {
        assert_eq!(extract_location("Location: 12 AA"), "Unknown");
        assert_eq!(extract_location("Location:12-40 AA"), "12-40 AA");
        assert_eq!(extract_location("Location:   3-9 AA trailing"), "3-9 AA");
    }

    #[test]
    fn nucleotide_value_is_not_taken_from_aa_widget() {
        let tip = r#"ACP Nucleotide sequence: <span data-seq="GGG"></span>"#;
        assert_eq!(extract_aa_sequence(tip), "Not found");
        assert_eq!(extract_nt_sequence(tip), "GGG");
    }
}
