// src/config/consts.rs

// Site
pub const REPOSITORY_URL: &str = "https://mibig.secondarymetabolites.org/repository/";
pub const DOMAIN_PANEL_TEXT: &str = "NRPS/PKS domains";

// Page selectors
pub const SEL_GENE_LABEL: &str = "text.jsdomain-orflabel";
pub const SEL_MODULE: &str = "rect.jsdomain-module, rect.jsdomain-incomplete-module";
pub const SEL_TOOLTIP: &str = "div.jsdomain-tooltip";
pub const SEL_DOMAIN: &str = "rect.jsdomain-domain";

// Correlation
pub const GENE_MID_TOLERANCE: f64 = 10.0;

// Sentinels
pub const UNKNOWN: &str = "Unknown";
pub const NOT_FOUND: &str = "Not found";

// Reference dataset
pub const DEFAULT_REFERENCE_FILE: &str = "mibig_json_2.0.json";
pub const PKS_CLASS: &str = "pks";

// Local cache
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const DEFAULT_SNAPSHOT_DIR: &str = "snapshots";

// Export
pub const DEFAULT_OUT_FILE: &str = "acp_ks_pks_only.csv";
pub const EXPORT_HEADERS: [&str; 7] = [
    "BGC ID", "Gene", "Module", "Domain", "Location", "AA Sequence", "NT Sequence",
];
