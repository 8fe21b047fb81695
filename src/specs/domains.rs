// src/specs/domains.rs
//! Domain → gene → module correlation for one cluster page.
//!
//! The page draws genes, modules and domains as separate SVG layers with no links between
//! them, so ownership is rebuilt from geometry alone:
//! - **gene**: the first label (page order) whose vertical midpoint is within
//!   `GENE_MID_TOLERANCE` of the domain box's midpoint. First match, not nearest.
//! - **module**: the first module rectangle (page order) containing the domain box's
//!   top-left corner, edges inclusive. `0` when none does.
//!
//! Pure over its inputs: same elements in, same entries out.

use crate::config::consts::{GENE_MID_TOLERANCE, UNKNOWN};
use crate::core::{BoundingBox, GeneLabel, ModuleRegion};
use super::tooltip::{self, DomainType};

/// Everything read off one rendered cluster page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageElements {
    pub gene_labels: Vec<GeneLabel>,
    pub module_regions: Vec<ModuleRegion>,
    /// Raw tooltip markup, index-aligned with `domain_boxes`.
    pub domain_tooltips: Vec<String>,
    /// `None` where the domain rect had no rendered geometry.
    pub domain_boxes: Vec<Option<BoundingBox>>,
}

/// One output row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainEntry {
    pub cluster_id: String,
    pub gene: String,
    pub module: u32,
    pub domain_type: DomainType,
    pub location: String,
    pub aa_sequence: String,
    pub nt_sequence: String,
}

impl DomainEntry {
    /// Cells in export column order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.cluster_id.clone(),
            self.gene.clone(),
            self.module.to_string(),
            s!(self.domain_type.as_str()),
            self.location.clone(),
            self.aa_sequence.clone(),
            self.nt_sequence.clone(),
        ]
    }
}

pub fn correlate(cluster_id: &str, page: &PageElements) -> Vec<DomainEntry> {
    let mut out = Vec::new();

    for (i, html) in page.domain_tooltips.iter().enumerate() {
        let Some(info) = tooltip::parse_tooltip(html) else { continue };

        // No geometry, no row
        let Some(bbox) = page.domain_boxes.get(i).copied().flatten() else {
            logd!("{cluster_id}: domain #{i} ({}) has no box; skipped", info.domain_type);
            continue;
        };

        out.push(DomainEntry {
            cluster_id: s!(cluster_id),
            gene: resolve_gene(&page.gene_labels, bbox.mid_y()),
            module: resolve_module(&page.module_regions, &bbox),
            domain_type: info.domain_type,
            location: info.location,
            aa_sequence: info.aa_sequence,
            nt_sequence: info.nt_sequence,
        });
    }
    out
}

/// First label in page order within tolerance, else "Unknown".
pub fn resolve_gene(labels: &[GeneLabel], mid_y: f64) -> String {
    labels
        .iter()
        .find(|g| (g.mid_y - mid_y).abs() < GENE_MID_TOLERANCE)
        .map(|g| g.name.clone())
        .unwrap_or_else(|| s!(UNKNOWN))
}

/// First module whose rectangle holds the box's top-left corner, else 0.
pub fn resolve_module(modules: &[ModuleRegion], bbox: &BoundingBox) -> u32 {
    modules
        .iter()
        .find(|m| m.bbox.contains_point(bbox.x, bbox.y))
        .map(|m| m.number)
        .unwrap_or(0)
}
