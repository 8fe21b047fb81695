// src/page.rs
//! The rendered cluster page, seen through a narrow capability interface.
//!
//! `DomainPage` is all the pipeline needs from a page: open it, click the domain panel,
//! and read the three element collections with their bounding boxes. Anything that can do
//! that (a live browser driver, a saved capture) plugs in here; the correlator never sees it.
//!
//! `SnapshotPage` reads captures saved as `<dir>/<cluster_id>.json`:
//! ```json
//! {
//!   "controls": ["Overview", "NRPS/PKS domains"],
//!   "elements": {
//!     "text.jsdomain-orflabel": [{ "text": "pksA", "box": { "x": 0, "y": 40, "width": 30, "height": 12 } }],
//!     "rect.jsdomain-module, rect.jsdomain-incomplete-module": [{ "box": { … } }],
//!     "div.jsdomain-tooltip": [{ "html": "PKS_KS(…)<br>Location: 1-420 AA…" }],
//!     "rect.jsdomain-domain": [{ "box": { … } }, { "box": null }]
//!   }
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{ Path, PathBuf };

use serde::{ Deserialize, Serialize };

use crate::config::consts::*;
use crate::core::{ BoundingBox, GeneLabel, ModuleRegion };
use crate::error::PageError;
use crate::specs::PageElements;

pub trait DomainPage {
    /// Load the cluster's page and let it settle.
    fn open(&mut self, cluster_id: &str) -> Result<(), PageError>;

    /// Click the "NRPS/PKS domains" control and unhide the tooltips.
    fn reveal_domains(&mut self) -> Result<(), PageError>;

    /// Gene labels with a rendered box, page order, names trimmed.
    fn gene_labels(&mut self) -> Result<Vec<GeneLabel>, PageError>;

    /// Module rectangles with a rendered box, numbered 1..N in page order.
    fn module_regions(&mut self) -> Result<Vec<ModuleRegion>, PageError>;

    /// Tooltip markup and the index-aligned domain boxes.
    fn domain_tooltips_and_boxes(
        &mut self,
    ) -> Result<(Vec<String>, Vec<Option<BoundingBox>>), PageError>;
}

pub fn cluster_url(cluster_id: &str) -> String {
    join!(REPOSITORY_URL, cluster_id)
}

/// Drive one page visit in the order the page needs: open, reveal, read.
pub fn fetch_elements(
    page: &mut dyn DomainPage,
    cluster_id: &str,
) -> Result<PageElements, PageError> {
    page.open(cluster_id)?;
    page.reveal_domains()?;

    let gene_labels = page.gene_labels()?;
    let module_regions = page.module_regions()?;
    let (domain_tooltips, domain_boxes) = page.domain_tooltips_and_boxes()?;

    logd!(
        "{cluster_id}: {} gene labels, {} modules, {} tooltips, {} domain boxes",
        gene_labels.len(),
        module_regions.len(),
        domain_tooltips.len(),
        domain_boxes.iter().filter(|b| b.is_some()).count()
    );

    Ok(PageElements { gene_labels, module_regions, domain_tooltips, domain_boxes })
}

/* ---------------- Saved captures ---------------- */

/// One element as captured from the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CapturedElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, rename = "box")]
    pub bbox: Option<BoundingBox>,
}

/// Whole-page capture: visible control labels and elements keyed by selector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageCapture {
    #[serde(default)]
    pub controls: Vec<String>,
    #[serde(default)]
    pub elements: HashMap<String, Vec<CapturedElement>>,
}

impl PageCapture {
    pub fn select(&self, selector: &str) -> &[CapturedElement] {
        self.elements.get(selector).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_control(&self, label: &str) -> bool {
        self.controls.iter().any(|c| c.trim() == label)
    }
}

/// `DomainPage` over captures stored as `<dir>/<cluster_id>.json`.
pub struct SnapshotPage {
    dir: PathBuf,
    current: Option<(String, PageCapture)>,
}

impl SnapshotPage {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self { dir: dir.as_ref().to_path_buf(), current: None }
    }

    pub fn capture_path(&self, cluster_id: &str) -> PathBuf {
        self.dir.join(join!(cluster_id, ".json"))
    }

    fn capture(&self) -> Result<(&str, &PageCapture), PageError> {
        self.current
            .as_ref()
            .map(|(id, cap)| (id.as_str(), cap))
            .ok_or(PageError::NotOpen)
    }
}

impl DomainPage for SnapshotPage {
    fn open(&mut self, cluster_id: &str) -> Result<(), PageError> {
        self.current = None;
        let path = self.capture_path(cluster_id);

        let text = fs::read_to_string(&path).map_err(|e| PageError::Load {
            id: s!(cluster_id),
            reason: format!("{}: {e}", path.display()),
        })?;
        let capture: PageCapture = serde_json::from_str(&text).map_err(|e| PageError::Parse {
            id: s!(cluster_id),
            reason: e.to_string(),
        })?;

        self.current = Some((s!(cluster_id), capture));
        Ok(())
    }

    fn reveal_domains(&mut self) -> Result<(), PageError> {
        let (id, cap) = self.capture()?;
        if cap.has_control(DOMAIN_PANEL_TEXT) {
            Ok(())
        } else {
            Err(PageError::PanelUnavailable { id: s!(id) })
        }
    }

    fn gene_labels(&mut self) -> Result<Vec<GeneLabel>, PageError> {
        let (_, cap) = self.capture()?;
        Ok(cap
            .select(SEL_GENE_LABEL)
            .iter()
            .filter_map(|el| {
                let bbox = el.bbox?;
                let name = el.text.as_deref().unwrap_or("").trim();
                Some(GeneLabel::from_box(name, &bbox))
            })
            .collect())
    }

    fn module_regions(&mut self) -> Result<Vec<ModuleRegion>, PageError> {
        let (_, cap) = self.capture()?;
        // Only rendered rects take a number
        Ok(ModuleRegion::numbered(
            cap.select(SEL_MODULE).iter().filter_map(|el| el.bbox),
        ))
    }

    fn domain_tooltips_and_boxes(
        &mut self,
    ) -> Result<(Vec<String>, Vec<Option<BoundingBox>>), PageError> {
        let (_, cap) = self.capture()?;
        let tooltips: Vec<String> = cap
            .select(SEL_TOOLTIP)
            .iter()
            .map(|el| el.html.clone().or_else(|| el.text.clone()).unwrap_or_default())
            .collect();
        let boxes: Vec<Option<BoundingBox>> = cap.select(SEL_DOMAIN).iter().map(|el| el.bbox).collect();
        Ok((tooltips, boxes))
    }
}
