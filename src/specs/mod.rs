// src/specs/mod.rs
//! # Page-reading “specs”
//!
//! Knows how to turn the element collections of a MIBiG cluster page into rows.
//!
//! ## What lives here
//! - **Tooltip reading** (`tooltip`): domain class from the leading profile name, plus the
//!   location and the two `data-seq` payloads.
//! - **Correlation** (`domains`): the spatial join that attributes each domain box to a gene
//!   label and a module rectangle.
//!
//! ## What does **not** live here
//! - Getting the elements (see `page::DomainPage`).
//! - Deciding which clusters to visit, or writing files (`scrape`, `file`).
//!
//! ## Conventions & invariants
//! - Inputs are plain values in page order; order is meaningful (first match wins).
//! - Nothing here fails: absent fields degrade to "Unknown" / "Not found", and a domain
//!   without a box is dropped.
//!
//! ## Typical call chain
//! ```text
//! scrape::collect_domains → page::fetch_elements → specs::domains::correlate
//! ```
pub mod domains;
pub mod tooltip;

pub use domains::{correlate, DomainEntry, PageElements};
pub use tooltip::DomainType;
