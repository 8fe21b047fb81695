// src/core/mod.rs

pub mod geometry;

pub use geometry::{BoundingBox, GeneLabel, ModuleRegion};
