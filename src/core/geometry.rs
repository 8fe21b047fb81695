// src/core/geometry.rs
// Plain value geometry for rendered page elements. Screen coordinates, y grows downward.

use serde::{Deserialize, Serialize};

/// Bounding box of a rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[inline] pub fn x2(&self) -> f64 { self.x + self.width }
    #[inline] pub fn y2(&self) -> f64 { self.y + self.height }

    #[inline]
    pub fn mid_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Closed-interval containment: points on the edges count as inside.
    #[inline]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x2() && y >= self.y && y <= self.y2()
    }
}

/// One rendered gene track label.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneLabel {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub mid_y: f64,
}

impl GeneLabel {
    pub fn from_box(name: impl Into<String>, bbox: &BoundingBox) -> Self {
        Self {
            name: name.into(),
            x: bbox.x,
            y: bbox.y,
            mid_y: bbox.mid_y(),
        }
    }
}

/// One rendered module rectangle. Numbers are 1-based, in page order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModuleRegion {
    pub number: u32,
    pub bbox: BoundingBox,
}

impl ModuleRegion {
    /// Number boxes 1..N in the order given.
    pub fn numbered(boxes: impl IntoIterator<Item = BoundingBox>) -> Vec<ModuleRegion> {
        boxes
            .into_iter()
            .zip(1u32..)
            .map(|(bbox, number)| ModuleRegion { number, bbox })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mid_y_is_half_height_below_top() {
        let b = BoundingBox::new(5.0, 100.0, 30.0, 20.0);
        assert_eq!(b.mid_y(), 110.0);
    }

    #[test]
    fn contains_point_is_closed_on_every_edge() {
        let b = BoundingBox::new(10.0, 10.0, 20.0, 20.0);
        assert!(b.contains_point(10.0, 10.0));
        assert!(b.contains_point(30.0, 30.0));
        assert!(b.contains_point(30.0, 10.0));
        assert!(!b.contains_point(30.01, 15.0));
        assert!(!b.contains_point(15.0, 9.99));
    }

    #[test]
    fn numbered_starts_at_one() {
        let mods = ModuleRegion::numbered(vec![
            BoundingBox::new(0.0, 0.0, 1.0, 1.0),
            BoundingBox::new(2.0, 0.0, 1.0, 1.0),
        ]);
        assert_eq!(mods.iter().map(|m| m.number).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn gene_label_keeps_box_midpoint() {
        let g = GeneLabel::from_box("pksA", &BoundingBox::new(1.0, 40.0, 50.0, 12.0));
        assert_eq!(g.name, "pksA");
        assert_eq!(g.mid_y, 46.0);
    }
}
