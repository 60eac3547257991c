//! Value <-> offset conversion.
//!
//! The scale moves opposite to the value: dragging the scale left (negative
//! offset) increases the value. One cell width of offset equals one step of
//! value.
//!
//! Offsets are kept in a logical, left-to-right space. Right-to-left layouts
//! are handled once at the edges: gesture input is mirrored on the way in
//! (`directional`) and the rendered offset on the way out. Vertical rulers
//! are never mirrored.

use serde::{Deserialize, Serialize};

use crate::gesture::{Axis, Vec2};
use crate::range::Bounds;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutDirection {
    #[default]
    #[serde(rename = "ltr")]
    LeftToRight,
    #[serde(rename = "rtl")]
    RightToLeft,
}

/// Conversion parameters for one ruler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mapper {
    pub cell_width: f64,
    pub step: f64,
    pub direction: LayoutDirection,
    pub axis: Axis,
}

impl Mapper {
    /// Mirror `x` when the ruler is horizontal in a right-to-left layout.
    #[inline]
    pub fn directional(&self, x: f64) -> f64 {
        match (self.axis, self.direction) {
            (Axis::Horizontal, LayoutDirection::RightToLeft) => -x,
            _ => x,
        }
    }

    /// Mirror only the primary-axis component.
    pub fn directional_vector(&self, v: Vec2) -> Vec2 {
        match self.axis {
            Axis::Horizontal => Vec2::new(self.directional(v.x), v.y),
            Axis::Vertical => Vec2::new(v.x, self.directional(v.y)),
        }
    }

    pub fn value_from_offset(&self, offset: f64) -> f64 {
        -offset / self.cell_width * self.step
    }

    pub fn offset_from_value(&self, value: f64) -> f64 {
        -value * self.cell_width / self.step
    }

    /// Offsets the scale may rest at for `bounds`.
    ///
    /// The upper value maps to the lowest offset. Infinite sides stay infinite.
    pub fn drag_bounds(&self, bounds: &Bounds) -> Bounds {
        let lower = if bounds.upper().is_infinite() {
            f64::NEG_INFINITY
        } else {
            -bounds.upper() * self.cell_width / self.step
        };
        let upper = if bounds.lower().is_infinite() {
            f64::INFINITY
        } else {
            -bounds.lower() * self.cell_width / self.step
        };
        Bounds::new_unchecked(lower, upper)
    }
}
