//! Style-derived metrics the engine depends on.
//!
//! Rendering belongs to the host. The engine only asks a style for the
//! numbers that influence physics: cell size, graduation count and axis.

use crate::config::StyleConfig;
use crate::gesture::Axis;

/// Cross-axis placement of the cursor relative to the scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CursorAlignment {
    #[default]
    Top,
    Center,
    Bottom,
}

pub trait RulerStyle {
    /// Width of one cell along the axis, in virtual pixels.
    fn cell_width(&self) -> f64 {
        120.0
    }

    /// Graduations per cell.
    fn fractions(&self) -> u32 {
        10
    }

    /// Whether a half mark is drawn, which makes half ticks meaningful.
    fn has_half(&self) -> bool {
        self.fractions() % 2 == 0
    }

    /// Whether cells carry value labels.
    fn has_marks(&self) -> bool {
        true
    }

    fn cursor_alignment(&self) -> CursorAlignment {
        CursorAlignment::Top
    }

    fn axis(&self) -> Axis {
        Axis::Horizontal
    }
}

/// Plain metrics, mostly built from [`StyleConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleMetrics {
    pub cell_width: f64,
    pub fractions: u32,
    pub has_marks: bool,
    pub cursor_alignment: CursorAlignment,
    pub axis: Axis,
}

impl Default for StyleMetrics {
    fn default() -> Self {
        Self {
            cell_width: 120.0,
            fractions: 10,
            has_marks: true,
            cursor_alignment: CursorAlignment::Top,
            axis: Axis::Horizontal,
        }
    }
}

impl StyleMetrics {
    pub fn from_config(config: &StyleConfig, axis: Axis) -> Self {
        Self {
            cell_width: config.cell_width,
            fractions: config.fractions,
            axis,
            ..Default::default()
        }
    }

    /// Snapshot any style's metrics.
    pub fn of(style: &dyn RulerStyle) -> Self {
        Self {
            cell_width: style.cell_width(),
            fractions: style.fractions(),
            has_marks: style.has_marks(),
            cursor_alignment: style.cursor_alignment(),
            axis: style.axis(),
        }
    }
}

impl RulerStyle for StyleMetrics {
    fn cell_width(&self) -> f64 {
        self.cell_width
    }

    fn fractions(&self) -> u32 {
        self.fractions
    }

    fn has_marks(&self) -> bool {
        self.has_marks
    }

    fn cursor_alignment(&self) -> CursorAlignment {
        self.cursor_alignment
    }

    fn axis(&self) -> Axis {
        self.axis
    }
}
