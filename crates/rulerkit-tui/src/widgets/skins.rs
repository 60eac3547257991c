//! Ruler skins.
//!
//! A skin supplies the metrics the engine needs (through [`RulerStyle`]) and
//! knows how to draw one cell and the cursor on a [`Canvas`].

use ratatui::style::Style;
use rulerkit_core::config::StyleConfig;
use rulerkit_core::{CellConfiguration, CursorAlignment, RulerStyle};

use super::ruler::Canvas;
use crate::theme::Theme;

/// Graduation rank inside a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Graduation {
    Major,
    Half,
    Minor,
}

pub trait ScaleSkin: RulerStyle {
    fn name(&self) -> &'static str;

    /// Draw `cell`, whose leading mark sits at `mark_px` along the axis.
    fn render_cell(
        &self,
        canvas: &mut Canvas<'_>,
        cell: &CellConfiguration,
        mark_px: f64,
        theme: &Theme,
        format: &dyn Fn(f64) -> String,
    );

    /// Draw the cursor at `center_px`.
    fn render_cursor(&self, canvas: &mut Canvas<'_>, center_px: f64, style: Style);
}

/// Visit every graduation of `cell` with its position and value.
fn for_each_graduation(
    style: &dyn RulerStyle,
    canvas: &Canvas<'_>,
    cell: &CellConfiguration,
    mark_px: f64,
    mut f: impl FnMut(Graduation, f64, f64),
) {
    let fractions = style.fractions();
    let spacing = style.cell_width() / fractions as f64;
    let value_spacing = cell.step / fractions as f64;
    let half = style.has_half().then_some(fractions / 2);

    for k in 0..fractions {
        let rank = match k {
            0 => Graduation::Major,
            k if Some(k) == half => Graduation::Half,
            _ => Graduation::Minor,
        };
        let along = mark_px + canvas.forward() * k as f64 * spacing;
        let value = cell.mark_value + k as f64 * value_spacing;
        f(rank, along, value);
    }
}

/// Ticks hang from the near edge, labels below them, cursor arrow on top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimarySkin {
    pub cell_width: f64,
    pub fractions: u32,
}

impl Default for PrimarySkin {
    fn default() -> Self {
        Self {
            cell_width: 120.0,
            fractions: 10,
        }
    }
}

impl RulerStyle for PrimarySkin {
    fn cell_width(&self) -> f64 {
        self.cell_width
    }

    fn fractions(&self) -> u32 {
        self.fractions
    }
}

impl ScaleSkin for PrimarySkin {
    fn name(&self) -> &'static str {
        "primary"
    }

    fn render_cell(
        &self,
        canvas: &mut Canvas<'_>,
        cell: &CellConfiguration,
        mark_px: f64,
        theme: &Theme,
        format: &dyn Fn(f64) -> String,
    ) {
        let mut marks = Vec::with_capacity(self.fractions as usize);
        for_each_graduation(self, canvas, cell, mark_px, |rank, along, value| {
            marks.push((rank, along, value));
        });

        for (rank, along, value) in marks {
            let in_bounds = cell.bounds.contains(value);
            let length = match rank {
                Graduation::Major => 3,
                Graduation::Half => 2,
                Graduation::Minor => 1,
            };
            canvas.mark(
                along,
                0,
                length,
                theme.graduation(rank == Graduation::Major, in_bounds),
            );
            if rank == Graduation::Major {
                canvas.label(along, 3, &format(value), theme.label_style(in_bounds));
            }
        }
    }

    fn render_cursor(&self, canvas: &mut Canvas<'_>, center_px: f64, style: Style) {
        canvas.glyph(center_px, 0, canvas.pointer(), style);
        let line = canvas.heavy_line();
        for across in 1..3 {
            canvas.glyph(center_px, across, line, style);
        }
    }
}

/// Ticks centred on the middle of the strip with a full-height cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenteredSkin {
    pub cell_width: f64,
    pub fractions: u32,
}

impl Default for CenteredSkin {
    fn default() -> Self {
        Self {
            cell_width: 120.0,
            fractions: 10,
        }
    }
}

impl RulerStyle for CenteredSkin {
    fn cell_width(&self) -> f64 {
        self.cell_width
    }

    fn fractions(&self) -> u32 {
        self.fractions
    }

    fn cursor_alignment(&self) -> CursorAlignment {
        CursorAlignment::Center
    }
}

impl ScaleSkin for CenteredSkin {
    fn name(&self) -> &'static str {
        "centered"
    }

    fn render_cell(
        &self,
        canvas: &mut Canvas<'_>,
        cell: &CellConfiguration,
        mark_px: f64,
        theme: &Theme,
        format: &dyn Fn(f64) -> String,
    ) {
        // Last row holds labels, ticks are centred on the rest.
        let label_row = canvas.depth().saturating_sub(1);
        let mid = label_row / 2;

        let mut marks = Vec::with_capacity(self.fractions as usize);
        for_each_graduation(self, canvas, cell, mark_px, |rank, along, value| {
            marks.push((rank, along, value));
        });

        for (rank, along, value) in marks {
            let in_bounds = cell.bounds.contains(value);
            let (from, to) = match rank {
                Graduation::Major => (mid.saturating_sub(1), mid + 2),
                Graduation::Half => (mid.saturating_sub(1), mid + 1),
                Graduation::Minor => (mid, mid + 1),
            };
            canvas.mark(
                along,
                from,
                to.min(label_row),
                theme.graduation(rank == Graduation::Major, in_bounds),
            );
            if rank == Graduation::Major {
                canvas.label(along, label_row, &format(value), theme.label_style(in_bounds));
            }
        }
    }

    fn render_cursor(&self, canvas: &mut Canvas<'_>, center_px: f64, style: Style) {
        let label_row = canvas.depth().saturating_sub(1);
        let line = canvas.heavy_line();
        for across in 0..label_row {
            canvas.glyph(center_px, across, line, style);
        }
    }
}

/// Bare graduations rising from the far edge, no labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlankSkin {
    pub cell_width: f64,
    pub fractions: u32,
}

impl Default for BlankSkin {
    fn default() -> Self {
        Self {
            cell_width: 120.0,
            fractions: 10,
        }
    }
}

impl RulerStyle for BlankSkin {
    fn cell_width(&self) -> f64 {
        self.cell_width
    }

    fn fractions(&self) -> u32 {
        self.fractions
    }

    fn has_marks(&self) -> bool {
        false
    }

    fn cursor_alignment(&self) -> CursorAlignment {
        CursorAlignment::Bottom
    }
}

impl ScaleSkin for BlankSkin {
    fn name(&self) -> &'static str {
        "blank"
    }

    fn render_cell(
        &self,
        canvas: &mut Canvas<'_>,
        cell: &CellConfiguration,
        mark_px: f64,
        theme: &Theme,
        _format: &dyn Fn(f64) -> String,
    ) {
        let depth = canvas.depth();
        let mut marks = Vec::with_capacity(self.fractions as usize);
        for_each_graduation(self, canvas, cell, mark_px, |rank, along, value| {
            marks.push((rank, along, value));
        });

        for (rank, along, value) in marks {
            let length = match rank {
                Graduation::Major => 3,
                Graduation::Half => 2,
                Graduation::Minor => 1,
            };
            canvas.mark(
                along,
                depth.saturating_sub(length),
                depth,
                theme.graduation(rank == Graduation::Major, cell.bounds.contains(value)),
            );
        }
    }

    fn render_cursor(&self, canvas: &mut Canvas<'_>, center_px: f64, style: Style) {
        let depth = canvas.depth();
        let line = canvas.heavy_line();
        for across in 0..depth.saturating_sub(1) {
            canvas.glyph(center_px, across, line, style);
        }
        canvas.glyph(center_px, depth.saturating_sub(1), canvas.far_pointer(), style);
    }
}

/// Skin selector used by config and the `c` key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SkinKind {
    #[default]
    Primary,
    Centered,
    Blank,
}

impl SkinKind {
    pub const ALL: [SkinKind; 3] = [Self::Primary, Self::Centered, Self::Blank];

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "primary" => Some(Self::Primary),
            "centered" | "centred" => Some(Self::Centered),
            "blank" => Some(Self::Blank),
            _ => None,
        }
    }

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Instantiate with the configured cell metrics.
    pub fn build(self, style: &StyleConfig) -> Box<dyn ScaleSkin> {
        let (cell_width, fractions) = (style.cell_width, style.fractions);
        match self {
            SkinKind::Primary => Box::new(PrimarySkin {
                cell_width,
                fractions,
            }),
            SkinKind::Centered => Box::new(CenteredSkin {
                cell_width,
                fractions,
            }),
            SkinKind::Blank => Box::new(BlankSkin {
                cell_width,
                fractions,
            }),
        }
    }
}
