use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Block, BorderType, Widget},
};
use rulerkit_core::{Axis, LayoutDirection, RenderSnapshot, RulerStyle};
use unicode_width::UnicodeWidthStr;

use super::skins::ScaleSkin;
use crate::theme::Theme;

/// Drawing surface in ruler coordinates.
///
/// `along` is measured in virtual pixels from the leading edge of the area,
/// `across` in whole terminal cells from the side the cursor points from.
pub struct Canvas<'a> {
    buf: &'a mut Buffer,
    area: Rect,
    axis: Axis,
    pixels_per_unit: f64,
    forward: f64,
}

impl<'a> Canvas<'a> {
    pub fn new(
        buf: &'a mut Buffer,
        area: Rect,
        axis: Axis,
        direction: LayoutDirection,
        pixels_per_column: f64,
        pixels_per_row: f64,
    ) -> Self {
        let (pixels_per_unit, forward) = match (axis, direction) {
            (Axis::Horizontal, LayoutDirection::LeftToRight) => (pixels_per_column, 1.0),
            (Axis::Horizontal, LayoutDirection::RightToLeft) => (pixels_per_column, -1.0),
            (Axis::Vertical, _) => (pixels_per_row, 1.0),
        };
        Self {
            buf,
            area,
            axis,
            pixels_per_unit,
            forward,
        }
    }

    /// Cells along the axis.
    pub fn length(&self) -> u16 {
        match self.axis {
            Axis::Horizontal => self.area.width,
            Axis::Vertical => self.area.height,
        }
    }

    /// Cells across the axis.
    pub fn depth(&self) -> u16 {
        match self.axis {
            Axis::Horizontal => self.area.height,
            Axis::Vertical => self.area.width,
        }
    }

    /// Visible extent in virtual pixels.
    pub fn length_px(&self) -> f64 {
        self.length() as f64 * self.pixels_per_unit
    }

    pub fn center_px(&self) -> f64 {
        self.length_px() / 2.0
    }

    /// +1 when increasing marks flow towards the trailing edge, -1 when mirrored.
    pub fn forward(&self) -> f64 {
        self.forward
    }

    /// Thin line glyph running across the axis.
    pub fn line(&self) -> &'static str {
        match self.axis {
            Axis::Horizontal => "│",
            Axis::Vertical => "─",
        }
    }

    pub fn heavy_line(&self) -> &'static str {
        match self.axis {
            Axis::Horizontal => "┃",
            Axis::Vertical => "━",
        }
    }

    /// Arrow pointing into the scale from the near side.
    pub fn pointer(&self) -> &'static str {
        match self.axis {
            Axis::Horizontal => "▼",
            Axis::Vertical => "▶",
        }
    }

    /// Arrow pointing into the scale from the far side.
    pub fn far_pointer(&self) -> &'static str {
        match self.axis {
            Axis::Horizontal => "▲",
            Axis::Vertical => "◀",
        }
    }

    fn index(&self, along_px: f64) -> Option<u16> {
        let index = (along_px / self.pixels_per_unit).floor();
        (index >= 0.0 && index < self.length() as f64).then_some(index as u16)
    }

    fn position(&self, along: u16, across: u16) -> Option<(u16, u16)> {
        if across >= self.depth() {
            return None;
        }
        Some(match self.axis {
            Axis::Horizontal => (self.area.x + along, self.area.y + across),
            Axis::Vertical => (self.area.x + across, self.area.y + along),
        })
    }

    pub fn glyph(&mut self, along_px: f64, across: u16, symbol: &str, style: Style) {
        let Some(along) = self.index(along_px) else {
            return;
        };
        if let Some(position) = self.position(along, across) {
            if let Some(cell) = self.buf.cell_mut(position) {
                cell.set_symbol(symbol).set_style(style);
            }
        }
    }

    /// Line across the axis covering `across` in `from..to`.
    pub fn mark(&mut self, along_px: f64, from: u16, to: u16, style: Style) {
        let symbol = self.line();
        for across in from..to {
            self.glyph(along_px, across, symbol, style);
        }
    }

    /// Text next to a mark: centred under it on horizontal rulers, starting
    /// at `across` on vertical ones.
    pub fn label(&mut self, along_px: f64, across: u16, text: &str, style: Style) {
        let Some(along) = self.index(along_px) else {
            return;
        };
        let width = text.width() as u16;
        let (x, y, max_width) = match self.axis {
            Axis::Horizontal => {
                if across >= self.area.height {
                    return;
                }
                let start = along.saturating_sub(width.saturating_sub(1) / 2);
                (
                    self.area.x + start,
                    self.area.y + across,
                    self.area.width.saturating_sub(start),
                )
            }
            Axis::Vertical => {
                if across >= self.area.width {
                    return;
                }
                (
                    self.area.x + across,
                    self.area.y + along,
                    self.area.width - across,
                )
            }
        };
        self.buf.set_span(x, y, &Span::styled(text, style), max_width);
    }
}

/// One sliding ruler: bordered strip of cells with the cursor on top.
pub struct RulerWidget<'a> {
    snapshot: &'a RenderSnapshot,
    skin: &'a dyn ScaleSkin,
    theme: &'a Theme,
    format: &'a dyn Fn(f64) -> String,
    axis: Axis,
    direction: LayoutDirection,
    pixels_per_column: f64,
    pixels_per_row: f64,
    cursor_lit: bool,
    border_lit: bool,
}

impl<'a> RulerWidget<'a> {
    pub fn new(
        snapshot: &'a RenderSnapshot,
        skin: &'a dyn ScaleSkin,
        theme: &'a Theme,
        format: &'a dyn Fn(f64) -> String,
    ) -> Self {
        Self {
            snapshot,
            skin,
            theme,
            format,
            axis: Axis::Horizontal,
            direction: LayoutDirection::LeftToRight,
            pixels_per_column: 12.0,
            pixels_per_row: 24.0,
            cursor_lit: false,
            border_lit: false,
        }
    }

    pub fn layout(mut self, axis: Axis, direction: LayoutDirection) -> Self {
        self.axis = axis;
        self.direction = direction;
        self
    }

    pub fn scale(mut self, pixels_per_column: f64, pixels_per_row: f64) -> Self {
        self.pixels_per_column = pixels_per_column;
        self.pixels_per_row = pixels_per_row;
        self
    }

    /// Haptic pulses currently lit.
    pub fn pulses(mut self, cursor_lit: bool, border_lit: bool) -> Self {
        self.cursor_lit = cursor_lit;
        self.border_lit = border_lit;
        self
    }
}

/// Area inside the border, also what mouse presses are matched against.
pub fn inner_area(area: Rect) -> Rect {
    ruler_block(false, &Theme::default()).inner(area)
}

fn ruler_block(border_lit: bool, theme: &Theme) -> Block<'static> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(border_lit))
        .style(Style::default().bg(theme.bg0))
}

impl Widget for RulerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} ", (self.format)(self.snapshot.value));
        let block = ruler_block(self.border_lit, self.theme).title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut canvas = Canvas::new(
            buf,
            inner,
            self.axis,
            self.direction,
            self.pixels_per_column,
            self.pixels_per_row,
        );
        let center = canvas.center_px();
        let cell_width = self.skin.cell_width();
        let forward = canvas.forward();

        for cell in &self.snapshot.cells {
            let mark_px =
                center + forward * cell.mark as f64 * cell_width + self.snapshot.wrapped_offset;
            self.skin
                .render_cell(&mut canvas, cell, mark_px, self.theme, self.format);
        }

        let cursor_style = self.theme.cursor_style(self.cursor_lit);
        self.skin.render_cursor(&mut canvas, center, cursor_style);
    }
}
