//! Finite cell window for an infinite scale.
//!
//! The renderer draws an odd number of cells centred on mark 0, shifts the
//! strip by [`wrapped_offset`] and relabels the cells by [`mark_offset`].
//! Because both wrap every `overflow` cells, the strip never has to grow
//! with the value.

use crate::range::{approximated, next_odd, Bounds};

/// One graduated cell of the strip, identified by its mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub mark: i64,
}

/// What a skin needs to draw one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellConfiguration {
    /// Mark of the cell within the strip
    pub mark: i64,
    /// Value displayed by the cell
    pub mark_value: f64,
    pub bounds: Bounds,
    pub step: f64,
}

#[derive(Debug, Clone)]
pub struct CellWindow {
    cells: Vec<Cell>,
    cell_width: f64,
    overflow: u32,
}

impl CellWindow {
    pub fn new(cell_width: f64, overflow: u32) -> Self {
        Self {
            cells: vec![Cell { mark: 0 }],
            cell_width,
            overflow,
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    #[inline]
    pub fn overflow(&self) -> u32 {
        self.overflow
    }

    /// Cell count needed to cover `extent` plus the overflow on each side.
    pub fn required_count(&self, extent: f64) -> usize {
        let visible = (extent / self.cell_width).ceil() as usize;
        next_odd(visible + 2 * self.overflow as usize)
    }

    /// Re-populate the strip when `extent` needs a different cell count.
    ///
    /// Returns `true` when the cells changed. Extents that are not positive
    /// finite numbers mean layout has not happened yet and are ignored.
    pub fn update_cells_if_needed(&mut self, extent: f64) -> bool {
        if !(extent > 0.0 && extent.is_finite()) {
            return false;
        }
        let count = self.required_count(extent);
        if count == self.cells.len() {
            return false;
        }

        let boundary = (count / 2) as i64;
        self.cells = (-boundary..=boundary).map(|mark| Cell { mark }).collect();
        tracing::debug!(count, "Cell window resized");
        true
    }

    /// Whole cells the labels are shifted by for `value`, a multiple of `overflow`.
    pub fn mark_offset(&self, value: f64, step: f64) -> f64 {
        let overflow = self.overflow.max(1) as f64;
        approximated(value / step / overflow).trunc() * overflow
    }

    /// Translation actually applied to the strip.
    pub fn wrapped_offset(&self, offset: f64) -> f64 {
        let period = self.cell_width * self.overflow.max(1) as f64;
        if !offset.is_finite() {
            return 0.0;
        }
        offset % period
    }

    pub fn cell_configurations(
        &self,
        mark_offset: f64,
        step: f64,
        bounds: Bounds,
    ) -> Vec<CellConfiguration> {
        self.cells
            .iter()
            .map(|cell| CellConfiguration {
                mark: cell.mark,
                mark_value: (cell.mark as f64 + mark_offset) * step,
                bounds,
                step,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_single_centre_cell() {
        let window = CellWindow::new(120.0, 3);
        assert_eq!(window.cells(), &[Cell { mark: 0 }]);
    }

    #[test]
    fn test_window_is_odd_and_centred() {
        let mut window = CellWindow::new(120.0, 3);
        for extent in [1.0, 119.0, 240.0, 375.0, 1000.0, 2561.0] {
            window.update_cells_if_needed(extent);
            let count = window.len();
            assert_eq!(count % 2, 1, "extent {extent}");
            assert!(window.cells().iter().any(|c| c.mark == 0));
            let boundary = (count / 2) as i64;
            assert_eq!(window.cells().first().map(|c| c.mark), Some(-boundary));
            assert_eq!(window.cells().last().map(|c| c.mark), Some(boundary));
        }
    }

    #[test]
    fn test_count_formula() {
        let mut window = CellWindow::new(120.0, 3);
        // ceil(375 / 120) = 4, + 6 = 10, next odd 11
        assert!(window.update_cells_if_needed(375.0));
        assert_eq!(window.len(), 11);
        assert!(!window.update_cells_if_needed(375.0));
        assert!(!window.update_cells_if_needed(400.0));
    }

    #[test]
    fn test_layout_not_ready_is_ignored() {
        let mut window = CellWindow::new(120.0, 3);
        assert!(!window.update_cells_if_needed(0.0));
        assert!(!window.update_cells_if_needed(f64::NAN));
        assert_eq!(window.len(), 1);
    }

    #[test]
    fn test_mark_offset_and_wrap_agree() {
        let window = CellWindow::new(120.0, 3);
        let value = 4.0;
        let offset = -value * 120.0;
        assert_eq!(window.mark_offset(value, 1.0), 3.0);
        assert_eq!(window.wrapped_offset(offset), -120.0);
        assert_eq!(window.mark_offset(-4.0, 1.0), -3.0);
        assert_eq!(window.wrapped_offset(480.0), 120.0);
    }

    #[test]
    fn test_cell_configurations_label_marks() {
        let mut window = CellWindow::new(100.0, 3);
        window.update_cells_if_needed(100.0);
        let configs = window.cell_configurations(3.0, 0.5, Bounds::unbounded());
        assert_eq!(configs.len(), window.len());
        let centre = configs.iter().find(|c| c.mark == 0).unwrap();
        assert_eq!(centre.mark_value, 1.5);
    }
}
