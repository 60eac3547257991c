use std::time::Instant;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};
use rulerkit_core::Axis;

use crate::app::App;
use crate::widgets::{inner_area, RulerWidget, StatusBarWidget};

/// Rows a horizontal ruler takes, border included.
const HORIZONTAL_RULER_HEIGHT: u16 = 6;
/// Columns a vertical ruler takes, border included.
const VERTICAL_RULER_WIDTH: u16 = 14;

/// Draw one frame: the ruler centred in the screen and the status bar.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let [main, status] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    let area = ruler_area(main, app.axis());
    app.set_ruler_area(inner_area(area));
    let snapshot = app.render_snapshot();

    let now = Instant::now();
    let format = |value: f64| app.ruler.format(value);
    let widget = RulerWidget::new(&snapshot, app.skin(), &app.theme, &format)
        .layout(app.axis(), app.direction())
        .scale(app.config.ui.pixels_per_column, app.config.ui.pixels_per_row)
        .pulses(app.haptics.cursor_lit(now), app.haptics.border_lit(now));
    frame.render_widget(widget, area);

    StatusBarWidget::render(frame, status, app, &snapshot);
}

fn ruler_area(main: Rect, axis: Axis) -> Rect {
    match axis {
        Axis::Horizontal => {
            let [_, ruler, _] = Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(HORIZONTAL_RULER_HEIGHT),
                Constraint::Fill(1),
            ])
            .areas(main);
            ruler
        }
        Axis::Vertical => {
            let [_, ruler, _] = Layout::horizontal([
                Constraint::Fill(1),
                Constraint::Length(VERTICAL_RULER_WIDTH),
                Constraint::Fill(1),
            ])
            .areas(main);
            ruler
        }
    }
}
