use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use rulerkit_core::RenderSnapshot;
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, snapshot: &RenderSnapshot) {
        let theme = &app.theme;
        let mode_str = if app.editing.get() {
            "EDITING".to_string()
        } else {
            snapshot.state.name().to_uppercase()
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {} | {}", app.ruler.format(snapshot.value), msg)
        } else {
            format!(
                " {} | {} | snap: {} | tick: {} | skin: {}",
                app.ruler.format(snapshot.value),
                mode_str,
                app.snap_policy().name(),
                app.tick_policy().name(),
                app.skin().name(),
            )
        };

        let help_hint = " q:quit ←→:step s:snap t:tick c:skin ";
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey2).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
