use ratatui::style::{Color, Modifier, Style};

/// Colors used by the ruler, its skins and the status bar
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub grey0: Color,
    pub grey1: Color,
    pub grey2: Color,

    // Palette colors
    pub red: Color,
    pub orange: Color,
    pub yellow: Color,
    pub green: Color,
    pub aqua: Color,

    // Semantic colors
    pub major: Color,
    pub minor: Color,
    pub label: Color,
    pub out_of_bounds: Color,
    pub cursor: Color,
    pub tick_flash: Color,
    pub boundary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Material dark
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            grey0: Color::Rgb(0x7c, 0x6f, 0x64),
            grey1: Color::Rgb(0x92, 0x83, 0x74),
            grey2: Color::Rgb(0xa8, 0x99, 0x84),
            red: Color::Rgb(0xea, 0x69, 0x62),
            orange: Color::Rgb(0xe7, 0x8a, 0x4e),
            yellow: Color::Rgb(0xd8, 0xa6, 0x57),
            green: Color::Rgb(0xa9, 0xb6, 0x65),
            aqua: Color::Rgb(0x89, 0xb4, 0x82),
            major: Color::Rgb(0xd4, 0xbe, 0x98),
            minor: Color::Rgb(0x92, 0x83, 0x74),
            label: Color::Rgb(0xdd, 0xc7, 0xa1),
            out_of_bounds: Color::Rgb(0x50, 0x49, 0x45),
            cursor: Color::Rgb(0xe7, 0x8a, 0x4e),
            tick_flash: Color::Rgb(0xd8, 0xa6, 0x57),
            boundary: Color::Rgb(0xea, 0x69, 0x62),
        }
    }
}

impl Theme {
    /// Style for a graduation, dimmed when its value lies outside the bounds.
    pub fn graduation(&self, major: bool, in_bounds: bool) -> Style {
        let fg = match (in_bounds, major) {
            (false, _) => self.out_of_bounds,
            (true, true) => self.major,
            (true, false) => self.minor,
        };
        Style::default().fg(fg).bg(self.bg0)
    }

    pub fn label_style(&self, in_bounds: bool) -> Style {
        let fg = if in_bounds { self.label } else { self.out_of_bounds };
        Style::default().fg(fg).bg(self.bg0)
    }

    /// Cursor style, lit while a tick pulse is active.
    pub fn cursor_style(&self, lit: bool) -> Style {
        if lit {
            Style::default()
                .fg(self.tick_flash)
                .bg(self.bg0)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.cursor).bg(self.bg0)
        }
    }

    /// Border style, red while a boundary pulse is active.
    pub fn border_style(&self, lit: bool) -> Style {
        let fg = if lit { self.boundary } else { self.grey0 };
        Style::default().fg(fg).bg(self.bg0)
    }
}
