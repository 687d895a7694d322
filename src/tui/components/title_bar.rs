//! # TitleBar Component
//!
//! Top status bar: the app name, then the status message when there is one.
//!
//! Purely presentational. It receives everything as props and has no
//! internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.status_message.clone());
//! title_bar.render(frame, area);
//! ```
//!
//! 1. **Status message**: `"Practica | primes: ok"`
//! 2. **Default**: `"Practica"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

const APP_NAME: &str = "Practica";

pub struct TitleBar {
    /// Status message (e.g., "primes: ok")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(status_message: String) -> Self {
        Self { status_message }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let name = Span::styled(APP_NAME, Style::default().add_modifier(Modifier::BOLD));
        let line = if self.status_message.is_empty() {
            Line::from(name)
        } else {
            Line::from(vec![
                name,
                Span::raw(" | "),
                Span::styled(
                    self.status_message.as_str(),
                    Style::default().fg(Color::Gray),
                ),
            ])
        };
        frame.render_widget(line, area);
    }
}
