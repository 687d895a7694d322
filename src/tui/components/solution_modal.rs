//! # Solution Overlay
//!
//! Centered overlay showing a catalog entry: the source snippet as a
//! highlighted code block followed by the rendered explanation.
//! Opened with F2 / Ctrl+S or a `[ Solution ]` click, dismissed with Esc or
//! a click outside it.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - the scroll offset lives in `TuiState`
//! - `SolutionModal` is created each frame with the borrowed entry

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::core::catalog::SolutionEntry;
use crate::core::messages::{self, Locale};
use crate::tui::markdown;

/// Overlay size as a percentage of the frame.
const WIDTH_PERCENT: u16 = 80;
const HEIGHT_PERCENT: u16 = 80;

/// Screen rect the overlay occupies inside `area`. Used for hit-testing
/// outside clicks.
pub fn overlay_area(area: Rect) -> Rect {
    centered_rect(WIDTH_PERCENT, HEIGHT_PERCENT, area)
}

/// Transient render wrapper for the overlay.
pub struct SolutionModal<'a> {
    entry: &'a SolutionEntry,
    locale: Locale,
    scroll: &'a mut u16,
}

impl<'a> SolutionModal<'a> {
    pub fn new(entry: &'a SolutionEntry, locale: Locale, scroll: &'a mut u16) -> Self {
        Self {
            entry,
            locale,
            scroll,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = overlay_area(area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(Span::styled(
                format!(" {} ", self.entry.title),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(messages::modal_help(self.locale)).centered())
            .padding(Padding::horizontal(1));

        let body = self.body();
        let inner = block.inner(overlay);
        let paragraph = Paragraph::new(body).wrap(Wrap { trim: false });

        // Clamp so scrolling stops at the last line
        let total = paragraph.line_count(inner.width) as u16;
        let max_scroll = total.saturating_sub(inner.height);
        *self.scroll = (*self.scroll).min(max_scroll);

        frame.render_widget(paragraph.block(block).scroll((*self.scroll, 0)), overlay);
    }

    fn body(&self) -> Text<'static> {
        let mut text = markdown::render_code(&self.entry.source, "rust");
        text.lines.push(Line::default());
        text.lines
            .extend(markdown::render(&self.entry.explanation, Color::Gray).lines);
        text
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
