//! # TextField Component
//!
//! Single-line editable field used by the exercise cards.
//!
//! The buffer and the cursor are internal state. The cursor is a byte
//! offset that always sits on a char boundary; every movement goes through
//! `prev_char_boundary` / `next_char_boundary`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    ContentChanged,
    CursorMoved,
}

#[derive(Debug, Clone, Default)]
pub struct TextField {
    pub buffer: String,
    /// Byte offset into `buffer` (0..=buffer.len())
    cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Render `label` followed by the value. When focused, returns the screen
    /// position the terminal cursor should take.
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        label: &str,
        label_width: u16,
        focused: bool,
    ) -> Option<(u16, u16)> {
        if area.width == 0 || area.height == 0 {
            return None;
        }
        let prefix = format!("{:<width$}: ", label, width = label_width as usize);
        let prefix_width = prefix.width() as u16;
        let value_width = area.width.saturating_sub(prefix_width);

        let (visible, cursor_col) = self.visible_window(value_width);

        let label_style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let value_style = if focused {
            Style::default().fg(Color::White).add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::White)
        };

        // Pad so the underline shows the editable extent even when empty
        let padded = format!("{:<width$}", visible, width = value_width as usize);
        let line = Line::from(vec![
            Span::styled(prefix, label_style),
            Span::styled(padded, value_style),
        ]);
        frame.render_widget(Paragraph::new(line), area);

        focused.then(|| {
            let x = (area.x + prefix_width + cursor_col).min(area.right().saturating_sub(1));
            (x, area.y)
        })
    }

    /// Slice of the buffer that fits in `width` columns with the cursor
    /// visible, plus the cursor column inside that slice.
    fn visible_window(&self, width: u16) -> (String, u16) {
        let width = width as usize;
        let before = &self.buffer[..self.cursor];
        let before_width = before.width();
        if before_width < width {
            let mut shown = String::new();
            let mut used = 0;
            for c in self.buffer.chars() {
                let w = c.width().unwrap_or(0);
                if used + w > width {
                    break;
                }
                used += w;
                shown.push(c);
            }
            return (shown, before_width as u16);
        }

        // Scroll: keep the tail that ends at the cursor, leaving one column for it
        let mut start = self.cursor;
        let mut used = 0;
        while start > 0 {
            let prev = prev_char_boundary(&self.buffer, start);
            let w = self.buffer[prev..start].width();
            if used + w + 1 > width {
                break;
            }
            used += w;
            start = prev;
        }
        (self.buffer[start..self.cursor].to_string(), used as u16)
    }
}

impl EventHandler for TextField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(FieldEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single-line field: flatten pasted newlines
                let flat = text.replace(['\r', '\n'], " ");
                self.buffer.insert_str(self.cursor, &flat);
                self.cursor += flat.len();
                Some(FieldEvent::ContentChanged)
            }
            TuiEvent::Backspace => (self.cursor > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                FieldEvent::ContentChanged
            }),
            TuiEvent::Delete => (self.cursor < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                FieldEvent::ContentChanged
            }),
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                FieldEvent::CursorMoved
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                FieldEvent::CursorMoved
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                FieldEvent::CursorMoved
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                FieldEvent::CursorMoved
            }),
            _ => None,
        }
    }
}

/// Byte offset of the char boundary before `pos` (0 at the start).
pub(crate) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset of the char boundary after `pos` (`text.len()` at the end).
pub(crate) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
