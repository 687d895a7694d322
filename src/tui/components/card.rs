//! # Exercise Card Component
//!
//! One card per exercise: its input fields, the last result, and the two
//! trigger buttons.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CardState` lives in `TuiState` (field buffers, focused field)
//! - `ExerciseCard` is created each frame with borrowed state and props
//!
//! ```text
//! ┌ Prime Numbers ─────────────────┐
//! │From: 10                        │
//! │To  : 20                        │
//! │                                │
//! │11, 13, 17, 19                  │
//! │[ Run ]  [ Solution ]           │
//! └────────────────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::core::dispatch::Outcome;
use crate::core::exercise::{ExerciseId, Field, RawInputs};
use crate::core::messages::{self, Locale};
use crate::tui::component::EventHandler;
use crate::tui::components::text_field::{FieldEvent, TextField};
use crate::tui::event::TuiEvent;

/// Gap between the two buttons.
const BUTTON_GAP: u16 = 2;

/// Persistent state for one card.
pub struct CardState {
    pub exercise: ExerciseId,
    pub fields: Vec<(Field, TextField)>,
    pub focused_field: usize,
}

impl CardState {
    pub fn new(exercise: ExerciseId) -> Self {
        Self {
            exercise,
            fields: exercise
                .fields()
                .iter()
                .map(|f| (*f, TextField::new()))
                .collect(),
            focused_field: 0,
        }
    }

    /// Snapshot of the field buffers for a dispatch.
    pub fn raw_inputs(&self) -> RawInputs {
        let mut inputs = RawInputs::new();
        for (field, text) in &self.fields {
            inputs.set(*field, text.buffer.clone());
        }
        inputs
    }

    pub fn focus_next(&mut self) {
        self.focused_field = (self.focused_field + 1) % self.fields.len();
    }

    pub fn focus_prev(&mut self) {
        self.focused_field = (self.focused_field + self.fields.len() - 1) % self.fields.len();
    }

    pub fn focus(&mut self, index: usize) {
        if index < self.fields.len() {
            self.focused_field = index;
        }
    }

    pub fn set_field(&mut self, field: Field, value: &str) {
        if let Some((_, text)) = self.fields.iter_mut().find(|(f, _)| *f == field) {
            *text = TextField::with_text(value);
        }
    }
}

impl EventHandler for CardState {
    type Event = FieldEvent;

    /// Editing keys go to the focused field.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<FieldEvent> {
        self.fields
            .get_mut(self.focused_field)
            .and_then(|(_, text)| text.handle_event(event))
    }
}

/// Where things sit inside a card's outer rect. Shared by rendering and
/// mouse hit-testing so the two never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLayout {
    pub fields: Rect,
    pub result: Rect,
    pub run_button: Rect,
    pub solution_button: Rect,
}

impl CardLayout {
    pub fn new(area: Rect, field_count: usize, locale: Locale) -> Self {
        let inner = Block::bordered().inner(area);
        let [fields, _gap, result, buttons] = Layout::vertical([
            Constraint::Length(field_count as u16),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let run_width = (messages::run_button(locale).width() as u16).min(buttons.width);
        let run_button = Rect { width: run_width, ..buttons };
        let solution_x = (buttons.x + run_width + BUTTON_GAP).min(buttons.right());
        let solution_width = (messages::solution_button(locale).width() as u16)
            .min(buttons.right().saturating_sub(solution_x));
        let solution_button = Rect {
            x: solution_x,
            width: solution_width,
            ..buttons
        };

        Self {
            fields,
            result,
            run_button,
            solution_button,
        }
    }

    /// Row rect of the field at `index`.
    pub fn field_row(&self, index: usize) -> Rect {
        Rect {
            y: self.fields.y + index as u16,
            height: 1,
            ..self.fields
        }
    }

    /// Which field row contains `pos`, if any.
    pub fn field_at(&self, pos: Position, field_count: usize) -> Option<usize> {
        (0..field_count).find(|&i| self.field_row(i).contains(pos))
    }
}

/// Transient render wrapper for a card.
pub struct ExerciseCard<'a> {
    state: &'a CardState,
    outcome: Option<&'a Outcome>,
    locale: Locale,
    selected: bool,
}

impl<'a> ExerciseCard<'a> {
    pub fn new(
        state: &'a CardState,
        outcome: Option<&'a Outcome>,
        locale: Locale,
        selected: bool,
    ) -> Self {
        Self {
            state,
            outcome,
            locale,
            selected,
        }
    }

    /// Draw the card. Returns the cursor position when the card is selected.
    pub fn render(&self, frame: &mut Frame, area: Rect) -> Option<(u16, u16)> {
        let border_style = if self.selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Span::styled(
                format!(" {} ", messages::card_title(self.locale, self.state.exercise)),
                border_style.add_modifier(Modifier::BOLD),
            ));
        frame.render_widget(block, area);

        let layout = CardLayout::new(area, self.state.fields.len(), self.locale);

        let label_width = self
            .state
            .fields
            .iter()
            .map(|(f, _)| messages::field_label(self.locale, *f).width())
            .max()
            .unwrap_or(0) as u16;

        let mut cursor = None;
        for (i, (field, text)) in self.state.fields.iter().enumerate() {
            let focused = self.selected && i == self.state.focused_field;
            let pos = text.render(
                frame,
                layout.field_row(i),
                messages::field_label(self.locale, *field),
                label_width,
                focused,
            );
            cursor = cursor.or(pos);
        }

        if let Some(outcome) = self.outcome {
            let style = if outcome.is_error() {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };
            let result = Paragraph::new(outcome.text())
                .style(style)
                .wrap(Wrap { trim: true });
            frame.render_widget(result, layout.result);
        }

        let button_style = if self.selected {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        frame.render_widget(
            Paragraph::new(messages::run_button(self.locale)).style(button_style),
            layout.run_button,
        );
        frame.render_widget(
            Paragraph::new(messages::solution_button(self.locale)).style(button_style),
            layout.solution_button,
        );

        cursor
    }
}
