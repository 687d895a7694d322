use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::core::exercise::ExerciseId;
use crate::core::messages::{self, Locale};
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CardLayout, ExerciseCard, SolutionModal, TitleBar};

/// What a left click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Run(ExerciseId),
    Solution(ExerciseId),
    Field(ExerciseId, usize),
    Card(ExerciseId),
}

/// Title line, card grid, key help line.
fn main_layout(area: Rect) -> [Rect; 3] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Min(0), Length(1)]).areas(area)
}

/// Screen rect of each card, in `ExerciseId::ALL` order (2x2, row-major).
pub fn card_areas(frame_area: Rect) -> [Rect; 4] {
    let [_, grid, _] = main_layout(frame_area);
    let [top, bottom] = Layout::vertical([Constraint::Fill(1); 2]).areas(grid);
    let [a, b] = Layout::horizontal([Constraint::Fill(1); 2]).areas(top);
    let [c, d] = Layout::horizontal([Constraint::Fill(1); 2]).areas(bottom);
    [a, b, c, d]
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let locale = app.locale();
    let [title_area, _, help_area] = main_layout(frame.area());

    TitleBar::new(app.status_message.clone()).render(frame, title_area);

    let mut cursor = None;
    for (id, area) in ExerciseId::ALL.into_iter().zip(card_areas(frame.area())) {
        let selected = id == tui.selected;
        let pos = ExerciseCard::new(tui.card(id), app.result(id), locale, selected).render(frame, area);
        if selected {
            cursor = pos;
        }
    }

    frame.render_widget(
        Paragraph::new(messages::key_help(locale)).style(Style::default().fg(Color::DarkGray)),
        help_area,
    );

    // Overlay last so it sits on top; the text cursor stays hidden under it
    if let Some(entry) = app.modal.content(&app.catalog) {
        SolutionModal::new(entry, locale, &mut tui.modal_scroll).render(frame, frame.area());
    } else if let Some(pos) = cursor {
        frame.set_cursor_position(pos);
    }
}

/// Find the card element under a screen position.
pub fn hit_test(pos: Position, frame_area: Rect, locale: Locale) -> Option<ClickTarget> {
    let (id, area) = ExerciseId::ALL
        .into_iter()
        .zip(card_areas(frame_area))
        .find(|(_, area)| area.contains(pos))?;

    let field_count = id.fields().len();
    let layout = CardLayout::new(area, field_count, locale);
    let target = if layout.run_button.contains(pos) {
        ClickTarget::Run(id)
    } else if layout.solution_button.contains(pos) {
        ClickTarget::Solution(id)
    } else if let Some(index) = layout.field_at(pos, field_count) {
        ClickTarget::Field(id, index)
    } else {
        ClickTarget::Card(id)
    };
    Some(target)
}
