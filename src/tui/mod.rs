//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the cards and
//! the solution overlay, and translates terminal events into core::Action
//! values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms on the poll and only
//! redraws after an event. All pending events are drained before the next
//! draw.

mod component;
mod components;
mod event;
pub mod markdown;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::layout::{Position, Rect};

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::exercise::ExerciseId;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::CardState;
use crate::tui::components::solution_modal::overlay_area;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::ClickTarget;

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// One per exercise, in `ExerciseId::ALL` order
    pub cards: Vec<CardState>,
    pub selected: ExerciseId,
    /// First visible line of the solution overlay
    pub modal_scroll: u16,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            cards: ExerciseId::ALL.into_iter().map(CardState::new).collect(),
            selected: ExerciseId::ALL[0],
            modal_scroll: 0,
        }
    }

    pub fn card(&self, id: ExerciseId) -> &CardState {
        &self.cards[id.index()]
    }

    pub fn card_mut(&mut self, id: ExerciseId) -> &mut CardState {
        &mut self.cards[id.index()]
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let result = match TerminalModeGuard::new() {
        Ok(_guard) => event_loop(&mut terminal, &mut app, &mut tui),
        Err(e) => {
            warn!("Failed to enable terminal modes: {}", e);
            event_loop(&mut terminal, &mut app, &mut tui)
        }
    };
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        let frame_area = terminal.get_frame().area();
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(app, tui, event, frame_area) == Effect::Quit {
                info!("Quit requested");
                return Ok(());
            }
        }
    }
}

/// Route one terminal event. While the overlay is open it takes every event.
pub fn handle_event(
    app: &mut App,
    tui: &mut TuiState,
    event: TuiEvent,
    frame_area: Rect,
) -> Effect {
    match event {
        TuiEvent::ForceQuit => return update(app, Action::Quit),
        // Resize only needs the redraw the loop already flagged
        TuiEvent::Resize => return Effect::None,
        _ => {}
    }

    if app.modal.is_visible() {
        return handle_modal_event(app, tui, event, frame_area);
    }

    match event {
        TuiEvent::Submit => return run_card(app, tui, tui.selected),
        TuiEvent::ShowSolution => {
            let id = tui.selected;
            return show_solution(app, tui, id);
        }
        TuiEvent::NextField => tui.card_mut(tui.selected).focus_next(),
        TuiEvent::PrevField => tui.card_mut(tui.selected).focus_prev(),
        TuiEvent::CardUp => tui.selected = tui.selected.prev(),
        TuiEvent::CardDown => tui.selected = tui.selected.next(),
        TuiEvent::MouseClick(col, row) => {
            match ui::hit_test(Position::new(col, row), frame_area, app.locale()) {
                Some(ClickTarget::Run(id)) => {
                    tui.selected = id;
                    return run_card(app, tui, id);
                }
                Some(ClickTarget::Solution(id)) => {
                    tui.selected = id;
                    return show_solution(app, tui, id);
                }
                Some(ClickTarget::Field(id, index)) => {
                    tui.selected = id;
                    tui.card_mut(id).focus(index);
                }
                Some(ClickTarget::Card(id)) => tui.selected = id,
                None => {}
            }
        }
        TuiEvent::Escape => {}
        other => {
            if let Some(field_event) = tui.card_mut(tui.selected).handle_event(&other) {
                debug!("{}: {:?}", tui.selected, field_event);
            }
        }
    }
    Effect::None
}

fn handle_modal_event(
    app: &mut App,
    tui: &mut TuiState,
    event: TuiEvent,
    frame_area: Rect,
) -> Effect {
    match event {
        TuiEvent::Escape | TuiEvent::Submit | TuiEvent::InputChar('q') => {
            update(app, Action::CloseSolution)
        }
        TuiEvent::MouseClick(col, row)
            if !overlay_area(frame_area).contains(Position::new(col, row)) =>
        {
            update(app, Action::CloseSolution)
        }
        TuiEvent::CardUp => {
            tui.modal_scroll = tui.modal_scroll.saturating_sub(1);
            Effect::None
        }
        TuiEvent::CardDown => {
            // Clamped against the content height at render time
            tui.modal_scroll = tui.modal_scroll.saturating_add(1);
            Effect::None
        }
        _ => Effect::None,
    }
}

fn run_card(app: &mut App, tui: &TuiState, id: ExerciseId) -> Effect {
    update(app, Action::Run(id, tui.card(id).raw_inputs()))
}

fn show_solution(app: &mut App, tui: &mut TuiState, id: ExerciseId) -> Effect {
    tui.modal_scroll = 0;
    update(app, Action::ShowSolution(id))
}
