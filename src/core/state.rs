//! # Application State
//!
//! Core business state for Practica. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── dispatcher: Dispatcher                 // locale + limits, stateless
//! ├── catalog: Catalog                       // read-only solution entries
//! ├── results: BTreeMap<ExerciseId, Outcome> // last outcome per card
//! ├── modal: Modal                           // visible solution, if any
//! └── status_message: String                 // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::collections::BTreeMap;

use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::dispatch::{Dispatcher, Outcome};
use crate::core::exercise::ExerciseId;
use crate::core::messages::{self, Locale};
use crate::core::modal::Modal;

pub struct App {
    pub dispatcher: Dispatcher,
    pub catalog: Catalog,
    pub results: BTreeMap<ExerciseId, Outcome>,
    pub modal: Modal,
    pub status_message: String,
}

impl App {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            catalog: Catalog::builtin(dispatcher.locale),
            dispatcher,
            results: BTreeMap::new(),
            modal: Modal::new(),
            status_message: messages::welcome(dispatcher.locale).to_string(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(Dispatcher::new(config.locale, config.limits))
    }

    pub fn locale(&self) -> Locale {
        self.dispatcher.locale
    }

    pub fn result(&self, exercise: ExerciseId) -> Option<&Outcome> {
        self.results.get(&exercise)
    }
}
