//! # Solution Modal
//!
//! Tracks which solution, if any, is on screen. The only state is the
//! visible exercise; content always comes from the catalog.

use log::{info, warn};

use crate::core::catalog::{Catalog, SolutionEntry};
use crate::core::exercise::ExerciseId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Modal {
    visible: Option<ExerciseId>,
}

impl Modal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the entry for `name`. Unknown names leave the modal untouched.
    pub fn open(&mut self, catalog: &Catalog, name: &str) {
        match catalog.lookup(name) {
            Some((id, _)) => {
                info!("Opening solution for {}", id);
                self.visible = Some(id);
            }
            None => warn!("No solution entry for {:?}", name),
        }
    }

    pub fn close(&mut self) {
        if let Some(id) = self.visible.take() {
            info!("Closing solution for {}", id);
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible.is_some()
    }

    pub fn exercise(&self) -> Option<ExerciseId> {
        self.visible
    }

    pub fn content<'a>(&self, catalog: &'a Catalog) -> Option<&'a SolutionEntry> {
        self.visible.and_then(|id| catalog.get(id))
    }
}
