//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::dispatch::Dispatcher;
use crate::core::messages::Locale;
use crate::core::state::App;
use crate::core::validate::Limits;

/// Creates a test App with English messages and default limits.
pub fn test_app() -> App {
    App::new(Dispatcher::default())
}

/// Creates a test App with Spanish messages.
pub fn test_app_es() -> App {
    App::new(Dispatcher::new(Locale::Es, Limits::default()))
}
