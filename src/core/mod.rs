//! # Core Application Logic
//!
//! This module contains Practica's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • compute (routines)   │
//!                    │  • validate (inputs)    │
//!                    │  • dispatch (boundary)  │
//!                    │  • catalog + modal      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │  Headless  │
//!            │  Adapter   │            │    CLI     │
//!            │ (ratatui)  │            │ (main.rs)  │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`exercise`]: `ExerciseId`, `Field`, `RawInputs`
//! - [`compute`]: primes, Fibonacci, BMI, palindrome
//! - [`validate`]: lenient parsing and per-exercise constraints
//! - [`dispatch`]: validate → compute → render, the single error boundary
//! - [`messages`]: user-visible sentences per locale
//! - [`catalog`]: read-only solution entries
//! - [`modal`]: which solution is on screen
//! - [`state`]: the `App` struct holding all application state
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: config file and override resolution

pub mod action;
pub mod catalog;
pub mod compute;
pub mod config;
pub mod dispatch;
pub mod exercise;
pub mod messages;
pub mod modal;
pub mod state;
pub mod validate;
