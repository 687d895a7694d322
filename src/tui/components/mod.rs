//! # TUI Components
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: app name and status message
//!
//! ### Persistent State + Transient Wrapper
//!
//! The state struct lives in `TuiState`; the wrapper is built every frame
//! from borrowed state and props:
//! - `CardState` / `ExerciseCard`: one exercise card
//! - `SolutionModal`: the solution overlay (scroll offset kept in `TuiState`)
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `TextField`: single-line editable field inside a card
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (Top status bar)
//! ├── card.rs            (Exercise card: fields, result, buttons)
//! ├── text_field.rs      (Editable single-line field)
//! └── solution_modal.rs  (Centered solution overlay)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod card;
pub mod solution_modal;
pub mod text_field;
pub use card::{CardLayout, CardState, ExerciseCard};
pub use solution_modal::SolutionModal;
