//! Terminal frontend for the Lunch Tray ordering app.
//!
//! This crate provides:
//! - A renderer-independent view model of each screen
//! - Plain-text rendering of that model
//! - Text commands mapped onto screen buttons
//! - `App`, which drives one `OrderSession` from lines of input

pub mod app;
pub mod input;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use app::{App, Reply};
pub use input::{resolve, Command, InputError};
pub use model::{Button, ButtonState, ScreenBody, ScreenView};
pub use render::render;
