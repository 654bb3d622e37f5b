//! Observable order session for the Lunch Tray ordering app.
//!
//! This crate ties the order model and the screen back-stack together:
//! - `OrderSession` applies UI events to both atomically
//! - Every change is broadcast as a `SessionSnapshot` over a watch channel
//! - Submitting from checkout issues an `OrderReceipt`

pub mod events;
pub mod session;

pub use events::{EventOutcome, OrderReceipt, UiEvent};
pub use session::{OrderSession, SessionSnapshot};

// Re-export lunchtray_core types for convenience
pub use lunchtray_core::{
    FlowPolicy, MenuCategory, MenuItem, OrderSnapshot, ScreenRoute, TaxRate,
};
