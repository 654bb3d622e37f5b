//! View model for the Lunch Tray screens.
//!
//! These types are renderer-independent so screen logic can be tested
//! without a terminal.

mod screen;

pub use screen::{
    AppBar, Button, ButtonState, CheckoutSummary, MenuOption, ScreenBody, ScreenView, SummaryLine,
};
