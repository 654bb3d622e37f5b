//! UI events and what applying them did.

use lunchtray_core::{MenuItem, OrderSnapshot, ScreenRoute};
use serde::Serialize;
use uuid::Uuid;

/// Something the user did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// "Start Order" on the start screen.
    StartOrder,

    /// An option was picked on a menu screen.
    Select(MenuItem),

    /// "Next" on a menu screen, or "Submit" on checkout.
    Next,

    /// Back arrow in the app bar.
    NavigateUp,

    /// "Cancel" on any screen after start.
    Cancel,

    /// "Submit" on checkout.
    Submit,

    /// Jump straight to a screen.
    GoTo(ScreenRoute),
}

/// Result of applying a [`UiEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// A new screen is on top of the stack.
    Navigated(ScreenRoute),

    /// A selection slot changed.
    Selected,

    /// Order reset and returned to start without completing.
    Cancelled,

    /// Order completed.
    Submitted(OrderReceipt),

    /// Nothing to do from the current screen.
    Ignored,
}

/// Proof of a submitted order.
///
/// Receipts are handed back to the caller and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderReceipt {
    /// Fresh identifier for this order.
    pub id: Uuid,

    /// The order as it was at submission.
    pub order: OrderSnapshot,
}

impl OrderReceipt {
    /// Issue a receipt for an order.
    pub fn new(order: OrderSnapshot) -> Self {
        Self {
            id: Uuid::new_v4(),
            order,
        }
    }
}
