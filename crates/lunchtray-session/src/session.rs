//! Observable order session with automatic change notifications.
//!
//! The session owns the order model and the screen back-stack together.
//! Every mutation updates both under one write lock and then broadcasts a
//! single snapshot, so a subscriber never sees an order that was cleared on
//! a screen that was not yet left, or the reverse.

use lunchtray_core::{
    AppConfig, FlowPolicy, MenuItem, NavController, OrderModel, OrderSnapshot, ScreenRoute,
    TaxRate,
};
use parking_lot::RwLock;
use serde::Serialize;
use tokio::sync::watch;

use crate::events::{EventOutcome, OrderReceipt, UiEvent};

// =============================================================================
// Session Snapshot
// =============================================================================

/// What a front-end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    /// Screen on top of the back-stack.
    pub screen: ScreenRoute,

    /// Whether the app bar shows a back arrow.
    pub can_navigate_back: bool,

    /// Back-stack depth, 1 at the start screen.
    pub depth: usize,

    /// The order with its totals.
    pub order: OrderSnapshot,
}

impl SessionSnapshot {
    /// App bar title for the current screen.
    pub fn title(&self) -> &'static str {
        self.screen.title()
    }
}

#[derive(Debug, Default)]
struct SessionState {
    order: OrderModel,
    nav: NavController,
}

impl SessionState {
    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            screen: self.nav.current(),
            can_navigate_back: self.nav.can_navigate_back(),
            depth: self.nav.depth(),
            order: self.order.current_order(),
        }
    }
}

// =============================================================================
// OrderSession
// =============================================================================

/// One ordering session: an order in progress plus the screen it is on.
///
/// ## Thread Safety
///
/// Uses `parking_lot::RwLock` for the state and `tokio::sync::watch` for
/// broadcasts. Events are expected from a single UI thread; the lock only
/// keeps renderers on other threads from reading a half-applied event.
pub struct OrderSession {
    inner: RwLock<SessionState>,
    flow: FlowPolicy,
    tx: watch::Sender<SessionSnapshot>,
    rx: watch::Receiver<SessionSnapshot>,
}

impl OrderSession {
    /// Create a session at the start screen with an empty order.
    pub fn new(rate: TaxRate, flow: FlowPolicy) -> Self {
        let state = SessionState {
            order: OrderModel::new(rate),
            nav: NavController::new(),
        };
        let (tx, rx) = watch::channel(state.snapshot());
        Self {
            inner: RwLock::new(state),
            flow,
            tx,
            rx,
        }
    }

    /// Create a session from configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.pricing.tax_rate, config.flow)
    }

    /// The forward flow this session follows.
    pub fn flow(&self) -> FlowPolicy {
        self.flow
    }

    // =========================================================================
    // Mutation Methods (all broadcast automatically)
    // =========================================================================

    /// Apply a change and broadcast if it reports one.
    fn update<R>(&self, f: impl FnOnce(&mut SessionState) -> (R, bool)) -> R {
        let (result, snapshot) = {
            let mut inner = self.inner.write();
            let (result, changed) = f(&mut *inner);
            (result, changed.then(|| inner.snapshot()))
        };
        if let Some(snapshot) = snapshot {
            let _ = self.tx.send(snapshot);
        }
        result
    }

    /// Leave the start screen for the entree menu.
    ///
    /// Returns `false` when not on the start screen.
    pub fn start_order(&self) -> bool {
        self.update(|state| {
            if state.nav.current() != ScreenRoute::Start {
                tracing::debug!("Ignoring start order from {}", state.nav.current());
                return (false, false);
            }
            state.nav.navigate(ScreenRoute::Entree);
            tracing::info!("Order started");
            (true, true)
        })
    }

    /// Replace the entree selection.
    pub fn select_entree(&self, item: MenuItem) {
        self.update(|state| {
            state.order.select_entree(item);
            ((), true)
        })
    }

    /// Replace the side dish selection.
    pub fn select_side_dish(&self, item: MenuItem) {
        self.update(|state| {
            state.order.select_side_dish(item);
            ((), true)
        })
    }

    /// Replace the accompaniment selection.
    pub fn select_accompaniment(&self, item: MenuItem) {
        self.update(|state| {
            state.order.select_accompaniment(item);
            ((), true)
        })
    }

    /// Put an item into the slot its category names.
    pub fn select(&self, item: MenuItem) {
        self.update(|state| {
            state.order.select(item);
            ((), true)
        })
    }

    /// Clear the order without changing screens.
    pub fn reset_order(&self) {
        self.update(|state| {
            state.order.reset();
            ((), true)
        })
    }

    /// Push a screen onto the back-stack.
    pub fn go_to(&self, route: ScreenRoute) {
        self.update(|state| {
            state.nav.navigate(route);
            ((), true)
        })
    }

    /// Pop one screen. The order is kept.
    ///
    /// Returns `false` when already at the start screen.
    pub fn navigate_up(&self) -> bool {
        self.update(|state| {
            let popped = state.nav.navigate_up();
            (popped, popped)
        })
    }

    /// Reset the order and return to the start screen in one step.
    pub fn cancel(&self) {
        self.update(|state| {
            let from = state.nav.current();
            state.order.reset();
            state.nav.pop_to_root();
            tracing::info!("Order cancelled from {}", from);
            ((), true)
        })
    }

    /// Complete the order from the checkout screen.
    ///
    /// Returns the receipt, then resets the order and returns to the start
    /// screen. Anywhere else this returns `None` and changes nothing.
    pub fn submit(&self) -> Option<OrderReceipt> {
        self.update(|state| {
            if state.nav.current() != ScreenRoute::Checkout {
                tracing::debug!("Ignoring submit from {}", state.nav.current());
                return (None, false);
            }
            let receipt = OrderReceipt::new(state.order.current_order());
            state.order.reset();
            state.nav.pop_to_root();
            tracing::info!(
                "Order {} submitted: {} items, total {}",
                receipt.id,
                receipt.order.items().count(),
                receipt.order.total()
            );
            (Some(receipt), true)
        })
    }

    /// Follow the forward flow from the current screen.
    ///
    /// On checkout this submits.
    pub fn next(&self) -> EventOutcome {
        let current = self.current_screen();
        if current == ScreenRoute::Checkout {
            return match self.submit() {
                Some(receipt) => EventOutcome::Submitted(receipt),
                None => EventOutcome::Ignored,
            };
        }
        self.update(|state| match state.nav.current().next(self.flow) {
            Some(route) => {
                state.nav.navigate(route);
                (EventOutcome::Navigated(route), true)
            }
            None => (EventOutcome::Ignored, false),
        })
    }

    /// Apply a UI event.
    pub fn dispatch(&self, event: UiEvent) -> EventOutcome {
        tracing::debug!("Dispatching {:?}", event);
        match event {
            UiEvent::StartOrder => {
                if self.start_order() {
                    EventOutcome::Navigated(ScreenRoute::Entree)
                } else {
                    EventOutcome::Ignored
                }
            }
            UiEvent::Select(item) => {
                self.select(item);
                EventOutcome::Selected
            }
            UiEvent::Next => self.next(),
            UiEvent::NavigateUp => {
                if self.navigate_up() {
                    EventOutcome::Navigated(self.current_screen())
                } else {
                    EventOutcome::Ignored
                }
            }
            UiEvent::Cancel => {
                self.cancel();
                EventOutcome::Cancelled
            }
            UiEvent::Submit => match self.submit() {
                Some(receipt) => EventOutcome::Submitted(receipt),
                None => EventOutcome::Ignored,
            },
            UiEvent::GoTo(route) => {
                self.go_to(route);
                EventOutcome::Navigated(route)
            }
        }
    }

    // =========================================================================
    // Read Methods
    // =========================================================================

    /// Get a snapshot of the whole session.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.read().snapshot()
    }

    /// Current selections with freshly computed totals.
    pub fn current_order(&self) -> OrderSnapshot {
        self.inner.read().order.current_order()
    }

    /// Screen on top of the back-stack.
    pub fn current_screen(&self) -> ScreenRoute {
        self.inner.read().nav.current()
    }

    /// Screens from root to top.
    pub fn breadcrumbs(&self) -> Vec<ScreenRoute> {
        self.inner.read().nav.breadcrumbs().collect()
    }

    // =========================================================================
    // Subscription
    // =========================================================================

    /// Subscribe to session changes.
    ///
    /// The receiver holds the current snapshot immediately and is woken by
    /// every later change. Clone the receiver for multiple subscribers.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.rx.clone()
    }
}

impl Default for OrderSession {
    fn default() -> Self {
        Self::new(TaxRate::DEFAULT, FlowPolicy::default())
    }
}

// =============================================================================
// Tests
// =============================================================================
