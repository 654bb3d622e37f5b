//! What each screen shows.
//!
//! A `ScreenView` is derived from one published `SessionSnapshot`. It never
//! reads the session directly, so a frame always matches a single snapshot.

use lunchtray_core::{format_price, Menu, MenuCategory, OrderSnapshot};
use lunchtray_session::{ScreenRoute, SessionSnapshot};

// =============================================================================
// App Bar
// =============================================================================

/// Top bar with the screen title and optional back arrow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppBar {
    pub title: &'static str,
    pub can_navigate_back: bool,
}

// =============================================================================
// Buttons
// =============================================================================

/// Buttons a screen can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    StartOrder,
    Cancel,
    Next,
    Submit,
}

impl Button {
    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            Button::StartOrder => "Start Order",
            Button::Cancel => "Cancel",
            Button::Next => "Next",
            Button::Submit => "Submit",
        }
    }
}

/// A button and whether it can be pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    pub button: Button,
    pub enabled: bool,
}

impl ButtonState {
    fn enabled(button: Button) -> Self {
        Self {
            button,
            enabled: true,
        }
    }
}

// =============================================================================
// Body
// =============================================================================

/// One option on a menu screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    /// 1-based position, as typed by the user.
    pub number: usize,
    pub name: String,
    pub description: String,
    pub price: String,
    pub selected: bool,
}

/// One item line on the checkout screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub name: String,
    pub price: String,
}

/// Line items and totals on the checkout screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSummary {
    pub lines: Vec<SummaryLine>,
    pub subtotal: String,
    pub tax: String,
    pub total: String,
}

impl CheckoutSummary {
    fn from_order(order: &OrderSnapshot, currency: &str) -> Self {
        Self {
            lines: order
                .items()
                .map(|item| SummaryLine {
                    name: item.name.clone(),
                    price: format_price(item.price, currency),
                })
                .collect(),
            subtotal: format_price(order.item_total(), currency),
            tax: format_price(order.tax(), currency),
            total: format_price(order.total(), currency),
        }
    }
}

/// Main content of a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenBody {
    Start,
    Menu {
        category: MenuCategory,
        options: Vec<MenuOption>,
    },
    Checkout(CheckoutSummary),
}

// =============================================================================
// Screen View
// =============================================================================

/// Everything needed to draw the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenView {
    pub screen: ScreenRoute,
    pub app_bar: AppBar,
    pub body: ScreenBody,
    pub buttons: Vec<ButtonState>,
}

impl ScreenView {
    /// Build the view for a snapshot.
    pub fn build(snapshot: &SessionSnapshot, menu: &Menu, currency: &str) -> Self {
        let app_bar = AppBar {
            title: snapshot.title(),
            can_navigate_back: snapshot.can_navigate_back,
        };

        let (body, buttons) = match snapshot.screen.category() {
            Some(category) => {
                let selected = snapshot.order.selection(category);
                let options = menu
                    .items(category)
                    .iter()
                    .enumerate()
                    .map(|(i, item)| MenuOption {
                        number: i + 1,
                        name: item.name.clone(),
                        description: item.description.clone(),
                        price: format_price(item.price, currency),
                        selected: selected.is_some_and(|s| s.name == item.name),
                    })
                    .collect();
                let buttons = vec![
                    ButtonState::enabled(Button::Cancel),
                    ButtonState {
                        button: Button::Next,
                        enabled: selected.is_some(),
                    },
                ];
                (ScreenBody::Menu { category, options }, buttons)
            }
            None if snapshot.screen == ScreenRoute::Checkout => (
                ScreenBody::Checkout(CheckoutSummary::from_order(&snapshot.order, currency)),
                vec![
                    ButtonState::enabled(Button::Cancel),
                    ButtonState::enabled(Button::Submit),
                ],
            ),
            None => (
                ScreenBody::Start,
                vec![ButtonState::enabled(Button::StartOrder)],
            ),
        };

        Self {
            screen: snapshot.screen,
            app_bar,
            body,
            buttons,
        }
    }

    /// Look up a button on this screen.
    pub fn button(&self, button: Button) -> Option<ButtonState> {
        self.buttons.iter().copied().find(|b| b.button == button)
    }

    /// Options on a menu screen, empty elsewhere.
    pub fn options(&self) -> &[MenuOption] {
        match &self.body {
            ScreenBody::Menu { options, .. } => options.as_slice(),
            _ => &[],
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
