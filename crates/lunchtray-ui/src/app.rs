//! The terminal app: one session, the loaded menu, and the frames it draws.

use lunchtray_core::{format_price, AppConfig, Menu, MenuSource};
use lunchtray_session::{EventOutcome, OrderReceipt, OrderSession, SessionSnapshot};
use tokio::sync::watch;

use crate::input::{resolve, Command, InputError};
use crate::model::ScreenView;
use crate::render::render;

/// What the caller should do after a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Keep reading input.
    Continue(EventOutcome),

    /// The user asked to leave.
    Quit,
}

/// A running ordering app.
pub struct App {
    session: OrderSession,
    menu: Menu,
    currency: String,
    frames: watch::Receiver<SessionSnapshot>,
}

impl App {
    /// Create an app at the start screen.
    ///
    /// The menu source is queried once, here.
    pub fn new(config: &AppConfig, source: &dyn MenuSource) -> Self {
        let session = OrderSession::from_config(config);
        let frames = session.subscribe();
        Self {
            session,
            menu: Menu::load(source),
            currency: config.pricing.currency_symbol.clone(),
            frames,
        }
    }

    pub fn session(&self) -> &OrderSession {
        &self.session
    }

    /// View of the current screen.
    pub fn view(&self) -> ScreenView {
        ScreenView::build(&self.session.snapshot(), &self.menu, &self.currency)
    }

    /// Render the current screen.
    pub fn render(&self) -> String {
        render(&self.view())
    }

    /// Parse and apply one line of input.
    pub fn handle_line(&mut self, line: &str) -> Result<Reply, InputError> {
        let command: Command = line.parse()?;
        let Some(event) = resolve(command, &self.view(), &self.menu)? else {
            return Ok(Reply::Quit);
        };
        let outcome = self.session.dispatch(event);
        if let EventOutcome::Submitted(receipt) = &outcome {
            tracing::debug!(
                "Receipt: {}",
                serde_json::to_string(receipt).unwrap_or_default()
            );
        }
        Ok(Reply::Continue(outcome))
    }

    /// Render the latest published frame, if one arrived since the last call.
    pub fn poll_frame(&mut self) -> Option<String> {
        if !self.frames.has_changed().unwrap_or(false) {
            return None;
        }
        let snapshot = self.frames.borrow_and_update().clone();
        Some(render(&ScreenView::build(
            &snapshot,
            &self.menu,
            &self.currency,
        )))
    }

    /// One line confirmation for a submitted order.
    pub fn confirmation(&self, receipt: &OrderReceipt) -> String {
        format!(
            "Order {} placed. Total {}",
            receipt.id,
            format_price(receipt.order.total(), &self.currency)
        )
    }
}
