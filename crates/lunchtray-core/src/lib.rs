//! Core types for the Lunch Tray ordering app.
//!
//! This crate contains the domain shared by the session and the front-end:
//! - Menu items and the static catalog
//! - Screen routes and the forward flow
//! - The order model and its snapshots
//! - The screen back-stack
//! - Configuration and error types

mod catalog;
mod config;
mod error;
mod item;
mod money;
mod navigation;
mod order;
mod screen;

pub use catalog::{DataSource, Menu, MenuSource};
pub use config::{config_dir, config_path, AppConfig, PricingConfig};
pub use error::{ConfigError, RouteParseError};
pub use item::{ImageRef, MenuCategory, MenuItem};
pub use money::{format_price, round_cents};
pub use navigation::NavController;
pub use order::{OrderModel, OrderSnapshot, TaxRate};
pub use screen::{FlowPolicy, ScreenRoute};

// Re-exported so callers can name prices without a direct dependency.
pub use rust_decimal::Decimal;
