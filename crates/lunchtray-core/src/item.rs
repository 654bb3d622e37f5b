//! Menu item types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which part of the order a menu item fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuCategory {
    Entree,
    SideDish,
    Accompaniment,
}

impl MenuCategory {
    /// All categories in the order they are chosen.
    pub const ALL: [MenuCategory; 3] = [
        MenuCategory::Entree,
        MenuCategory::SideDish,
        MenuCategory::Accompaniment,
    ];

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            MenuCategory::Entree => "Entree",
            MenuCategory::SideDish => "Side Dish",
            MenuCategory::Accompaniment => "Accompaniment",
        }
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Opaque image handle. Front-ends resolve it however they like.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRef(pub String);

impl From<&str> for ImageRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ImageRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A selectable food item from the catalog.
///
/// Items are defined once by a [`MenuSource`](crate::MenuSource) and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Display name, e.g. "Three Bean Chili".
    pub name: String,

    /// One line description shown under the name.
    pub description: String,

    /// Unit price.
    pub price: Decimal,

    /// Order slot this item fills.
    pub category: MenuCategory,

    /// Image handle.
    pub image: ImageRef,
}

impl MenuItem {
    /// Create a new menu item.
    pub fn new(
        category: MenuCategory,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        image: impl Into<ImageRef>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            category,
            image: image.into(),
        }
    }

    /// Check if this item belongs to the given category.
    pub fn is(&self, category: MenuCategory) -> bool {
        self.category == category
    }
}
