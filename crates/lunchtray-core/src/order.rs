//! The order being built across the menu screens.
//!
//! [`OrderModel`] holds only the three selections. Totals live on
//! [`OrderSnapshot`], which can only be produced by computing them from the
//! selections, so a total can never disagree with what is selected.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::item::{MenuCategory, MenuItem};
use crate::money::round_cents;

// =============================================================================
// Tax Rate
// =============================================================================

/// Fraction of the item total charged as tax, between 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct TaxRate(Decimal);

impl TaxRate {
    /// The rate the app ships with: 8%.
    pub const DEFAULT: TaxRate = TaxRate(Decimal::from_parts(8, 0, 0, false, 2));

    /// The rate as a decimal fraction.
    pub fn value(self) -> Decimal {
        self.0
    }

    /// Tax owed on an item total, rounded to cents.
    pub fn apply(self, item_total: Decimal) -> Decimal {
        round_cents(item_total * self.0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<Decimal> for TaxRate {
    type Error = ConfigError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value < Decimal::ZERO || value > Decimal::ONE {
            return Err(ConfigError::InvalidTaxRate(value.to_string()));
        }
        Ok(Self(value))
    }
}

impl From<TaxRate> for Decimal {
    fn from(rate: TaxRate) -> Self {
        rate.0
    }
}

// =============================================================================
// Order Snapshot
// =============================================================================

/// Immutable view of an order with its totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSnapshot {
    entree: Option<MenuItem>,
    side_dish: Option<MenuItem>,
    accompaniment: Option<MenuItem>,
    item_total: Decimal,
    tax: Decimal,
    total: Decimal,
}

impl OrderSnapshot {
    /// Compute a snapshot from selections.
    ///
    /// Empty slots contribute zero.
    pub fn compute(
        entree: Option<MenuItem>,
        side_dish: Option<MenuItem>,
        accompaniment: Option<MenuItem>,
        rate: TaxRate,
    ) -> Self {
        let item_total: Decimal = [&entree, &side_dish, &accompaniment]
            .into_iter()
            .flatten()
            .map(|item| item.price)
            .sum();
        let tax = rate.apply(item_total);
        Self {
            entree,
            side_dish,
            accompaniment,
            item_total,
            tax,
            total: item_total + tax,
        }
    }

    /// An order with nothing selected.
    pub fn empty() -> Self {
        Self::compute(None, None, None, TaxRate::DEFAULT)
    }

    pub fn entree(&self) -> Option<&MenuItem> {
        self.entree.as_ref()
    }

    pub fn side_dish(&self) -> Option<&MenuItem> {
        self.side_dish.as_ref()
    }

    pub fn accompaniment(&self) -> Option<&MenuItem> {
        self.accompaniment.as_ref()
    }

    /// Selection in the given slot.
    pub fn selection(&self, category: MenuCategory) -> Option<&MenuItem> {
        match category {
            MenuCategory::Entree => self.entree(),
            MenuCategory::SideDish => self.side_dish(),
            MenuCategory::Accompaniment => self.accompaniment(),
        }
    }

    /// Selected items in slot order.
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        [&self.entree, &self.side_dish, &self.accompaniment]
            .into_iter()
            .flatten()
    }

    /// Sum of the selected item prices.
    pub fn item_total(&self) -> Decimal {
        self.item_total
    }

    pub fn tax(&self) -> Decimal {
        self.tax
    }

    /// Item total plus tax.
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Check if no slot is filled.
    pub fn is_empty(&self) -> bool {
        self.items().next().is_none()
    }
}

impl Default for OrderSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

// =============================================================================
// Order Model
// =============================================================================

/// The in-progress order.
///
/// Each slot holds at most one item; selecting again overwrites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderModel {
    entree: Option<MenuItem>,
    side_dish: Option<MenuItem>,
    accompaniment: Option<MenuItem>,
    rate: TaxRate,
}

impl OrderModel {
    /// Create an empty order taxed at the given rate.
    pub fn new(rate: TaxRate) -> Self {
        Self {
            rate,
            ..Default::default()
        }
    }

    /// Replace the entree selection.
    pub fn select_entree(&mut self, item: MenuItem) {
        tracing::debug!("Selected entree: {}", item.name);
        self.entree = Some(item);
    }

    /// Replace the side dish selection.
    pub fn select_side_dish(&mut self, item: MenuItem) {
        tracing::debug!("Selected side dish: {}", item.name);
        self.side_dish = Some(item);
    }

    /// Replace the accompaniment selection.
    pub fn select_accompaniment(&mut self, item: MenuItem) {
        tracing::debug!("Selected accompaniment: {}", item.name);
        self.accompaniment = Some(item);
    }

    /// Put an item into the slot its category names.
    pub fn select(&mut self, item: MenuItem) {
        match item.category {
            MenuCategory::Entree => self.select_entree(item),
            MenuCategory::SideDish => self.select_side_dish(item),
            MenuCategory::Accompaniment => self.select_accompaniment(item),
        }
    }

    /// Clear every slot. The tax rate is kept.
    pub fn reset(&mut self) {
        self.entree = None;
        self.side_dish = None;
        self.accompaniment = None;
        tracing::debug!("Order reset");
    }

    /// Current selections with freshly computed totals.
    pub fn current_order(&self) -> OrderSnapshot {
        OrderSnapshot::compute(
            self.entree.clone(),
            self.side_dish.clone(),
            self.accompaniment.clone(),
            self.rate,
        )
    }

    /// Rate used for tax.
    pub fn tax_rate(&self) -> TaxRate {
        self.rate
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(category: MenuCategory, name: &str, cents: i64) -> MenuItem {
        MenuItem::new(category, name, "", Decimal::new(cents, 2), name)
    }

    fn burrito() -> MenuItem {
        item(MenuCategory::Entree, "Burrito", 400)
    }

    fn rice() -> MenuItem {
        item(MenuCategory::SideDish, "Rice", 150)
    }

    fn roll() -> MenuItem {
        item(MenuCategory::Accompaniment, "Roll", 50)
    }

    #[test]
    fn test_burrito_and_rice_scenario() {
        let mut order = OrderModel::new(TaxRate::DEFAULT);
        order.select_entree(burrito());
        order.select_side_dish(rice());

        let snapshot = order.current_order();
        assert_eq!(snapshot.item_total(), Decimal::new(550, 2));
        assert_eq!(snapshot.tax(), Decimal::new(44, 2));
        assert_eq!(snapshot.total(), Decimal::new(594, 2));

        order.reset();
        let snapshot = order.current_order();
        assert!(snapshot.entree().is_none());
        assert!(snapshot.side_dish().is_none());
        assert_eq!(snapshot.item_total(), Decimal::ZERO);
        assert_eq!(snapshot.tax(), Decimal::ZERO);
        assert_eq!(snapshot.total(), Decimal::ZERO);
    }

    #[test]
    fn test_totals_for_every_combination() {
        let choices = [Some(burrito()), None];
        let sides = [Some(rice()), None];
        let accompaniments = [Some(roll()), None];

        for entree in &choices {
            for side in &sides {
                for acc in &accompaniments {
                    let mut order = OrderModel::new(TaxRate::DEFAULT);
                    for item in [entree, side, acc].into_iter().flatten() {
                        order.select(item.clone());
                    }
                    let snapshot = order.current_order();

                    let expected: Decimal = [entree, side, acc]
                        .into_iter()
                        .flatten()
                        .map(|i| i.price)
                        .sum();
                    assert_eq!(snapshot.item_total(), expected);
                    assert_eq!(snapshot.tax(), TaxRate::DEFAULT.apply(expected));
                    assert_eq!(snapshot.total(), snapshot.item_total() + snapshot.tax());
                }
            }
        }
    }

    #[test]
    fn test_selection_overwrites() {
        let mut order = OrderModel::new(TaxRate::DEFAULT);
        order.select_entree(burrito());
        order.select_entree(item(MenuCategory::Entree, "Taco", 300));

        let snapshot = order.current_order();
        assert_eq!(snapshot.entree().unwrap().name, "Taco");
        assert_eq!(snapshot.items().count(), 1);
        assert_eq!(snapshot.item_total(), Decimal::new(300, 2));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let fresh = OrderModel::new(TaxRate::DEFAULT);

        let mut used = OrderModel::new(TaxRate::DEFAULT);
        used.select_entree(burrito());
        used.select_side_dish(rice());
        used.select_accompaniment(roll());
        used.reset();
        assert_eq!(used, fresh);

        used.reset();
        assert_eq!(used, fresh);
        assert_eq!(used.current_order(), fresh.current_order());
        assert!(used.current_order().is_empty());
    }

    #[test]
    fn test_select_routes_by_category() {
        let mut order = OrderModel::default();
        order.select(roll());
        let snapshot = order.current_order();
        assert!(snapshot.entree().is_none());
        assert_eq!(
            snapshot.selection(MenuCategory::Accompaniment).unwrap().name,
            "Roll"
        );
    }

    #[test]
    fn test_tax_rate_bounds() {
        assert!(TaxRate::try_from(Decimal::new(-1, 2)).is_err());
        assert!(TaxRate::try_from(Decimal::new(101, 2)).is_err());
        assert_eq!(
            TaxRate::try_from(Decimal::ONE).unwrap().value(),
            Decimal::ONE
        );
        assert_eq!(TaxRate::DEFAULT.value(), Decimal::new(8, 2));
    }

    #[test]
    fn test_tax_rounds_to_cents() {
        // 7.00 + 3.00 + 0.50 = 10.50, 8% = 0.84
        assert_eq!(TaxRate::DEFAULT.apply(Decimal::new(1050, 2)), Decimal::new(84, 2));
        // 0.50 * 8% = 0.04
        assert_eq!(TaxRate::DEFAULT.apply(Decimal::new(50, 2)), Decimal::new(4, 2));
        // 2.50 * 5% = 0.125, a half cent rounds up
        let rate = TaxRate::try_from(Decimal::new(5, 2)).unwrap();
        assert_eq!(rate.apply(Decimal::new(250, 2)), Decimal::new(13, 2));
    }
}
