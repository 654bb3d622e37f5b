//! The static menu catalog.
//!
//! Front-ends never build menu items themselves. They load a [`Menu`] once
//! from a [`MenuSource`] at startup and hand its items to the session.

use rust_decimal::Decimal;

use crate::item::{MenuCategory, MenuItem};

/// Supplier of the three menu lists.
#[cfg_attr(test, mockall::automock)]
pub trait MenuSource {
    /// Entree options.
    fn entrees(&self) -> Vec<MenuItem>;

    /// Side dish options.
    fn side_dishes(&self) -> Vec<MenuItem>;

    /// Accompaniment options.
    fn accompaniments(&self) -> Vec<MenuItem>;
}

/// The built-in Lunch Tray catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataSource;

fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

impl MenuSource for DataSource {
    fn entrees(&self) -> Vec<MenuItem> {
        vec![
            MenuItem::new(
                MenuCategory::Entree,
                "Cauliflower",
                "Whole cauliflower, brined, roasted, and deep fried",
                cents(700),
                "cauliflower",
            ),
            MenuItem::new(
                MenuCategory::Entree,
                "Three Bean Chili",
                "Black beans, red beans, kidney beans, slow cooked, topped with onion",
                cents(400),
                "chili",
            ),
            MenuItem::new(
                MenuCategory::Entree,
                "Mushroom Pasta",
                "Penne pasta, mushrooms, basil, with plum tomatoes cooked in garlic and olive oil",
                cents(550),
                "pasta",
            ),
            MenuItem::new(
                MenuCategory::Entree,
                "Spicy Black Bean Skillet",
                "Seasonal vegetables, black beans, house spice blend",
                cents(550),
                "skillet",
            ),
        ]
    }

    fn side_dishes(&self) -> Vec<MenuItem> {
        vec![
            MenuItem::new(
                MenuCategory::SideDish,
                "Summer Salad",
                "Heirloom tomatoes, butter lettuce, peaches, avocado, balsamic dressing",
                cents(250),
                "summer_salad",
            ),
            MenuItem::new(
                MenuCategory::SideDish,
                "Butternut Squash Soup",
                "Roasted butternut squash, roasted peppers, chili oil",
                cents(300),
                "squash_soup",
            ),
            MenuItem::new(
                MenuCategory::SideDish,
                "Spicy Potatoes",
                "Marble potatoes, roasted, and fried in house spice blend",
                cents(200),
                "potatoes",
            ),
            MenuItem::new(
                MenuCategory::SideDish,
                "Coconut Rice",
                "Rice, coconut milk, lime, and sugar",
                cents(150),
                "rice",
            ),
        ]
    }

    fn accompaniments(&self) -> Vec<MenuItem> {
        vec![
            MenuItem::new(
                MenuCategory::Accompaniment,
                "Lunch Roll",
                "Fresh baked roll made in house",
                cents(50),
                "lunch_roll",
            ),
            MenuItem::new(
                MenuCategory::Accompaniment,
                "Mixed Berries",
                "Strawberries, blueberries, raspberries, and huckleberries",
                cents(100),
                "mixed_berries",
            ),
            MenuItem::new(
                MenuCategory::Accompaniment,
                "Pickled Veggies",
                "Pickled cucumbers and carrots, made in house",
                cents(50),
                "pickled_veggies",
            ),
        ]
    }
}

/// The three menu lists, loaded once and kept for the session.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    entrees: Vec<MenuItem>,
    side_dishes: Vec<MenuItem>,
    accompaniments: Vec<MenuItem>,
}

impl Menu {
    /// Query every list of the source exactly once.
    pub fn load(source: &dyn MenuSource) -> Self {
        let menu = Self {
            entrees: source.entrees(),
            side_dishes: source.side_dishes(),
            accompaniments: source.accompaniments(),
        };
        tracing::debug!(
            "Loaded menu: {} entrees, {} side dishes, {} accompaniments",
            menu.entrees.len(),
            menu.side_dishes.len(),
            menu.accompaniments.len()
        );
        menu
    }

    /// Items listed under a category.
    pub fn items(&self, category: MenuCategory) -> &[MenuItem] {
        match category {
            MenuCategory::Entree => &self.entrees,
            MenuCategory::SideDish => &self.side_dishes,
            MenuCategory::Accompaniment => &self.accompaniments,
        }
    }

    /// Look up an item by category and position.
    pub fn get(&self, category: MenuCategory, index: usize) -> Option<&MenuItem> {
        self.items(category).get(index)
    }

    /// Look up an item by category and name.
    pub fn find(&self, category: MenuCategory, name: &str) -> Option<&MenuItem> {
        self.items(category).iter().find(|item| item.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_source_categories_match_lists() {
        let source = DataSource;
        assert!(source.entrees().iter().all(|i| i.is(MenuCategory::Entree)));
        assert!(source
            .side_dishes()
            .iter()
            .all(|i| i.is(MenuCategory::SideDish)));
        assert!(source
            .accompaniments()
            .iter()
            .all(|i| i.is(MenuCategory::Accompaniment)));
    }

    #[test]
    fn test_data_source_sizes() {
        let menu = Menu::load(&DataSource);
        assert_eq!(menu.items(MenuCategory::Entree).len(), 4);
        assert_eq!(menu.items(MenuCategory::SideDish).len(), 4);
        assert_eq!(menu.items(MenuCategory::Accompaniment).len(), 3);
    }

    #[test]
    fn test_load_queries_each_list_once() {
        let mut source = MockMenuSource::new();
        source.expect_entrees().times(1).returning(|| {
            vec![MenuItem::new(
                MenuCategory::Entree,
                "Burrito",
                "Beans and rice",
                Decimal::new(400, 2),
                "burrito",
            )]
        });
        source.expect_side_dishes().times(1).returning(Vec::new);
        source.expect_accompaniments().times(1).returning(Vec::new);

        let menu = Menu::load(&source);
        assert_eq!(menu.items(MenuCategory::Entree).len(), 1);
        assert!(menu.items(MenuCategory::SideDish).is_empty());

        // Reads after loading never go back to the source
        assert!(menu.find(MenuCategory::Entree, "Burrito").is_some());
        assert!(menu.get(MenuCategory::Entree, 1).is_none());
    }

    #[test]
    fn test_find_by_name() {
        let menu = Menu::load(&DataSource);
        let rice = menu.find(MenuCategory::SideDish, "Coconut Rice").unwrap();
        assert_eq!(rice.price, Decimal::new(150, 2));
        assert!(menu.find(MenuCategory::Entree, "Coconut Rice").is_none());
    }
}
