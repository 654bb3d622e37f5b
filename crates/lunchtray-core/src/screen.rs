//! Screen routes and the forward flow between them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RouteParseError;
use crate::item::MenuCategory;

/// One of the five fixed screens of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScreenRoute {
    Start,
    Entree,
    SideDish,
    Accompaniment,
    Checkout,
}

impl ScreenRoute {
    /// Every route in flow order.
    pub const ALL: [ScreenRoute; 5] = [
        ScreenRoute::Start,
        ScreenRoute::Entree,
        ScreenRoute::SideDish,
        ScreenRoute::Accompaniment,
        ScreenRoute::Checkout,
    ];

    /// Stable route name.
    pub fn name(self) -> &'static str {
        match self {
            ScreenRoute::Start => "Start",
            ScreenRoute::Entree => "Entree",
            ScreenRoute::SideDish => "SideDish",
            ScreenRoute::Accompaniment => "Accompaniment",
            ScreenRoute::Checkout => "Checkout",
        }
    }

    /// Title shown in the app bar.
    pub fn title(self) -> &'static str {
        match self {
            ScreenRoute::Start => "Lunch Tray",
            ScreenRoute::Entree => "Choose Entree",
            ScreenRoute::SideDish => "Choose Side Dish",
            ScreenRoute::Accompaniment => "Choose Accompaniment",
            ScreenRoute::Checkout => "Order Checkout",
        }
    }

    /// The menu category listed on this screen, if it is a menu screen.
    pub fn category(self) -> Option<MenuCategory> {
        match self {
            ScreenRoute::Entree => Some(MenuCategory::Entree),
            ScreenRoute::SideDish => Some(MenuCategory::SideDish),
            ScreenRoute::Accompaniment => Some(MenuCategory::Accompaniment),
            ScreenRoute::Start | ScreenRoute::Checkout => None,
        }
    }

    /// Forward successor of this screen.
    ///
    /// Checkout has none: leaving it always returns to Start.
    pub fn next(self, policy: FlowPolicy) -> Option<ScreenRoute> {
        match self {
            ScreenRoute::Start => Some(ScreenRoute::Entree),
            ScreenRoute::Entree => Some(ScreenRoute::SideDish),
            ScreenRoute::SideDish if policy.include_accompaniment => {
                Some(ScreenRoute::Accompaniment)
            }
            ScreenRoute::SideDish => Some(ScreenRoute::Checkout),
            ScreenRoute::Accompaniment => Some(ScreenRoute::Checkout),
            ScreenRoute::Checkout => None,
        }
    }
}

impl fmt::Display for ScreenRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScreenRoute {
    type Err = RouteParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScreenRoute::ALL
            .into_iter()
            .find(|route| route.name() == s)
            .ok_or_else(|| RouteParseError(s.to_string()))
    }
}

/// Shape of the forward flow.
///
/// The shipped flow goes straight from the side dish screen to checkout,
/// leaving the accompaniment screen reachable only when this is enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowPolicy {
    #[serde(default)]
    pub include_accompaniment: bool,
}

impl FlowPolicy {
    /// Flow that visits the accompaniment screen.
    pub fn with_accompaniment() -> Self {
        Self {
            include_accompaniment: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_flow_skips_accompaniment() {
        let policy = FlowPolicy::default();
        let mut route = ScreenRoute::Start;
        let mut visited = vec![route];
        while let Some(next) = route.next(policy) {
            visited.push(next);
            route = next;
        }
        assert_eq!(
            visited,
            vec![
                ScreenRoute::Start,
                ScreenRoute::Entree,
                ScreenRoute::SideDish,
                ScreenRoute::Checkout
            ]
        );
    }

    #[test]
    fn test_full_flow_visits_every_screen() {
        let policy = FlowPolicy::with_accompaniment();
        let mut route = ScreenRoute::Start;
        let mut visited = vec![route];
        while let Some(next) = route.next(policy) {
            visited.push(next);
            route = next;
        }
        assert_eq!(visited, ScreenRoute::ALL.to_vec());
    }

    #[test]
    fn test_accompaniment_always_leads_to_checkout() {
        assert_eq!(
            ScreenRoute::Accompaniment.next(FlowPolicy::default()),
            Some(ScreenRoute::Checkout)
        );
    }

    #[test]
    fn test_parse_route_names() {
        for route in ScreenRoute::ALL {
            assert_eq!(route.name().parse::<ScreenRoute>().unwrap(), route);
        }
        let err = "Dessert".parse::<ScreenRoute>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown screen route: Dessert");
    }

    #[test]
    fn test_menu_screens_have_categories() {
        assert_eq!(ScreenRoute::Start.category(), None);
        assert_eq!(ScreenRoute::Entree.category(), Some(MenuCategory::Entree));
        assert_eq!(ScreenRoute::Checkout.category(), None);
        assert_eq!(ScreenRoute::Checkout.title(), "Order Checkout");
    }
}
