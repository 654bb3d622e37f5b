//! Screen back-stack.

use crate::screen::ScreenRoute;

/// Back-stack of screens rooted at [`ScreenRoute::Start`].
///
/// The root frame is never popped. Two ways back exist: `navigate_up`
/// removes exactly one frame, `pop_to_root` removes every frame above Start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavController {
    frames: Vec<ScreenRoute>,
}

impl NavController {
    /// Create a back-stack holding only the start screen.
    pub fn new() -> Self {
        Self {
            frames: vec![ScreenRoute::Start],
        }
    }

    /// The screen on top of the stack.
    pub fn current(&self) -> ScreenRoute {
        self.frames
            .last()
            .copied()
            .unwrap_or(ScreenRoute::Start)
    }

    /// The screen below the top, if any.
    pub fn previous(&self) -> Option<ScreenRoute> {
        self.frames.len().checked_sub(2).map(|i| self.frames[i])
    }

    /// Push a screen onto the stack.
    pub fn navigate(&mut self, route: ScreenRoute) {
        self.frames.push(route);
        tracing::debug!("Navigated to {}, stack depth: {}", route, self.frames.len());
    }

    /// Pop one frame. Returns `false` when already at the root.
    pub fn navigate_up(&mut self) -> bool {
        if self.frames.len() > 1 {
            self.frames.pop();
            tracing::debug!("Navigated up, stack depth: {}", self.frames.len());
            true
        } else {
            tracing::debug!("Cannot navigate up: already at root");
            false
        }
    }

    /// Pop every frame above the root. The root itself stays.
    pub fn pop_to_root(&mut self) {
        self.frames.truncate(1);
        tracing::debug!("Popped to root");
    }

    /// Check if a back arrow should be offered.
    pub fn can_navigate_back(&self) -> bool {
        self.frames.len() > 1
    }

    /// Get the depth of the stack.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Check if we're at the root screen.
    pub fn is_root(&self) -> bool {
        self.frames.len() == 1
    }

    /// Screens from root to top.
    pub fn breadcrumbs(&self) -> impl Iterator<Item = ScreenRoute> + '_ {
        self.frames.iter().copied()
    }
}

impl Default for NavController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_checkout() -> NavController {
        let mut nav = NavController::new();
        nav.navigate(ScreenRoute::Entree);
        nav.navigate(ScreenRoute::SideDish);
        nav.navigate(ScreenRoute::Checkout);
        nav
    }

    #[test]
    fn test_starts_at_root() {
        let nav = NavController::new();
        assert_eq!(nav.current(), ScreenRoute::Start);
        assert!(nav.is_root());
        assert!(!nav.can_navigate_back());
        assert_eq!(nav.previous(), None);
    }

    #[test]
    fn test_navigate_up_pops_one_frame() {
        let mut nav = at_checkout();
        assert_eq!(nav.previous(), Some(ScreenRoute::SideDish));

        assert!(nav.navigate_up());
        assert_eq!(nav.current(), ScreenRoute::SideDish);
        assert_eq!(nav.depth(), 3);
    }

    #[test]
    fn test_navigate_up_stops_at_root() {
        let mut nav = NavController::new();
        nav.navigate(ScreenRoute::Entree);
        assert!(nav.navigate_up());
        assert!(!nav.navigate_up());
        assert_eq!(nav.current(), ScreenRoute::Start);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_pop_to_root_keeps_start() {
        let mut nav = at_checkout();
        nav.pop_to_root();
        assert_eq!(nav, NavController::new());

        // Forward navigation still works afterwards
        nav.navigate(ScreenRoute::Entree);
        assert_eq!(nav.current(), ScreenRoute::Entree);
        assert!(nav.can_navigate_back());
    }

    #[test]
    fn test_breadcrumbs() {
        let nav = at_checkout();
        let crumbs: Vec<_> = nav.breadcrumbs().collect();
        assert_eq!(
            crumbs,
            vec![
                ScreenRoute::Start,
                ScreenRoute::Entree,
                ScreenRoute::SideDish,
                ScreenRoute::Checkout
            ]
        );
    }
}
