//! Component-level mouse interactivity system.
//!
//! Components register their interactive regions during render, and mouse
//! events are routed to the highest-priority region containing the pointer.
//!
//! # Example
//!
//! ```ignore
//! // During render, register the Pick button:
//! app.interactions.register_click("pick_button", bounds, Action::Pick);
//! ```

use crate::app::ClickRegion;
use crate::events::Action;
use crate::log;

/// An interactive region that can respond to mouse events.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Identifier for this region (for debugging/logging)
    pub id: &'static str,

    /// The bounds of this interactive region
    pub bounds: ClickRegion,

    /// Action to dispatch on left click (None = not clickable)
    pub on_click: Option<Action>,

    /// Action to dispatch on scroll up (None = not scrollable)
    pub on_scroll_up: Option<Action>,

    /// Action to dispatch on scroll down (None = not scrollable)
    pub on_scroll_down: Option<Action>,

    /// Priority for overlapping regions (higher = checked first)
    pub priority: i32,
}

impl InteractiveRegion {
    /// Create a new clickable region
    pub fn clickable(id: &'static str, bounds: ClickRegion, action: Action) -> Self {
        Self {
            id,
            bounds,
            on_click: Some(action),
            on_scroll_up: None,
            on_scroll_down: None,
            priority: 0,
        }
    }

    /// Create a new scrollable region
    pub fn scrollable(
        id: &'static str,
        bounds: ClickRegion,
        scroll_up: Action,
        scroll_down: Action,
    ) -> Self {
        Self {
            id,
            bounds,
            on_click: None,
            on_scroll_up: Some(scroll_up),
            on_scroll_down: Some(scroll_down),
            priority: 0,
        }
    }

    /// Set the priority (for builder pattern)
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Check if a point is within this region's bounds
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Register an interactive region
    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    /// Register a simple clickable region
    pub fn register_click(&mut self, id: &'static str, bounds: ClickRegion, action: Action) {
        self.register(InteractiveRegion::clickable(id, bounds, action));
    }

    /// Register a scrollable region
    pub fn register_scroll(
        &mut self,
        id: &'static str,
        bounds: ClickRegion,
        scroll_up: Action,
        scroll_down: Action,
    ) {
        self.register(InteractiveRegion::scrollable(
            id,
            bounds,
            scroll_up,
            scroll_down,
        ));
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Find the action to dispatch for a click at (x, y)
    pub fn handle_click(&self, x: u16, y: u16) -> Action {
        match self.top_region(x, y, |r| r.on_click.as_ref()) {
            Some((region, action)) => {
                log::log_event(&format!("Click on {}", region.id));
                action.clone()
            }
            None => Action::None,
        }
    }

    /// Find the action to dispatch for a scroll up at (x, y)
    pub fn handle_scroll_up(&self, x: u16, y: u16) -> Action {
        self.top_action(x, y, |r| r.on_scroll_up.as_ref())
    }

    /// Find the action to dispatch for a scroll down at (x, y)
    pub fn handle_scroll_down(&self, x: u16, y: u16) -> Action {
        self.top_action(x, y, |r| r.on_scroll_down.as_ref())
    }

    fn top_action<F>(&self, x: u16, y: u16, handler: F) -> Action
    where
        F: Fn(&InteractiveRegion) -> Option<&Action>,
    {
        self.top_region(x, y, handler)
            .map(|(_, action)| action.clone())
            .unwrap_or(Action::None)
    }

    /// Highest-priority region containing the point that has a handler for
    /// this event kind, with that handler's action.
    fn top_region<F>(&self, x: u16, y: u16, handler: F) -> Option<(&InteractiveRegion, &Action)>
    where
        F: Fn(&InteractiveRegion) -> Option<&Action>,
    {
        // Reversed so the earliest registration wins a priority tie
        self.regions
            .iter()
            .rev()
            .filter(|r| r.contains(x, y))
            .filter_map(|r| handler(r).map(|action| (r, action)))
            .max_by_key(|(r, _)| r.priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_contains() {
        let region =
            InteractiveRegion::clickable("test", ClickRegion::new(10, 10, 20, 10), Action::None);

        assert!(region.contains(10, 10)); // top-left corner
        assert!(region.contains(15, 15)); // center
        assert!(region.contains(29, 19)); // just inside bottom-right
        assert!(!region.contains(30, 20)); // just outside
        assert!(!region.contains(9, 10)); // just left
    }

    #[test]
    fn test_priority_ordering() {
        let mut registry = InteractionRegistry::new();

        registry.register(
            InteractiveRegion::clickable(
                "background",
                ClickRegion::new(0, 0, 100, 100),
                Action::Reset,
            )
            .with_priority(0),
        );

        registry.register(
            InteractiveRegion::clickable(
                "popup",
                ClickRegion::new(20, 20, 60, 60),
                Action::CloseHelp,
            )
            .with_priority(10),
        );

        // Click in popup area should return popup's action
        assert_eq!(registry.handle_click(50, 50), Action::CloseHelp);

        // Click outside popup should return background's action
        assert_eq!(registry.handle_click(5, 5), Action::Reset);
    }

    #[test]
    fn test_scroll_skips_click_only_regions() {
        let mut registry = InteractionRegistry::new();
        registry.register_click("button", ClickRegion::new(0, 0, 10, 1), Action::Pick);
        registry.register_scroll(
            "history",
            ClickRegion::new(0, 0, 10, 10),
            Action::ScrollHistoryUp(1),
            Action::ScrollHistoryDown(1),
        );

        assert_eq!(registry.handle_scroll_up(1, 0), Action::ScrollHistoryUp(1));
        assert_eq!(registry.handle_click(1, 0), Action::Pick);
        assert_eq!(registry.handle_click(1, 5), Action::None);

        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.handle_scroll_down(1, 5), Action::None);
    }
}
