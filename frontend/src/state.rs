//! Top-level view model for the landing page.
//!
//! The page owns one `SiteState`. Event handlers dispatch `SiteAction`s and
//! never touch the fields directly.

use std::rc::Rc;

use yew::prelude::*;

use crate::config;
use crate::motion::PointerOffset;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SiteState {
    pub scrolled: bool,
    pub menu_open: bool,
    pub pointer: PointerOffset,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SiteAction {
    /// Window scroll position in pixels.
    Scrolled(f64),
    ToggleMenu,
    CloseMenu,
    /// A nav link or CTA was used to jump to a section id.
    NavigateTo(String),
    PointerMoved(PointerOffset),
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::SCROLL_THRESHOLD_PX
}

impl SiteState {
    pub fn apply(&self, action: SiteAction) -> SiteState {
        match action {
            SiteAction::Scrolled(scroll_y) => SiteState {
                scrolled: is_scrolled(scroll_y),
                ..self.clone()
            },
            SiteAction::ToggleMenu => SiteState {
                menu_open: !self.menu_open,
                ..self.clone()
            },
            SiteAction::CloseMenu | SiteAction::NavigateTo(_) => SiteState {
                menu_open: false,
                ..self.clone()
            },
            SiteAction::PointerMoved(pointer) => SiteState {
                pointer,
                ..self.clone()
            },
        }
    }
}

impl Reducible for SiteState {
    type Action = SiteAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        // skip re-render when a scroll event doesn't flip the flag
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state() {
        let state = SiteState::default();
        assert!(!state.scrolled);
        assert!(!state.menu_open);
        assert_eq!(state.pointer, PointerOffset { x: 0.0, y: 0.0 });
    }

    #[test]
    fn scroll_threshold_is_strictly_greater_than_fifty() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(1200.0));
    }

    #[test]
    fn scrolling_back_up_clears_flag() {
        let state = SiteState::default()
            .apply(SiteAction::Scrolled(300.0))
            .apply(SiteAction::Scrolled(10.0));
        assert!(!state.scrolled);
    }

    #[test]
    fn restored_scroll_position_sets_flag_on_first_sync() {
        // a reload lands mid-page, before any scroll event fires
        let state = SiteState::default().apply(SiteAction::Scrolled(640.0));
        assert!(state.scrolled);
        assert!(!state.menu_open);
        let state = SiteState::default().apply(SiteAction::Scrolled(0.0));
        assert_eq!(state, SiteState::default());
    }

    #[test]
    fn menu_toggle_and_close() {
        let state = SiteState::default().apply(SiteAction::ToggleMenu);
        assert!(state.menu_open);
        let state = state.apply(SiteAction::ToggleMenu);
        assert!(!state.menu_open);
        let state = state
            .apply(SiteAction::ToggleMenu)
            .apply(SiteAction::CloseMenu);
        assert!(!state.menu_open);
        assert!(!state.apply(SiteAction::CloseMenu).menu_open);
    }

    #[test]
    fn navigating_closes_menu_and_keeps_other_fields() {
        let base = SiteState {
            scrolled: true,
            menu_open: true,
            pointer: PointerOffset { x: 4.0, y: -8.0 },
        };
        let next = base.apply(SiteAction::NavigateTo("why-us".to_string()));
        assert!(!next.menu_open);
        assert!(next.scrolled);
        assert_eq!(next.pointer, base.pointer);

        let closed = SiteState::default().apply(SiteAction::NavigateTo("contact".to_string()));
        assert_eq!(closed, SiteState::default());
    }

    #[test]
    fn latest_pointer_wins() {
        let state = SiteState::default()
            .apply(SiteAction::PointerMoved(PointerOffset { x: 10.0, y: 20.0 }))
            .apply(SiteAction::PointerMoved(PointerOffset { x: -5.0, y: 3.0 }));
        assert_eq!(state.pointer, PointerOffset { x: -5.0, y: 3.0 });
    }

    #[test]
    fn actions_only_touch_their_own_field() {
        let base = SiteState {
            scrolled: true,
            menu_open: true,
            pointer: PointerOffset { x: 1.0, y: 2.0 },
        };
        let moved = base.apply(SiteAction::PointerMoved(PointerOffset { x: 9.0, y: 9.0 }));
        assert!(moved.scrolled && moved.menu_open);
        let closed = base.apply(SiteAction::CloseMenu);
        assert!(closed.scrolled);
        assert_eq!(closed.pointer, base.pointer);
    }

    #[test]
    fn reducer_keeps_same_rc_when_nothing_changes() {
        let state = Rc::new(SiteState::default());
        let next = state.clone().reduce(SiteAction::Scrolled(20.0));
        assert!(Rc::ptr_eq(&state, &next));
        let next = state.clone().reduce(SiteAction::Scrolled(80.0));
        assert!(!Rc::ptr_eq(&state, &next));
        assert!(next.scrolled);
    }
}
