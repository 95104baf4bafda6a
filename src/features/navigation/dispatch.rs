//! Single entry point from sidebar controls to state and parent callbacks.

use crate::features::navigation::state::{NavigationEvent, NavigationState, Transition};
use tracing::{debug, info};

/// User or platform input handled by the sidebar.
#[derive(Clone, Debug, PartialEq)]
pub enum SidebarAction {
    Select(String),
    Toggle,
    Resize(f64),
    Dismiss,
    Logout,
}

/// Requests the sidebar sends to its parent.
pub trait SidebarOutputs {
    fn set_active_tab(&self, id: &str);
    fn logout(&self);
    fn collapsed_changed(&self, _collapsed: bool) {}
}

/// Applies `action` to `state` and notifies the parent. Selection always
/// reaches the parent, even when `id` is already active.
pub fn dispatch(
    state: &mut NavigationState,
    action: SidebarAction,
    outputs: &impl SidebarOutputs,
) -> Option<Transition> {
    let transition = match action {
        SidebarAction::Select(id) => {
            debug!(tab = %id, "destination selected");
            outputs.set_active_tab(&id);
            state.apply(NavigationEvent::Select)
        }
        SidebarAction::Toggle => state.apply(NavigationEvent::Toggle),
        SidebarAction::Resize(width) => state.apply(NavigationEvent::Resized { width }),
        SidebarAction::Dismiss => state.apply(NavigationEvent::Dismiss),
        SidebarAction::Logout => {
            info!("logout requested");
            outputs.logout();
            None
        }
    };

    if let Some(transition) = transition {
        debug!(from = %transition.from, to = %transition.to, "sidebar mode changed");
        if let Some(collapsed) = transition.collapsed_changed() {
            outputs.collapsed_changed(collapsed);
        }
    }

    transition
}

#[cfg(test)]
mod tests {
    use super::{SidebarAction, SidebarOutputs, dispatch};
    use crate::features::navigation::state::{Breakpoint, NavigationState, SidebarMode};
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        tabs: RefCell<Vec<String>>,
        logouts: RefCell<usize>,
        collapsed: RefCell<Vec<bool>>,
    }

    impl SidebarOutputs for Recorder {
        fn set_active_tab(&self, id: &str) {
            self.tabs.borrow_mut().push(id.to_string());
        }

        fn logout(&self) {
            *self.logouts.borrow_mut() += 1;
        }

        fn collapsed_changed(&self, collapsed: bool) {
            self.collapsed.borrow_mut().push(collapsed);
        }
    }

    fn state(width: f64) -> NavigationState {
        NavigationState::at_width(Some(width), Breakpoint::default())
    }

    #[test]
    fn select_calls_set_active_tab_once() {
        let recorder = Recorder::default();
        let mut nav = state(1200.0);

        dispatch(&mut nav, SidebarAction::Select("users".to_string()), &recorder);

        assert_eq!(*recorder.tabs.borrow(), vec!["users".to_string()]);
    }

    #[test]
    fn reselecting_the_same_id_fires_again() {
        let recorder = Recorder::default();
        let mut nav = state(1200.0);

        dispatch(&mut nav, SidebarAction::Select("dashboard".to_string()), &recorder);
        dispatch(&mut nav, SidebarAction::Select("dashboard".to_string()), &recorder);

        assert_eq!(recorder.tabs.borrow().len(), 2);
    }

    #[test]
    fn select_on_mobile_closes_the_drawer() {
        let recorder = Recorder::default();
        let mut nav = state(500.0);
        dispatch(&mut nav, SidebarAction::Toggle, &recorder);
        assert!(nav.mobile_menu_open());

        dispatch(&mut nav, SidebarAction::Select("profile".to_string()), &recorder);

        assert!(!nav.mobile_menu_open());
        assert_eq!(*recorder.tabs.borrow(), vec!["profile".to_string()]);
    }

    #[test]
    fn collapse_changes_are_reported_once_each() {
        let recorder = Recorder::default();
        let mut nav = state(1200.0);

        dispatch(&mut nav, SidebarAction::Toggle, &recorder);
        dispatch(&mut nav, SidebarAction::Resize(1000.0), &recorder);
        dispatch(&mut nav, SidebarAction::Resize(400.0), &recorder);
        dispatch(&mut nav, SidebarAction::Toggle, &recorder);

        assert_eq!(*recorder.collapsed.borrow(), vec![true, false]);
        assert_eq!(nav.mode(), SidebarMode::DrawerOpen);
    }

    #[test]
    fn logout_is_forwarded_without_changing_mode() {
        let recorder = Recorder::default();
        let mut nav = state(1200.0);

        let transition = dispatch(&mut nav, SidebarAction::Logout, &recorder);

        assert_eq!(transition, None);
        assert_eq!(*recorder.logouts.borrow(), 1);
        assert!(recorder.tabs.borrow().is_empty());
    }
}
