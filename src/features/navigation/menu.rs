//! Destinations listed in the sidebar.
//!
//! Organized in two sections:
//! 1. Workspace (every signed-in user)
//! 2. Administration (appended for admins only)

use crate::components::icons::IconKind;
use crate::features::session::types::UserRole;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: IconKind,
}

impl MenuItem {
    const fn new(id: &'static str, label: &'static str, icon: IconKind) -> Self {
        Self { id, label, icon }
    }
}

pub const BASE_ITEMS: [MenuItem; 4] = [
    MenuItem::new("dashboard", "Dashboard", IconKind::Dashboard),
    MenuItem::new("activity", "Activity", IconKind::Activity),
    MenuItem::new("profile", "My Profile", IconKind::Profile),
    MenuItem::new("settings", "Settings", IconKind::Settings),
];

pub const ADMIN_ITEMS: [MenuItem; 3] = [
    MenuItem::new("users", "User Management", IconKind::Users),
    MenuItem::new("analytics", "Analytics", IconKind::Analytics),
    MenuItem::new("system", "System Settings", IconKind::System),
];

/// Destination landed on when the parent has no selection yet.
pub const DEFAULT_TAB: &str = "dashboard";

/// Ordered destinations for a role: the base list, then the admin list for admins.
pub fn menu_for_role(role: UserRole) -> Vec<MenuItem> {
    let mut items = BASE_ITEMS.to_vec();
    if role.is_admin() {
        items.extend_from_slice(&ADMIN_ITEMS);
    }
    items
}

/// Looks up a destination visible to `role`.
pub fn find_item(role: UserRole, id: &str) -> Option<MenuItem> {
    menu_for_role(role).into_iter().find(|item| item.id == id)
}

/// An item is highlighted exactly when its id is the active tab.
pub fn is_active(item: &MenuItem, active_tab: &str) -> bool {
    item.id == active_tab
}

#[cfg(test)]
mod tests {
    use super::{ADMIN_ITEMS, BASE_ITEMS, find_item, is_active, menu_for_role};
    use crate::features::session::types::UserRole;
    use std::collections::HashSet;

    fn ids(role: UserRole) -> Vec<&'static str> {
        menu_for_role(role).iter().map(|item| item.id).collect()
    }

    #[test]
    fn members_see_exactly_the_base_list() {
        assert_eq!(
            ids(UserRole::Member),
            vec!["dashboard", "activity", "profile", "settings"]
        );
        assert_eq!(ids(UserRole::parse("Admin")), ids(UserRole::Member));
        assert_eq!(ids(UserRole::parse("support")), ids(UserRole::Member));
    }

    #[test]
    fn admins_see_base_then_admin_items() {
        let items = menu_for_role(UserRole::Admin);
        assert_eq!(items.len(), BASE_ITEMS.len() + ADMIN_ITEMS.len());
        assert_eq!(&items[..BASE_ITEMS.len()], &BASE_ITEMS[..]);
        assert_eq!(&items[BASE_ITEMS.len()..], &ADMIN_ITEMS[..]);
    }

    #[test]
    fn ids_are_unique() {
        let all = ids(UserRole::Admin);
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), all.len());
    }

    #[test]
    fn derivation_is_deterministic() {
        assert_eq!(menu_for_role(UserRole::Admin), menu_for_role(UserRole::Admin));
        assert_eq!(menu_for_role(UserRole::Member), menu_for_role(UserRole::Member));
    }

    #[test]
    fn find_item_respects_role() {
        assert!(find_item(UserRole::Admin, "users").is_some());
        assert!(find_item(UserRole::Member, "users").is_none());
        assert_eq!(
            find_item(UserRole::Member, "profile").map(|item| item.label),
            Some("My Profile")
        );
    }

    fn active_ids(role: UserRole, tab: &str) -> Vec<&'static str> {
        menu_for_role(role)
            .iter()
            .filter(|item| is_active(item, tab))
            .map(|item| item.id)
            .collect()
    }

    #[test]
    fn exactly_one_item_is_active_for_a_listed_tab() {
        assert_eq!(active_ids(UserRole::Admin, "analytics"), vec!["analytics"]);
        assert_eq!(active_ids(UserRole::Member, "dashboard"), vec!["dashboard"]);
    }

    #[test]
    fn nothing_is_active_for_unknown_or_hidden_tabs() {
        assert!(active_ids(UserRole::Admin, "billing").is_empty());
        assert!(active_ids(UserRole::Admin, "").is_empty());
        assert!(active_ids(UserRole::Member, "users").is_empty());
    }
}
