//! Shared sidebar Tailwind class constants to keep the pinned rail and the
//! mobile drawer visually consistent.

pub struct Theme;

impl Theme {
    /// Pinned sidebar at full width.
    pub const PINNED_EXPANDED: &'static str = "w-64 flex-shrink-0 flex flex-col border-r border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-900 transition-all duration-200";

    /// Pinned icon-only rail.
    pub const PINNED_COLLAPSED: &'static str = "w-16 flex-shrink-0 flex flex-col border-r border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-900 transition-all duration-200";

    /// Off-canvas drawer; the translate class is toggled separately.
    pub const DRAWER: &'static str = "fixed inset-y-0 left-0 z-40 w-64 flex flex-col bg-white dark:bg-gray-900 shadow-xl transform transition-transform duration-200";

    /// Scrim rendered behind the open drawer.
    pub const SCRIM: &'static str = "fixed inset-0 z-30 bg-gray-900/50";

    pub const ITEM: &'static str = "group flex w-full items-center px-2 py-2 text-sm font-medium rounded-md transition-colors";

    pub const ITEM_ACTIVE: &'static str = "text-blue-600 bg-blue-50 dark:bg-blue-900 dark:text-blue-400";

    pub const ITEM_IDLE: &'static str = "text-gray-600 dark:text-gray-300 hover:bg-gray-50 dark:hover:bg-gray-800 hover:text-gray-900 dark:hover:text-white";

    /// Icon color follows the item state.
    pub const ICON_ACTIVE: &'static str = "text-blue-600 dark:text-blue-400";

    pub const ICON_IDLE: &'static str = "text-gray-400 group-hover:text-gray-900 dark:group-hover:text-white";

    /// Round toolbar button used by the hamburger and collapse controls.
    pub const CONTROL: &'static str = "inline-flex items-center justify-center w-10 h-10 text-gray-500 rounded-lg hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200 dark:text-gray-400 dark:hover:bg-gray-700 dark:focus:ring-gray-600";

    pub const AVATAR: &'static str = "flex h-9 w-9 flex-shrink-0 items-center justify-center rounded-full bg-blue-600 text-sm font-semibold text-white";
}

/// Joins the base item classes with the state classes.
pub fn item_class(active: bool) -> String {
    let state = if active { Theme::ITEM_ACTIVE } else { Theme::ITEM_IDLE };
    format!("{} {state}", Theme::ITEM)
}
