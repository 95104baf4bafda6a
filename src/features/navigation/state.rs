//! Responsive layout state of the sidebar.
//!
//! Wide viewports pin the sidebar in the layout and let the user narrow it to
//! an icon rail. Narrow viewports hide it off-canvas and slide it in as a
//! drawer. The four combinations form a small state machine driven by resize,
//! toggle, select and dismiss events.

use std::fmt;

/// Width classification against the breakpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    Desktop,
    Mobile,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoint(f64);

impl Breakpoint {
    /// Callers validate the value; see `config::parse_breakpoint`.
    pub const fn new(px: f64) -> Self {
        Self(px)
    }

    pub fn px(self) -> f64 {
        self.0
    }

    /// Widths strictly below the breakpoint are mobile.
    pub fn classify(self, width: f64) -> Layout {
        if width < self.0 {
            Layout::Mobile
        } else {
            Layout::Desktop
        }
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self(crate::app_lib::config::DEFAULT_BREAKPOINT_PX)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarMode {
    PinnedExpanded,
    PinnedCollapsed,
    DrawerClosed,
    DrawerOpen,
}

impl SidebarMode {
    pub fn layout(self) -> Layout {
        match self {
            Self::PinnedExpanded | Self::PinnedCollapsed => Layout::Desktop,
            Self::DrawerClosed | Self::DrawerOpen => Layout::Mobile,
        }
    }

    fn initial(layout: Layout) -> Self {
        match layout {
            Layout::Desktop => Self::PinnedExpanded,
            Layout::Mobile => Self::DrawerClosed,
        }
    }
}

impl fmt::Display for SidebarMode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PinnedExpanded => "pinned-expanded",
            Self::PinnedCollapsed => "pinned-collapsed",
            Self::DrawerClosed => "drawer-closed",
            Self::DrawerOpen => "drawer-open",
        };
        formatter.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavigationEvent {
    Resized { width: f64 },
    /// Collapse control on desktop, hamburger on mobile.
    Toggle,
    /// A destination was chosen.
    Select,
    /// Tap on the scrim outside the open drawer.
    Dismiss,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: SidebarMode,
    pub to: SidebarMode,
}

impl Transition {
    pub fn collapsed_changed(self) -> Option<bool> {
        let before = self.from == SidebarMode::PinnedCollapsed;
        let after = self.to == SidebarMode::PinnedCollapsed;
        (before != after).then_some(after)
    }
}

/// Local, ephemeral navigation state. The mode is the single source of truth;
/// the booleans are derived so `collapsed` can never be set on mobile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigationState {
    mode: SidebarMode,
    breakpoint: Breakpoint,
}

impl NavigationState {
    /// Initial state for the width observed at mount. An unknown width (no
    /// window) starts pinned and expanded.
    pub fn at_width(width: Option<f64>, breakpoint: Breakpoint) -> Self {
        let layout = width.map_or(Layout::Desktop, |width| breakpoint.classify(width));
        Self {
            mode: SidebarMode::initial(layout),
            breakpoint,
        }
    }

    pub fn mode(&self) -> SidebarMode {
        self.mode
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    pub fn collapsed(&self) -> bool {
        self.mode == SidebarMode::PinnedCollapsed
    }

    pub fn is_mobile(&self) -> bool {
        self.mode.layout() == Layout::Mobile
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mode == SidebarMode::DrawerOpen
    }

    /// Applies an event and reports the transition, if the mode changed.
    pub fn apply(&mut self, event: NavigationEvent) -> Option<Transition> {
        let from = self.mode;
        let to = match (event, from) {
            (NavigationEvent::Resized { width }, _) => {
                let layout = self.breakpoint.classify(width);
                if layout == from.layout() {
                    from
                } else {
                    SidebarMode::initial(layout)
                }
            }
            (NavigationEvent::Toggle, SidebarMode::PinnedExpanded) => SidebarMode::PinnedCollapsed,
            (NavigationEvent::Toggle, SidebarMode::PinnedCollapsed) => SidebarMode::PinnedExpanded,
            (NavigationEvent::Toggle, SidebarMode::DrawerClosed) => SidebarMode::DrawerOpen,
            (NavigationEvent::Toggle, SidebarMode::DrawerOpen) => SidebarMode::DrawerClosed,
            (NavigationEvent::Select | NavigationEvent::Dismiss, SidebarMode::DrawerOpen) => {
                SidebarMode::DrawerClosed
            }
            (NavigationEvent::Select | NavigationEvent::Dismiss, mode) => mode,
        };

        if to == from {
            return None;
        }
        self.mode = to;
        Some(Transition { from, to })
    }
}
