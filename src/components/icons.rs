//! Icon providers for navigation glyphs. The sidebar asks for a semantic
//! [`IconKind`] and the injected provider decides how it is drawn, so a single
//! component serves both the Material Symbols look and the emoji look.

use crate::app_lib::AppError;
use leptos::prelude::*;
use std::fmt;
use std::sync::Arc;

/// Semantic icon names used by the navigation chrome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKind {
    Dashboard,
    Activity,
    Profile,
    Settings,
    Users,
    Analytics,
    System,
    Menu,
    Close,
    CollapseLeft,
    ExpandRight,
    Logout,
    Avatar,
}

impl IconKind {
    pub const ALL: [IconKind; 13] = [
        IconKind::Dashboard,
        IconKind::Activity,
        IconKind::Profile,
        IconKind::Settings,
        IconKind::Users,
        IconKind::Analytics,
        IconKind::System,
        IconKind::Menu,
        IconKind::Close,
        IconKind::CollapseLeft,
        IconKind::ExpandRight,
        IconKind::Logout,
        IconKind::Avatar,
    ];
}

/// What to render for an icon: the text content and the classes of its span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconGlyph {
    pub text: &'static str,
    pub class: &'static str,
}

pub trait IconProvider: Send + Sync {
    fn glyph(&self, icon: IconKind) -> IconGlyph;
}

/// Google Material Symbols ligatures.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaterialSymbols;

impl IconProvider for MaterialSymbols {
    fn glyph(&self, icon: IconKind) -> IconGlyph {
        let text = match icon {
            IconKind::Dashboard => "dashboard",
            IconKind::Activity => "timeline",
            IconKind::Profile => "person",
            IconKind::Settings => "settings",
            IconKind::Users => "group",
            IconKind::Analytics => "monitoring",
            IconKind::System => "admin_panel_settings",
            IconKind::Menu => "menu",
            IconKind::Close => "close",
            IconKind::CollapseLeft => "chevron_left",
            IconKind::ExpandRight => "chevron_right",
            IconKind::Logout => "logout",
            IconKind::Avatar => "account_circle",
        };
        IconGlyph {
            text,
            class: "material-symbols-outlined text-xl leading-none",
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct EmojiIcons;

impl IconProvider for EmojiIcons {
    fn glyph(&self, icon: IconKind) -> IconGlyph {
        let text = match icon {
            IconKind::Dashboard => "📊",
            IconKind::Activity => "📈",
            IconKind::Profile => "👤",
            IconKind::Settings => "⚙️",
            IconKind::Users => "👥",
            IconKind::Analytics => "📉",
            IconKind::System => "🛡️",
            IconKind::Menu => "☰",
            IconKind::Close => "✕",
            IconKind::CollapseLeft => "«",
            IconKind::ExpandRight => "»",
            IconKind::Logout => "🚪",
            IconKind::Avatar => "👤",
        };
        IconGlyph {
            text,
            class: "text-lg leading-none",
        }
    }
}

/// Built-in providers selectable from configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum IconSet {
    #[default]
    Material,
    Emoji,
}

impl IconSet {
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value.trim().to_lowercase().as_str() {
            "material" | "material-symbols" => Ok(Self::Material),
            "emoji" => Ok(Self::Emoji),
            _ => Err(AppError::Config(format!("unknown icon_set: {value}"))),
        }
    }
}

/// Shared handle to an icon provider, cheap to clone into view closures.
#[derive(Clone)]
pub struct Icons(Arc<dyn IconProvider>);

impl Icons {
    pub fn new(provider: impl IconProvider + 'static) -> Self {
        Self(Arc::new(provider))
    }

    pub fn glyph(&self, icon: IconKind) -> IconGlyph {
        self.0.glyph(icon)
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::new(MaterialSymbols)
    }
}

impl fmt::Debug for Icons {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Icons(..)")
    }
}

impl From<IconSet> for Icons {
    fn from(set: IconSet) -> Self {
        match set {
            IconSet::Material => Self::new(MaterialSymbols),
            IconSet::Emoji => Self::new(EmojiIcons),
        }
    }
}

/// Renders one glyph from the given provider.
#[component]
pub fn Icon(icons: Icons, kind: IconKind) -> impl IntoView {
    let glyph = icons.glyph(kind);

    view! {
        <span class=glyph.class aria-hidden="true">
            {glyph.text}
        </span>
    }
}
