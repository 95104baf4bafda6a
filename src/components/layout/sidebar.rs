//! Side navigation for the dashboard.
//!
//! A controlled component: the parent owns `active_tab` and receives selection
//! and sign-out requests through callbacks. The sidebar owns only its layout
//! state, which follows the viewport:
//! 1. Wide viewports pin it in the layout with a collapse-to-rail toggle.
//! 2. Narrow viewports hide it off-canvas behind a hamburger and a scrim.
//!
//! Listing is UX only; the backend must enforce access to admin destinations.

use crate::app_lib::build_info;
use crate::app_lib::theme::{Theme, item_class};
use crate::components::icons::{Icon, IconKind, Icons};
use crate::features::navigation::{
    Breakpoint, MenuItem, NavigationState, SidebarAction, SidebarMode, SidebarOutputs, Viewport,
    dispatch, is_active, menu_for_role,
};
use crate::features::session::types::{
    CurrentUser, UserRole, avatar_initial, display_name, role_label,
};
use leptos::prelude::*;
use tracing::info;

#[derive(Clone, Copy)]
struct CallbackOutputs {
    set_active_tab: Callback<String>,
    on_logout_click: Callback<()>,
    on_collapsed_change: Option<Callback<bool>>,
}

impl SidebarOutputs for CallbackOutputs {
    fn set_active_tab(&self, id: &str) {
        self.set_active_tab.run(id.to_string());
    }

    fn logout(&self) {
        self.on_logout_click.run(());
    }

    fn collapsed_changed(&self, collapsed: bool) {
        if let Some(callback) = self.on_collapsed_change {
            callback.run(collapsed);
        }
    }
}

/// Classes of the `<aside>` element for each mode.
fn aside_class(mode: SidebarMode) -> String {
    match mode {
        SidebarMode::PinnedExpanded => Theme::PINNED_EXPANDED.to_string(),
        SidebarMode::PinnedCollapsed => Theme::PINNED_COLLAPSED.to_string(),
        SidebarMode::DrawerClosed => format!("{} -translate-x-full", Theme::DRAWER),
        SidebarMode::DrawerOpen => format!("{} translate-x-0", Theme::DRAWER),
    }
}

#[component]
pub fn Sidebar(
    #[prop(into)] user_role: Signal<UserRole>,
    #[prop(optional, into)] user_name: MaybeProp<String>,
    #[prop(into)] current_user: Signal<Option<CurrentUser>>,
    #[prop(into)] active_tab: Signal<String>,
    #[prop(into)] set_active_tab: Callback<String>,
    #[prop(into)] on_logout_click: Callback<()>,
    #[prop(optional)] on_collapsed_change: Option<Callback<bool>>,
    #[prop(optional)] icons: Option<Icons>,
    #[prop(optional)] viewport: Option<Viewport>,
    #[prop(optional)] breakpoint: Option<Breakpoint>,
    #[prop(optional, into)] brand_name: MaybeProp<String>,
) -> impl IntoView {
    let icons = icons.unwrap_or_default();
    let viewport = viewport.unwrap_or_else(Viewport::browser);
    let breakpoint = breakpoint.unwrap_or_default();

    let nav = RwSignal::new(NavigationState::at_width(viewport.width(), breakpoint));
    let outputs = CallbackOutputs {
        set_active_tab,
        on_logout_click,
        on_collapsed_change,
    };
    let send = move |action: SidebarAction| {
        let Some(mut state) = nav.try_get_untracked() else {
            return;
        };
        if dispatch(&mut state, action, &outputs).is_some() {
            nav.set(state);
        }
    };

    info!(mode = %nav.get_untracked().mode(), "sidebar mounted");

    let subscription = StoredValue::new(Some(
        viewport.subscribe(move |width| send(SidebarAction::Resize(width))),
    ));
    on_cleanup(move || {
        if let Some(mut stored) = subscription.try_write_value() {
            if let Some(subscription) = stored.take() {
                subscription.cancel();
            }
        }
    });

    let items = Memo::new(move |_| menu_for_role(user_role.get()));
    let collapsed = Signal::derive(move || nav.with(NavigationState::collapsed));
    let is_mobile = Signal::derive(move || nav.with(NavigationState::is_mobile));
    let drawer_open = Signal::derive(move || nav.with(NavigationState::mobile_menu_open));

    let name = Signal::derive(move || {
        let user_name = user_name.get();
        current_user.with(|user| display_name(user_name.as_deref(), user.as_ref()))
    });
    let initial = Signal::derive(move || current_user.with(|user| avatar_initial(user.as_ref())));
    let brand = move || brand_name.get().unwrap_or_else(|| "Dashboard".to_string());

    let hamburger_icons = icons.clone();
    let close_icons = icons.clone();
    let toggle_icons = icons.clone();
    let link_icons = icons.clone();
    let avatar_icons = icons.clone();
    let logout_icons = icons;

    view! {
        <Show when=move || drawer_open.get()>
            <div
                class=Theme::SCRIM
                aria-hidden="true"
                on:click=move |_| send(SidebarAction::Dismiss)
            ></div>
        </Show>

        <Show when=move || is_mobile.get()>
            <button
                type="button"
                class=format!("{} fixed top-3 left-3 z-20", Theme::CONTROL)
                aria-controls="navigation-sidebar"
                aria-expanded=move || drawer_open.get().to_string()
                on:click=move |_| send(SidebarAction::Toggle)
            >
                <span class="sr-only">"Open main menu"</span>
                <Icon icons=hamburger_icons.clone() kind=IconKind::Menu />
            </button>
        </Show>

        <aside
            id="navigation-sidebar"
            class=move || nav.with(|state| aside_class(state.mode()))
            aria-label="Sidebar"
        >
            // --- Header: brand and layout control ---
            <div class="flex items-center justify-between h-16 px-3 border-b border-gray-100 dark:border-gray-800">
                <Show when=move || !collapsed.get()>
                    <span class="px-1 font-semibold whitespace-nowrap dark:text-white">
                        {brand}
                    </span>
                </Show>
                <Show
                    when=move || is_mobile.get()
                    fallback=move || {
                        let icons = toggle_icons.clone();
                        view! {
                            <button
                                type="button"
                                class=Theme::CONTROL
                                aria-label=move || {
                                    if collapsed.get() { "Expand sidebar" } else { "Collapse sidebar" }
                                }
                                on:click=move |_| send(SidebarAction::Toggle)
                            >
                                {move || {
                                    let kind = if collapsed.get() {
                                        IconKind::ExpandRight
                                    } else {
                                        IconKind::CollapseLeft
                                    };
                                    view! { <Icon icons=icons.clone() kind=kind /> }
                                }}
                            </button>
                        }
                    }
                >
                    <button
                        type="button"
                        class=Theme::CONTROL
                        aria-label="Close menu"
                        on:click=move |_| send(SidebarAction::Toggle)
                    >
                        <Icon icons=close_icons.clone() kind=IconKind::Close />
                    </button>
                </Show>
            </div>

            // --- Destinations ---
            <nav class="flex-1 px-3 py-6 space-y-1 overflow-y-auto">
                <For
                    each=move || items.get()
                    key=|item| item.id
                    children=move |item: MenuItem| {
                        let id = item.id;
                        let active =
                            Signal::derive(move || active_tab.with(|tab| is_active(&item, tab)));
                        let on_select = Callback::new(move |_: ()| {
                            send(SidebarAction::Select(id.to_string()));
                        });
                        view! {
                            <SidebarLink
                                item=item
                                icons=link_icons.clone()
                                active=active
                                collapsed=collapsed
                                on_select=on_select
                            />
                        }
                    }
                />
            </nav>

            // --- Footer: signed-in user, sign out, build info ---
            <div class="p-3 border-t border-gray-100 dark:border-gray-800 space-y-3">
                <div class="flex items-center gap-3 px-1">
                    <div class=Theme::AVATAR title=move || name.get()>
                        {move || match initial.get() {
                            Some(initial) => view! { <span>{initial}</span> }.into_any(),
                            None => {
                                view! { <Icon icons=avatar_icons.clone() kind=IconKind::Avatar /> }
                                    .into_any()
                            }
                        }}
                    </div>
                    <Show when=move || !collapsed.get()>
                        <div class="min-w-0 flex-1">
                            <p class="truncate text-sm font-medium text-gray-900 dark:text-white">
                                {move || name.get()}
                            </p>
                            <p class="text-xs text-gray-500 dark:text-gray-400">
                                {move || role_label(user_role.get())}
                            </p>
                        </div>
                    </Show>
                </div>
                <button
                    type="button"
                    class=item_class(false)
                    title="Sign Out"
                    on:click=move |_| send(SidebarAction::Logout)
                >
                    <span class=Theme::ICON_IDLE>
                        <Icon icons=logout_icons.clone() kind=IconKind::Logout />
                    </span>
                    <Show when=move || !collapsed.get()>
                        <span class="ml-3">"Sign Out"</span>
                    </Show>
                </button>
                <Show when=move || !collapsed.get()>
                    <p class="text-[10px] text-gray-400 font-mono text-center uppercase tracking-tighter">
                        {build_info::version_label()}
                    </p>
                </Show>
            </div>
        </aside>
    }
}

#[component]
fn SidebarLink(
    item: MenuItem,
    icons: Icons,
    #[prop(into)] active: Signal<bool>,
    #[prop(into)] collapsed: Signal<bool>,
    on_select: Callback<()>,
) -> impl IntoView {
    let icon_class = move || {
        let state = if active.get() { Theme::ICON_ACTIVE } else { Theme::ICON_IDLE };
        format!("flex-shrink-0 transition-colors {state}")
    };

    view! {
        <button
            type="button"
            class=move || item_class(active.get())
            title=item.label
            aria-current=move || active.get().then_some("page")
            on:click=move |_| on_select.run(())
        >
            <span class=icon_class>
                <Icon icons=icons kind=item.icon />
            </span>
            <Show when=move || !collapsed.get()>
                <span class="ml-3 truncate">{item.label}</span>
            </Show>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::aside_class;
    use crate::app_lib::theme::Theme;
    use crate::features::navigation::SidebarMode;

    #[test]
    fn aside_class_matches_mode() {
        assert_eq!(aside_class(SidebarMode::PinnedExpanded), Theme::PINNED_EXPANDED);
        assert_eq!(aside_class(SidebarMode::PinnedCollapsed), Theme::PINNED_COLLAPSED);
        assert!(aside_class(SidebarMode::DrawerClosed).ends_with("-translate-x-full"));
        assert!(aside_class(SidebarMode::DrawerOpen).ends_with("translate-x-0"));
    }
}
