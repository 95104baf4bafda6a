//! Dashboard routes. The URL path is the single source of truth for the active
//! destination: the sidebar reads it and requests changes by navigation.

use crate::components::DashboardShell;
use crate::features::navigation::menu::{DEFAULT_TAB, find_item};
use crate::features::session::state::use_session;
use crate::routes::NotFoundContent;
use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

/// Tab id for a location path; the root path shows the default destination.
/// Nested paths are kept whole so they never match a destination.
pub(crate) fn tab_from_path(path: &str) -> String {
    let tab = path.trim().trim_matches('/');
    if tab.is_empty() {
        DEFAULT_TAB.to_string()
    } else {
        tab.to_string()
    }
}

fn use_active_tab() -> Signal<String> {
    let location = use_location();
    Signal::derive(move || location.pathname.with(|path| tab_from_path(path)))
}

/// Parent view of every destination. Child routes swap only the content, so
/// the sidebar keeps its collapsed or drawer state while the URL changes.
#[component]
pub fn DashboardLayout() -> impl IntoView {
    let navigate = use_navigate();
    let active_tab = use_active_tab();
    let requested = RwSignal::new(None::<String>);
    let set_active_tab = Callback::new(move |id: String| requested.set(Some(id)));

    Effect::new(move |_| {
        if let Some(id) = requested.get() {
            navigate(&format!("/{id}"), Default::default());
        }
    });

    view! {
        <DashboardShell active_tab=active_tab set_active_tab=set_active_tab>
            <Outlet />
        </DashboardShell>
    }
}

/// Content of the active destination.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let active_tab = use_active_tab();

    move || {
        let tab = active_tab.get();
        match find_item(session.role.get(), &tab) {
            Some(item) => view! {
                <section>
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        {item.label}
                    </h1>
                    <p class="mt-2 text-sm text-gray-500 dark:text-gray-400">
                        {format!("{} content renders here.", item.label)}
                    </p>
                </section>
            }
            .into_any(),
            // Hidden admin destinations get the same 404 UX as unknown ones.
            None => view! { <NotFoundContent /> }.into_any(),
        }
    }
}
