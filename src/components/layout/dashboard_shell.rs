//! Dashboard layout: the navigation sidebar beside the content column. The
//! shell is the sidebar's parent; it forwards the session, mirrors the
//! collapsed state for the content layout and clears the session on sign-out.

use crate::app_lib::config::AppConfig;
use crate::components::icons::Icons;
use crate::components::layout::Sidebar;
use crate::features::navigation::Breakpoint;
use crate::features::session::state::use_session;
use leptos::prelude::*;
use tracing::debug;

/// Wraps a destination's content with the sidebar.
#[component]
pub fn DashboardShell(
    #[prop(into)] active_tab: Signal<String>,
    #[prop(into)] set_active_tab: Callback<String>,
    children: Children,
) -> impl IntoView {
    let session = use_session();
    let config = use_context::<AppConfig>().unwrap_or_default();
    let (collapsed, set_collapsed) = signal(false);

    let on_logout_click = Callback::new(move |_: ()| session.clear_session());
    let on_collapsed_change = Callback::new(move |value: bool| {
        debug!(collapsed = value, "sidebar collapsed changed");
        set_collapsed.set(value);
    });

    view! {
        <div class="min-h-screen flex bg-gray-50 dark:bg-gray-950">
            <Sidebar
                user_role=session.role
                user_name=session.user_name
                current_user=session.current_user
                active_tab=active_tab
                set_active_tab=set_active_tab
                on_logout_click=on_logout_click
                on_collapsed_change=on_collapsed_change
                icons=Icons::from(config.icon_set)
                breakpoint=Breakpoint::new(config.breakpoint_px)
                brand_name=config.brand_name.clone()
            />
            <main
                class="flex-1 min-w-0"
                data-sidebar-collapsed=move || collapsed.get().to_string()
            >
                <div class="container mx-auto p-4 mt-6">
                    {move || {
                        session.session.with(Option::is_none).then(|| {
                            view! {
                                <div
                                    class="mb-6 rounded-lg border border-blue-200 bg-blue-50 px-4 py-3 text-sm text-blue-700 dark:border-blue-400 dark:bg-blue-900/30 dark:text-blue-200"
                                    role="alert"
                                >
                                    "You are signed out."
                                </div>
                            }
                        })
                    }}
                    {children()}
                </div>
            </main>
        </div>
    }
}
