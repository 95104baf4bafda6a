mod dashboard;
mod not_found;

pub use dashboard::{DashboardLayout, DashboardPage};
pub use not_found::NotFoundContent;

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Routes};
use leptos_router::path;

/// Every destination renders inside one layout so the sidebar stays mounted
/// across navigation; the path is the active tab.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundContent /> }>
            <ParentRoute path=path!("") view=DashboardLayout>
                <Route path=path!("") view=DashboardPage />
                <Route path=path!(":tab") view=DashboardPage />
                <Route path=path!("*any") view=DashboardPage />
            </ParentRoute>
        </Routes>
    }
}
