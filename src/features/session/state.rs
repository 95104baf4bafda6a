//! Session context for the dashboard shell. The provider hydrates the signed-in
//! user once on mount from the runtime config seed and exposes derived signals
//! for the sidebar props. Sign-in itself belongs to the host application.

use crate::app_lib::config;
use crate::features::session::types::{CurrentUser, SessionUser, UserRole};
use leptos::prelude::*;
use tracing::info;

#[derive(Clone, Copy)]
/// Session context shared through Leptos.
pub struct SessionContext {
    pub session: RwSignal<Option<SessionUser>>,
    pub role: Signal<UserRole>,
    pub user_name: Signal<Option<String>>,
    pub current_user: Signal<Option<CurrentUser>>,
}

impl SessionContext {
    /// Builds a context around the provided session signal.
    fn new(session: RwSignal<Option<SessionUser>>) -> Self {
        let role = Signal::derive(move || {
            session.with(|session| session.as_ref().map(|user| user.role).unwrap_or_default())
        });
        let user_name = Signal::derive(move || {
            session.with(|session| session.as_ref().and_then(|user| user.name.clone()))
        });
        let current_user = Signal::derive(move || {
            session.with(|session| session.as_ref().map(SessionUser::current_user))
        });
        Self {
            session,
            role,
            user_name,
            current_user,
        }
    }

    pub fn set_session(&self, session: SessionUser) {
        self.session.set(Some(session));
    }

    /// Clears the in-memory session, typically on logout.
    pub fn clear_session(&self) {
        info!("session cleared");
        self.session.set(None);
    }
}

/// Provides session context and hydrates it once on mount.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(None);
    let context = SessionContext::new(session);
    provide_context(context);

    if let Some(seed) = config::load_session_seed() {
        info!(role = seed.role.as_str(), "session hydrated from runtime config");
        context.set_session(seed);
    }

    view! { {children()} }
}

/// Returns the current session context or a fallback empty context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| SessionContext::new(RwSignal::new(None)))
}
