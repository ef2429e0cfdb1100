//! Dashboard page: the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wrapped in `AccessGuard`. Signing out resets the auth signal, which makes
//! the guard redirect to `/login` on its next render.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::access_guard::AccessGuard;
use crate::state::auth::AuthState;
use crate::util::session_storage::clear_session;

fn greeting(state: &AuthState) -> String {
    state
        .user
        .as_ref()
        .map(|user| format!("Signed in as {} <{}>", user.name, user.email))
        .unwrap_or_default()
}

fn sign_out(auth: RwSignal<AuthState>) {
    if let Err(e) = clear_session() {
        log::warn!("failed to clear stored session: {e}");
    }
    auth.set(AuthState::default());
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <AccessGuard>
            <div class="dashboard-page">
                <h1>"Dashboard"</h1>
                <p class="dashboard-greeting">{move || auth.with(greeting)}</p>
                <button class="dashboard-sign-out" on:click=move |_| sign_out(auth)>
                    "Sign out"
                </button>
            </div>
        </AccessGuard>
    }
}
