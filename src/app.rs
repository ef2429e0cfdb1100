//! Root application component and route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provides the session signal every page and guard reads, seeded
//! synchronously from the browser session store, then mounts the router.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::state::auth::AuthState;
use crate::util::session_storage::load_session;

/// Session state at startup. An unreadable store starts signed out.
fn initial_auth_state() -> AuthState {
    match load_session() {
        Ok(user) => AuthState { user },
        Err(e) => {
            log::warn!("ignoring stored session: {e}");
            AuthState::default()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(initial_auth_state()));

    view! {
        <Title text="Access Guard"/>
        <Router>
            <main>
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=DashboardPage/>
                    <Route path=path!("/login") view=LoginPage/>
                </Routes>
            </main>
        </Router>
    }
}
