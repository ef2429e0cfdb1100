//! Route wrapper that renders its children only for signed-in visitors.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `RwSignal<AuthState>` from context and navigates through the router.
//! The check runs inside a reactive closure, so it is evaluated afresh on every
//! render and again whenever the session signal changes.

#[cfg(test)]
#[path = "access_guard_test.rs"]
mod access_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::{Guard, RedirectTarget};

/// Router options for a guard redirect.
fn navigate_options(target: &RedirectTarget) -> NavigateOptions {
    NavigateOptions {
        replace: target.replace,
        ..NavigateOptions::default()
    }
}

/// Renders `children` when authenticated, otherwise redirects to `/login`
/// replacing the current history entry.
#[component]
pub fn AccessGuard(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let guard = Guard::new(
        move || auth.with(AuthState::is_authenticated),
        move |target: &RedirectTarget| navigate(&target.path, navigate_options(target)),
    );

    move || guard.render(|| children())
}
