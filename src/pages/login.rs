//! Login page: the redirect target for guarded routes.
//!
//! Records the visitor as the signed-in user in the browser session store and
//! returns them to the dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthState, User};
use crate::util::session_storage::save_session;

fn validate_login_input(name: &str, email: &str) -> Result<User, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() {
        return Err("Enter both a name and an email.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(User {
        name: name.to_owned(),
        email: email.to_owned(),
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let user = match validate_login_input(&name.get(), &email.get()) {
            Ok(user) => user,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        // The in-memory session still applies when persistence fails.
        if let Err(e) = save_session(&user) {
            log::warn!("failed to persist session: {e}");
        }
        auth.set(AuthState::signed_in(user));
        navigate("/", NavigateOptions::default());
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Your name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
