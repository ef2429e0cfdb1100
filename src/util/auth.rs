//! Route access guard core.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes must apply identical unauthenticated redirect behavior.
//! The decision lives here, free of Leptos types, so it can be driven by fake
//! session and navigation capabilities in tests. `components::access_guard`
//! binds it to the router and the session signal.
//!
//! ERROR HANDLING
//! ==============
//! A session check that fails is treated as signed out. The failure is logged
//! and the visitor is sent to the login page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::auth::SessionError;

/// Path unauthenticated visitors are sent to.
pub const LOGIN_PATH: &str = "/login";

/// Where and how a guard redirects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardConfig {
    pub login_path: String,
    /// Replace the current history entry instead of pushing a new one.
    pub replace_history: bool,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            login_path: LOGIN_PATH.to_owned(),
            replace_history: true,
        }
    }
}

impl GuardConfig {
    fn redirect_target(&self) -> RedirectTarget {
        RedirectTarget {
            path: self.login_path.clone(),
            replace: self.replace_history,
        }
    }
}

/// Navigation instruction issued when a guard refuses to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectTarget {
    pub path: String,
    pub replace: bool,
}

/// Result of one guard evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render children unchanged.
    Render,
    /// Render nothing and navigate away.
    Redirect(RedirectTarget),
}

/// Synchronous "is the current session authenticated" query.
pub trait SessionCheck {
    /// # Errors
    ///
    /// Returns the session collaborator's failure, if it has one.
    fn is_authenticated(&self) -> Result<bool, SessionError>;
}

impl<F> SessionCheck for F
where
    F: Fn() -> bool,
{
    fn is_authenticated(&self) -> Result<bool, SessionError> {
        Ok(self())
    }
}

/// Adapts a predicate that can fail into a [`SessionCheck`].
pub struct Fallible<F>(pub F);

impl<F> SessionCheck for Fallible<F>
where
    F: Fn() -> Result<bool, SessionError>,
{
    fn is_authenticated(&self) -> Result<bool, SessionError> {
        (self.0)()
    }
}

/// Performs the redirect on the guard's behalf.
pub trait Navigator {
    fn redirect(&self, target: &RedirectTarget);
}

impl<F> Navigator for F
where
    F: Fn(&RedirectTarget),
{
    fn redirect(&self, target: &RedirectTarget) {
        self(target);
    }
}

/// Decide whether to render or redirect for the current session.
pub fn evaluate<S: SessionCheck + ?Sized>(session: &S, config: &GuardConfig) -> GuardOutcome {
    let authenticated = session.is_authenticated().unwrap_or_else(|e| {
        log::warn!("session check failed, treating visitor as signed out: {e}");
        false
    });
    if authenticated {
        GuardOutcome::Render
    } else {
        GuardOutcome::Redirect(config.redirect_target())
    }
}

/// A session check paired with the navigator it redirects through.
pub struct Guard<S, N> {
    session: S,
    navigator: N,
    config: GuardConfig,
}

impl<S, N> Guard<S, N>
where
    S: SessionCheck,
    N: Navigator,
{
    pub fn new(session: S, navigator: N) -> Self {
        Self::with_config(session, navigator, GuardConfig::default())
    }

    pub fn with_config(session: S, navigator: N, config: GuardConfig) -> Self {
        Self { session, navigator, config }
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Evaluate the session without side effects.
    pub fn evaluate(&self) -> GuardOutcome {
        evaluate(&self.session, &self.config)
    }

    /// Run one render pass.
    ///
    /// Returns the rendered children when the session is authenticated. Otherwise
    /// hands the redirect to the navigator and returns `None`; `children` is not
    /// called on that branch.
    pub fn render<V>(&self, children: impl FnOnce() -> V) -> Option<V> {
        match self.evaluate() {
            GuardOutcome::Render => Some(children()),
            GuardOutcome::Redirect(target) => {
                log::debug!("access denied, redirecting to {}", target.path);
                self.navigator.redirect(&target);
                None
            }
        }
    }
}
