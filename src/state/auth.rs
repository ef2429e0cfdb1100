//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by the root component as `RwSignal<AuthState>` context. Route
//! guards read it on every render; the login and dashboard pages write it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

/// Signed-in user as persisted in the browser session record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name.
    pub name: String,
    /// Contact email used to sign in.
    pub email: String,
}

/// Authentication state tracking the current user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
}

impl AuthState {
    /// State for a freshly signed-in `user`.
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    /// Whether a user is present for this session.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Failures reading or writing the session collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session storage unavailable")]
    StorageUnavailable,
    #[error("session storage error: {0}")]
    Storage(String),
    #[error("stored session is malformed: {0}")]
    Malformed(String),
}
