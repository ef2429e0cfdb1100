//! Browser `localStorage` persistence for the signed-in session record.
//!
//! SYSTEM CONTEXT
//! ==============
//! Acts as the session collaborator behind `AuthState`: the root component
//! seeds the auth signal from here, login writes the record and sign-out
//! clears it. Reads are synchronous so the first guard render already sees
//! the stored session.
//!
//! TRADE-OFFS
//! ==========
//! Outside the browser (no `csr` feature) there is no storage. Loads report no
//! session and writes are no-ops, which keeps native tests deterministic.

#[cfg(test)]
#[path = "session_storage_test.rs"]
mod session_storage_test;

use crate::state::auth::{SessionError, User};

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "access_guard_session";

/// Parse a stored session record.
#[cfg(any(test, feature = "csr"))]
fn decode_session(raw: &str) -> Result<User, SessionError> {
    serde_json::from_str(raw).map_err(|e| SessionError::Malformed(e.to_string()))
}

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, SessionError> {
    let window = web_sys::window().ok_or(SessionError::StorageUnavailable)?;
    window
        .local_storage()
        .map_err(|e| SessionError::Storage(format!("{e:?}")))?
        .ok_or(SessionError::StorageUnavailable)
}

/// Load the persisted session, if any.
///
/// # Errors
///
/// Returns an error if storage cannot be reached or the record is malformed.
pub fn load_session() -> Result<Option<User>, SessionError> {
    #[cfg(feature = "csr")]
    {
        let storage = local_storage()?;
        let raw = storage
            .get_item(STORAGE_KEY)
            .map_err(|e| SessionError::Storage(format!("{e:?}")))?;
        raw.as_deref().map(decode_session).transpose()
    }
    #[cfg(not(feature = "csr"))]
    {
        Ok(None)
    }
}

/// Persist `user` as the signed-in session.
///
/// # Errors
///
/// Returns an error if storage cannot be reached or rejects the write.
pub fn save_session(user: &User) -> Result<(), SessionError> {
    #[cfg(feature = "csr")]
    {
        let raw = serde_json::to_string(user).map_err(|e| SessionError::Malformed(e.to_string()))?;
        local_storage()?
            .set_item(STORAGE_KEY, &raw)
            .map_err(|e| SessionError::Storage(format!("{e:?}")))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = user;
        Ok(())
    }
}

/// Remove the persisted session.
///
/// # Errors
///
/// Returns an error if storage cannot be reached or rejects the removal.
pub fn clear_session() -> Result<(), SessionError> {
    #[cfg(feature = "csr")]
    {
        local_storage()?
            .remove_item(STORAGE_KEY)
            .map_err(|e| SessionError::Storage(format!("{e:?}")))
    }
    #[cfg(not(feature = "csr"))]
    {
        Ok(())
    }
}
