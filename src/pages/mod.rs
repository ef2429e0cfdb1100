//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates gating to
//! `components::access_guard`.

pub mod dashboard;
pub mod login;
