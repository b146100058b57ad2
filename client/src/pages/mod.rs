//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, redirects) and
//! delegates rendering details to `components`.

pub mod dashboard;
pub mod email_sent;
pub mod login;
