//! Networking modules for the check-in REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the browser-side HTTP calls and `types` re-exports the
//! shared wire schema from the `checkins` crate.

pub mod api;
pub mod types;
