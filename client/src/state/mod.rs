//! Reactive page state provided through Leptos context.
//!
//! DESIGN
//! ======
//! Plain structs wrapped in `RwSignal` by `App`; pages mutate them through
//! small methods so the transitions stay testable without a browser.

pub mod auth;
pub mod dashboard;
