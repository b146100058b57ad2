//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate routing and chart geometry from page and component
//! logic to improve reuse and testability.

pub mod auth;
pub mod donut_math;
