//! Wire DTOs for the client/API boundary.
//!
//! DESIGN
//! ======
//! The schema lives in the `checkins` crate so the CLI and the dashboard
//! deserialize the same records the same way.

pub use checkins::{CheckIn, CheckUserResponse, Event, UserRecord};
