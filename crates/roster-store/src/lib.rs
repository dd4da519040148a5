//! In-memory roster of extracurricular activities.
//!
//! The roster is seeded once at startup and lives in process memory
//! only. All mutation goes through signup/unregister, which enforce
//! capacity and duplicate-enrollment rules atomically.

mod error;
mod store;
mod types;

pub use error::RosterError;
pub use store::{default_roster, RosterStore};
pub use types::Activity;
