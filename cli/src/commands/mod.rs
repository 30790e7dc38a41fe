//! Command implementations for the Roster CLI.
//!
//! One module per resource; each handler owns its output and returns `anyhow::Result`.

pub mod completions;
pub mod profiles;
pub mod registrations;
pub mod users;

pub use completions::generate_completions;
