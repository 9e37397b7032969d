//! Season archive loading
//!
//! The engine itself never touches storage; this module is the collaborator
//! that turns a JSON archive file into typed season records.

pub mod loader;

// Re-export commonly used functions
pub use loader::{load_seasons, parse_seasons};
