//! League Elo - rating computation for season/week match archives
//!
//! This crate computes classic pairwise Elo ratings for teams from a
//! chronological record of match results, tracks every rating each team
//! has held, and renders ranked standings and per-team rating series.

pub mod config;
pub mod dataset;
pub mod error;
pub mod naming;
pub mod rating;
pub mod report;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{RatingsError, Result};
pub use types::*;

// Re-export key components
pub use naming::TeamNameNormalizer;
pub use rating::{EloRatingCalculator, MatchRater, RatingEngine};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
