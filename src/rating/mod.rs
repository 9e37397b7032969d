//! Rating computation using the classic pairwise Elo rule
//!
//! This module provides the rating-update seam, the Elo implementation
//! backed by the skillratings crate, and the engine that folds a full
//! season archive into final ratings and per-team rating histories.

pub mod calculator;
pub mod elo;
pub mod engine;

// Re-export commonly used types
pub use calculator::MatchRater;
pub use elo::EloRatingCalculator;
pub use engine::RatingEngine;
