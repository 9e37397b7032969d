//! Rating calculator trait
//!
//! This module defines the interface between the fold driver and the
//! concrete rating rule, so a different two-player system can be swapped
//! in without touching the engine.

use skillratings::Outcomes;

/// Trait for pairwise rating updates after one match
pub trait MatchRater {
    /// Rating assigned to a team at its first completed match
    fn initial_rating(&self) -> f64;

    /// Expected score of the home side against the away side
    ///
    /// # Arguments
    /// * `home` - current rating of the home team
    /// * `away` - current rating of the away team
    ///
    /// # Returns
    /// Win expectation in `[0.0, 1.0]` from the home side's perspective
    fn expected_score(&self, home: f64, away: f64) -> f64;

    /// Updated ratings for both sides after one match
    ///
    /// # Arguments
    /// * `home` - current rating of the home team
    /// * `away` - current rating of the away team
    /// * `outcome` - match outcome from the home side's perspective
    ///
    /// # Returns
    /// `(new_home, new_away)` rating pair
    fn rate(&self, home: f64, away: f64, outcome: Outcomes) -> (f64, f64);
}
