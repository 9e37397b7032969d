//! Classic Elo rating implementation
//!
//! This module provides a concrete implementation of the rating calculator
//! using the two-player Elo algorithm from the skillratings crate.

use crate::config::rating::EloSettings;
use crate::rating::calculator::MatchRater;
use skillratings::elo::{elo, expected_score, EloConfig, EloRating};
use skillratings::Outcomes;

/// Elo rating calculator implementation
///
/// Applies the classic update `R' = R + K * (actual - expected)` with
/// `expected = 1 / (1 + 10^((R_other - R_self) / 400))` to both sides of a
/// match. The two updates are symmetric, so the rating sum is preserved.
#[derive(Debug, Clone)]
pub struct EloRatingCalculator {
    settings: EloSettings,
}

impl EloRatingCalculator {
    /// Create a new Elo calculator
    pub fn new(settings: EloSettings) -> crate::error::Result<Self> {
        settings.validate()?;

        Ok(Self { settings })
    }

    /// The K-factor in use
    pub fn k_factor(&self) -> f64 {
        self.settings.k_factor
    }
}

impl Default for EloRatingCalculator {
    fn default() -> Self {
        Self {
            settings: EloSettings::default(),
        }
    }
}

impl MatchRater for EloRatingCalculator {
    fn initial_rating(&self) -> f64 {
        self.settings.initial_rating
    }

    fn expected_score(&self, home: f64, away: f64) -> f64 {
        let (home_expected, _away_expected) =
            expected_score(&EloRating { rating: home }, &EloRating { rating: away });
        home_expected
    }

    fn rate(&self, home: f64, away: f64, outcome: Outcomes) -> (f64, f64) {
        let config = EloConfig {
            k: self.settings.k_factor,
        };

        let (new_home, new_away) = elo(
            &EloRating { rating: home },
            &EloRating { rating: away },
            &outcome,
            &config,
        );

        (new_home.rating, new_away.rating)
    }
}
