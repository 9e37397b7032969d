//! Utility functions for the rating pipeline

/// Build the display label for one week of one season
pub fn timestamp_label(season: &str, week: &str) -> String {
    format!("{} - {}", season, week)
}

/// Round a rating for display in ranked tables
pub fn round_rating(rating: f64) -> i64 {
    rating.round() as i64
}
