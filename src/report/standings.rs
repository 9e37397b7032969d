//! Ranked standings table

use crate::types::{LeagueRatings, TeamName};
use crate::utils::round_rating;
use serde::Serialize;
use std::cmp::Ordering;

/// One row of the ranked standings table
#[derive(Debug, Clone, Serialize)]
pub struct StandingsRow {
    pub rank: usize,
    pub team: TeamName,
    /// Final rating rounded to the nearest integer
    pub rating: i64,
}

/// Ranked standings, sorted by final rating descending
pub fn standings(result: &LeagueRatings) -> Vec<StandingsRow> {
    let mut rows: Vec<(TeamName, f64)> = result
        .ratings
        .iter()
        .map(|(team, rating)| (team.clone(), *rating))
        .collect();

    rows.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    rows.into_iter()
        .enumerate()
        .map(|(index, (team, rating))| StandingsRow {
            rank: index + 1,
            team,
            rating: round_rating(rating),
        })
        .collect()
}
