//! Chart-ready rating series

use crate::error::RatingsError;
use crate::types::{HistoryPoint, LeagueRatings, TeamName};
use serde::Serialize;

/// One team's full rating trajectory
#[derive(Debug, Clone, Serialize)]
pub struct TeamSeries {
    pub team: TeamName,
    pub points: Vec<HistoryPoint>,
}

/// Rating trajectory for a single team
pub fn team_series(result: &LeagueRatings, team: &str) -> crate::error::Result<TeamSeries> {
    let points = result
        .history
        .get(team)
        .ok_or_else(|| RatingsError::UnknownTeam {
            name: team.to_string(),
        })?;

    Ok(TeamSeries {
        team: team.to_string(),
        points: points.clone(),
    })
}

/// Rating trajectories for every team, sorted by team name for stable output
pub fn all_series(result: &LeagueRatings) -> Vec<TeamSeries> {
    let mut series: Vec<TeamSeries> = result
        .history
        .iter()
        .map(|(team, points)| TeamSeries {
            team: team.clone(),
            points: points.clone(),
        })
        .collect();

    series.sort_by(|a, b| a.team.cmp(&b.team));
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn result_with_history() -> LeagueRatings {
        let mut history = HashMap::new();
        history.insert(
            "Foo".to_string(),
            vec![
                HistoryPoint {
                    label: "2024 - 1".to_string(),
                    rating: 1500.0,
                },
                HistoryPoint {
                    label: "2024 - 1".to_string(),
                    rating: 1516.0,
                },
            ],
        );
        history.insert(
            "Bar".to_string(),
            vec![HistoryPoint {
                label: "2024 - 1".to_string(),
                rating: 1500.0,
            }],
        );

        LeagueRatings {
            ratings: HashMap::new(),
            history,
        }
    }

    #[test]
    fn test_team_series_returns_full_trajectory() {
        let result = result_with_history();

        let series = team_series(&result, "Foo").unwrap();
        assert_eq!(series.points.len(), 2);
        assert_eq!(series.points[0].rating, 1500.0);
        assert_eq!(series.points[1].rating, 1516.0);
    }

    #[test]
    fn test_unknown_team_is_an_error() {
        let result = result_with_history();
        assert!(team_series(&result, "Nonexistent").is_err());
    }

    #[test]
    fn test_all_series_sorted_by_name() {
        let result = result_with_history();

        let series = all_series(&result);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].team, "Bar");
        assert_eq!(series[1].team, "Foo");
    }
}
