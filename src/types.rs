//! Common types used throughout the rating pipeline

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use skillratings::Outcomes;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

/// Normalized team identity
pub type TeamName = String;

/// One fixture between two named teams
///
/// A missing score marks the match as not yet played (or unreported);
/// such matches contribute nothing to the rating computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub home_team: String,
    pub away_team: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_score: Option<u32>,
}

impl MatchRecord {
    /// Both scores, or `None` if the match is incomplete
    pub fn score_pair(&self) -> Option<(u32, u32)> {
        self.home_score.zip(self.away_score)
    }

    /// Match outcome from the home side's perspective
    pub fn outcome(&self) -> Option<Outcomes> {
        let (home, away) = self.score_pair()?;
        Some(match home.cmp(&away) {
            Ordering::Greater => Outcomes::WIN,
            Ordering::Equal => Outcomes::DRAW,
            Ordering::Less => Outcomes::LOSS,
        })
    }
}

/// One week's fixtures under the label the source archive uses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekRecord {
    pub label: String,
    pub matches: Vec<MatchRecord>,
}

/// One season of the archive
///
/// On the wire `weeks` is a JSON object mapping week label to fixtures.
/// The document order of that object is the declared chronology, so
/// deserialization collects entries in encounter order instead of going
/// through an unordered map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonRecord {
    pub season: String,
    #[serde(
        deserialize_with = "weeks_in_document_order",
        serialize_with = "weeks_as_map"
    )]
    pub weeks: Vec<WeekRecord>,
}

fn weeks_in_document_order<'de, D>(deserializer: D) -> Result<Vec<WeekRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    struct WeekMapVisitor;

    impl<'de> Visitor<'de> for WeekMapVisitor {
        type Value = Vec<WeekRecord>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of week labels to match lists")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut weeks = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((label, matches)) = access.next_entry::<String, Vec<MatchRecord>>()? {
                weeks.push(WeekRecord { label, matches });
            }
            Ok(weeks)
        }
    }

    deserializer.deserialize_map(WeekMapVisitor)
}

fn weeks_as_map<S>(weeks: &[WeekRecord], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(weeks.len()))?;
    for week in weeks {
        map.serialize_entry(&week.label, &week.matches)?;
    }
    map.end()
}

/// One point of a team's rating trajectory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    /// Display label of the form "{season} - {week}"
    pub label: String,
    pub rating: f64,
}

/// Complete engine output: final ratings plus full per-team trajectories
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeagueRatings {
    /// Final rating per normalized team name
    pub ratings: HashMap<TeamName, f64>,
    /// Every rating each team has held, in chronological traversal order
    pub history: HashMap<TeamName, Vec<HistoryPoint>>,
}

impl LeagueRatings {
    /// Number of rated teams
    pub fn team_count(&self) -> usize {
        self.ratings.len()
    }

    /// Final rating for a team, if it ever played a completed match
    pub fn final_rating(&self, team: &str) -> Option<f64> {
        self.ratings.get(team).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(home: &str, away: &str, score: Option<(u32, u32)>) -> MatchRecord {
        MatchRecord {
            home_team: home.to_string(),
            away_team: away.to_string(),
            home_score: score.map(|s| s.0),
            away_score: score.map(|s| s.1),
        }
    }

    #[test]
    fn test_outcome_from_scores() {
        assert_eq!(
            fixture("A", "B", Some((2, 1))).outcome(),
            Some(Outcomes::WIN)
        );
        assert_eq!(
            fixture("A", "B", Some((1, 1))).outcome(),
            Some(Outcomes::DRAW)
        );
        assert_eq!(
            fixture("A", "B", Some((0, 3))).outcome(),
            Some(Outcomes::LOSS)
        );
    }

    #[test]
    fn test_half_scored_match_is_incomplete() {
        let record = MatchRecord {
            home_team: "A".to_string(),
            away_team: "B".to_string(),
            home_score: Some(2),
            away_score: None,
        };
        assert_eq!(record.score_pair(), None);
        assert_eq!(record.outcome(), None);
    }

    #[test]
    fn test_weeks_keep_document_order() {
        // Labels deliberately out of lexicographic order
        let raw = r#"{
            "season": "2024-2025",
            "weeks": {
                "10": [],
                "2": [],
                "1": []
            }
        }"#;

        let season: SeasonRecord = serde_json::from_str(raw).unwrap();
        let labels: Vec<&str> = season.weeks.iter().map(|w| w.label.as_str()).collect();
        assert_eq!(labels, vec!["10", "2", "1"]);
    }

    #[test]
    fn test_weeks_serialize_back_as_map() {
        let season = SeasonRecord {
            season: "2024".to_string(),
            weeks: vec![WeekRecord {
                label: "1".to_string(),
                matches: vec![fixture("A", "B", Some((2, 1)))],
            }],
        };

        let value = serde_json::to_value(&season).unwrap();
        assert!(value["weeks"]["1"].is_array());
        assert_eq!(value["weeks"]["1"][0]["home_score"], 2);
    }

    #[test]
    fn test_negative_score_rejected() {
        let raw = r#"{
            "home_team": "A",
            "away_team": "B",
            "home_score": -1,
            "away_score": 2
        }"#;

        assert!(serde_json::from_str::<MatchRecord>(raw).is_err());
    }
}
