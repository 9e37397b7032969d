//! JSON archive loading with typed errors

use crate::error::RatingsError;
use crate::types::SeasonRecord;
use std::fs;
use std::path::Path;
use tracing::info;

/// Parse a season archive from raw JSON
///
/// The archive is an ordered array of seasons; each season's `weeks` object
/// is read in document order. Scores must be non-negative integers when
/// present, so a malformed score fails here instead of poisoning ratings
/// downstream.
pub fn parse_seasons(raw: &str) -> crate::error::Result<Vec<SeasonRecord>> {
    let seasons: Vec<SeasonRecord> =
        serde_json::from_str(raw).map_err(|e| RatingsError::DatasetFormat {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })?;

    Ok(seasons)
}

/// Load a season archive from a JSON file
pub fn load_seasons(path: &Path) -> crate::error::Result<Vec<SeasonRecord>> {
    let raw = fs::read_to_string(path).map_err(|e| RatingsError::DatasetRead {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let seasons: Vec<SeasonRecord> =
        serde_json::from_str(&raw).map_err(|e| RatingsError::DatasetFormat {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    info!(
        "Loaded {} seasons from {}",
        seasons.len(),
        path.display()
    );

    Ok(seasons)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "season": "2024-2025",
            "weeks": {
                "1": [
                    {"home_team": "GAÜ Foo TSK", "away_team": "Bar GSK",
                     "home_score": 2, "away_score": 1},
                    {"home_team": "Baz SK", "away_team": "Qux"}
                ]
            }
        }
    ]"#;

    #[test]
    fn test_parse_sample_archive() {
        let seasons = parse_seasons(SAMPLE).unwrap();

        assert_eq!(seasons.len(), 1);
        assert_eq!(seasons[0].season, "2024-2025");
        assert_eq!(seasons[0].weeks[0].matches.len(), 2);

        let played = &seasons[0].weeks[0].matches[0];
        assert_eq!(played.score_pair(), Some((2, 1)));

        let pending = &seasons[0].weeks[0].matches[1];
        assert_eq!(pending.score_pair(), None);
    }

    #[test]
    fn test_parse_rejects_malformed_score() {
        let raw = r#"[
            {
                "season": "2024",
                "weeks": {
                    "1": [
                        {"home_team": "A", "away_team": "B",
                         "home_score": "two", "away_score": 1}
                    ]
                }
            }
        ]"#;

        let err = parse_seasons(raw).unwrap_err();
        assert!(err.to_string().contains("Invalid dataset format"));
    }

    #[test]
    fn test_parse_rejects_non_array_root() {
        assert!(parse_seasons(r#"{"season": "2024"}"#).is_err());
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let err = load_seasons(Path::new("/nonexistent/combined_data.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read dataset"));
    }
}
