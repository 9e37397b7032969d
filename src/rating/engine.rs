//! The rating engine: a single-pass fold over a season archive
//!
//! Matches are consumed in the order the archive presents them (seasons in
//! list order, weeks in document order, matches in list order). Each
//! match's update depends on the ratings produced by all earlier matches,
//! so the fold is inherently sequential.

use crate::naming::TeamNameNormalizer;
use crate::rating::calculator::MatchRater;
use crate::rating::elo::EloRatingCalculator;
use crate::types::{HistoryPoint, LeagueRatings, SeasonRecord};
use crate::utils::timestamp_label;
use tracing::debug;

/// Folds a season archive into final ratings and per-team histories
#[derive(Debug, Clone)]
pub struct RatingEngine<R: MatchRater = EloRatingCalculator> {
    normalizer: TeamNameNormalizer,
    rater: R,
}

impl RatingEngine<EloRatingCalculator> {
    /// Engine with the default sponsor table and standard Elo parameters
    pub fn with_defaults() -> Self {
        Self::new(TeamNameNormalizer::default(), EloRatingCalculator::default())
    }
}

impl<R: MatchRater> RatingEngine<R> {
    /// Create an engine from a name normalizer and a rating rule
    pub fn new(normalizer: TeamNameNormalizer, rater: R) -> Self {
        Self { normalizer, rater }
    }

    /// Compute final ratings and full rating histories for the archive
    ///
    /// Incomplete matches (either score absent) are skipped before any
    /// state is touched. A team enters the maps the first time it appears
    /// in a completed match, seeded with the initial rating as a genuine
    /// pre-match baseline; the match's update is then applied on top.
    pub fn compute(&self, seasons: &[SeasonRecord]) -> LeagueRatings {
        let mut result = LeagueRatings::default();
        let mut matches_rated = 0usize;

        for season in seasons {
            for week in &season.weeks {
                let label = timestamp_label(&season.season, &week.label);

                for record in &week.matches {
                    let Some(outcome) = record.outcome() else {
                        continue;
                    };

                    let home = self.normalizer.normalize(&record.home_team);
                    let away = self.normalizer.normalize(&record.away_team);

                    self.seed_team(&mut result, &home, &label);
                    self.seed_team(&mut result, &away, &label);

                    let home_rating = result.ratings[&home];
                    let away_rating = result.ratings[&away];
                    let (new_home, new_away) = self.rater.rate(home_rating, away_rating, outcome);

                    result.ratings.insert(home.clone(), new_home);
                    result.ratings.insert(away.clone(), new_away);
                    result.history.entry(home).or_default().push(HistoryPoint {
                        label: label.clone(),
                        rating: new_home,
                    });
                    result.history.entry(away).or_default().push(HistoryPoint {
                        label: label.clone(),
                        rating: new_away,
                    });

                    matches_rated += 1;
                }
            }
        }

        debug!(
            "Rated {} matches across {} seasons for {} teams",
            matches_rated,
            seasons.len(),
            result.team_count()
        );

        result
    }

    fn seed_team(&self, result: &mut LeagueRatings, team: &str, label: &str) {
        if !result.ratings.contains_key(team) {
            let initial = self.rater.initial_rating();
            result.ratings.insert(team.to_string(), initial);
            result.history.insert(
                team.to_string(),
                vec![HistoryPoint {
                    label: label.to_string(),
                    rating: initial,
                }],
            );
        }
    }
}
