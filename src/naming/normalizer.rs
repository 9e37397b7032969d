//! Sponsor-token stripping for raw team names

use crate::config::naming::NormalizerSettings;

/// Canonicalizes raw team names by deleting known sponsor tokens
///
/// Removal is exact-substring only: every occurrence of each configured
/// prefix is deleted in list order, then every occurrence of each suffix,
/// and the result is trimmed. No case folding, no fuzzy matching.
#[derive(Debug, Clone)]
pub struct TeamNameNormalizer {
    settings: NormalizerSettings,
}

impl TeamNameNormalizer {
    /// Create a normalizer with the given sponsor table
    pub fn new(settings: NormalizerSettings) -> Self {
        Self { settings }
    }

    /// Canonical form of a raw team name
    ///
    /// Total: always returns a string, including the empty string when
    /// every character belongs to sponsor tokens.
    pub fn normalize(&self, raw: &str) -> String {
        let mut cleaned = raw.to_string();
        for prefix in &self.settings.prefixes {
            cleaned = cleaned.replace(prefix.as_str(), "");
        }
        for suffix in &self.settings.suffixes {
            cleaned = cleaned.replace(suffix.as_str(), "");
        }
        cleaned.trim().to_string()
    }
}

impl Default for TeamNameNormalizer {
    fn default() -> Self {
        Self::new(NormalizerSettings::default())
    }
}
