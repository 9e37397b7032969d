//! Team name normalization configuration

use serde::{Deserialize, Serialize};

/// Sponsor tokens stripped from raw team names
///
/// Both lists are ordered; removal is applied in list order, prefixes
/// before suffixes. Entries are exact literal substrings, whitespace
/// included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizerSettings {
    pub prefixes: Vec<String>,
    pub suffixes: Vec<String>,
}

impl Default for NormalizerSettings {
    fn default() -> Self {
        Self {
            prefixes: vec![
                "GAÜ ".to_string(),
                "DND L. ".to_string(),
                "Miracle ".to_string(),
                "China Bazaar ".to_string(),
                "Tremeşeli H. ".to_string(),
            ],
            suffixes: vec![
                " TSK".to_string(),
                " GSK".to_string(),
                " SK".to_string(),
                " DSK".to_string(),
                " YSK".to_string(),
                " GBSK".to_string(),
                " ŞHSK".to_string(),
                " İYSK".to_string(),
                " KKSK".to_string(),
            ],
        }
    }
}

impl NormalizerSettings {
    /// Settings that leave every name untouched apart from trimming
    pub fn passthrough() -> Self {
        Self {
            prefixes: Vec::new(),
            suffixes: Vec::new(),
        }
    }

    /// Validate settings values
    pub fn validate(&self) -> crate::error::Result<()> {
        for token in self.prefixes.iter().chain(self.suffixes.iter()) {
            if token.is_empty() {
                return Err(crate::error::RatingsError::ConfigurationError {
                    message: "Sponsor token entries cannot be empty".to_string(),
                }
                .into());
            }
        }

        Ok(())
    }
}
