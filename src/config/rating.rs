//! Rating system configuration

use serde::{Deserialize, Serialize};

/// Parameters of the pairwise Elo update rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EloSettings {
    /// Maximum rating movement per match
    pub k_factor: f64,
    /// Rating assigned to a team at its first completed match
    pub initial_rating: f64,
}

impl Default for EloSettings {
    fn default() -> Self {
        Self {
            k_factor: 32.0,
            initial_rating: 1500.0,
        }
    }
}

impl EloSettings {
    /// Create conservative settings (slower rating changes)
    pub fn conservative() -> Self {
        Self {
            k_factor: 16.0,
            initial_rating: 1500.0,
        }
    }

    /// Create aggressive settings (faster rating changes)
    pub fn aggressive() -> Self {
        Self {
            k_factor: 64.0,
            initial_rating: 1500.0,
        }
    }

    /// Validate settings values
    pub fn validate(&self) -> crate::error::Result<()> {
        if !self.k_factor.is_finite() || self.k_factor <= 0.0 {
            return Err(crate::error::RatingsError::ConfigurationError {
                message: "K-factor must be positive and finite".to_string(),
            }
            .into());
        }

        if !self.initial_rating.is_finite() {
            return Err(crate::error::RatingsError::ConfigurationError {
                message: "Initial rating must be finite".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = EloSettings::default();
        assert_eq!(settings.k_factor, 32.0);
        assert_eq!(settings.initial_rating, 1500.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = EloSettings::default();
        assert!(settings.validate().is_ok());

        settings.k_factor = 0.0;
        assert!(settings.validate().is_err());

        settings = EloSettings::default();
        settings.k_factor = f64::NAN;
        assert!(settings.validate().is_err());

        settings = EloSettings::default();
        settings.initial_rating = f64::INFINITY;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_presets() {
        let conservative = EloSettings::conservative();
        let aggressive = EloSettings::aggressive();
        let default = EloSettings::default();

        assert!(conservative.k_factor < default.k_factor);
        assert!(aggressive.k_factor > default.k_factor);

        assert!(conservative.validate().is_ok());
        assert!(aggressive.validate().is_ok());
    }
}
