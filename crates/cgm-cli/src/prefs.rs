// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use cgm_geom::DEFAULT_LENGTH_TOLERANCE;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{ConfigError, ConfigService, ConfigStore};

/// Config key the CLI preferences are stored under.
pub const PREFS_KEY: &str = "cgm";

/// Largest number of fractional digits worth printing for an `f64`.
pub const MAX_PRECISION: usize = 17;

/// Preferences applied when a command does not override them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliPrefs {
    /// Tolerance for Bezier arc-length queries.
    pub length_tolerance: f64,
    /// Fractional digits in plain-text output.
    pub precision: usize,
}

impl Default for CliPrefs {
    fn default() -> Self {
        Self {
            length_tolerance: DEFAULT_LENGTH_TOLERANCE,
            precision: 6,
        }
    }
}

/// A preference value outside its accepted range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PrefsError {
    /// Tolerances must be positive and finite.
    #[error("length tolerance must be positive and finite, got {0}")]
    Tolerance(f64),
    /// Precision beyond what an `f64` can carry.
    #[error("precision must be at most 17, got {0}")]
    Precision(usize),
}

impl CliPrefs {
    /// Checks every field against its accepted range.
    pub fn validate(&self) -> Result<(), PrefsError> {
        if !(self.length_tolerance.is_finite() && self.length_tolerance > 0.0) {
            return Err(PrefsError::Tolerance(self.length_tolerance));
        }
        if self.precision > MAX_PRECISION {
            return Err(PrefsError::Precision(self.precision));
        }
        Ok(())
    }

    /// Loads the stored preferences, falling back to defaults when absent.
    pub fn load<S: ConfigStore>(config: &ConfigService<S>) -> Result<Self, ConfigError> {
        Ok(config.load(PREFS_KEY)?.unwrap_or_default())
    }

    /// Persists the preferences.
    pub fn save<S: ConfigStore>(&self, config: &ConfigService<S>) -> Result<(), ConfigError> {
        config.save(PREFS_KEY, self)
    }
}
