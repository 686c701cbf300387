// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;
use std::sync::OnceLock;

use tempora_units::calendar::{is_leap_year, supported_years};

static INSTALLED: OnceLock<Config> = OnceLock::new();

/// Errors raised while loading or installing a configuration
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The TOML text could not be parsed
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parser message
        message: String,
    },

    /// A reference year lies outside the supported range
    #[error("Reference year {year} is outside the supported range")]
    YearOutOfRange {
        /// The year given
        year: i16,
    },

    /// The common reference year is a leap year
    #[error("Reference year {year} must not be a leap year")]
    LeapReferenceYear {
        /// The year given
        year: i16,
    },

    /// The leap reference year is not a leap year
    #[error("Reference leap year {year} must be a leap year")]
    CommonReferenceLeapYear {
        /// The year given
        year: i16,
    },

    /// The stability threshold is negative
    #[error("ISO/Gregorian threshold must not be negative, got {days}")]
    NegativeThreshold {
        /// The threshold given
        days: i32,
    },

    /// A configuration was already installed
    #[error("A configuration is already installed")]
    AlreadyInstalled,
}

/// Tunables of the comparator.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    /// Non-leap year substituted when a comparison needs a representative
    /// year and the year is unspecified.
    #[serde(default = "default_reference_year")]
    pub reference_year: i16,

    /// Leap year substituted when a leap day takes part in the comparison.
    #[serde(default = "default_reference_leap_year")]
    pub reference_leap_year: i16,

    /// Mixed ISO/Gregorian comparisons whose day offsets from the start of
    /// the year differ by more than this are decided in one year.
    #[serde(default = "default_iso_gregorian_threshold_days")]
    pub iso_gregorian_threshold_days: i32,
}

const fn default_reference_year() -> i16 {
    2023
}

const fn default_reference_leap_year() -> i16 {
    2024
}

const fn default_iso_gregorian_threshold_days() -> i32 {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reference_year: default_reference_year(),
            reference_leap_year: default_reference_leap_year(),
            iso_gregorian_threshold_days: default_iso_gregorian_threshold_days(),
        }
    }
}

impl Config {
    /// Check that the reference years are usable.
    ///
    /// ## Errors
    /// Returns the first invalid setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for year in [self.reference_year, self.reference_leap_year] {
            if !supported_years().contains(&year) {
                return Err(ConfigError::YearOutOfRange { year });
            }
        }
        if is_leap_year(self.reference_year) {
            return Err(ConfigError::LeapReferenceYear {
                year: self.reference_year,
            });
        }
        if !is_leap_year(self.reference_leap_year) {
            return Err(ConfigError::CommonReferenceLeapYear {
                year: self.reference_leap_year,
            });
        }
        if self.iso_gregorian_threshold_days < 0 {
            return Err(ConfigError::NegativeThreshold {
                days: self.iso_gregorian_threshold_days,
            });
        }
        Ok(())
    }

    /// Install the configuration for the rest of the process.
    ///
    /// ## Errors
    /// Fails when the configuration is invalid or one is already installed.
    pub fn install(self) -> Result<(), ConfigError> {
        self.validate()?;
        tracing::debug!(config = ?self, "installing configuration");
        INSTALLED
            .set(self)
            .map_err(|_| ConfigError::AlreadyInstalled)
    }

    /// The installed configuration, or the default one.
    #[must_use]
    pub fn current() -> &'static Config {
        static DEFAULT: OnceLock<Config> = OnceLock::new();
        INSTALLED
            .get()
            .unwrap_or_else(|| DEFAULT.get_or_init(Config::default))
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: Config = toml::from_str(s).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }
}
