use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MAX_JALALI_YEAR, DEFAULT_MIN_JALALI_YEAR};

/// Error type for configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Lower bound is above the upper bound.
    #[error("Invalid year range: min ({min}) is greater than max ({max})")]
    InvertedRange { min: i32, max: i32 },
}

/// Jalali years the application accepts for deadlines without a warning.
///
/// This is a business rule, not a calendrical limit: dates outside the window
/// still parse and convert, they only draw an advisory message. Deserializes
/// from `{"minYear": .., "maxYear": ..}` with either key optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawYearRange", into = "RawYearRange")]
pub struct YearRange {
    min: i32,
    max: i32,
}

#[derive(Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawYearRange {
    min_year: i32,
    max_year: i32,
}

impl Default for RawYearRange {
    fn default() -> Self {
        Self {
            min_year: DEFAULT_MIN_JALALI_YEAR,
            max_year: DEFAULT_MAX_JALALI_YEAR,
        }
    }
}

impl TryFrom<RawYearRange> for YearRange {
    type Error = ConfigError;

    fn try_from(raw: RawYearRange) -> Result<Self, Self::Error> {
        Self::new(raw.min_year, raw.max_year)
    }
}

impl From<YearRange> for RawYearRange {
    fn from(range: YearRange) -> Self {
        Self {
            min_year: range.min,
            max_year: range.max,
        }
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_JALALI_YEAR,
            max: DEFAULT_MAX_JALALI_YEAR,
        }
    }
}

impl YearRange {
    /// Creates an inclusive year window.
    ///
    /// # Errors
    /// Returns `ConfigError::InvertedRange` if `min > max`.
    pub const fn new(min: i32, max: i32) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::InvertedRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub const fn min(&self) -> i32 {
        self.min
    }

    pub const fn max(&self) -> i32 {
        self.max
    }

    pub const fn contains(&self, jy: i32) -> bool {
        jy >= self.min && jy <= self.max
    }

    /// Human-readable warning for a year outside the window, `None` inside it.
    pub fn validation_message(&self, jy: i32) -> Option<String> {
        if jy < self.min {
            Some(format!(
                "سال {jy} کمتر از حداقل سال مجاز ({}) است.",
                self.min
            ))
        } else if jy > self.max {
            Some(format!(
                "سال {jy} بیشتر از حداکثر سال مجاز ({}) است.",
                self.max
            ))
        } else {
            None
        }
    }
}
