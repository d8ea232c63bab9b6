mod calendar;
mod clock;
mod config;
mod consts;
mod convert;
mod deadline;
mod digits;
mod prelude;
#[cfg(test)]
mod test_utils;
mod types;

pub use calendar::{MonthGrid, shift_month};
pub use clock::{Clock, FixedClock, SystemClock, jalaali_today, jalaali_today_with};
pub use config::{ConfigError, YearRange};
pub use consts::*;
pub use convert::{
    ConvertError, checked_to_gregorian, checked_to_jalaali, gregorian_to_jdn,
    is_leap_jalaali_year, is_supported_jalali_year, jalaali_month_length, jdn_to_gregorian,
    to_gregorian, to_jalaali, week_day,
};
pub use deadline::{
    DateFilter, DeadlineStatus, FestivalDeadline, ReconciledDeadline, cmp_by_deadline, reconcile,
    validate_persian_field,
};
pub use digits::{normalize_digits, to_persian_digits};
pub use types::{
    GregorianDate, days_in_month, format_gregorian_date_for_input, is_leap_year,
    is_valid_gregorian_date_string, parse_gregorian_date,
};

use crate::prelude::*;
use std::str::FromStr;
use tracing::debug;

/// A day in the Jalali (Persian / Shamsi) calendar.
///
/// Fields are private so every value satisfies `1 <= jm <= 12` and
/// `1 <= jd <= jalaali_month_length(jy, jm)`. `Display` renders the canonical,
/// re-parseable `YYYY/MM/DD` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into)]
#[display(fmt = "{:04}/{:02}/{:02}", jy, jm, jd)]
pub struct JalaliDate {
    jy: i32,
    jm: u8,
    jd: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid year: {} (must be {}..={})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i32),
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl JalaliDate {
    /// Creates a Jalali date, checking the month and the day against the month length.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` outside [`MIN_YEAR`]`..=`[`MAX_YEAR`],
    /// otherwise `ParseError::InvalidMonth` or `ParseError::InvalidDay`.
    pub fn new(jy: i32, jm: u8, jd: u8) -> Result<Self, ParseError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&jy) {
            return Err(ParseError::InvalidYear(jy));
        }
        if !(1..=MAX_MONTH).contains(&jm) {
            return Err(ParseError::InvalidMonth(jm));
        }
        if jd < MIN_DAY || jd > jalaali_month_length(jy, jm) {
            return Err(ParseError::InvalidDay {
                year: jy,
                month: jm,
                day: jd,
            });
        }
        Ok(Self { jy, jm, jd })
    }

    /// Builds a value the converter already knows to be valid.
    pub(crate) const fn from_parts(jy: i32, jm: u8, jd: u8) -> Self {
        Self { jy, jm, jd }
    }

    /// First day of the given month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` for months outside 1-12.
    pub fn first_of_month(jy: i32, jm: u8) -> Result<Self, ParseError> {
        Self::new(jy, jm, MIN_DAY)
    }

    #[inline]
    pub const fn jy(&self) -> i32 {
        self.jy
    }

    #[inline]
    pub const fn jm(&self) -> u8 {
        self.jm
    }

    #[inline]
    pub const fn jd(&self) -> u8 {
        self.jd
    }

    /// Whether this date's year has a 30-day Esfand
    pub fn is_leap_year(&self) -> bool {
        is_leap_jalaali_year(self.jy)
    }

    /// Number of days in this date's month
    pub fn month_length(&self) -> u8 {
        jalaali_month_length(self.jy, self.jm)
    }

    /// Persian name of this date's month
    pub fn month_name(&self) -> &'static str {
        // Far-extrapolated conversions can yield a month past Esfand
        month_name(self.jm).unwrap_or_default()
    }

    pub fn to_gregorian(&self) -> GregorianDate {
        to_gregorian(self.jy, self.jm, self.jd)
    }

    pub fn from_gregorian(date: &GregorianDate) -> Self {
        to_jalaali(date.gy(), date.gm(), date.gd())
    }

    /// Julian Day Number of this date
    pub fn to_jdn(&self) -> i32 {
        convert::jalaali_to_jdn(self.jy, self.jm, self.jd)
    }

    pub fn from_jdn(jdn: i32) -> Self {
        convert::jdn_to_jalaali(jdn)
    }

    /// Day of week, Saturday = 0 through Friday = 6
    pub fn week_day(&self) -> u8 {
        convert::week_day_of_jdn(self.to_jdn())
    }

    /// Signed number of days from `self` to `other`
    pub fn days_until(&self, other: &Self) -> i32 {
        other.to_jdn() - self.to_jdn()
    }

    /// Human-facing form: `DD / MonthName / YYYY`
    pub fn to_display_string(&self) -> String {
        format!("{:02} / {} / {}", self.jd, self.month_name(), self.jy)
    }
}

impl From<GregorianDate> for JalaliDate {
    fn from(date: GregorianDate) -> Self {
        Self::from_gregorian(&date)
    }
}

impl TryFrom<(i32, u8, u8)> for JalaliDate {
    type Error = ParseError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl FromStr for JalaliDate {
    type Err = ParseError;

    /// Accepts `Y/M/D` or `Y-M-D`, with or without zero padding, in ASCII,
    /// Persian or Arabic-Indic digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_digits(s);
        let trimmed = normalized.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let has_slash = trimmed.contains(JALALI_SEPARATOR);
        let has_hyphen = trimmed.contains(DATE_SEPARATOR);
        let separator = match (has_slash, has_hyphen) {
            (true, false) => JALALI_SEPARATOR,
            (false, true) => DATE_SEPARATOR,
            (true, true) => {
                return Err(ParseError::InvalidFormat(format!(
                    "Mixed delimiters ({JALALI_SEPARATOR} and {DATE_SEPARATOR})"
                )));
            }
            (false, false) => {
                return Err(ParseError::InvalidFormat(format!(
                    "No date separator found: {trimmed}"
                )));
            }
        };

        let parts: Vec<&str> = trimmed.split(separator).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected 3 components separated by {separator}, found {}",
                parts.len()
            )));
        };

        let jy = parse_year(year)?;
        let jm = parse_component(month)?;
        let jd = parse_component(day)?;
        Self::new(jy, jm, jd)
    }
}

/// Parses one all-digit date component
pub(crate) fn parse_component<T: FromStr>(s: &str) -> Result<T, ParseError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidFormat(s.to_owned()));
    }
    s.parse::<T>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

/// Year component, bounded so conversions stay well inside `i32`
pub(crate) fn parse_year(s: &str) -> Result<i32, ParseError> {
    if s.len() > MAX_YEAR_DIGITS {
        return Err(ParseError::InvalidFormat(format!("Year too long: {s}")));
    }
    parse_component(s)
}

impl serde::Serialize for JalaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for JalaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Tolerant parse for user- and extractor-supplied text.
///
/// Malformed or impossible dates yield `None`; callers treat that as
/// "no known deadline".
pub fn parse_jalali_date(input: &str) -> Option<JalaliDate> {
    match input.parse::<JalaliDate>() {
        Ok(date) => Some(date),
        Err(err) => {
            debug!(input, %err, "rejected Jalali date");
            None
        }
    }
}

/// Canonical `YYYY/MM/DD` with ASCII digits
pub fn format_jalali_date_for_input(date: &JalaliDate) -> String {
    date.to_string()
}

/// Display form of a loosely formatted Jalali date string.
///
/// Input that does not parse comes back trimmed with its digits normalized.
pub fn format_jalali_date(input: &str) -> String {
    parse_jalali_date(input).map_or_else(
        || normalize_digits(input).trim().to_owned(),
        |date| date.to_display_string(),
    )
}

/// Month and day check; the year only has to lie within [`MIN_YEAR`]`..=`[`MAX_YEAR`].
pub fn is_valid_jalali_date(jy: i32, jm: u8, jd: u8) -> bool {
    JalaliDate::new(jy, jm, jd).is_ok()
}

/// Advisory for years outside the default supported window, `None` when fine.
pub fn get_jalali_year_validation_message(jy: i32) -> Option<String> {
    YearRange::default().validation_message(jy)
}

/// Persian month name for `1..=12`
pub fn month_name(jm: u8) -> Option<&'static str> {
    PERSIAN_MONTH_NAMES.get(usize::from(jm).checked_sub(1)?).copied()
}
