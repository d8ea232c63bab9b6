use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR,
};
use crate::convert::{gregorian_to_jdn, jdn_to_gregorian, to_jalaali, week_day};
use crate::prelude::*;
use crate::{JalaliDate, ParseError, normalize_digits, parse_component, parse_year};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// A day in the proleptic Gregorian calendar.
/// `Display` renders the canonical `YYYY-MM-DD` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into)]
#[display(fmt = "{:04}-{:02}-{:02}", gy, gm, gd)]
pub struct GregorianDate {
    gy: i32,
    gm: u8,
    gd: u8,
}

impl GregorianDate {
    /// Creates a new date, validating the month and the day for that month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` outside [`MIN_YEAR`]`..=`[`MAX_YEAR`],
    /// `ParseError::InvalidMonth` if the month is outside 1-12, or
    /// `ParseError::InvalidDay` if the day does not exist in that month.
    pub fn new(gy: i32, gm: u8, gd: u8) -> Result<Self, ParseError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&gy) {
            return Err(ParseError::InvalidYear(gy));
        }
        if !(1..=MAX_MONTH).contains(&gm) {
            return Err(ParseError::InvalidMonth(gm));
        }
        if gd < MIN_DAY || gd > days_in_month(gy, gm) {
            return Err(ParseError::InvalidDay {
                year: gy,
                month: gm,
                day: gd,
            });
        }
        Ok(Self { gy, gm, gd })
    }

    pub(crate) const fn from_parts(gy: i32, gm: u8, gd: u8) -> Self {
        Self { gy, gm, gd }
    }

    #[inline]
    pub const fn gy(&self) -> i32 {
        self.gy
    }

    #[inline]
    pub const fn gm(&self) -> u8 {
        self.gm
    }

    #[inline]
    pub const fn gd(&self) -> u8 {
        self.gd
    }

    pub fn to_jalaali(&self) -> JalaliDate {
        to_jalaali(self.gy, self.gm, self.gd)
    }

    /// Julian Day Number of this date
    pub fn to_jdn(&self) -> i32 {
        gregorian_to_jdn(self.gy, self.gm, self.gd)
    }

    pub fn from_jdn(jdn: i32) -> Self {
        jdn_to_gregorian(jdn)
    }

    /// Day of week, Saturday = 0 through Friday = 6
    pub fn week_day(&self) -> u8 {
        week_day(self.gy, self.gm, self.gd)
    }

    /// Signed number of days from `self` to `other`
    pub fn days_until(&self, other: &Self) -> i32 {
        other.to_jdn() - self.to_jdn()
    }

    /// The date `days` days after (or before, if negative) this one
    pub fn add_days(&self, days: i32) -> Self {
        Self::from_jdn(self.to_jdn().saturating_add(days))
    }
}

impl From<JalaliDate> for GregorianDate {
    fn from(date: JalaliDate) -> Self {
        date.to_gregorian()
    }
}

impl TryFrom<(i32, u8, u8)> for GregorianDate {
    type Error = ParseError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    /// Strict `YYYY-MM-DD`; month and day may be unpadded. The components
    /// must name a real day: no rolling Feb 30 over into March.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_digits(s);
        let trimmed = normalized.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {trimmed}"
            )));
        };

        let gy = parse_year(year)?;
        let gm = parse_component(month)?;
        let gd = parse_component(day)?;
        Self::new(gy, gm, gd)
    }
}

impl Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Tolerant parse of a `YYYY-MM-DD` string; `None` for anything that is not a real day.
pub fn parse_gregorian_date(input: &str) -> Option<GregorianDate> {
    match input.parse::<GregorianDate>() {
        Ok(date) => Some(date),
        Err(err) => {
            debug!(input, %err, "rejected Gregorian date");
            None
        }
    }
}

pub fn is_valid_gregorian_date_string(input: &str) -> bool {
    parse_gregorian_date(input).is_some()
}

/// Canonical `YYYY-MM-DD`
pub fn format_gregorian_date_for_input(date: &GregorianDate) -> String {
    date.to_string()
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{gregorian, jalali};

    #[test]
    fn test_new_valid() {
        // January - 31 days
        assert!(GregorianDate::new(2024, 1, 1).is_ok());
        assert!(GregorianDate::new(2024, 1, 31).is_ok());

        // February non-leap - 28 days
        assert!(GregorianDate::new(2023, 2, 28).is_ok());
        assert!(GregorianDate::new(2023, 2, 29).is_err());

        // February leap year - 29 days
        assert!(GregorianDate::new(2024, 2, 29).is_ok());
        assert!(GregorianDate::new(2024, 2, 30).is_err());

        // April - 30 days
        assert!(GregorianDate::new(2024, 4, 30).is_ok());
        assert!(GregorianDate::new(2024, 4, 31).is_err());
    }

    #[test]
    fn test_new_invalid_month() {
        assert!(matches!(
            GregorianDate::new(2024, 0, 1),
            Err(ParseError::InvalidMonth(0))
        ));
        assert!(matches!(
            GregorianDate::new(2024, 13, 1),
            Err(ParseError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_new_invalid_year() {
        assert!(GregorianDate::new(MAX_YEAR, 12, 31).is_ok());
        assert!(GregorianDate::new(MIN_YEAR, 1, 1).is_ok());
        assert!(matches!(
            GregorianDate::new(i32::MAX, 1, 1),
            Err(ParseError::InvalidYear(i32::MAX))
        ));
        assert!(matches!(
            GregorianDate::new(MIN_YEAR - 1, 1, 1),
            Err(ParseError::InvalidYear(_))
        ));
    }

    #[test]
    fn test_add_days_saturates() {
        let date = gregorian(2024, 3, 20);
        let _ = date.add_days(i32::MAX);
        let _ = date.add_days(i32::MIN);
        assert_eq!(date.add_days(-1), gregorian(2024, 3, 19));
    }

    #[test]
    fn test_new_invalid_day() {
        let result = GregorianDate::new(2024, 1, 32);
        assert!(matches!(
            result,
            Err(ParseError::InvalidDay {
                year: 2024,
                month: 1,
                day: 32
            })
        ));
        assert!(GregorianDate::new(2024, 1, 0).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(gregorian(2024, 3, 20).to_string(), "2024-03-20");
        assert_eq!(format_gregorian_date_for_input(&gregorian(812, 1, 5)), "0812-01-05");
    }

    #[test]
    fn test_is_valid_gregorian_date_string_cases() {
        struct TestCase {
            input:       &'static str,
            valid:       bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                input:       "2024-03-20",
                valid:       true,
                description: "canonical",
            },
            TestCase {
                input:       "2024-3-5",
                valid:       true,
                description: "unpadded",
            },
            TestCase {
                input:       "۲۰۲۴-۰۳-۲۰",
                valid:       true,
                description: "Persian digits",
            },
            TestCase {
                input:       "2024-02-29",
                valid:       true,
                description: "leap day",
            },
            TestCase {
                input:       "2023-02-29",
                valid:       false,
                description: "leap day in common year",
            },
            TestCase {
                input:       "2023-02-30",
                valid:       false,
                description: "February 30",
            },
            TestCase {
                input:       "2024-04-31",
                valid:       false,
                description: "April 31",
            },
            TestCase {
                input:       "1900-02-29",
                valid:       false,
                description: "century not divisible by 400",
            },
            TestCase {
                input:       "2024-13-01",
                valid:       false,
                description: "month 13",
            },
            TestCase {
                input:       "2024/03/20",
                valid:       false,
                description: "wrong separator",
            },
            TestCase {
                input:       "2024-03",
                valid:       false,
                description: "missing day",
            },
            TestCase {
                input:       "2024-03-20-01",
                valid:       false,
                description: "extra component",
            },
            TestCase {
                input:       "20240320",
                valid:       false,
                description: "no separators",
            },
            TestCase {
                input:       "",
                valid:       false,
                description: "empty",
            },
            TestCase {
                input:       "2024-03-2x",
                valid:       false,
                description: "non-digit",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_valid_gregorian_date_string(case.input),
                case.valid,
                "{:?} ({})",
                case.input,
                case.description
            );
        }
    }

    #[test]
    fn test_parse_gregorian_date() {
        assert_eq!(parse_gregorian_date(" 2024-03-20 "), Some(gregorian(2024, 3, 20)));
        assert_eq!(parse_gregorian_date("2023-02-30"), None);
    }

    #[test]
    fn test_to_jalaali_and_back() {
        let date = gregorian(2024, 3, 20);
        assert_eq!(date.to_jalaali(), jalali(1403, 1, 1));
        assert_eq!(GregorianDate::from(jalali(1403, 1, 1)), date);
    }

    #[test]
    fn test_days_until_and_add_days() {
        let a = gregorian(2024, 2, 28);
        let b = gregorian(2024, 3, 1);
        assert_eq!(a.days_until(&b), 2);
        assert_eq!(b.days_until(&a), -2);
        assert_eq!(a.add_days(2), b);
        assert_eq!(gregorian(2024, 12, 31).add_days(1), gregorian(2025, 1, 1));
        assert_eq!(gregorian(2025, 3, 1).add_days(-1), gregorian(2025, 2, 28));
    }

    #[test]
    fn test_week_day() {
        assert_eq!(gregorian(2024, 3, 23).week_day(), 0);
        assert_eq!(gregorian(2024, 3, 29).week_day(), 6);
    }

    #[test]
    fn test_serde() {
        let date = gregorian(2024, 3, 20);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""2024-03-20""#);

        let parsed: GregorianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);

        let result: Result<GregorianDate, _> = serde_json::from_str(r#""2023-02-30""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        i32,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            // Divisible by 4
            TestCase {
                year:        2020,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2024,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2021,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        2023,
                is_leap:     false,
                description: "not divisible by 4",
            },
            // Century years not divisible by 400
            TestCase {
                year:        1900,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2100,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            // Divisible by 400
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "divisible by 400",
            },
            TestCase {
                year:        2400,
                is_leap:     true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({}): expected {}",
                case.year,
                case.description,
                if case.is_leap {
                    "leap year"
                } else {
                    "not leap year"
                }
            );
        }
    }

    #[test]
    fn test_all_months_have_valid_days() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(
                days_in_month(2023, month),
                expected[month as usize],
                "Month {month} has incorrect day count"
            );
        }
        assert_eq!(days_in_month(2024, 2), 29);
    }
}
