//! Festival submission deadlines.
//!
//! A festival record carries its deadline as up to two loosely formatted
//! strings, one Jalali and one Gregorian. Everything here reads them through
//! the tolerant parsers, so a missing or garbled deadline simply means
//! "no known deadline".

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{NEAR_DAYS, URGENT_DAYS};
use crate::prelude::*;
use crate::{
    GregorianDate, JalaliDate, YearRange, format_gregorian_date_for_input,
    format_jalali_date_for_input, normalize_digits, parse_gregorian_date, parse_jalali_date,
};

/// Form error shown when the Jalali field does not parse
const INVALID_PERSIAN_DATE_MESSAGE: &str = "فرمت تاریخ شمسی صحیح نیست (مثال: YYYY/MM/DD).";
/// Shown instead of a countdown when no deadline is known
const UNKNOWN_DEADLINE_TEXT: &str = "نامشخص";

/// Deadline fields as persisted with a festival record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FestivalDeadline {
    /// `YYYY/MM/DD` Jalali date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_deadline_persian: Option<String>,
    /// `YYYY-MM-DD` Gregorian date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_deadline_gregorian: Option<String>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

impl FestivalDeadline {
    pub const fn new(persian: Option<String>, gregorian: Option<String>) -> Self {
        Self {
            submission_deadline_persian: persian,
            submission_deadline_gregorian: gregorian,
        }
    }

    fn persian_date(&self) -> Option<JalaliDate> {
        non_blank(self.submission_deadline_persian.as_deref()).and_then(parse_jalali_date)
    }

    fn gregorian_date(&self) -> Option<GregorianDate> {
        non_blank(self.submission_deadline_gregorian.as_deref()).and_then(parse_gregorian_date)
    }

    /// Deadline on the Gregorian calendar, preferring the Gregorian field
    pub fn gregorian(&self) -> Option<GregorianDate> {
        self.gregorian_date()
            .or_else(|| self.persian_date().map(|date| date.to_gregorian()))
    }

    /// Deadline on the Jalali calendar, preferring the Jalali field
    pub fn jalali(&self) -> Option<JalaliDate> {
        self.persian_date()
            .or_else(|| self.gregorian_date().map(|date| date.to_jalaali()))
    }

    /// Days from `today` to the deadline; negative once it has passed
    pub fn days_remaining(&self, today: GregorianDate) -> Option<i32> {
        self.gregorian().map(|deadline| today.days_until(&deadline))
    }

    pub fn status(&self, today: GregorianDate) -> Option<DeadlineStatus> {
        self.days_remaining(today).map(DeadlineStatus::classify)
    }

    /// Countdown text for a festival card
    pub fn describe(&self, today: GregorianDate) -> String {
        self.days_remaining(today).map_or_else(
            || UNKNOWN_DEADLINE_TEXT.to_owned(),
            DeadlineStatus::describe,
        )
    }
}

/// Urgency tier of a deadline relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeadlineStatus {
    /// Deadline has passed
    #[display(fmt = "past")]
    Past,
    /// Today is the last day
    #[display(fmt = "today")]
    Today,
    /// One or two days left
    #[display(fmt = "urgent")]
    Urgent,
    /// Three to ten days left
    #[display(fmt = "near")]
    Near,
    /// More than ten days left
    #[display(fmt = "far")]
    Far,
}

impl DeadlineStatus {
    pub const fn classify(days_remaining: i32) -> Self {
        if days_remaining < 0 {
            Self::Past
        } else if days_remaining == 0 {
            Self::Today
        } else if days_remaining < URGENT_DAYS {
            Self::Urgent
        } else if days_remaining <= NEAR_DAYS {
            Self::Near
        } else {
            Self::Far
        }
    }

    const fn pressure(self) -> u8 {
        match self {
            Self::Past => 0,
            Self::Far => 1,
            Self::Near => 2,
            Self::Urgent => 3,
            Self::Today => 4,
        }
    }

    /// Status to highlight for a calendar day holding several deadlines.
    /// Past deadlines only win when nothing is still open.
    pub fn most_pressing<I>(statuses: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        statuses.into_iter().max_by_key(|status| status.pressure())
    }

    /// Countdown text for `days_remaining`
    pub fn describe(days_remaining: i32) -> String {
        match Self::classify(days_remaining) {
            Self::Past => "مهلت تمام شده".to_owned(),
            Self::Today => "امروز آخرین مهلت!".to_owned(),
            Self::Urgent | Self::Near | Self::Far => format!("{days_remaining} روز باقی مانده"),
        }
    }
}

/// Month-based filters of the festival list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateFilter {
    /// Still open and due in the current Jalali month
    #[default]
    CurrentMonth,
    /// Already past
    PastMonths,
    /// Due in a later Jalali month
    FutureMonths,
}

impl DateFilter {
    /// Festivals without a readable deadline never match.
    pub fn matches(self, deadline: &FestivalDeadline, today: GregorianDate) -> bool {
        let today_jalali = today.to_jalaali();
        let current_month = (today_jalali.jy(), today_jalali.jm());

        match self {
            Self::CurrentMonth => match (deadline.gregorian(), deadline.jalali()) {
                (Some(gregorian), Some(jalali)) => {
                    (jalali.jy(), jalali.jm()) == current_month && gregorian >= today
                }
                _ => false,
            },
            Self::PastMonths => deadline.gregorian().is_some_and(|gregorian| gregorian < today),
            Self::FutureMonths => deadline
                .jalali()
                .is_some_and(|jalali| (jalali.jy(), jalali.jm()) > current_month),
        }
    }

    /// Month dropdown filter: deadline falls in Jalali month `jm` of any year
    pub fn matches_month(deadline: &FestivalDeadline, jm: u8) -> bool {
        deadline.jalali().is_some_and(|jalali| jalali.jm() == jm)
    }
}

/// List order: earliest deadline first, festivals without one last.
pub fn cmp_by_deadline(a: &FestivalDeadline, b: &FestivalDeadline) -> Ordering {
    match (a.gregorian(), b.gregorian()) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Form error for a raw Jalali deadline field, `None` when acceptable.
///
/// Blank input is acceptable (no deadline). Years outside `years` are
/// reported with the range's advisory message.
pub fn validate_persian_field(raw: &str, years: &YearRange) -> Option<String> {
    let normalized = normalize_digits(raw);
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return None;
    }
    match parse_jalali_date(trimmed) {
        Some(date) => years.validation_message(date.jy()),
        None => Some(INVALID_PERSIAN_DATE_MESSAGE.to_owned()),
    }
}

/// Deadline fields after [`reconcile`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconciledDeadline {
    pub persian: Option<String>,
    pub gregorian: Option<String>,
    /// Message for the Jalali field, if it needs attention
    pub error: Option<String>,
}

impl ReconciledDeadline {
    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_deadline(self) -> FestivalDeadline {
        FestivalDeadline::new(self.persian, self.gregorian)
    }
}

/// Brings the Jalali and Gregorian deadline fields of a form into agreement.
///
/// - A valid, in-range Jalali date wins: it is canonicalized and the Gregorian
///   field is derived from it.
/// - A Jalali value that is invalid or out of range is kept as typed (digits
///   normalized) with an error; the Gregorian field survives only if valid.
/// - With no Jalali value, a valid Gregorian date derives the Jalali field.
/// - Blank or invalid leftovers become `None`.
pub fn reconcile(
    persian: Option<&str>,
    gregorian: Option<&str>,
    years: &YearRange,
) -> ReconciledDeadline {
    let persian = non_blank(persian).map(|raw| normalize_digits(raw).trim().to_owned());
    let gregorian = non_blank(gregorian).and_then(|raw| {
        let parsed = parse_gregorian_date(raw);
        if parsed.is_none() {
            debug!(gregorian = raw, "dropping invalid Gregorian deadline");
        }
        parsed
    });

    if let Some(raw) = persian {
        if let Some(error) = validate_persian_field(&raw, years) {
            debug!(persian = %raw, %error, "Jalali deadline needs attention");
            return ReconciledDeadline {
                persian: Some(raw),
                gregorian: gregorian.as_ref().map(format_gregorian_date_for_input),
                error: Some(error),
            };
        }
        return match parse_jalali_date(&raw) {
            Some(jalali) => ReconciledDeadline {
                persian: Some(format_jalali_date_for_input(&jalali)),
                gregorian: Some(format_gregorian_date_for_input(&jalali.to_gregorian())),
                error: None,
            },
            None => ReconciledDeadline::default(),
        };
    }

    match gregorian {
        Some(gregorian) => {
            let jalali = gregorian.to_jalaali();
            ReconciledDeadline {
                persian: Some(format_jalali_date_for_input(&jalali)),
                gregorian: Some(format_gregorian_date_for_input(&gregorian)),
                error: years.validation_message(jalali.jy()),
            }
        }
        None => ReconciledDeadline::default(),
    }
}
