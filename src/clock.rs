//! Source of "today".
//!
//! Nothing else in the crate reads the wall clock; deadline and calendar
//! helpers take today's date as an argument so callers (and tests) can pin it.

use chrono::{Datelike, Local, NaiveDate};
use tracing::trace;

use crate::prelude::*;
use crate::{GregorianDate, JalaliDate};

pub trait Clock {
    /// Today's date in the local time zone
    fn today(&self) -> GregorianDate;
}

/// Reads the local date from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> GregorianDate {
        let today = Local::now().date_naive();
        trace!(%today, "read system clock");
        GregorianDate::from(today)
    }
}

/// Always reports the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, From)]
pub struct FixedClock(pub GregorianDate);

impl Clock for FixedClock {
    fn today(&self) -> GregorianDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> GregorianDate {
        (**self).today()
    }
}

impl From<NaiveDate> for GregorianDate {
    fn from(date: NaiveDate) -> Self {
        // chrono only produces real dates
        Self::from_parts(date.year(), date.month() as u8, date.day() as u8)
    }
}

/// Today's Jalali date according to the system clock
pub fn jalaali_today() -> JalaliDate {
    jalaali_today_with(&SystemClock)
}

pub fn jalaali_today_with<C: Clock + ?Sized>(clock: &C) -> JalaliDate {
    clock.today().to_jalaali()
}
