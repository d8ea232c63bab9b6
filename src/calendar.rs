//! Saturday-first month grid for the deadline calendar view.

use std::slice::Chunks;

use tracing::trace;

use crate::consts::{DAYS_IN_WEEK, MAX_MONTH};
use crate::{JalaliDate, ParseError};

/// Moves `delta` months from `jy/jm`, rolling over year boundaries.
pub const fn shift_month(jy: i32, jm: u8, delta: i32) -> (i32, u8) {
    let months = MAX_MONTH as i64;
    let index = jy as i64 * months + (jm as i64 - 1) + delta as i64;
    (index.div_euclid(months) as i32, index.rem_euclid(months) as u8 + 1)
}

/// One Jalali month laid out in weeks of seven cells, Saturday first.
///
/// Cells before the 1st and after the last day are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    first: JalaliDate,
    month_length: u8,
    cells: Vec<Option<JalaliDate>>,
}

impl MonthGrid {
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if `jm` is outside 1-12.
    pub fn new(jy: i32, jm: u8) -> Result<Self, ParseError> {
        JalaliDate::first_of_month(jy, jm).map(Self::starting_at)
    }

    /// Grid of the month containing `date`
    pub fn for_date(date: &JalaliDate) -> Self {
        Self::starting_at(JalaliDate::from_parts(date.jy(), date.jm(), 1))
    }

    fn starting_at(first: JalaliDate) -> Self {
        let month_length = first.month_length();
        let leading = usize::from(first.week_day());
        let filled = leading + usize::from(month_length);
        let total = filled.div_ceil(DAYS_IN_WEEK) * DAYS_IN_WEEK;

        let mut cells = Vec::with_capacity(total);
        cells.resize(leading, None);
        cells.extend(
            (1..=month_length).map(|jd| Some(JalaliDate::from_parts(first.jy(), first.jm(), jd))),
        );
        cells.resize(total, None);

        trace!(month = %first, weeks = total / DAYS_IN_WEEK, "built month grid");
        Self {
            first,
            month_length,
            cells,
        }
    }

    pub const fn jy(&self) -> i32 {
        self.first.jy()
    }

    pub const fn jm(&self) -> u8 {
        self.first.jm()
    }

    pub const fn month_length(&self) -> u8 {
        self.month_length
    }

    /// Weekday of the 1st, which is also the number of leading blanks
    pub fn first_week_day(&self) -> u8 {
        self.first.week_day()
    }

    pub fn weeks(&self) -> Chunks<'_, Option<JalaliDate>> {
        self.cells.chunks(DAYS_IN_WEEK)
    }

    pub fn week_count(&self) -> usize {
        self.cells.len() / DAYS_IN_WEEK
    }

    /// Days of the month in order, blanks skipped
    pub fn days(&self) -> impl Iterator<Item = JalaliDate> + '_ {
        self.cells.iter().flatten().copied()
    }

    pub fn contains(&self, date: &JalaliDate) -> bool {
        date.jy() == self.jy() && date.jm() == self.jm()
    }

    /// Header such as `"فروردین 1403"`
    pub fn title(&self) -> String {
        format!("{} {}", self.first.month_name(), self.jy())
    }

    pub fn shifted(&self, delta: i32) -> Self {
        let (jy, jm) = shift_month(self.jy(), self.jm(), delta);
        Self::starting_at(JalaliDate::from_parts(jy, jm, 1))
    }

    pub fn next_month(&self) -> Self {
        self.shifted(1)
    }

    pub fn previous_month(&self) -> Self {
        self.shifted(-1)
    }
}
