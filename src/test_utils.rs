//! Constructors shared by the unit tests.

use crate::{FestivalDeadline, GregorianDate, JalaliDate};

pub fn jalali(jy: i32, jm: u8, jd: u8) -> JalaliDate {
    JalaliDate::new(jy, jm, jd).unwrap_or_else(|err| panic!("invalid test date {jy}/{jm}/{jd}: {err}"))
}

pub fn gregorian(gy: i32, gm: u8, gd: u8) -> GregorianDate {
    GregorianDate::new(gy, gm, gd).unwrap_or_else(|err| panic!("invalid test date {gy}-{gm}-{gd}: {err}"))
}

pub fn persian_deadline(s: &str) -> FestivalDeadline {
    FestivalDeadline::new(Some(s.to_owned()), None)
}

pub fn gregorian_deadline(s: &str) -> FestivalDeadline {
    FestivalDeadline::new(None, Some(s.to_owned()))
}
