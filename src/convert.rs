//! Jalali ↔ Gregorian conversion.
//!
//! Uses the break-year table published by Borkowski (the "jalaali" algorithm)
//! rather than the plain 33-year rule, which misplaces leap years near the
//! table's breaks. All arithmetic goes through Julian Day Numbers and uses
//! truncating integer division. Years in
//! [`MIN_SUPPORTED_JALALI_YEAR`]`..=`[`MAX_SUPPORTED_JALALI_YEAR`] are exact;
//! outside that window the last leap pattern is extrapolated.

use crate::consts::{
    BREAKS, ESFAND_DAYS, ESFAND_DAYS_LEAP, JALALI_GREGORIAN_YEAR_OFFSET, LAST_LONG_MONTH,
    LAST_MEDIUM_MONTH, LONG_MONTH_DAYS, MAX_SUPPORTED_JALALI_YEAR, MEDIUM_MONTH_DAYS,
    MIN_SUPPORTED_JALALI_YEAR,
};
use crate::{GregorianDate, JalaliDate, ParseError};

/// Error type for range-checked conversions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// Year not covered by the break table.
    #[error("Jalali year {0} is outside the supported range {min}..={max}", min = MIN_SUPPORTED_JALALI_YEAR, max = MAX_SUPPORTED_JALALI_YEAR)]
    UnsupportedYear(i32),

    /// Input is not a real calendar date.
    #[error(transparent)]
    InvalidDate(#[from] ParseError),
}

/// Position of a Jalali year within the break table.
struct JalCal {
    /// Years since the last leap year (0 means `jy` itself is leap)
    leap: i64,
    /// Gregorian year in which `jy` begins
    gy: i64,
    /// March day of that Gregorian year on which Farvardin 1 falls
    march: i64,
}

// Day arithmetic runs in i64 so no i32 input can overflow it. Results are
// narrowed at the public boundary.

fn jal_cal(jy: i64) -> JalCal {
    let gy = jy + i64::from(JALALI_GREGORIAN_YEAR_OFFSET);
    let mut leap_j = -14;
    let mut jp = i64::from(BREAKS[0]);
    let mut jump = 0;

    for &jm in &BREAKS[1..] {
        let jm = i64::from(jm);
        jump = jm - jp;
        if jy < jm {
            break;
        }
        leap_j += jump / 33 * 8 + jump % 33 / 4;
        jp = jm;
    }

    let mut n = jy - jp;
    // Jalali leap days from AD 621 to the start of jy
    leap_j += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_j += 1;
    }
    // Gregorian leap days up to gy
    let leap_g = gy / 4 - (gy / 100 + 1) * 3 / 4 - 150;
    let march = 20 + leap_j - leap_g;

    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let mut leap = ((n + 1) % 33 - 1) % 4;
    if leap == -1 {
        leap = 4;
    }

    JalCal { leap, gy, march }
}

fn g2d(gy: i64, gm: i64, gd: i64) -> i64 {
    let d = (gy + (gm - 8) / 6 + 100_100) * 1461 / 4 + (153 * ((gm + 9) % 12) + 2) / 5 + gd
        - 34_840_408;
    d - (gy + 100_100 + (gm - 8) / 6) / 100 * 3 / 4 + 752
}

fn d2g(jdn: i64) -> GregorianDate {
    let mut j = 4 * jdn + 139_361_631;
    j += (4 * jdn + 183_187_720) / 146_097 * 3 / 4 * 4 - 3908;
    let i = j % 1461 / 4 * 5 + 308;
    let gd = i % 153 / 5 + 1;
    let gm = i / 153 % 12 + 1;
    let gy = j / 1461 - 100_100 + (8 - gm) / 6;
    GregorianDate::from_parts(gy as i32, gm as u8, gd as u8)
}

fn j2d(jy: i64, jm: u8, jd: u8) -> i64 {
    let r = jal_cal(jy);
    let jm = i64::from(jm);
    g2d(r.gy, 3, r.march) + (jm - 1) * 31 - jm / 7 * (jm - 7) + i64::from(jd) - 1
}

fn d2j(jdn: i64) -> JalaliDate {
    let gy = i64::from(d2g(jdn).gy());
    let mut jy = gy - i64::from(JALALI_GREGORIAN_YEAR_OFFSET);
    let r = jal_cal(jy);
    let farvardin_first = g2d(gy, 3, r.march);

    // Days since 1 Farvardin
    let mut k = jdn - farvardin_first;
    if k >= 0 {
        if k <= 185 {
            return JalaliDate::from_parts(jy as i32, (1 + k / 31) as u8, (k % 31 + 1) as u8);
        }
        k -= 186;
    } else {
        // Tail of the previous Jalali year
        jy -= 1;
        k += 179;
        if r.leap == 1 {
            k += 1;
        }
    }
    JalaliDate::from_parts(jy as i32, (7 + k / 30) as u8, (k % 30 + 1) as u8)
}

fn week_day_of(day: i64) -> u8 {
    // JDN 0 was a Monday
    (day + 2).rem_euclid(7) as u8
}

/// Julian Day Number of a proleptic Gregorian date
pub fn gregorian_to_jdn(gy: i32, gm: u8, gd: u8) -> i32 {
    g2d(i64::from(gy), i64::from(gm), i64::from(gd)) as i32
}

/// Proleptic Gregorian date of a Julian Day Number
pub fn jdn_to_gregorian(jdn: i32) -> GregorianDate {
    d2g(i64::from(jdn))
}

pub(crate) fn jalaali_to_jdn(jy: i32, jm: u8, jd: u8) -> i32 {
    j2d(i64::from(jy), jm, jd) as i32
}

pub(crate) fn jdn_to_jalaali(jdn: i32) -> JalaliDate {
    d2j(i64::from(jdn))
}

/// Saturday = 0 through Friday = 6
pub(crate) fn week_day_of_jdn(jdn: i32) -> u8 {
    week_day_of(i64::from(jdn))
}

/// Converts a Gregorian date to its Jalali equivalent.
///
/// The input must be a real Gregorian date; it is not re-validated.
pub fn to_jalaali(gy: i32, gm: u8, gd: u8) -> JalaliDate {
    d2j(g2d(i64::from(gy), i64::from(gm), i64::from(gd)))
}

/// Converts a Jalali date to its Gregorian equivalent.
///
/// The input must be a valid Jalali date; it is not re-validated.
pub fn to_gregorian(jy: i32, jm: u8, jd: u8) -> GregorianDate {
    d2g(j2d(i64::from(jy), jm, jd))
}

/// Whether the break table covers `jy` exactly
pub const fn is_supported_jalali_year(jy: i32) -> bool {
    jy >= MIN_SUPPORTED_JALALI_YEAR && jy <= MAX_SUPPORTED_JALALI_YEAR
}

/// [`to_jalaali`] that validates the input and the resulting year.
///
/// # Errors
/// `ConvertError::InvalidDate` for impossible dates, `ConvertError::UnsupportedYear`
/// when the result falls outside the break table.
pub fn checked_to_jalaali(gy: i32, gm: u8, gd: u8) -> Result<JalaliDate, ConvertError> {
    let date = GregorianDate::new(gy, gm, gd)?;
    let jalali = date.to_jalaali();
    if !is_supported_jalali_year(jalali.jy()) {
        return Err(ConvertError::UnsupportedYear(jalali.jy()));
    }
    Ok(jalali)
}

/// [`to_gregorian`] that validates the input first.
///
/// # Errors
/// `ConvertError::UnsupportedYear` outside the break table, `ConvertError::InvalidDate`
/// for impossible dates.
pub fn checked_to_gregorian(jy: i32, jm: u8, jd: u8) -> Result<GregorianDate, ConvertError> {
    if !is_supported_jalali_year(jy) {
        return Err(ConvertError::UnsupportedYear(jy));
    }
    Ok(JalaliDate::new(jy, jm, jd)?.to_gregorian())
}

/// Whether Esfand of `jy` has 30 days
pub fn is_leap_jalaali_year(jy: i32) -> bool {
    jal_cal(i64::from(jy)).leap == 0
}

/// Days in Jalali month `jm` of year `jy`
pub fn jalaali_month_length(jy: i32, jm: u8) -> u8 {
    if jm <= LAST_LONG_MONTH {
        LONG_MONTH_DAYS
    } else if jm <= LAST_MEDIUM_MONTH {
        MEDIUM_MONTH_DAYS
    } else if is_leap_jalaali_year(jy) {
        ESFAND_DAYS_LEAP
    } else {
        ESFAND_DAYS
    }
}

/// Day of week with the Persian layout: Saturday = 0 through Friday = 6.
pub fn week_day(gy: i32, gm: u8, gd: u8) -> u8 {
    week_day_of(g2d(i64::from(gy), i64::from(gm), i64::from(gd)))
}
