/// Number of months in both calendars
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for Farvardin, the first Jalali month
pub const FARVARDIN: u8 = 1;
/// Month number for Esfand, the last Jalali month
pub const ESFAND: u8 = 12;
/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Last month of the first half of the Jalali year (31-day months)
pub const LAST_LONG_MONTH: u8 = 6;
/// Last month of the 30-day block of the Jalali year
pub const LAST_MEDIUM_MONTH: u8 = 11;

/// Days in each of Farvardin..=Shahrivar
pub const LONG_MONTH_DAYS: u8 = 31;
/// Days in each of Mehr..=Bahman
pub const MEDIUM_MONTH_DAYS: u8 = 30;
/// Days in Esfand of a common year
pub const ESFAND_DAYS: u8 = 29;
/// Days in Esfand of a leap year
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Jalali years at which the leap pattern restarts (Borkowski break table).
/// The last entry is exclusive.
pub(crate) const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

/// Earliest Jalali year covered by the break table
pub const MIN_SUPPORTED_JALALI_YEAR: i32 = BREAKS[0];
/// Latest Jalali year covered by the break table (inclusive)
pub const MAX_SUPPORTED_JALALI_YEAR: i32 = BREAKS[BREAKS.len() - 1] - 1;

/// Offset between a Jalali year and the Gregorian year in which it starts
pub(crate) const JALALI_GREGORIAN_YEAR_OFFSET: i32 = 621;

/// Lower bound of the default supported year window for deadlines
pub const DEFAULT_MIN_JALALI_YEAR: i32 = 1300;
/// Upper bound of the default supported year window for deadlines
pub const DEFAULT_MAX_JALALI_YEAR: i32 = 1500;

/// Earliest year a validated date may carry, on either calendar
pub const MIN_YEAR: i32 = -99_999;
/// Latest year a validated date may carry, on either calendar
pub const MAX_YEAR: i32 = 99_999;

/// Longest year component the parsers accept
pub const MAX_YEAR_DIGITS: usize = 5;

/// Days in a week
pub const DAYS_IN_WEEK: usize = 7;

/// Deadlines closer than this many days are urgent
pub const URGENT_DAYS: i32 = 3;
/// Deadlines up to this many days away are near
pub const NEAR_DAYS: i32 = 10;

/// Canonical Jalali date separator
pub const JALALI_SEPARATOR: char = '/';
/// Gregorian date separator (ISO 8601 format), also accepted for Jalali input
pub const DATE_SEPARATOR: char = '-';

/// Jalali month names, Farvardin first
pub const PERSIAN_MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// One-letter weekday labels, Saturday first
pub const PERSIAN_WEEK_DAYS_SHORT: [&str; 7] = ["ش", "ی", "د", "س", "چ", "پ", "ج"];
