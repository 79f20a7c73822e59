//! The `gestation-rs` crate is the date-arithmetic core of a pregnancy-week calculator: it dates a
//! pregnancy from the last menstrual period (LMP), computes gestational age and the estimated due
//! date, and lays out the six-week month grids a calendar view renders.
//!
//! The crate deals in civil calendar dates only. [`CalendarDate`] stores a single Gregorian date
//! with no time-of-day or time zone attached; every day is exactly one day long.
//!
//! ## Examples
//!
//! Making a date:
//!
//! ```rs
//! use gestation::CalendarDate;
//!
//! let lmp = CalendarDate::new(2025, 8, 18);
//! ```
//!
//! You can also use the `date!` macro to get a syntax resembling a date literal:
//!
//! ```rs
//! use gestation::date;
//!
//! let lmp = date! { 2025-08-18 };
//! ```
//!
//! Dating a pregnancy:
//!
//! ```rs
//! use gestation::Pregnancy;
//! use gestation::date;
//!
//! let pregnancy = Pregnancy::new(date! { 2025-08-18 });
//! let age = pregnancy.gestational_age(date! { 2025-10-06 });
//! assert_eq!((age.weeks, age.days), (7, 0));
//! ```

use std::fmt;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

/// Construct a date from a `YYYY-MM-DD` literal.
///
/// ## Examples
///
/// ```
/// # use gestation::date;
/// let d = date! { 2025-08-18 };
/// assert_eq!(d.year(), 2025);
/// assert_eq!(d.month(), 8);
/// assert_eq!(d.day(), 18);
/// ```
#[macro_export]
macro_rules! date {
  ($y:literal-$m:literal-$d:literal) => {{
    #[allow(clippy::zero_prefixed_literal)]
    {
      $crate::CalendarDate::new($y, $m, $d)
    }
  }};
}

mod format;
mod grid;
mod interval;
pub mod iter;
mod parse;
mod pregnancy;
#[cfg(feature = "serde")]
mod serde;
mod state;
mod utils;
mod weekday;

pub use format::month_name;
pub use grid::GRID_CELLS;
pub use grid::MonthCell;
pub use grid::MonthCursor;
pub use grid::MonthGrid;
pub use interval::DateInterval;
pub use parse::ParseError;
pub use pregnancy::GestationalAge;
pub use pregnancy::Pregnancy;
pub use pregnancy::TERM_DAYS;
pub use state::DEFAULT_LMP;
pub use state::DayMarks;
pub use state::GestationStatus;
pub use state::Snapshot;
pub use state::Tracker;
pub use weekday::Weekday;

/// A representation of a single civil date.
///
/// Two dates are equal iff their year, month, and day all match.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct CalendarDate(i32);

impl CalendarDate {
  /// Construct a new `CalendarDate` from the provided year, month, and day.
  ///
  /// ## Examples
  ///
  /// ```
  /// use gestation::CalendarDate;
  /// let date = CalendarDate::new(2025, 8, 18);
  /// assert_eq!(date.year(), 2025);
  /// assert_eq!(date.month(), 8);
  /// assert_eq!(date.day(), 18);
  /// ```
  ///
  /// ## Panic
  ///
  /// This function panics if it receives "out-of-bounds" values (e.g. "March 32" or "February
  /// 30"). Use [`CalendarDate::overflowing_new`] to have such values normalized instead.
  pub const fn new(year: i16, month: u8, day: u8) -> Self {
    assert!(month >= 1 && month <= 12, "Month out-of-bounds");
    assert!(day >= 1 && day <= utils::days_in_month(year, month), "Day out-of-bounds");

    // The algorithm to convert from a civil year/month/day to the number of days that have elapsed
    // since the epoch is taken from here:
    // https://howardhinnant.github.io/date_algorithms.html#days_from_civil
    let year = year as i32 - if month <= 2 { 1 } else { 0 };
    let month = month as i32;
    let day = day as i32;
    let era: i32 = if year >= 0 { year } else { year - 399 } / 400;
    let year_of_era = year - era * 400;
    let day_of_year = (153 * (if month > 2 { month - 3 } else { month + 9 }) + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    Self(era * 146097 + day_of_era - 719468)
  }

  /// Construct a new `CalendarDate` from the provided year, month, and day, accepting "overflow"
  /// values that name an impossible date and canonicalizing them to real ones.
  ///
  /// For example, it's legal to send "March 32" to this function, and it will yield April 1 of the
  /// same year; "February 30" rolls into early March. A `month` or `day` value of zero conforms to
  /// the month or day (respectively) prior to the first.
  ///
  /// This is the normalization the text parser leans on: a parsed day/month/year triple is pushed
  /// through here and rejected unless the canonical date reads back identically.
  pub const fn overflowing_new(year: i16, month: u8, day: u8) -> Self {
    let mut year = year;
    let mut month = month;
    let mut day = day;

    // Handle month overflows.
    while month > 12 {
      year += 1;
      month -= 12;
    }
    if day == 0 {
      if month <= 1 {
        year -= 1;
        month += 11;
      } else {
        month -= 1;
      }
      day = utils::days_in_month(year, month);
    }
    if month == 0 {
      year -= 1;
      month = 12;
    }
    while day > utils::days_in_month(year, month) {
      day -= utils::days_in_month(year, month);
      month += 1;
      if month == 13 {
        year += 1;
        month = 1;
      }
    }

    // Return the date.
    Self::new(year, month, day)
  }

  /// Construct a new `CalendarDate` based on the Unix timestamp.
  ///
  /// ## Examples
  ///
  /// ```
  /// use gestation::CalendarDate;
  /// use gestation::date;
  ///
  /// let day_one = CalendarDate::from_timestamp(0);
  /// assert_eq!(day_one, date! { 1970-01-01 });
  /// let later = CalendarDate::from_timestamp(20_318 * 86_400);
  /// assert_eq!(later, date! { 2025-08-18 });
  /// ```
  pub const fn from_timestamp(unix_timestamp: i64) -> Self {
    let day_count = unix_timestamp.div_euclid(86_400) as i32;
    Self(day_count)
  }

  /// The date representing today, in UTC.
  ///
  /// ## Panic
  ///
  /// This function will panic if the system clock is set to a time prior to January 1, 1970.
  pub fn today_utc() -> Self {
    let now = now().duration_since(UNIX_EPOCH).expect("system time set prior to 1970").as_secs();
    Self::from_timestamp(now as i64)
  }
}

impl CalendarDate {
  /// The year, month, and day for the given date.
  pub(crate) const fn ymd(&self) -> (i16, u8, u8) {
    // The algorithm to convert from the number of days that have elapsed since the epoch back to a
    // civil year/month/day is taken from here:
    // https://howardhinnant.github.io/date_algorithms.html#civil_from_days
    let shifted = self.0 + 719468; // Days from March 1, 0 A.D.
    let era = if shifted >= 0 { shifted } else { shifted - 146_096 } / 146_097;
    let doe = shifted - era * 146_097; // day of era: [0, 146_097)
    let year_of_era = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let year = year_of_era + era * 400;
    let day_of_year = doe - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let mp = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    (year as i16 + if month <= 2 { 1 } else { 0 }, month as u8, day as u8)
  }

  /// Returns the year number in the calendar date.
  #[inline]
  pub const fn year(&self) -> i16 {
    self.ymd().0
  }

  /// Returns the month number, starting from 1.
  ///
  /// The return value ranges from 1 to 12.
  #[inline]
  pub const fn month(&self) -> u8 {
    self.ymd().1
  }

  /// Returns the day of the month, starting from 1.
  ///
  /// The return value ranges from 1 to 31. (The last day of the month differs by months.)
  #[inline]
  pub const fn day(&self) -> u8 {
    self.ymd().2
  }

  /// Return the weekday corresponding to the given date.
  #[inline]
  pub const fn weekday(&self) -> Weekday {
    // The epoch day, 1970-01-01, was a Thursday.
    match (self.0 + 4).rem_euclid(7) {
      0 => Weekday::Sunday,
      1 => Weekday::Monday,
      2 => Weekday::Tuesday,
      3 => Weekday::Wednesday,
      4 => Weekday::Thursday,
      5 => Weekday::Friday,
      6 => Weekday::Saturday,
      #[cfg(not(tarpaulin_include))]
      _ => panic!("Unreachable: rem_euclid(7) is always within 0 to 6"),
    }
  }
}

impl CalendarDate {
  /// An iterator of dates beginning with this date, and ending with the provided end date
  /// (inclusive).
  pub fn iter_through(&self, end: CalendarDate) -> iter::DateIterator {
    iter::DateIterator::new(self, end)
  }
}

impl CalendarDate {
  /// The maximum date that can be represented.
  pub const MAX: Self = CalendarDate::new(32767, 12, 31);
  /// The minimum date that can be represented.
  pub const MIN: Self = CalendarDate::new(-32768, 1, 1);
}

impl fmt::Debug for CalendarDate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(self, f)
  }
}

#[cfg(not(test))]
fn now() -> SystemTime {
  SystemTime::now()
}

#[cfg(test)]
use tests::now;
