use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Neg;
use std::ops::Sub;
use std::ops::SubAssign;

use crate::CalendarDate;

/// An interval between two civil dates, with day-level precision only.
///
/// Subtracting two dates yields an interval; adding an interval to a date shifts it by whole
/// calendar days, rolling over month and year boundaries as needed. Because dates are stored as
/// day counts, a negative span always floors toward negative infinity: the day before a date is
/// `-1` days away, never `0`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct DateInterval {
  pub days: i32,
}

impl DateInterval {
  /// A representation of a given number of days.
  #[inline]
  pub const fn new(days: i32) -> Self {
    Self { days }
  }

  /// The number of days this interval represents.
  pub const fn days(&self) -> i32 {
    self.days
  }
}

impl Neg for DateInterval {
  type Output = Self;

  fn neg(self) -> Self::Output {
    Self { days: -self.days }
  }
}

impl Add<DateInterval> for CalendarDate {
  type Output = CalendarDate;

  /// Return a new `CalendarDate` that is the given number of days later.
  fn add(self, interval: DateInterval) -> Self::Output {
    CalendarDate(self.0 + interval.days)
  }
}

impl AddAssign<DateInterval> for CalendarDate {
  fn add_assign(&mut self, interval: DateInterval) {
    self.0 += interval.days;
  }
}

impl Sub<DateInterval> for CalendarDate {
  type Output = CalendarDate;

  /// Return a new `CalendarDate` that is the given number of days earlier.
  fn sub(self, interval: DateInterval) -> Self::Output {
    CalendarDate(self.0 - interval.days)
  }
}

impl SubAssign<DateInterval> for CalendarDate {
  fn sub_assign(&mut self, interval: DateInterval) {
    self.0 -= interval.days;
  }
}

impl Sub<CalendarDate> for CalendarDate {
  type Output = DateInterval;

  /// The number of whole days from `rhs` to `self`; negative when `rhs` is later.
  fn sub(self, rhs: CalendarDate) -> Self::Output {
    DateInterval::new(self.0 - rhs.0)
  }
}

#[cfg(test)]
#[allow(clippy::zero_prefixed_literal)]
mod tests {
  use assert2::check;

  use super::*;

  #[test]
  fn test_add_sub() {
    macro_rules! prove {
      ($y1:literal-$m1:literal-$d1:literal + $dur:literal
          == $y2:literal-$m2:literal-$d2:literal) => {
        // Check `+`.
        check!(
          CalendarDate::new($y1, $m1, $d1) + DateInterval::new($dur)
            == CalendarDate::new($y2, $m2, $d2)
        );

        // Check `+=`.
        let mut date = CalendarDate::new($y1, $m1, $d1);
        date += DateInterval::new($dur);
        check!(date == CalendarDate::new($y2, $m2, $d2));
      };
      ($y1:literal-$m1:literal-$d1:literal - $dur:literal
          == $y2:literal-$m2:literal-$d2:literal) => {
        // Check `-`.
        check!(
          CalendarDate::new($y1, $m1, $d1) - DateInterval::new($dur)
            == CalendarDate::new($y2, $m2, $d2)
        );

        // Check `-=`.
        let mut date = CalendarDate::new($y1, $m1, $d1);
        date -= DateInterval::new($dur);
        check!(date == CalendarDate::new($y2, $m2, $d2));
      };
    }

    // Movement by a day.
    prove! { 2024-12-31 + 1 == 2025-01-01 };
    prove! { 2025-01-01 - 1 == 2024-12-31 };
    prove! { 2025-02-28 + 1 == 2025-03-01 };
    prove! { 2024-02-28 + 1 == 2024-02-29 };
    prove! { 2025-08-18 + 1 == 2025-08-19 };
    prove! { 2025-08-18 - 1 == 2025-08-17 };

    // Movement by a week.
    prove! { 2025-08-18 + 7 == 2025-08-25 };
    prove! { 2025-08-28 + 7 == 2025-09-04 };

    // Movement by a full term.
    prove! { 2025-08-18 + 280 == 2026-05-25 };
    prove! { 2025-01-01 + 280 == 2025-10-08 };
    prove! { 2024-01-01 + 280 == 2024-10-07 }; // Leap year: one day earlier.
    prove! { 2026-05-25 - 280 == 2025-08-18 };
  }

  #[test]
  fn test_sub_dates() {
    check!(date! { 2025-08-18 } - date! { 2025-08-18 } == DateInterval::new(0));
    check!(date! { 2025-08-19 } - date! { 2025-08-18 } == DateInterval::new(1));
    check!(date! { 2025-08-17 } - date! { 2025-08-18 } == DateInterval::new(-1));
    check!(date! { 2025-08-11 } - date! { 2025-08-18 } == DateInterval::new(-7));
    check!(date! { 2026-01-02 } - date! { 2025-12-30 } == DateInterval::new(3));
    check!(date! { 2025-12-30 } - date! { 2026-01-02 } == DateInterval::new(-3));
    check!(date! { 2026-05-25 } - date! { 2025-08-18 } == DateInterval::new(280));

    // Identity
    check!(
      date! { 2025-08-18 } + (date! { 2025-10-06 } - date! { 2025-08-18 }) == date! { 2025-10-06 }
    );
  }
}
