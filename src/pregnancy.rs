//! Gestational-age arithmetic against an LMP reference date.

use crate::CalendarDate;
use crate::interval::DateInterval;

/// The length of a full-term pregnancy in days: 40 weeks from the LMP.
pub const TERM_DAYS: i32 = 280;

/// A pregnancy dated from the last menstrual period.
///
/// Everything here is derived arithmetic over the LMP; nothing is cached. The due date in
/// particular is always `lmp + 280 days`, never stored.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Pregnancy {
  lmp: CalendarDate,
}

impl Pregnancy {
  /// Date a pregnancy from the given LMP.
  pub const fn new(lmp: CalendarDate) -> Self {
    Self { lmp }
  }

  /// The last menstrual period date this pregnancy is dated from.
  pub const fn lmp(&self) -> CalendarDate {
    self.lmp
  }

  /// The estimated due date: the LMP plus 280 days, rolling over month and year boundaries.
  pub fn due_date(&self) -> CalendarDate {
    self.lmp + DateInterval::new(TERM_DAYS)
  }

  /// The gestational age on the given date.
  pub fn gestational_age(&self, on: CalendarDate) -> GestationalAge {
    GestationalAge::from_diff((on - self.lmp).days())
  }

  /// Whole days from `on` until the due date; positive while the due date is still ahead,
  /// negative once past it.
  pub fn days_until_due(&self, on: CalendarDate) -> i32 {
    (self.due_date() - on).days()
  }
}

/// Elapsed time since the LMP, broken down as completed weeks plus leftover days.
///
/// Invariant: `weeks * 7 + days == diff_in_days.abs()`, with `days` in `0..=6`. For a date before
/// the LMP the breakdown describes the magnitude of the gap, not a negative age; displays on that
/// branch show only `diff_in_days`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct GestationalAge {
  /// Whole days since the LMP; negative when the dated day precedes it.
  pub diff_in_days: i32,
  /// Completed weeks of the absolute day span.
  pub weeks: i32,
  /// Leftover days beyond the completed weeks, `0..=6`.
  pub days: i32,
}

impl GestationalAge {
  const fn from_diff(diff_in_days: i32) -> Self {
    Self { diff_in_days, weeks: diff_in_days.abs() / 7, days: diff_in_days.abs() % 7 }
  }

  /// True when the dated day falls before the LMP.
  pub const fn is_before_lmp(&self) -> bool {
    self.diff_in_days < 0
  }

  /// True when the dated day has reached week 40, i.e. is on or past the due date.
  ///
  /// Exactly one of `is_before_lmp`, `is_past_due`, and "in range" describes any day span.
  pub const fn is_past_due(&self) -> bool {
    self.diff_in_days >= TERM_DAYS
  }

  /// Days past the due date: zero on the due date itself, negative before it.
  pub const fn days_overdue(&self) -> i32 {
    self.diff_in_days - TERM_DAYS
  }
}
