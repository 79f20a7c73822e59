//! Session state: the two editable dates and everything derived from them.

use crate::CalendarDate;
use crate::pregnancy::GestationalAge;
use crate::pregnancy::Pregnancy;

/// The LMP value a fresh session starts from.
pub const DEFAULT_LMP: CalendarDate = date! { 2025-08-18 };

/// The owned session state: an LMP date and a currently selected date.
///
/// Both fields always hold valid dates and are replaced only through the two setters; free-text
/// validation happens in the edit controls, via parsing, before a setter ever fires. Everything
/// else the presentation layer shows is derived on demand through [`Tracker::snapshot`] and
/// [`Tracker::marks`] — nothing derived is stored, so a setter can never leave stale values
/// behind.
#[derive(Clone, Debug)]
pub struct Tracker {
  lmp: CalendarDate,
  selected: CalendarDate,
}

impl Tracker {
  /// A fresh session: the fixed default LMP, with today selected.
  pub fn new() -> Self {
    Self { lmp: DEFAULT_LMP, selected: CalendarDate::today_utc() }
  }

  /// A session with explicit dates, for hosts that manage their own clock.
  pub const fn with_dates(lmp: CalendarDate, selected: CalendarDate) -> Self {
    Self { lmp, selected }
  }

  /// The current LMP date.
  pub const fn lmp(&self) -> CalendarDate {
    self.lmp
  }

  /// The currently selected date.
  pub const fn selected(&self) -> CalendarDate {
    self.selected
  }

  /// Replace the LMP date.
  pub fn set_lmp(&mut self, date: CalendarDate) {
    #[cfg(feature = "log")]
    log::debug!(from:% = self.lmp, to:% = date; "LMP date replaced");
    self.lmp = date;
  }

  /// Replace the selected date.
  pub fn set_selected(&mut self, date: CalendarDate) {
    #[cfg(feature = "log")]
    log::debug!(from:% = self.selected, to:% = date; "selected date replaced");
    self.selected = date;
  }

  /// Recompute every derived value for the current pair of dates.
  pub fn snapshot(&self) -> Snapshot {
    let pregnancy = Pregnancy::new(self.lmp);
    let age = pregnancy.gestational_age(self.selected);
    let status = if age.is_before_lmp() {
      GestationStatus::BeforeLmp
    } else if age.is_past_due() {
      GestationStatus::Overdue { days_overdue: age.days_overdue() }
    } else {
      GestationStatus::InProgress {
        weeks: age.weeks,
        days: age.days,
        days_until_due: pregnancy.days_until_due(self.selected),
      }
    };
    Snapshot {
      lmp: self.lmp,
      selected: self.selected,
      due_date: pregnancy.due_date(),
      days_since_lmp: age.diff_in_days,
      age,
      status,
    }
  }

  /// The highlighting flags for one grid cell.
  pub fn marks(&self, date: CalendarDate) -> DayMarks {
    DayMarks {
      is_lmp: date == self.lmp,
      is_due_date: date == Pregnancy::new(self.lmp).due_date(),
      is_selected: date == self.selected,
    }
  }
}

impl Default for Tracker {
  fn default() -> Self {
    Self::new()
  }
}

/// A read-only view of everything derived from the current state, taken at a single instant.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Snapshot {
  pub lmp: CalendarDate,
  pub selected: CalendarDate,
  /// Always available, whichever status branch applies.
  pub due_date: CalendarDate,
  /// Always available; negative when the selected date precedes the LMP.
  pub days_since_lmp: i32,
  pub age: GestationalAge,
  pub status: GestationStatus,
}

/// The three-way display decision for the gestational-age panel. Exactly one variant applies to
/// any pair of dates.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GestationStatus {
  /// The selected date precedes the LMP: show a warning, with no week breakdown and no
  /// days-until-due figure.
  BeforeLmp,
  /// On or past week 40: show an overdue warning instead of a countdown.
  Overdue { days_overdue: i32 },
  /// Within the 280-day term: the `Week {weeks} + {days} days` reading, with the countdown to the
  /// due date.
  InProgress { weeks: i32, days: i32, days_until_due: i32 },
}

/// Highlighting flags for one calendar day. A single day can carry several marks at once.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DayMarks {
  pub is_lmp: bool,
  pub is_due_date: bool,
  pub is_selected: bool,
}
