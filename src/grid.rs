//! Six-week month grids for calendar rendering.

use crate::CalendarDate;
use crate::format;
use crate::interval::DateInterval;

/// The number of cells in a rendered month: six full Sunday-to-Saturday weeks.
pub const GRID_CELLS: usize = 42;

/// One day cell within a month grid.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct MonthCell {
  pub date: CalendarDate,
  /// The day-of-month number the cell is labeled with.
  pub day_of_month: u8,
  /// Whether the cell belongs to the target month, as opposed to the leading or trailing days of
  /// its neighbors.
  pub is_current_month: bool,
}

/// The [`GRID_CELLS`]-cell grid for one target month.
///
/// Building a grid is a pure function of `(year, month)`: the 1st of the month is stepped back to
/// the preceding (or same) Sunday, and 42 consecutive days are emitted from there, so the grid
/// always spans six whole weeks and includes spillover from the neighboring months.
#[derive(Clone, Debug)]
pub struct MonthGrid {
  year: i16,
  month: u8,
  cells: Vec<MonthCell>,
}

impl MonthGrid {
  /// Build the grid for the given year and 1-indexed month.
  pub fn new(year: i16, month: u8) -> Self {
    let first = CalendarDate::new(year, month, 1);
    let start = first - DateInterval::new(first.weekday() as i32);
    let end = start + DateInterval::new(GRID_CELLS as i32 - 1);
    let cells = start
      .iter_through(end)
      .map(|date| MonthCell {
        date,
        day_of_month: date.day(),
        is_current_month: date.year() == year && date.month() == month,
      })
      .collect();
    Self { year, month, cells }
  }

  /// The grid's target year.
  pub const fn year(&self) -> i16 {
    self.year
  }

  /// The grid's target month, 1-indexed.
  pub const fn month(&self) -> u8 {
    self.month
  }

  /// The 42 cells, in row-major order starting from the top-left Sunday.
  pub fn cells(&self) -> &[MonthCell] {
    &self.cells
  }
}

/// Which month a calendar view is currently showing.
///
/// This is the month-navigation state: a fresh view opens on the month containing the selected
/// date, and the prev/next controls step the cursor with year rollover.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct MonthCursor {
  pub year: i16,
  /// 1-indexed month.
  pub month: u8,
}

impl MonthCursor {
  /// The cursor showing the month that contains `date`.
  pub const fn containing(date: CalendarDate) -> Self {
    Self { year: date.year(), month: date.month() }
  }

  /// One month earlier, rolling the year backward from January.
  pub const fn prev(self) -> Self {
    match self.month {
      1 => Self { year: self.year - 1, month: 12 },
      _ => Self { year: self.year, month: self.month - 1 },
    }
  }

  /// One month later, rolling the year forward from December.
  pub const fn next(self) -> Self {
    match self.month {
      12 => Self { year: self.year + 1, month: 1 },
      _ => Self { year: self.year, month: self.month + 1 },
    }
  }

  /// The grid for the month under the cursor.
  pub fn grid(self) -> MonthGrid {
    MonthGrid::new(self.year, self.month)
  }

  /// The calendar heading for this month, e.g. `August 2025`.
  pub fn title(self) -> String {
    format!("{} {}", format::month_name(self.month - 1), self.year)
  }
}
