//! Rendering in the crate's one fixed text convention, `DD.MM.YYYY`.

use std::fmt;

use crate::CalendarDate;

impl fmt::Display for CalendarDate {
  /// Render the date as zero-padded `DD.MM.YYYY`.
  ///
  /// This is the exact inverse of parsing: `format(d)` always parses back to `d`.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let (year, month, day) = self.ymd();
    write!(f, "{day:02}.{month:02}.{year:04}")
  }
}

macro_rules! month_names {
  ($($num:literal => $name:ident)*) => {
    /// The English name of a month, indexed from zero (0 = January, 11 = December).
    ///
    /// Callers guarantee the index is within `0..=11`; anything else is a programming error and
    /// panics.
    pub const fn month_name(month0: u8) -> &'static str {
      match month0 {
        $($num => stringify!($name),)*
        #[cfg(not(tarpaulin_include))]
        _ => panic!("Fictitious month"),
      }
    }
  }
}
month_names! {
   0 => January
   1 => February
   2 => March
   3 => April
   4 => May
   5 => June
   6 => July
   7 => August
   8 => September
   9 => October
  10 => November
  11 => December
}
