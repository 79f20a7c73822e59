//! Parsing the crate's one fixed text convention, `DD.MM.YYYY`.

use std::fmt;
use std::str::FromStr;

use crate::CalendarDate;

impl FromStr for CalendarDate {
  type Err = ParseError;

  /// Parse a date written as `D.M.YYYY`: a one- or two-digit day, a one- or two-digit month, and
  /// a four-digit year, separated by literal dots. Surrounding whitespace is ignored.
  ///
  /// Validation happens in two stages. Components are range-checked first (month 1-12, day 1-31);
  /// the triple is then normalized through [`CalendarDate::overflowing_new`] and rejected unless
  /// the canonical date reads back with exactly the components that were written. That second
  /// stage is what rejects impossible dates such as "30.02.2025", which normalization would
  /// otherwise silently roll into March.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    macro_rules! fail {
      ($s:ident, $r:literal) => {
        ParseError { src: $s.into(), reason: Some($r) }
      };
    }
    macro_rules! assert {
      ($s:ident, $e:expr, $r:literal) => {
        if !($e) {
          Err(fail!($s, $r))?;
        }
      };
    }
    let pieces: Vec<&str> = s.trim().split('.').collect();
    assert!(s, pieces.len() == 3, "Expected three dot-separated components.");
    for piece in &pieces {
      assert!(
        s,
        !piece.is_empty() && piece.bytes().all(|b| b.is_ascii_digit()),
        "Date components must be digits."
      );
    }
    assert!(s, pieces[0].len() <= 2, "Invalid day length.");
    assert!(s, pieces[1].len() <= 2, "Invalid month length.");
    assert!(s, pieces[2].len() == 4, "Invalid year length.");
    let day = pieces[0].parse::<u8>().map_err(|_| fail!(s, "Failed to parse day"))?;
    let month = pieces[1].parse::<u8>().map_err(|_| fail!(s, "Failed to parse month"))?;
    let year = pieces[2].parse::<i16>().map_err(|_| fail!(s, "Failed to parse year"))?;
    assert!(s, month >= 1 && month <= 12, "Month out of range.");
    assert!(s, day >= 1 && day <= 31, "Day out of range.");
    let date = CalendarDate::overflowing_new(year, month, day);
    assert!(s, date.ymd() == (year, month, day), "No such day in that month.");
    Ok(date)
  }
}

/// The error returned when a string does not hold a valid `DD.MM.YYYY` date.
///
/// Parsing never panics on bad input; edit controls check for this error and surface a message
/// without mutating any state.
#[derive(Debug)]
pub struct ParseError {
  src: String,
  reason: Option<&'static str>,
}

impl std::error::Error for ParseError {}

impl fmt::Display for ParseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Not a valid DD.MM.YYYY date: {:?}{}",
      self.src,
      self.reason.map(|r| format!(" ({})", r)).unwrap_or_default(),
    )
  }
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;

  #[test]
  fn test_parse() -> Result<(), ParseError> {
    check!("18.08.2025".parse::<CalendarDate>()? == date! { 2025-08-18 });
    check!("01.01.2025".parse::<CalendarDate>()? == date! { 2025-01-01 });
    check!("29.02.2024".parse::<CalendarDate>()? == date! { 2024-02-29 });
    check!("31.12.2025".parse::<CalendarDate>()? == date! { 2025-12-31 });
    Ok(())
  }

  #[test]
  fn test_parse_unpadded() -> Result<(), ParseError> {
    check!("8.8.2025".parse::<CalendarDate>()? == date! { 2025-08-08 });
    check!("1.12.2025".parse::<CalendarDate>()? == date! { 2025-12-01 });
    check!("25.5.2026".parse::<CalendarDate>()? == date! { 2026-05-25 });
    Ok(())
  }

  #[test]
  fn test_parse_whitespace() -> Result<(), ParseError> {
    check!("  18.08.2025  ".parse::<CalendarDate>()? == date! { 2025-08-18 });
    check!("\t18.08.2025\n".parse::<CalendarDate>()? == date! { 2025-08-18 });
    check!("18. 08.2025".parse::<CalendarDate>().is_err());
    Ok(())
  }

  #[test]
  fn test_parse_rejects() {
    // No such day: February ends before the 30th.
    check!("30.02.2025".parse::<CalendarDate>().is_err());
    check!("29.02.2025".parse::<CalendarDate>().is_err());
    check!("31.04.2025".parse::<CalendarDate>().is_err());

    // Out-of-range components.
    check!("18.13.2025".parse::<CalendarDate>().is_err());
    check!("32.01.2025".parse::<CalendarDate>().is_err());
    check!("0.01.2025".parse::<CalendarDate>().is_err());
    check!("18.0.2025".parse::<CalendarDate>().is_err());

    // Wrong shape entirely.
    check!("".parse::<CalendarDate>().is_err());
    check!("2025.08.18".parse::<CalendarDate>().is_err());
    check!("18/08/2025".parse::<CalendarDate>().is_err());
    check!("18-08-2025".parse::<CalendarDate>().is_err());
    check!("18.08.25".parse::<CalendarDate>().is_err());
    check!("18.08.02025".parse::<CalendarDate>().is_err());
    check!("18.08".parse::<CalendarDate>().is_err());
    check!("18.08.2025.1".parse::<CalendarDate>().is_err());
    check!("+8.08.2025".parse::<CalendarDate>().is_err());
    check!("aa.bb.cccc".parse::<CalendarDate>().is_err());
    check!("foo".parse::<CalendarDate>().map_err(|e| e.to_string()).unwrap_err().contains("foo"));
  }
}
