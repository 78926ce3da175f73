/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Date normalization and the date bounds used in request paths

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Canonical date format accepted by the SIE API
pub const CANONICAL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date-only layouts tried in order.
///
/// Slash-separated dates with the year last are month-first; dash and dot
/// separated ones are day-first.
const DATE_FORMATS: &[&str] = &[
  "%Y-%m-%d",
  "%Y/%m/%d",
  "%Y.%m.%d",
  "%m/%d/%Y",
  "%d-%m-%Y",
  "%d.%m.%Y",
  "%d %B %Y",
  "%d %b %Y",
  "%B %d, %Y",
  "%B %d %Y",
  "%b %d, %Y",
  "%b %d %Y",
  "%d-%b-%Y",
];

const DATETIME_FORMATS: &[&str] = &[
  "%Y-%m-%dT%H:%M:%S%.f",
  "%Y-%m-%d %H:%M:%S%.f",
  "%Y-%m-%dT%H:%M",
  "%Y-%m-%d %H:%M",
];

/// Parse a loosely formatted date.
///
/// Returns `None` for absent or unparsable input; callers fall back to the
/// latest-value sentinel.
pub fn normalize_date(input: Option<&str>) -> Option<NaiveDate> {
  let text = input?.trim();
  if text.is_empty() {
    return None;
  }

  if let Some(date) = relative_date(text) {
    return Some(date);
  }

  if let Some(date) = compact_date(text) {
    return Some(date);
  }

  if let Some(date) = DATE_FORMATS.iter().find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok()) {
    return Some(date);
  }

  if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
    return Some(datetime.date_naive());
  }

  DATETIME_FORMATS
    .iter()
    .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
    .map(|datetime| datetime.date())
}

/// [`normalize_date`] rendered as `YYYY-MM-DD`
pub fn normalize_date_string(input: Option<&str>) -> Option<String> {
  normalize_date(input).map(|date| date.format(CANONICAL_DATE_FORMAT).to_string())
}

fn relative_date(text: &str) -> Option<NaiveDate> {
  let today = || Local::now().date_naive();
  match text.to_ascii_lowercase().as_str() {
    "today" | "now" => Some(today()),
    "yesterday" => today().pred_opt(),
    "tomorrow" => today().succ_opt(),
    _ => None,
  }
}

// YYYYMMDD
fn compact_date(text: &str) -> Option<NaiveDate> {
  if text.len() != 8 || !text.bytes().all(|b| b.is_ascii_digit()) {
    return None;
  }
  let year = text[0..4].parse().ok()?;
  let month = text[4..6].parse().ok()?;
  let day = text[6..8].parse().ok()?;
  NaiveDate::from_ymd_opt(year, month, day)
}

/// One end of a requested date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateBound {
  /// Most recent available value (`oportuno`)
  Latest,
  /// A specific calendar date
  On(NaiveDate),
}

impl DateBound {
  /// Normalize `input`, substituting [`DateBound::Latest`] when it is absent
  /// or cannot be parsed.
  pub fn parse(input: Option<&str>) -> Self {
    normalize_date(input).map_or(DateBound::Latest, DateBound::On)
  }

  /// The date, unless this is the latest-value sentinel
  pub fn date(&self) -> Option<NaiveDate> {
    match self {
      DateBound::Latest => None,
      DateBound::On(date) => Some(*date),
    }
  }
}

impl From<NaiveDate> for DateBound {
  fn from(date: NaiveDate) -> Self {
    DateBound::On(date)
  }
}

impl std::fmt::Display for DateBound {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      DateBound::Latest => write!(f, "{}", crate::LATEST_SENTINEL),
      DateBound::On(date) => write!(f, "{}", date.format(CANONICAL_DATE_FORMAT)),
    }
  }
}

/// Resolved range of a series request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateRange {
  /// No start date: ask for the latest value
  Latest,
  /// Start date only: the API needs the end repeated
  SingleDay(NaiveDate),
  /// Both dates, passed through as given
  Between(NaiveDate, NaiveDate),
}

impl DateRange {
  /// Resolve a range from two bounds. An end without a start is ignored.
  pub fn from_bounds(start: DateBound, end: DateBound) -> Self {
    match (start, end) {
      (DateBound::Latest, _) => DateRange::Latest,
      (DateBound::On(start), DateBound::Latest) => DateRange::SingleDay(start),
      (DateBound::On(start), DateBound::On(end)) => DateRange::Between(start, end),
    }
  }

  /// Resolve a range from loosely formatted input dates
  pub fn resolve(start: Option<&str>, end: Option<&str>) -> Self {
    Self::from_bounds(DateBound::parse(start), DateBound::parse(end))
  }

  /// Path suffix placed after `/datos/`
  pub fn path_suffix(&self) -> String {
    match self {
      DateRange::Latest => crate::LATEST_SENTINEL.to_string(),
      DateRange::SingleDay(day) => {
        let day = day.format(CANONICAL_DATE_FORMAT);
        format!("{}/{}", day, day)
      }
      DateRange::Between(start, end) => format!(
        "{}/{}",
        start.format(CANONICAL_DATE_FORMAT),
        end.format(CANONICAL_DATE_FORMAT)
      ),
    }
  }
}

impl std::fmt::Display for DateRange {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.path_suffix())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  #[test]
  fn test_absent_input_is_absent() {
    assert_eq!(normalize_date(None), None);
    assert_eq!(normalize_date(Some("")), None);
    assert_eq!(normalize_date(Some("   ")), None);
  }

  #[test]
  fn test_canonical_round_trip() {
    for input in ["2020-11-26", "2020-12-01", "1999-01-31", "2024-02-29"] {
      assert_eq!(normalize_date_string(Some(input)).as_deref(), Some(input));
    }
  }

  #[test]
  fn test_lenient_layouts() {
    let cases = [
      ("2020/12/01", ymd(2020, 12, 1)),
      ("2020.12.01", ymd(2020, 12, 1)),
      ("20201201", ymd(2020, 12, 1)),
      ("12/01/2020", ymd(2020, 12, 1)),
      ("01-12-2020", ymd(2020, 12, 1)),
      ("01.12.2020", ymd(2020, 12, 1)),
      ("1 December 2020", ymd(2020, 12, 1)),
      ("December 1, 2020", ymd(2020, 12, 1)),
      ("Dec 1 2020", ymd(2020, 12, 1)),
      ("01-Dec-2020", ymd(2020, 12, 1)),
      ("  2020-11-27  ", ymd(2020, 11, 27)),
    ];
    for (input, expected) in cases {
      assert_eq!(normalize_date(Some(input)), Some(expected), "input: {}", input);
    }
  }

  #[test]
  fn test_datetimes_keep_calendar_date() {
    assert_eq!(normalize_date(Some("2020-12-01T23:30:00Z")), Some(ymd(2020, 12, 1)));
    assert_eq!(normalize_date(Some("2020-12-01T23:30:00-06:00")), Some(ymd(2020, 12, 1)));
    assert_eq!(normalize_date(Some("2020-12-01 08:15:00")), Some(ymd(2020, 12, 1)));
    assert_eq!(normalize_date(Some("2020-12-01T08:15")), Some(ymd(2020, 12, 1)));
  }

  #[test]
  fn test_relative_keywords() {
    let today = Local::now().date_naive();
    let parsed = normalize_date(Some("Today")).unwrap();
    // the clock may tick over midnight between the two reads
    assert!(parsed == today || parsed == today.succ_opt().unwrap());
    assert!(normalize_date(Some("yesterday")).unwrap() < normalize_date(Some("tomorrow")).unwrap());
  }

  #[test]
  fn test_unparsable_input_is_absent() {
    for input in ["not a date", "2020-13-01", "2021-02-29", "32/01/2020", "oportuno", "12345678"] {
      assert_eq!(normalize_date(Some(input)), None, "input: {}", input);
    }
  }

  #[test]
  fn test_date_bound_display() {
    assert_eq!(DateBound::parse(None).to_string(), "oportuno");
    assert_eq!(DateBound::parse(Some("garbage")), DateBound::Latest);
    assert_eq!(DateBound::parse(Some("2020-12-01")).to_string(), "2020-12-01");
    assert_eq!(DateBound::from(ymd(2020, 1, 2)).date(), Some(ymd(2020, 1, 2)));
  }

  #[test]
  fn test_range_shapes() {
    assert_eq!(DateRange::resolve(None, None).path_suffix(), "oportuno");
    assert_eq!(DateRange::resolve(None, Some("2020-11-27")).path_suffix(), "oportuno");
    assert_eq!(
      DateRange::resolve(Some("2020-12-01"), None).path_suffix(),
      "2020-12-01/2020-12-01"
    );
    assert_eq!(
      DateRange::resolve(Some("2020-12-01"), Some("not a date")).path_suffix(),
      "2020-12-01/2020-12-01"
    );
    assert_eq!(
      DateRange::resolve(Some("2020-11-26"), Some("2020-11-27")).to_string(),
      "2020-11-26/2020-11-27"
    );
  }

  #[test]
  fn test_range_is_not_reordered() {
    let range = DateRange::resolve(Some("2020-11-27"), Some("2020-11-26"));
    assert_eq!(range, DateRange::Between(ymd(2020, 11, 27), ymd(2020, 11, 26)));
    assert_eq!(range.path_suffix(), "2020-11-27/2020-11-26");
  }
}
