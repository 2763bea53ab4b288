/// Calendar parsing for the free-text `date_added` column.
///
/// Source exports mix US short dates (`9/25/2021`, occasionally `9/25/21`),
/// long English dates (`September 25, 2021`, sometimes with a leading
/// space), month-and-year (`September 2021`), bare years and ISO dates.
/// Each accepted layout is tried in order; the first that consumes the
/// whole trimmed string and yields a four-digit year wins.
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Date-only layouts, most common first.
const DATE_FORMATS: &[&str] = &[
    "%m/%d/%Y",
    "%B %d, %Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d %B %Y",
    "%B %d %Y",
];

/// Two-digit-year layouts. `%y` maps 00-69 to 20xx and 70-99 to 19xx.
const SHORT_YEAR_FORMATS: &[&str] = &["%m/%d/%y", "%B %d, %y"];

/// Layouts carrying a time of day; the time is discarded.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%m/%d/%Y %H:%M:%S"];

/// Smallest year accepted from a four-digit layout.
///
/// chrono's `%d` takes up to two digits and a format space matches zero or
/// more spaces, so `"September 2021"` fits `"%B %d %Y"` as day 20, year 21.
/// Anything below this is such a misread, not a real catalog date.
const MIN_YEAR: i32 = 1000;

/// Year, 1-based month and day extracted from a parsed date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl From<NaiveDate> for CalendarParts {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

/// Parse a `date_added` value. Returns `None` for empty or unrecognised text.
pub fn parse_date_added(text: &str) -> Option<NaiveDate> {
    let s = text.trim();
    if s.is_empty() {
        return None;
    }

    parse_with(s, DATE_FORMATS)
        .or_else(|| parse_with(s, SHORT_YEAR_FORMATS))
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
                .filter(plausible)
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.date_naive())
                .filter(plausible)
        })
        .or_else(|| month_and_year(s))
        .or_else(|| bare_year(s))
}

/// Parse and decompose in one step.
pub fn calendar_parts(text: &str) -> Option<CalendarParts> {
    parse_date_added(text).map(CalendarParts::from)
}

fn parse_with(s: &str, formats: &[&str]) -> Option<NaiveDate> {
    formats
        .iter()
        .filter_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .find(plausible)
}

fn plausible(date: &NaiveDate) -> bool {
    date.year() >= MIN_YEAR
}

/// `"September 2021"` / `"Sep 2021"`: the first of that month.
fn month_and_year(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("1 {s}"), "%d %B %Y")
        .ok()
        .filter(plausible)
}

/// `"2021"`: the first of January.
fn bare_year(s: &str) -> Option<NaiveDate> {
    if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = s.parse().ok()?;
    NaiveDate::from_ymd_opt(year, 1, 1).filter(plausible)
}
