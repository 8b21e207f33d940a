//! Date normalizers for the submission/announcement info block
//!
//! Each field is a [`DateField`]: a pattern locating the date in the block's
//! text, a composer producing the raw text that is kept when normalization
//! fails, a parser, and an output format. Only full English month names are
//! recognized; anything else keeps its raw text.

use chrono::NaiveDate;
use regex::{Captures, Regex};
use std::sync::LazyLock;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

static SUBMITTED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Submitted\s+(\d+)\s+(\w+),\s+(\d{4})").expect("Failed to compile submitted regex")
});

static ANNOUNCED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"originally announced\s+(\w+)\s+(\d{4})")
        .expect("Failed to compile announced regex")
});

/// Pattern + composer + parser + formatter for one date field
pub struct DateField {
    pattern: &'static LazyLock<Regex>,
    compose: fn(&Captures<'_>) -> String,
    parse: fn(&str) -> Option<NaiveDate>,
    format: &'static str,
}

impl DateField {
    /// Finds the field in `text`
    ///
    /// Returns `None` when the pattern does not occur, the normalized date when
    /// the composed text parses, and the composed text itself otherwise.
    pub fn extract(&self, text: &str) -> Option<String> {
        let captures = self.pattern.captures(text)?;
        let raw = (self.compose)(&captures);

        match (self.parse)(&raw) {
            Some(date) => Some(date.format(self.format).to_string()),
            None => {
                tracing::debug!("Keeping unparsed date text {:?}", raw);
                Some(raw)
            }
        }
    }
}

/// `Submitted 5 January, 2025` → `2025-01-05`
pub static FIRST_SUBMISSION: DateField = DateField {
    pattern: &SUBMITTED_RE,
    compose: compose_day_month_year,
    parse: parse_day_month_year,
    format: "%Y-%m-%d",
};

/// `originally announced January 2025` → `2025-01`
pub static FIRST_ANNOUNCEMENT: DateField = DateField {
    pattern: &ANNOUNCED_RE,
    compose: compose_month_year,
    parse: parse_month_year,
    format: "%Y-%m",
};

fn compose_day_month_year(caps: &Captures<'_>) -> String {
    format!("{} {}, {}", &caps[1], &caps[2], &caps[3])
}

fn compose_month_year(caps: &Captures<'_>) -> String {
    format!("{} {}", &caps[1], &caps[2])
}

/// 1-based month number for a full English month name, ignoring case
pub fn month_number(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|month| month.eq_ignore_ascii_case(name))
        .map(|index| index as u32 + 1)
}

/// Parses `"<day> <Month>, <year>"`
pub fn parse_day_month_year(text: &str) -> Option<NaiveDate> {
    let (day_month, year) = text.split_once(", ")?;
    let (day, month) = day_month.split_once(' ')?;

    if day.is_empty() || day.len() > 2 {
        return None;
    }

    NaiveDate::from_ymd_opt(parse_year(year)?, month_number(month)?, day.parse().ok()?)
}

/// Parses `"<Month> <year>"` as the first day of that month
pub fn parse_month_year(text: &str) -> Option<NaiveDate> {
    let (month, year) = text.split_once(' ')?;
    NaiveDate::from_ymd_opt(parse_year(year)?, month_number(month)?, 1)
}

fn parse_year(text: &str) -> Option<i32> {
    if text.len() != 4 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
