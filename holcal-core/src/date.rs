//! Calendar-day value type and its wire representation.
//!
//! The holiday store exchanges dates as `dd/MM/yyyy` strings (e.g.
//! "25/12/2024"). `CalendarDay` wraps a `chrono::NaiveDate` and pins its
//! serde representation to that exact format, so payloads round-trip
//! unchanged through parse and format.

use chrono::{Datelike, Local, Months, NaiveDate, ParseError, Weekday};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Wire format for dates, fixed by the store contract.
const WIRE_FORMAT: &str = "%d/%m/%Y";

/// A date at day granularity (year, month, day-of-month), no time
/// component. Equality is by calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarDay(NaiveDate);

impl CalendarDay {
    pub fn new(date: NaiveDate) -> Self {
        CalendarDay(date)
    }

    /// Construct from year/month/day. Returns `None` for out-of-range
    /// components (e.g. February 30th).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(CalendarDay)
    }

    /// Today in the local timezone.
    pub fn today() -> Self {
        CalendarDay(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// First day of this day's month.
    pub fn first_of_month(&self) -> Self {
        CalendarDay(self.0.with_day(1).unwrap())
    }

    /// Last day of this day's month.
    pub fn last_of_month(&self) -> Self {
        // Probe downward from 31; every month has a day 28.
        let last = (28..=31)
            .rev()
            .find_map(|d| NaiveDate::from_ymd_opt(self.year(), self.month(), d))
            .unwrap();
        CalendarDay(last)
    }

    /// The day `months` months away. chrono clamps the day-of-month where
    /// the target month is shorter (Jan 31 + 1 month = Feb 28/29);
    /// stepping past the representable calendar saturates at its bounds.
    pub fn months_from(&self, months: i32) -> Self {
        let shifted = if months >= 0 {
            self.0
                .checked_add_months(Months::new(months.unsigned_abs()))
                .unwrap_or(NaiveDate::MAX)
        } else {
            self.0
                .checked_sub_months(Months::new(months.unsigned_abs()))
                .unwrap_or(NaiveDate::MIN)
        };
        CalendarDay(shifted)
    }

    /// Parse the `dd/MM/yyyy` wire form.
    pub fn parse_wire(s: &str) -> Result<Self, ParseError> {
        NaiveDate::parse_from_str(s, WIRE_FORMAT).map(CalendarDay)
    }

    /// Format as the `dd/MM/yyyy` wire form.
    pub fn format_wire(&self) -> String {
        self.0.format(WIRE_FORMAT).to_string()
    }
}

impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        CalendarDay(date)
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_wire())
    }
}

impl Serialize for CalendarDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.format_wire())
    }
}

impl<'de> Deserialize<'de> for CalendarDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        CalendarDay::parse_wire(&s)
            .map_err(|e| de::Error::custom(format!("invalid date '{}': {}", s, e)))
    }
}
