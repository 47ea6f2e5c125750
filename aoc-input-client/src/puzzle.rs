//! Puzzle identifiers and the supported year/day ranges

use crate::error::PuzzleIdError;
use chrono::{DateTime, Datelike, TimeDelta, Utc};
use std::fmt;

/// Puzzles unlock at midnight US Eastern (UTC-5)
const EVENT_UTC_OFFSET_HOURS: i64 = 5;

/// A validated (year, day) pair naming one puzzle input
///
/// Construction is the only place ranges are checked, so any `PuzzleId`
/// in hand is safe to put on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleId {
    year: u16,
    day: u8,
}

impl PuzzleId {
    /// First year the event ran
    pub const FIRST_YEAR: u16 = 2015;
    /// First puzzle day
    pub const FIRST_DAY: u8 = 1;
    /// Last puzzle day
    pub const LAST_DAY: u8 = 25;

    /// Validate a year/day pair against the current latest event year
    pub fn new(year: u16, day: u8) -> Result<Self, PuzzleIdError> {
        Self::with_latest_year(year, day, latest_event_year())
    }

    /// Validate a year/day pair against an explicit latest year
    pub fn with_latest_year(year: u16, day: u8, latest_year: u16) -> Result<Self, PuzzleIdError> {
        check_year(i64::from(year), latest_year)?;
        check_day(i64::from(day))?;
        Ok(Self { year, day })
    }

    /// Parse raw command-line tokens against the current latest event year
    pub fn parse(year: &str, day: &str) -> Result<Self, PuzzleIdError> {
        Self::parse_with_latest_year(year, day, latest_event_year())
    }

    /// Parse raw tokens; the year is fully checked before the day is looked at
    pub fn parse_with_latest_year(
        year: &str,
        day: &str,
        latest_year: u16,
    ) -> Result<Self, PuzzleIdError> {
        let year_value: i64 = year
            .parse()
            .map_err(|_| PuzzleIdError::InvalidYear(year.to_string()))?;
        let year = check_year(year_value, latest_year)?;

        let day_value: i64 = day
            .parse()
            .map_err(|_| PuzzleIdError::InvalidDay(day.to_string()))?;
        let day = check_day(day_value)?;

        Ok(Self { year, day })
    }

    /// Event year
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Puzzle day
    pub fn day(&self) -> u8 {
        self.day
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/day{:02}", self.year, self.day)
    }
}

fn check_year(year: i64, latest_year: u16) -> Result<u16, PuzzleIdError> {
    let range = i64::from(PuzzleId::FIRST_YEAR)..=i64::from(latest_year);
    if !range.contains(&year) {
        return Err(PuzzleIdError::YearOutOfRange {
            min: PuzzleId::FIRST_YEAR,
            max: latest_year,
        });
    }
    u16::try_from(year).map_err(|_| PuzzleIdError::YearOutOfRange {
        min: PuzzleId::FIRST_YEAR,
        max: latest_year,
    })
}

fn check_day(day: i64) -> Result<u8, PuzzleIdError> {
    let range = i64::from(PuzzleId::FIRST_DAY)..=i64::from(PuzzleId::LAST_DAY);
    let out_of_range = PuzzleIdError::DayOutOfRange {
        min: PuzzleId::FIRST_DAY,
        max: PuzzleId::LAST_DAY,
    };
    if !range.contains(&day) {
        return Err(out_of_range);
    }
    u8::try_from(day).map_err(|_| out_of_range)
}

/// Latest event year as of now
pub fn latest_event_year() -> u16 {
    latest_event_year_at(Utc::now())
}

/// Latest event year as of `now`
///
/// A year's event counts once its first puzzle has unlocked (December 1st,
/// midnight UTC-5); before that the previous year is the latest one.
pub fn latest_event_year_at(now: DateTime<Utc>) -> u16 {
    let event_time = now - TimeDelta::hours(EVENT_UTC_OFFSET_HOURS);
    let year = if event_time.month() == 12 {
        event_time.year()
    } else {
        event_time.year() - 1
    };
    u16::try_from(year)
        .unwrap_or(PuzzleId::FIRST_YEAR)
        .max(PuzzleId::FIRST_YEAR)
}
