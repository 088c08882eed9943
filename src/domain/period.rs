use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reasons the period guard rejects a requested range.
///
/// The guard runs before any scoped query is issued, so a rejection means
/// nothing gets fetched; each variant maps onto a user-facing message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PeriodError {
    #[error("both start and end dates must be supplied together")]
    MissingCounterpart,
    #[error("`{0}` is not a valid calendar date")]
    MalformedDate(String),
    #[error("period end {end} precedes start {start}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },
}

/// Inclusive calendar-date range used to scope refueling queries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Builds a range, rejecting inverted bounds rather than clamping them.
    /// A single-day range (`start == end`) is valid.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, PeriodError> {
        if end < start {
            return Err(PeriodError::InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Validates a caller-supplied pair of optional `YYYY-MM-DD` strings.
    ///
    /// Both absent means "no period restriction". A lone bound is rejected
    /// instead of being treated as open-ended; the start is checked before
    /// the end, so the first malformed value is the one reported.
    pub fn from_bounds(
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Option<Self>, PeriodError> {
        match (start, end) {
            (None, None) => Ok(None),
            (Some(_), None) | (None, Some(_)) => Err(PeriodError::MissingCounterpart),
            (Some(start), Some(end)) => {
                let start = parse_date(start)?;
                let end = parse_date(end)?;
                Self::new(start, end).map(Some)
            }
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, PeriodError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| PeriodError::MalformedDate(raw.to_string()))
}
