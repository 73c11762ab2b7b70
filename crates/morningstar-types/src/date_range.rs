//! Date parsing and inclusive date ranges.

use chrono::NaiveDate;

use crate::DateError;

/// Text format accepted for caller-supplied dates.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Parses a `DD-MM-YYYY` date.
///
/// # Example
///
/// ```
/// use morningstar_types::parse_date;
/// use chrono::NaiveDate;
///
/// let date = parse_date("03-01-2019").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2019, 1, 3).unwrap());
/// ```
///
/// # Errors
///
/// Returns an error if the text is not a valid `DD-MM-YYYY` date.
pub fn parse_date(text: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|_| DateError::Parse(text.to_string()))
}

/// Conversion into a calendar date, accepting `DD-MM-YYYY` text or a
/// [`NaiveDate`].
pub trait IntoDate {
    /// Performs the conversion.
    ///
    /// # Errors
    ///
    /// Returns an error if the text form is malformed.
    fn into_date(self) -> Result<NaiveDate, DateError>;
}

impl IntoDate for NaiveDate {
    fn into_date(self) -> Result<NaiveDate, DateError> {
        Ok(self)
    }
}

impl IntoDate for &str {
    fn into_date(self) -> Result<NaiveDate, DateError> {
        parse_date(self)
    }
}

impl IntoDate for String {
    fn into_date(self) -> Result<NaiveDate, DateError> {
        parse_date(&self)
    }
}

/// An inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Start date (inclusive).
    pub start: NaiveDate,
    /// End date (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateError> {
        if start > end {
            return Err(DateError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a range from any pair of date-like values.
    ///
    /// # Errors
    ///
    /// Returns an error if either date is malformed or start > end.
    pub fn parse(start: impl IntoDate, end: impl IntoDate) -> Result<Self, DateError> {
        Self::new(start.into_date()?, end.into_date()?)
    }

    /// Returns the total number of days in the range.
    #[must_use]
    pub fn total_days(&self) -> usize {
        ((self.end - self.start).num_days() + 1) as usize
    }

    /// Returns true if the range contains the given date.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
