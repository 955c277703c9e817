//! Due date parsing and normalisation
//!
//! Input is accepted in a few common shapes and always stored and
//! rendered as `yyyy-MM-dd`.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::ValidationError;

/// Canonical storage and wire format
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date-only shapes tried in order. Month and day may be one or two digits;
/// slashed dates without a leading year are month first.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%b %d %Y",
    "%b %d, %Y",
    "%d %b %Y",
];

/// Date-time shapes whose date part is kept
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Validated calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DueDate(NaiveDate);

impl DueDate {
    /// Parse a due date, rejecting impossible dates such as `2021-02-30`.
    ///
    /// # Example
    /// ```
    /// use todoctl_server::models::DueDate;
    ///
    /// assert_eq!(DueDate::parse("2021-1-5").unwrap().to_string(), "2021-01-05");
    /// assert!(DueDate::parse("2021-02-30").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::InvalidDueDate);
        }

        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
            .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
            .or_else(|| {
                DATETIME_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                    .map(|dt| dt.date())
            })
            .map(Self)
            .ok_or(ValidationError::InvalidDueDate)
    }

    /// Parse an optional field; a missing date is invalid.
    pub fn parse_opt(s: Option<&str>) -> Result<Self, ValidationError> {
        s.map_or(Err(ValidationError::InvalidDueDate), Self::parse)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DueDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DUE_DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalised(s: &str) -> String {
        DueDate::parse(s).unwrap().to_string()
    }

    #[test]
    fn normalises_short_fields() {
        assert_eq!(normalised("2021-1-21"), "2021-01-21");
        assert_eq!(normalised("2021-12-2"), "2021-12-02");
        assert_eq!(normalised("2021/04/02"), "2021-04-02");
    }

    #[test]
    fn month_first_and_named_months() {
        assert_eq!(normalised("12/31/2021"), "2021-12-31");
        assert_eq!(normalised("1/5/2021"), "2021-01-05");
        assert_eq!(normalised("Jan 5 2021"), "2021-01-05");
        assert_eq!(normalised("January 5, 2021"), "2021-01-05");
        assert_eq!(normalised("5 Feb 2021"), "2021-02-05");
        assert!(DueDate::parse("31/12/2021").is_err());
    }

    #[test]
    fn keeps_date_part_of_timestamps() {
        assert_eq!(normalised("2021-04-02T10:15:00"), "2021-04-02");
        assert_eq!(normalised("2021-04-02T10:15:00+05:30"), "2021-04-02");
        assert_eq!(normalised(" 2021-04-02 "), "2021-04-02");
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(DueDate::parse("2021-02-30").is_err());
        assert!(DueDate::parse("2021-13-01").is_err());
    }

    #[test]
    fn rejects_garbage() {
        for input in ["", "invalid", "21-02", "2021-02-02x"] {
            assert_eq!(
                DueDate::parse(input),
                Err(ValidationError::InvalidDueDate),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn missing_date_is_invalid() {
        assert_eq!(DueDate::parse_opt(None), Err(ValidationError::InvalidDueDate));
        assert!(DueDate::parse_opt(Some("2022-01-01")).is_ok());
    }
}
