//! # Temporal Types — Publication Dates
//!
//! Defines `PubDate`, the calendar date a content entry was published.
//!
//! Frontmatter authors write dates two ways: a bare `YYYY-MM-DD`, or a
//! full RFC 3339 datetime when the source tool exports one. Both are
//! accepted; both normalize to the calendar date (datetimes are read in
//! UTC first). Everything else is rejected at construction with an error
//! naming the input, so a typo like `2024-13-01` surfaces as a validation
//! failure instead of an entry sorted to the wrong place.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A publication date, normalized to a UTC calendar date.
///
/// # Construction
///
/// - [`PubDate::parse()`] — from `YYYY-MM-DD` or an RFC 3339 datetime.
/// - [`PubDate::from_date()`] — from a `chrono::NaiveDate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PubDate(NaiveDate);

impl PubDate {
    /// Parse a publication date.
    ///
    /// Accepts `YYYY-MM-DD` or a full RFC 3339 datetime; datetimes are
    /// converted to UTC and truncated to the calendar date.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the input is neither form, or
    /// names a day that does not exist (e.g. `2024-02-30`).
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
            return Ok(Self(date));
        }

        match DateTime::parse_from_rfc3339(input) {
            Ok(dt) => Ok(Self(dt.with_timezone(&Utc).date_naive())),
            Err(e) => Err(CoreError::InvalidDate {
                input: input.to_string(),
                reason: format!("expected YYYY-MM-DD or an RFC 3339 datetime: {e}"),
            }),
        }
    }

    /// Create a publication date from a `chrono::NaiveDate`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Access the inner `NaiveDate`.
    pub fn as_date(&self) -> &NaiveDate {
        &self.0
    }

    /// Render as `YYYY-MM-DD`.
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl std::fmt::Display for PubDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}
