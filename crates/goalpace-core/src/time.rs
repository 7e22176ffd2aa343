// ABOUTME: Instant parsing for deadlines supplied as RFC 3339 timestamps or bare dates
// ABOUTME: Provides a serde adapter so wire models accept both representations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Parse a point in time.
///
/// Accepted forms, all interpreted in UTC when no offset is given:
/// - RFC 3339 (`2026-03-01T09:30:00+02:00`, `2026-03-01T07:30:00Z`)
/// - naive date-time (`2026-03-01T07:30:00`, fractional seconds allowed)
/// - bare date (`2026-03-01`), meaning midnight at the start of that day
///
/// # Errors
///
/// Returns `InvalidInput` when the value matches none of the forms above.
pub fn parse_instant(value: &str) -> AppResult<DateTime<Utc>> {
    let trimmed = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(AppError::invalid_input(format!(
        "'{trimmed}' is not a valid time value (expected RFC 3339 or YYYY-MM-DD)"
    )))
}

/// Serde adapter for `DateTime<Utc>` fields that may arrive as bare dates
pub mod flexible {
    use super::parse_instant;
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Serialize as RFC 3339
    ///
    /// # Errors
    ///
    /// Propagates serializer errors
    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }

    /// Deserialize from any form accepted by [`parse_instant`]
    ///
    /// # Errors
    ///
    /// Fails when the string is not a recognised time value
    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_instant(&raw).map_err(|e| de::Error::custom(e.message))
    }
}

/// Serde adapter for optional instants; `null` maps to `None`
pub mod flexible_option {
    use super::parse_instant;
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Serialize as RFC 3339 or `null`
    ///
    /// # Errors
    ///
    /// Propagates serializer errors
    #[allow(clippy::ref_option)] // signature imposed by `#[serde(with)]`
    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(instant) => serializer.serialize_some(&instant.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize from `null` or any form accepted by [`parse_instant`]
    ///
    /// # Errors
    ///
    /// Fails when a present string is not a recognised time value
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| parse_instant(&raw).map_err(|e| de::Error::custom(e.message)))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use chrono::TimeZone;

    #[test]
    fn test_rfc3339_with_offset_is_normalised() {
        let parsed = parse_instant("2026-03-01T09:30:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 3, 1, 7, 30, 0).unwrap());
    }

    #[test]
    fn test_bare_date_is_midnight_utc() {
        let parsed = parse_instant("2026-03-01").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_naive_datetime_is_utc() {
        let parsed = parse_instant("2026-03-01T12:00:00.250").unwrap();
        assert_eq!(parsed.date_naive(), NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
    }

    #[test]
    fn test_malformed_value_is_invalid_input() {
        let err = parse_instant("next tuesday").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }
}
