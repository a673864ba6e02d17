//! Timestamp handling for App Store Connect attributes.
//!
//! App Store Connect mostly sends RFC 3339 timestamps
//! (`2024-03-11T18:42:07Z`) but some endpoints use a `+0000` offset without a
//! colon (`2024-03-11T18:42:07.551+0000`). Both decode to `DateTime<Utc>`.

use chrono::{DateTime, ParseError, SecondsFormat, Utc};

/// Parses an App Store Connect timestamp.
///
/// # Errors
///
/// Returns the chrono parse error if the value matches neither form.
///
/// # Example
///
/// ```rust
/// use app_store_connect::rest::datetime::parse;
///
/// let a = parse("2024-03-11T18:42:07Z").unwrap();
/// let b = parse("2024-03-11T18:42:07.000+0000").unwrap();
/// assert_eq!(a, b);
/// ```
pub fn parse(value: &str) -> Result<DateTime<Utc>, ParseError> {
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f%z"))
        .map(|dt| dt.with_timezone(&Utc))
}

/// Serde adapter for `Option<DateTime<Utc>>` attribute fields.
///
/// Use with `#[serde(default, with = "crate::rest::datetime::option")]`.
pub mod option {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::SecondsFormat;

    /// Writes the timestamp as RFC 3339 with millisecond precision.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => serializer.serialize_none(),
        }
    }

    /// Reads an optional timestamp in either accepted form.
    ///
    /// # Errors
    ///
    /// Fails if a present value cannot be parsed.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|value| super::parse(&value).map_err(de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Stamped {
        #[serde(
            default,
            with = "crate::rest::datetime::option",
            skip_serializing_if = "Option::is_none"
        )]
        at: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_parse_accepts_rfc3339() {
        let dt = parse("2024-03-11T18:42:07Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 11, 18, 42, 7).unwrap());

        let dt = parse("2024-03-11T11:42:07-07:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 11, 18, 42, 7).unwrap());
    }

    #[test]
    fn test_parse_accepts_compact_offset() {
        let dt = parse("2024-03-11T18:42:07.551+0000").unwrap();
        assert_eq!(dt.timestamp_subsec_millis(), 551);
        assert_eq!(dt.timestamp(), 1_710_182_527);

        let dt = parse("2024-03-11T18:42:07+0000").unwrap();
        assert_eq!(dt.timestamp(), 1_710_182_527);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse("yesterday").is_err());
        assert!(parse("2024-03-11").is_err());
    }

    #[test]
    fn test_option_adapter_handles_missing_and_null() {
        let missing: Stamped = serde_json::from_str("{}").unwrap();
        assert!(missing.at.is_none());

        let null: Stamped = serde_json::from_str(r#"{"at": null}"#).unwrap();
        assert!(null.at.is_none());
    }

    #[test]
    fn test_option_adapter_writes_rfc3339() {
        let stamped = Stamped {
            at: Some(Utc.with_ymd_and_hms(2024, 3, 11, 18, 42, 7).unwrap()),
        };
        let json = serde_json::to_string(&stamped).unwrap();
        assert_eq!(json, r#"{"at":"2024-03-11T18:42:07.000Z"}"#);
    }

    #[test]
    fn test_option_adapter_rejects_bad_value() {
        assert!(serde_json::from_str::<Stamped>(r#"{"at": "soon"}"#).is_err());
    }
}
