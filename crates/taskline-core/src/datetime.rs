//! The one date-time format taskline speaks: `YYYY/MM/DD HHMM`.

use chrono::NaiveDateTime;

use crate::error::{Error, Result};

const FORMAT: &str = "%Y/%m/%d %H%M";

/// Parse a `YYYY/MM/DD HHMM` literal, e.g. `2019/12/02 1800`.
///
/// No fallback formats are attempted. chrono accepts unpadded components,
/// so the canonical rendering is required to round-trip; `2019/12/2 1800`
/// is rejected.
pub fn parse(input: &str) -> Result<NaiveDateTime> {
    let parsed =
        NaiveDateTime::parse_from_str(input, FORMAT).map_err(|_| Error::InvalidDateFormat)?;
    if format(parsed) != input {
        return Err(Error::InvalidDateFormat);
    }
    Ok(parsed)
}

/// Render a date-time in the same fixed format accepted by [`parse`].
#[must_use]
pub fn format(value: NaiveDateTime) -> String {
    value.format(FORMAT).to_string()
}

/// Serde adapter keeping persisted timestamps in the fixed format.
pub mod stamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize as the fixed `YYYY/MM/DD HHMM` string.
    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format(*value))
    }

    /// Deserialize from the fixed `YYYY/MM/DD HHMM` string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse(&raw).map_err(serde::de::Error::custom)
    }
}
