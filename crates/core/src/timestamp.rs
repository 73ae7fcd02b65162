//! ISO-8601 timestamps with millisecond precision (`2023-12-04T21:42:23.091Z`).

use chrono::{NaiveDateTime, SubsecRound, Timelike, Utc};

use crate::types::Timestamp;

/// `chrono` format string for the wire representation.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Current time, truncated to whole milliseconds.
pub fn now_millis() -> Timestamp {
    Utc::now().trunc_subsecs(3)
}

pub fn format(ts: &Timestamp) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a wire timestamp. Returns `None` for anything that is not a real
/// calendar instant in exactly the wire format. Leap seconds (`:60`) are
/// rejected.
pub fn parse(raw: &str) -> Option<Timestamp> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .ok()
        .filter(|naive| naive.nanosecond() < 1_000_000_000)
        .map(|naive| naive.and_utc())
}

/// Serde adapter for `#[serde(with = "crate::timestamp::millis")]`.
pub mod millis {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::types::Timestamp;

    pub fn serialize<S: Serializer>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid timestamp '{raw}'")))
    }
}
