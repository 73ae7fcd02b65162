/// Video ids are derived from the wall clock (epoch milliseconds).
pub type VideoId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
