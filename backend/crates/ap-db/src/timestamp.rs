use crate::{DbError, Result};

use chrono::{DateTime, Utc};

/// Timestamps are stored as unix seconds.
pub(crate) fn to_datetime(ts: i64, column: &str) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
        .ok_or_else(|| DbError::serialization(format!("Invalid timestamp in {}", column)))
}

pub(crate) fn to_optional_datetime(
    ts: Option<i64>,
    column: &str,
) -> Result<Option<DateTime<Utc>>> {
    ts.map(|ts| to_datetime(ts, column)).transpose()
}
