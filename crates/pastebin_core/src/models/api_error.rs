//! Error body returned by the backend on non-success responses.

use chrono::DateTime;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// JSON error payload: `{ reason, trace, timestamp }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub reason: String,
    #[serde(default)]
    pub trace: Option<String>,
    /// Unix timestamp (seconds) at which the backend raised the error.
    /// Fractional epochs are truncated toward zero.
    #[serde(deserialize_with = "deserialize_epoch_seconds")]
    pub timestamp: i64,
}

fn deserialize_epoch_seconds<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() || value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(serde::de::Error::custom(format!(
            "timestamp out of range: {}",
            value
        )));
    }
    Ok(value.trunc() as i64)
}

impl ApiError {
    /// Render `timestamp` as `MM/DD/YYYY, HH:MM:SS` (UTC, 24-hour clock).
    ///
    /// Out-of-range timestamps render as the raw number.
    pub fn formatted_time(&self) -> String {
        DateTime::from_timestamp(self.timestamp, 0)
            .map(|time| time.format("%m/%d/%Y, %H:%M:%S").to_string())
            .unwrap_or_else(|| self.timestamp.to_string())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.reason, self.formatted_time())?;
        if let Some(trace) = self.trace.as_deref() {
            write!(f, ": {}", trace)?;
        }
        Ok(())
    }
}
