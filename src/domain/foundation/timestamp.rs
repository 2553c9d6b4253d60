//! UTC instants for slide metadata and download names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Serialized as RFC 3339.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    pub fn is_after(&self, other: &Timestamp) -> bool {
        self > other
    }

    /// Milliseconds since the epoch; generated slides use this as their id.
    /// Instants before 1970 clamp to zero.
    pub fn as_unix_millis(&self) -> u64 {
        u64::try_from(self.0.timestamp_millis()).unwrap_or(0)
    }

    /// `YYYYMMDD_HHMMSS`, the suffix of exported file names.
    pub fn file_stamp(&self) -> String {
        self.0.format("%Y%m%d_%H%M%S").to_string()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}
