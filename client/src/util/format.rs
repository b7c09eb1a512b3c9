//! Display formatting helpers.

use chrono::{DateTime, Utc};

/// Format a report timestamp for list rows and detail panes.
#[must_use]
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%d/%m/%Y %H:%M").to_string()
}
