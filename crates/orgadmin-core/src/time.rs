//! Epoch timestamp rendering.
//!
//! Resource payloads carry Unix epoch seconds. Zero and negative values mean
//! "unset" (no resource is legitimately timestamped at the epoch), so they
//! render as an empty cell, the same as an absent or `null` field.

use chrono::{DateTime, SecondsFormat, Utc};

/// Render epoch seconds as an RFC 3339 UTC timestamp, or `""` when unset.
pub fn format_epoch_seconds(ts: i64) -> String {
    if ts <= 0 {
        return String::new();
    }
    match DateTime::<Utc>::from_timestamp(ts, 0) {
        Some(dt) => dt.to_rfc3339_opts(SecondsFormat::Secs, true),
        // Outside chrono's representable range.
        None => String::new(),
    }
}

/// Render an optional (absent or `null`) epoch value.
pub fn format_epoch_seconds_opt(ts: Option<i64>) -> String {
    ts.map(format_epoch_seconds).unwrap_or_default()
}
