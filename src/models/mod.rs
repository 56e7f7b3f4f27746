use chrono::{SecondsFormat, Utc};

/// # Liveness Response
///
/// Payload of `GET /health`: `{"status": "ok", "timestamp": "..."}`.
pub mod health;

/// Fixed greeting served by `GET /api/hello`.
pub mod hello;

/// # Status Report
///
/// Payload of `GET /api/status`, including the optional database
/// connectivity block.
pub mod status;

/// Current UTC time as an ISO 8601 string with millisecond precision,
/// e.g. `2024-03-10T15:30:45.123Z`.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
