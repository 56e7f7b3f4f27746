use super::timestamp_now;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Liveness Response
///
/// Returned by the `/health` probe regardless of data-store configuration.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "ok",
///   "timestamp": "2024-03-10T15:30:45.123Z"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: timestamp_now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_health_response_ok() {
        let response = HealthResponse::ok();

        assert_eq!(response.status, "ok");

        // Verify timestamp is valid ISO 8601 format
        let parsed_time = DateTime::parse_from_rfc3339(&response.timestamp);
        assert!(
            parsed_time.is_ok(),
            "Timestamp should be valid RFC3339 format"
        );
    }
}
