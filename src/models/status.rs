use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Value of [`StatusResponse::status`] whenever the service answers.
pub const RUNNING: &str = "running";

/// # Status Report
///
/// ## Fields
/// - `status`: always `"running"`
/// - `version`: the resolved application version (`"dev"` without a manifest)
/// - `timestamp`: ISO 8601, generated per request
/// - `database`: connectivity of the configured table, omitted when the
///   report was built without a health checker
///
/// ## Example JSON
/// ```json
/// {
///   "status": "running",
///   "version": "1.0.0",
///   "timestamp": "2024-03-10T15:30:45.123Z",
///   "database": { "status": "error", "message": "Requested resource not found" }
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct StatusResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseHealth>,
}

/// Outcome of a single data-store connectivity check.
///
/// Serialized with a `status` tag: `{"status":"connected"}`,
/// `{"status":"disconnected","message":"..."}` or
/// `{"status":"error","message":"..."}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DatabaseHealth {
    /// The table exists and answered.
    Connected,
    /// No table is configured.
    Disconnected { message: String },
    /// The describe call failed.
    Error { message: String },
}

impl DatabaseHealth {
    pub fn status(&self) -> &'static str {
        match self {
            DatabaseHealth::Connected => "connected",
            DatabaseHealth::Disconnected { .. } => "disconnected",
            DatabaseHealth::Error { .. } => "error",
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            DatabaseHealth::Connected => None,
            DatabaseHealth::Disconnected { message } | DatabaseHealth::Error { message } => {
                Some(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_connected_has_no_message() {
        let json = serde_json::to_value(DatabaseHealth::Connected).unwrap();
        assert_eq!(json, json!({ "status": "connected" }));
    }

    #[test]
    fn test_error_carries_message() {
        let health = DatabaseHealth::Error {
            message: "Requested resource not found".to_string(),
        };
        let json = serde_json::to_value(&health).unwrap();
        assert_eq!(
            json,
            json!({ "status": "error", "message": "Requested resource not found" })
        );
        assert_eq!(health.status(), "error");
    }

    #[test]
    fn test_database_block_omitted_when_absent() {
        let response = StatusResponse {
            status: RUNNING.to_string(),
            version: "dev".to_string(),
            timestamp: "2024-03-10T15:30:45.123Z".to_string(),
            database: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("database").is_none());

        let parsed: StatusResponse = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, response);
    }

    #[test]
    fn test_parses_disconnected_report() {
        let parsed: StatusResponse = serde_json::from_value(json!({
            "status": "running",
            "version": "2.3.1",
            "timestamp": "2024-03-10T15:30:45.123Z",
            "database": { "status": "disconnected", "message": "DYNAMODB_TABLE not configured" }
        }))
        .unwrap();

        let database = parsed.database.unwrap();
        assert_eq!(database.status(), "disconnected");
        assert_eq!(database.message(), Some("DYNAMODB_TABLE not configured"));
    }
}
