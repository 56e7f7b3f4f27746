//! Client-side status checker.
//!
//! A small state machine that drives one status request at a time and
//! renders whichever terminal state it reached.

use crate::error::CheckError;
use crate::models::status::StatusResponse;
use std::fmt::Write;

/// Observable states of a [`StatusChecker`].
#[derive(Debug, Clone, PartialEq)]
pub enum CheckerState {
    Idle,
    Loading,
    Success(StatusResponse),
    Failure(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusChecker {
    state: CheckerState,
}

impl Default for StatusChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusChecker {
    pub fn new() -> Self {
        Self {
            state: CheckerState::Idle,
        }
    }

    pub fn state(&self) -> &CheckerState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, CheckerState::Loading)
    }

    /// Enters `Loading`. Returns `false` and leaves the state alone if a
    /// check is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.state = CheckerState::Loading;
        true
    }

    /// Completes the in-flight check. Ignored unless `Loading`.
    pub fn finish(&mut self, outcome: Result<StatusResponse, CheckError>) {
        if !self.is_loading() {
            return;
        }
        self.state = match outcome {
            Ok(status) => CheckerState::Success(status),
            Err(err) => CheckerState::Failure(err.to_string()),
        };
    }

    /// Runs one full check against `base_url`. A trigger while another
    /// check is loading is dropped.
    pub async fn check(&mut self, client: &reqwest::Client, base_url: &str) -> &CheckerState {
        if self.begin() {
            let outcome = fetch_status(client, base_url).await;
            self.finish(outcome);
        }
        &self.state
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_loading() {
            "Checking..."
        } else {
            "Check API Status"
        }
    }

    /// Plain-text rendering of the current state.
    pub fn render(&self) -> String {
        let mut out = String::from("API Status Checker\n");
        let _ = writeln!(out, "[{}]", self.button_label());

        match &self.state {
            CheckerState::Idle | CheckerState::Loading => {}
            CheckerState::Failure(message) => {
                let _ = writeln!(out, "Error: {message}");
            }
            CheckerState::Success(status) => {
                let _ = writeln!(out, "API Response:");
                let _ = writeln!(out, "Status: {}", status.status);
                let _ = writeln!(out, "Version: {}", status.version);
                let _ = writeln!(out, "Timestamp: {}", status.timestamp);
                if let Some(database) = &status.database {
                    match database.message() {
                        Some(message) => {
                            let _ = writeln!(out, "Database: {} ({message})", database.status());
                        }
                        None => {
                            let _ = writeln!(out, "Database: {}", database.status());
                        }
                    }
                }
            }
        }
        out
    }
}

/// `GET {base_url}/api/status`. Non-2xx replies are failures.
pub async fn fetch_status(
    client: &reqwest::Client,
    base_url: &str,
) -> Result<StatusResponse, CheckError> {
    let url = format!("{}/api/status", base_url.trim_end_matches('/'));
    tracing::debug!(%url, "requesting status");

    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(CheckError::Status(response.status().as_u16()));
    }
    Ok(response.json::<StatusResponse>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::status::DatabaseHealth;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_status() -> StatusResponse {
        StatusResponse {
            status: "running".to_string(),
            version: "2.3.1".to_string(),
            timestamp: "2024-03-10T15:30:45.123Z".to_string(),
            database: Some(DatabaseHealth::Connected),
        }
    }

    #[test]
    fn test_begin_is_rejected_while_loading() {
        let mut checker = StatusChecker::new();
        assert!(checker.begin());
        assert!(!checker.begin());
        assert_eq!(checker.state(), &CheckerState::Loading);
        assert_eq!(checker.button_label(), "Checking...");
    }

    #[test]
    fn test_finish_outside_loading_is_ignored() {
        let mut checker = StatusChecker::new();
        checker.finish(Ok(sample_status()));
        assert_eq!(checker.state(), &CheckerState::Idle);
    }

    #[test]
    fn test_failure_then_retry() {
        let mut checker = StatusChecker::new();
        checker.begin();
        checker.finish(Err(CheckError::Status(500)));
        assert_eq!(
            checker.state(),
            &CheckerState::Failure("HTTP error! status: 500".to_string())
        );

        assert!(checker.begin());
        checker.finish(Ok(sample_status()));
        assert_eq!(checker.state(), &CheckerState::Success(sample_status()));
    }

    #[test]
    fn test_render_success() {
        let mut checker = StatusChecker::new();
        checker.begin();
        checker.finish(Ok(sample_status()));

        let view = checker.render();
        assert!(view.contains("[Check API Status]"));
        assert!(view.contains("Status: running"));
        assert!(view.contains("Version: 2.3.1"));
        assert!(view.contains("Timestamp: 2024-03-10T15:30:45.123Z"));
        assert!(view.contains("Database: connected"));
        assert!(!view.contains("Error:"));
    }

    #[test]
    fn test_render_failure() {
        let mut checker = StatusChecker::new();
        checker.begin();
        checker.finish(Err(CheckError::Transport("connection refused".to_string())));

        let view = checker.render();
        assert!(view.contains("Error: connection refused"));
        assert!(!view.contains("API Response:"));
    }

    #[tokio::test]
    async fn test_check_against_live_server() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "running",
                "version": "2.3.1",
                "timestamp": "2024-03-10T15:30:45.123Z",
                "database": { "status": "connected" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut checker = StatusChecker::new();
        let state = checker
            .check(&reqwest::Client::new(), &format!("{}/", server.uri()))
            .await;
        assert_eq!(state, &CheckerState::Success(sample_status()));
    }

    #[tokio::test]
    async fn test_check_reports_http_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/status"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = fetch_status(&reqwest::Client::new(), &server.uri())
            .await
            .unwrap_err();
        assert_eq!(err, CheckError::Status(503));
    }
}
