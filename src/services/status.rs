use super::health_checker::DatabaseHealthChecker;
use crate::models::status::{RUNNING, StatusResponse};
use crate::models::timestamp_now;
use crate::version::AppVersion;

/// # Status Aggregator
///
/// Composes the `/api/status` report. Every call builds a fresh report;
/// there is no failure path since version and database faults are already
/// folded into response fields.
#[derive(Clone)]
pub struct StatusAggregator {
    version: AppVersion,
    database: Option<DatabaseProbe>,
}

#[derive(Clone)]
struct DatabaseProbe {
    checker: DatabaseHealthChecker,
    table: Option<String>,
}

impl StatusAggregator {
    /// Aggregator reporting version and timestamp only.
    pub fn new(version: AppVersion) -> Self {
        Self {
            version,
            database: None,
        }
    }

    /// Adds a `database` block produced by `checker` against `table`.
    pub fn with_database_check(
        mut self,
        checker: DatabaseHealthChecker,
        table: Option<String>,
    ) -> Self {
        self.database = Some(DatabaseProbe { checker, table });
        self
    }

    pub fn version(&self) -> &AppVersion {
        &self.version
    }

    pub async fn get_status(&self) -> StatusResponse {
        let database = match &self.database {
            Some(probe) => Some(probe.checker.check(probe.table.as_deref()).await),
            None => None,
        };

        StatusResponse {
            status: RUNNING.to_string(),
            version: self.version.to_string(),
            timestamp: timestamp_now(),
            database,
        }
    }
}
