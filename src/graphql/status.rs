use crate::models::health::HealthResponse;
use crate::models::hello::HelloResponse;
use crate::models::status::{DatabaseHealth, StatusResponse};
use crate::services::StatusAggregator;
use async_graphql::{Context, Object, Result, SimpleObject};

/// GraphQL view of the liveness probe.
#[derive(Debug, SimpleObject)]
pub struct Health {
    pub status: String,
    pub timestamp: String,
}

impl From<HealthResponse> for Health {
    fn from(response: HealthResponse) -> Self {
        Self {
            status: response.status,
            timestamp: response.timestamp,
        }
    }
}

/// Database connectivity block of [`Status`].
///
/// `status` is one of `connected`, `disconnected` or `error`; `message` is
/// null when connected.
#[derive(Debug, SimpleObject)]
pub struct DatabaseStatus {
    pub status: String,
    pub message: Option<String>,
}

impl From<DatabaseHealth> for DatabaseStatus {
    fn from(health: DatabaseHealth) -> Self {
        Self {
            status: health.status().to_string(),
            message: health.message().map(str::to_string),
        }
    }
}

/// GraphQL view of the `/api/status` report.
#[derive(Debug, SimpleObject)]
pub struct Status {
    pub status: String,
    pub version: String,
    pub timestamp: String,
    pub database: Option<DatabaseStatus>,
}

impl From<StatusResponse> for Status {
    fn from(response: StatusResponse) -> Self {
        Self {
            status: response.status,
            version: response.version,
            timestamp: response.timestamp,
            database: response.database.map(DatabaseStatus::from),
        }
    }
}

/// Root query type, mirroring the REST endpoints.
#[derive(Default)]
pub struct StatusQuery;

#[Object]
impl StatusQuery {
    /// Liveness probe, same payload as `GET /health`.
    async fn health(&self) -> Health {
        Health::from(HealthResponse::ok())
    }

    /// Fixed greeting, same payload as `GET /api/hello`.
    async fn hello(&self) -> String {
        HelloResponse::default().message
    }

    /// Status report, same payload as `GET /api/status`.
    ///
    /// # Errors
    /// Only if the schema was built without a [`StatusAggregator`].
    async fn status(&self, ctx: &Context<'_>) -> Result<Status> {
        let aggregator = ctx.data::<StatusAggregator>()?;
        Ok(Status::from(aggregator.get_status().await))
    }
}
