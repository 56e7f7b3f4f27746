/// Database connectivity check against the configured table.
pub mod health_checker;

/// Composition of the `/api/status` report.
pub mod status;

pub use health_checker::DatabaseHealthChecker;
pub use status::StatusAggregator;
