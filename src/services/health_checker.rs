use crate::error::StoreError;
use crate::models::status::DatabaseHealth;
use crate::store::TableDescriber;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

pub const NOT_CONFIGURED_MESSAGE: &str = "DYNAMODB_TABLE not configured";
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown database error";

/// # Database Health Checker
///
/// Issues one describe call per [`check`](Self::check) and folds the outcome
/// into a [`DatabaseHealth`]. Stateless: nothing is cached between calls and
/// nothing is retried.
#[derive(Clone)]
pub struct DatabaseHealthChecker {
    describer: Arc<dyn TableDescriber>,
    deadline: Duration,
}

impl DatabaseHealthChecker {
    pub fn new(describer: Arc<dyn TableDescriber>, deadline: Duration) -> Self {
        Self {
            describer,
            deadline,
        }
    }

    /// Checks `table`; a missing or blank name is reported as
    /// `disconnected`, never as an error.
    pub async fn check(&self, table: Option<&str>) -> DatabaseHealth {
        let Some(table) = table.filter(|name| !name.trim().is_empty()) else {
            return DatabaseHealth::Disconnected {
                message: NOT_CONFIGURED_MESSAGE.to_string(),
            };
        };

        let outcome = match timeout(self.deadline, self.describer.describe_table(table)).await {
            Ok(result) => result,
            Err(_) => Err(StoreError::Timeout(self.deadline)),
        };

        match outcome {
            Ok(()) => DatabaseHealth::Connected,
            Err(err) => {
                tracing::warn!(table, error = %err, "database health check failed");
                let message = err.to_string();
                DatabaseHealth::Error {
                    message: if message.trim().is_empty() {
                        UNKNOWN_ERROR_MESSAGE.to_string()
                    } else {
                        message
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockTableDescriber;
    use async_trait::async_trait;

    fn checker(describer: impl TableDescriber + 'static) -> DatabaseHealthChecker {
        DatabaseHealthChecker::new(Arc::new(describer), Duration::from_secs(1))
    }

    #[tokio::test]
    async fn test_unconfigured_table_is_disconnected() {
        let mut describer = MockTableDescriber::new();
        describer.expect_describe_table().never();
        let checker = checker(describer);

        for table in [None, Some(""), Some("   ")] {
            let health = checker.check(table).await;
            assert_eq!(
                health,
                DatabaseHealth::Disconnected {
                    message: NOT_CONFIGURED_MESSAGE.to_string()
                }
            );
        }
    }

    #[tokio::test]
    async fn test_reachable_table_is_connected() {
        let mut describer = MockTableDescriber::new();
        describer
            .expect_describe_table()
            .withf(|table| table == "orders")
            .times(1)
            .returning(|_| Ok(()));

        let health = checker(describer).check(Some("orders")).await;
        assert_eq!(health, DatabaseHealth::Connected);
        assert_eq!(health.message(), None);
    }

    #[tokio::test]
    async fn test_store_fault_is_reported_as_error() {
        let mut describer = MockTableDescriber::new();
        describer
            .expect_describe_table()
            .returning(|_| Err(StoreError::Describe("Requested resource not found".to_string())));

        let health = checker(describer).check(Some("orders")).await;
        assert_eq!(
            health,
            DatabaseHealth::Error {
                message: "Requested resource not found".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_fault_without_message_uses_fallback() {
        let mut describer = MockTableDescriber::new();
        describer
            .expect_describe_table()
            .returning(|_| Err(StoreError::Describe(String::new())));

        let health = checker(describer).check(Some("orders")).await;
        assert_eq!(health.message(), Some(UNKNOWN_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn test_every_check_hits_the_store() {
        let mut describer = MockTableDescriber::new();
        describer.expect_describe_table().times(3).returning(|_| Ok(()));
        let checker = checker(describer);

        for _ in 0..3 {
            assert_eq!(checker.check(Some("orders")).await, DatabaseHealth::Connected);
        }
    }

    struct StalledStore;

    #[async_trait]
    impl TableDescriber for StalledStore {
        async fn describe_table(&self, _table: &str) -> Result<(), StoreError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_slow_store_times_out() {
        let checker =
            DatabaseHealthChecker::new(Arc::new(StalledStore), Duration::from_millis(20));

        let health = checker.check(Some("orders")).await;
        assert_eq!(health.status(), "error");
        assert_eq!(
            health.message(),
            Some("database health check timed out after 20ms")
        );
    }
}
