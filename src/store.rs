//! Data-store seam used by the database health check.

use crate::error::StoreError;
use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata};

/// A store that can confirm a table exists and is reachable.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TableDescriber: Send + Sync {
    /// Succeeds if `table` exists and the store answered.
    async fn describe_table(&self, table: &str) -> Result<(), StoreError>;
}

/// [`TableDescriber`] backed by DynamoDB `DescribeTable`.
#[derive(Clone, Debug)]
pub struct DynamoTableDescriber {
    client: Client,
}

impl DynamoTableDescriber {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client from the default credential chain for `region`.
    pub async fn from_region(region: &str) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;
        Self::new(Client::new(&sdk_config))
    }
}

#[async_trait]
impl TableDescriber for DynamoTableDescriber {
    async fn describe_table(&self, table: &str) -> Result<(), StoreError> {
        match self.client.describe_table().table_name(table).send().await {
            Ok(_) => Ok(()),
            Err(err) => {
                let message = err
                    .as_service_error()
                    .and_then(|service_err| service_err.message())
                    .map(str::to_string)
                    .unwrap_or_else(|| DisplayErrorContext(&err).to_string());
                Err(StoreError::Describe(message))
            }
        }
    }
}
