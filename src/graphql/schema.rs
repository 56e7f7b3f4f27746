use super::status::StatusQuery;
use crate::services::StatusAggregator;
use async_graphql::{EmptyMutation, EmptySubscription, Schema};

/// Main GraphQL schema: status queries only, no mutations or subscriptions.
pub type AppSchema = Schema<StatusQuery, EmptyMutation, EmptySubscription>;

/// Builds the schema with `aggregator` available to the `status` resolver.
///
/// # Example
///
/// ```rust,no_run
/// use packpixie_api::graphql::schema::create_schema;
/// use packpixie_api::services::StatusAggregator;
/// use packpixie_api::version::AppVersion;
///
/// let schema = create_schema(StatusAggregator::new(AppVersion::new("dev")));
/// ```
pub fn create_schema(aggregator: StatusAggregator) -> AppSchema {
    Schema::build(StatusQuery, EmptyMutation, EmptySubscription)
        .data(aggregator)
        .finish()
}
