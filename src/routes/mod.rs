use actix_web::web;

/// # Liveness Probe
///
/// `GET /health`, mounted at the root, independent of the data store.
pub mod health;

/// # REST API
///
/// `GET /api/hello` and `GET /api/status`.
pub mod api;

/// # GraphQL
///
/// `POST /api/graphql` and the `GET /api/playground` page.
pub mod graphql;


/// # Route Configuration
///
/// ```text
/// GET  /health         - liveness probe
/// GET  /api/hello      - fixed greeting
/// GET  /api/status     - version, timestamp and database connectivity
/// POST /api/graphql    - GraphQL mirror of the above
/// GET  /api/playground - GraphQL Playground
/// ```
///
/// Handlers expect a [`StatusAggregator`] and an [`AppSchema`] in app data.
///
/// [`StatusAggregator`]: crate::services::StatusAggregator
/// [`AppSchema`]: crate::graphql::schema::AppSchema
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes).service(
        web::scope("/api")
            .configure(api::configure_routes)
            .configure(graphql::configure_routes),
    );
}
