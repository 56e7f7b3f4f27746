use utoipa::OpenApi;

/// OpenAPI document for the REST surface, served at
/// `/api-docs/openapi.json` and browsable through Swagger UI.
///
/// Any change to the REST routes should be reflected here.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::api::hello,
        crate::routes::api::status,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::hello::HelloResponse,
            crate::models::status::StatusResponse,
            crate::models::status::DatabaseHealth
        )
    ),
    tags(
        (name = "Health Check", description = "Liveness probe"),
        (name = "API", description = "Greeting and status report"),
        (name = "GraphQL", description = "GraphQL mirror of the status endpoints")
    ),
    info(
        description = "Status reporting API with REST and GraphQL interfaces",
        title = "PackPixie API",
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_status_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| *p == "/health"));
        assert!(paths.iter().any(|p| *p == "/api/hello"));
        assert!(paths.iter().any(|p| *p == "/api/status"));
    }
}
