use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web::Data};
use packpixie_api::config::AppConfig;
use packpixie_api::graphql::schema::create_schema;
use packpixie_api::middleware::{cors, security_headers};
use packpixie_api::openapi::ApiDoc;
use packpixie_api::services::{DatabaseHealthChecker, StatusAggregator};
use packpixie_api::store::DynamoTableDescriber;
use packpixie_api::version::{AppVersion, manifest_path};
use std::io;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// PackPixie API Entry Point
///
/// Loads `.env`, reads configuration, resolves the application version and
/// builds the DynamoDB client once, then serves:
/// - `GET /health`, `GET /api/hello`, `GET /api/status`
/// - GraphQL at `/api/graphql` with a playground at `/api/playground`
/// - Swagger UI at `/swagger-ui/`, OpenAPI spec at `/api-docs/openapi.json`
#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();

    let config = AppConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_level())),
        )
        .init();

    let version = AppVersion::resolve(&manifest_path(config.version_file.as_deref()));
    let describer = DynamoTableDescriber::from_region(&config.aws_region).await;
    let checker = DatabaseHealthChecker::new(Arc::new(describer), config.health_check_timeout);
    let aggregator =
        StatusAggregator::new(version.clone()).with_database_check(checker, config.table_name.clone());
    let schema = create_schema(aggregator.clone());

    if config.table_name.is_none() {
        tracing::warn!("DYNAMODB_TABLE not set; /api/status will report the database as disconnected");
    }

    let address = config.server_address();
    tracing::info!(%address, %version, region = %config.aws_region, "starting server");

    let aggregator = Data::new(aggregator);
    let schema = Data::new(schema);
    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(security_headers())
            .wrap(cors(&config))
            .app_data(aggregator.clone())
            .app_data(schema.clone())
            .configure(packpixie_api::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()))
    })
    .bind(address)?
    .run()
    .await
}
