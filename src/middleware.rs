use crate::config::AppConfig;
use actix_cors::Cors;
use actix_web::middleware::DefaultHeaders;

/// CORS policy: any origin in development, the configured allow-list in
/// production.
pub fn cors(config: &AppConfig) -> Cors {
    if !config.is_production() {
        return Cors::permissive();
    }

    config
        .cors_allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_any_header()
        .max_age(3600)
}

/// Baseline security headers added to every response. No
/// Content-Security-Policy: the playground and Swagger UI load inline
/// scripts.
pub fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("X-Content-Type-Options", "nosniff"))
        .add(("X-Frame-Options", "SAMEORIGIN"))
        .add(("X-DNS-Prefetch-Control", "off"))
        .add(("Referrer-Policy", "no-referrer"))
        .add(("Cross-Origin-Resource-Policy", "same-origin"))
        .add(("Strict-Transport-Security", "max-age=15552000; includeSubDomains"))
}
