pub mod checker;
pub mod config;
pub mod error;
pub mod graphql;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod services;
pub mod store;
pub mod version;
