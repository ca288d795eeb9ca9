use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::goodreads::GoodreadsClient;

pub mod handlers;
pub mod models;

pub fn create_router(config: &Config) -> Router {
    let goodreads = Arc::new(GoodreadsClient::new(
        config.upstream_endpoint.clone(),
        config.api_key.clone(),
    ));

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // API routes
        .route("/books", get(handlers::books_handler))
        .with_state(goodreads)
        // Index document and static assets for the UI
        .route_service("/", ServeFile::new(&config.index_file))
        .fallback_service(ServeDir::new(&config.public_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
