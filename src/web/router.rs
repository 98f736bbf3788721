use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::web::handlers::{api_properties, api_property, book, health, index, properties_htmx};
use crate::web::state::AppState;

pub fn app_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/properties", get(properties_htmx))
        .route("/book/:id", post(book))
        .route("/api/properties", get(api_properties))
        .route("/api/properties/:id", get(api_property))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(cors)
        .with_state(state)
}
