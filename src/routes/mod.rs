use std::sync::Arc;

use axum::{http::Method, Extension, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{handlers::posts::posts_handler, AppState};

pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_route = posts_handler()
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state));

    Router::new()
        .nest("/api", api_route)
        .layer(configure_cors())
}

pub fn configure_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
        .allow_origin(Any)
}
