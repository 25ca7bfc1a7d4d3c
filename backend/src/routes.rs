use std::path::Path;

use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::post,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
};

use crate::{handlers, request_context::request_context_middleware, state::AppState};

pub fn create_router(state: AppState, site_dir: Option<&Path>) -> Router {
    // Answers preflight requests
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    // The relay advertises its CORS policy on every response, not only on
    // requests that carry an Origin header
    let api = Router::new()
        .route("/api/analyze", post(handlers::analyze))
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("content-type"),
        ))
        .with_state(state);

    let app = match site_dir {
        Some(dir) => api.fallback_service(ServeDir::new(dir)),
        None => api,
    };

    app.layer(middleware::from_fn(request_context_middleware))
}
