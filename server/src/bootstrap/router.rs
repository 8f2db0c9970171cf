use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::bootstrap::state::AppState;
use atelier_adapters::incoming::http_axum::routes::build_application_router;
use atelier_adapters::shared::app_state::AppState as AdaptersAppState;
use atelier_application::error::AppError;

pub fn create_router(state: AppState) -> Result<Router, AppError> {
    let (adapters_state, password_hasher) = state.to_adapters_state();
    let cors_layer = create_cors_layer(&adapters_state);

    let application_router = build_application_router(&adapters_state, password_hasher);

    Ok(application_router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer),
        )
        .with_state(adapters_state))
}

fn create_cors_layer(state: &AdaptersAppState) -> CorsLayer {
    let base_cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("authorization"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-requested-with"),
        ])
        .allow_credentials(true);

    match &state.config.server.cors_origin {
        Some(origin) => base_cors.allow_origin(
            origin
                .parse::<HeaderValue>()
                .unwrap_or_else(|_| HeaderValue::from_static("http://localhost:5173")),
        ),
        None => base_cors.allow_origin(HeaderValue::from_static("http://localhost:5173")),
    }
}
