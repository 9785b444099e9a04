use crate::handlers;
use crate::state::AppState;
use axum::{http::HeaderValue, routing::get, Router};
use parkstat_domain::config::ServerConfig;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/history", get(handlers::get_history))
        .route("/car", get(handlers::get_vehicles))
        .route("/park", get(handlers::get_zones))
        .with_state(state)
}

/// Creates the application router: API under `/api`, CORS and request tracing.
pub fn create_app(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        .nest("/api", create_api_routes(state))
        .layer(cors_layer(&server.cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
}

/// `"*"` allows any origin without credentials; otherwise only the listed
/// origins are allowed and credentials are permitted.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    if origins.iter().any(|o| o == "*") {
        return layer.allow_origin(AllowOrigin::any());
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer
        .allow_origin(AllowOrigin::list(allowed))
        .allow_credentials(true)
}
