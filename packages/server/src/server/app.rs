//! Application setup and server configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method, StatusCode},
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{
    clear_results_handler, create_keyword_handler, create_website_handler,
    delete_keyword_handler, delete_website_handler, health_handler, list_keywords_handler,
    list_results_handler, list_websites_handler, search_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub deps: Arc<ServerDeps>,
}

/// Build the Axum application router
///
/// `allowed_origins` empty means any origin may call the API.
/// `request_timeout` applies to every route except `POST /search`.
pub fn build_app(
    deps: ServerDeps,
    allowed_origins: Vec<String>,
    request_timeout: Duration,
) -> Router {
    let app_state = AxumAppState {
        deps: Arc::new(deps),
    };

    // Searches are bounded by the aggregator's run deadline, so a slow
    // source degrades to fewer results instead of a 408.
    let bounded = Router::new()
        // Websites
        .route(
            "/websites",
            get(list_websites_handler).post(create_website_handler),
        )
        .route("/websites/:id", delete(delete_website_handler))
        // Keywords
        .route(
            "/keywords",
            get(list_keywords_handler).post(create_keyword_handler),
        )
        .route("/keywords/:id", delete(delete_keyword_handler))
        // Recorded search results
        .route(
            "/search/results",
            get(list_results_handler).delete(clear_results_handler),
        )
        // Health check
        .route("/health", get(health_handler))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ));

    Router::new()
        .route("/search", post(search_handler))
        .merge(bounded)
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(build_cors(&allowed_origins))
        .layer(TraceLayer::new_for_http())
}

fn build_cors(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    if allowed_origins.is_empty() {
        return cors.allow_origin(tower_http::cors::Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(origins))
}
