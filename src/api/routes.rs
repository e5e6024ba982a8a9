//! Router assembly

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api::{health, predictions};
use crate::middleware::{auth::AuthLayer, rate_limit::RateLimitLayer};
use crate::AppState;

/// Build the application router.
///
/// Auth and rate limiting are opt-in layers driven by configuration; both
/// leave `/api/health` alone so liveness probes keep working.
pub fn create_router(state: Arc<AppState>) -> Router {
    let settings = &state.settings;

    let mut router = Router::new()
        .route("/api/crops/fertility", post(predictions::predict_fertility))
        .route("/api/crops/moisture", post(predictions::predict_moisture))
        .route("/api/health", get(health::health))
        .with_state(state.clone());

    if settings.rate_limit.enabled {
        router = router.layer(RateLimitLayer::new(
            settings.rate_limit.requests_per_second,
            settings.rate_limit.burst_size,
        ));
    }

    if settings.auth.enabled {
        router = router.layer(AuthLayer::new(settings.auth.api_keys.clone()));
    }

    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
