//! HTTP API for the model performance catalog.
//!
//! Provides REST endpoints using axum.
//!
//! ## Endpoints
//!
//! - `GET /health` - Liveness check
//! - `GET /performance-data` - Telemetry bundle for one model (`?model_id=...`)
//! - `GET /models` - All known models with their bundles
//!
//! Both catalog endpoints always answer 200 on well-formed requests:
//! an unrecognized `model_id` resolves to the default tier instead of
//! producing an error response.

use axum::{Json, Router, extract::Query, routing::get};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::debug;

use crate::domain::telemetry::{self, ModelRecord, PerformanceData};

/// Model selected when the query omits `model_id`.
const DEFAULT_MODEL_ID: &str = "model-v2";

/// Query parameters for `GET /performance-data`.
#[derive(Debug, Deserialize)]
pub struct PerformanceQuery {
    pub model_id: Option<String>,
}

/// Response body for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Builds the application router.
///
/// The router is stateless; tests drive it directly with
/// `tower::ServiceExt::oneshot` without binding a socket. CORS is wide
/// open: the dashboard frontend is served from a different origin.
pub fn router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/performance-data", get(performance_data_handler))
        .route("/models", get(list_models_handler))
        .layer(cors)
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn performance_data_handler(
    Query(query): Query<PerformanceQuery>,
) -> Json<PerformanceData> {
    let model_id = query.model_id.as_deref().unwrap_or(DEFAULT_MODEL_ID);
    debug!(model_id, "serving performance data");
    Json(telemetry::performance_data(model_id))
}

async fn list_models_handler() -> Json<Vec<ModelRecord>> {
    debug!("serving model list");
    Json(telemetry::list_models())
}
