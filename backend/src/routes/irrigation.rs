//! Irrigation prediction API routes

use crate::error::ApiResult;
use crate::extract::ApiJson;
use crate::services::irrigation::{IrrigationService, PredictRequest};
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use garden_advisor_shared::{FeatureImportance, RecommendationResult, FEATURE_IMPORTANCE};

/// Create irrigation routes
pub fn irrigation_routes() -> Router<AppState> {
    Router::new()
        .route("/predict", post(predict))
        .route("/feature-importance", get(feature_importance))
}

/// POST /api/v1/irrigation/predict - Recommend water volume and method
async fn predict(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<PredictRequest>,
) -> ApiResult<Json<RecommendationResult>> {
    IrrigationService::predict(&state, req).map(Json)
}

/// GET /api/v1/irrigation/feature-importance - Static model weights
async fn feature_importance() -> Json<Vec<FeatureImportance>> {
    Json(FEATURE_IMPORTANCE.to_vec())
}
