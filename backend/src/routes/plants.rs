//! Plant catalog API routes

use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiQuery};
use crate::services::plants::{IdentifyRequest, PlantSearchQuery, PlantService, PlantTypeEntry};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use garden_advisor_shared::{Identification, PlantRecord};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct NamesQuery {
    #[serde(rename = "type")]
    plant_type: Option<String>,
}

/// Create plant catalog routes
pub fn plant_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(search_plants))
        .route("/types", get(list_types))
        .route("/names", get(list_names))
        .route("/identify", post(identify_plant))
        .route("/:name", get(get_plant))
}

/// GET /api/v1/plants - Search by name or type label, optionally filtered by type
async fn search_plants(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<PlantSearchQuery>,
) -> ApiResult<Json<Vec<&'static PlantRecord>>> {
    PlantService::search(&state, &query).map(Json)
}

/// GET /api/v1/plants/types - Plant types present in the catalog
async fn list_types(State(state): State<AppState>) -> Json<Vec<PlantTypeEntry>> {
    Json(PlantService::types(&state))
}

/// GET /api/v1/plants/names - Example plant names for the picker
async fn list_names(
    ApiQuery(query): ApiQuery<NamesQuery>,
) -> ApiResult<Json<Vec<&'static str>>> {
    PlantService::names(query.plant_type.as_deref()).map(Json)
}

/// GET /api/v1/plants/:name - One catalog entry
async fn get_plant(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<&'static PlantRecord>> {
    PlantService::find(&state, &name).map(Json)
}

/// POST /api/v1/plants/identify - Simulated photo identification
async fn identify_plant(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<IdentifyRequest>,
) -> ApiResult<Json<Identification>> {
    PlantService::identify(&state, req).map(Json)
}
