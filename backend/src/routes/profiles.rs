//! Irrigation DNA profile API routes

use crate::error::ApiResult;
use crate::extract::ApiQuery;
use crate::services::profile::ProfileService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use garden_advisor_shared::IrrigationProfile;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ProfileQuery {
    #[serde(rename = "type")]
    plant_type: Option<String>,
}

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/:plant_name", get(get_profile))
}

/// GET /api/v1/profiles/:plant_name - Irrigation profile for a plant
async fn get_profile(
    State(state): State<AppState>,
    Path(plant_name): Path<String>,
    ApiQuery(query): ApiQuery<ProfileQuery>,
) -> ApiResult<Json<IrrigationProfile>> {
    ProfileService::profile(&state, &plant_name, query.plant_type.as_deref()).map(Json)
}
