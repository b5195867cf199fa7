//! Growth tracker API routes

use crate::error::ApiResult;
use crate::extract::ApiQuery;
use crate::services::growth::{GrowthQuery, GrowthReport, GrowthService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

/// Create growth routes
pub fn growth_routes() -> Router<AppState> {
    Router::new().route("/:plant_name", get(growth_report))
}

/// GET /api/v1/growth/:plant_name - Synthetic growth series and summary
///
/// Query: `days` (default from config), `seed`, `end_date` (YYYY-MM-DD,
/// default today).
async fn growth_report(
    State(state): State<AppState>,
    Path(plant_name): Path<String>,
    ApiQuery(query): ApiQuery<GrowthQuery>,
) -> ApiResult<Json<GrowthReport>> {
    GrowthService::report(&state, &plant_name, query).map(Json)
}
