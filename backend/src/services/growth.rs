//! Growth tracker service

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use chrono::{NaiveDate, Utc};
use garden_advisor_shared::validation::validate_plant_name;
use garden_advisor_shared::{
    growth_series, summarize_growth, GrowthSample, GrowthSummary, MAX_GROWTH_DAYS,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Query parameters for a growth report
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GrowthQuery {
    pub days: Option<u32>,
    pub seed: Option<u64>,
    pub end_date: Option<NaiveDate>,
}

/// Growth series with its headline metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthReport {
    pub plant_name: String,
    pub series: Vec<GrowthSample>,
    pub summary: GrowthSummary,
}

pub struct GrowthService;

impl GrowthService {
    /// Build the growth report for a plant
    ///
    /// Without a seed the plant name seeds the series, so repeated calls
    /// for one plant return the same curve.
    pub fn report(state: &AppState, plant_name: &str, query: GrowthQuery) -> ApiResult<GrowthReport> {
        validate_plant_name(plant_name)?;

        let advisor = &state.config().advisor;
        let max_days = advisor.max_growth_days.min(MAX_GROWTH_DAYS);
        let days = query.days.unwrap_or(advisor.default_growth_days);
        if days > max_days {
            return Err(ApiError::Validation(format!("days must be at most {}", max_days)));
        }

        let end_date = query.end_date.unwrap_or_else(|| Utc::now().date_naive());
        let series = growth_series(plant_name, days, end_date, query.seed);
        let summary = summarize_growth(&series);

        info!(
            plant = %plant_name,
            days,
            trend = ?summary.trend,
            growth_percentage = summary.growth_percentage,
            "Generated growth series"
        );

        Ok(GrowthReport {
            plant_name: plant_name.to_string(),
            series,
            summary,
        })
    }
}
