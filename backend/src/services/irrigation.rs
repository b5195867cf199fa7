//! Irrigation prediction service

use crate::error::ApiResult;
use crate::state::AppState;
use garden_advisor_shared::validation::validate_finite;
use garden_advisor_shared::{
    compute_recommendation, compute_recommendation_with_base, EnvironmentSample,
    RecommendationResult,
};
use serde::Deserialize;
use tracing::{debug, info};
use validator::Validate;

/// Prediction request: an environment sample plus optional overrides
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PredictRequest {
    #[serde(flatten)]
    pub sample: EnvironmentSample,
    /// Fixed baseline water volume instead of a random draw
    #[validate(range(
        min = 1.0,
        exclusive_max = 3.0,
        message = "waterBase must be at least 1 and below 3 liters"
    ))]
    pub water_base: Option<f64>,
    pub seed: Option<u64>,
}

pub struct IrrigationService;

impl IrrigationService {
    /// Compute a recommendation for one environment sample
    pub fn predict(state: &AppState, req: PredictRequest) -> ApiResult<RecommendationResult> {
        req.validate()?;
        Self::validate_sample(&req.sample)?;

        let sample = &req.sample;
        let result = match req.water_base {
            Some(water_base) => compute_recommendation_with_base(sample, water_base),
            None => state.with_rng(req.seed, |rng| compute_recommendation(sample, rng)),
        };

        info!(
            plant = %sample.plant_name,
            plant_type = %sample.plant_type,
            irrigation_type = %result.irrigation_type,
            irrigation_needed = result.irrigation_needed,
            "Computed irrigation recommendation"
        );
        debug!(outlook = ?result.weather_outlook, note = ?result.advisory_note, "Recommendation detail");

        Ok(result)
    }

    fn validate_sample(sample: &EnvironmentSample) -> ApiResult<()> {
        validate_finite("soilMoisturePercent", sample.soil_moisture_percent)?;
        validate_finite("temperatureC", sample.temperature_c)?;
        validate_finite("humidityPercent", sample.humidity_percent)?;
        validate_finite("rainfallMm", sample.rainfall_mm)?;
        validate_finite("sunlightHours", sample.sunlight_hours)?;
        validate_finite("daysSinceIrrigation", sample.days_since_irrigation)?;
        if let Some(weather) = &sample.weather {
            validate_finite("currentTempC", weather.current_temp_c)?;
            validate_finite("currentHumidityPercent", weather.current_humidity_percent)?;
            validate_finite("forecastRainChancePercent", weather.forecast_rain_chance_percent)?;
            validate_finite("forecastAvgTempC", weather.forecast_avg_temp_c)?;
        }
        Ok(())
    }
}
