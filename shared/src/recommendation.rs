//! Irrigation recommendation engine
//!
//! Turns a snapshot of soil, weather and plant parameters into a water
//! requirement, an evaporation estimate, an irrigation method and a short
//! soil-moisture forecast.
//!
//! # Design Principles
//!
//! 1. **Total**: out-of-range input is clamped, never rejected
//! 2. **Injected randomness**: the baseline water draw comes from a caller
//!    supplied [`rand::Rng`], so a seeded generator pins the output
//! 3. **Plain data**: no rendering or transport concerns

use crate::types::PlantType;
use crate::validation::{clamp_finite, clamp_percent, finite_or_zero, non_negative, round2};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Range of the baseline "thirst" factor in liters
pub const WATER_BASE_MIN: f64 = 1.0;
pub const WATER_BASE_MAX: f64 = 3.0;

/// Water requirement above which sprinklers replace drip lines (liters/day)
pub const SPRINKLER_THRESHOLD_LITERS: f64 = 2.5;

/// Forecast rain chance above which irrigation is skipped (%)
pub const RAIN_SKIP_CHANCE_PERCENT: f64 = 60.0;

/// Forecast average temperature above which a heatwave is assumed (°C)
pub const HEATWAVE_TEMP_C: f64 = 30.0;

/// Forecast average temperature below which cold conditions are assumed (°C)
pub const COLD_TEMP_C: f64 = 5.0;

/// Projected soil moisture at or above which irrigation can wait (%)
pub const SUFFICIENT_MOISTURE_PERCENT: f64 = 30.0;

/// Days of evaporation used for the moisture forecast
const FORECAST_DAYS: f64 = 3.0;

// ============================================================================
// Input Types
// ============================================================================

/// Weather conditions from an external lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub current_temp_c: f64,
    pub current_humidity_percent: f64,
    pub condition_text: String,
    pub forecast_rain_chance_percent: f64,
    pub forecast_avg_temp_c: f64,
}

/// Environmental readings for one recommendation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentSample {
    pub soil_moisture_percent: f64,
    pub temperature_c: f64,
    pub humidity_percent: f64,
    pub rainfall_mm: f64,
    pub sunlight_hours: f64,
    #[serde(default)]
    pub days_since_irrigation: f64,
    pub plant_type: PlantType,
    pub plant_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherSnapshot>,
}

impl Default for EnvironmentSample {
    /// The form defaults shown when the prediction widget opens
    fn default() -> Self {
        Self {
            soil_moisture_percent: 45.0,
            temperature_c: 25.0,
            humidity_percent: 60.0,
            rainfall_mm: 5.0,
            sunlight_hours: 6.0,
            days_since_irrigation: 2.0,
            plant_type: PlantType::Ornamental,
            plant_name: "Rose".to_string(),
            weather: None,
        }
    }
}

impl EnvironmentSample {
    /// Copy of this sample with every field pulled into its valid domain
    pub fn normalized(&self) -> Self {
        Self {
            soil_moisture_percent: clamp_percent(self.soil_moisture_percent),
            temperature_c: finite_or_zero(self.temperature_c),
            humidity_percent: clamp_percent(self.humidity_percent),
            rainfall_mm: non_negative(self.rainfall_mm),
            sunlight_hours: clamp_finite(self.sunlight_hours, 0.0, 24.0),
            days_since_irrigation: non_negative(self.days_since_irrigation),
            plant_type: self.plant_type,
            plant_name: self.plant_name.clone(),
            weather: self.weather.as_ref().map(|w| WeatherSnapshot {
                current_temp_c: finite_or_zero(w.current_temp_c),
                current_humidity_percent: clamp_percent(w.current_humidity_percent),
                condition_text: w.condition_text.clone(),
                forecast_rain_chance_percent: clamp_percent(w.forecast_rain_chance_percent),
                forecast_avg_temp_c: finite_or_zero(w.forecast_avg_temp_c),
            }),
        }
    }
}

// ============================================================================
// Output Types
// ============================================================================

/// Irrigation method recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IrrigationType {
    Drip,
    Sprinkler,
    Flood,
}

impl fmt::Display for IrrigationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IrrigationType::Drip => write!(f, "Drip"),
            IrrigationType::Sprinkler => write!(f, "Sprinkler"),
            IrrigationType::Flood => write!(f, "Flood"),
        }
    }
}

/// Forecast classification applied to the water requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeatherOutlook {
    /// No forecast, or a forecast without extremes
    #[default]
    Normal,
    RainExpected,
    Heatwave,
    Cold,
}

impl WeatherOutlook {
    /// Classify a forecast; rain takes precedence over temperature
    pub fn classify(weather: &WeatherSnapshot) -> Self {
        if weather.forecast_rain_chance_percent > RAIN_SKIP_CHANCE_PERCENT {
            WeatherOutlook::RainExpected
        } else if weather.forecast_avg_temp_c > HEATWAVE_TEMP_C {
            WeatherOutlook::Heatwave
        } else if weather.forecast_avg_temp_c < COLD_TEMP_C {
            WeatherOutlook::Cold
        } else {
            WeatherOutlook::Normal
        }
    }

    /// Whether this outlook overrides the soil-moisture decision
    pub fn is_extreme(&self) -> bool {
        !matches!(self, WeatherOutlook::Normal)
    }
}

/// Irrigation recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub water_requirement_liters_per_day: f64,
    pub evaporation_rate_liters_per_day: f64,
    pub irrigation_type: IrrigationType,
    pub future_soil_moisture_percent: f64,
    pub irrigation_needed: bool,
    pub weather_outlook: WeatherOutlook,
    pub advisory_note: Option<String>,
}

// ============================================================================
// Calculations
// ============================================================================

/// Draw a baseline water volume in [1, 3) liters
pub fn draw_water_base<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(WATER_BASE_MIN..WATER_BASE_MAX)
}

/// Daily evaporation estimate
///
/// Formula: (T × 0.05 + sun × 0.1) × (1 - humidity/100), floored at 0
pub fn calculate_evaporation_rate(temperature_c: f64, sunlight_hours: f64, humidity_percent: f64) -> f64 {
    let rate = (temperature_c * 0.05 + sunlight_hours * 0.1) * (1.0 - humidity_percent / 100.0);
    non_negative(rate)
}

/// Soil moisture expected after three days of evaporation
pub fn project_soil_moisture(soil_moisture_percent: f64, evaporation_rate: f64) -> f64 {
    clamp_percent(soil_moisture_percent - evaporation_rate * FORECAST_DAYS)
}

/// Water requirement before any forecast adjustment
///
/// Formula: base × (T/20 + sun/6) × (100 - moisture)/100 × (1 - rain/50),
/// floored at 0
pub fn calculate_base_requirement(water_base: f64, env: &EnvironmentSample) -> f64 {
    let multiplier = env.temperature_c / 20.0 + env.sunlight_hours / 6.0;
    let soil_dryness = (100.0 - env.soil_moisture_percent) / 100.0;
    let rain_factor = 1.0 - env.rainfall_mm / 50.0;
    non_negative(water_base * multiplier * soil_dryness * rain_factor)
}

/// Pick the irrigation method for a (rounded) water requirement
pub fn classify_irrigation_type(water_requirement: f64, plant_type: PlantType) -> IrrigationType {
    if plant_type == PlantType::Aquatic {
        IrrigationType::Flood
    } else if water_requirement > SPRINKLER_THRESHOLD_LITERS {
        IrrigationType::Sprinkler
    } else {
        IrrigationType::Drip
    }
}

/// Compute a recommendation, drawing the baseline water volume from `rng`
pub fn compute_recommendation<R: Rng + ?Sized>(env: &EnvironmentSample, rng: &mut R) -> RecommendationResult {
    let water_base = draw_water_base(rng);
    compute_recommendation_with_base(env, water_base)
}

/// Compute a recommendation with an explicit baseline water volume
pub fn compute_recommendation_with_base(env: &EnvironmentSample, water_base: f64) -> RecommendationResult {
    let env = env.normalized();
    let mut water_requirement = calculate_base_requirement(non_negative(water_base), &env);

    let outlook = env
        .weather
        .as_ref()
        .map(WeatherOutlook::classify)
        .unwrap_or_default();

    let mut advisory_note: Option<String> = None;
    let mut irrigation_needed = true;

    match outlook {
        WeatherOutlook::RainExpected => {
            let chance = env
                .weather
                .as_ref()
                .map(|w| w.forecast_rain_chance_percent)
                .unwrap_or_default();
            water_requirement = 0.0;
            irrigation_needed = false;
            advisory_note = Some(format!("Skipping irrigation: rain forecast at {}%", chance));
        }
        WeatherOutlook::Heatwave => {
            water_requirement *= 1.5;
            advisory_note = Some("Increasing water due to high temperatures".to_string());
        }
        WeatherOutlook::Cold => {
            water_requirement *= 0.7;
            advisory_note = Some("Reducing water due to cold conditions".to_string());
        }
        WeatherOutlook::Normal => {}
    }

    let evaporation_rate =
        calculate_evaporation_rate(env.temperature_c, env.sunlight_hours, env.humidity_percent);
    let future_soil_moisture = project_soil_moisture(env.soil_moisture_percent, evaporation_rate);

    if !outlook.is_extreme() && future_soil_moisture >= SUFFICIENT_MOISTURE_PERCENT {
        irrigation_needed = false;
        advisory_note.get_or_insert_with(|| "Soil moisture sufficient for next few days".to_string());
    }

    // Classify on the reported value so the threshold holds for callers
    let water_requirement = round2(water_requirement);
    let irrigation_type = classify_irrigation_type(water_requirement, env.plant_type);

    RecommendationResult {
        water_requirement_liters_per_day: water_requirement,
        evaporation_rate_liters_per_day: round2(evaporation_rate),
        irrigation_type,
        future_soil_moisture_percent: round2(future_soil_moisture),
        irrigation_needed,
        weather_outlook: outlook,
        advisory_note,
    }
}

// ============================================================================
// Feature Importance
// ============================================================================

/// Relative weight of an input in the irrigation model
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureImportance {
    pub name: &'static str,
    pub importance: f64,
}

/// Importance chart shown next to a prediction
pub const FEATURE_IMPORTANCE: [FeatureImportance; 7] = [
    FeatureImportance { name: "Plant_Type", importance: 0.28 },
    FeatureImportance { name: "Plant_Name", importance: 0.22 },
    FeatureImportance { name: "Soil_Moisture", importance: 0.15 },
    FeatureImportance { name: "Temperature", importance: 0.12 },
    FeatureImportance { name: "Humidity", importance: 0.10 },
    FeatureImportance { name: "Rainfall", importance: 0.08 },
    FeatureImportance { name: "Sunlight_Hours", importance: 0.05 },
];

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn weather(rain_chance: f64, avg_temp: f64) -> WeatherSnapshot {
        WeatherSnapshot {
            current_temp_c: avg_temp,
            current_humidity_percent: 50.0,
            condition_text: "Partly cloudy".to_string(),
            forecast_rain_chance_percent: rain_chance,
            forecast_avg_temp_c: avg_temp,
        }
    }

    fn plant_type_strategy() -> impl Strategy<Value = PlantType> {
        prop::sample::select(PlantType::ALL.to_vec())
    }

    // =========================================================================
    // Scenario Tests
    // =========================================================================

    #[test]
    fn test_default_form_scenario() {
        let env = EnvironmentSample::default();
        let result = compute_recommendation_with_base(&env, 2.0);

        assert_eq!(result.evaporation_rate_liters_per_day, 0.74);
        assert_eq!(result.future_soil_moisture_percent, 42.78);
        assert!(!result.irrigation_needed);
        assert_eq!(
            result.advisory_note.as_deref(),
            Some("Soil moisture sufficient for next few days")
        );
        assert_eq!(result.weather_outlook, WeatherOutlook::Normal);
    }

    #[test]
    fn test_base_requirement_formula() {
        // 2.0 × (25/20 + 6/6) × 0.55 × 0.9 = 2.2275
        let env = EnvironmentSample::default();
        let result = compute_recommendation_with_base(&env, 2.0);
        assert!((result.water_requirement_liters_per_day - 2.2275).abs() < 0.006);
        assert_eq!(result.irrigation_type, IrrigationType::Drip);

        // 3.0 × 2.25 × 0.55 × 0.9 = 3.34
        let result = compute_recommendation_with_base(&env, 3.0);
        assert_eq!(result.irrigation_type, IrrigationType::Sprinkler);
    }

    #[test]
    fn test_dry_soil_needs_irrigation() {
        let env = EnvironmentSample {
            soil_moisture_percent: 20.0,
            ..EnvironmentSample::default()
        };
        let result = compute_recommendation_with_base(&env, 1.5);
        assert!(result.irrigation_needed);
        assert!(result.advisory_note.is_none());
    }

    #[test]
    fn test_heavy_rainfall_floors_requirement() {
        let env = EnvironmentSample {
            rainfall_mm: 80.0,
            ..EnvironmentSample::default()
        };
        let result = compute_recommendation_with_base(&env, 2.0);
        assert_eq!(result.water_requirement_liters_per_day, 0.0);
    }

    #[test]
    fn test_rain_forecast_skips_irrigation() {
        let env = EnvironmentSample {
            soil_moisture_percent: 10.0,
            weather: Some(weather(75.0, 32.0)),
            ..EnvironmentSample::default()
        };
        let result = compute_recommendation_with_base(&env, 2.9);

        assert_eq!(result.water_requirement_liters_per_day, 0.0);
        assert!(!result.irrigation_needed);
        assert_eq!(result.weather_outlook, WeatherOutlook::RainExpected);
        assert_eq!(
            result.advisory_note.as_deref(),
            Some("Skipping irrigation: rain forecast at 75%")
        );
    }

    #[test]
    fn test_heatwave_increases_water() {
        let env = EnvironmentSample::default();
        let plain = compute_recommendation_with_base(&env, 2.0);

        let hot = EnvironmentSample {
            weather: Some(weather(10.0, 34.0)),
            ..EnvironmentSample::default()
        };
        let result = compute_recommendation_with_base(&hot, 2.0);

        assert_eq!(result.weather_outlook, WeatherOutlook::Heatwave);
        assert!((result.water_requirement_liters_per_day - plain.water_requirement_liters_per_day * 1.5).abs() < 0.02);
        // Extreme weather keeps irrigation on even with moist soil
        assert!(result.irrigation_needed);
        assert_eq!(
            result.advisory_note.as_deref(),
            Some("Increasing water due to high temperatures")
        );
    }

    #[test]
    fn test_cold_reduces_water() {
        let cold = EnvironmentSample {
            weather: Some(weather(20.0, 2.0)),
            ..EnvironmentSample::default()
        };
        let result = compute_recommendation_with_base(&cold, 2.0);

        assert_eq!(result.weather_outlook, WeatherOutlook::Cold);
        // 2.2275 × 0.7 = 1.559
        assert_eq!(result.water_requirement_liters_per_day, 1.56);
        assert!(result.irrigation_needed);
        assert_eq!(
            result.advisory_note.as_deref(),
            Some("Reducing water due to cold conditions")
        );
    }

    #[test]
    fn test_mild_forecast_uses_moisture_rule() {
        let env = EnvironmentSample {
            weather: Some(weather(30.0, 20.0)),
            ..EnvironmentSample::default()
        };
        let result = compute_recommendation_with_base(&env, 2.0);
        assert_eq!(result.weather_outlook, WeatherOutlook::Normal);
        assert!(!result.irrigation_needed);
    }

    #[test]
    fn test_aquatic_always_flood() {
        let env = EnvironmentSample {
            plant_type: PlantType::Aquatic,
            plant_name: "Water Lily".to_string(),
            ..EnvironmentSample::default()
        };
        let result = compute_recommendation_with_base(&env, 1.0);
        assert!(result.water_requirement_liters_per_day <= 2.5);
        assert_eq!(result.irrigation_type, IrrigationType::Flood);
    }

    #[test]
    fn test_out_of_range_inputs_are_clamped() {
        let env = EnvironmentSample {
            soil_moisture_percent: 180.0,
            humidity_percent: -20.0,
            rainfall_mm: -4.0,
            sunlight_hours: 30.0,
            ..EnvironmentSample::default()
        };
        let result = compute_recommendation_with_base(&env, 2.0);
        assert!(result.future_soil_moisture_percent <= 100.0);
        assert_eq!(result.water_requirement_liters_per_day, 0.0);
    }

    #[test]
    fn test_non_finite_inputs_are_total() {
        let env = EnvironmentSample {
            temperature_c: f64::NAN,
            sunlight_hours: f64::INFINITY,
            ..EnvironmentSample::default()
        };
        let result = compute_recommendation_with_base(&env, 2.0);
        assert!(result.water_requirement_liters_per_day.is_finite());
        assert!(result.evaporation_rate_liters_per_day.is_finite());
    }

    #[test]
    fn test_seeded_generator_is_reproducible() {
        let env = EnvironmentSample {
            soil_moisture_percent: 15.0,
            ..EnvironmentSample::default()
        };
        let a = compute_recommendation(&env, &mut StdRng::seed_from_u64(7));
        let b = compute_recommendation(&env, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_result_serde_round_trip() {
        let env = EnvironmentSample {
            weather: Some(weather(10.0, 34.0)),
            ..EnvironmentSample::default()
        };
        let result = compute_recommendation_with_base(&env, 2.4);

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("waterRequirementLitersPerDay"));
        let decoded: RecommendationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, result);
    }

    #[test]
    fn test_environment_sample_from_form_json() {
        let json = r#"{
            "soilMoisturePercent": 45,
            "temperatureC": 25,
            "humidityPercent": 60,
            "rainfallMm": 5,
            "sunlightHours": 6,
            "plantType": "Ornamental",
            "plantName": "Rose"
        }"#;
        let env: EnvironmentSample = serde_json::from_str(json).unwrap();
        assert_eq!(env.days_since_irrigation, 0.0);
        assert!(env.weather.is_none());
    }

    #[test]
    fn test_feature_importance_sums_to_one() {
        let total: f64 = FEATURE_IMPORTANCE.iter().map(|f| f.importance).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    // =========================================================================
    // Properties
    // =========================================================================

    prop_compose! {
        fn environment()(
            moisture in 0.0f64..=100.0,
            temperature in -10.0f64..45.0,
            humidity in 0.0f64..=100.0,
            rainfall in 0.0f64..100.0,
            sunlight in 0.0f64..=24.0,
            plant_type in plant_type_strategy(),
        ) -> EnvironmentSample {
            EnvironmentSample {
                soil_moisture_percent: moisture,
                temperature_c: temperature,
                humidity_percent: humidity,
                rainfall_mm: rainfall,
                sunlight_hours: sunlight,
                days_since_irrigation: 1.0,
                plant_type,
                plant_name: "Test".to_string(),
                weather: None,
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Property: water requirement is non-negative and moisture stays a percentage
        #[test]
        fn prop_outputs_in_range(env in environment(), base in 1.0f64..3.0) {
            let result = compute_recommendation_with_base(&env, base);
            prop_assert!(result.water_requirement_liters_per_day >= 0.0);
            prop_assert!(result.evaporation_rate_liters_per_day >= 0.0);
            prop_assert!((0.0..=100.0).contains(&result.future_soil_moisture_percent));
        }

        /// Property: a likely-rain forecast always cancels irrigation
        #[test]
        fn prop_rain_forecast_cancels(
            env in environment(),
            base in 1.0f64..3.0,
            chance in 60.01f64..=100.0,
            avg_temp in -10.0f64..45.0
        ) {
            let env = EnvironmentSample { weather: Some(weather(chance, avg_temp)), ..env };
            let result = compute_recommendation_with_base(&env, base);
            prop_assert_eq!(result.water_requirement_liters_per_day, 0.0);
            prop_assert!(!result.irrigation_needed);
        }

        /// Property: aquatic plants are always flood irrigated
        #[test]
        fn prop_aquatic_is_flood(env in environment(), base in 1.0f64..3.0) {
            let env = EnvironmentSample { plant_type: PlantType::Aquatic, ..env };
            let result = compute_recommendation_with_base(&env, base);
            prop_assert_eq!(result.irrigation_type, IrrigationType::Flood);
        }

        /// Property: without weather, sprinkler iff requirement exceeds 2.5 L
        #[test]
        fn prop_sprinkler_threshold(env in environment(), seed in any::<u64>()) {
            prop_assume!(env.plant_type != PlantType::Aquatic);
            let result = compute_recommendation(&env, &mut StdRng::seed_from_u64(seed));
            let expected = if result.water_requirement_liters_per_day > 2.5 {
                IrrigationType::Sprinkler
            } else {
                IrrigationType::Drip
            };
            prop_assert_eq!(result.irrigation_type, expected);
        }
    }
}
