//! Garden Advisor WASM Module
//!
//! This crate provides WebAssembly bindings so the browser widgets can run
//! the advisory core locally. Structured results cross the boundary as
//! JSON strings in the same camelCase shape the HTTP API returns.

use chrono::NaiveDate;
use garden_advisor_shared::{
    compute_recommendation, growth_series, irrigation_profile, summarize_growth, translate,
    EnvironmentSample, FaqTable, Locale, PlantCatalog, PlantType, MAX_GROWTH_DAYS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use serde_json::json;
use wasm_bindgen::prelude::*;

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

fn rng_for(seed: Option<u32>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(u64::from(seed)),
        None => StdRng::from_entropy(),
    }
}

/// Irrigation recommendation from the prediction form fields
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn recommend_irrigation(
    soil_moisture_percent: f64,
    temperature_c: f64,
    humidity_percent: f64,
    rainfall_mm: f64,
    sunlight_hours: f64,
    days_since_irrigation: f64,
    plant_type: &str,
    plant_name: &str,
    seed: Option<u32>,
) -> String {
    let env = EnvironmentSample {
        soil_moisture_percent,
        temperature_c,
        humidity_percent,
        rainfall_mm,
        sunlight_hours,
        days_since_irrigation,
        plant_type: PlantType::from_str_lossy(plant_type),
        plant_name: plant_name.to_string(),
        weather: None,
    };
    to_json(&compute_recommendation(&env, &mut rng_for(seed)))
}

/// Irrigation recommendation from a JSON environment sample
#[wasm_bindgen]
pub fn recommend_irrigation_json(sample_json: &str, seed: Option<u32>) -> Result<String, JsError> {
    let env: EnvironmentSample = serde_json::from_str(sample_json)?;
    Ok(to_json(&compute_recommendation(&env, &mut rng_for(seed))))
}

/// Growth series and summary ending on `end_date` (YYYY-MM-DD)
///
/// Windows longer than `MAX_GROWTH_DAYS` are rejected.
#[wasm_bindgen]
pub fn growth_report(
    plant_name: &str,
    days: u32,
    end_date: &str,
    seed: Option<u32>,
) -> Result<String, JsError> {
    if days > MAX_GROWTH_DAYS {
        return Err(JsError::new(&format!("days must be at most {}", MAX_GROWTH_DAYS)));
    }
    let end_date = NaiveDate::parse_from_str(end_date, "%Y-%m-%d")?;
    let series = growth_series(plant_name, days, end_date, seed.map(u64::from));
    let summary = summarize_growth(&series);
    Ok(json!({ "series": series, "summary": summary }).to_string())
}

/// Irrigation DNA profile for a plant
#[wasm_bindgen]
pub fn irrigation_dna(plant_name: &str, plant_type: &str) -> String {
    to_json(&irrigation_profile(plant_name, PlantType::from_str_lossy(plant_type)))
}

/// Chatbot reply from the built-in FAQ table
#[wasm_bindgen]
pub fn answer_question(question: &str) -> String {
    FaqTable::default().answer(question).to_string()
}

/// Localized UI string; unknown locales use English
#[wasm_bindgen]
pub fn translate_key(locale: &str, key: &str) -> String {
    let locale = locale.parse::<Locale>().unwrap_or_default();
    translate(locale, key).to_string()
}

/// Catalog search; an empty or unknown type disables the type filter
#[wasm_bindgen]
pub fn search_catalog(term: &str, plant_type: &str) -> String {
    let plant_type = plant_type.parse::<PlantType>().ok();
    to_json(&PlantCatalog::default().search(term, plant_type))
}
