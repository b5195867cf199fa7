//! Garden Advisor Shared Library
//!
//! This crate contains the advisory core used by the backend and WASM
//! modules: irrigation recommendations, growth series, irrigation profiles,
//! the FAQ matcher, the plant catalog and UI localization.
//!
//! Every generator takes its randomness as an injected [`rand::Rng`], so a
//! seeded generator reproduces its output exactly.

pub mod catalog;
pub mod errors;
pub mod faq;
pub mod growth;
pub mod locale;
pub mod profile;
pub mod recommendation;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use types::*;

pub use catalog::{plant_names, Identification, PlantCatalog, PlantRecord, PLANT_RECORDS};
pub use faq::{answer, FaqEntry, FaqTable, FALLBACK_ANSWER, GREETING, QUICK_QUESTIONS};
pub use growth::{
    generate_growth_series, growth_series, name_seed, summarize_growth, GrowthSample,
    GrowthSummary, GrowthTrend, DEFAULT_GROWTH_DAYS, MAX_GROWTH_DAYS,
};
pub use locale::{translate, translations, Locale};
pub use profile::{
    generate_irrigation_profile, irrigation_profile, IrrigationProfile, RadarCategory,
    RadarScore, SeasonalAdjustments, WeatherSensitivity,
};
pub use recommendation::{
    compute_recommendation, compute_recommendation_with_base, EnvironmentSample,
    FeatureImportance, IrrigationType, RecommendationResult, WeatherOutlook, WeatherSnapshot,
    FEATURE_IMPORTANCE,
};
