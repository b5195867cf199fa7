//! Irrigation "DNA" profile synthesis
//!
//! Builds a watering profile for a plant: preferred soil, container size,
//! frequency and amount, seasonal adjustments, radar-chart scores and
//! weather sensitivity.
//!
//! Soil type, water level and drought resistance come from the plant-type
//! characteristic table, positioned inside each range by the plant name
//! seed. The remaining scores draw from an injected generator.

use crate::growth::name_seed;
use crate::types::PlantType;
use crate::validation::{clamp_score, round2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Container suggestions from smallest to largest
pub const CONTAINER_SIZES: [&str; 5] = [
    "Small pot (15-20cm)",
    "Medium pot (25-30cm)",
    "Large pot (35-45cm)",
    "XL container (50cm+)",
    "Garden bed",
];

/// Upper bound of every radar and sensitivity score
pub const SCORE_FULL_MARK: f64 = 10.0;

// ============================================================================
// Plant Type Characteristics
// ============================================================================

/// Irrigation traits shared by a plant type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeCharacteristics {
    pub soil_preference: &'static [&'static str],
    pub water_level: (f64, f64),
    pub drought_resistance: (f64, f64),
}

/// Traits used for plant types without their own entry
pub const DEFAULT_CHARACTERISTICS: TypeCharacteristics = TypeCharacteristics {
    soil_preference: &["Loamy", "Well-drained"],
    water_level: (5.0, 7.0),
    drought_resistance: (5.0, 7.0),
};

const fn traits(
    soil_preference: &'static [&'static str],
    water_level: (f64, f64),
    drought_resistance: (f64, f64),
) -> TypeCharacteristics {
    TypeCharacteristics {
        soil_preference,
        water_level,
        drought_resistance,
    }
}

/// Look up the characteristic ranges for a plant type
pub fn characteristics(plant_type: PlantType) -> TypeCharacteristics {
    match plant_type {
        PlantType::Ornamental => traits(&["Loamy", "Sandy loam", "Clay loam"], (5.0, 8.0), (3.0, 6.0)),
        PlantType::Shrubs => traits(&["Loamy", "Sandy", "Rocky"], (4.0, 7.0), (5.0, 8.0)),
        PlantType::Trees => traits(&["Loamy", "Sandy loam", "Clay"], (6.0, 9.0), (6.0, 9.0)),
        PlantType::Herbs => traits(&["Sandy", "Loamy", "Rich"], (5.0, 8.0), (3.0, 6.0)),
        PlantType::Climbers => traits(&["Loamy", "Rich", "Well-drained"], (5.0, 8.0), (4.0, 7.0)),
        PlantType::Succulents => traits(&["Sandy", "Gritty", "Well-drained"], (1.0, 3.0), (8.0, 10.0)),
        PlantType::Cacti => traits(&["Sandy", "Gritty", "Well-drained"], (1.0, 2.0), (9.0, 10.0)),
        PlantType::Aquatic => traits(&["Aquatic soil", "Clay", "Loamy"], (10.0, 10.0), (1.0, 2.0)),
        PlantType::Vegetables => traits(&["Rich", "Loamy", "Well-drained"], (6.0, 9.0), (3.0, 5.0)),
        PlantType::Fruits => traits(&["Loamy", "Rich", "Well-drained"], (6.0, 9.0), (4.0, 7.0)),
        _ => DEFAULT_CHARACTERISTICS,
    }
}

// ============================================================================
// Profile Types
// ============================================================================

/// Watering changes through the year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalAdjustments {
    pub spring: String,
    pub summer: String,
    pub fall: String,
    pub winter: String,
}

/// Axis of the profile radar chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RadarCategory {
    #[serde(rename = "Water Needs")]
    WaterNeeds,
    #[serde(rename = "Drought Resistance")]
    DroughtResistance,
    #[serde(rename = "Humidity Preference")]
    HumidityPreference,
    #[serde(rename = "Root Depth")]
    RootDepth,
    #[serde(rename = "Growth Rate")]
    GrowthRate,
}

/// One radar-chart point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarScore {
    pub category: RadarCategory,
    pub value: f64,
    pub full_mark: f64,
}

/// Sensitivity to extreme weather, 0-10
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSensitivity {
    pub drought: f64,
    pub heatwave: f64,
    pub flooding: f64,
    pub frost: f64,
}

/// Complete irrigation profile for one plant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IrrigationProfile {
    pub plant_name: String,
    pub soil_type: String,
    pub container_size: String,
    pub water_frequency_text: String,
    pub water_amount_text: String,
    pub seasonal_adjustments: SeasonalAdjustments,
    pub radar_scores: Vec<RadarScore>,
    pub weather_sensitivity: WeatherSensitivity,
}

impl IrrigationProfile {
    /// Score for a radar axis
    pub fn radar_score(&self, category: RadarCategory) -> Option<f64> {
        self.radar_scores
            .iter()
            .find(|s| s.category == category)
            .map(|s| s.value)
    }
}

// ============================================================================
// Ladders
// ============================================================================

/// Watering frequency for a 0-10 water level
pub fn water_frequency_text(water_level: f64) -> &'static str {
    if water_level < 3.0 {
        "Once every 2-3 weeks"
    } else if water_level < 5.0 {
        "Once a week"
    } else if water_level < 7.0 {
        "Twice a week"
    } else if water_level < 9.0 {
        "Every 2-3 days"
    } else {
        "Daily"
    }
}

/// Watering amount for a 0-10 water level
pub fn water_amount_text(water_level: f64) -> &'static str {
    if water_level < 3.0 {
        "Minimal (0.2-0.5 liters)"
    } else if water_level < 5.0 {
        "Light (0.5-1 liters)"
    } else if water_level < 7.0 {
        "Moderate (1-2 liters)"
    } else if water_level < 9.0 {
        "Generous (2-3 liters)"
    } else {
        "Abundant (3+ liters)"
    }
}

fn seasonal_adjustments(water_level: f64, plant_type: PlantType) -> SeasonalAdjustments {
    let spring = if water_level > 5.0 {
        "Increase watering as growth accelerates"
    } else {
        "Standard watering as growth begins"
    };
    let summer = if water_level > 7.0 {
        "Water daily during hot periods"
    } else {
        "Increase frequency during heat waves"
    };
    let winter = if plant_type.is_arid() {
        "Minimal water, only when soil is completely dry"
    } else {
        "Reduce to 1/3 of normal frequency"
    };

    SeasonalAdjustments {
        spring: spring.to_string(),
        summer: summer.to_string(),
        fall: "Reduce watering as dormancy approaches".to_string(),
        winter: winter.to_string(),
    }
}

// ============================================================================
// Synthesis
// ============================================================================

/// Position of a name inside a characteristic range, in [0, 1)
fn name_position(plant_name: &str) -> f64 {
    (name_seed(plant_name) % 100) as f64 / 100.0
}

fn score(value: f64) -> f64 {
    round2(clamp_score(value))
}

/// Generate an irrigation profile, drawing score noise from `rng`
pub fn generate_irrigation_profile<R: Rng + ?Sized>(
    plant_name: &str,
    plant_type: PlantType,
    rng: &mut R,
) -> IrrigationProfile {
    let traits = characteristics(plant_type);
    let position = name_position(plant_name);
    let within = |(min, max): (f64, f64)| min + position * (max - min);

    let soils = traits.soil_preference;
    let soil_index = ((position * soils.len() as f64) as usize).min(soils.len() - 1);
    let soil_type = soils[soil_index];

    let water_level = within(traits.water_level);
    let drought_resistance = within(traits.drought_resistance);

    let container_index = if plant_type.is_woody() || water_level > 8.0 {
        (within((3.0, 5.0)) as usize).min(4)
    } else if plant_type.is_arid() {
        within((0.0, 2.0)) as usize
    } else {
        within((1.0, 4.0)) as usize
    };

    let humidity_preference = (10.0 - drought_resistance + rng.gen_range(-2.0..2.0)).max(1.0);
    let root_depth = if plant_type.is_woody() {
        rng.gen_range(7.0..10.0)
    } else {
        rng.gen_range(3.0..7.0)
    };
    let growth_rate = rng.gen_range(3.0..8.0);

    let radar_scores = [
        (RadarCategory::WaterNeeds, water_level),
        (RadarCategory::DroughtResistance, drought_resistance),
        (RadarCategory::HumidityPreference, humidity_preference),
        (RadarCategory::RootDepth, root_depth),
        (RadarCategory::GrowthRate, growth_rate),
    ]
    .into_iter()
    .map(|(category, value)| RadarScore {
        category,
        value: score(value),
        full_mark: SCORE_FULL_MARK,
    })
    .collect();

    let heatwave = (10.0 - drought_resistance + rng.gen_range(-2.0..2.0)).max(1.0);
    let flooding = if plant_type == PlantType::Aquatic {
        1.0
    } else {
        rng.gen_range(5.0..9.0)
    };
    let frost = if plant_type.is_arid() {
        rng.gen_range(7.0..9.0)
    } else {
        rng.gen_range(4.0..7.0)
    };

    IrrigationProfile {
        plant_name: plant_name.to_string(),
        soil_type: soil_type.to_string(),
        container_size: CONTAINER_SIZES[container_index.min(CONTAINER_SIZES.len() - 1)].to_string(),
        water_frequency_text: water_frequency_text(water_level).to_string(),
        water_amount_text: water_amount_text(water_level).to_string(),
        seasonal_adjustments: seasonal_adjustments(water_level, plant_type),
        radar_scores,
        weather_sensitivity: WeatherSensitivity {
            drought: score(10.0 - drought_resistance),
            heatwave: score(heatwave),
            flooding: score(flooding),
            frost: score(frost),
        },
    }
}

/// Generate a profile whose noise is seeded by the plant name
pub fn irrigation_profile(plant_name: &str, plant_type: PlantType) -> IrrigationProfile {
    let mut rng = StdRng::seed_from_u64(name_seed(plant_name));
    generate_irrigation_profile(plant_name, plant_type, &mut rng)
}
