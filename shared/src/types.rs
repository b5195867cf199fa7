//! Plant classification types
//!
//! Plant types and water-need levels are shared by every advisor component.
//! Labels on the wire match the ones shown in the browser shell
//! (e.g. "Succulents", "Very Low").

use crate::errors::AdvisorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Plant Types
// ============================================================================

/// Plant type used to select irrigation characteristics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PlantType {
    #[default]
    Ornamental,
    Shrubs,
    Trees,
    Herbs,
    Climbers,
    Creepers,
    Succulents,
    Ferns,
    Aquatic,
    Cacti,
    Grass,
    Bulbs,
    Vegetables,
    Fruits,
    Vines,
    /// Any label the advisor does not know; falls back to default characteristics
    #[serde(other)]
    Other,
}

impl PlantType {
    /// All known plant types in display order
    pub const ALL: [PlantType; 15] = [
        PlantType::Ornamental,
        PlantType::Shrubs,
        PlantType::Trees,
        PlantType::Herbs,
        PlantType::Climbers,
        PlantType::Creepers,
        PlantType::Succulents,
        PlantType::Ferns,
        PlantType::Aquatic,
        PlantType::Cacti,
        PlantType::Grass,
        PlantType::Bulbs,
        PlantType::Vegetables,
        PlantType::Fruits,
        PlantType::Vines,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            PlantType::Ornamental => "Ornamental",
            PlantType::Shrubs => "Shrubs",
            PlantType::Trees => "Trees",
            PlantType::Herbs => "Herbs",
            PlantType::Climbers => "Climbers",
            PlantType::Creepers => "Creepers",
            PlantType::Succulents => "Succulents",
            PlantType::Ferns => "Ferns",
            PlantType::Aquatic => "Aquatic",
            PlantType::Cacti => "Cacti",
            PlantType::Grass => "Grass",
            PlantType::Bulbs => "Bulbs",
            PlantType::Vegetables => "Vegetables",
            PlantType::Fruits => "Fruits",
            PlantType::Vines => "Vines",
            PlantType::Other => "Other",
        }
    }

    /// Succulents and cacti share low-water handling throughout the advisor
    pub fn is_arid(&self) -> bool {
        matches!(self, PlantType::Succulents | PlantType::Cacti)
    }

    /// Trees and shrubs get deep roots and large containers
    pub fn is_woody(&self) -> bool {
        matches!(self, PlantType::Trees | PlantType::Shrubs)
    }

    /// Parse a label, mapping anything unrecognised to [`PlantType::Other`]
    ///
    /// Accepts singular forms ("Herb", "Succulent") and ignores case.
    pub fn from_str_lossy(s: &str) -> Self {
        Self::parse(s).unwrap_or(PlantType::Other)
    }

    fn parse(s: &str) -> Option<Self> {
        let plant_type = match s.trim().to_lowercase().as_str() {
            "ornamental" | "ornamentals" => PlantType::Ornamental,
            "shrub" | "shrubs" => PlantType::Shrubs,
            "tree" | "trees" => PlantType::Trees,
            "herb" | "herbs" => PlantType::Herbs,
            "climber" | "climbers" => PlantType::Climbers,
            "creeper" | "creepers" => PlantType::Creepers,
            "succulent" | "succulents" => PlantType::Succulents,
            "fern" | "ferns" => PlantType::Ferns,
            "aquatic" => PlantType::Aquatic,
            "cactus" | "cacti" => PlantType::Cacti,
            "grass" | "grasses" => PlantType::Grass,
            "bulb" | "bulbs" => PlantType::Bulbs,
            "vegetable" | "vegetables" => PlantType::Vegetables,
            "fruit" | "fruits" => PlantType::Fruits,
            "vine" | "vines" => PlantType::Vines,
            "other" => PlantType::Other,
            _ => return None,
        };
        Some(plant_type)
    }
}

impl fmt::Display for PlantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for PlantType {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| AdvisorError::UnknownPlantType(s.to_string()))
    }
}

// ============================================================================
// Water Needs
// ============================================================================

/// Coarse water-need level of a catalog plant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WaterNeeds {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Medium,
    #[serde(rename = "Medium-High")]
    MediumHigh,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl WaterNeeds {
    pub fn label(&self) -> &'static str {
        match self {
            WaterNeeds::VeryLow => "Very Low",
            WaterNeeds::Low => "Low",
            WaterNeeds::Medium => "Medium",
            WaterNeeds::MediumHigh => "Medium-High",
            WaterNeeds::High => "High",
            WaterNeeds::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for WaterNeeds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
