//! Plant irrigation catalog
//!
//! A fixed, ordered table of plant records with search, filtering and the
//! example plant names offered by each widget's plant picker.

use crate::types::{PlantType, WaterNeeds};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantRecord {
    pub id: u32,
    pub name: &'static str,
    pub plant_type: PlantType,
    pub water_needs: WaterNeeds,
    /// Volume guidance such as "1.5-2 liters/day"
    pub water_volume: &'static str,
    pub irrigation_method: &'static str,
    pub ideal_conditions: &'static str,
    pub seasonality: &'static str,
    pub icon: &'static str,
}

macro_rules! plant {
    ($id:expr, $name:expr, $plant_type:ident, $needs:ident, $volume:expr, $method:expr, $conditions:expr, $season:expr, $icon:expr) => {
        PlantRecord {
            id: $id,
            name: $name,
            plant_type: PlantType::$plant_type,
            water_needs: WaterNeeds::$needs,
            water_volume: $volume,
            irrigation_method: $method,
            ideal_conditions: $conditions,
            seasonality: $season,
            icon: $icon,
        }
    };
}

/// Catalog contents in display order
pub static PLANT_RECORDS: [PlantRecord; 15] = [
    plant!(1, "Rose", Ornamental, Medium, "1.5-2 liters/day", "Drip", "20-30°C, 5-6 hours sunlight", "Spring to Fall, prune in winter", "🌹"),
    plant!(2, "Tulip", Ornamental, Low, "0.5-1 liters/day", "Drip", "15-20°C, 6 hours sunlight", "Spring flowering, plant bulbs in fall", "🌷"),
    plant!(3, "Basil", Herbs, Medium, "1-1.5 liters/day", "Drip", "20-25°C, 6-8 hours sunlight", "Spring to Summer, harvest regularly", "🌿"),
    plant!(4, "Tomato", Vegetables, High, "2-3 liters/day", "Drip", "20-30°C, 6-8 hours sunlight", "Summer harvest, plant in spring", "🍅"),
    plant!(5, "Aloe", Succulents, Low, "0.2-0.5 liters/week", "Spot", "18-24°C, bright indirect light", "Year-round, water sparingly in winter", "🌵"),
    plant!(6, "Apple Tree", Trees, MediumHigh, "15-20 liters/week", "Basin", "15-30°C, 6-8 hours sunlight", "Spring blossoms, Fall harvest", "🍎"),
    plant!(7, "Strawberry", Fruits, Medium, "1-2 liters/day", "Drip", "15-26°C, 6 hours sunlight", "Spring to Summer, renew plants every 3 years", "🍓"),
    plant!(8, "Lavender", Shrubs, Low, "0.5-1 liters/week", "Drip", "18-28°C, 6+ hours full sun", "Summer flowering, prune in spring", "💜"),
    plant!(9, "Barrel Cactus", Cacti, VeryLow, "0.2 liters/2 weeks", "Spot", "20-35°C, 6+ hours direct sunlight", "Water in growing season, almost none in winter", "🌵"),
    plant!(10, "Water Lily", Aquatic, VeryHigh, "submerged", "Pond/Container", "18-28°C, 6+ hours sunlight", "Blooms summer, dormant in winter", "🌊"),
    plant!(11, "Morning Glory", Climbers, Medium, "1-1.5 liters/day", "Drip", "18-30°C, 6+ hours sunlight", "Summer to Fall flowering, annual in cold climates", "🌸"),
    plant!(12, "Mint", Herbs, MediumHigh, "1.5-2 liters/day", "Drip", "18-26°C, partial shade to full sun", "Spring to Fall, can be invasive", "🌱"),
    plant!(13, "Boston Fern", Ferns, MediumHigh, "1.5-2 liters/day", "Mist/Drip", "18-24°C, indirect light, high humidity", "Year-round, indoor in cold climates", "🌿"),
    plant!(14, "Carrot", Vegetables, Medium, "1-1.5 liters/day", "Sprinkler/Drip", "15-25°C, 6 hours sunlight", "Spring to Fall planting, 70-80 days to harvest", "🥕"),
    plant!(15, "Kentucky Bluegrass", Grass, High, "25-40mm/week", "Sprinkler", "15-24°C, full to partial sun", "Cool season grass, plant in fall or spring", "🌱"),
];

/// Example plant names offered for each plant type
pub fn plant_names(plant_type: PlantType) -> &'static [&'static str] {
    match plant_type {
        PlantType::Ornamental => &["Rose", "Tulip", "Hibiscus", "Lily", "Marigold"],
        PlantType::Shrubs => &["Boxwood", "Holly", "Azalea", "Hydrangea", "Lavender"],
        PlantType::Trees => &["Oak", "Maple", "Pine", "Apple", "Cherry"],
        PlantType::Herbs => &["Basil", "Mint", "Rosemary", "Thyme", "Sage"],
        PlantType::Climbers => &["Ivy", "Clematis", "Wisteria", "Morning Glory", "Jasmine"],
        PlantType::Creepers => &["Spider Plant", "Swedish Ivy", "Tradescantia", "Dichondra", "Creeping Jenny"],
        PlantType::Succulents => &["Aloe", "Echeveria", "Haworthia", "Jade Plant", "Sedum"],
        PlantType::Ferns => &["Boston Fern", "Bird's Nest Fern", "Staghorn Fern", "Maidenhair Fern", "Asparagus Fern"],
        PlantType::Aquatic => &["Water Lily", "Lotus", "Duckweed", "Cattail", "Water Hyacinth"],
        PlantType::Cacti => &["Barrel Cactus", "Prickly Pear", "Saguaro", "Christmas Cactus", "Opuntia"],
        PlantType::Grass => &["Kentucky Bluegrass", "Bermuda Grass", "Fescue", "Ryegrass", "Zoysia"],
        PlantType::Bulbs => &["Daffodil", "Tulip", "Hyacinth", "Crocus", "Amaryllis"],
        PlantType::Vegetables => &["Tomato", "Cucumber", "Carrot", "Spinach", "Broccoli"],
        PlantType::Fruits => &["Strawberry", "Blueberry", "Apple", "Grape", "Raspberry"],
        PlantType::Vines => &["Grape Vine", "Honeysuckle", "English Ivy", "Virginia Creeper", "Bougainvillea"],
        PlantType::Other => &[],
    }
}

/// Result of a simulated photo identification
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Identification {
    pub plant: PlantRecord,
    /// Reported confidence in [0.70, 0.99)
    pub confidence: f64,
}

/// Read-only view over an ordered plant table
#[derive(Debug, Clone, Copy)]
pub struct PlantCatalog {
    records: &'static [PlantRecord],
}

impl Default for PlantCatalog {
    fn default() -> Self {
        Self::new(&PLANT_RECORDS)
    }
}

impl PlantCatalog {
    pub fn new(records: &'static [PlantRecord]) -> Self {
        Self { records }
    }

    pub fn all(&self) -> &'static [PlantRecord] {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Filter by a free-text term and an optional plant type
    ///
    /// The term matches case-insensitively against the plant name or its
    /// type label; an empty term matches everything.
    pub fn search(&self, term: &str, plant_type: Option<PlantType>) -> Vec<&'static PlantRecord> {
        let term = term.trim().to_lowercase();
        self.records
            .iter()
            .filter(|plant| {
                let matches_term = plant.name.to_lowercase().contains(&term)
                    || plant.plant_type.label().to_lowercase().contains(&term);
                let matches_type = plant_type.map_or(true, |t| plant.plant_type == t);
                matches_term && matches_type
            })
            .collect()
    }

    /// Distinct plant types in first-appearance order
    pub fn types(&self) -> Vec<PlantType> {
        let mut types = Vec::new();
        for plant in self.records {
            if !types.contains(&plant.plant_type) {
                types.push(plant.plant_type);
            }
        }
        types
    }

    /// Case-insensitive exact name lookup
    pub fn find_by_name(&self, name: &str) -> Option<&'static PlantRecord> {
        let name = name.trim();
        self.records.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Stand-in for photo recognition: picks a random catalog entry
    pub fn simulate_identification<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Identification> {
        let plant = self.records.choose(rng)?;
        Some(Identification {
            plant: plant.clone(),
            confidence: (rng.gen_range(0.70..0.99) * 100.0_f64).round() / 100.0,
        })
    }
}
