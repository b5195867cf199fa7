//! Plant catalog service

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use garden_advisor_shared::{plant_names, Identification, PlantRecord, PlantType};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Catalog search filters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlantSearchQuery {
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub plant_type: Option<String>,
}

/// Simulated identification request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IdentifyRequest {
    pub seed: Option<u64>,
}

/// A plant type with its display label
#[derive(Debug, Clone, Serialize)]
pub struct PlantTypeEntry {
    #[serde(rename = "type")]
    pub plant_type: PlantType,
    pub label: &'static str,
}

pub struct PlantService;

impl PlantService {
    /// Parse an optional type filter; blank or "all" disables it
    pub fn parse_type_filter(plant_type: Option<&str>) -> ApiResult<Option<PlantType>> {
        match plant_type.map(str::trim) {
            None | Some("") => Ok(None),
            Some(label) if label.eq_ignore_ascii_case("all") => Ok(None),
            Some(label) => Ok(Some(label.parse()?)),
        }
    }

    pub fn search(state: &AppState, query: &PlantSearchQuery) -> ApiResult<Vec<&'static PlantRecord>> {
        let filter = Self::parse_type_filter(query.plant_type.as_deref())?;
        let term = query.search.as_deref().unwrap_or_default();
        let plants = state.catalog().search(term, filter);
        debug!(term, filter = ?filter, count = plants.len(), "Catalog search");
        Ok(plants)
    }

    /// Plant types present in the catalog
    pub fn types(state: &AppState) -> Vec<PlantTypeEntry> {
        state
            .catalog()
            .types()
            .into_iter()
            .map(|plant_type| PlantTypeEntry {
                plant_type,
                label: plant_type.label(),
            })
            .collect()
    }

    /// Example names for a type, or for every type when none is given
    pub fn names(plant_type: Option<&str>) -> ApiResult<Vec<&'static str>> {
        let names = match Self::parse_type_filter(plant_type)? {
            Some(plant_type) => plant_names(plant_type).to_vec(),
            None => PlantType::ALL
                .into_iter()
                .flat_map(|plant_type| plant_names(plant_type).iter().copied())
                .collect(),
        };
        Ok(names)
    }

    pub fn find(state: &AppState, name: &str) -> ApiResult<&'static PlantRecord> {
        state
            .catalog()
            .find_by_name(name)
            .ok_or_else(|| ApiError::NotFound(format!("Plant '{}' is not in the catalog", name)))
    }

    /// Stand-in for photo recognition
    pub fn identify(state: &AppState, req: IdentifyRequest) -> ApiResult<Identification> {
        let catalog = *state.catalog();
        let identification = state
            .with_rng(req.seed, |rng| catalog.simulate_identification(rng))
            .ok_or_else(|| ApiError::NotFound("Plant catalog is empty".to_string()))?;

        info!(
            plant = %identification.plant.name,
            confidence = identification.confidence,
            "Simulated plant identification"
        );
        Ok(identification)
    }
}
