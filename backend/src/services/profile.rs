//! Irrigation DNA profile service

use crate::error::ApiResult;
use crate::state::AppState;
use garden_advisor_shared::validation::validate_plant_name;
use garden_advisor_shared::{irrigation_profile, IrrigationProfile, PlantType};
use tracing::info;

pub struct ProfileService;

impl ProfileService {
    /// Synthesize the profile for a plant
    ///
    /// An explicit type wins (unknown labels use default characteristics);
    /// otherwise the catalog entry's type is used when the plant is listed.
    pub fn profile(
        state: &AppState,
        plant_name: &str,
        plant_type: Option<&str>,
    ) -> ApiResult<IrrigationProfile> {
        validate_plant_name(plant_name)?;

        let plant_type = match plant_type {
            Some(label) => PlantType::from_str_lossy(label),
            None => state
                .catalog()
                .find_by_name(plant_name)
                .map(|record| record.plant_type)
                .unwrap_or(PlantType::Other),
        };

        let profile = irrigation_profile(plant_name, plant_type);
        info!(
            plant = %plant_name,
            plant_type = %plant_type,
            soil = %profile.soil_type,
            "Synthesized irrigation profile"
        );
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_explicit_type() {
        let state = AppState::new(AppConfig::default());
        let profile = ProfileService::profile(&state, "Rose", Some("Ornamental")).unwrap();
        assert_eq!(profile, irrigation_profile("Rose", PlantType::Ornamental));
    }

    #[test]
    fn test_type_from_catalog() {
        let state = AppState::new(AppConfig::default());
        let profile = ProfileService::profile(&state, "Barrel Cactus", None).unwrap();
        assert_eq!(profile, irrigation_profile("Barrel Cactus", PlantType::Cacti));
    }

    #[test]
    fn test_unknown_plant_uses_defaults() {
        let state = AppState::new(AppConfig::default());
        let profile = ProfileService::profile(&state, "Baobab", None).unwrap();
        assert_eq!(profile, irrigation_profile("Baobab", PlantType::Other));
    }
}
