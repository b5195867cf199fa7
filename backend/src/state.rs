//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! The only mutable resource is the shared random generator. Requests that
//! carry their own seed never touch it.

use crate::config::AppConfig;
use garden_advisor_shared::{FaqTable, PlantCatalog};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex};

/// Shared application state
///
/// All fields are cheap to clone across async tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    pub catalog: PlantCatalog,
    pub faq: Arc<FaqTable>,
    rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    /// Create a new application state
    ///
    /// The shared generator is seeded from `advisor.rng_seed` when set, so a
    /// fixed seed makes unseeded requests reproducible across restarts.
    pub fn new(config: AppConfig) -> Self {
        let rng = match config.advisor.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config: Arc::new(config),
            catalog: PlantCatalog::default(),
            faq: Arc::new(FaqTable::default()),
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[inline]
    pub fn catalog(&self) -> &PlantCatalog {
        &self.catalog
    }

    #[inline]
    pub fn faq(&self) -> &FaqTable {
        &self.faq
    }

    /// Run `f` with a generator: a fresh one for an explicit seed, otherwise
    /// the shared one
    pub fn with_rng<T>(&self, seed: Option<u64>, f: impl FnOnce(&mut StdRng) -> T) -> T {
        match seed {
            Some(seed) => f(&mut StdRng::seed_from_u64(seed)),
            None => {
                let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                f(&mut *rng)
            }
        }
    }
}
