//! Simulation settings
//!
//! Environment forces, particle system bounds and the RNG seed, loaded from
//! a JSON file so effects can be tuned without recompiling.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::math::NumberTheory;
use crate::physics::{Environment, ParticleSystemConfig};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimSettings {
    /// Gravity and wind applied to every particle
    #[serde(default)]
    pub environment: Environment,
    /// Bounds for newly created particle systems
    #[serde(default)]
    pub particles: ParticleSystemConfig,
    /// Fixed seed for reproducible runs; entropy-seeded when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SimSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from `path`
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Read settings from `path`, falling back to defaults on any error
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }

    /// Random source for this run
    pub fn number_theory(&self) -> NumberTheory {
        match self.seed {
            Some(seed) => NumberTheory::from_seed(seed),
            None => NumberTheory::from_entropy(),
        }
    }
}
