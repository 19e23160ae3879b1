//! Configuration types for the simulation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// World configuration parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Side length of the square arena
    pub arena_size: i32,
    /// Entity footprint (collision box side length)
    pub entity_size: i32,
    /// Organisms spawned at startup
    pub initial_population: usize,
    /// Hard population cap; mating beyond it is silently dropped
    pub max_population: usize,
    /// Pairwise encounter count that triggers mating
    pub mating_threshold: u32,
    /// Ticks an organism lives before expiring
    pub lifespan_ticks: u64,
    /// Per-axis displacement range per tick, `[-move_step, +move_step]`
    pub move_step: i32,
    /// Broad-phase neighbor query radius (independent-axis)
    pub proximity_radius: i32,
    /// Clock cadence for the driver loop
    pub tick_interval_ms: u64,
    /// Random seed for reproducibility
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            arena_size: 1000,
            entity_size: 10,
            initial_population: 100,
            max_population: 200,
            mating_threshold: 6,
            lifespan_ticks: 320, // 32 seconds at the 100 ms cadence
            move_step: 10,
            proximity_radius: 50,
            tick_interval_ms: 100,
            seed: 0,
        }
    }
}

impl WorldConfig {
    /// Upper position bound on both axes: `arena_size - entity_size`.
    pub fn position_max(&self) -> i32 {
        self.arena_size - self.entity_size
    }

    /// Reject geometry the simulation cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.entity_size <= 0 {
            return Err(Error::InvalidConfig(format!(
                "entity_size must be positive, got {}",
                self.entity_size
            )));
        }
        if self.arena_size <= self.entity_size {
            return Err(Error::InvalidConfig(format!(
                "arena_size {} must exceed entity_size {}",
                self.arena_size, self.entity_size
            )));
        }
        if self.max_population == 0 {
            return Err(Error::InvalidConfig(
                "max_population must be at least 1".to_string(),
            ));
        }
        if self.initial_population > self.max_population {
            return Err(Error::InvalidConfig(format!(
                "initial_population {} exceeds max_population {}",
                self.initial_population, self.max_population
            )));
        }
        if self.move_step < 0 {
            return Err(Error::InvalidConfig(format!(
                "move_step must be non-negative, got {}",
                self.move_step
            )));
        }
        if self.mating_threshold == 0 {
            return Err(Error::InvalidConfig(
                "mating_threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Load a config from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WorldConfig::default();
        assert_eq!(config.arena_size, 1000);
        assert_eq!(config.initial_population, 100);
        assert_eq!(config.max_population, 200);
        assert_eq!(config.mating_threshold, 6);
        assert_eq!(config.lifespan_ticks, 320);
        assert_eq!(config.position_max(), 990);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_degenerate_geometry() {
        let config = WorldConfig {
            arena_size: 5,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = WorldConfig {
            max_population: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = WorldConfig {
            initial_population: 500,
            max_population: 200,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = WorldConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: WorldConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.arena_size, deserialized.arena_size);
        assert_eq!(config.seed, deserialized.seed);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: WorldConfig = serde_json::from_str(r#"{"seed": 42}"#).unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.arena_size, 1000);
    }
}
