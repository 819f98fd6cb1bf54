//! # Generation Module
//!
//! Procedural content generation for locations, discoveries, and items.
//!
//! Every generator draws from a shared set of [`ContentTables`] and a seeded
//! `StdRng`. Given the same tables, configuration and generator state, the
//! same content comes out, which is what makes whole journeys replayable.

pub mod content;
pub mod items;
pub mod locations;

pub use content::*;
pub use items::*;
pub use locations::*;

use crate::{config, WanderError, WanderResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Configuration for procedural generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation
    pub seed: u64,
    /// How many location options are offered per step
    pub option_count: usize,
    /// An item is found when a uniform draw in [0, 1) exceeds this value
    pub item_find_threshold: f64,
}

impl GenerationConfig {
    /// Creates a default generation configuration with the given seed.
    ///
    /// # Examples
    ///
    /// ```
    /// use wanderings::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(7);
    /// assert_eq!(config.option_count, 3);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            option_count: config::DEFAULT_OPTION_COUNT,
            item_find_threshold: config::DEFAULT_ITEM_FIND_THRESHOLD,
        }
    }

    /// Creates a configuration where every step yields an item.
    pub fn always_find_items(seed: u64) -> Self {
        Self {
            item_find_threshold: 0.0,
            ..Self::new(seed)
        }
    }

    /// Creates a configuration where no step ever yields an item.
    pub fn never_find_items(seed: u64) -> Self {
        Self {
            item_find_threshold: 1.0,
            ..Self::new(seed)
        }
    }

    /// Checks that the configuration is usable.
    pub fn validate(&self) -> WanderResult<()> {
        if self.option_count == 0 {
            return Err(WanderError::GenerationFailed(
                "At least one location option must be offered".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.item_find_threshold) {
            return Err(WanderError::GenerationFailed(format!(
                "Item find threshold {} is outside [0, 1]",
                self.item_find_threshold
            )));
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(42)
    }
}

/// A candidate location shown to the player before a step is committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationOption {
    pub theme: String,
    pub description: String,
}

/// Trait for procedural generators.
///
/// Generators borrow the content tables they draw from and are cheap to
/// build, so callers create one per draw with whatever context it needs.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random number generator.
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> WanderResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> WanderResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Utility functions for generation.
pub mod utils {
    use super::*;

    /// Creates a seeded random number generator from the config.
    pub fn create_rng(config: &GenerationConfig) -> StdRng {
        StdRng::seed_from_u64(config.seed)
    }

    /// Fills the `{theme}` placeholder of a template.
    pub fn fill_theme(template: &str, theme: &str) -> String {
        template.replace(THEME_PLACEHOLDER, theme)
    }
}
