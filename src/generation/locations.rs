//! # Location Generation
//!
//! Candidate locations offered at each step, and the discovery text written
//! when one of them is entered.

use crate::generation::{utils, ContentTables, GenerationConfig, Generator, LocationOption};
use crate::{WanderError, WanderResult};
use log::trace;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// Builds the set of location options offered for a step.
///
/// Themes are sampled without replacement, so the options of one draw never
/// share a theme. Descriptions combine one adjective, one detail clause and
/// one feeling, each drawn independently.
#[derive(Debug, Clone, Copy)]
pub struct LocationGenerator<'a> {
    tables: &'a ContentTables,
}

impl<'a> LocationGenerator<'a> {
    /// Creates a generator drawing from the given tables.
    pub fn new(tables: &'a ContentTables) -> Self {
        Self { tables }
    }

    /// Assembles the description sentence for a theme.
    fn describe(&self, theme: &str, rng: &mut StdRng) -> WanderResult<String> {
        let adjective = pick(&self.tables.adjectives, "adjectives", rng)?;
        let detail = pick(&self.tables.details, "details", rng)?;
        let feeling = pick(&self.tables.feelings, "feelings", rng)?;

        Ok(format!(
            "An {} {} where {} the space. {}.",
            adjective,
            theme.to_lowercase(),
            detail,
            feeling
        ))
    }
}

impl Generator<Vec<LocationOption>> for LocationGenerator<'_> {
    fn generate(
        &self,
        config: &GenerationConfig,
        rng: &mut StdRng,
    ) -> WanderResult<Vec<LocationOption>> {
        if self.tables.distinct_theme_count() < config.option_count {
            return Err(WanderError::GenerationFailed(format!(
                "Need {} distinct themes but only {} are available",
                config.option_count,
                self.tables.distinct_theme_count()
            )));
        }

        let themes: Vec<String> = self
            .tables
            .themes
            .choose_multiple(rng, config.option_count)
            .cloned()
            .collect();

        let mut options = Vec::with_capacity(themes.len());
        for theme in themes {
            let description = self.describe(&theme, rng)?;
            trace!("Generated location option '{}'", theme);
            options.push(LocationOption { theme, description });
        }

        self.validate(&options, config)?;
        Ok(options)
    }

    fn validate(
        &self,
        content: &Vec<LocationOption>,
        config: &GenerationConfig,
    ) -> WanderResult<()> {
        if content.len() != config.option_count {
            return Err(WanderError::GenerationFailed(format!(
                "Expected {} location options, generated {}",
                config.option_count,
                content.len()
            )));
        }

        let distinct: HashSet<&str> = content.iter().map(|option| option.theme.as_str()).collect();
        if distinct.len() != content.len() {
            return Err(WanderError::GenerationFailed(
                "Location options share a theme".to_string(),
            ));
        }

        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "LocationGenerator"
    }
}

/// Writes the discovery text for entering a themed location.
#[derive(Debug, Clone, Copy)]
pub struct DiscoveryGenerator<'a> {
    tables: &'a ContentTables,
    theme: &'a str,
}

impl<'a> DiscoveryGenerator<'a> {
    /// Creates a generator for the given theme. The theme keeps its case.
    pub fn new(tables: &'a ContentTables, theme: &'a str) -> Self {
        Self { tables, theme }
    }
}

impl Generator<String> for DiscoveryGenerator<'_> {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> WanderResult<String> {
        let template = pick(&self.tables.discoveries, "discoveries", rng)?;
        let discovery = utils::fill_theme(template, self.theme);
        self.validate(&discovery, config)?;
        Ok(discovery)
    }

    fn validate(&self, content: &String, _config: &GenerationConfig) -> WanderResult<()> {
        if content.contains(self.theme) {
            Ok(())
        } else {
            Err(WanderError::GenerationFailed(format!(
                "Discovery '{}' does not mention {}",
                content, self.theme
            )))
        }
    }

    fn generator_type(&self) -> &'static str {
        "DiscoveryGenerator"
    }
}

/// Draws one entry uniformly from a named pool.
pub(crate) fn pick<'t>(pool: &'t [String], name: &str, rng: &mut StdRng) -> WanderResult<&'t str> {
    pool.choose(rng)
        .map(String::as_str)
        .ok_or_else(|| WanderError::GenerationFailed(format!("Content table '{}' is empty", name)))
}
