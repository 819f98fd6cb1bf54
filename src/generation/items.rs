//! # Item Generation
//!
//! Rolls for a collectible when a new location is entered.

use crate::game::{Item, ItemCategory};
use crate::generation::locations::pick;
use crate::generation::{ContentTables, GenerationConfig, Generator};
use crate::{WanderError, WanderResult};
use log::trace;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Generates the item (if any) found on a freshly explored tile.
///
/// A uniform draw decides whether anything is found at all. When something
/// is, the category, the name and the description are drawn in that order,
/// each uniformly from its table.
#[derive(Debug, Clone, Copy)]
pub struct ItemGenerator<'a> {
    tables: &'a ContentTables,
    theme: &'a str,
    turn: u32,
}

impl<'a> ItemGenerator<'a> {
    /// Creates a generator for a tile with the given theme, entered on `turn`.
    pub fn new(tables: &'a ContentTables, theme: &'a str, turn: u32) -> Self {
        Self {
            tables,
            theme,
            turn,
        }
    }
}

impl Generator<Option<Item>> for ItemGenerator<'_> {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> WanderResult<Option<Item>> {
        let draw: f64 = rng.gen();
        if draw <= config.item_find_threshold {
            trace!("Item roll {:.3} found nothing at {}", draw, self.theme);
            return Ok(None);
        }

        let category = *ItemCategory::ALL.choose(rng).ok_or_else(|| {
            WanderError::GenerationFailed("No item categories available".to_string())
        })?;
        let table = self.tables.category(category);
        let name = pick(&table.names, category.as_str(), rng)?;
        let description = pick(&table.descriptions, category.as_str(), rng)?;

        let item = Item {
            name: name.to_string(),
            description: description.to_string(),
            category,
            found_at: self.theme.to_string(),
            found_day: self.turn,
        };
        trace!("Item roll {:.3} found {} ({})", draw, item.name, category);

        let item = Some(item);
        self.validate(&item, config)?;
        Ok(item)
    }

    fn validate(&self, content: &Option<Item>, _config: &GenerationConfig) -> WanderResult<()> {
        let Some(item) = content else {
            return Ok(());
        };
        let table = self.tables.category(item.category);
        if !table.names.contains(&item.name) {
            return Err(WanderError::GenerationFailed(format!(
                "{} is not a known {}",
                item.name, item.category
            )));
        }
        if item.found_at != self.theme || item.found_day != self.turn {
            return Err(WanderError::GenerationFailed(format!(
                "{} is stamped with the wrong location or day",
                item.name
            )));
        }
        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "ItemGenerator"
    }
}
