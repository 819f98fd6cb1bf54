//! # Content Tables
//!
//! Static word banks every generator draws from.
//!
//! The built-in tables are compiled in as constants. A replacement set can be
//! loaded from JSON, which is how tests and players substitute their own
//! themes and items. Loaded tables are validated before use so generators can
//! rely on every pool being non-empty.

use crate::game::ItemCategory;
use crate::{WanderError, WanderResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Placeholder replaced by the theme name in discovery templates.
pub const THEME_PLACEHOLDER: &str = "{theme}";

const THEMES: &[&str] = &[
    "Mushroom Circle",
    "Mossy Stones",
    "Babbling Brook",
    "Wildflower Meadow",
    "Hollow Tree",
    "Crystal Pool",
    "Foggy Hollow",
    "Sunlit Glade",
    "Berry Thicket",
    "Stone Circle",
    "Whispering Willows",
    "Hidden Grotto",
    "Autumn Vale",
    "Morning Mist",
    "Starlit Clearing",
    "Gentle Waterfall",
];

const ADJECTIVES: &[&str] = &["ancient", "forgotten", "peaceful", "mysterious", "enchanted"];

const DETAILS: &[&str] = &[
    "soft light dances across",
    "shadows play among",
    "gentle sounds echo from",
    "a strange calm pervades",
];

const FEELINGS: &[&str] = &[
    "You feel drawn here",
    "Something calls to you",
    "A sense of wonder fills you",
    "Time seems to slow",
];

const DISCOVERIES: &[&str] = &[
    "You discover {theme} and feel a deep connection to this place.",
    "As you arrive at {theme}, you notice details you hadn't expected.",
    "The {theme} reveals itself slowly, inviting you to linger.",
    "{theme} feels like it has been waiting for you.",
    "You find yourself drawn deeper into {theme}.",
];

const KEEPSAKE_NAMES: &[&str] = &[
    "Smooth River Stone",
    "Pressed Flower",
    "Acorn Cap",
    "Bird Feather",
    "Seashell Fragment",
    "Dried Leaf",
    "Pinecone",
    "Lucky Pebble",
    "Glass Bead",
    "Carved Twig",
    "Moss Sample",
    "Butterfly Wing",
];

const KEEPSAKE_DESCRIPTIONS: &[&str] = &[
    "A simple treasure that reminds you of this moment.",
    "Something small but meaningful.",
    "A gentle reminder of your journey.",
    "It feels right to carry this with you.",
];

const TREASURE_NAMES: &[&str] = &[
    "Ancient Coin",
    "Crystal Shard",
    "Silver Locket",
    "Brass Key",
    "Jade Figurine",
    "Pearl",
    "Golden Ring",
    "Copper Medallion",
    "Gemstone",
    "Amber",
    "Moonstone",
    "Opal",
];

const TREASURE_DESCRIPTIONS: &[&str] = &[
    "It glimmers softly in your hand, valuable yet mysterious.",
    "Worth keeping safe - who knows its story?",
    "A prize from your wanderings.",
    "Something precious, left behind long ago.",
];

const CURIOSITY_NAMES: &[&str] = &[
    "Strange Map Fragment",
    "Mysterious Note",
    "Odd Compass",
    "Faded Photograph",
    "Old Journal Page",
    "Weathered Letter",
    "Riddle Scroll",
    "Poetry Fragment",
    "Sheet Music",
    "Recipe Card",
    "Star Chart",
    "Encrypted Message",
];

const CURIOSITY_DESCRIPTIONS: &[&str] = &[
    "This raises more questions than it answers.",
    "You sense there's a story here, waiting to unfold.",
    "Strange and intriguing - you must learn more.",
    "A puzzle piece from someone else's tale.",
];

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| word.to_string()).collect()
}

/// Names and descriptions for one item category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTable {
    pub names: Vec<String>,
    pub descriptions: Vec<String>,
}

/// Every pool the generators draw from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTables {
    /// Location themes; must be pairwise distinct
    pub themes: Vec<String>,
    /// Adjectives for location descriptions
    pub adjectives: Vec<String>,
    /// "Detail" clauses for location descriptions
    pub details: Vec<String>,
    /// "Feeling" sentences for location descriptions
    pub feelings: Vec<String>,
    /// Discovery templates containing `{theme}`
    pub discoveries: Vec<String>,
    pub keepsake: CategoryTable,
    pub treasure: CategoryTable,
    pub curiosity: CategoryTable,
}

impl ContentTables {
    /// Parses tables from JSON and validates them.
    pub fn from_json(json: &str) -> WanderResult<Self> {
        let tables: ContentTables = serde_json::from_str(json)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Reads tables from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> WanderResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serializes the tables, e.g. as a starting point for a custom set.
    pub fn to_json(&self) -> WanderResult<String> {
        serde_json::to_string_pretty(self).map_err(WanderError::from)
    }

    /// Gets the item table for a category.
    pub fn category(&self, category: ItemCategory) -> &CategoryTable {
        match category {
            ItemCategory::Keepsake => &self.keepsake,
            ItemCategory::Treasure => &self.treasure,
            ItemCategory::Curiosity => &self.curiosity,
        }
    }

    /// Number of distinct themes available.
    pub fn distinct_theme_count(&self) -> usize {
        self.themes.iter().collect::<HashSet<_>>().len()
    }

    /// Checks that every pool can be drawn from.
    pub fn validate(&self) -> WanderResult<()> {
        let pools = [
            ("themes", &self.themes),
            ("adjectives", &self.adjectives),
            ("details", &self.details),
            ("feelings", &self.feelings),
            ("discoveries", &self.discoveries),
        ];
        for (name, pool) in pools {
            if pool.is_empty() {
                return Err(WanderError::GenerationFailed(format!(
                    "Content table '{}' is empty",
                    name
                )));
            }
        }

        if self.distinct_theme_count() != self.themes.len() {
            return Err(WanderError::GenerationFailed(
                "Content table 'themes' contains duplicates".to_string(),
            ));
        }

        if let Some(template) = self
            .discoveries
            .iter()
            .find(|template| !template.contains(THEME_PLACEHOLDER))
        {
            return Err(WanderError::GenerationFailed(format!(
                "Discovery template '{}' has no {} placeholder",
                template, THEME_PLACEHOLDER
            )));
        }

        for category in ItemCategory::ALL {
            let table = self.category(category);
            if table.names.is_empty() || table.descriptions.is_empty() {
                return Err(WanderError::GenerationFailed(format!(
                    "Item table for {} needs at least one name and description",
                    category
                )));
            }
        }

        Ok(())
    }
}

impl Default for ContentTables {
    fn default() -> Self {
        Self {
            themes: owned(THEMES),
            adjectives: owned(ADJECTIVES),
            details: owned(DETAILS),
            feelings: owned(FEELINGS),
            discoveries: owned(DISCOVERIES),
            keepsake: CategoryTable {
                names: owned(KEEPSAKE_NAMES),
                descriptions: owned(KEEPSAKE_DESCRIPTIONS),
            },
            treasure: CategoryTable {
                names: owned(TREASURE_NAMES),
                descriptions: owned(TREASURE_DESCRIPTIONS),
            },
            curiosity: CategoryTable {
                names: owned(CURIOSITY_NAMES),
                descriptions: owned(CURIOSITY_DESCRIPTIONS),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_table_sizes() {
        let tables = ContentTables::default();
        assert_eq!(tables.themes.len(), 16);
        assert_eq!(tables.adjectives.len(), 5);
        assert_eq!(tables.details.len(), 4);
        assert_eq!(tables.feelings.len(), 4);
        assert_eq!(tables.discoveries.len(), 5);
        for category in ItemCategory::ALL {
            assert_eq!(tables.category(category).names.len(), 12);
            assert_eq!(tables.category(category).descriptions.len(), 4);
        }
        tables.validate().unwrap();
    }

    #[test]
    fn test_json_substitution() {
        let mut custom = ContentTables::default();
        custom.themes = vec!["Salt Flats".to_string(), "Dune Sea".to_string(), "Oasis".to_string()];
        let json = custom.to_json().unwrap();

        let loaded = ContentTables::from_json(&json).unwrap();
        assert_eq!(loaded.themes, custom.themes);
    }

    #[test]
    fn test_validation_rejects_duplicate_themes() {
        let mut tables = ContentTables::default();
        tables.themes.push("Crystal Pool".to_string());
        assert!(matches!(
            tables.validate(),
            Err(WanderError::GenerationFailed(_))
        ));
    }

    #[test]
    fn test_validation_rejects_empty_item_table() {
        let mut tables = ContentTables::default();
        tables.curiosity.descriptions.clear();
        assert!(tables.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_template_without_placeholder() {
        let mut tables = ContentTables::default();
        tables.discoveries.push("Nothing to see.".to_string());
        assert!(tables.validate().is_err());
    }

    #[test]
    fn test_malformed_json_is_a_serde_error() {
        let result = ContentTables::from_json("{ \"themes\": 3 }");
        assert!(matches!(result, Err(WanderError::Serde(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ContentTables::default().to_json().unwrap().as_bytes())
            .unwrap();

        let loaded = ContentTables::from_path(file.path()).unwrap();
        assert_eq!(loaded, ContentTables::default());
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = ContentTables::from_path("/definitely/not/here.json");
        assert!(matches!(result, Err(WanderError::Io(_))));
    }
}
