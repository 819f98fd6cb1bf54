//! # Items
//!
//! Small collectibles found while wandering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three classes of collectible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Keepsake,
    Treasure,
    Curiosity,
}

impl ItemCategory {
    /// All categories, in display order.
    pub const ALL: [ItemCategory; 3] = [
        ItemCategory::Keepsake,
        ItemCategory::Treasure,
        ItemCategory::Curiosity,
    ];

    /// Lower-case identifier, as used in content tables.
    pub fn as_str(self) -> &'static str {
        match self {
            ItemCategory::Keepsake => "keepsake",
            ItemCategory::Treasure => "treasure",
            ItemCategory::Curiosity => "curiosity",
        }
    }

    /// Plural heading used when grouping the collection.
    pub fn plural(self) -> &'static str {
        match self {
            ItemCategory::Keepsake => "Keepsakes",
            ItemCategory::Treasure => "Treasures",
            ItemCategory::Curiosity => "Curiosities",
        }
    }

    /// Glyph shown next to the category heading.
    pub fn icon(self) -> &'static str {
        match self {
            ItemCategory::Keepsake => "🍃",
            ItemCategory::Treasure => "💎",
            ItemCategory::Curiosity => "❓",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A collectible item. Owned by the tile it was found on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name
    pub name: String,
    /// Flavor text
    pub description: String,
    /// Which class of collectible this is
    pub category: ItemCategory,
    /// Theme of the tile where the item was found
    pub found_at: String,
    /// Turn number at the moment of discovery
    pub found_day: u32,
}
