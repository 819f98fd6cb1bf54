//! # Game State Module
//!
//! The exploration engine: the single aggregate that owns the tile map, the
//! wanderer's position, the turn counter, the journal and the inventory.
//!
//! Every state change goes through [`Game::explore`]. Everything else is a
//! read-only view that the front end renders.

use crate::config;
use crate::game::{Bounds, CellKind, Direction, Item, ItemCategory, Position, Tile, TileMap};
use crate::generation::{
    utils, ContentTables, DiscoveryGenerator, GenerationConfig, Generator, ItemGenerator,
    LocationGenerator, LocationOption,
};
use crate::{WanderError, WanderResult};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Central game state containing all exploration data.
///
/// Fields are private so the invariants hold for the whole journey: the
/// current position always has a tile, the origin always has a tile, the
/// journal and inventory only grow, and the turn counter only moves forward
/// one step per explore.
#[derive(Debug, Clone)]
pub struct Game {
    /// Every discovered tile
    map: TileMap,
    /// Where the wanderer stands
    current: Position,
    /// Current day, starting at 1
    turn_count: u32,
    /// Narrative log, one line per day plus one per find
    journal: Vec<String>,
    /// Positions of tiles whose item was collected, in order of discovery
    inventory: Vec<Position>,
    config: GenerationConfig,
    tables: ContentTables,
    rng: StdRng,
}

/// Summary figures for the statistics view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameStatistics {
    /// Same as the turn count
    pub days_traveled: u32,
    /// Number of tiles on the map
    pub locations_discovered: usize,
    /// Number of items in the inventory
    pub items_collected: usize,
    /// Inventory size per category; categories with no items are absent
    pub category_counts: BTreeMap<ItemCategory, usize>,
    /// Extent of the explored map
    pub bounds: Bounds,
}

impl GameStatistics {
    /// Items collected in one category.
    pub fn count(&self, category: ItemCategory) -> usize {
        self.category_counts.get(&category).copied().unwrap_or(0)
    }

    /// Width of the explored map in tiles.
    pub fn map_width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height of the explored map in tiles.
    pub fn map_height(&self) -> i32 {
        self.bounds.height()
    }

    pub fn furthest_north(&self) -> i32 {
        self.bounds.max_y
    }

    pub fn furthest_south(&self) -> i32 {
        self.bounds.min_y
    }

    pub fn furthest_east(&self) -> i32 {
        self.bounds.max_x
    }

    pub fn furthest_west(&self) -> i32 {
        self.bounds.min_x
    }
}

/// Plain-data copy of everything the player has seen.
///
/// Tiles are listed in detailed-map order so two snapshots of equal games
/// compare and serialize identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub position: Position,
    pub turn_count: u32,
    pub tiles: Vec<Tile>,
    pub journal: Vec<String>,
    pub inventory: Vec<Item>,
}

impl Game {
    /// Creates a new game with the built-in content tables.
    ///
    /// # Examples
    ///
    /// ```
    /// use wanderings::{Game, GenerationConfig, Position};
    ///
    /// let game = Game::new(GenerationConfig::new(12345)).unwrap();
    /// assert_eq!(game.turn_count(), 1);
    /// assert_eq!(game.current_position(), Position::origin());
    /// assert_eq!(game.journal().len(), 1);
    /// ```
    pub fn new(config: GenerationConfig) -> WanderResult<Self> {
        Self::with_tables(config, ContentTables::default())
    }

    /// Creates a new game drawing from custom content tables.
    pub fn with_tables(config: GenerationConfig, tables: ContentTables) -> WanderResult<Self> {
        let rng = utils::create_rng(&config);
        Self::with_rng(config, tables, rng)
    }

    /// Creates a new game with an explicitly supplied random number generator.
    ///
    /// The starting tile is placed at the origin and the journal is seeded
    /// with the first day's entry.
    pub fn with_rng(
        config: GenerationConfig,
        tables: ContentTables,
        rng: StdRng,
    ) -> WanderResult<Self> {
        config.validate()?;
        tables.validate()?;
        if tables.distinct_theme_count() < config.option_count {
            return Err(WanderError::GenerationFailed(format!(
                "{} location options need at least as many themes, found {}",
                config.option_count,
                tables.distinct_theme_count()
            )));
        }

        let start = Tile::new(
            Position::origin(),
            config::START_THEME,
            config::START_DESCRIPTION,
            config::START_DISCOVERY,
            None,
        );
        let mut map = TileMap::new();
        map.insert(start)?;

        info!("New journey started with seed {}", config.seed);

        Ok(Self {
            map,
            current: Position::origin(),
            turn_count: 1,
            journal: vec![format!("Day 1: {}", config::START_DISCOVERY)],
            inventory: Vec::new(),
            config,
            tables,
            rng,
        })
    }

    /// Gets the tile at a position. `None` means unexplored.
    pub fn get_tile(&self, pos: Position) -> Option<&Tile> {
        self.map.get(pos)
    }

    /// Gets the tile the wanderer is standing on.
    pub fn current_tile(&self) -> WanderResult<&Tile> {
        self.map.get(self.current).ok_or_else(|| {
            WanderError::InvalidState(format!("No tile at current position {}", self.current))
        })
    }

    pub fn current_position(&self) -> Position {
        self.current
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    pub fn journal(&self) -> &[String] {
        &self.journal
    }

    pub fn map(&self) -> &TileMap {
        &self.map
    }

    /// Collected items in order of discovery.
    ///
    /// Entries are resolved through the tiles that own them, so an inventory
    /// item is always the very item attached to its tile.
    pub fn inventory(&self) -> impl Iterator<Item = &Item> + '_ {
        self.inventory
            .iter()
            .filter_map(|&pos| self.map.get(pos).and_then(|tile| tile.item.as_ref()))
    }

    /// Number of collected items.
    pub fn inventory_len(&self) -> usize {
        self.inventory.len()
    }

    /// Collected items grouped by category, in keepsake, treasure, curiosity order.
    ///
    /// Discovery order is preserved inside each group.
    pub fn inventory_by_category(&self) -> Vec<(ItemCategory, Vec<&Item>)> {
        ItemCategory::ALL
            .into_iter()
            .map(|category| {
                let items: Vec<&Item> = self
                    .inventory()
                    .filter(|item| item.category == category)
                    .collect();
                (category, items)
            })
            .collect()
    }

    /// Directions from the current position that lead to unexplored ground.
    pub fn adjacent_directions(&self) -> Vec<Direction> {
        self.map.unexplored_directions(self.current)
    }

    /// Draws the location options for the next step.
    pub fn generate_location_options(&mut self) -> WanderResult<Vec<LocationOption>> {
        LocationGenerator::new(&self.tables).generate(&self.config, &mut self.rng)
    }

    /// Draws discovery text for a theme.
    pub fn generate_discovery(&mut self, theme: &str) -> WanderResult<String> {
        DiscoveryGenerator::new(&self.tables, theme).generate(&self.config, &mut self.rng)
    }

    /// Rolls for an item on a tile with the given theme.
    pub fn generate_item(&mut self, theme: &str, turn: u32) -> WanderResult<Option<Item>> {
        ItemGenerator::new(&self.tables, theme, turn).generate(&self.config, &mut self.rng)
    }

    /// Steps in `direction` onto a new tile built from `option`.
    ///
    /// The option is trusted as given. The target must be unexplored; stepping
    /// onto an explored tile is rejected before anything changes.
    ///
    /// On success exactly one tile is added, the position moves, the day
    /// advances by one, one journal line is written (two when something was
    /// found) and a found item joins the inventory. The found item is returned.
    pub fn explore(
        &mut self,
        direction: Direction,
        option: &LocationOption,
    ) -> WanderResult<Option<Item>> {
        let target = self.current.step(direction);
        if self.map.contains(target) {
            warn!("Refusing to explore {} twice", target);
            return Err(WanderError::InvalidAction(format!(
                "Cannot explore {} from {}: {} is already explored",
                direction, self.current, target
            )));
        }

        let discovery = self.generate_discovery(&option.theme)?;
        let item = self.generate_item(&option.theme, self.turn_count)?;

        let tile = Tile::new(
            target,
            option.theme.clone(),
            option.description.clone(),
            discovery.clone(),
            item.clone(),
        );
        self.map.insert(tile)?;

        self.current = target;
        self.turn_count += 1;

        self.journal
            .push(format!("Day {}: {}", self.turn_count, discovery));
        if let Some(found) = &item {
            self.journal.push(format!("  → Found: {}", found.name));
            self.inventory.push(target);
        }

        debug!(
            "Day {}: explored {} to {} ({}), item: {:?}",
            self.turn_count,
            direction,
            target,
            option.theme,
            item.as_ref().map(|found| found.name.as_str())
        );

        Ok(item)
    }

    /// Bounding box of every explored tile.
    pub fn compute_bounds(&self) -> Bounds {
        self.map.bounds()
    }

    /// Classifies a cell for the map view.
    pub fn classify_cell(&self, pos: Position) -> CellKind {
        self.map.classify_cell(pos, self.current)
    }

    /// All tiles, north to south and east to west.
    pub fn detailed_locations(&self) -> Vec<&Tile> {
        self.map.detailed_locations()
    }

    /// Gathers the figures shown in the statistics view.
    pub fn statistics(&self) -> GameStatistics {
        let mut category_counts = BTreeMap::new();
        for item in self.inventory() {
            *category_counts.entry(item.category).or_insert(0) += 1;
        }

        GameStatistics {
            days_traveled: self.turn_count,
            locations_discovered: self.map.len(),
            items_collected: self.inventory.len(),
            category_counts,
            bounds: self.compute_bounds(),
        }
    }

    /// Copies the visible state into plain data.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            position: self.current,
            turn_count: self.turn_count,
            tiles: self.detailed_locations().into_iter().cloned().collect(),
            journal: self.journal.clone(),
            inventory: self.inventory().cloned().collect(),
        }
    }

    /// Serializes a snapshot to JSON.
    pub fn snapshot_json(&self) -> WanderResult<String> {
        serde_json::to_string_pretty(&self.snapshot()).map_err(WanderError::from)
    }
}
