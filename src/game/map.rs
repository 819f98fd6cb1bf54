//! # Tile Map
//!
//! The sparse, ever-growing map of discovered locations.
//!
//! Tiles are keyed by [`Position`] and only ever inserted. A coordinate with no
//! tile is simply unexplored; lookups return `None` rather than an error, and
//! that absence is what drives the exploration frontier and the map view.

use crate::game::{Direction, Item, Position};
use crate::{WanderError, WanderResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A discovered location on the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// Where this tile sits on the grid
    pub position: Position,
    /// Theme name, e.g. "Crystal Pool"
    pub theme: String,
    /// Longer description chosen from the offered options
    pub description: String,
    /// Flavor text generated on arrival
    pub discovery: String,
    /// Tiles only exist once visited, so this is always true
    pub visited: bool,
    /// Collectible found here, if any
    pub item: Option<Item>,
}

impl Tile {
    /// Creates a visited tile.
    pub fn new(
        position: Position,
        theme: impl Into<String>,
        description: impl Into<String>,
        discovery: impl Into<String>,
        item: Option<Item>,
    ) -> Self {
        Self {
            position,
            theme: theme.into(),
            description: description.into(),
            discovery: discovery.into(),
            visited: true,
            item,
        }
    }

    /// Whether a collectible was found on this tile.
    pub fn has_item(&self) -> bool {
        self.item.is_some()
    }
}

/// Inclusive bounding box of every discovered tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl Bounds {
    /// Number of columns covered.
    pub fn width(&self) -> i32 {
        self.max_x - self.min_x + 1
    }

    /// Number of rows covered.
    pub fn height(&self) -> i32 {
        self.max_y - self.min_y + 1
    }

    /// Grows the box by `amount` cells on every side.
    pub fn padded(&self, amount: i32) -> Bounds {
        Bounds {
            min_x: self.min_x - amount,
            max_x: self.max_x + amount,
            min_y: self.min_y - amount,
            max_y: self.max_y + amount,
        }
    }

    /// Checks if a position lies inside the box.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= self.min_x && pos.x <= self.max_x && pos.y >= self.min_y && pos.y <= self.max_y
    }
}

/// How a single map cell should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// The wanderer is standing here
    Current,
    /// Explored, and an item was found here
    HasItem,
    /// Explored, nothing found
    Explored,
    /// Not explored, but next to an explored tile
    Frontier,
    /// Not explored and not reachable in one step
    Unexplored,
}

/// Mapping from grid coordinate to discovered tile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TileMap {
    tiles: HashMap<Position, Tile>,
}

impl TileMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a tile at its own position.
    ///
    /// A coordinate holds at most one tile for the lifetime of the map, so
    /// inserting onto an occupied coordinate is rejected and the existing tile
    /// is kept.
    pub fn insert(&mut self, tile: Tile) -> WanderResult<()> {
        if self.tiles.contains_key(&tile.position) {
            return Err(WanderError::InvalidAction(format!(
                "Location {} has already been explored",
                tile.position
            )));
        }
        self.tiles.insert(tile.position, tile);
        Ok(())
    }

    /// Gets the tile at a position, if one has been discovered.
    pub fn get(&self, pos: Position) -> Option<&Tile> {
        self.tiles.get(&pos)
    }

    /// Checks if a position has been explored.
    pub fn contains(&self, pos: Position) -> bool {
        self.tiles.contains_key(&pos)
    }

    /// Number of discovered tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether no tile has been discovered yet.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterates all tiles in arbitrary order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    /// Cardinal directions from `pos` that lead onto unexplored ground.
    ///
    /// Order is always North, South, East, West.
    ///
    /// # Examples
    ///
    /// ```
    /// use wanderings::{Direction, Position, TileMap};
    ///
    /// let map = TileMap::new();
    /// let open = map.unexplored_directions(Position::origin());
    /// assert_eq!(open, Direction::cardinal().to_vec());
    /// ```
    pub fn unexplored_directions(&self, pos: Position) -> Vec<Direction> {
        Direction::cardinal()
            .into_iter()
            .filter(|&direction| !self.contains(pos.step(direction)))
            .collect()
    }

    /// Whether any cardinal neighbour of `pos` has been explored.
    pub fn touches_explored(&self, pos: Position) -> bool {
        pos.cardinal_adjacent_positions()
            .iter()
            .any(|&neighbour| self.contains(neighbour))
    }

    /// Computes the bounding box of all tiles.
    ///
    /// The box always includes the origin, so an empty map yields all zeros.
    pub fn bounds(&self) -> Bounds {
        self.tiles.keys().fold(Bounds::default(), |bounds, pos| Bounds {
            min_x: bounds.min_x.min(pos.x),
            max_x: bounds.max_x.max(pos.x),
            min_y: bounds.min_y.min(pos.y),
            max_y: bounds.max_y.max(pos.y),
        })
    }

    /// Classifies a cell for map rendering.
    pub fn classify_cell(&self, pos: Position, current: Position) -> CellKind {
        match self.get(pos) {
            Some(_) if pos == current => CellKind::Current,
            Some(tile) if tile.has_item() => CellKind::HasItem,
            Some(_) => CellKind::Explored,
            None if self.touches_explored(pos) => CellKind::Frontier,
            None => CellKind::Unexplored,
        }
    }

    /// All tiles ordered north to south, and east to west within a row.
    pub fn detailed_locations(&self) -> Vec<&Tile> {
        let mut locations: Vec<&Tile> = self.tiles.values().collect();
        locations.sort_by(|a, b| {
            b.position
                .y
                .cmp(&a.position.y)
                .then_with(|| b.position.x.cmp(&a.position.x))
        });
        locations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_tile(x: i32, y: i32) -> Tile {
        Tile::new(Position::new(x, y), "Mossy Stones", "desc", "disc", None)
    }

    fn item_tile(x: i32, y: i32) -> Tile {
        let item = Item {
            name: "Pearl".to_string(),
            description: "A prize from your wanderings.".to_string(),
            category: crate::ItemCategory::Treasure,
            found_at: "Crystal Pool".to_string(),
            found_day: 2,
        };
        Tile::new(Position::new(x, y), "Crystal Pool", "desc", "disc", Some(item))
    }

    #[test]
    fn test_missing_tile_is_none() {
        let map = TileMap::new();
        assert!(map.get(Position::new(3, -7)).is_none());
        assert!(map.is_empty());
    }

    #[test]
    fn test_insert_rejects_duplicate_coordinate() {
        let mut map = TileMap::new();
        map.insert(plain_tile(0, 0)).unwrap();

        let result = map.insert(item_tile(0, 0));
        assert!(matches!(result, Err(WanderError::InvalidAction(_))));

        // Original tile survives
        assert_eq!(map.len(), 1);
        assert!(!map.get(Position::origin()).unwrap().has_item());
    }

    #[test]
    fn test_tiles_are_always_visited() {
        assert!(plain_tile(1, 1).visited);
    }

    #[test]
    fn test_unexplored_directions_skip_explored_neighbours() {
        let mut map = TileMap::new();
        map.insert(plain_tile(0, 0)).unwrap();
        map.insert(plain_tile(0, 1)).unwrap();
        map.insert(plain_tile(-1, 0)).unwrap();

        let open = map.unexplored_directions(Position::origin());
        assert_eq!(open, vec![Direction::South, Direction::East]);
    }

    #[test]
    fn test_bounds_include_negative_coordinates() {
        let mut map = TileMap::new();
        map.insert(plain_tile(0, 0)).unwrap();
        map.insert(plain_tile(-2, 0)).unwrap();
        map.insert(plain_tile(-2, -3)).unwrap();
        map.insert(plain_tile(1, 4)).unwrap();

        let bounds = map.bounds();
        assert_eq!(
            bounds,
            Bounds {
                min_x: -2,
                max_x: 1,
                min_y: -3,
                max_y: 4
            }
        );
        assert_eq!(bounds.width(), 4);
        assert_eq!(bounds.height(), 8);
    }

    #[test]
    fn test_empty_bounds_default_to_zero() {
        let bounds = TileMap::new().bounds();
        assert_eq!(bounds, Bounds::default());
        assert_eq!(bounds.width(), 1);
        assert_eq!(bounds.height(), 1);
    }

    #[test]
    fn test_padded_bounds() {
        let bounds = Bounds {
            min_x: 0,
            max_x: 1,
            min_y: 0,
            max_y: 2,
        }
        .padded(1);
        assert_eq!(bounds.min_x, -1);
        assert_eq!(bounds.max_y, 3);
        assert!(bounds.contains(Position::new(-1, 3)));
        assert!(!bounds.contains(Position::new(-2, 0)));
    }

    #[test]
    fn test_classify_cell() {
        let mut map = TileMap::new();
        map.insert(plain_tile(0, 0)).unwrap();
        map.insert(item_tile(1, 0)).unwrap();
        map.insert(plain_tile(2, 0)).unwrap();
        let current = Position::new(2, 0);

        assert_eq!(map.classify_cell(current, current), CellKind::Current);
        assert_eq!(map.classify_cell(Position::new(1, 0), current), CellKind::HasItem);
        assert_eq!(map.classify_cell(Position::new(0, 0), current), CellKind::Explored);
        assert_eq!(map.classify_cell(Position::new(0, 1), current), CellKind::Frontier);
        assert_eq!(map.classify_cell(Position::new(-1, 1), current), CellKind::Unexplored);
    }

    #[test]
    fn test_detailed_locations_order() {
        let mut map = TileMap::new();
        for (x, y) in [(0, 0), (1, 0), (0, 1), (-1, 1), (0, -1)] {
            map.insert(plain_tile(x, y)).unwrap();
        }

        let order: Vec<Position> = map
            .detailed_locations()
            .into_iter()
            .map(|tile| tile.position)
            .collect();

        assert_eq!(
            order,
            vec![
                Position::new(0, 1),
                Position::new(-1, 1),
                Position::new(1, 0),
                Position::new(0, 0),
                Position::new(0, -1),
            ]
        );
    }
}
