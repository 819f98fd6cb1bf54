//! # Game Module
//!
//! Core game state management and world representation.
//!
//! This module contains the fundamental building blocks of Wanderings:
//! - Grid coordinates and the four cardinal directions
//! - The tile map and its bounds
//! - Collectible items
//! - The `Game` aggregate driving exploration

pub mod item;
pub mod map;
pub mod state;

pub use item::*;
pub use map::*;
pub use state::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a 2D coordinate on the exploration grid.
///
/// North is positive `y`, east is positive `x`. The grid has no bounds.
///
/// # Examples
///
/// ```
/// use wanderings::Position;
///
/// let pos = Position::new(10, -5);
/// assert_eq!(pos.x, 10);
/// assert_eq!(pos.y, -5);
///
/// let neighbours = pos.cardinal_adjacent_positions();
/// assert_eq!(neighbours.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the origin position (0, 0), where every journey starts.
    pub fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Returns the position one step away in the given direction.
    pub fn step(self, direction: Direction) -> Self {
        self + direction.to_delta()
    }

    /// Returns the 4 cardinal neighbours in North, South, East, West order.
    pub fn cardinal_adjacent_positions(self) -> [Position; 4] {
        Direction::cardinal().map(|direction| self.step(direction))
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Position {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The four directions a wanderer can head in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Converts a direction to a position delta.
    ///
    /// # Examples
    ///
    /// ```
    /// use wanderings::{Direction, Position};
    ///
    /// assert_eq!(Direction::North.to_delta(), Position::new(0, 1));
    /// assert_eq!(Direction::West.to_delta(), Position::new(-1, 0));
    /// ```
    pub fn to_delta(self) -> Position {
        match self {
            Direction::North => Position::new(0, 1),
            Direction::South => Position::new(0, -1),
            Direction::East => Position::new(1, 0),
            Direction::West => Position::new(-1, 0),
        }
    }

    /// Returns the 4 cardinal directions in frontier order.
    pub fn cardinal() -> [Direction; 4] {
        [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
        ]
    }

    /// Human readable name of the direction.
    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
