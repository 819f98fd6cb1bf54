//! # Input Module
//!
//! Input handling and command parsing for player interactions.
//!
//! Malformed input is reported as [`WanderError::InvalidInput`] and never
//! touches the game; the front end answers it by prompting again.

pub mod commands;

pub use commands::*;

use crate::game::{Direction, Game};
use crate::generation::LocationOption;
use crate::{WanderError, WanderResult};

/// Resolves numbered choices against what is currently on offer.
#[derive(Debug, Clone, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    pub fn new() -> Self {
        Self
    }

    /// Parses a 1-based choice in `1..=count` and returns it as a 0-based index.
    ///
    /// # Examples
    ///
    /// ```
    /// use wanderings::InputHandler;
    ///
    /// let handler = InputHandler::new();
    /// assert_eq!(handler.parse_choice("3", 3).unwrap(), 2);
    /// assert!(handler.parse_choice("4", 3).is_err());
    /// ```
    pub fn parse_choice(&self, line: &str, count: usize) -> WanderResult<usize> {
        let trimmed = line.trim();
        let choice: usize = trimmed
            .parse()
            .map_err(|_| WanderError::InvalidInput(format!("'{}' is not a number", trimmed)))?;
        self.check_range(choice, count)
    }

    /// Maps a numbered direction choice onto the game's current frontier.
    pub fn select_direction(&self, game: &Game, choice: usize) -> WanderResult<Direction> {
        let directions = game.adjacent_directions();
        let index = self.check_range(choice, directions.len())?;
        Ok(directions[index])
    }

    /// Picks one of the offered location options from a typed line.
    pub fn select_option<'o>(
        &self,
        options: &'o [LocationOption],
        line: &str,
    ) -> WanderResult<&'o LocationOption> {
        let index = self.parse_choice(line, options.len())?;
        Ok(&options[index])
    }

    fn check_range(&self, choice: usize, count: usize) -> WanderResult<usize> {
        if (1..=count).contains(&choice) {
            Ok(choice - 1)
        } else {
            Err(WanderError::InvalidInput(format!(
                "Choice {} is not between 1 and {}",
                choice, count
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::GenerationConfig;

    #[test]
    fn test_parse_choice_bounds() {
        let handler = InputHandler::new();
        assert_eq!(handler.parse_choice("1", 3).unwrap(), 0);
        assert_eq!(handler.parse_choice(" 2\n", 3).unwrap(), 1);
        assert!(handler.parse_choice("0", 3).is_err());
        assert!(handler.parse_choice("abc", 3).is_err());
        assert!(handler.parse_choice("1", 0).is_err());
    }

    #[test]
    fn test_select_direction_follows_frontier() {
        let handler = InputHandler::new();
        let mut game = Game::new(GenerationConfig::new(3)).unwrap();
        assert_eq!(handler.select_direction(&game, 1).unwrap(), Direction::North);
        assert_eq!(handler.select_direction(&game, 4).unwrap(), Direction::West);
        assert!(handler.select_direction(&game, 5).is_err());

        let option = LocationOption {
            theme: "Hollow Tree".to_string(),
            description: "A hollow.".to_string(),
        };
        game.explore(Direction::North, &option).unwrap();

        // South leads back to the start, so it is no longer offered
        assert_eq!(handler.select_direction(&game, 2).unwrap(), Direction::East);
    }

    #[test]
    fn test_select_option() {
        let handler = InputHandler::new();
        let mut game = Game::new(GenerationConfig::new(3)).unwrap();
        let options = game.generate_location_options().unwrap();

        let chosen = handler.select_option(&options, "2").unwrap();
        assert_eq!(chosen, &options[1]);
        assert!(handler.select_option(&options, "4").is_err());
    }
}
