//! # Command Definitions
//!
//! The commands a player can type, and the entries of the main menu.

use crate::{WanderError, WanderResult};

/// A command typed at the journey prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Head in the listed direction with this 1-based number
    Explore(usize),
    /// Open the main menu
    Menu,
    /// Show the map
    ShowMap,
    /// Show the collection
    ShowInventory,
    /// Show the journal
    ShowJournal,
    /// End the journey
    Quit,
}

impl PlayerInput {
    /// Parses a line typed at the journey prompt. Case and surrounding
    /// whitespace are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use wanderings::PlayerInput;
    ///
    /// assert_eq!(PlayerInput::parse(" M ").unwrap(), PlayerInput::ShowMap);
    /// assert_eq!(PlayerInput::parse("2").unwrap(), PlayerInput::Explore(2));
    /// assert!(PlayerInput::parse("fly").is_err());
    /// ```
    pub fn parse(line: &str) -> WanderResult<Self> {
        let input = line.trim().to_lowercase();
        match input.as_str() {
            "menu" => Ok(PlayerInput::Menu),
            "m" | "map" => Ok(PlayerInput::ShowMap),
            "i" | "inv" | "inventory" => Ok(PlayerInput::ShowInventory),
            "j" | "journal" => Ok(PlayerInput::ShowJournal),
            "q" | "quit" => Ok(PlayerInput::Quit),
            other => other
                .parse::<usize>()
                .map(PlayerInput::Explore)
                .map_err(|_| WanderError::InvalidInput(format!("Unknown command '{}'", other))),
        }
    }
}

/// An entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewMap,
    DetailedMap,
    ViewInventory,
    ReadJournal,
    CurrentLocation,
    Statistics,
    ReturnToJourney,
}

impl MenuChoice {
    /// Parses a menu number from 1 to 7.
    pub fn parse(line: &str) -> WanderResult<Self> {
        match line.trim() {
            "1" => Ok(MenuChoice::ViewMap),
            "2" => Ok(MenuChoice::DetailedMap),
            "3" => Ok(MenuChoice::ViewInventory),
            "4" => Ok(MenuChoice::ReadJournal),
            "5" => Ok(MenuChoice::CurrentLocation),
            "6" => Ok(MenuChoice::Statistics),
            "7" => Ok(MenuChoice::ReturnToJourney),
            other => Err(WanderError::InvalidInput(format!(
                "'{}' is not a menu choice",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_aliases() {
        for (line, expected) in [
            ("menu", PlayerInput::Menu),
            ("MAP", PlayerInput::ShowMap),
            ("inv", PlayerInput::ShowInventory),
            ("Inventory", PlayerInput::ShowInventory),
            ("j", PlayerInput::ShowJournal),
            ("quit\n", PlayerInput::Quit),
            (" 3 ", PlayerInput::Explore(3)),
        ] {
            assert_eq!(PlayerInput::parse(line).unwrap(), expected, "{}", line);
        }
    }

    #[test]
    fn test_bad_commands() {
        assert!(matches!(
            PlayerInput::parse("north"),
            Err(WanderError::InvalidInput(_))
        ));
        assert!(PlayerInput::parse("-1").is_err());
        assert!(PlayerInput::parse("").is_err());
    }

    #[test]
    fn test_menu_choices() {
        assert_eq!(MenuChoice::parse("1").unwrap(), MenuChoice::ViewMap);
        assert_eq!(MenuChoice::parse(" 7\n").unwrap(), MenuChoice::ReturnToJourney);
        assert!(MenuChoice::parse("0").is_err());
        assert!(MenuChoice::parse("8").is_err());
        assert!(MenuChoice::parse("map").is_err());
    }
}
