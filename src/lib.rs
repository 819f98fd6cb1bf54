//! # Wanderings
//!
//! A gentle exploration game played on an endless grid. Every step into the
//! unknown generates a themed location, a short discovery, and sometimes a
//! small collectible to carry along.
//!
//! ## Architecture Overview
//!
//! - **Game State**: the [`Game`] aggregate owns the tile map, the player
//!   position, the turn counter, the journal and the inventory
//! - **Generation System**: seeded procedural generation of location options,
//!   discoveries and items from static content tables
//! - **Rendering System**: plain-text views of the map, journal, inventory and
//!   statistics for the terminal front end
//! - **Input System**: parsing of the line-oriented commands typed by the player
//!
//! All randomness flows through a single `StdRng` owned by the game, so two
//! games built from the same seed and fed the same choices are identical.

pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;

pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;

/// Core error type for the Wanderings engine.
#[derive(thiserror::Error, Debug)]
pub enum WanderError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),

    /// Action cannot be performed
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// Generation failed or the content tables cannot support it
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    /// Player input could not be understood
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type used throughout the Wanderings codebase.
pub type WanderResult<T> = Result<T, WanderError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Theme of the tile every journey starts on
    pub const START_THEME: &str = "Quiet Grove";

    /// Description of the starting tile
    pub const START_DESCRIPTION: &str =
        "A peaceful clearing surrounded by ancient trees, dappled sunlight filtering through the leaves.";

    /// Discovery text of the starting tile, also the first journal entry
    pub const START_DISCOVERY: &str =
        "You begin your journey here, where the world feels safe and full of possibility.";

    /// Number of location options offered per step
    pub const DEFAULT_OPTION_COUNT: usize = 3;

    /// An item is found when a uniform draw exceeds this threshold
    pub const DEFAULT_ITEM_FIND_THRESHOLD: f64 = 0.6;

    /// Inner width of the box-drawing banners
    pub const BANNER_WIDTH: usize = 60;
}
