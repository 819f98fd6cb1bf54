//! # Rendering Module
//!
//! Text rendering of game views for the terminal front end.

pub mod display;
pub mod ui;

pub use display::*;
pub use ui::*;
