//! # Display Management
//!
//! Plain-text views of the game for the terminal front end.
//!
//! Every view is built as a `String` from read-only game state, so views can
//! be tested without a terminal and the front end only has to print them.

use crate::config::BANNER_WIDTH;
use crate::game::{CellKind, Direction, Game, Item, Position, Tile};
use crate::generation::LocationOption;
use crate::rendering::ui::{banner, banner_footer, banner_header, center_text, pad_line, rule};
use crate::WanderResult;
use std::fmt::Write;

/// Entries of the main menu, in the order they are numbered.
pub const MENU_ENTRIES: [&str; 7] = [
    "View Map",
    "Detailed Map (with locations)",
    "View Inventory",
    "Read Journal",
    "Current Location Info",
    "Game Statistics",
    "Return to Journey",
];

/// Glyph drawn for a map cell. Every glyph is two columns wide.
pub fn cell_glyph(kind: CellKind) -> &'static str {
    match kind {
        CellKind::Current => "📍",
        CellKind::HasItem => "🎁",
        CellKind::Explored => "■ ",
        CellKind::Frontier => "· ",
        CellKind::Unexplored => "  ",
    }
}

/// Text renderer for every game view.
#[derive(Debug, Clone, Default)]
pub struct TerminalDisplay;

impl TerminalDisplay {
    /// Creates a new display.
    pub fn new() -> Self {
        Self
    }

    /// Opening screen showing the starting tile.
    pub fn render_welcome(&self, tile: &Tile) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", banner("Welcome to Wanderings"));
        let _ = writeln!(out, "{}", center_text("A Cozy Map-Making Adventure", BANNER_WIDTH + 2));
        let _ = writeln!(out);
        let _ = writeln!(out, "🌿 {}", tile.theme);
        let _ = writeln!(out, "{}", tile.description);
        let _ = write!(out, "\n{}", tile.discovery);
        out
    }

    /// The grid map, padded by one cell around the explored area.
    ///
    /// Rows run from north (top) to south, columns from west to east.
    pub fn render_map(&self, game: &Game) -> String {
        let area = game.compute_bounds().padded(1);
        let inner = area.width() as usize * 3 + 1;

        let mut out = String::new();
        let _ = writeln!(out, "{}", banner_header("Your Map", inner));
        for y in (area.min_y..=area.max_y).rev() {
            let mut line = String::from("║ ");
            for x in area.min_x..=area.max_x {
                line.push_str(cell_glyph(game.classify_cell(Position::new(x, y))));
                line.push(' ');
            }
            line.push('║');
            let _ = writeln!(out, "{}", line);
        }
        let _ = writeln!(out, "{}", banner_footer(inner));
        let _ = writeln!(out);
        let _ = write!(out, "Legend: 📍 You  ■ Explored  🎁 Has Item  · Unexplored");
        out
    }

    /// Every discovered location with its coordinates and any item found.
    pub fn render_detailed_map(&self, game: &Game) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", banner("Detailed Map"));
        let _ = writeln!(out);
        for tile in game.detailed_locations() {
            let marker = if tile.position == game.current_position() {
                "📍"
            } else {
                "■"
            };
            let _ = writeln!(
                out,
                "{} {} ({},{})",
                marker, tile.theme, tile.position.x, tile.position.y
            );
            if let Some(item) = &tile.item {
                let _ = writeln!(out, "   🎁 Contains: {}", item.name);
            }
        }
        out
    }

    /// The collection, grouped by category.
    pub fn render_inventory(&self, game: &Game) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", banner("Collection"));

        if game.inventory_len() == 0 {
            let _ = write!(
                out,
                "\nYour pack is empty. Perhaps you'll find something as you wander..."
            );
            return out;
        }

        for (category, items) in game.inventory_by_category() {
            if items.is_empty() {
                continue;
            }
            let _ = writeln!(
                out,
                "\n{} {} ({})",
                category.icon(),
                category.plural(),
                items.len()
            );
            let _ = writeln!(out, "{}", rule());
            let blocks: Vec<String> = items
                .iter()
                .enumerate()
                .map(|(index, item)| self.render_item_entry(index + 1, item))
                .collect();
            let _ = writeln!(out, "{}", blocks.join("\n\n"));
        }

        let _ = write!(
            out,
            "\n{} Total items collected: {}",
            rule(),
            game.inventory_len()
        );
        out
    }

    fn render_item_entry(&self, number: usize, item: &Item) -> String {
        format!(
            "{}. {}\n   {}\n   Found at {} on Day {}",
            number, item.name, item.description, item.found_at, item.found_day
        )
    }

    /// Every journal line, oldest first.
    pub fn render_journal(&self, game: &Game) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", banner("Journal"));
        for entry in game.journal() {
            let _ = writeln!(out, "{}", entry);
        }
        out
    }

    /// Details of the tile the wanderer stands on.
    pub fn render_current_location(&self, game: &Game) -> WanderResult<String> {
        let tile = game.current_tile()?;
        let mut out = String::new();
        let _ = writeln!(out, "{}", banner("Current Location"));
        let _ = writeln!(out, "🌿 {}", tile.theme);
        let _ = writeln!(out, "📍 Position: {}\n", tile.position);
        let _ = writeln!(out, "{}\n", tile.description);
        match &tile.item {
            Some(item) => {
                let _ = writeln!(out, "🎁 You found: {}", item.name);
                let _ = write!(out, "   {}", item.description);
            }
            None => {
                let _ = write!(
                    out,
                    "This location holds no items, just peaceful presence."
                );
            }
        }
        Ok(out)
    }

    /// Journey figures and the extent of the map.
    pub fn render_statistics(&self, game: &Game) -> String {
        let stats = game.statistics();
        let mut out = String::new();
        let _ = writeln!(out, "{}", banner("Statistics"));
        let _ = writeln!(out, "🗓️  Days Traveled: {}", stats.days_traveled);
        let _ = writeln!(out, "🗺️  Locations Discovered: {}", stats.locations_discovered);
        let _ = writeln!(out, "🎒 Items Collected: {}", stats.items_collected);

        if stats.items_collected > 0 {
            let _ = writeln!(out, "\nCollection breakdown:");
            for (category, count) in &stats.category_counts {
                let _ = writeln!(out, "  {} {}: {}", category.icon(), category.plural(), count);
            }
        }

        let _ = writeln!(
            out,
            "\n🧭 Map Dimensions: {} × {}",
            stats.map_width(),
            stats.map_height()
        );
        let _ = write!(
            out,
            "📏 Furthest North: {}, South: {}, East: {}, West: {}",
            stats.furthest_north(),
            stats.furthest_south(),
            stats.furthest_east(),
            stats.furthest_west()
        );
        out
    }

    /// Farewell screen printed on quit.
    pub fn render_summary(&self, game: &Game) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", banner("Journey Summary"));
        let _ = writeln!(out, "\n🗓️  Days traveled: {}", game.turn_count());
        let _ = writeln!(out, "🗺️  Locations discovered: {}", game.map().len());
        let _ = writeln!(out, "🎒 Items collected: {}\n", game.inventory_len());
        let _ = write!(out, "Thank you for wandering with us. Until next time... 🌙✨");
        out
    }

    /// The main menu box.
    pub fn render_menu(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", banner_header("Menu", BANNER_WIDTH));
        for (index, entry) in MENU_ENTRIES.iter().enumerate() {
            let line = format!("  {}. {}", index + 1, entry);
            let _ = writeln!(out, "║{}║", pad_line(&line, BANNER_WIDTH));
        }
        let _ = write!(out, "{}", banner_footer(BANNER_WIDTH));
        out
    }

    /// The numbered list of directions still open from here.
    pub fn render_directions(&self, directions: &[Direction]) -> String {
        let mut out = String::new();
        if directions.is_empty() {
            let _ = writeln!(out, "\nYou have explored all directions from here!");
            let _ = write!(out, "Commands: [menu] | [m]ap | [i]nventory | [j]ournal | [q]uit");
        } else {
            let _ = writeln!(out, "\nWhere would you like to wander?");
            for (index, direction) in directions.iter().enumerate() {
                let _ = writeln!(out, "  {}. Explore {}", index + 1, direction);
            }
            let _ = write!(out, "\nOther: [menu] | [m]ap | [i]nventory | [j]ournal | [q]uit");
        }
        out
    }

    /// The options revealed when heading in a direction.
    pub fn render_options(&self, direction: Direction, options: &[LocationOption]) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "\n✨ As you head {}, {} paths reveal themselves:\n",
            direction,
            count_in_words(options.len())
        );
        for (index, option) in options.iter().enumerate() {
            let _ = writeln!(out, "{}. {}\n   {}\n", index + 1, option.theme, option.description);
        }
        out
    }

    /// Arrival on a freshly explored tile, and any item found there.
    pub fn render_arrival(&self, tile: &Tile, found: Option<&Item>) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", banner(&tile.theme));
        let _ = writeln!(out, "\n{}", tile.description);
        let _ = write!(out, "\n{}", tile.discovery);
        if let Some(item) = found {
            let _ = writeln!(out, "\n\n{}", rule());
            let _ = writeln!(out, "\n✨ You found something! ✨\n");
            let _ = writeln!(out, "🎁 {}", item.name);
            let _ = write!(out, "   {}", item.description);
        }
        out
    }
}

/// Small counts spelled out for prose.
fn count_in_words(count: usize) -> String {
    const WORDS: [&str; 10] = [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    ];
    WORDS
        .get(count)
        .map_or_else(|| count.to_string(), |word| word.to_string())
}
