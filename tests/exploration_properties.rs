//! Property tests for the exploration engine.

use proptest::prelude::*;
use std::collections::HashSet;
use wanderings::{Direction, Game, GenerationConfig, Position};

/// Walks the frontier using the given choice indices and checks the engine
/// invariants after every step.
fn walk_and_check(seed: u64, choices: &[(usize, usize)]) -> Result<Game, TestCaseError> {
    let mut game = Game::new(GenerationConfig::new(seed)).unwrap();

    for (step, &(direction_index, option_index)) in choices.iter().enumerate() {
        let directions = game.adjacent_directions();
        if directions.is_empty() {
            break;
        }

        // Frontier never leads onto explored ground
        for &direction in &directions {
            let target = game.current_position().step(direction);
            prop_assert!(game.get_tile(target).is_none());
        }

        let direction = directions[direction_index % directions.len()];
        let options = game.generate_location_options().unwrap();
        prop_assert_eq!(options.len(), 3);
        let themes: HashSet<&str> = options.iter().map(|o| o.theme.as_str()).collect();
        prop_assert_eq!(themes.len(), 3);

        let tiles_before = game.map().len();
        let journal_before = game.journal().len();
        let inventory_before = game.inventory_len();
        let day = game.turn_count();

        let found = game.explore(direction, &options[option_index % 3]).unwrap();

        prop_assert_eq!(game.turn_count(), 2 + step as u32);
        prop_assert_eq!(game.map().len(), tiles_before + 1);
        let expected_lines = if found.is_some() { 2 } else { 1 };
        prop_assert_eq!(game.journal().len(), journal_before + expected_lines);
        prop_assert_eq!(
            game.inventory_len(),
            inventory_before + usize::from(found.is_some())
        );
        if let Some(item) = &found {
            prop_assert_eq!(item.found_day, day);
            prop_assert!(game.journal().last().unwrap().starts_with("  → Found: "));
        }
        prop_assert!(game.get_tile(game.current_position()).is_some());
    }

    Ok(game)
}

fn choices() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0usize..4, 0usize..3), 0..40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn tiles_stay_unique_and_turns_advance(seed in any::<u64>(), choices in choices()) {
        let game = walk_and_check(seed, &choices)?;

        let positions: Vec<Position> = game.map().tiles().map(|tile| tile.position).collect();
        let distinct: HashSet<Position> = positions.iter().copied().collect();
        prop_assert_eq!(positions.len(), distinct.len());
        prop_assert_eq!(game.turn_count() as usize, game.map().len());
        prop_assert!(game.get_tile(Position::origin()).is_some());
    }

    #[test]
    fn inventory_matches_tiles(seed in any::<u64>(), choices in choices()) {
        let game = walk_and_check(seed, &choices)?;

        for item in game.inventory() {
            let owners = game
                .map()
                .tiles()
                .filter(|tile| tile.item.as_ref() == Some(item))
                .count();
            prop_assert_eq!(owners, 1);
        }

        let on_tiles = game.map().tiles().filter(|tile| tile.item.is_some()).count();
        prop_assert_eq!(on_tiles, game.inventory_len());
    }

    #[test]
    fn bounds_cover_every_tile(seed in any::<u64>(), choices in choices()) {
        let game = walk_and_check(seed, &choices)?;
        let bounds = game.compute_bounds();

        for tile in game.map().tiles() {
            prop_assert!(bounds.contains(tile.position));
        }
        prop_assert!(bounds.width() >= 1 && bounds.height() >= 1);
    }

    #[test]
    fn isolated_tile_has_full_frontier(x in -1000i32..1000, y in -1000i32..1000) {
        let game = Game::new(GenerationConfig::new(0)).unwrap();
        let pos = Position::new(x, y);
        let open = game.map().unexplored_directions(pos);

        let touches_origin = pos
            .cardinal_adjacent_positions()
            .contains(&Position::origin());
        if touches_origin {
            prop_assert_eq!(open.len(), 3);
        } else {
            prop_assert_eq!(open, Direction::cardinal().to_vec());
        }
    }
}
