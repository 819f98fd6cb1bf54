//! Two games built from the same seed and fed the same choices must agree
//! byte for byte.

use wanderings::{Game, GameSnapshot, GenerationConfig, WanderResult};

/// (direction index into the frontier, option index) per step.
fn scripted_choices() -> Vec<(usize, usize)> {
    vec![
        (0, 0),
        (0, 2),
        (2, 1),
        (1, 1),
        (0, 0),
        (3, 2),
        (2, 0),
        (1, 2),
        (0, 1),
        (2, 2),
        (0, 0),
        (1, 1),
    ]
}

fn replay(seed: u64, choices: &[(usize, usize)]) -> WanderResult<(GameSnapshot, String)> {
    let mut game = Game::new(GenerationConfig::new(seed))?;

    for &(direction_index, option_index) in choices {
        let directions = game.adjacent_directions();
        if directions.is_empty() {
            break;
        }
        let direction = directions[direction_index % directions.len()];
        let options = game.generate_location_options()?;
        let option = &options[option_index % options.len()];
        game.explore(direction, option)?;
    }

    let json = game.snapshot_json()?;
    Ok((game.snapshot(), json))
}

#[test]
fn deterministic_replay_produces_identical_games() -> WanderResult<()> {
    let (first, first_json) = replay(20240611, &scripted_choices())?;
    let (second, second_json) = replay(20240611, &scripted_choices())?;

    assert_eq!(first, second, "replay diverged between runs");
    assert_eq!(first_json, second_json);
    assert_eq!(first.turn_count, 1 + scripted_choices().len() as u32);
    Ok(())
}

#[test]
fn different_seeds_tell_different_stories() -> WanderResult<()> {
    let (first, _) = replay(1, &scripted_choices())?;
    let (second, _) = replay(2, &scripted_choices())?;

    // Same path shape, but the generated content differs
    assert_eq!(first.tiles.len(), second.tiles.len());
    assert_ne!(first.journal, second.journal);
    Ok(())
}

#[test]
fn option_generation_is_reproducible() -> WanderResult<()> {
    let mut a = Game::new(GenerationConfig::new(77))?;
    let mut b = Game::new(GenerationConfig::new(77))?;

    for _ in 0..20 {
        assert_eq!(a.generate_location_options()?, b.generate_location_options()?);
    }
    Ok(())
}
