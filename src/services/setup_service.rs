use std::collections::HashSet;

use crate::{
    models::{
        config::{GameConfig, RoleCounts, MIN_PLAYERS},
        game::Game,
        role::Role,
    },
    utils::{error::GameError, rng::RandomSource},
};

pub fn validate_player_names<S: AsRef<str>>(names: &[S]) -> Result<(), GameError> {
    if names.len() < MIN_PLAYERS {
        return Err(GameError::TooFewPlayers {
            min: MIN_PLAYERS,
            actual: names.len(),
        });
    }

    let mut seen = HashSet::new();
    for name in names {
        let name = name.as_ref();
        if name.trim().is_empty() {
            return Err(GameError::EmptyPlayerName);
        }
        if !seen.insert(name) {
            return Err(GameError::DuplicatePlayerName(name.to_string()));
        }
    }
    Ok(())
}

pub fn validate_role_counts(counts: &RoleCounts, player_count: usize) -> Result<(), GameError> {
    let total: usize = counts.values().sum();
    if total != player_count {
        return Err(GameError::RoleCountMismatch {
            expected: player_count,
            actual: total,
        });
    }
    Ok(())
}

/// Expands role counts into one card per player, in catalog order.
pub fn build_role_deck(counts: &RoleCounts) -> Vec<Role> {
    counts
        .iter()
        .flat_map(|(role, count)| std::iter::repeat(*role).take(*count))
        .collect()
}

/// Validates the setup, creates the roster and deals roles.
pub fn start_game<S: AsRef<str>>(
    player_names: &[S],
    role_counts: &RoleCounts,
    config: GameConfig,
    rng: &mut dyn RandomSource,
) -> Result<Game, GameError> {
    validate_player_names(player_names)?;
    validate_role_counts(role_counts, player_names.len())?;

    let mut game = Game::new(player_names, config)?;
    let deck = build_role_deck(role_counts);
    game.roster.assign_roles(&deck, rng);

    log::info!(
        "Game started with {} players: {:?}",
        game.roster.len(),
        role_counts
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(role, count)| format!("{}x{}", role, count))
            .collect::<Vec<_>>()
    );
    Ok(game)
}
