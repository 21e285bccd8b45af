//! Readings and per-player night prompts. Nothing here mutates the game; these are the
//! answers shown privately to each player during their turn at night.

use crate::{
    models::{
        action::ActionKind,
        game::Game,
        player::Player,
        role::{MediumResult, Role, SeerResult, Species},
    },
    utils::{
        error::GameError,
        rng::{choose, RandomSource},
    },
};

fn lookup<'a>(game: &'a Game, name: &str) -> Result<&'a Player, GameError> {
    game.roster
        .find_by_name(name)
        .ok_or_else(|| GameError::UnresolvedTarget(name.to_string()))
}

/// True seer's reading of `target`.
pub fn divine(game: &Game, target: &str) -> Result<SeerResult, GameError> {
    Ok(lookup(game, target)?.role.seer_result())
}

/// A fake seer's reading is a coin flip regardless of the target.
pub fn fake_divine(rng: &mut dyn RandomSource) -> SeerResult {
    if rng.pick(2) == 0 {
        SeerResult::Werewolf
    } else {
        SeerResult::Villager
    }
}

/// Reading shown to `actor` for `target`, depending on whether the actor really is the seer.
pub fn seer_reading(
    game: &Game,
    actor: &str,
    target: &str,
    rng: &mut dyn RandomSource,
) -> Result<Option<SeerResult>, GameError> {
    let result = match lookup(game, actor)?.role {
        Role::Seer => Some(divine(game, target)?),
        Role::FakeSeer => {
            lookup(game, target)?;
            Some(fake_divine(rng))
        }
        _ => None,
    };
    Ok(result)
}

/// Random "not a werewolf" reading handed to the seer on the first night under the
/// random-white house rule. Returns the name of the player revealed.
pub fn first_night_white(
    game: &Game,
    seer: &str,
    rng: &mut dyn RandomSource,
) -> Option<String> {
    let candidates: Vec<String> = game
        .roster
        .alive_players()
        .filter(|p| p.name != seer && p.role.seer_result() == SeerResult::Villager)
        .map(|p| p.name.clone())
        .collect();
    choose(rng, &candidates).cloned()
}

/// Medium's reading of the player executed the previous day, if anyone was.
pub fn medium_reading(game: &Game) -> Option<(String, MediumResult)> {
    let name = game.last_executed.as_deref()?;
    let player = game.roster.find_by_name(name)?;
    Some((player.name.clone(), player.role.medium_result()))
}

/// Action `actor` takes tonight, or `None` when the role has nothing to do this turn.
pub fn expected_action(game: &Game, actor: &str) -> Result<Option<ActionKind>, GameError> {
    let role = lookup(game, actor)?.role;
    if role.has_night_action(game.turn, &game.config.house_rules) {
        Ok(Some(role.action_kind()))
    } else {
        Ok(None)
    }
}

/// Players `actor` may pick tonight.
pub fn available_targets(game: &Game, actor: &str) -> Result<Vec<String>, GameError> {
    let actor = lookup(game, actor)?;
    let alive = game.roster.alive_players();

    let targets: Vec<String> = match actor.role {
        Role::Werewolf => alive
            .filter(|p| p.role.species() != Species::Werewolf)
            .map(|p| p.name.clone())
            .collect(),
        Role::Seer | Role::FakeSeer | Role::Knight => alive
            .filter(|p| p.id != actor.id)
            .map(|p| p.name.clone())
            .collect(),
        _ => Vec::new(),
    };
    Ok(targets)
}

/// Living werewolves, revealed to the fanatic.
pub fn alive_werewolf_names(game: &Game) -> Vec<String> {
    game.roster
        .alive_players()
        .filter(|p| p.role == Role::Werewolf)
        .map(|p| p.name.clone())
        .collect()
}

/// Order in which players take their turn at night.
pub fn night_order(game: &Game) -> Vec<String> {
    game.roster.alive_players().map(|p| p.name.clone()).collect()
}
