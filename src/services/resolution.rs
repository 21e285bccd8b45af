//! Bookkeeping shared by the night and day resolvers.

use std::collections::BTreeMap;

use crate::{
    models::{
        death::DeathReason,
        game::Game,
        role::{Role, Species},
    },
    utils::rng::{choose, RandomSource},
};

pub(crate) fn note(trace: &mut Option<Vec<String>>, message: String) {
    log::debug!("{}", message);
    if let Some(lines) = trace.as_mut() {
        lines.push(message);
    }
}

/// Kills every living immoralist once no fox is left alive. Returns the names killed.
pub(crate) fn immoralists_follow_last_fox(
    game: &mut Game,
    trace: &mut Option<Vec<String>>,
) -> Vec<String> {
    if game.roster.alive_count_of(Species::Fox) > 0 {
        return Vec::new();
    }

    let turn = game.turn;
    let mut followers = Vec::new();
    for id in game.roster.alive_ids_where(|p| p.role == Role::Immoralist) {
        if game.roster.kill(id, turn, DeathReason::Suicide) {
            if let Some(player) = game.roster.get(id) {
                note(trace, format!("妖狐全滅により{}(背徳者)が後追い", player.name));
                followers.push(player.name.clone());
            }
        }
    }
    followers
}

/// Target with the strictly highest tally, ties broken by `rng`. Candidates are taken in
/// name order so the same seed always settles a tie the same way.
pub(crate) fn most_voted(
    tally: &BTreeMap<String, usize>,
    rng: &mut dyn RandomSource,
) -> Option<(String, Vec<String>)> {
    let max = *tally.values().max()?;
    let candidates: Vec<String> = tally
        .iter()
        .filter(|(_, count)| **count == max)
        .map(|(name, _)| name.clone())
        .collect();
    let chosen = match candidates.len() {
        0 => return None,
        1 => candidates[0].clone(),
        _ => choose(rng, &candidates)?.clone(),
    };
    Some((chosen, candidates))
}

pub(crate) fn joined(trace: Option<Vec<String>>) -> Option<String> {
    trace.map(|lines| lines.join("; "))
}
