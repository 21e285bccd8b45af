use std::collections::{BTreeMap, HashMap};

use super::resolution::{immoralists_follow_last_fox, joined, most_voted, note};
use crate::{
    models::{
        death::DeathReason,
        game::Game,
        outcome::ExecutionResult,
        role::{Role, Species},
    },
    utils::{
        error::GameError,
        rng::{choose, RandomSource},
    },
};

/// Candidate name -> number of votes.
pub type VoteTally = BTreeMap<String, usize>;

/// Counts per-voter choices (voter -> candidate) into a tally.
pub fn tally_votes(votes: &HashMap<String, String>) -> VoteTally {
    let mut tally = VoteTally::new();
    for target in votes.values() {
        *tally.entry(target.clone()).or_insert(0) += 1;
    }
    tally
}

/// Executes the most voted candidate.
///
/// An empty tally, or a winner who is already dead, executes nobody without being an error.
/// A winner who is not on the roster yields an `error` and leaves the roster untouched.
pub fn execute_day_vote(
    game: &mut Game,
    votes: &VoteTally,
    rng: &mut dyn RandomSource,
) -> ExecutionResult {
    let turn = game.turn;
    let mut trace = game.new_trace();

    let tally: VoteTally = votes
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(name, count)| (name.clone(), *count))
        .collect();

    let Some((executed_name, candidates)) = most_voted(&tally, rng) else {
        note(&mut trace, "投票なしのため処刑なし".to_string());
        game.last_executed = None;
        return ExecutionResult::no_execution(joined(trace));
    };

    if candidates.len() > 1 {
        note(
            &mut trace,
            format!("同票のためランダム処刑: {:?} -> {}", candidates, executed_name),
        );
    }
    note(&mut trace, format!("処刑対象は{}", executed_name));

    let Some(executed) = game
        .roster
        .find_by_name(&executed_name)
        .map(|p| (p.id, p.role, p.is_alive))
    else {
        log::warn!("Vote names unknown player {}", executed_name);
        game.last_executed = None;
        return ExecutionResult {
            error: Some(GameError::UnresolvedTarget(executed_name).to_string()),
            ..ExecutionResult::no_execution(joined(trace))
        };
    };
    let (executed_id, role, is_alive) = executed;

    if !is_alive {
        note(&mut trace, format!("処刑対象{}は既に死亡している", executed_name));
        game.last_executed = None;
        return ExecutionResult::no_execution(joined(trace));
    }

    game.roster.kill(executed_id, turn, DeathReason::Execute);
    game.last_executed = Some(executed_name.clone());
    note(&mut trace, format!("{}を処刑した", executed_name));

    let mut chained_suicides = Vec::new();
    let mut retaliation_victim = None;

    if role.species() == Species::Fox {
        // 最後の妖狐なら背徳者が後追い
        chained_suicides = immoralists_follow_last_fox(game, &mut trace);
    } else if role == Role::Nekomata {
        // 処刑時の道連れは陣営を問わない
        let others = game.roster.alive_ids_where(|p| p.id != executed_id);
        match choose(rng, &others).copied() {
            Some(target_id) => {
                if game.roster.kill(target_id, turn, DeathReason::Retaliation) {
                    if let Some(target) = game.roster.get(target_id) {
                        note(
                            &mut trace,
                            format!("{}(猫又)が処刑されたため{}を道連れにした", executed_name, target.name),
                        );
                        retaliation_victim = Some(target.name.clone());
                    }
                }
            }
            None => note(
                &mut trace,
                format!("{}(猫又)が処刑されたが、道連れにする生存者がいない", executed_name),
            ),
        }
    }

    ExecutionResult {
        executed: Some(executed_name),
        chained_suicides,
        retaliation_victim,
        error: None,
        trace: joined(trace),
    }
}

/// Executes from per-voter choices.
pub fn execute_individual_votes(
    game: &mut Game,
    votes: &HashMap<String, String>,
    rng: &mut dyn RandomSource,
) -> ExecutionResult {
    execute_day_vote(game, &tally_votes(votes), rng)
}

/// Executes a target agreed on outside the engine, e.g. by a show of hands.
pub fn execute_batch_vote(
    game: &mut Game,
    target: &str,
    rng: &mut dyn RandomSource,
) -> ExecutionResult {
    let tally = VoteTally::from([(target.to_string(), 1)]);
    execute_day_vote(game, &tally, rng)
}
