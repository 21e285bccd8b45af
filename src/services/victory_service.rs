use crate::models::{
    game::{Game, GamePhase},
    outcome::VictoryResult,
    role::{Species, Team},
    roster::Roster,
};

/// Decides the winner from the current survivors alone, without touching any state.
///
/// Villagers win once no werewolf is alive, werewolves once they are at least as many as
/// the villager species. Either way a surviving fox takes the win instead.
pub fn evaluate_victory(roster: &Roster) -> Option<VictoryResult> {
    let wolves = roster.alive_count_of(Species::Werewolf);
    let villagers = roster.alive_count_of(Species::Villager);
    let foxes = roster.alive_count_of(Species::Fox);

    let villager_win = wolves == 0;
    let werewolf_win = wolves >= villagers;

    if !villager_win && !werewolf_win {
        return None;
    }

    let result = if foxes > 0 {
        let message = if villager_win {
            "人狼は全滅しましたが、妖狐が生き残ったため妖狐陣営の勝利です！"
        } else {
            "人狼が村人の人数以上となりましたが、妖狐が生き残ったため妖狐陣営の勝利です！"
        };
        VictoryResult {
            team: Team::Fox,
            message: message.to_string(),
        }
    } else if villager_win {
        VictoryResult {
            team: Team::Villager,
            message: "人狼は全滅しました。村人陣営の勝利です！".to_string(),
        }
    } else {
        VictoryResult {
            team: Team::Werewolf,
            message: "人狼が村人の人数以上となりました。人狼陣営の勝利です！".to_string(),
        }
    };
    Some(result)
}

/// Evaluates the survivors and, on a win, records the outcome as final and ends the game.
///
/// Once an outcome is recorded it is what every later call returns. A re-evaluation that
/// disagrees is only logged.
pub fn check_victory(game: &mut Game) -> Option<VictoryResult> {
    if let Some(recorded) = game.victory.clone() {
        if let Some(current) = evaluate_victory(&game.roster) {
            if current.team != recorded.team {
                log::warn!(
                    "Victory already recorded for {}, ignoring re-evaluation as {}",
                    recorded.team,
                    current.team
                );
            }
        }
        game.phase = GamePhase::Finished;
        return Some(recorded);
    }

    let result = evaluate_victory(&game.roster)?;
    log::info!("Victory: {} ({})", result.team, result.message);
    game.victory = Some(result.clone());
    game.phase = GamePhase::Finished;
    Some(result)
}
