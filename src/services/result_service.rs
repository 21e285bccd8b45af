use chrono::Local;

use crate::models::{
    game::Game,
    outcome::PlayerResult,
    player::Player,
    record::{MatchRecord, UNKNOWN_TEAM_LABEL},
    role::Team,
};

pub fn status_text(player: &Player) -> String {
    match (player.is_alive, &player.death) {
        (true, _) => "最終日生存".to_string(),
        (false, Some(info)) => format!("{}日目 {}により死亡", info.turn, info.reason),
        (false, None) => "死亡(詳細不明)".to_string(),
    }
}

fn project(player: &Player, winner: Option<Team>) -> PlayerResult {
    PlayerResult {
        name: player.name.clone(),
        role: player.role,
        status: status_text(player),
        team: player.role.team(),
        is_winner: winner == Some(player.role.team()),
    }
}

/// Final outcome line for every player, in roster order. Nobody wins while no victory
/// has been recorded.
pub fn game_results(game: &Game) -> Vec<PlayerResult> {
    game.roster
        .players()
        .iter()
        .map(|player| project(player, game.victory_team()))
        .collect()
}

pub fn match_record(game: &Game) -> MatchRecord {
    MatchRecord {
        id: uuid::Uuid::new_v4(),
        winning_team: game
            .victory_team()
            .map(|team| team.label().to_string())
            .unwrap_or_else(|| UNKNOWN_TEAM_LABEL.to_string()),
        played_at: Local::now(),
        players: game_results(game),
    }
}
