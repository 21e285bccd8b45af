use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::{config::GameConfig, outcome::VictoryResult, role::Team, roster::Roster};
use crate::utils::error::GameError;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GamePhase {
    Night,    // 夜フェーズ
    Day,      // 昼フェーズ(議論・投票)
    Finished, // ゲーム終了
}

/// State of one match. Created at game start, mutated in place phase by phase, and thrown
/// away when a new game begins.
#[derive(Clone, Debug)]
pub struct Game {
    pub(crate) roster: Roster,
    pub(crate) turn: u32,
    pub(crate) phase: GamePhase,
    pub(crate) last_night_victims: BTreeSet<String>,
    pub(crate) last_executed: Option<String>,
    // 一度記録した勝敗は上書きしない
    pub(crate) victory: Option<VictoryResult>,
    pub(crate) config: GameConfig,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GamePhase::Night => write!(f, "夜"),
            GamePhase::Day => write!(f, "昼"),
            GamePhase::Finished => write!(f, "終了"),
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Game {{ turn: {}, phase: {}, alive: {}/{}, victory: {:?} }}",
            self.turn,
            self.phase,
            self.roster.alive_count(),
            self.roster.len(),
            self.victory_team()
        )
    }
}

impl Game {
    /// Starts on the first night with every player alive and holding the default role.
    pub fn new<S: AsRef<str>>(player_names: &[S], config: GameConfig) -> Result<Self, GameError> {
        Ok(Game {
            roster: Roster::new(player_names)?,
            turn: 1,
            phase: GamePhase::Night,
            last_night_victims: BTreeSet::new(),
            last_executed: None,
            victory: None,
            config,
        })
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn last_night_victims(&self) -> &BTreeSet<String> {
        &self.last_night_victims
    }

    pub fn last_executed(&self) -> Option<&str> {
        self.last_executed.as_deref()
    }

    pub fn victory_team(&self) -> Option<Team> {
        self.victory.as_ref().map(|v| v.team)
    }

    /// The outcome recorded when the game was decided.
    pub fn victory(&self) -> Option<&VictoryResult> {
        self.victory.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.phase == GamePhase::Finished
    }

    /// Trace buffer for a resolver pass, present only when tracing is switched on.
    pub(crate) fn new_trace(&self) -> Option<Vec<String>> {
        self.config.debug.enabled.then(Vec::new)
    }
}
