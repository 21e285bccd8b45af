use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::role::{Role, Team};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightResult {
    /// Everyone who died tonight, whatever the cause.
    pub victims: BTreeSet<String>,
    /// Immoralists who followed the last fox.
    pub chained_suicides: Vec<String>,
    pub trace: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub executed: Option<String>,
    pub chained_suicides: Vec<String>,
    pub retaliation_victim: Option<String>,
    pub error: Option<String>,
    pub trace: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VictoryResult {
    pub team: Team,
    pub message: String,
}

/// Final per-player line once the match is decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerResult {
    pub name: String,
    pub role: Role,
    pub status: String,
    pub team: Team,
    pub is_winner: bool,
}

impl ExecutionResult {
    pub fn no_execution(trace: Option<String>) -> Self {
        ExecutionResult {
            trace,
            ..Default::default()
        }
    }

    /// Every player who died as a result of this execution.
    pub fn deaths(&self) -> Vec<String> {
        self.executed
            .iter()
            .chain(self.chained_suicides.iter())
            .chain(self.retaliation_victim.iter())
            .cloned()
            .collect()
    }
}
