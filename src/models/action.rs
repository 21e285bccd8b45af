use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Seer,   // 占い
    Attack, // 人狼の襲撃
    Guard,  // 騎士の護衛
    Medium, // 霊媒
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightAction {
    pub kind: ActionKind,
    pub target: Option<String>,
}

/// One player's submission for the night, keyed by the acting player's name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NightActionRequest {
    pub player_name: String,
    pub action: NightAction,
}

/// Submissions for one night, acting player name -> action.
pub type NightActions = HashMap<String, NightAction>;

impl NightAction {
    pub fn new(kind: ActionKind, target: Option<String>) -> Self {
        NightAction { kind, target }
    }

    pub fn seer(target: &str) -> Self {
        Self::new(ActionKind::Seer, Some(target.to_string()))
    }

    pub fn attack(target: &str) -> Self {
        Self::new(ActionKind::Attack, Some(target.to_string()))
    }

    pub fn guard(target: &str) -> Self {
        Self::new(ActionKind::Guard, Some(target.to_string()))
    }

    pub fn medium() -> Self {
        Self::new(ActionKind::Medium, None)
    }

    pub fn none() -> Self {
        Self::new(ActionKind::None, None)
    }
}

impl NightActionRequest {
    pub fn new(player_name: &str, action: NightAction) -> Self {
        NightActionRequest {
            player_name: player_name.to_string(),
            action,
        }
    }
}

/// Collects requests into the map the night resolver consumes. A later request from the
/// same player replaces the earlier one.
pub fn collect_night_actions<I>(requests: I) -> NightActions
where
    I: IntoIterator<Item = NightActionRequest>,
{
    requests
        .into_iter()
        .map(|req| (req.player_name, req.action))
        .collect()
}
