use serde::{Deserialize, Serialize};
use std::fmt;

/// What triggered a death. Once recorded, every reason has the same effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeathReason {
    Attack,      // 襲撃
    Execute,     // 処刑
    Curse,       // 呪殺
    Suicide,     // 後追死
    Retaliation, // 道連れ
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeathInfo {
    pub turn: u32,
    pub reason: DeathReason,
}

impl DeathReason {
    pub const fn label(&self) -> &'static str {
        match self {
            DeathReason::Attack => "襲撃",
            DeathReason::Execute => "処刑",
            DeathReason::Curse => "呪殺",
            DeathReason::Suicide => "後追死",
            DeathReason::Retaliation => "道連れ",
        }
    }
}

impl fmt::Display for DeathReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
