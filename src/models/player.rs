use serde::{Deserialize, Serialize};

use super::{
    death::{DeathInfo, DeathReason},
    role::Role,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub role: Role,
    pub is_alive: bool,
    pub death: Option<DeathInfo>,
}

impl Player {
    pub fn new(id: u32, name: String) -> Self {
        Self {
            id,
            name,
            role: Role::Villager,
            is_alive: true,
            death: None,
        }
    }

    /// Marks the player dead. Returns `false` without touching the record if already dead.
    pub fn kill(&mut self, turn: u32, reason: DeathReason) -> bool {
        if !self.is_alive {
            return false;
        }
        self.is_alive = false;
        self.death = Some(DeathInfo { turn, reason });
        true
    }

    pub fn display_string(&self, reveal_role: bool) -> String {
        let status = match (self.is_alive, &self.death) {
            (true, _) => "生存".to_string(),
            (false, Some(info)) => format!("{}日目 {}", info.turn, info.reason),
            (false, None) => "死亡(詳細不明)".to_string(),
        };

        if reveal_role {
            format!("{} [{}] ({})", self.name, self.role, status)
        } else {
            format!("{} ({})", self.name, status)
        }
    }
}
