use serde::{Deserialize, Serialize};
use std::fmt;

use super::{action::ActionKind, config::FirstDaySeerOption, config::HouseRules};

/// Victory alignment. Winners are decided per team, not per species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Team {
    Villager, // 村人陣営
    Werewolf, // 人狼陣営
    Fox,      // 妖狐陣営
}

/// Mechanical category used by divination, attack immunity and the victory count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Villager,
    Werewolf,
    Fox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeerResult {
    Villager,
    Werewolf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediumResult {
    NotWerewolf,
    Werewolf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    Villager,   // 村人
    Werewolf,   // 人狼
    Seer,       // 占い師
    FakeSeer,   // 偽占い師
    Medium,     // 霊媒師
    Knight,     // 騎士
    Nekomata,   // 猫又
    Madman,     // 狂人
    Fanatic,    // 狂信者
    Fox,        // 妖狐
    Immoralist, // 背徳者
}

impl Role {
    /// Every role in catalog order. Role decks are expanded in this order.
    pub const fn all() -> &'static [Role] {
        &[
            Role::Villager,
            Role::Werewolf,
            Role::Seer,
            Role::FakeSeer,
            Role::Medium,
            Role::Knight,
            Role::Nekomata,
            Role::Madman,
            Role::Fanatic,
            Role::Fox,
            Role::Immoralist,
        ]
    }

    pub const fn team(&self) -> Team {
        match self {
            Role::Villager
            | Role::Seer
            | Role::FakeSeer
            | Role::Medium
            | Role::Knight
            | Role::Nekomata => Team::Villager,
            Role::Werewolf | Role::Madman | Role::Fanatic => Team::Werewolf,
            Role::Fox | Role::Immoralist => Team::Fox,
        }
    }

    pub const fn species(&self) -> Species {
        match self {
            Role::Werewolf => Species::Werewolf,
            Role::Fox => Species::Fox,
            _ => Species::Villager,
        }
    }

    pub const fn seer_result(&self) -> SeerResult {
        match self {
            Role::Werewolf => SeerResult::Werewolf,
            _ => SeerResult::Villager,
        }
    }

    pub const fn medium_result(&self) -> MediumResult {
        match self {
            Role::Werewolf => MediumResult::Werewolf,
            _ => MediumResult::NotWerewolf,
        }
    }

    /// The kind of night submission this role makes when it acts.
    pub const fn action_kind(&self) -> ActionKind {
        match self {
            Role::Werewolf => ActionKind::Attack,
            Role::Seer | Role::FakeSeer => ActionKind::Seer,
            Role::Knight => ActionKind::Guard,
            Role::Medium => ActionKind::Medium,
            _ => ActionKind::None,
        }
    }

    /// Prompt shown when the role picks a target, `None` for roles that never pick one.
    pub const fn action_label(&self) -> Option<&'static str> {
        match self {
            Role::Werewolf => Some("襲撃対象"),
            Role::Seer | Role::FakeSeer => Some("占う対象"),
            Role::Knight => Some("守る対象"),
            _ => None,
        }
    }

    pub fn has_night_action(&self, turn: u32, house_rules: &HouseRules) -> bool {
        match self {
            Role::Seer | Role::FakeSeer => {
                !(turn == 1 && house_rules.first_day_seer == FirstDaySeerOption::Disabled)
            }
            Role::Werewolf | Role::Knight | Role::Medium => turn > 1,
            _ => false,
        }
    }

    /// Name shown to the player holding the role. A fake seer believes it is the seer.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Role::FakeSeer => Role::Seer.label(),
            _ => self.label(),
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Role::Villager => "村人",
            Role::Werewolf => "人狼",
            Role::Seer => "占い師",
            Role::FakeSeer => "偽占い師",
            Role::Medium => "霊媒師",
            Role::Knight => "騎士",
            Role::Nekomata => "猫又",
            Role::Madman => "狂人",
            Role::Fanatic => "狂信者",
            Role::Fox => "妖狐",
            Role::Immoralist => "背徳者",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl Team {
    pub const fn label(&self) -> &'static str {
        match self {
            Team::Villager => "村人",
            Team::Werewolf => "人狼",
            Team::Fox => "妖狐",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Species::Villager => "村人",
            Species::Werewolf => "人狼",
            Species::Fox => "妖狐",
        })
    }
}

impl fmt::Display for SeerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            SeerResult::Villager => "村人",
            SeerResult::Werewolf => "人狼",
        })
    }
}

impl fmt::Display for MediumResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            MediumResult::NotWerewolf => "人狼ではない",
            MediumResult::Werewolf => "人狼",
        })
    }
}
