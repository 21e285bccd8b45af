use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::str::FromStr;

use super::role::Role;

/// Role -> number of players dealt that role.
pub type RoleCounts = BTreeMap<Role, usize>;

pub const MIN_PLAYERS: usize = 3;

static DEFAULT_ROLE_COUNTS: Lazy<RoleCounts> = Lazy::new(|| {
    Role::all()
        .iter()
        .map(|role| {
            let count = match role {
                Role::Werewolf | Role::Villager => 2,
                Role::Seer | Role::Medium | Role::Knight | Role::Madman => 1,
                _ => 0,
            };
            (*role, count)
        })
        .collect()
});

pub fn default_role_counts() -> RoleCounts {
    DEFAULT_ROLE_COUNTS.clone()
}

pub fn default_player_count() -> usize {
    DEFAULT_ROLE_COUNTS.values().sum()
}

/// 初日占いの扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FirstDaySeerOption {
    #[default]
    Enabled,
    Disabled,
    // 初日はランダムな白通知
    RandomWhite,
}

impl FromStr for FirstDaySeerOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "enabled" | "on" => Ok(FirstDaySeerOption::Enabled),
            "disabled" | "off" => Ok(FirstDaySeerOption::Disabled),
            "random_white" | "random-white" | "randomwhite" => Ok(FirstDaySeerOption::RandomWhite),
            other => Err(format!("unknown first day seer option: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseRules {
    pub first_day_seer: FirstDaySeerOption,
}

/// Off by default; environment switches are read only by `from_env`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebugConfig {
    // 解決トレースを結果に含めるかどうか
    pub enabled: bool,
    pub verbose_logging: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    pub debug: DebugConfig,
    pub house_rules: HouseRules,
    // 固定シード(テスト・再現用)
    pub seed: Option<u64>,
}

impl DebugConfig {
    pub fn from_env() -> Self {
        let enabled = env::var("WEREWOLF_DEBUG")
            .map(|v| v == "true")
            .unwrap_or(false);
        let verbose_logging = env::var("WEREWOLF_VERBOSE_LOGGING")
            .map(|v| v == "true")
            .unwrap_or(enabled);

        Self {
            enabled,
            verbose_logging,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        let first_day_seer = match env::var("WEREWOLF_FIRST_DAY_SEER") {
            Ok(v) => v.parse::<FirstDaySeerOption>().unwrap_or_else(|e| {
                log::warn!("{}, falling back to enabled", e);
                FirstDaySeerOption::Enabled
            }),
            Err(_) => FirstDaySeerOption::Enabled,
        };
        let seed = env::var("WEREWOLF_SEED")
            .ok()
            .and_then(|v| v.parse::<u64>().ok());

        Self {
            debug: DebugConfig::from_env(),
            house_rules: HouseRules { first_day_seer },
            seed,
        }
    }

    pub fn with_trace(mut self) -> Self {
        self.debug.enabled = true;
        self
    }
}
