use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::outcome::PlayerResult;

pub const UNKNOWN_TEAM_LABEL: &str = "不明";

/// Summary of a finished match, handed to whatever stores match history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: uuid::Uuid,
    pub winning_team: String,
    #[serde(with = "played_at_format")]
    pub played_at: DateTime<Local>,
    pub players: Vec<PlayerResult>,
}

impl MatchRecord {
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// File name the history store uses, e.g. `20260228_143022.json`.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.played_at.format("%Y%m%d_%H%M%S"))
    }
}

mod played_at_format {
    use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(date: &DateTime<Local>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Local>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let naive = NaiveDateTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)?;
        Local
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| serde::de::Error::custom(format!("invalid local time: {}", s)))
    }
}
