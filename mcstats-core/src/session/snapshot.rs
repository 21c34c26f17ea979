use crate::parse::Timestamp;
use chrono::TimeDelta;
use serde::{Serialize, Serializer};

/// Finalized, read-only statistics as of `generated_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub generated_at: Timestamp,
    pub server: ServerSnapshot,
    /// Ordered by name.
    pub players: Vec<PlayerSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerSnapshot {
    #[serde(rename = "uptime_seconds", serialize_with = "as_seconds")]
    pub uptime: TimeDelta,
    #[serde(rename = "idle_seconds", serialize_with = "as_seconds")]
    pub idle: TimeDelta,
    pub running: bool,
    pub idle_now: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSnapshot {
    pub name: String,
    #[serde(rename = "playtime_seconds", serialize_with = "as_seconds")]
    pub playtime: TimeDelta,
    pub online: bool,
    pub deaths: u64,
    pub chat_messages: u64,
    pub commands: u64,
    pub advancements: u64,
}

impl Snapshot {
    pub fn online_players(&self) -> impl Iterator<Item = &PlayerSnapshot> {
        self.players.iter().filter(|p| p.online)
    }

    pub fn player(&self, name: &str) -> Option<&PlayerSnapshot> {
        self.players.iter().find(|p| p.name == name)
    }
}

fn as_seconds<S: Serializer>(delta: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_i64(delta.num_seconds())
}
