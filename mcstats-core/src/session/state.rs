use crate::parse::Timestamp;
use chrono::TimeDelta;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerState {
    /// Set on server start, cleared on server stop.
    pub running_since: Option<Timestamp>,
    /// Sum of closed running intervals.
    pub total_uptime: TimeDelta,
    /// Set while the server runs with nobody online.
    pub idle_since: Option<Timestamp>,
    /// Sum of closed idle intervals.
    pub idle_accumulated: TimeDelta,
}

impl Default for ServerState {
    fn default() -> Self {
        Self {
            running_since: None,
            total_uptime: TimeDelta::zero(),
            idle_since: None,
            idle_accumulated: TimeDelta::zero(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    pub online_since: Option<Timestamp>,
    /// Sum of closed sessions.
    pub playtime: TimeDelta,
    pub deaths: u64,
    pub commands_issued: u64,
    pub chat_messages: u64,
    pub advancements: u64,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            online_since: None,
            playtime: TimeDelta::zero(),
            deaths: 0,
            commands_issued: 0,
            chat_messages: 0,
            advancements: 0,
        }
    }
}

impl PlayerState {
    pub fn is_online(&self) -> bool {
        self.online_since.is_some()
    }
}

/// Everything one run accumulates.
///
/// Players are created on first join and never removed; the map is ordered
/// by name so every consumer sees a deterministic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineState {
    pub server: ServerState,
    pub players: BTreeMap<String, PlayerState>,
}

impl EngineState {
    pub fn online_count(&self) -> usize {
        self.players.values().filter(|p| p.is_online()).count()
    }

    pub fn player(&self, name: &str) -> Option<&PlayerState> {
        self.players.get(name)
    }

    pub(crate) fn player_or_insert(&mut self, name: &str) -> &mut PlayerState {
        if !self.players.contains_key(name) {
            tracing::debug!(target: super::TRACE_TARGET, player = name, "new player");
        }
        self.players.entry(name.to_string()).or_default()
    }
}
