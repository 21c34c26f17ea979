use chrono::NaiveDateTime;

/// Anchor date plus time of day, second resolution.
pub type Timestamp = NaiveDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub at: Timestamp,
    pub kind: EventKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    ServerStart,
    ServerStop,
    PlayerJoin { name: String },
    PlayerLeave { name: String, reason: String },
    PlayerDeath { name: String, reason: String },
    PlayerCommand { name: String, command: String },
    PlayerAdvancement { name: String, advancement: String },
    ChatMessage { name: String, content: String },
    Unrecognized,
}

impl EventKind {
    /// Name of the player the event is about, if any.
    pub fn player(&self) -> Option<&str> {
        match self {
            EventKind::PlayerJoin { name }
            | EventKind::PlayerLeave { name, .. }
            | EventKind::PlayerDeath { name, .. }
            | EventKind::PlayerCommand { name, .. }
            | EventKind::PlayerAdvancement { name, .. }
            | EventKind::ChatMessage { name, .. } => Some(name),
            EventKind::ServerStart | EventKind::ServerStop | EventKind::Unrecognized => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::ServerStart => "server_start",
            EventKind::ServerStop => "server_stop",
            EventKind::PlayerJoin { .. } => "player_join",
            EventKind::PlayerLeave { .. } => "player_leave",
            EventKind::PlayerDeath { .. } => "player_death",
            EventKind::PlayerCommand { .. } => "player_command",
            EventKind::PlayerAdvancement { .. } => "player_advancement",
            EventKind::ChatMessage { .. } => "chat_message",
            EventKind::Unrecognized => "unrecognized",
        }
    }
}
