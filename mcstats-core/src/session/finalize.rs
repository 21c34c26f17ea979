use crate::parse::Timestamp;
use crate::session::{EngineState, PlayerSnapshot, ServerSnapshot, Snapshot};
use chrono::TimeDelta;

/// Produces the snapshot reported at `now`.
///
/// Intervals still open (a running server, an idle period, online players)
/// are extrapolated to `now` in the snapshot only; `state` keeps its closed
/// totals and open markers untouched. A `now` earlier than an open interval's
/// start contributes nothing.
pub fn finalize(state: &EngineState, now: Timestamp) -> Snapshot {
    let server = &state.server;

    let players = state
        .players
        .iter()
        .map(|(name, player)| PlayerSnapshot {
            name: name.clone(),
            playtime: player.playtime + open_interval(player.online_since, now),
            online: player.is_online(),
            deaths: player.deaths,
            chat_messages: player.chat_messages,
            commands: player.commands_issued,
            advancements: player.advancements,
        })
        .collect();

    Snapshot {
        generated_at: now,
        server: ServerSnapshot {
            uptime: server.total_uptime + open_interval(server.running_since, now),
            idle: server.idle_accumulated + open_interval(server.idle_since, now),
            running: server.running_since.is_some(),
            idle_now: server.idle_since.is_some(),
        },
        players,
    }
}

fn open_interval(since: Option<Timestamp>, now: Timestamp) -> TimeDelta {
    since
        .map(|since| (now - since).max(TimeDelta::zero()))
        .unwrap_or_else(TimeDelta::zero)
}
