use crate::parse::{Event, EventKind, Timestamp};
use crate::session::{EngineState, OrphanPolicy, PlayerState, SessionError, TRACE_TARGET};
use chrono::TimeDelta;
use tracing::debug;

const UPTIME: &str = "uptime";
const IDLE: &str = "idle";
const SESSION: &str = "session";

/// Folds events, in replay order, into an [`EngineState`].
///
/// | Event        | Effect                                                        |
/// |--------------|---------------------------------------------------------------|
/// | server start | open running and idle intervals                               |
/// | server stop  | credit uptime, credit open idle, clear both                   |
/// | join         | open session; nobody was online -> credit idle                |
/// | leave        | credit session; nobody left online -> open idle               |
/// | death, ...   | bump the player's counter if the player is known              |
///
/// Anomalies are handled according to the [`OrphanPolicy`].
pub struct SessionReconstructor {
    state: EngineState,
    policy: OrphanPolicy,
}

impl SessionReconstructor {
    pub fn new(policy: OrphanPolicy) -> Self {
        Self {
            state: EngineState::default(),
            policy,
        }
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn into_state(self) -> EngineState {
        self.state
    }

    pub fn apply(&mut self, event: &Event) -> Result<(), SessionError> {
        let at = event.at;
        match &event.kind {
            EventKind::ServerStart => self.server_start(at),
            EventKind::ServerStop => self.server_stop(at),
            EventKind::PlayerJoin { name } => self.player_join(name, at),
            EventKind::PlayerLeave { name, reason } => self.player_leave(name, reason, at),
            EventKind::PlayerDeath { name, .. } => {
                self.bump(name, "death", |p| p.deaths += 1);
                Ok(())
            }
            EventKind::PlayerCommand { name, .. } => {
                self.bump(name, "command", |p| p.commands_issued += 1);
                Ok(())
            }
            EventKind::PlayerAdvancement { name, .. } => {
                self.bump(name, "advancement", |p| p.advancements += 1);
                Ok(())
            }
            EventKind::ChatMessage { name, .. } => {
                self.bump(name, "chat message", |p| p.chat_messages += 1);
                Ok(())
            }
            EventKind::Unrecognized => Ok(()),
        }
    }

    //-------------------------------------------------------------------------
    // Server
    //-------------------------------------------------------------------------

    fn server_start(&mut self, at: Timestamp) -> Result<(), SessionError> {
        if let Some(since) = self.state.server.running_since {
            self.anomaly(SessionError::OverlappingStart { at, since })?;
        }
        self.close_stale_sessions(at, "started")?;

        let server = &mut self.state.server;
        server.running_since = Some(at);
        server.idle_since = Some(at);

        debug!(target: TRACE_TARGET, %at, "server started, idle opened");
        Ok(())
    }

    fn server_stop(&mut self, at: Timestamp) -> Result<(), SessionError> {
        self.close_stale_sessions(at, "stopped")?;

        match self.state.server.running_since {
            Some(since) => {
                if let Some(delta) = self.elapsed(UPTIME, since, at)? {
                    self.state.server.total_uptime += delta;
                }
                debug!(target: TRACE_TARGET, %at, running_since = %since, "server stopped");
            }
            None => self.anomaly(SessionError::OrphanStop { at })?,
        }
        self.state.server.running_since = None;

        self.close_idle(at)
    }

    //-------------------------------------------------------------------------
    // Sessions
    //-------------------------------------------------------------------------

    fn player_join(&mut self, name: &str, at: Timestamp) -> Result<(), SessionError> {
        if let Some(since) = self.state.player(name).and_then(|p| p.online_since) {
            self.anomaly(SessionError::RepeatedJoin {
                name: name.to_string(),
                at,
                since,
            })?;
        }

        let nobody_online = self.state.online_count() == 0;
        self.state.player_or_insert(name).online_since = Some(at);
        debug!(target: TRACE_TARGET, player = name, %at, "session opened");

        if nobody_online {
            self.close_idle(at)?;
        }
        Ok(())
    }

    fn player_leave(&mut self, name: &str, reason: &str, at: Timestamp) -> Result<(), SessionError> {
        let Some(since) = self.state.player(name).and_then(|p| p.online_since) else {
            return self.anomaly(SessionError::OrphanLeave {
                name: name.to_string(),
                at,
            });
        };

        let credited = self.elapsed(SESSION, since, at)?;
        if let Some(player) = self.state.players.get_mut(name) {
            player.online_since = None;
            if let Some(delta) = credited {
                player.playtime += delta;
            }
        }
        debug!(target: TRACE_TARGET, player = name, %at, reason, "session closed");

        // Idle only exists while the server runs.
        if self.state.online_count() == 0 && self.state.server.running_since.is_some() {
            self.state.server.idle_since = Some(at);
            debug!(target: TRACE_TARGET, %at, "idle opened");
        }
        Ok(())
    }

    /// Closes sessions still open at a server boundary without crediting
    /// them: the true end of such a session is unknown.
    fn close_stale_sessions(
        &mut self,
        at: Timestamp,
        boundary: &'static str,
    ) -> Result<(), SessionError> {
        let stale: Vec<(String, Timestamp)> = self
            .state
            .players
            .iter()
            .filter_map(|(name, p)| p.online_since.map(|since| (name.clone(), since)))
            .collect();

        for (name, since) in stale {
            self.anomaly(SessionError::StaleSession {
                name: name.clone(),
                since,
                at,
                boundary,
            })?;
            if let Some(player) = self.state.players.get_mut(&name) {
                player.online_since = None;
            }
        }
        Ok(())
    }

    //-------------------------------------------------------------------------
    // Activity
    //-------------------------------------------------------------------------

    fn bump(&mut self, name: &str, what: &str, update: impl FnOnce(&mut PlayerState)) {
        match self.state.players.get_mut(name) {
            Some(player) => update(player),
            None => debug!(target: TRACE_TARGET, player = name, "{what} for unknown player dropped"),
        }
    }

    //-------------------------------------------------------------------------
    // Intervals
    //-------------------------------------------------------------------------

    fn close_idle(&mut self, at: Timestamp) -> Result<(), SessionError> {
        let Some(since) = self.state.server.idle_since.take() else {
            return Ok(());
        };
        if let Some(delta) = self.elapsed(IDLE, since, at)? {
            self.state.server.idle_accumulated += delta;
        }
        debug!(target: TRACE_TARGET, %at, idle_since = %since, "idle closed");
        Ok(())
    }

    /// Length of `start..end`, or `None` when the interval runs backwards.
    fn elapsed(
        &self,
        interval: &'static str,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Option<TimeDelta>, SessionError> {
        if end >= start {
            return Ok(Some(end - start));
        }
        self.anomaly(SessionError::OutOfOrder {
            interval,
            start,
            end,
        })?;
        Ok(None)
    }

    fn anomaly(&self, err: SessionError) -> Result<(), SessionError> {
        match self.policy {
            OrphanPolicy::Ignore => {
                tracing::warn!(target: TRACE_TARGET, "{err}; skipped");
                Ok(())
            }
            OrphanPolicy::Fail => Err(err),
        }
    }
}
