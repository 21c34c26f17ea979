//! Full replay of a log directory.
//!
//! Files are read one at a time in replay order, every line goes through the
//! lexer and classifier, and the resulting events are folded into a single
//! state that the finalizer turns into a snapshot:
//!
//! `discover_logs` -> `open_lines` -> `lex_line` -> `classify`
//! -> `SessionReconstructor` -> `finalize`


use crate::StatsError;
use crate::conf::StatsConfig;
use crate::parse::{EventKind, Timestamp, classify, lex_line};
use crate::sequence::{LogFileRef, discover_logs, open_lines};
use crate::session::{EngineState, SessionReconstructor, Snapshot, finalize};

#[derive(Debug, Default, Clone, Copy)]
struct ReplayTotals {
    lines: u64,
    events: u64,
}

/// Replays every log file of `config.log_dir` in order and returns the
/// accumulated state.
pub fn reconstruct_dir(config: &StatsConfig) -> Result<EngineState, StatsError> {
    let files = discover_logs(&config.log_dir, &config.current_file)?;
    if files.is_empty() {
        tracing::warn!(dir = %config.log_dir.display(), "no log files found");
    }

    let mut engine = SessionReconstructor::new(config.orphan_policy);
    let mut totals = ReplayTotals::default();

    for file in &files {
        replay_file(file, &mut engine, &mut totals)?;
    }

    let state = engine.into_state();
    tracing::info!(
        files = files.len(),
        lines = totals.lines,
        events = totals.events,
        players = state.players.len(),
        "log replay complete"
    );

    Ok(state)
}

/// Replays the log directory and finalizes it against `now`.
pub fn collect_snapshot(config: &StatsConfig, now: Timestamp) -> Result<Snapshot, StatsError> {
    let state = reconstruct_dir(config)?;
    Ok(finalize(&state, now))
}

fn replay_file(
    file: &LogFileRef,
    engine: &mut SessionReconstructor,
    totals: &mut ReplayTotals,
) -> Result<(), StatsError> {
    tracing::info!(
        path = %file.path.display(),
        anchor = %file.anchor,
        compressed = file.compressed,
        "replaying log file"
    );

    for line in open_lines(file)? {
        let line = line?;
        totals.lines += 1;

        let Some((at, body)) = lex_line(&line, file.anchor) else {
            continue;
        };

        let event = classify(at, body);
        if event.kind == EventKind::Unrecognized {
            continue;
        }

        totals.events += 1;
        tracing::trace!(kind = event.kind.as_str(), player = event.kind.player(), %at, "event");

        engine
            .apply(&event)
            .map_err(|source| StatsError::session(&file.path, source))?;
    }

    Ok(())
}
