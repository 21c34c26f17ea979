use super::test_helpers::*;
use crate::session::{OrphanPolicy, SessionError, SessionReconstructor, finalize};
use chrono::TimeDelta;
use pretty_assertions::assert_eq;

//-----------------------------------------------------------------------------
// Server lifecycle
//-----------------------------------------------------------------------------

#[test]
fn start_opens_running_and_idle_intervals() {
    // Act
    let state = fold(OrphanPolicy::Fail, &[start(ts(10, 0, 0))]);

    // Assert
    assert_eq!(state.server.running_since, Some(ts(10, 0, 0)));
    assert_eq!(state.server.idle_since, Some(ts(10, 0, 0)));
    assert_eq!(state.server.total_uptime, TimeDelta::zero());
    assert_eq!(state.server.idle_accumulated, TimeDelta::zero());
}

#[test]
fn stop_credits_uptime_and_idle_then_clears_both() {
    // Act
    let state = fold(
        OrphanPolicy::Fail,
        &[start(ts(10, 0, 0)), stop(ts(11, 30, 0))],
    );

    // Assert
    assert_eq!(state.server.total_uptime, mins(90));
    assert_eq!(state.server.idle_accumulated, mins(90));
    assert_eq!(state.server.running_since, None);
    assert_eq!(state.server.idle_since, None);
}

#[test]
fn uptime_sums_every_closed_run() {
    // Act
    let state = fold(
        OrphanPolicy::Fail,
        &[
            start(ts(8, 0, 0)),
            stop(ts(8, 45, 0)),
            start(ts(9, 0, 0)),
            stop(ts(9, 10, 0)),
            start(ts(20, 0, 0)),
        ],
    );

    // Assert
    assert_eq!(state.server.total_uptime, mins(55));
    assert_eq!(state.server.running_since, Some(ts(20, 0, 0)));
}

//-----------------------------------------------------------------------------
// Sessions and idle
//-----------------------------------------------------------------------------

#[test]
fn first_join_closes_idle() {
    // Act
    let state = fold(
        OrphanPolicy::Fail,
        &[start(ts(10, 0, 0)), join(ts(10, 5, 0), "Alice")],
    );

    // Assert
    assert_eq!(state.server.idle_accumulated, mins(5));
    assert_eq!(state.server.idle_since, None);
    assert_eq!(state.player("Alice").unwrap().online_since, Some(ts(10, 5, 0)));
}

#[test]
fn second_join_does_not_touch_idle() {
    // Act
    let state = fold(
        OrphanPolicy::Fail,
        &[
            start(ts(10, 0, 0)),
            join(ts(10, 5, 0), "Alice"),
            join(ts(10, 20, 0), "Bob"),
        ],
    );

    // Assert
    assert_eq!(state.server.idle_accumulated, mins(5));
    assert_eq!(state.online_count(), 2);
}

#[test]
fn leave_credits_playtime_and_reopens_idle_when_empty() {
    // Act
    let state = fold(
        OrphanPolicy::Fail,
        &[
            start(ts(10, 0, 0)),
            join(ts(10, 5, 0), "Alice"),
            leave(ts(10, 15, 0), "Alice"),
        ],
    );

    // Assert
    let alice = state.player("Alice").unwrap();
    assert_eq!(alice.playtime, mins(10));
    assert_eq!(alice.online_since, None);
    assert_eq!(state.server.idle_since, Some(ts(10, 15, 0)));
}

#[test]
fn idle_stays_closed_while_someone_remains_online() {
    // Act
    let state = fold(
        OrphanPolicy::Fail,
        &[
            start(ts(10, 0, 0)),
            join(ts(10, 0, 0), "Alice"),
            join(ts(10, 10, 0), "Bob"),
            leave(ts(10, 20, 0), "Alice"),
        ],
    );

    // Assert
    assert_eq!(state.server.idle_since, None);
    assert_eq!(state.player("Alice").unwrap().playtime, mins(20));
}

#[test]
fn playtime_sums_closed_sessions_across_rejoins() {
    // Act
    let state = fold(
        OrphanPolicy::Fail,
        &[
            start(ts(9, 0, 0)),
            join(ts(9, 0, 0), "Alice"),
            leave(ts(9, 30, 0), "Alice"),
            join(ts(12, 0, 0), "Alice"),
            leave(ts(12, 45, 0), "Alice"),
            join(ts(18, 0, 0), "Alice"),
        ],
    );

    // Assert
    let alice = state.player("Alice").unwrap();
    assert_eq!(alice.playtime, mins(75));
    assert_eq!(alice.online_since, Some(ts(18, 0, 0)));
    // 9:30-12:00 and 12:45-18:00
    assert_eq!(state.server.idle_accumulated, mins(150) + mins(315));
}

#[test]
fn idle_and_occupancy_are_complementary_while_running() {
    // Arrange
    let events = [
        start(ts(10, 0, 0)),
        join(ts(10, 1, 0), "Alice"),
        join(ts(10, 2, 0), "Bob"),
        leave(ts(10, 3, 0), "Bob"),
        leave(ts(10, 4, 0), "Alice"),
        join(ts(10, 5, 0), "Carol"),
        death(ts(10, 6, 0), "Carol"),
        leave(ts(10, 7, 0), "Carol"),
    ];
    let mut engine = SessionReconstructor::new(OrphanPolicy::Fail);

    for event in &events {
        // Act
        engine.apply(event).unwrap();

        // Assert
        let state = engine.state();
        let occupied = state.online_count() > 0;
        let idle = state.server.idle_since.is_some();
        assert!(occupied != idle, "after {:?}", event.kind);
    }
}

#[test]
fn players_persist_after_leaving() {
    // Act
    let state = fold(
        OrphanPolicy::Fail,
        &[
            start(ts(10, 0, 0)),
            join(ts(10, 1, 0), "Alice"),
            leave(ts(10, 2, 0), "Alice"),
            stop(ts(10, 3, 0)),
        ],
    );

    // Assert
    assert!(state.player("Alice").is_some());
}

//-----------------------------------------------------------------------------
// Counters
//-----------------------------------------------------------------------------

#[test]
fn counters_increment_for_known_players_without_touching_durations() {
    // Act
    let state = fold(
        OrphanPolicy::Fail,
        &[
            start(ts(10, 0, 0)),
            join(ts(10, 5, 0), "Alice"),
            chat(ts(10, 6, 0), "Alice"),
            chat(ts(10, 6, 30), "Alice"),
            death(ts(10, 7, 0), "Alice"),
            command(ts(10, 8, 0), "Alice"),
            advancement(ts(10, 9, 0), "Alice"),
        ],
    );

    // Assert
    let alice = state.player("Alice").unwrap();
    assert_eq!(alice.chat_messages, 2);
    assert_eq!(alice.deaths, 1);
    assert_eq!(alice.commands_issued, 1);
    assert_eq!(alice.advancements, 1);
    assert_eq!(alice.playtime, TimeDelta::zero());
    assert_eq!(state.server.idle_accumulated, mins(5));
}

#[test]
fn counters_for_unknown_players_are_dropped_even_when_failing_fast() {
    // Act
    let state = fold(
        OrphanPolicy::Fail,
        &[
            start(ts(10, 0, 0)),
            chat(ts(10, 1, 0), "Ghost"),
            death(ts(10, 2, 0), "Ghost"),
        ],
    );

    // Assert
    assert!(state.players.is_empty());
}

#[test]
fn counters_still_count_after_the_player_left() {
    // Act
    let state = fold(
        OrphanPolicy::Fail,
        &[
            start(ts(10, 0, 0)),
            join(ts(10, 1, 0), "Alice"),
            leave(ts(10, 2, 0), "Alice"),
            death(ts(10, 3, 0), "Alice"),
        ],
    );

    // Assert
    assert_eq!(state.player("Alice").unwrap().deaths, 1);
}

//-----------------------------------------------------------------------------
// Anomalies: ignore
//-----------------------------------------------------------------------------

#[test]
fn orphan_stop_credits_neither_uptime_nor_idle() {
    // Arrange: the history begins mid-session.
    let events = [
        join(ts(9, 0, 0), "Alice"),
        leave(ts(9, 30, 0), "Alice"),
        stop(ts(10, 0, 0)),
    ];

    // Act
    let state = fold(OrphanPolicy::Ignore, &events);

    // Assert
    assert_eq!(state.server.total_uptime, TimeDelta::zero());
    assert_eq!(state.server.idle_accumulated, TimeDelta::zero());
    assert_eq!(state.server.idle_since, None);
    assert_eq!(state.player("Alice").unwrap().playtime, mins(30));
}

#[test]
fn leave_without_a_running_server_opens_no_idle() {
    // Act
    let state = fold(
        OrphanPolicy::Ignore,
        &[join(ts(10, 0, 0), "Alice"), leave(ts(10, 10, 0), "Alice")],
    );
    let snapshot = finalize(&state, ts(12, 0, 0));

    // Assert
    assert_eq!(state.server.idle_since, None);
    assert!(!snapshot.server.running);
    assert!(!snapshot.server.idle_now);
    assert_eq!(snapshot.server.idle, TimeDelta::zero());
    assert_eq!(state.player("Alice").unwrap().playtime, mins(10));
}

#[test]
fn leave_after_a_stop_opens_no_idle() {
    // Act
    let state = fold(
        OrphanPolicy::Ignore,
        &[
            start(ts(9, 0, 0)),
            stop(ts(9, 30, 0)),
            join(ts(10, 0, 0), "Alice"),
            leave(ts(10, 10, 0), "Alice"),
        ],
    );
    let snapshot = finalize(&state, ts(12, 0, 0));

    // Assert
    assert_eq!(state.server.idle_since, None);
    assert_eq!(snapshot.server.uptime, mins(30));
    assert_eq!(snapshot.server.idle, mins(30));
    assert!(snapshot.server.idle <= snapshot.server.uptime);
}

#[test]
fn orphan_leave_is_skipped() {
    // Act
    let state = fold(
        OrphanPolicy::Ignore,
        &[start(ts(10, 0, 0)), leave(ts(10, 5, 0), "Ghost")],
    );

    // Assert
    assert!(state.player("Ghost").is_none());
    assert_eq!(state.server.idle_since, Some(ts(10, 0, 0)));
}

#[test]
fn double_leave_credits_once() {
    // Act
    let state = fold(
        OrphanPolicy::Ignore,
        &[
            start(ts(10, 0, 0)),
            join(ts(10, 0, 0), "Alice"),
            leave(ts(10, 10, 0), "Alice"),
            leave(ts(10, 20, 0), "Alice"),
        ],
    );

    // Assert
    assert_eq!(state.player("Alice").unwrap().playtime, mins(10));
    assert_eq!(state.server.idle_since, Some(ts(10, 10, 0)));
}

#[test]
fn restart_without_stop_discards_the_unmatched_run() {
    // Act
    let state = fold(
        OrphanPolicy::Ignore,
        &[
            start(ts(10, 0, 0)),
            join(ts(10, 5, 0), "Alice"),
            start(ts(12, 0, 0)),
            stop(ts(12, 30, 0)),
        ],
    );

    // Assert
    assert_eq!(state.server.total_uptime, mins(30));
    assert_eq!(state.server.idle_accumulated, mins(5) + mins(30));
    let alice = state.player("Alice").unwrap();
    assert_eq!(alice.playtime, TimeDelta::zero());
    assert_eq!(alice.online_since, None);
}

#[test]
fn stop_closes_stale_sessions_without_credit() {
    // Act
    let state = fold(
        OrphanPolicy::Ignore,
        &[
            start(ts(10, 0, 0)),
            join(ts(10, 0, 0), "Alice"),
            stop(ts(11, 0, 0)),
        ],
    );

    // Assert
    let alice = state.player("Alice").unwrap();
    assert_eq!(alice.online_since, None);
    assert_eq!(alice.playtime, TimeDelta::zero());
    assert_eq!(state.server.total_uptime, mins(60));
    assert_eq!(state.online_count(), 0);
}

#[test]
fn repeated_join_restarts_the_session() {
    // Act
    let state = fold(
        OrphanPolicy::Ignore,
        &[
            start(ts(10, 0, 0)),
            join(ts(10, 0, 0), "Alice"),
            join(ts(10, 30, 0), "Alice"),
            leave(ts(10, 40, 0), "Alice"),
        ],
    );

    // Assert
    assert_eq!(state.player("Alice").unwrap().playtime, mins(10));
}

#[test]
fn backwards_interval_is_not_credited() {
    // Act
    let state = fold(
        OrphanPolicy::Ignore,
        &[start(ts(12, 0, 0)), stop(ts(11, 0, 0))],
    );

    // Assert
    assert_eq!(state.server.total_uptime, TimeDelta::zero());
    assert_eq!(state.server.idle_accumulated, TimeDelta::zero());
    assert_eq!(state.server.running_since, None);
}

//-----------------------------------------------------------------------------
// Anomalies: fail
//-----------------------------------------------------------------------------

#[test]
fn fail_policy_rejects_orphan_stop() {
    assert_eq!(
        fold_err(&[stop(ts(10, 0, 0))]),
        SessionError::OrphanStop { at: ts(10, 0, 0) }
    );
}

#[test]
fn fail_policy_rejects_orphan_leave() {
    assert_eq!(
        fold_err(&[start(ts(10, 0, 0)), leave(ts(10, 1, 0), "Ghost")]),
        SessionError::OrphanLeave {
            name: "Ghost".into(),
            at: ts(10, 1, 0),
        }
    );
}

#[test]
fn fail_policy_rejects_overlapping_start() {
    assert_eq!(
        fold_err(&[start(ts(10, 0, 0)), start(ts(11, 0, 0))]),
        SessionError::OverlappingStart {
            at: ts(11, 0, 0),
            since: ts(10, 0, 0),
        }
    );
}

#[test]
fn fail_policy_rejects_stale_session() {
    assert_eq!(
        fold_err(&[
            start(ts(10, 0, 0)),
            join(ts(10, 1, 0), "Alice"),
            stop(ts(10, 2, 0)),
        ]),
        SessionError::StaleSession {
            name: "Alice".into(),
            since: ts(10, 1, 0),
            at: ts(10, 2, 0),
            boundary: "stopped",
        }
    );
}

#[test]
fn fail_policy_rejects_repeated_join() {
    assert_eq!(
        fold_err(&[
            start(ts(10, 0, 0)),
            join(ts(10, 1, 0), "Alice"),
            join(ts(10, 2, 0), "Alice"),
        ]),
        SessionError::RepeatedJoin {
            name: "Alice".into(),
            at: ts(10, 2, 0),
            since: ts(10, 1, 0),
        }
    );
}

#[test]
fn fail_policy_rejects_backwards_interval() {
    assert_eq!(
        fold_err(&[start(ts(12, 0, 0)), stop(ts(11, 0, 0))]),
        SessionError::OutOfOrder {
            interval: "uptime",
            start: ts(12, 0, 0),
            end: ts(11, 0, 0),
        }
    );
}

#[test]
fn fail_policy_leaves_state_as_of_the_last_good_event() {
    // Arrange
    let mut engine = SessionReconstructor::new(OrphanPolicy::Fail);
    engine.apply(&start(ts(10, 0, 0))).unwrap();
    engine.apply(&join(ts(10, 5, 0), "Alice")).unwrap();

    // Act
    let result = engine.apply(&leave(ts(10, 6, 0), "Bob"));

    // Assert
    assert!(result.is_err());
    assert_eq!(engine.state().online_count(), 1);
    assert_eq!(engine.state().server.idle_accumulated, mins(5));
}
