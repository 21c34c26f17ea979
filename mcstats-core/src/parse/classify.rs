use crate::parse::{Event, EventKind, Timestamp};

const MAIN_TAG: &str = "[Server thread/INFO]: ";

const CHAT_TAG_PREFIX: &str = "[Async Chat Thread - #";
const CHAT_TAG_SUFFIX: &str = "/INFO]: ";
const NOT_SECURE_MARKER: &str = "[Not Secure] ";

const SERVER_START_PREFIX: &str = "Starting minecraft server";
const SERVER_STOP_MESSAGE: &str = "Closing Server";

const JOIN_SUFFIX: &str = "joined the game";
const LEAVE_PREFIX: &str = "lost connection: ";
const COMMAND_PREFIX: &str = "issued server command: ";

/// Lead verbs of the vanilla death messages.
///
/// A death message whose verb is not listed here is not recognized.
pub const DEATH_VERBS: &[&str] = &[
    "was",
    "drowned",
    "experienced",
    "blew",
    "hit",
    "fell",
    "went",
    "walked",
    "burned",
    "discovered",
    "froze",
    "starved",
    "suffocated",
    "didn't",
    "withered",
    "died",
];

/// Advancement announcements; tasks, challenges and goals share one counter.
const ADVANCEMENT_PREFIXES: &[&str] = &[
    "has made the advancement [",
    "has completed the challenge [",
    "has reached the goal [",
];

type Rule = fn(&str) -> Option<EventKind>;

/// Main-thread rules, evaluated in order. First match wins.
const MAIN_RULES: &[Rule] = &[
    server_start,
    server_stop,
    player_join,
    player_leave,
    player_death,
    player_command,
    player_advancement,
];

/// Classifies a lexed log body into exactly one event.
///
/// Bodies matching none of the known shapes become
/// [`EventKind::Unrecognized`].
pub fn classify(at: Timestamp, body: &str) -> Event {
    Event {
        at,
        kind: classify_body(body),
    }
}

fn classify_body(body: &str) -> EventKind {
    if let Some(message) = body.strip_prefix(MAIN_TAG) {
        return MAIN_RULES
            .iter()
            .find_map(|rule| rule(message))
            .unwrap_or(EventKind::Unrecognized);
    }

    if let Some(message) = strip_chat_tag(body) {
        return chat_message(message).unwrap_or(EventKind::Unrecognized);
    }

    EventKind::Unrecognized
}

//-----------------------------------------------------------------------------
// Main thread
//-----------------------------------------------------------------------------

fn server_start(message: &str) -> Option<EventKind> {
    message
        .starts_with(SERVER_START_PREFIX)
        .then_some(EventKind::ServerStart)
}

fn server_stop(message: &str) -> Option<EventKind> {
    (message == SERVER_STOP_MESSAGE).then_some(EventKind::ServerStop)
}

fn player_join(message: &str) -> Option<EventKind> {
    let (name, rest) = split_name(message)?;
    (rest == JOIN_SUFFIX).then(|| EventKind::PlayerJoin {
        name: name.to_string(),
    })
}

fn player_leave(message: &str) -> Option<EventKind> {
    let (name, rest) = split_name(message)?;
    let reason = rest.strip_prefix(LEAVE_PREFIX)?;
    Some(EventKind::PlayerLeave {
        name: name.to_string(),
        reason: reason.to_string(),
    })
}

fn player_death(message: &str) -> Option<EventKind> {
    let (name, rest) = split_name(message)?;
    let verb = rest.split(' ').next()?;
    DEATH_VERBS.contains(&verb).then(|| EventKind::PlayerDeath {
        name: name.to_string(),
        reason: rest.to_string(),
    })
}

fn player_command(message: &str) -> Option<EventKind> {
    let (name, rest) = split_name(message)?;
    let command = rest.strip_prefix(COMMAND_PREFIX)?;
    Some(EventKind::PlayerCommand {
        name: name.to_string(),
        command: command.to_string(),
    })
}

fn player_advancement(message: &str) -> Option<EventKind> {
    let (name, rest) = split_name(message)?;
    let advancement = ADVANCEMENT_PREFIXES
        .iter()
        .find_map(|prefix| rest.strip_prefix(*prefix))?
        .strip_suffix(']')?;
    Some(EventKind::PlayerAdvancement {
        name: name.to_string(),
        advancement: advancement.to_string(),
    })
}

/// Splits `<name> <rest>` at the first space.
fn split_name(message: &str) -> Option<(&str, &str)> {
    let (name, rest) = message.split_once(' ')?;
    (!name.is_empty()).then_some((name, rest))
}

//-----------------------------------------------------------------------------
// Chat thread
//-----------------------------------------------------------------------------

/// Strips `[Async Chat Thread - #<n>/INFO]: ` and the optional
/// `[Not Secure] ` marker.
fn strip_chat_tag(body: &str) -> Option<&str> {
    let (thread, message) = body
        .strip_prefix(CHAT_TAG_PREFIX)?
        .split_once(CHAT_TAG_SUFFIX)?;

    if thread.is_empty() || !thread.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(message.strip_prefix(NOT_SECURE_MARKER).unwrap_or(message))
}

fn chat_message(message: &str) -> Option<EventKind> {
    let (name, content) = message.strip_prefix('<')?.split_once("> ")?;
    if name.is_empty() || name.contains(' ') {
        return None;
    }
    Some(EventKind::ChatMessage {
        name: name.to_string(),
        content: content.to_string(),
    })
}
