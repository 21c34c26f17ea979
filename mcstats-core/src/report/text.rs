use super::duration::format_duration;
use crate::session::{PlayerSnapshot, ServerSnapshot, Snapshot};
use owo_colors::OwoColorize;

const TITLE: &str = "Minecraft server stats";

fn server_status(server: &ServerSnapshot) -> &'static str {
    match (server.running, server.idle_now) {
        (false, _) => "stopped",
        (true, true) => "running (idle)",
        (true, false) => "running",
    }
}

fn name_width(players: &[PlayerSnapshot]) -> usize {
    players.iter().map(|p| p.name.len()).max().unwrap_or(0)
}

fn player_counters(player: &PlayerSnapshot) -> String {
    format!(
        "deaths {} | chat {} | commands {} | advancements {}",
        player.deaths, player.chat_messages, player.commands, player.advancements
    )
}

pub fn render_plain(snapshot: &Snapshot) -> String {
    let mut out = String::new();

    let heading = format!("{TITLE} (as of {})", snapshot.generated_at);
    out.push_str(&format!("{heading}\n{}\n", "=".repeat(heading.len())));

    out.push_str(&format!(
        "uptime: {} | idle: {} | status: {}\n\n",
        format_duration(snapshot.server.uptime),
        format_duration(snapshot.server.idle),
        server_status(&snapshot.server)
    ));

    if snapshot.players.is_empty() {
        out.push_str("Players: <none>\n");
        return out;
    }

    out.push_str(&format!(
        "Players ({} known, {} online):\n",
        snapshot.players.len(),
        snapshot.online_players().count()
    ));

    let width = name_width(&snapshot.players);
    for player in &snapshot.players {
        out.push_str(&format!(
            "  {:<width$}  {:>15}  {}{}\n",
            player.name,
            format_duration(player.playtime),
            player_counters(player),
            if player.online { " | online" } else { "" },
        ));
    }

    out
}

pub fn render_pretty(snapshot: &Snapshot) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} {}\n\n",
        TITLE.bold(),
        format!("(as of {})", snapshot.generated_at).dimmed()
    ));

    let status = server_status(&snapshot.server);
    let status = if snapshot.server.running {
        status.green().bold().to_string()
    } else {
        status.red().bold().to_string()
    };

    out.push_str(&format!("  {:<8} {}\n", "status", status));
    out.push_str(&format!(
        "  {:<8} {}\n",
        "uptime",
        format_duration(snapshot.server.uptime).cyan()
    ));
    out.push_str(&format!(
        "  {:<8} {}\n\n",
        "idle",
        format_duration(snapshot.server.idle).yellow()
    ));

    if snapshot.players.is_empty() {
        out.push_str(&format!("{}\n", "no players seen".dimmed()));
        return out;
    }

    out.push_str(&format!(
        "{} {}\n",
        "Players".bold(),
        format!(
            "({} known, {} online)",
            snapshot.players.len(),
            snapshot.online_players().count()
        )
        .dimmed()
    ));

    let width = name_width(&snapshot.players);
    for player in &snapshot.players {
        // Pad before colouring; escape codes would skew the width.
        let name = format!("{:<width$}", player.name);
        let name = if player.online {
            name.green().bold().to_string()
        } else {
            name
        };

        out.push_str(&format!(
            "  {}  {}  {}\n",
            name,
            format!("{:>15}", format_duration(player.playtime)).cyan(),
            player_counters(player).dimmed()
        ));
    }

    out
}
