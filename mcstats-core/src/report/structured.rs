use crate::session::Snapshot;

pub fn render_json(snapshot: &Snapshot) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

pub fn render_yaml(snapshot: &Snapshot) -> anyhow::Result<String> {
    Ok(serde_yaml::to_string(snapshot)?)
}
