use crate::conf::StatsConfig;
use crate::sequence::{LogFileRef, OrderKey, discover_logs};

pub fn files(config: &StatsConfig) -> anyhow::Result<()> {
    let files = discover_logs(&config.log_dir, &config.current_file)?;
    print!("{}", render_file_list(&files));
    Ok(())
}

/// One line per file: anchor date, compression and path.
pub fn render_file_list(files: &[LogFileRef]) -> String {
    let mut out = String::new();

    for file in files {
        out.push_str(&format!(
            "{}  {:<5}  {}{}\n",
            file.anchor,
            if file.compressed { "gz" } else { "plain" },
            file.path.display(),
            if file.key == OrderKey::Current {
                " (current)"
            } else {
                ""
            }
        ));
    }

    out
}
