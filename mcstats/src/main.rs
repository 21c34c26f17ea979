use clap::Parser;
use mcstats_core::cli::Command;
use mcstats_core::conf::load_config_or_default;
use mcstats_core::logging::{LogFormat, init_logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mcstats",
    version,
    about = "Server uptime, idle time and player sessions from Minecraft logs"
)]
struct Cli {
    /// Path to an mcstats.toml config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Diagnostic output format (always written to stderr)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    /// Only report warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_format, cli.quiet);

    let config = load_config_or_default(cli.config.as_deref())?;
    let config = cli.command.apply_overrides(config);
    tracing::debug!(
        log_dir = %config.log_dir.display(),
        current_file = %config.current_file,
        orphan_policy = ?config.orphan_policy,
        "resolved configuration"
    );

    cli.command.run(&config)
}
