mod cli;

use clap::Parser;
use cli::handlers::{self, NotifyArgs};
use notifier_core::models::LogLevel;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "notify")]
#[command(version)]
#[command(about = "Send a task notification via Bark push, desktop notification and sound")]
#[command(
    help_template = "{name} - {version}\n{about}\n\n{usage-heading}\n  {usage}\n\n{all-args}\n"
)]
struct Cli {
    /// Notification level: success | error | info
    level: String,

    /// Notification message (quote it when it contains spaces)
    #[arg(allow_hyphen_values = true)]
    message: String,

    /// Path to configuration file (default: $TASK_NOTIFIER_CONFIG or ~/.config/task-notifier/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the dispatch report as JSON
    #[arg(long)]
    json: bool,

    /// Suppress the per-channel summary
    #[arg(short, long)]
    quiet: bool,

    /// Override the configured log level (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<LogLevel>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let args = NotifyArgs {
        level: cli.level,
        message: cli.message,
        config: cli.config,
        json: cli.json,
        quiet: cli.quiet,
        log_level: cli.log_level,
    };

    match handlers::handle_notify(args).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            handlers::report_error(&e);
            ExitCode::from(1)
        }
    }
}
