//! sticklog demo
//!
//! Writes one record per level through a named logger so the format, colors
//! and stdout/stderr split can be inspected from a shell:
//!
//! ```text
//! sticklog --name svc --verbosity info disk low
//! sticklog --no-color --no-timestamp 2>/dev/null
//! sticklog --print-config
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sticklog::{LoggerDefaults, LoggerRegistry, Verbosity};

#[derive(Parser)]
#[command(name = "sticklog")]
#[command(about = "Emit sample records through a sticklog logger", long_about = None)]
struct Cli {
    /// Logger name (empty for the default logger)
    #[arg(short, long, default_value = "")]
    name: String,

    /// Threshold: none, fatal, error, warn, info, debug, trace or 0-6
    #[arg(short, long, default_value = "debug")]
    verbosity: Verbosity,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Disable timestamps
    #[arg(long)]
    no_timestamp: bool,

    /// Append a backtrace to trace records
    #[arg(long)]
    backtrace: bool,

    /// Print the resolved logger config as JSON instead of logging
    #[arg(long)]
    print_config: bool,

    /// Payload values
    #[arg(default_value = "hello from sticklog")]
    message: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sticklog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let registry = LoggerRegistry::new().with_defaults(LoggerDefaults {
        verbosity: cli.verbosity,
        colored_console: !cli.no_color,
        include_timestamp: !cli.no_timestamp,
        trace_backtrace: cli.backtrace,
    });
    let logger = registry.get_logger(Some(&cli.name), None);

    tracing::debug!(
        logger = %cli.name,
        verbosity = %cli.verbosity,
        "Logger ready"
    );

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(logger.config().as_ref())?);
        return Ok(());
    }

    let values: Vec<&dyn std::fmt::Display> =
        cli.message.iter().map(|m| m as &dyn std::fmt::Display).collect();
    for level in Verbosity::ALL.into_iter().rev() {
        logger.log(level, &values);
    }

    Ok(())
}
