//! Yajuws OS: a joke operating-system shell for the terminal.

use anyhow::Context;
use clap::Parser;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use yajuws::{Shell, ShellConfig, StdinSource, Theme};

/// A joke operating-system shell. It does not touch your computer.
#[derive(Debug, Parser)]
#[command(name = "yajuws", version, about)]
struct Cli {
    /// Refresh period of live views, in milliseconds.
    #[arg(long, default_value_t = 1000)]
    tick_ms: u64,

    /// Skip the boot sequence.
    #[arg(long)]
    fast_boot: bool,

    /// Disable coloured banners.
    #[arg(long)]
    no_color: bool,

    /// Colour theme: amber, green or cyan.
    #[arg(long, default_value_t = Theme::Amber)]
    theme: Theme,
}

impl Cli {
    fn into_config(self) -> ShellConfig {
        ShellConfig {
            tick_period: Duration::from_millis(self.tick_ms),
            fast_boot: self.fast_boot,
            use_color: !self.no_color,
            theme: self.theme,
            ..ShellConfig::default()
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Logs go to stderr so they never interleave with screen frames
    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.into_config();
    config.validate().context("invalid configuration")?;

    let mut shell = Shell::new(config, Arc::new(StdinSource), io::stdout());
    shell.run().context("shell failed")?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("yajuws: {e:#}");
            ExitCode::FAILURE
        }
    }
}
