use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use gpui::{App, Application};
use tracing::{debug, error, info};

use steuer_ui::{config::AppConfig, logging, open_main_window, setup_app};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Holding calculator and managing-director salary/distribution check.
///
/// Average values come from the configuration file when one is found,
/// otherwise the built-in averages are used.
#[derive(Debug, Parser)]
struct Cli {
    /// Configuration file. Falls back to $STEUER_TOOLS_CONFIG, then to
    /// `steuer-tools.toml` in the working directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `steuer_core=trace`. Overrides the config file.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log output to this file. Overrides the config file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    logging::init_default_logging();

    let cli = Cli::parse();
    debug!(?cli, "parsed command line");

    let config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    logging::apply_config(
        &config.logging,
        cli.log_level.as_deref(),
        cli.log_file.as_deref(),
    )?;
    info!(
        holding_dividend = %config.holding.dividend,
        gross_salary = %config.managing_director.gross_salary,
        "configuration loaded"
    );

    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx: &mut App| {
            setup_app(cx);
            if let Err(e) = open_main_window(cx, &config) {
                error!(error = %e, "failed to open main window");
                cx.quit();
            }
        });

    Ok(())
}
