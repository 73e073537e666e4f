use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use gpui::{App, Application};
use tracing::{debug, error, info};

use tip_ui::{
    app::TipSession, components::WindowPreferences, logging, open_main_window,
    settings::Settings, setup_app,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Tip calculator.
///
/// Opens the calculator window. With `--amount`, prints the tip for the given
/// bill instead and exits.
#[derive(Debug, Parser)]
#[command(name = "TipCalculator", version, about)]
struct Cli {
    /// Bill amount. Enables headless mode.
    #[arg(long, allow_hyphen_values = true)]
    amount: Option<String>,

    /// Tip percentage (defaults to the configured default, 15 unless changed).
    #[arg(long, allow_hyphen_values = true)]
    tip: Option<String>,

    /// Round the tip up to the next whole currency unit.
    /// `--round-up=false` forces an exact tip over the settings file.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    round_up: Option<bool>,

    /// Locale for currency formatting (e.g. `en_US`, `de-DE`).
    /// Defaults to the settings file, then the system locale.
    #[arg(long)]
    locale: Option<String>,

    /// Settings file. Defaults to `tip-calculator.toml` in the working directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level or filter directive (e.g. `debug`, `info,tip_core=trace`).
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    logging::init_default_logging();

    let cli = Cli::parse();

    if let Some(level) = &cli.log_level {
        logging::set_log_level(level)?;
    }
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    debug!(?settings, "settings loaded");

    let session = TipSession::from_settings(&settings, cli.locale.as_deref());

    if let Some(amount) = &cli.amount {
        // The result goes to stdout; keep log lines out of it unless asked for.
        if cli.log_level.is_none() {
            logging::set_stdout_enabled(false)?;
        }
        let view = session.run_headless(amount, cli.tip.as_deref(), cli.round_up);
        println!("{view}");
        return Ok(());
    }

    let preferences = WindowPreferences::from(settings.window);
    info!("starting tip calculator");

    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx: &mut App| {
            setup_app(cx);
            if let Err(e) = open_main_window(session, preferences, cx) {
                error!(?e, "failed to open window");
                cx.quit();
            }
        });

    Ok(())
}
