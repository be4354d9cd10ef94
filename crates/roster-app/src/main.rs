use anyhow::{anyhow, Context};
use eframe::{egui, NativeOptions};
use roster_store::Roster;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod app;
mod commands;
mod config;
mod input;
mod ui;

use app::RosterApp;
use config::AppConfig;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .ok();

    let config = AppConfig::default();
    let roster = load_roster(&config)?;
    run_ui(config, roster)
}

/// Reads the backing file before the first frame. A missing file starts an
/// empty roster that the first save will create; anything else is fatal.
fn load_roster(config: &AppConfig) -> anyhow::Result<Roster> {
    match roster_store::load(&config.roster_path) {
        Ok(roster) => Ok(roster),
        Err(err) if err.is_not_found() => {
            warn!(
                path = %config.roster_path.display(),
                "roster file not found; starting with an empty roster"
            );
            Ok(Roster::new())
        }
        Err(err) => Err(err).with_context(|| {
            format!(
                "cannot start without a readable roster at {}",
                config.roster_path.display()
            )
        }),
    }
}

fn run_ui(config: AppConfig, roster: Roster) -> anyhow::Result<()> {
    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size(config.window_size),
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |_cc| Box::new(RosterApp::new(&config, roster))),
    )
    .map_err(|err| anyhow!(err.to_string()))
}
