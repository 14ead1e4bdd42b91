mod app;
mod config;
mod domain;
mod infra;
mod platform;
mod ui;
mod usecase;


use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::{default_webview_data_dir, AppConfig};

fn main() -> Result<()> {
    let (config, warnings) = AppConfig::from_env();

    dioxus::logger::init(config.log_level).context("failed to initialise logging")?;
    for warning in &warnings {
        warn!("{warning}");
    }

    let webview_data_dir = default_webview_data_dir()?;
    info!(data_dir = %webview_data_dir.display(), "starting {}", config.title);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title(&config.title))
                .with_data_directory(webview_data_dir),
        )
        .with_context(config)
        .launch(app::App);

    Ok(())
}
