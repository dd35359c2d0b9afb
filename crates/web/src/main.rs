//! Officetrack Telegram Mini App front end

mod app;
mod components;
mod telegram;

use anyhow::{Context, Result};
use officetrack_core::AppConfig;
use officetrack_core::config::{
    BOT_USERNAME_VAR, DEMO_LOGIN_VAR, LOG_LEVEL_VAR, MEETINGS_PAGE_SIZE_VAR,
};

fn main() -> Result<()> {
    let config = load_config()?;

    let level = config
        .log_level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);
    dioxus::logger::init(level).context("Failed to initialize logger")?;

    tracing::info!(
        bot = %config.bot_username,
        demo_login = config.demo_login_enabled,
        "Starting Officetrack Mini App"
    );

    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(app::App);

    Ok(())
}

/// The browser has no process environment; values are baked in at build time
fn load_config() -> Result<AppConfig> {
    AppConfig::from_lookup(|key| {
        match key {
            BOT_USERNAME_VAR => option_env!("OFFICETRACK_BOT_USERNAME"),
            DEMO_LOGIN_VAR => option_env!("OFFICETRACK_DEMO_LOGIN"),
            MEETINGS_PAGE_SIZE_VAR => option_env!("OFFICETRACK_MEETINGS_PAGE_SIZE"),
            LOG_LEVEL_VAR => option_env!("OFFICETRACK_LOG_LEVEL"),
            _ => None,
        }
        .map(str::to_string)
    })
    .context("Invalid build-time configuration")
}
