//! `App Portal` - searchable desktop portal for internal applications
//!
//! Opens a window listing the catalog of internal tools, filtered by environment
//! and free-text search, with persistent favorites and theme.

// Set Windows subsystem to hide console window
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![expect(
    missing_docs,
    reason = "Slint-generated code from include_modules! lacks doc comments"
)]
#![allow(clippy::unwrap_used)] // Slint-generated code from include_modules! uses .unwrap() extensively

// GUI module is only in the binary, not the library
mod gui;

use anyhow::{Context, Result};
use appportal::{
    config::{ConfigManager, ConfigStatus},
    controller::PortalController,
    error::{PortalError, get_user_friendly_error},
    utils::{self, HostThemeProbe, SystemLinkOpener},
};
use gui::GuiController;
use tracing::{error, info, warn};

// Include Slint-generated code
slint::include_modules!();

/// Main entry point for the application
///
/// Resolves the data directory, loads configuration, starts logging, loads the
/// catalog and persisted state, then runs the window until it is closed.
fn main() -> Result<()> {
    use appportal::utils::startup_profiler::{self, StartupPhase};
    let profiler = startup_profiler::get_profiler();
    profiler.record_phase(StartupPhase::AppStart);

    let data_dir = ConfigManager::ensure_data_dir().context("Failed to create data directory")?;

    // The log level lives in the config, so it is read before the subscriber exists
    let (mut config, config_status) = ConfigManager::load_with_status()
        .context("Failed to load application configuration")?;
    profiler.record_phase(StartupPhase::ConfigLoad);

    utils::init_logging(&data_dir, &config.preferences.log_level)
        .context("Failed to initialize logging system")?;
    profiler.record_phase(StartupPhase::LoggingInit);

    info!("Data directory: {}", data_dir.display());
    match config_status {
        ConfigStatus::Loaded => info!("Configuration loaded successfully"),
        ConfigStatus::Missing => info!("Configuration file not found, using defaults"),
        ConfigStatus::Invalid(reason) => {
            warn!("Failed to parse configuration, using defaults: {}", reason);
        }
    }

    let controller = match PortalController::open(
        &config,
        &data_dir,
        &HostThemeProbe,
        Box::new(SystemLinkOpener),
    ) {
        Ok(controller) => controller,
        Err(e) => {
            error!("Failed to load the portal: {}", e);
            show_error_and_exit(&startup_error_message(&e));
            return Err(e).context("Failed to load the portal");
        }
    };

    info!(
        "Portal ready with {} applications, {} favorites, {} theme",
        controller.catalog().len(),
        controller.favorites().len(),
        controller.theme()
    );

    let gui_controller = match GuiController::new(controller, config.window_state) {
        Ok(gui) => gui,
        Err(e) => {
            error!("Failed to create the window: {}", e);
            show_error_and_exit(&startup_error_message(&e));
            return Err(e).context("Failed to create GUI controller");
        }
    };
    profiler.record_phase(StartupPhase::GuiInit);

    profiler.record_phase(StartupPhase::AppReady);
    profiler.log_summary();

    info!("Starting GUI event loop");
    let window_state = gui_controller
        .run()
        .context("GUI event loop terminated with error")?;

    if window_state != config.window_state {
        config.window_state = window_state;
        if let Err(e) = ConfigManager::save(&config) {
            warn!("Failed to save window size: {}", e);
        }
    }

    info!("App Portal shutting down");

    Ok(())
}

fn startup_error_message(error: &PortalError) -> String {
    format!(
        "App Portal could not start:\n\n{}",
        get_user_friendly_error(error)
    )
}

/// Shows an error dialog and exits the application.
fn show_error_and_exit(message: &str) {
    use rfd::MessageDialog;

    MessageDialog::new()
        .set_title("App Portal - Error")
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .set_level(rfd::MessageLevel::Error)
        .show();

    std::process::exit(1);
}
