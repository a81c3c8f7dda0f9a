//! Vector Asteroids entry point
//!
//! Sets up logging and settings, then hands control to the native frontend.

use std::process::ExitCode;

use asteroids::Settings;
use env_logger::{Builder, Env};

fn main() -> ExitCode {
    let _ = Builder::from_env(Env::default().default_filter_or("info")).try_init();
    log::info!("Asteroids starting...");

    let settings = Settings::from_env();
    match serde_json::to_string(&settings) {
        Ok(json) => log::info!("Settings: {}", json),
        Err(e) => log::warn!("Failed to serialize settings: {}", e),
    }

    match asteroids::platform::run(&settings) {
        Ok(summary) => {
            match serde_json::to_string(&summary) {
                Ok(json) => log::info!("Run summary: {}", json),
                Err(e) => log::warn!("Failed to serialize run summary: {}", e),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Startup failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
