//! Arclight scaffold binary.
//!
//! Initializes logging, builds the engine from the startup configuration
//! and runs the main loop until the player quits.

use std::process::ExitCode;

use log::error;

use arclight_engine::core::config::Config;
use arclight_engine::Engine;

fn main() -> ExitCode {
    env_logger::init();

    let config = Config {
        window_title: String::from("Arclight"),
        window_width: 800,
        window_height: 600,
        fullscreen: false,
        language_override: None,
    };

    let engine = match Engine::new(config) {
        Ok(engine) => engine,
        Err(err) => {
            error!("Engine initialization failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = engine.run() {
        error!("Engine terminated with error: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
