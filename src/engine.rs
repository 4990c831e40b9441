//=========================================================================
// Arclight Engine
//
// Main entry point and coordinator for the engine.
//
// Architecture:
// ```text
//     Config  ──Engine::new()──►  Engine  ──run()──►  [Runtime]
//                  │                 │
//                  ├─ Translator     └─ winit event loop (blocks)
//                  ├─ Runtime           frame stepping @ ~16 ms
//                  └─ EventLoop         deterministic shutdown
// ```
//
// Initialization order: translator (never fatal, falls back to the
// identity variant), frame runtime with the main menu active, then the
// winit event loop. Any acquisition failure drops the already-built
// pieces via RAII before the error returns.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;
use thiserror::Error;
use winit::event_loop::EventLoop;

//=== Internal Dependencies ===============================================

use crate::core::config::Config;
use crate::core::runtime::Runtime;
use crate::core::scene::SceneError;
use crate::i18n::{self, Translator};
use crate::platform::Platform;

//=== InitError ===========================================================

/// Fatal engine initialization or shutdown failure.
///
/// Startup must abort on any of these; partially acquired resources are
/// released before the error reaches the caller.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("event loop creation failed")]
    EventLoop(#[source] winit::error::EventLoopError),

    #[error("event loop terminated abnormally")]
    EventLoopRun(#[source] winit::error::EventLoopError),

    #[error("window creation failed")]
    Window(#[source] winit::error::OsError),

    #[error("initial scene construction failed")]
    Scene(#[from] SceneError),
}

//=== Engine ==============================================================

/// Arclight engine runtime.
///
/// Owns the winit event loop and the platform layer that drives the
/// frame runtime. Create with [`Engine::new`], then call
/// [`Engine::run`], which blocks until the run flag clears or the
/// window closes.
///
/// # Examples
///
/// ```no_run
/// use arclight_engine::core::config::Config;
/// use arclight_engine::Engine;
///
/// fn main() -> Result<(), arclight_engine::InitError> {
///     let config = Config {
///         window_title: String::from("Arclight"),
///         ..Config::default()
///     };
///     Engine::new(config)?.run()
/// }
/// ```
pub struct Engine {
    event_loop: EventLoop<()>,
    platform: Platform,
}

impl Engine {
    //--- Initialization ---------------------------------------------------

    /// Initializes the engine from a configuration.
    ///
    /// Builds the translator (explicit language override, or detection
    /// from the environment; never fatal), the frame runtime with the
    /// main menu active, and the winit event loop.
    ///
    /// # Errors
    ///
    /// Returns [`InitError`] if the event loop cannot be created or the
    /// initial scene fails to construct. Translator failures are
    /// absorbed into the identity fallback instead.
    pub fn new(config: Config) -> Result<Self, InitError> {
        let translator = match config.language_override.as_deref() {
            Some(language) => Translator::with_language(i18n::ASSET_DIR, language),
            None => Translator::auto(i18n::ASSET_DIR),
        };
        info!(target: "engine", "Language set to: {}", translator.language());

        let runtime = Runtime::new(config, translator)?;
        info!(target: "engine", "Initial scene: {:?}", runtime.current_scene());

        let event_loop = EventLoop::new().map_err(InitError::EventLoop)?;

        info!(target: "engine", "Engine initialized successfully");
        Ok(Self {
            event_loop,
            platform: Platform::new(runtime),
        })
    }

    //--- Execution --------------------------------------------------------

    /// Runs the main loop and blocks until the engine stops.
    ///
    /// # Lifecycle
    ///
    /// 1. winit creates the window (`resumed`)
    /// 2. Events are drained and forwarded to the active scene
    /// 3. Each frame interval: update → render → present
    /// 4. Run flag clears (quit request or window close) → loop exits
    /// 5. Active scene's `on_exit` runs; window and context released
    ///
    /// Shutdown is deterministic regardless of how termination was
    /// triggered.
    pub fn run(self) -> Result<(), InitError> {
        let Self {
            event_loop,
            mut platform,
        } = self;

        info!(target: "engine", "Starting game loop");

        let loop_result = event_loop.run_app(&mut platform);

        info!(target: "engine", "Game loop ended");

        // Exit the active scene on every termination path, including an
        // abnormal event loop failure, then drop the window (RAII).
        platform.runtime.shutdown();

        loop_result.map_err(InitError::EventLoopRun)?;

        if let Some(err) = platform.window_error.take() {
            return Err(InitError::Window(err));
        }

        info!(target: "engine", "Engine shutdown complete");
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scene::SceneId;

    // Engine construction needs a display server, so the loop itself is
    // exercised through Runtime in core::runtime; these tests cover the
    // error type surface.

    #[test]
    fn init_error_wraps_scene_errors() {
        let err: InitError = SceneError::Construction {
            id: SceneId::MainMenu,
            reason: String::from("boom"),
        }
        .into();

        assert!(matches!(err, InitError::Scene(_)));
        assert!(err.to_string().contains("initial scene"));
    }
}
