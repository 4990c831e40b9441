//=========================================================================
// Arclight Engine — Library Root
//
// This crate defines the public API surface of the Arclight Engine.
//
// Responsibilities:
// - Expose the engine entry point (`Engine`) and its configuration
// - Keep the platform layer (winit integration) hidden from end users
// - Provide clean separation between the high-level engine facade
//   and the subsystems it coordinates (scenes, i18n, input)
//
// Typical usage:
// ```no_run
// use arclight_engine::core::config::Config;
// use arclight_engine::Engine;
//
// fn main() -> Result<(), arclight_engine::InitError> {
//     Engine::new(Config::default())?.run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the engine-internal systems and data model (scenes,
// input events, configuration, the frame runtime). It is exposed publicly
// for extensibility, but normal application code will mostly use the
// top-level `Engine` facade.
//
// `i18n` is the translation service: key lookup with language fallback,
// lazy table loading and environment-based language detection.
//
// `scenes` holds the concrete scene implementations (menu family plus the
// gameplay/pause placeholders) and the default scene factory.
//
pub mod core;
pub mod i18n;
pub mod scenes;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains OS-specific logic (window, winit integration, the
// event loop) and is kept private, as it is not part of the public API
// surface.
//
// `engine` defines the main engine entry point and initialization logic.
//
mod platform;
mod engine;

//--- Public Exports ------------------------------------------------------
//
// Re-exports the `Engine` struct as the main entry point for applications.
// This allows users to simply `use arclight_engine::Engine;` without
// having to know the internal module structure.
//
pub use engine::{Engine, InitError};

pub mod prelude;
