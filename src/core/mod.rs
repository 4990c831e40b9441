//=========================================================================
// Core Systems
//=========================================================================
//
// Engine-internal systems and the data model they share.
//
// Architecture:
// ```text
//   Runtime (one per engine, single-threaded)
//     ├─ RunState        run flag + current scene identifier
//     ├─ GameContext     translator, config, scene requests
//     └─ SceneManager    owns the active Scene
//
//   Frame flow:
//     input events → SceneManager → active Scene
//     update → drain scene requests → render → present
// ```
//
//=========================================================================

//=== Module Declarations =================================================

pub mod config;
pub mod input;
pub mod render;
pub mod runtime;
pub mod scene;
pub mod state;

//=== Public API ==========================================================

pub use config::Config;
pub use runtime::{GameContext, Runtime};
pub use state::RunState;
