//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use arclight_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine core
pub use crate::engine::{Engine, InitError};

// Configuration and run state
pub use crate::core::config::Config;
pub use crate::core::state::RunState;

// Frame runtime and context
pub use crate::core::runtime::{GameContext, Runtime};

// Input events
pub use crate::core::input::{InputEvent, KeyCode};

// Render frame
pub use crate::core::render::{Color, DrawCommand, RenderFrame};

// Scene system
pub use crate::core::scene::{
    RequestQueue, Scene, SceneError, SceneId, SceneManager, SceneRequest,
};

// Translation service
pub use crate::i18n::{LoadError, Translator};
