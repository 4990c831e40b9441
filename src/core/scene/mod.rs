//=========================================================================
// Scene System
//=========================================================================
//
// Manages scene lifecycle and exclusive scene switching.
//
// Architecture:
//   SceneManager
//     ├─ factory: SceneFactory
//     └─ active: Option<(SceneId, Box<dyn Scene>)>
//
// Flow:
//   dispatch_input() → Scene::handle_input() → RequestQueue
//   dispatch_frame() → Scene::update() / Scene::render()
//   transition_to() → old Scene::on_exit() → factory(new id)
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;
use crate::core::render::RenderFrame;
use crate::core::runtime::GameContext;

//=== Module Declarations =================================================

mod manager;
mod request_queue;

//=== Public API ==========================================================

pub use manager::{SceneError, SceneFactory, SceneManager};
pub use request_queue::{RequestQueue, SceneRequest};

//=== Scene Identifier ====================================================

/// Identifies a scene kind. Exactly one scene is active at a time.
///
/// The menu-family identifiers all construct the menu scene, opened on
/// the matching page; `Gameplay` and `Pause` are placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    MainMenu,
    Settings,
    LanguagePicker,
    ResolutionPicker,
    Gameplay,
    Pause,
}

//=== Scene Trait =========================================================

/// Defines scene behavior with per-frame hooks and lifecycle cleanup.
///
/// Scenes are constructed by the scene factory when they become active
/// and discarded on exit; no state persists across a transition.
///
/// # Minimal Implementation
///
/// Only `render` and `handle_input` are required. `update` and `on_exit`
/// have default empty implementations:
///
/// ```rust
/// # use arclight_engine::prelude::*;
/// struct MyScene;
///
/// impl Scene for MyScene {
///     fn render(&self, _context: &GameContext, frame: &mut RenderFrame) {
///         frame.clear(Color::rgb(0.2, 0.3, 0.3));
///     }
///
///     fn handle_input(&mut self, _event: &InputEvent, _context: &mut GameContext) -> bool {
///         false
///     }
/// }
/// ```
pub trait Scene {
    /// Advances time-based internal state for one frame.
    ///
    /// Default implementation does nothing. Must not affect state outside
    /// this scene; cross-scene effects go through the request queue.
    fn update(&mut self, _context: &mut GameContext) {}

    /// Emits drawing commands for the current frame.
    ///
    /// Takes `&self`: rendering must not mutate logical state.
    fn render(&self, context: &GameContext, frame: &mut RenderFrame);

    /// Interprets one input event.
    ///
    /// Returns whether the event was handled. Unconsumed events are
    /// ignored by the engine loop.
    fn handle_input(&mut self, event: &InputEvent, context: &mut GameContext) -> bool;

    /// Releases scene-owned resources.
    ///
    /// Called exactly once, immediately before the scene is discarded,
    /// on every exit path including engine shutdown.
    fn on_exit(&mut self, _context: &mut GameContext) {}
}
