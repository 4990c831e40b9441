//=========================================================================
// Scene Manager
//=========================================================================
//
// Manages the single active scene and its lifecycle.
//
// Scenes are constructed on demand through an injected factory and
// discarded on exit. A transition always runs the old scene's `on_exit`
// to completion before the replacement's construction begins, so no two
// scenes are ever simultaneously active and resource release always
// precedes the next scene's acquisition.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info, warn};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;
use crate::core::render::RenderFrame;
use crate::core::runtime::GameContext;
use super::{Scene, SceneId};

//=== Scene Error =========================================================

/// Scene construction failure.
///
/// Recoverable at the manager level: a failed transition falls back to
/// the main menu. Only a failure to build the main menu itself reaches
/// the frame runtime, which treats it as fatal.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to construct scene {id:?}: {reason}")]
    Construction { id: SceneId, reason: String },
}

//=== Scene Factory =======================================================

/// Builds a scene instance for an identifier.
///
/// Injected into the manager so tests can substitute instrumented scenes
/// and so the manager stays independent of the concrete scene set.
pub type SceneFactory =
    Box<dyn Fn(SceneId, &mut GameContext) -> Result<Box<dyn Scene>, SceneError>>;

//=== Scene Manager =======================================================

/// Owns the currently active scene and performs ordered transitions.
///
/// No external component retains a reference to a scene across a
/// transition boundary; the manager is the sole owner.
pub struct SceneManager {
    factory: SceneFactory,
    active: Option<(SceneId, Box<dyn Scene>)>,
}

impl SceneManager {
    //--- Construction -----------------------------------------------------

    /// Creates a manager with no active scene.
    ///
    /// A scene must be activated via [`SceneManager::transition_to`]
    /// before frames are dispatched; an empty manager is not a valid
    /// steady state after initialization.
    pub fn new(factory: SceneFactory) -> Self {
        Self {
            factory,
            active: None,
        }
    }

    /// Identifier of the active scene, if any.
    pub fn active_id(&self) -> Option<SceneId> {
        self.active.as_ref().map(|(id, _)| *id)
    }

    //--- Transitions ------------------------------------------------------

    /// Replaces the active scene with the named one.
    ///
    /// The old scene's `on_exit` runs to completion before the new
    /// scene's construction begins. If construction fails, the manager
    /// falls back to the main menu; if even that fails, the error is
    /// propagated and no scene is active.
    ///
    /// Returns the identifier actually activated (the requested scene,
    /// or `MainMenu` after a fallback).
    pub fn transition_to(
        &mut self,
        id: SceneId,
        context: &mut GameContext,
    ) -> Result<SceneId, SceneError> {
        if let Some((old_id, mut old)) = self.active.take() {
            debug!(target: "scene", "Leaving scene {:?}", old_id);
            old.on_exit(context);
        }

        match (self.factory)(id, context) {
            Ok(scene) => {
                info!(target: "scene", "Scene changed to {:?}", id);
                self.active = Some((id, scene));
                Ok(id)
            }
            Err(err) if id != SceneId::MainMenu => {
                warn!(
                    target: "scene",
                    "Scene {:?} failed to construct ({}), falling back to main menu",
                    id, err
                );
                let fallback = (self.factory)(SceneId::MainMenu, context)?;
                self.active = Some((SceneId::MainMenu, fallback));
                Ok(SceneId::MainMenu)
            }
            Err(err) => Err(err),
        }
    }

    //--- Per-Frame Dispatch -----------------------------------------------

    /// Forwards update and render to the active scene.
    ///
    /// No-ops safely if no scene is active.
    pub fn dispatch_frame(&mut self, context: &mut GameContext, frame: &mut RenderFrame) {
        if let Some((_, scene)) = &mut self.active {
            scene.update(context);
            scene.render(context, frame);
        }
    }

    /// Forwards one input event to the active scene.
    ///
    /// Returns whether the event was consumed; `false` with no active
    /// scene.
    pub fn dispatch_input(&mut self, event: &InputEvent, context: &mut GameContext) -> bool {
        match &mut self.active {
            Some((_, scene)) => scene.handle_input(event, context),
            None => false,
        }
    }

    //--- Shutdown ---------------------------------------------------------

    /// Exits the active scene without constructing a replacement.
    ///
    /// Called once when the main loop ends so `on_exit` runs on every
    /// termination path, including abnormal shutdown.
    pub fn shutdown(&mut self, context: &mut GameContext) {
        if let Some((id, mut scene)) = self.active.take() {
            debug!(target: "scene", "Shutting down active scene {:?}", id);
            scene.on_exit(context);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::i18n::Translator;
    use std::cell::RefCell;
    use std::rc::Rc;

    type EventLog = Rc<RefCell<Vec<String>>>;

    struct RecordingScene {
        id: SceneId,
        log: EventLog,
    }

    impl Scene for RecordingScene {
        fn render(&self, _context: &GameContext, _frame: &mut RenderFrame) {}

        fn handle_input(&mut self, _event: &InputEvent, _context: &mut GameContext) -> bool {
            self.log.borrow_mut().push(format!("input {:?}", self.id));
            true
        }

        fn on_exit(&mut self, _context: &mut GameContext) {
            self.log.borrow_mut().push(format!("exit {:?}", self.id));
        }
    }

    fn test_context() -> GameContext {
        GameContext::new(Config::default(), Translator::identity())
    }

    /// Factory that records constructions and fails for the given ids.
    fn recording_factory(log: EventLog, fail_for: Vec<SceneId>) -> SceneFactory {
        Box::new(move |id, _context| {
            if fail_for.contains(&id) {
                return Err(SceneError::Construction {
                    id,
                    reason: String::from("induced failure"),
                });
            }
            log.borrow_mut().push(format!("construct {:?}", id));
            Ok(Box::new(RecordingScene {
                id,
                log: Rc::clone(&log),
            }))
        })
    }

    #[test]
    fn exit_runs_before_next_construction() {
        let log: EventLog = Rc::default();
        let mut context = test_context();
        let mut manager = SceneManager::new(recording_factory(Rc::clone(&log), vec![]));

        manager.transition_to(SceneId::MainMenu, &mut context).unwrap();
        manager.transition_to(SceneId::Gameplay, &mut context).unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                "construct MainMenu",
                "exit MainMenu",
                "construct Gameplay",
            ]
        );
    }

    #[test]
    fn exit_runs_exactly_once_per_transition() {
        let log: EventLog = Rc::default();
        let mut context = test_context();
        let mut manager = SceneManager::new(recording_factory(Rc::clone(&log), vec![]));

        manager.transition_to(SceneId::MainMenu, &mut context).unwrap();
        manager.transition_to(SceneId::Gameplay, &mut context).unwrap();
        manager.transition_to(SceneId::Pause, &mut context).unwrap();

        let exits = log
            .borrow()
            .iter()
            .filter(|entry| entry.starts_with("exit"))
            .count();
        assert_eq!(exits, 2);
    }

    #[test]
    fn failed_construction_falls_back_to_main_menu() {
        let log: EventLog = Rc::default();
        let mut context = test_context();
        let mut manager =
            SceneManager::new(recording_factory(Rc::clone(&log), vec![SceneId::Gameplay]));

        manager.transition_to(SceneId::MainMenu, &mut context).unwrap();
        let activated = manager
            .transition_to(SceneId::Gameplay, &mut context)
            .unwrap();

        assert_eq!(activated, SceneId::MainMenu);
        assert_eq!(manager.active_id(), Some(SceneId::MainMenu));
        // The old scene was still exited before the failed construction.
        assert!(log.borrow().iter().any(|entry| entry == "exit MainMenu"));
    }

    #[test]
    fn main_menu_construction_failure_propagates() {
        let log: EventLog = Rc::default();
        let mut context = test_context();
        let mut manager =
            SceneManager::new(recording_factory(Rc::clone(&log), vec![SceneId::MainMenu]));

        let result = manager.transition_to(SceneId::MainMenu, &mut context);

        assert!(result.is_err());
        assert_eq!(manager.active_id(), None);
    }

    #[test]
    fn dispatch_without_active_scene_is_noop() {
        let log: EventLog = Rc::default();
        let mut context = test_context();
        let mut manager = SceneManager::new(recording_factory(log, vec![]));

        let mut frame = RenderFrame::new(800, 600);
        manager.dispatch_frame(&mut context, &mut frame);
        assert!(frame.commands().is_empty());

        let event = InputEvent::KeyDown {
            key: crate::core::input::KeyCode::Enter,
        };
        assert!(!manager.dispatch_input(&event, &mut context));
    }

    #[test]
    fn shutdown_exits_active_scene() {
        let log: EventLog = Rc::default();
        let mut context = test_context();
        let mut manager = SceneManager::new(recording_factory(Rc::clone(&log), vec![]));

        manager.transition_to(SceneId::Pause, &mut context).unwrap();
        manager.shutdown(&mut context);

        assert_eq!(manager.active_id(), None);
        assert!(log.borrow().iter().any(|entry| entry == "exit Pause"));
    }
}
