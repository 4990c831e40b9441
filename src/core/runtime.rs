//=========================================================================
// Frame Runtime
//=========================================================================
//
// Single-threaded frame stepping, decoupled from the window.
//
// The runtime owns the top-level run state, the shared game context and
// the scene manager. The platform layer feeds it input events and asks
// it to step one frame at a time; nothing here touches the windowing
// library, so the whole loop is testable headless.
//
// Frame flow:
// ```text
//   handle_input(event)            (per pending event)
//        ↓
//   frame(render_frame):
//        drain scene requests      (transitions, quit)
//        Scene::update()
//        Scene::render()
// ```
//
// Requests are drained at the frame boundary so a transition never swaps
// the active scene in the middle of an input dispatch.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::config::Config;
use crate::core::input::InputEvent;
use crate::core::render::RenderFrame;
use crate::core::scene::{
    RequestQueue, SceneError, SceneFactory, SceneId, SceneManager, SceneRequest,
};
use crate::core::state::RunState;
use crate::i18n::Translator;
use crate::scenes;

//=== GameContext =========================================================

/// Shared services handed to every scene call.
///
/// Replaces ambient globals: the translator, the configuration and the
/// request queue travel together as one explicit context object.
pub struct GameContext {
    /// Translation service. Interior locking allows concurrent readers;
    /// the engine itself stays on one thread.
    pub translator: Translator,

    /// Live configuration. The settings family mutates resolution and
    /// language override in place.
    pub config: Config,

    /// Pending scene requests, drained by the runtime each frame.
    pub requests: RequestQueue,
}

impl GameContext {
    /// Bundles a configuration and translator into a fresh context.
    pub fn new(config: Config, translator: Translator) -> Self {
        Self {
            translator,
            config,
            requests: RequestQueue::new(),
        }
    }
}

//=== Runtime =============================================================

/// Drives scenes frame by frame and owns the run state.
///
/// Constructed by the engine facade; the platform layer calls
/// [`Runtime::handle_input`] for each drained event and [`Runtime::frame`]
/// once per frame interval.
pub struct Runtime {
    state: RunState,
    context: GameContext,
    scenes: SceneManager,
}

impl Runtime {
    //--- Construction -----------------------------------------------------

    /// Creates a runtime with the default scene set and the main menu
    /// active.
    pub fn new(config: Config, translator: Translator) -> Result<Self, SceneError> {
        Self::with_factory(config, translator, scenes::default_factory())
    }

    /// Creates a runtime with a custom scene factory.
    ///
    /// The seam tests use to substitute instrumented scenes.
    pub fn with_factory(
        config: Config,
        translator: Translator,
        factory: SceneFactory,
    ) -> Result<Self, SceneError> {
        let mut context = GameContext::new(config, translator);
        let mut scenes = SceneManager::new(factory);
        let mut state = RunState::new();

        state.current = scenes.transition_to(state.current, &mut context)?;

        Ok(Self {
            state,
            context,
            scenes,
        })
    }

    //--- Accessors --------------------------------------------------------

    /// Whether the main loop should keep processing frames.
    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Identifier of the currently active scene.
    pub fn current_scene(&self) -> SceneId {
        self.state.current
    }

    /// Shared scene context.
    pub fn context(&self) -> &GameContext {
        &self.context
    }

    //--- Input ------------------------------------------------------------

    /// Forwards one input event to the active scene.
    ///
    /// Returns whether the event was consumed. Events arriving after the
    /// run flag cleared are dropped.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        if !self.state.running {
            return false;
        }
        self.scenes.dispatch_input(event, &mut self.context)
    }

    /// Clears the run flag directly.
    ///
    /// The path for platform-level quit events (window close); scene
    /// logic goes through [`SceneRequest::Quit`] instead.
    pub fn request_quit(&mut self) {
        info!(target: "runtime", "Quit requested");
        self.state.running = false;
    }

    //--- Frame Stepping ---------------------------------------------------

    /// Steps one frame: drains scene requests, then updates and renders
    /// the active scene into `frame`.
    ///
    /// Returns whether the frame was processed. Once the run flag is
    /// cleared (before the call or by a drained quit request) nothing is
    /// updated or rendered and `false` is returned.
    pub fn frame(&mut self, frame: &mut RenderFrame) -> bool {
        if !self.state.running {
            return false;
        }

        self.process_requests();
        if !self.state.running {
            return false;
        }

        self.scenes.dispatch_frame(&mut self.context, frame);
        true
    }

    fn process_requests(&mut self) {
        for request in self.context.requests.take() {
            match request {
                SceneRequest::Quit => {
                    info!(target: "runtime", "Quit request from scene");
                    self.state.running = false;
                }
                SceneRequest::Switch(id) => {
                    match self.scenes.transition_to(id, &mut self.context) {
                        Ok(active) => self.state.current = active,
                        Err(err) => {
                            // No scene is active anymore; treat as fatal.
                            error!(target: "runtime", "Scene transition failed: {}", err);
                            self.state.running = false;
                        }
                    }
                }
            }
        }
    }

    //--- Shutdown ---------------------------------------------------------

    /// Exits the active scene. Called once when the main loop ends.
    pub fn shutdown(&mut self) {
        self.scenes.shutdown(&mut self.context);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;
    use crate::core::scene::Scene;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn test_runtime() -> Runtime {
        Runtime::new(Config::default(), Translator::identity()).unwrap()
    }

    struct RecordingScene {
        id: SceneId,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Scene for RecordingScene {
        fn render(&self, _context: &GameContext, _frame: &mut RenderFrame) {}

        fn handle_input(&mut self, _event: &InputEvent, _context: &mut GameContext) -> bool {
            false
        }

        fn on_exit(&mut self, _context: &mut GameContext) {
            self.log.borrow_mut().push(format!("exit {:?}", self.id));
        }
    }

    fn recording_factory(log: Rc<RefCell<Vec<String>>>) -> SceneFactory {
        Box::new(move |id, _context| {
            log.borrow_mut().push(format!("construct {:?}", id));
            Ok(Box::new(RecordingScene {
                id,
                log: Rc::clone(&log),
            }))
        })
    }

    fn press(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key }
    }

    #[test]
    fn starts_running_in_main_menu() {
        let runtime = test_runtime();
        assert!(runtime.is_running());
        assert_eq!(runtime.current_scene(), SceneId::MainMenu);
    }

    #[test]
    fn stopped_runtime_never_processes_a_frame() {
        let mut runtime = test_runtime();
        runtime.request_quit();

        let mut frame = RenderFrame::new(800, 600);
        assert!(!runtime.frame(&mut frame));
        assert!(
            frame.commands().is_empty(),
            "no draw commands may be emitted after the run flag clears"
        );
    }

    #[test]
    fn input_after_stop_is_dropped() {
        let mut runtime = test_runtime();
        runtime.request_quit();
        assert!(!runtime.handle_input(&press(KeyCode::Enter)));
    }

    #[test]
    fn confirming_play_switches_to_gameplay() {
        let mut runtime = test_runtime();

        // Play is the first main-menu entry.
        assert!(runtime.handle_input(&press(KeyCode::Enter)));

        let mut frame = RenderFrame::new(800, 600);
        assert!(runtime.frame(&mut frame));
        assert_eq!(runtime.current_scene(), SceneId::Gameplay);
    }

    #[test]
    fn escape_on_root_menu_quits() {
        let mut runtime = test_runtime();

        assert!(runtime.handle_input(&press(KeyCode::Escape)));

        let mut frame = RenderFrame::new(800, 600);
        assert!(!runtime.frame(&mut frame), "quit request must stop the frame");
        assert!(!runtime.is_running());
        assert!(frame.commands().is_empty());
    }

    #[test]
    fn shutdown_exits_the_active_scene_after_an_abrupt_stop() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut runtime = Runtime::with_factory(
            Config::default(),
            Translator::identity(),
            recording_factory(Rc::clone(&log)),
        )
        .unwrap();

        // The main loop can end without a clean quit path (e.g. the
        // windowing backend fails mid-run); shutdown must still exit the
        // active scene exactly once.
        runtime.request_quit();
        runtime.shutdown();

        assert_eq!(
            *log.borrow(),
            vec!["construct MainMenu", "exit MainMenu"]
        );
    }

    #[test]
    fn frame_renders_into_the_provided_frame() {
        let mut runtime = test_runtime();
        let mut frame = RenderFrame::new(800, 600);

        assert!(runtime.frame(&mut frame));
        assert!(
            !frame.commands().is_empty(),
            "the main menu emits at least a clear command"
        );
    }
}
