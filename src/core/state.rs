//=========================================================================
// Run State
//=========================================================================
//
// Top-level mutable engine state: the run flag and the identifier of the
// scene that is currently active.
//
// Owned exclusively by the frame runtime. Scenes never touch it directly;
// they queue requests that the runtime applies at the frame boundary.
// Once `running` is cleared it never becomes true again.
//
//=========================================================================

use crate::core::scene::SceneId;

//=== RunState ============================================================

/// The engine's top-level run flag and current scene identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunState {
    /// Whether the main loop should keep processing frames.
    ///
    /// `false` is terminal: no further frames are processed once cleared.
    pub running: bool,

    /// The scene currently active. Exactly one scene is active at a time.
    pub current: SceneId,
}

impl RunState {
    /// Creates the initial state: running, with the main menu active.
    pub fn new() -> Self {
        Self {
            running: true,
            current: SceneId::MainMenu,
        }
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_runs_in_main_menu() {
        let state = RunState::new();
        assert!(state.running);
        assert_eq!(state.current, SceneId::MainMenu);
    }
}
