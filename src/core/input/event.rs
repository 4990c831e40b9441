//=========================================================================
// Input Event Types
//
// Defines the internal representation of low-level input events.
//
// This module abstracts away platform-specific input (e.g. winit, SDL)
// into a unified, engine-friendly format used by the scenes.
//
// Responsibilities:
// - Represent keyboard input in a stable, portable way
// - Cover exactly the keys the scaffold consumes (menu navigation,
//   confirm, cancel, pause); unmapped keys never reach this type
//
// Event Flow:
// ```text
// Platform Layer (winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    SceneManager → active Scene
// ```
//
//=========================================================================

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// Only the keys the engine reacts to are mapped; the platform layer
/// drops everything else before conversion, so scenes never see an
/// unknown key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Arrow Keys -------------------------------------------------------

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    //--- Special Keys -----------------------------------------------------

    /// Return/Enter key (menu confirm).
    Enter,

    /// Spacebar (menu confirm, alternative binding).
    Space,

    /// Escape key (menu cancel / back).
    Escape,

    /// The P key (pause toggle in gameplay).
    KeyP,
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// Malformed or unexpected events never reach this type; the platform
/// layer drops them before conversion. Scenes return whether they
/// consumed an event, and unconsumed events are simply ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Key pressed down. Key repeats are delivered as repeated presses.
    KeyDown { key: KeyCode },

    /// Key released.
    KeyUp { key: KeyCode },
}

impl InputEvent {
    /// Returns the key carried by this event.
    pub fn key(&self) -> KeyCode {
        match self {
            Self::KeyDown { key } | Self::KeyUp { key } => *key,
        }
    }

    /// Whether this is a key-press event.
    pub fn is_pressed(&self) -> bool {
        matches!(self, Self::KeyDown { .. })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_accessor_matches_payload() {
        let down = InputEvent::KeyDown { key: KeyCode::Enter };
        let up = InputEvent::KeyUp { key: KeyCode::Escape };

        assert_eq!(down.key(), KeyCode::Enter);
        assert_eq!(up.key(), KeyCode::Escape);
    }

    #[test]
    fn only_key_down_counts_as_pressed() {
        assert!(InputEvent::KeyDown { key: KeyCode::Space }.is_pressed());
        assert!(!InputEvent::KeyUp { key: KeyCode::Space }.is_pressed());
    }
}
