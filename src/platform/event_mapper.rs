//=========================================================================
// Event Mapper
//=========================================================================
//
// Converts winit keyboard events into engine input events.
//
// Only the keys the scaffold consumes are mapped; everything else is
// dropped here so scene code never sees unidentified input.
//
//=========================================================================

//=== External Crates =====================================================

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

//=== Internal Imports ====================================================

use crate::core::input::{InputEvent, KeyCode};

//=== Conversion ==========================================================

/// Converts a winit key event, or `None` for unmapped keys.
pub(crate) fn map_key_event(event: &KeyEvent) -> Option<InputEvent> {
    let key = match event.physical_key {
        PhysicalKey::Code(code) => map_key_code(code)?,
        PhysicalKey::Unidentified(_) => return None,
    };

    Some(match event.state {
        ElementState::Pressed => InputEvent::KeyDown { key },
        ElementState::Released => InputEvent::KeyUp { key },
    })
}

/// Physical key translation, winit → engine.
pub(crate) fn map_key_code(code: WinitKeyCode) -> Option<KeyCode> {
    Some(match code {
        WinitKeyCode::ArrowUp => KeyCode::ArrowUp,
        WinitKeyCode::ArrowDown => KeyCode::ArrowDown,
        WinitKeyCode::ArrowLeft => KeyCode::ArrowLeft,
        WinitKeyCode::ArrowRight => KeyCode::ArrowRight,
        WinitKeyCode::Enter => KeyCode::Enter,
        WinitKeyCode::Space => KeyCode::Space,
        WinitKeyCode::Escape => KeyCode::Escape,
        WinitKeyCode::KeyP => KeyCode::KeyP,
        _ => return None,
    })
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_keys_are_mapped() {
        assert_eq!(map_key_code(WinitKeyCode::ArrowUp), Some(KeyCode::ArrowUp));
        assert_eq!(map_key_code(WinitKeyCode::ArrowDown), Some(KeyCode::ArrowDown));
        assert_eq!(map_key_code(WinitKeyCode::Enter), Some(KeyCode::Enter));
        assert_eq!(map_key_code(WinitKeyCode::Space), Some(KeyCode::Space));
        assert_eq!(map_key_code(WinitKeyCode::Escape), Some(KeyCode::Escape));
    }

    #[test]
    fn unmapped_keys_are_dropped() {
        assert_eq!(map_key_code(WinitKeyCode::F24), None);
        assert_eq!(map_key_code(WinitKeyCode::NumLock), None);
    }
}
