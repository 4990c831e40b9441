//=========================================================================
// Input Subsystem
//=========================================================================
//
// Platform-independent input event types.
//
// The platform layer converts windowing-library events into these types
// before they reach the scene manager, so scene code never depends on
// winit directly.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode};
