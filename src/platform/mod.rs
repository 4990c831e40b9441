//=========================================================================
// Platform Subsystem
//
// Bridges winit (OS-level events) with the frame runtime.
//
// Architecture:
// ```text
//  Main Thread (the only thread):
//  ┌──────────────────────────────┐
//  │  winit Event Loop            │
//  │   ↓                          │
//  │  event_mapper                │
//  │   ├─ KeyboardInput → event   │──► Runtime::handle_input()
//  │   ├─ CloseRequested          │──► Runtime::request_quit()
//  │   └─ Resized → viewport      │    (engine-level, not scene-routed)
//  │   ↓                          │
//  │  RedrawRequested             │──► Runtime::frame() → present()
//  │   ↓                          │
//  │  ControlFlow::WaitUntil      │    advisory ~16 ms pacing
//  └──────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **Single thread**: window, context and all scene state live on the
//   thread that created them (a platform requirement of the windowing
//   collaborator); there is no parallel scene or render work
// - **Advisory pacing**: `WaitUntil(last + FRAME_INTERVAL)` bounds the
//   iteration rate without any hard real-time guarantee
// - **Placeholder presentation**: text draw commands are logged; real
//   font rendering is an external collaborator not wired up yet
// - **Lazy window**: created in `resumed()` (mobile compatibility)
//
//=========================================================================

//=== Submodules ==========================================================

mod event_mapper;

//=== External Crates =====================================================

use std::time::{Duration, Instant};

use log::{debug, error, info, trace};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow},
    window::{Fullscreen, Window, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::core::render::{DrawCommand, RenderFrame};
use crate::core::runtime::Runtime;
use event_mapper::map_key_event;

//=== Constants ===========================================================

/// Target frame interval (~60 FPS). Advisory, not a hard guarantee.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

//=== Platform ============================================================

/// Window manager and display backend.
///
/// Owns the frame runtime and drives it from the winit event loop. The
/// window is created lazily in `resumed()` from the runtime's config and
/// released by RAII when the loop exits.
pub(crate) struct Platform {
    /// The frame runtime this platform drives.
    pub(crate) runtime: Runtime,

    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    /// Rendering viewport in physical pixels; tracks window resizes.
    viewport: (u32, u32),

    /// Deadline for the next frame.
    next_frame: Instant,

    /// Window creation failure, surfaced by the engine after the loop
    /// exits.
    pub(crate) window_error: Option<winit::error::OsError>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates a platform instance around a runtime.
    ///
    /// Does not create the window yet; that happens lazily in
    /// `resumed()`.
    pub(crate) fn new(runtime: Runtime) -> Self {
        let config = &runtime.context().config;
        let viewport = (config.window_width, config.window_height);

        info!(target: "platform", "Platform subsystem initialized");
        Self {
            runtime,
            window: None,
            viewport,
            next_frame: Instant::now(),
            window_error: None,
        }
    }

    //--- Frame Stepping ---------------------------------------------------

    /// Runs one frame: update, render, present, and schedule the next
    /// wakeup. Exits the event loop once the runtime stops.
    fn step_frame(&mut self, event_loop: &ActiveEventLoop) {
        let (width, height) = self.viewport;
        let mut frame = RenderFrame::new(width, height);

        if !self.runtime.frame(&mut frame) {
            debug!(target: "platform", "Runtime stopped, exiting event loop");
            event_loop.exit();
            return;
        }

        self.present(frame);

        self.next_frame = Instant::now() + FRAME_INTERVAL;
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }

    /// Consumes the frame's draw commands.
    ///
    /// Text rendering is a placeholder: the commands are logged, the way
    /// a real backend would submit them to the graphics API before the
    /// buffer swap.
    fn present(&mut self, mut frame: RenderFrame) {
        for command in frame.take_commands() {
            match command {
                DrawCommand::Clear(color) => {
                    trace!(target: "platform::render", "Clear {:?}", color);
                }
                DrawCommand::Text { text, x, y, .. } => {
                    debug!(
                        target: "platform::render",
                        "Would draw text: {} at ({}, {})", text, x, y
                    );
                }
            }
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when the app becomes active (startup or mobile resume).
    ///
    /// Creates the window from the engine configuration if it doesn't
    /// exist yet. A creation failure is fatal: the error is stashed for
    /// the engine facade and the loop exits.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let config = &self.runtime.context().config;
        let mut attrs = WindowAttributes::default()
            .with_title(config.window_title.clone())
            .with_inner_size(LogicalSize::new(config.window_width, config.window_height));
        if config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(err) => {
                error!(target: "platform", "Window creation failed: {}", err);
                self.window_error = Some(err);
                self.runtime.request_quit();
                event_loop.exit();
            }
        }
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.runtime.request_quit();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                // The only engine-level reaction to a window event that
                // is not routed through the scene manager.
                info!(target: "platform", "Window resized: {}x{}", size.width, size.height);
                self.viewport = (size.width, size.height);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match map_key_event(&key_event) {
                    Some(input) => {
                        if !self.runtime.handle_input(&input) {
                            trace!(target: "platform::input", "Event not consumed: {:?}", input);
                        }
                    }
                    None => {
                        trace!(target: "platform::input", "Unmapped key ignored");
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                self.step_frame(event_loop);
            }

            _ => {
                // Ignore: Focused, Moved, etc.
            }
        }
    }

    /// Requests the next frame once the pacing deadline has passed.
    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.runtime.is_running() {
            event_loop.exit();
            return;
        }

        if let Some(window) = &self.window {
            if Instant::now() >= self.next_frame {
                window.request_redraw();
            }
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
    use crate::core::render::Color;
    use crate::i18n::Translator;

    fn test_platform() -> Platform {
        let runtime = Runtime::new(Config::default(), Translator::identity()).unwrap();
        Platform::new(runtime)
    }

    #[test]
    fn window_is_created_lazily() {
        let platform = test_platform();
        assert!(platform.window().is_none(), "Window should be created lazily");
    }

    #[test]
    fn viewport_starts_from_config_dimensions() {
        let platform = test_platform();
        assert_eq!(platform.viewport, (800, 600));
    }

    #[test]
    fn present_drains_all_commands() {
        let mut platform = test_platform();

        let mut frame = RenderFrame::new(800, 600);
        frame.clear(Color::rgb(0.1, 0.1, 0.2));
        frame.text("hello", 400.0, 100.0, 48.0, true);

        platform.present(frame);
    }
}
