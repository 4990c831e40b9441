//=========================================================================
// Render Frame
//=========================================================================
//
// Draw-command list that scenes render into.
//
// Scenes never talk to the graphics API. Each frame they append commands
// to a `RenderFrame`; the platform layer consumes the commands when the
// frame is presented. Text rendering is a placeholder for now: the
// display backend logs the text it would draw.
//
// Flow:
//   Scene::render() → RenderFrame → Platform::present()
//
//=========================================================================

//=== Color ===============================================================

/// Normalized RGBA color (components in `[0.0, 1.0]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Color from RGBA components.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

//=== DrawCommand =========================================================

/// A single drawing operation emitted by a scene.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole viewport with a color.
    Clear(Color),

    /// Draw a text string.
    ///
    /// Coordinates are in screen space (pixels, top-left origin).
    /// `centered` requests horizontal centering on `x`.
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        centered: bool,
    },
}

//=== RenderFrame =========================================================

/// Accumulates draw commands for a single frame.
///
/// Created by the engine loop each frame with the current viewport
/// dimensions, filled by the active scene, drained by the display
/// backend on present.
#[derive(Debug)]
pub struct RenderFrame {
    viewport: (u32, u32),
    commands: Vec<DrawCommand>,
}

impl RenderFrame {
    /// Creates an empty frame for the given viewport dimensions.
    pub fn new(viewport_width: u32, viewport_height: u32) -> Self {
        Self {
            viewport: (viewport_width, viewport_height),
            commands: Vec::new(),
        }
    }

    /// Viewport dimensions in pixels (width, height).
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Appends a clear command.
    pub fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    /// Appends a text command.
    pub fn text(&mut self, text: impl Into<String>, x: f32, y: f32, size: f32, centered: bool) {
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            x,
            y,
            size,
            centered,
        });
    }

    /// The commands accumulated so far, in emission order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Takes all commands out of the frame, leaving it empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_preserve_emission_order() {
        let mut frame = RenderFrame::new(800, 600);
        frame.clear(Color::rgb(0.1, 0.1, 0.2));
        frame.text("hello", 400.0, 100.0, 48.0, true);

        assert_eq!(frame.viewport(), (800, 600));
        assert_eq!(frame.commands().len(), 2);
        assert!(matches!(frame.commands()[0], DrawCommand::Clear(_)));
        assert!(matches!(frame.commands()[1], DrawCommand::Text { .. }));
    }

    #[test]
    fn take_commands_empties_the_frame() {
        let mut frame = RenderFrame::new(640, 480);
        frame.clear(Color::rgba(0.2, 0.2, 0.2, 0.8));

        let taken = frame.take_commands();
        assert_eq!(taken.len(), 1);
        assert!(frame.commands().is_empty());
    }
}
