//=========================================================================
// Engine Configuration
//=========================================================================
//
// Startup configuration for window creation and language selection.
//
// Supplied once at process start; only the resolution and the language
// override are mutated afterwards (by the settings menu). A resolution
// change does not recreate the window yet, it only updates the stored
// dimensions for the next session.
//
//=========================================================================

//=== Config ==============================================================

/// Window and localization settings supplied at engine construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Title shown in the OS window decoration.
    pub window_title: String,

    /// Window width in logical pixels.
    pub window_width: u32,

    /// Window height in logical pixels.
    pub window_height: u32,

    /// Whether to create the window borderless-fullscreen.
    pub fullscreen: bool,

    /// Explicit language code. `None` means auto-detect from the
    /// environment at startup.
    pub language_override: Option<String>,
}

impl Config {
    /// Updates the stored window dimensions.
    ///
    /// Called by the resolution picker. The live window is not resized;
    /// the new dimensions take effect on the next engine start.
    pub fn set_resolution(&mut self, width: u32, height: u32) {
        self.window_width = width;
        self.window_height = height;
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_title: String::from("Arclight"),
            window_width: 800,
            window_height: 600,
            fullscreen: false,
            language_override: None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
