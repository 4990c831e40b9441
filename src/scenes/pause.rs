//=========================================================================
// Pause Scene
//=========================================================================
//
// Placeholder pause overlay. Clears to a translucent dark color, shows
// the paused message, and resumes gameplay on Escape or P.
//
//=========================================================================

use crate::core::input::{InputEvent, KeyCode};
use crate::core::render::{Color, RenderFrame};
use crate::core::runtime::GameContext;
use crate::core::scene::{Scene, SceneId, SceneRequest};
use crate::i18n::keys;

const BACKGROUND: Color = Color::rgba(0.2, 0.2, 0.2, 0.8);

/// Placeholder pause scene.
pub struct PauseScene;

impl PauseScene {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PauseScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for PauseScene {
    fn render(&self, context: &GameContext, frame: &mut RenderFrame) {
        frame.clear(BACKGROUND);

        let (width, height) = frame.viewport();
        let message = context.translator.resolve(keys::MESSAGE_PAUSED);
        frame.text(message, width as f32 / 2.0, height as f32 / 2.0, 32.0, true);
    }

    fn handle_input(&mut self, event: &InputEvent, context: &mut GameContext) -> bool {
        let InputEvent::KeyDown { key } = event else {
            return false;
        };

        match key {
            KeyCode::Escape | KeyCode::KeyP => {
                context.requests.push(SceneRequest::Switch(SceneId::Gameplay));
                true
            }
            _ => false,
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

    #[test]
    fn escape_resumes_gameplay() {
        let mut scene = PauseScene::new();
        let mut context = GameContext::new(Config::default(), Translator::identity());

        let event = InputEvent::KeyDown { key: KeyCode::Escape };
        assert!(scene.handle_input(&event, &mut context));
        assert_eq!(
            context.requests.take(),
            vec![SceneRequest::Switch(SceneId::Gameplay)]
        );
    }
}
