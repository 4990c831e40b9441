//=========================================================================
// Gameplay Scene
//=========================================================================
//
// Placeholder: no gameplay exists yet. Clears to its own color, shows
// the start message, and routes back to the menu (Escape) or into the
// pause scene (P).
//
//=========================================================================

use log::debug;

use crate::core::input::{InputEvent, KeyCode};
use crate::core::render::{Color, RenderFrame};
use crate::core::runtime::GameContext;
use crate::core::scene::{Scene, SceneId, SceneRequest};
use crate::i18n::keys;

const BACKGROUND: Color = Color::rgb(0.3, 0.5, 0.3);

/// Placeholder gameplay scene.
pub struct GameplayScene;

impl GameplayScene {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GameplayScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for GameplayScene {
    fn render(&self, context: &GameContext, frame: &mut RenderFrame) {
        frame.clear(BACKGROUND);

        let (width, height) = frame.viewport();
        let message = context.translator.resolve(keys::MESSAGE_GAME_START);
        frame.text(message, width as f32 / 2.0, height as f32 / 2.0, 32.0, true);
    }

    fn handle_input(&mut self, event: &InputEvent, context: &mut GameContext) -> bool {
        let InputEvent::KeyDown { key } = event else {
            return false;
        };

        match key {
            KeyCode::Escape => {
                debug!(target: "scene", "Returning to menu");
                context.requests.push(SceneRequest::Switch(SceneId::MainMenu));
                true
            }
            KeyCode::KeyP => {
                context.requests.push(SceneRequest::Switch(SceneId::Pause));
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
    use crate::core::render::DrawCommand;
    use crate::i18n::Translator;

    fn test_context() -> GameContext {
        GameContext::new(Config::default(), Translator::identity())
    }

    #[test]
    fn escape_returns_to_main_menu() {
        let mut scene = GameplayScene::new();
        let mut context = test_context();

        let event = InputEvent::KeyDown { key: KeyCode::Escape };
        assert!(scene.handle_input(&event, &mut context));
        assert_eq!(
            context.requests.take(),
            vec![SceneRequest::Switch(SceneId::MainMenu)]
        );
    }

    #[test]
    fn p_opens_the_pause_scene() {
        let mut scene = GameplayScene::new();
        let mut context = test_context();

        let event = InputEvent::KeyDown { key: KeyCode::KeyP };
        assert!(scene.handle_input(&event, &mut context));
        assert_eq!(
            context.requests.take(),
            vec![SceneRequest::Switch(SceneId::Pause)]
        );
    }

    #[test]
    fn render_starts_with_a_clear() {
        let scene = GameplayScene::new();
        let context = test_context();
        let mut frame = RenderFrame::new(800, 600);

        scene.render(&context, &mut frame);

        assert!(matches!(
            frame.commands().first(),
            Some(DrawCommand::Clear(color)) if *color == BACKGROUND
        ));
    }
}
