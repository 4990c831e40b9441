//=========================================================================
// Scene Implementations
//=========================================================================
//
// The concrete scene set and the factory the scene manager constructs
// them through.
//
// Scenes:
//   MenuScene       menu family (main / settings / language / resolution)
//   GameplayScene   placeholder, clears to its own color
//   PauseScene      placeholder, clears to its own color
//
//=========================================================================

//=== Module Declarations =================================================

mod gameplay;
mod menu;
mod pause;

//=== Public API ==========================================================

pub use gameplay::GameplayScene;
pub use menu::{MenuModel, MenuPage, MenuScene};
pub use pause::PauseScene;

//=== Internal Dependencies ===============================================

use crate::core::scene::{Scene, SceneFactory, SceneId};

//=== Default Factory =====================================================

/// Builds the default scene for each identifier.
///
/// The menu-family identifiers all construct the menu scene, opened on
/// the matching page.
pub fn default_factory() -> SceneFactory {
    Box::new(|id, _context| {
        let scene: Box<dyn Scene> = match id {
            SceneId::MainMenu => Box::new(MenuScene::new(MenuPage::Main)),
            SceneId::Settings => Box::new(MenuScene::new(MenuPage::Settings)),
            SceneId::LanguagePicker => Box::new(MenuScene::new(MenuPage::LanguagePicker)),
            SceneId::ResolutionPicker => Box::new(MenuScene::new(MenuPage::ResolutionPicker)),
            SceneId::Gameplay => Box::new(GameplayScene::new()),
            SceneId::Pause => Box::new(PauseScene::new()),
        };
        Ok(scene)
    })
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::core::runtime::GameContext;
    use crate::i18n::Translator;

    #[test]
    fn factory_builds_every_scene_id() {
        let factory = default_factory();
        let mut context = GameContext::new(Config::default(), Translator::identity());

        for id in [
            SceneId::MainMenu,
            SceneId::Settings,
            SceneId::LanguagePicker,
            SceneId::ResolutionPicker,
            SceneId::Gameplay,
            SceneId::Pause,
        ] {
            assert!(factory(id, &mut context).is_ok(), "factory failed for {id:?}");
        }
    }
}
