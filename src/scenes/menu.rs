//=========================================================================
// Menu Scene
//=========================================================================
//
// The menu family: main menu, settings, language picker and resolution
// picker, modeled as pages of one scene.
//
// State machine:
// ```text
//   Main ──Options──► Settings ──Language───► LanguagePicker
//    │                   │      ──Resolution─► ResolutionPicker
//    │ Escape: quit      │ Escape: back to Main
//    │ Play: Gameplay    │                    pickers: Escape back
//    │ Quit: quit        │                    to Settings
// ```
//
// Up/Down move the selection with wrap-around in both directions;
// Enter/Space confirm; Escape cancels to the parent page (quit on the
// root page). Selection state is per page and resets to the first entry
// on every page change.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, KeyCode};
use crate::core::render::{Color, RenderFrame};
use crate::core::runtime::GameContext;
use crate::core::scene::{Scene, SceneId, SceneRequest};
use crate::i18n::{keys, Translator};

//=== Constants ===========================================================

const BACKGROUND: Color = Color::rgb(0.12, 0.12, 0.2);

const TITLE_Y: f32 = 100.0;
const TITLE_SIZE: f32 = 48.0;
const ITEM_BASE_Y: f32 = 200.0;
const ITEM_STEP_Y: f32 = 60.0;
const ITEM_SIZE: f32 = 32.0;
const STATUS_SIZE: f32 = 24.0;

/// Language picker entries: display label and language code.
const LANGUAGE_OPTIONS: [(&str, &str); 4] = [
    ("English", "en"),
    ("Português", "pt"),
    ("Español", "es"),
    ("Français", "fr"),
];

/// Resolution picker entries: display label, width, height.
const RESOLUTION_OPTIONS: [(&str, u32, u32); 5] = [
    ("800x600", 800, 600),
    ("1024x768", 1024, 768),
    ("1280x720", 1280, 720),
    ("1366x768", 1366, 768),
    ("1920x1080", 1920, 1080),
];

//=== Menu Pages ==========================================================

/// The pages of the menu state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuPage {
    Main,
    Settings,
    LanguagePicker,
    ResolutionPicker,
}

impl MenuPage {
    /// Parent page for cancel navigation; `None` on the root.
    fn parent(self) -> Option<Self> {
        match self {
            Self::Main => None,
            Self::Settings => Some(Self::Main),
            Self::LanguagePicker | Self::ResolutionPicker => Some(Self::Settings),
        }
    }
}

//=== Menu Items ==========================================================

/// One selectable entry: a translation key resolved at render time, or a
/// literal label shown verbatim (language names, resolutions).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Key(&'static str),
    Literal(&'static str),
}

impl MenuItem {
    fn label(self, translator: &Translator) -> String {
        match self {
            Self::Key(key) => translator.resolve(key),
            Self::Literal(text) => text.to_owned(),
        }
    }
}

//=== Menu Model ==========================================================

/// Ordered item list with a selection cursor.
///
/// The cursor is always a valid index; navigation wraps in both
/// directions.
#[derive(Debug)]
pub struct MenuModel {
    items: Vec<MenuItem>,
    selected: usize,
}

impl MenuModel {
    fn for_page(page: MenuPage) -> Self {
        let items = match page {
            MenuPage::Main => vec![
                MenuItem::Key(keys::BUTTON_PLAY),
                MenuItem::Key(keys::BUTTON_OPTIONS),
                MenuItem::Key(keys::BUTTON_QUIT),
            ],
            MenuPage::Settings => vec![
                MenuItem::Key(keys::SETTINGS_LANGUAGE),
                MenuItem::Key(keys::SETTINGS_RESOLUTION),
                MenuItem::Key(keys::SETTINGS_BACK),
            ],
            MenuPage::LanguagePicker => LANGUAGE_OPTIONS
                .iter()
                .copied()
                .map(|(label, _)| MenuItem::Literal(label))
                .collect(),
            MenuPage::ResolutionPicker => RESOLUTION_OPTIONS
                .iter()
                .copied()
                .map(|(label, _, _)| MenuItem::Literal(label))
                .collect(),
        };

        Self { items, selected: 0 }
    }

    /// Moves the cursor by `delta`, wrapping around both ends.
    pub fn move_by(&mut self, delta: isize) {
        let len = self.items.len() as isize;
        self.selected = (self.selected as isize + delta).rem_euclid(len) as usize;
    }

    /// The current cursor position.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the model has no entries. Never true for menu pages.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

//=== Menu Scene ==========================================================

/// The menu-family scene.
///
/// Selection state lives only as long as the scene: a transition away
/// and back starts fresh on the first entry.
pub struct MenuScene {
    page: MenuPage,
    model: MenuModel,
    /// Transient notice shown under the items (e.g. a failed language
    /// switch). Cleared on page change.
    status: Option<String>,
}

impl MenuScene {
    /// Creates the scene opened on the given page.
    pub fn new(page: MenuPage) -> Self {
        Self {
            page,
            model: MenuModel::for_page(page),
            status: None,
        }
    }

    /// The page currently shown.
    pub fn page(&self) -> MenuPage {
        self.page
    }

    /// Selection model, exposed for inspection.
    pub fn model(&self) -> &MenuModel {
        &self.model
    }

    //--- Navigation -------------------------------------------------------

    fn go_to(&mut self, page: MenuPage) {
        self.page = page;
        self.model = MenuModel::for_page(page);
        self.status = None;
    }

    fn cancel(&mut self, context: &mut GameContext) -> bool {
        match self.page.parent() {
            Some(parent) => {
                self.go_to(parent);
                true
            }
            None => {
                // Root page: cancel means quit, matching the original
                // engine's escape handling while in the menu.
                context.requests.push(SceneRequest::Quit);
                true
            }
        }
    }

    fn confirm(&mut self, context: &mut GameContext) {
        match (self.page, self.model.selected()) {
            //--- Main ----------------------------------------------------
            (MenuPage::Main, 0) => {
                info!(target: "scene", "Starting game");
                context.requests.push(SceneRequest::Switch(SceneId::Gameplay));
            }
            (MenuPage::Main, 1) => self.go_to(MenuPage::Settings),
            (MenuPage::Main, 2) => {
                info!(target: "scene", "Quitting from main menu");
                context.requests.push(SceneRequest::Quit);
            }

            //--- Settings ------------------------------------------------
            (MenuPage::Settings, 0) => self.go_to(MenuPage::LanguagePicker),
            (MenuPage::Settings, 1) => self.go_to(MenuPage::ResolutionPicker),
            (MenuPage::Settings, 2) => self.go_to(MenuPage::Main),

            //--- Pickers -------------------------------------------------
            (MenuPage::LanguagePicker, index) => self.select_language(index, context),
            (MenuPage::ResolutionPicker, index) => self.select_resolution(index, context),

            // The cursor is always in range; remaining indices have no
            // action.
            _ => {}
        }
    }

    fn select_language(&mut self, index: usize, context: &mut GameContext) {
        let (label, code) = LANGUAGE_OPTIONS[index];

        match context.translator.set_language(code) {
            Ok(()) => {
                info!(target: "scene", "Language set to {} ({})", label, code);
                context.config.language_override = Some(code.to_owned());
                self.go_to(MenuPage::Settings);
            }
            Err(err) => {
                warn!(target: "scene", "Language '{}' unavailable: {}", code, err);
                self.status = Some(
                    context
                        .translator
                        .resolve(keys::MESSAGE_LANGUAGE_UNAVAILABLE),
                );
            }
        }
    }

    fn select_resolution(&mut self, index: usize, context: &mut GameContext) {
        let (label, width, height) = RESOLUTION_OPTIONS[index];

        context.config.set_resolution(width, height);
        // The live window is not recreated; the new size applies on the
        // next engine start.
        info!(target: "scene", "Resolution changed to {}", label);
        self.go_to(MenuPage::Settings);
    }
}

//--- Scene Implementation ------------------------------------------------

impl Scene for MenuScene {
    fn render(&self, context: &GameContext, frame: &mut RenderFrame) {
        frame.clear(BACKGROUND);

        let (width, _) = frame.viewport();
        let center = width as f32 / 2.0;

        let title = context.translator.resolve(keys::TITLE_MAIN_MENU);
        frame.text(title, center, TITLE_Y, TITLE_SIZE, true);

        for (index, item) in self.model.items.iter().enumerate() {
            let text = item.label(&context.translator);
            let y = ITEM_BASE_Y + index as f32 * ITEM_STEP_Y;

            if index == self.model.selected() {
                frame.text(format!("> {text}"), center - 20.0, y, ITEM_SIZE, false);
            } else {
                frame.text(text, center, y, ITEM_SIZE, true);
            }
        }

        if let Some(status) = &self.status {
            let y = ITEM_BASE_Y + self.model.len() as f32 * ITEM_STEP_Y + 40.0;
            frame.text(status.clone(), center, y, STATUS_SIZE, true);
        }
    }

    fn handle_input(&mut self, event: &InputEvent, context: &mut GameContext) -> bool {
        let InputEvent::KeyDown { key } = event else {
            return false;
        };

        match key {
            KeyCode::ArrowUp => {
                self.model.move_by(-1);
                true
            }
            KeyCode::ArrowDown => {
                self.model.move_by(1);
                true
            }
            KeyCode::Enter | KeyCode::Space => {
                self.confirm(context);
                true
            }
            KeyCode::Escape => self.cancel(context),
            _ => false,
        }
    }

    fn on_exit(&mut self, _context: &mut GameContext) {
        debug!(target: "scene", "Menu scene released");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
