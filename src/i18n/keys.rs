//=========================================================================
// Translation Keys
//=========================================================================
//
// Key constants for code reference. The asset files are the source of
// truth for the localized strings.
//
//=========================================================================

//--- User Interface ------------------------------------------------------

pub const TITLE_WELCOME: &str = "title.welcome";
pub const TITLE_MAIN_MENU: &str = "title.main_menu";
pub const BUTTON_PLAY: &str = "button.play";
pub const BUTTON_OPTIONS: &str = "button.options";
pub const BUTTON_QUIT: &str = "button.quit";
pub const LABEL_LOADING: &str = "label.loading";
pub const LABEL_SCORE: &str = "label.score";
pub const LABEL_LEVEL: &str = "label.level";

//--- Settings ------------------------------------------------------------

pub const SETTINGS_LANGUAGE: &str = "settings.language";
pub const SETTINGS_RESOLUTION: &str = "settings.resolution";
pub const SETTINGS_BACK: &str = "settings.back";

//--- Game Messages -------------------------------------------------------

pub const MESSAGE_GAME_START: &str = "message.game_start";
pub const MESSAGE_GAME_OVER: &str = "message.game_over";
pub const MESSAGE_PAUSED: &str = "message.paused";
pub const MESSAGE_LANGUAGE_UNAVAILABLE: &str = "message.language_unavailable";
