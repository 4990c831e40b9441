//=========================================================================
// Translation Service
//=========================================================================
//
// Key → string lookup with language fallback.
//
// Architecture:
// ```text
//   Translator (tagged variant, chosen once at construction)
//     ├─ Catalog   RwLock'd table store, lazy per-language load
//     └─ Identity  every key resolves to itself (last-resort)
//
//   Lookup chain: current language → default language → key verbatim
// ```
//
// Construction never fails: an explicit or detected language that cannot
// be loaded falls back to the default language, and if even the default
// table is unavailable the identity translator is returned. Explicit
// language switches after construction do surface their errors so the
// UI can react.
//
// Asset store: one flat JSON object per language under the asset
// directory, named by language code (`en.json`, `pt.json`, ...).
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::PathBuf;

use log::{info, warn};
use thiserror::Error;

//=== Module Declarations =================================================

mod catalog;
mod detect;
pub mod keys;

pub use catalog::CatalogTranslator;
pub use detect::detect_system_language;

//=== Constants ===========================================================

/// The fixed fallback language. Always attempted when the requested or
/// detected language is unavailable.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Default location of the per-language translation files.
pub const ASSET_DIR: &str = "assets/i18n";

//=== LoadError ===========================================================

/// Failure to load a specific language table.
///
/// Recoverable: during construction it triggers the fallback chain, and
/// an explicit `set_language` reports it to the caller while leaving the
/// active language unchanged.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("language file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read language file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed language file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

//=== Translator ==========================================================

/// The runtime translation object.
///
/// A tagged variant selected once at construction; call sites depend
/// only on the methods here, never on which variant is active.
pub enum Translator {
    /// Full translator backed by loaded language tables.
    Catalog(CatalogTranslator),

    /// Degenerate translator: every key maps to itself.
    Identity,
}

impl Translator {
    //--- Construction -----------------------------------------------------

    /// Creates a translator for the language detected from the
    /// environment, falling back per the chain above.
    pub fn auto(asset_dir: impl Into<PathBuf>) -> Self {
        let detected = detect_system_language();
        info!(target: "i18n", "System language detected: {}", detected);
        Self::bootstrap(asset_dir.into(), detected)
    }

    /// Creates a translator for an explicit language, falling back per
    /// the chain above.
    pub fn with_language(asset_dir: impl Into<PathBuf>, language: &str) -> Self {
        Self::bootstrap(asset_dir.into(), language)
    }

    /// Creates the identity translator directly.
    pub fn identity() -> Self {
        Self::Identity
    }

    fn bootstrap(asset_dir: PathBuf, preferred: &str) -> Self {
        match CatalogTranslator::load(asset_dir.clone(), preferred) {
            Ok(catalog) => return Self::Catalog(catalog),
            Err(err) => {
                warn!(
                    target: "i18n",
                    "Language '{}' unavailable: {}", preferred, err
                );
            }
        }

        if preferred != DEFAULT_LANGUAGE {
            match CatalogTranslator::load(asset_dir, DEFAULT_LANGUAGE) {
                Ok(catalog) => {
                    info!(target: "i18n", "Using fallback language: {}", DEFAULT_LANGUAGE);
                    return Self::Catalog(catalog);
                }
                Err(err) => {
                    warn!(
                        target: "i18n",
                        "Fallback language '{}' unavailable: {}", DEFAULT_LANGUAGE, err
                    );
                }
            }
        }

        warn!(target: "i18n", "No translation tables available, using identity translator");
        Self::Identity
    }

    //--- Lookup -----------------------------------------------------------

    /// Resolves a key to its localized string.
    ///
    /// Falls back to the default language's table on a miss, then to the
    /// key itself. Never fails.
    pub fn resolve(&self, key: &str) -> String {
        match self {
            Self::Catalog(catalog) => catalog.resolve(key),
            Self::Identity => key.to_owned(),
        }
    }

    /// Resolves a key as a template and substitutes `args` positionally.
    ///
    /// Placeholders are `{}` (sequential) or `{0}`-style (indexed).
    /// Malformed or out-of-range placeholders are left in place rather
    /// than failing.
    pub fn resolve_formatted(&self, key: &str, args: &[&str]) -> String {
        substitute(&self.resolve(key), args)
    }

    //--- Language Control -------------------------------------------------

    /// Switches the active language.
    ///
    /// A cached language switches immediately; otherwise the table is
    /// loaded from the asset store first. On failure the active language
    /// is left unchanged and the error is returned. The identity
    /// translator accepts any switch as a no-op.
    pub fn set_language(&self, language: &str) -> Result<(), LoadError> {
        match self {
            Self::Catalog(catalog) => catalog.set_language(language),
            Self::Identity => Ok(()),
        }
    }

    /// The active language code.
    pub fn language(&self) -> String {
        match self {
            Self::Catalog(catalog) => catalog.language(),
            Self::Identity => DEFAULT_LANGUAGE.to_owned(),
        }
    }

    /// Language codes with a loaded table, sorted.
    pub fn available_languages(&self) -> Vec<String> {
        match self {
            Self::Catalog(catalog) => catalog.available_languages(),
            Self::Identity => vec![DEFAULT_LANGUAGE.to_owned()],
        }
    }
}

//=== Template Substitution ===============================================

/// Best-effort positional substitution.
///
/// `{}` consumes the next argument, `{N}` picks by index, `{{` and `}}`
/// escape literal braces. Anything that does not resolve to an argument
/// is emitted verbatim.
fn substitute(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;
    let mut next_positional = 0;

    loop {
        let Some(brace) = rest.find(|c| c == '{' || c == '}') else {
            out.push_str(rest);
            return out;
        };
        out.push_str(&rest[..brace]);
        let tail = &rest[brace..];

        if let Some(stripped) = tail.strip_prefix("{{") {
            out.push('{');
            rest = stripped;
            continue;
        }
        if let Some(stripped) = tail.strip_prefix("}}") {
            out.push('}');
            rest = stripped;
            continue;
        }
        if let Some(stripped) = tail.strip_prefix('}') {
            // Stray closing brace: keep it.
            out.push('}');
            rest = stripped;
            continue;
        }

        let Some(close) = tail.find('}') else {
            out.push_str(tail);
            return out;
        };

        let spec = &tail[1..close];
        let index = if spec.is_empty() {
            let index = next_positional;
            next_positional += 1;
            Some(index)
        } else {
            spec.parse::<usize>().ok()
        };

        match index.and_then(|index| args.get(index)) {
            Some(arg) => out.push_str(arg),
            None => out.push_str(&tail[..=close]),
        }

        rest = &tail[close + 1..];
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn write_language(dir: &Path, language: &str, json: &str) {
        fs::write(dir.join(format!("{language}.json")), json).unwrap();
    }

    //--- Identity Fallback ------------------------------------------------

    #[test]
    fn identity_resolves_key_to_itself() {
        let translator = Translator::identity();
        assert_eq!(translator.resolve("button.play"), "button.play");
        assert_eq!(translator.language(), DEFAULT_LANGUAGE);
        assert_eq!(translator.available_languages(), vec![DEFAULT_LANGUAGE]);
    }

    #[test]
    fn identity_accepts_language_switches() {
        let translator = Translator::identity();
        assert!(translator.set_language("pt").is_ok());
        assert_eq!(translator.language(), DEFAULT_LANGUAGE);
    }

    #[test]
    fn missing_asset_dir_yields_identity_translator() {
        let translator = Translator::auto("/nonexistent/i18n");
        assert!(matches!(translator, Translator::Identity));
        assert_eq!(translator.resolve("any.key"), "any.key");
    }

    //--- Fallback Chain ---------------------------------------------------

    #[test]
    fn unsupported_language_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        write_language(dir.path(), "en", r#"{"button.play": "Play"}"#);

        let translator = Translator::with_language(dir.path(), "xx");

        assert_eq!(translator.language(), DEFAULT_LANGUAGE);
        assert_eq!(translator.resolve("button.play"), "Play");
    }

    #[test]
    fn explicit_language_is_used_when_available() {
        let dir = tempfile::tempdir().unwrap();
        write_language(dir.path(), "en", r#"{"button.play": "Play"}"#);
        write_language(dir.path(), "pt", r#"{"button.play": "Jogar"}"#);

        let translator = Translator::with_language(dir.path(), "pt");

        assert_eq!(translator.language(), "pt");
        assert_eq!(translator.resolve("button.play"), "Jogar");
    }

    #[test]
    fn miss_in_current_language_falls_back_to_default_table() {
        let dir = tempfile::tempdir().unwrap();
        write_language(dir.path(), "en", r#"{"button.play": "Play", "button.quit": "Quit"}"#);
        write_language(dir.path(), "pt", r#"{"button.play": "Jogar"}"#);

        let translator = Translator::with_language(dir.path(), "pt");

        assert_eq!(translator.resolve("button.quit"), "Quit");
        assert_eq!(translator.resolve("unknown.key"), "unknown.key");
    }

    //--- Substitution -----------------------------------------------------

    #[test]
    fn sequential_placeholders_consume_args_in_order() {
        assert_eq!(substitute("{} and {}", &["a", "b"]), "a and b");
    }

    #[test]
    fn indexed_placeholders_pick_by_position() {
        assert_eq!(substitute("{1} before {0}", &["a", "b"]), "b before a");
    }

    #[test]
    fn malformed_placeholders_are_kept_verbatim() {
        assert_eq!(substitute("score: {9}", &["a"]), "score: {9}");
        assert_eq!(substitute("open {brace", &[]), "open {brace");
        assert_eq!(substitute("{name}", &["a"]), "{name}");
    }

    #[test]
    fn doubled_brace_escapes_a_literal() {
        assert_eq!(substitute("{{}} {}", &["x"]), "{} x");
    }

    #[test]
    fn resolve_formatted_goes_through_the_lookup_chain() {
        let dir = tempfile::tempdir().unwrap();
        write_language(dir.path(), "en", r#"{"label.score": "Score: {}"}"#);

        let translator = Translator::with_language(dir.path(), "en");

        assert_eq!(translator.resolve_formatted("label.score", &["42"]), "Score: 42");
        // Unknown key: the key itself is the template.
        assert_eq!(translator.resolve_formatted("label.other", &["42"]), "label.other");
    }
}
