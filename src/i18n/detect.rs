//=========================================================================
// System Language Detection
//=========================================================================
//
// Derives a supported language code from the locale environment.
//
// A small ordered set of locale variables is scanned; the first value
// containing a recognized two-letter code wins. Unrecognized or absent
// values fall through to the default language.
//
//=========================================================================

use super::DEFAULT_LANGUAGE;

//=== Constants ===========================================================

/// Locale variables in preference order.
const LOCALE_ENV_VARS: [&str; 4] = ["LANG", "LC_ALL", "LC_MESSAGES", "LANGUAGE"];

/// Two-letter codes the asset store may carry besides the default.
const KNOWN_LANGUAGES: [&str; 9] = ["pt", "es", "fr", "de", "it", "ru", "zh", "ja", "ko"];

//=== Detection ===========================================================

/// Detects the preferred language from the process environment.
///
/// Never fails; returns the default language when nothing matches.
pub fn detect_system_language() -> &'static str {
    detect_from(
        LOCALE_ENV_VARS
            .iter()
            .map(|variable| std::env::var(variable).ok()),
    )
}

/// Detection core, separated from the environment for testability.
fn detect_from<I>(values: I) -> &'static str
where
    I: IntoIterator<Item = Option<String>>,
{
    values
        .into_iter()
        .flatten()
        .find_map(|value| match_language(&value))
        .unwrap_or(DEFAULT_LANGUAGE)
}

/// Matches a locale string like `pt_BR.UTF-8` against the known codes.
fn match_language(value: &str) -> Option<&'static str> {
    KNOWN_LANGUAGES
        .iter()
        .copied()
        .find(|language| value.contains(language))
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn values(raw: &[Option<&str>]) -> Vec<Option<String>> {
        raw.iter().map(|value| value.map(String::from)).collect()
    }

    #[test]
    fn first_recognized_value_wins() {
        let detected = detect_from(values(&[
            Some("pt_BR.UTF-8"),
            Some("es_ES.UTF-8"),
        ]));
        assert_eq!(detected, "pt");
    }

    #[test]
    fn absent_values_are_skipped() {
        let detected = detect_from(values(&[None, Some("fr_FR.UTF-8")]));
        assert_eq!(detected, "fr");
    }

    #[test]
    fn unrecognized_locale_falls_through_to_default() {
        let detected = detect_from(values(&[Some("en_US.UTF-8"), Some("C")]));
        assert_eq!(detected, DEFAULT_LANGUAGE);
    }

    #[test]
    fn empty_environment_yields_default() {
        assert_eq!(detect_from(values(&[])), DEFAULT_LANGUAGE);
    }
}
