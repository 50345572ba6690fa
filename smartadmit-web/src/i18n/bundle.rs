use once_cell::sync::Lazy;
use serde_json::{Map, Value};

pub const DEFAULT_LANG: &str = "en";

const EN_STRINGS: &str = include_str!("../../i18n/en.json");

pub struct I18nBundle {
    pub lang: &'static str,
    pub translations: Value,
}

fn parse_strings(lang: &str, raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|err| {
        log::error!("i18n bundle '{lang}' is not valid JSON: {err}");
        Value::Object(Map::new())
    })
}

static BUNDLE: Lazy<I18nBundle> = Lazy::new(|| I18nBundle {
    lang: DEFAULT_LANG,
    translations: parse_strings(DEFAULT_LANG, EN_STRINGS),
});

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    f(&BUNDLE)
}

/// Language code of the active string bundle.
#[must_use]
pub fn current_lang() -> &'static str {
    with_bundle(|bundle| bundle.lang)
}

/// Mirror the active language onto `<html lang>`.
pub fn apply_document_lang() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("lang", current_lang());
            let _ = el.set_attribute("dir", "ltr");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_strings_parse_to_object() {
        with_bundle(|bundle| {
            assert_eq!(bundle.lang, "en");
            assert!(bundle.translations.is_object());
            assert!(bundle.translations.get("steps").is_some());
        });
    }

    #[test]
    fn malformed_strings_fall_back_to_empty_object() {
        let value = parse_strings("xx", "{ nope");
        assert_eq!(value, Value::Object(Map::new()));
    }
}
