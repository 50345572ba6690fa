use crate::i18n::bundle::with_bundle;
use serde_json::Value;
use std::collections::BTreeMap;

#[cfg(target_arch = "wasm32")]
use js_sys::{Array, Intl, Object};

fn lookup<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(root, |node, part| node.get(part))
}

fn host_plural_category(count: f64) -> &'static str {
    if (count - 1.0).abs() < f64::EPSILON {
        "one"
    } else if count.abs() < f64::EPSILON {
        "zero"
    } else {
        "other"
    }
}

fn plural_category(lang: &str, count: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let locales = Array::new();
        locales.push(&wasm_bindgen::JsValue::from_str(lang));
        let rules = Intl::PluralRules::new(&locales, &Object::new());
        rules
            .select(count)
            .as_string()
            .unwrap_or_else(|| host_plural_category(count).to_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = lang;
        host_plural_category(count).to_string()
    }
}

fn pick_plural<'a>(
    forms: &'a serde_json::Map<String, Value>,
    lang: &str,
    args: Option<&BTreeMap<&str, &str>>,
) -> Option<&'a str> {
    let count = args
        .and_then(|m| m.get("count"))
        .and_then(|raw| raw.parse::<f64>().ok());
    let chosen = count.and_then(|n| {
        forms
            .get(&plural_category(lang, n))
            .or_else(|| forms.get("other"))
    });
    chosen.or_else(|| forms.get("_")).and_then(Value::as_str)
}

fn render_value(value: &Value, lang: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = match value {
        Value::String(s) => s.clone(),
        Value::Object(forms) => pick_plural(forms, lang, args)?.to_string(),
        _ => return None,
    };

    for (name, replacement) in args.into_iter().flatten() {
        text = text
            .replace(&format!("{{{{{name}}}}}"), replacement)
            .replace(&format!("{{{name}}}"), replacement);
    }
    Some(text)
}

/// Look up `key` without substitutions; unknown keys echo the key.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Look up `key` and substitute `{name}` / `{{name}}` placeholders from `args`.
///
/// A `count` argument selects among `one` / `other` plural forms, with `_` as the
/// catch-all.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    with_bundle(|bundle| {
        lookup(&bundle.translations, key).and_then(|v| render_value(v, bundle.lang, args))
    })
    .unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plural_forms_follow_count() {
        let value = serde_json::json!({ "one": "{count} hour", "other": "{count} hours" });
        let mut args = BTreeMap::new();
        args.insert("count", "1");
        assert_eq!(render_value(&value, "en", Some(&args)).unwrap(), "1 hour");
        args.insert("count", "12");
        assert_eq!(render_value(&value, "en", Some(&args)).unwrap(), "12 hours");
        args.insert("count", "0");
        assert_eq!(render_value(&value, "en", Some(&args)).unwrap(), "0 hours");
    }

    #[test]
    fn placeholders_accept_single_and_double_braces() {
        let value = Value::String("{count}/{{max}}".into());
        let mut args = BTreeMap::new();
        args.insert("count", "2");
        args.insert("max", "5");
        assert_eq!(render_value(&value, "en", Some(&args)).unwrap(), "2/5");
    }

    #[test]
    fn lookups_resolve_nested_keys_and_echo_unknown() {
        assert_eq!(t("steps.major.title"), "What do you want to study?");
        assert_eq!(t("steps.nope.title"), "steps.nope.title");
        let mut args = BTreeMap::new();
        args.insert("count", "3");
        args.insert("max", "5");
        assert_eq!(
            tr("steps.universities.selected", Some(&args)),
            "Selected Universities (3/5):"
        );
    }

    #[test]
    fn every_requirement_hint_has_a_string() {
        for step in smartadmit_core::Step::ALL {
            if let Some(key) = step.requirement_key() {
                assert_ne!(t(key), key, "missing string for {key}");
            }
        }
        for label in [
            smartadmit_core::PrimaryLabel::Next,
            smartadmit_core::PrimaryLabel::Submit,
        ] {
            assert_ne!(t(label.i18n_key()), label.i18n_key());
        }
    }
}
