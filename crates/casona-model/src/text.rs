//! Bilingual text values.

use crate::lang::{DEFAULT_LANG, Lang};
use serde::Deserialize;
use std::collections::BTreeMap;

/// A visitor-facing config value: either one string for every language or a
/// map keyed by language code.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Text {
    /// Same string regardless of the active language.
    Plain(String),
    /// One string per language code.
    PerLang(BTreeMap<String, String>),
}

impl Text {
    /// Resolve the value for `lang`. A per-language map falls back to the
    /// default language, then to any entry it holds, then to the empty
    /// string; resolution never fails.
    #[must_use]
    pub fn resolve(&self, lang: Lang) -> &str {
        match self {
            Self::Plain(value) => value,
            Self::PerLang(map) => map
                .get(lang.code())
                .or_else(|| map.get(DEFAULT_LANG.code()))
                .or_else(|| map.values().next())
                .map_or("", String::as_str),
        }
    }

    /// Whether the resolved value would be empty for every language.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Plain(value) => value.is_empty(),
            Self::PerLang(map) => map.values().all(String::is_empty),
        }
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Self::Plain(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn per_lang(pairs: &[(&str, &str)]) -> Text {
        Text::PerLang(
            pairs
                .iter()
                .map(|(code, value)| ((*code).to_string(), (*value).to_string()))
                .collect(),
        )
    }

    #[test]
    fn plain_is_language_independent() {
        let text = Text::from("Suite");
        assert_eq!(text.resolve(Lang::Es), "Suite");
        assert_eq!(text.resolve(Lang::En), "Suite");
    }

    #[test]
    fn per_lang_picks_requested_language() {
        let text = per_lang(&[("es", "Habitaciones"), ("en", "Rooms")]);
        assert_eq!(text.resolve(Lang::Es), "Habitaciones");
        assert_eq!(text.resolve(Lang::En), "Rooms");
    }

    #[test]
    fn missing_language_falls_back_to_default_then_any() {
        let default_only = per_lang(&[("es", "Hola")]);
        assert_eq!(default_only.resolve(Lang::En), "Hola");
        let other_only = per_lang(&[("en", "Hello")]);
        assert_eq!(other_only.resolve(Lang::Es), "Hello");
        let empty = Text::PerLang(BTreeMap::new());
        assert_eq!(empty.resolve(Lang::Es), "");
    }

    #[test]
    fn untagged_deserialization_handles_both_shapes() {
        let plain: Text = serde_json::from_str("\"Casona\"").unwrap();
        assert_eq!(plain, Text::from("Casona"));
        let mapped: Text = serde_json::from_str(r#"{"es":"Playa","en":"Beach"}"#).unwrap();
        assert_eq!(mapped.resolve(Lang::En), "Beach");
    }
}
