//! JSON-backed UI translations with default-language fallback.
//!
//! # Design
//! - One `serde_json` tree per language, fetched at startup; a failed fetch
//!   degrades that language to an empty tree instead of aborting the load.
//! - Dotted-path resolution re-walks the default language's tree whenever a
//!   segment is missing, so a partially translated language never shows
//!   holes the default could fill.

use casona_model::Lang;
use serde_json::Value;
use std::collections::BTreeMap;

/// Immutable store of per-language translation trees.
#[derive(Clone, Debug, PartialEq)]
pub struct Translations {
    default: Lang,
    trees: BTreeMap<Lang, Value>,
}

impl Translations {
    /// Build a store from already-parsed trees. Languages without an entry
    /// behave as if their tree were empty.
    #[must_use]
    pub fn from_parts(default: Lang, trees: BTreeMap<Lang, Value>) -> Self {
        Self { default, trees }
    }

    /// An empty store; every lookup yields the caller's fallback.
    #[must_use]
    pub fn empty(default: Lang) -> Self {
        Self {
            default,
            trees: BTreeMap::new(),
        }
    }

    /// The language used when a key is missing from the requested one.
    #[must_use]
    pub const fn default_lang(&self) -> Lang {
        self.default
    }

    /// Resolve a dotted path (`hero.title`) in `lang`, falling back to the
    /// default language. `None` when both trees miss the key.
    #[must_use]
    pub fn resolve(&self, path: &str, lang: Lang) -> Option<String> {
        self.walk(path, lang)
            .or_else(|| self.walk(path, self.default))
    }

    /// [`Self::resolve`] with the empty string as the final fallback.
    #[must_use]
    pub fn text(&self, path: &str, lang: Lang) -> String {
        self.resolve(path, lang).unwrap_or_default()
    }

    fn walk(&self, path: &str, lang: Lang) -> Option<String> {
        let mut node = self.trees.get(&lang)?;
        for segment in path.split('.') {
            node = node.get(segment)?;
        }
        node.as_str().map(ToString::to_string)
    }
}

/// Fetch one translation tree per requested language.
///
/// The default language is always included and duplicates are requested only
/// once. A network error, a non-success status or a malformed document all
/// degrade that language to an empty tree.
#[cfg(target_arch = "wasm32")]
pub async fn load(default: Lang, requested: &[Lang]) -> Translations {
    use gloo::console;
    use gloo_net::http::Request;

    let mut langs: Vec<Lang> = vec![default];
    for lang in requested {
        if !langs.contains(lang) {
            langs.push(*lang);
        }
    }

    let mut trees = BTreeMap::new();
    for lang in langs {
        let url = format!("i18n/{}.json", lang.code());
        let tree = match Request::get(&url).send().await {
            Ok(response) if response.ok() => response.json::<Value>().await.unwrap_or(Value::Null),
            Ok(response) => {
                console::error!("translation fetch failed", url, response.status());
                Value::Null
            }
            Err(err) => {
                console::error!("translation fetch failed", url, err.to_string());
                Value::Null
            }
        };
        trees.insert(lang, tree);
    }
    Translations::from_parts(default, trees)
}
