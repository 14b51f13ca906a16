//! Supported language codes.

use serde::Deserialize;

/// Languages the page can render. The config's `site.default_lang` and the
/// visitor's stored preference are both matched against this set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// Spanish.
    Es,
    /// English.
    En,
}

impl Lang {
    /// All supported languages in display order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Es, Self::En]
    }

    /// Two-letter language code used in storage, config keys and file names.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    /// Human-friendly label for the language selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Es => "Español",
            Self::En => "English",
        }
    }

    /// Map an arbitrary language tag (`en`, `en-US`, `ES`) to a supported
    /// language, ignoring region subtags.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.to_ascii_lowercase();
        let base = lowered.split('-').next().unwrap_or_default();
        Self::all().iter().copied().find(|lang| lang.code() == base)
    }
}

/// Fallback language when neither a stored preference nor a config default
/// names a supported one.
pub const DEFAULT_LANG: Lang = Lang::Es;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_matching_ignores_region_and_case() {
        assert_eq!(Lang::from_lang_tag("en-US"), Some(Lang::En));
        assert_eq!(Lang::from_lang_tag("ES"), Some(Lang::Es));
        assert_eq!(Lang::from_lang_tag("fr"), None);
        assert_eq!(Lang::from_lang_tag(""), None);
    }

    #[test]
    fn codes_round_trip() {
        for lang in Lang::all() {
            assert_eq!(Lang::from_lang_tag(lang.code()), Some(lang));
        }
    }
}
