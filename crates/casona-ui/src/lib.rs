#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Casona landing-page front-end.
//!
//! Pure page logic (translation resolution, section view-models, booking
//! validation, gallery state) lives in the top-level modules and compiles on
//! any target so it can be unit-tested without a browser. Everything that
//! touches the DOM, storage or the network is gated behind `wasm32`.

pub mod booking;
pub mod gallery;
pub mod i18n;
pub mod links;
pub mod viewmodel;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod services;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::i18n::Translations;
    use casona_model::Lang;
    use serde_json::json;

    #[test]
    fn translation_fallbacks_work() {
        let store = Translations::from_parts(
            Lang::Es,
            [
                (Lang::Es, json!({"hero": {"title": "Disfruta tu estadía"}})),
                (Lang::En, json!({})),
            ]
            .into_iter()
            .collect(),
        );
        assert_eq!(store.text("hero.title", Lang::En), "Disfruta tu estadía");
        assert_eq!(store.text("hero.missing", Lang::En), "");
    }
}
