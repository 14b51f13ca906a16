//! Null-tolerant DOM writes for head metadata and theming.
//!
//! Every operation skips silently when its target element is missing; the
//! page template owns the element ids, not this crate.

use crate::viewmodel::SeoVm;
use gloo::utils::document;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Set the document title plus the description/Open Graph meta tags.
pub(crate) fn apply_seo(seo: &SeoVm) {
    document().set_title(&seo.title);
    set_content("meta-description", &seo.description);
    set_content("og-title", &seo.title);
    set_content("og-description", &seo.description);
    if let Some(image) = seo.image.as_deref() {
        set_content("og-image", image);
    }
}

/// Write `--color-*` custom properties onto the root element.
pub(crate) fn apply_colors(vars: &[(String, String)]) {
    let Some(root) = document().document_element() else {
        return;
    };
    let Ok(root) = root.dyn_into::<HtmlElement>() else {
        return;
    };
    let style = root.style();
    for (name, value) in vars {
        let _ = style.set_property(name, value);
    }
}

/// Replace the JSON-LD payload in the `structured-data` script element.
pub(crate) fn inject_structured_data(json: &str) {
    if let Some(element) = document().get_element_by_id("structured-data") {
        element.set_text_content(Some(json));
    }
}

/// Keep the root element's `lang` attribute in sync with the active
/// language.
pub(crate) fn set_document_lang(code: &str) {
    if let Some(root) = document().document_element() {
        let _ = root.set_attribute("lang", code);
    }
}

fn set_content(id: &str, value: &str) {
    if let Some(element) = document().get_element_by_id(id) {
        let _ = element.set_attribute("content", value);
    }
}
