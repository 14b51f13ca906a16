//! App shell: startup fetches, language state, section orchestration.
//!
//! Nothing renders until both the config and the translation trees have
//! loaded; a total config failure is logged and swapped for a minimal
//! shell so the page never dies silently.

use crate::components::amenities::AmenitiesSection;
use crate::components::booking_form::BookingForm;
use crate::components::footer::FooterSection;
use crate::components::gallery::GallerySection;
use crate::components::hero::HeroSection;
use crate::components::location::LocationSection;
use crate::components::navbar::Navbar;
use crate::components::policies::PoliciesSection;
use crate::components::rooms::RoomsSection;
use crate::components::testimonials::TestimonialsSection;
use crate::i18n::{self, Translations};
use crate::services::{config::load_config, dom};
use crate::viewmodel;
use casona_model::{DEFAULT_LANG, Lang, SiteConfig};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use std::rc::Rc;
use yew::prelude::*;

/// Storage key for the visitor's language choice. Matches the key the page
/// has always used, so existing preferences survive.
const LANG_KEY: &str = "lang";

#[derive(Clone, Debug, PartialEq)]
struct Loaded {
    config: SiteConfig,
    translations: Translations,
}

#[function_component(CasonaApp)]
fn casona_app() -> Html {
    let loaded = use_state(|| None::<Rc<Loaded>>);
    let failed = use_state(|| false);
    let lang = use_state(|| None::<Lang>);

    {
        let loaded = loaded.clone();
        let failed = failed.clone();
        let lang = lang.clone();
        use_effect_with_deps(
            move |_| {
                yew::platform::spawn_local(async move {
                    match load_config().await {
                        Ok(config) => {
                            let default = config_default_lang(&config);
                            let requested = configured_langs(&config);
                            let translations = i18n::load(default, &requested).await;
                            lang.set(Some(load_lang(default)));
                            loaded.set(Some(Rc::new(Loaded {
                                config,
                                translations,
                            })));
                        }
                        Err(err) => {
                            console::error!("config load failed", err.to_string());
                            failed.set(true);
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    {
        let lang_value = *lang;
        use_effect_with_deps(
            move |lang| {
                if let Some(lang) = lang {
                    if let Err(err) = LocalStorage::set(LANG_KEY, lang.code()) {
                        console::error!("storage set failed", LANG_KEY, err.to_string());
                    }
                    dom::set_document_lang(lang.code());
                }
                || ()
            },
            lang_value,
        );
    }

    {
        let deps = ((*loaded).clone(), *lang);
        use_effect_with_deps(
            move |(loaded, lang)| {
                if let (Some(loaded), Some(lang)) = (loaded, *lang) {
                    let seo = viewmodel::seo_vm(&loaded.config, &loaded.translations, lang);
                    dom::apply_seo(&seo);
                    dom::apply_colors(&viewmodel::color_vars(&loaded.config));
                    if let Some(json) = viewmodel::structured_data(&loaded.config) {
                        dom::inject_structured_data(&json);
                    }
                }
                || ()
            },
            deps,
        );
    }

    let on_select_lang = {
        let lang = lang.clone();
        Callback::from(move |next: Lang| lang.set(Some(next)))
    };

    if *failed {
        return fallback_shell();
    }
    let (Some(loaded), Some(active)) = ((*loaded).clone(), *lang) else {
        return html! {
            <div class="min-h-screen grid place-items-center">
                <span class="loading loading-dots loading-lg" aria-label="loading"></span>
            </div>
        };
    };

    html! { <Page loaded={loaded} lang={active} on_select_lang={on_select_lang} /> }
}

#[derive(Properties, PartialEq)]
struct PageProps {
    pub loaded: Rc<Loaded>,
    pub lang: Lang,
    pub on_select_lang: Callback<Lang>,
}

#[function_component(Page)]
fn page(props: &PageProps) -> Html {
    let config = &props.loaded.config;
    let translations = &props.loaded.translations;
    let lang = props.lang;
    let heading = |key: &str| translations.text(key, lang);

    html! {
        <>
            <Navbar
                logo={viewmodel::logo_vm(config)}
                links={viewmodel::nav_vm(config, lang).unwrap_or_default()}
                lang={lang}
                on_select_lang={props.on_select_lang.clone()}
            />
            {viewmodel::hero_vm(config, translations, lang)
                .map(|vm| html! { <HeroSection vm={vm} /> })
                .unwrap_or_default()}
            {viewmodel::rooms_vm(config, lang)
                .map(|rooms| html! {
                    <RoomsSection heading={heading("sections.rooms")} rooms={rooms} />
                })
                .unwrap_or_default()}
            {viewmodel::amenities_vm(config, lang)
                .map(|amenities| html! {
                    <AmenitiesSection heading={heading("sections.amenities")} amenities={amenities} />
                })
                .unwrap_or_default()}
            {viewmodel::gallery_vm(config, lang)
                .map(|images| html! {
                    <GallerySection heading={heading("sections.gallery")} images={images} />
                })
                .unwrap_or_default()}
            {viewmodel::testimonials_vm(config, lang)
                .map(|testimonials| html! {
                    <TestimonialsSection
                        heading={heading("sections.testimonials")}
                        testimonials={testimonials}
                    />
                })
                .unwrap_or_default()}
            {viewmodel::location_vm(config, lang)
                .map(|vm| html! {
                    <LocationSection
                        heading={heading("sections.location")}
                        vm={vm}
                        map_label={heading("location.map")}
                        directions_label={heading("location.directions")}
                    />
                })
                .unwrap_or_default()}
            {viewmodel::policies_vm(config, lang)
                .map(|policies| html! {
                    <PoliciesSection heading={heading("sections.policies")} policies={policies} />
                })
                .unwrap_or_default()}
            <BookingForm
                heading={heading("booking.title")}
                booking={config.booking.clone()}
                contact={config.contact.clone()}
                translations={translations.clone()}
                lang={lang}
            />
            {viewmodel::footer_vm(config, translations, lang)
                .map(|vm| html! { <FooterSection vm={vm} /> })
                .unwrap_or_default()}
        </>
    }
}

fn fallback_shell() -> Html {
    html! {
        <div class="min-h-screen grid place-items-center text-center">
            <div>
                <h1 class="text-3xl font-bold">{"Casona"}</h1>
                <p class="opacity-70 mt-2">{"This page is temporarily unavailable."}</p>
            </div>
        </div>
    }
}

fn config_default_lang(config: &SiteConfig) -> Lang {
    config
        .site
        .as_ref()
        .and_then(|site| site.default_lang.as_deref())
        .and_then(Lang::from_lang_tag)
        .unwrap_or(DEFAULT_LANG)
}

fn configured_langs(config: &SiteConfig) -> Vec<Lang> {
    let listed: Vec<Lang> = config
        .site
        .as_ref()
        .map(|site| {
            site.languages
                .iter()
                .filter_map(|code| Lang::from_lang_tag(code))
                .collect()
        })
        .unwrap_or_default();
    if listed.is_empty() {
        Lang::all().to_vec()
    } else {
        listed
    }
}

fn load_lang(fallback: Lang) -> Lang {
    if let Ok(value) = LocalStorage::get::<String>(LANG_KEY) {
        if let Some(lang) = Lang::from_lang_tag(&value) {
            return lang;
        }
    }
    fallback
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    yew::Renderer::<CasonaApp>::new().render();
}
