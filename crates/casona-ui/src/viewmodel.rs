//! Pure section view-models.
//!
//! Each builder maps `(config, translations, language)` to the exact data a
//! section renders, or `None` when the section has nothing to show. The
//! components only interpolate these values into markup, which keeps every
//! visible string testable without a browser and makes re-rendering
//! idempotent by construction.

use crate::i18n::Translations;
use crate::links;
use casona_model::{Lang, SiteConfig, Text};

/// Logo slot content: an image when configured, otherwise the site title as
/// text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogoVm {
    /// Logo image URL.
    pub image: Option<String>,
    /// Text fallback (site title), also the image alt.
    pub title: String,
}

/// One navigation link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLinkVm {
    /// In-page anchor (`#rooms`).
    pub href: String,
    /// Visible label.
    pub label: String,
}

/// Hero banner content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroVm {
    /// Main heading.
    pub heading: String,
    /// Supporting line, hidden when empty.
    pub subheading: Option<String>,
    /// Banner image URL.
    pub image: Option<String>,
    /// Call-to-action label.
    pub cta_label: String,
}

/// One room card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomVm {
    /// Room name.
    pub name: String,
    /// Description line.
    pub description: Option<String>,
    /// Formatted nightly price, e.g. `$100`.
    pub price_label: Option<String>,
    /// Photo URL.
    pub image: Option<String>,
    /// Feature bullets.
    pub features: Vec<String>,
}

/// One amenity row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AmenityVm {
    /// Icon name or emoji.
    pub icon: Option<String>,
    /// Amenity name.
    pub name: String,
    /// Detail line.
    pub description: Option<String>,
}

/// One gallery image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryImageVm {
    /// Image URL.
    pub url: String,
    /// Alt text.
    pub alt: String,
}

/// Location section content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationVm {
    /// Street address as written in the config.
    pub address: Option<String>,
    /// Embeddable map URL.
    pub map_embed_url: Option<String>,
    /// Note under the map.
    pub note: Option<String>,
    /// Map search deep link.
    pub map_link: Option<String>,
    /// Map directions deep link.
    pub directions_link: Option<String>,
}

/// One testimonial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestimonialVm {
    /// Quoted text.
    pub quote: String,
    /// Attribution, hidden when absent.
    pub author: Option<String>,
}

/// One policy entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolicyVm {
    /// Policy title.
    pub title: String,
    /// Policy body.
    pub body: Option<String>,
}

/// A labelled outbound contact link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactLinkVm {
    /// Visible label.
    pub label: String,
    /// Deep-link URL (`tel:`, `mailto:`, WhatsApp).
    pub href: String,
}

/// Footer content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FooterVm {
    /// Tagline above the links.
    pub tagline: Option<String>,
    /// Opening hours line.
    pub hours: Option<String>,
    /// Contact deep links in phone, WhatsApp, email order.
    pub contact_links: Vec<ContactLinkVm>,
    /// Social profiles (network name, URL) in config order.
    pub social: Vec<(String, String)>,
}

/// Search-engine metadata for the active language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeoVm {
    /// Document / Open Graph title.
    pub title: String,
    /// Meta / Open Graph description.
    pub description: String,
    /// Open Graph image URL.
    pub image: Option<String>,
}

fn resolved(text: Option<&Text>, lang: Lang) -> Option<String> {
    text.map(|value| value.resolve(lang).to_string())
        .filter(|value| !value.is_empty())
}

/// Logo slot content; `None` only when the config has no `site` block.
#[must_use]
pub fn logo_vm(config: &SiteConfig) -> Option<LogoVm> {
    let site = config.site.as_ref()?;
    Some(LogoVm {
        image: site.logo.clone(),
        title: site.title.clone().unwrap_or_default(),
    })
}

/// Navigation links in config order; `None` when there are no items.
#[must_use]
pub fn nav_vm(config: &SiteConfig, lang: Lang) -> Option<Vec<NavLinkVm>> {
    let items = &config.nav.as_ref()?.items;
    if items.is_empty() {
        return None;
    }
    Some(
        items
            .iter()
            .map(|item| NavLinkVm {
                href: format!("#{}", item.section),
                label: item.label.resolve(lang).to_string(),
            })
            .collect(),
    )
}

/// Hero banner; config fields win, UI translations fill the gaps.
#[must_use]
pub fn hero_vm(config: &SiteConfig, translations: &Translations, lang: Lang) -> Option<HeroVm> {
    let hero = config.hero.as_ref();
    let heading = hero
        .and_then(|h| resolved(h.heading.as_ref(), lang))
        .unwrap_or_else(|| translations.text("hero.title", lang));
    let cta_label = hero
        .and_then(|h| resolved(h.cta_label.as_ref(), lang))
        .unwrap_or_else(|| translations.text("booking.cta", lang));
    if heading.is_empty() && cta_label.is_empty() {
        return None;
    }
    Some(HeroVm {
        heading,
        subheading: hero.and_then(|h| resolved(h.subheading.as_ref(), lang)),
        image: hero.and_then(|h| h.image.clone()),
        cta_label,
    })
}

/// Room cards in config order; `None` hides the section entirely.
#[must_use]
pub fn rooms_vm(config: &SiteConfig, lang: Lang) -> Option<Vec<RoomVm>> {
    if config.rooms.is_empty() {
        return None;
    }
    let default_currency = config
        .booking
        .as_ref()
        .and_then(|booking| booking.currency.as_deref());
    Some(
        config
            .rooms
            .iter()
            .map(|room| RoomVm {
                name: room.name.resolve(lang).to_string(),
                description: resolved(room.description.as_ref(), lang),
                price_label: room.price.map(|price| {
                    format_price(price, room.currency.as_deref().or(default_currency))
                }),
                image: room.image.clone(),
                features: room
                    .features
                    .iter()
                    .map(|feature| feature.resolve(lang).to_string())
                    .collect(),
            })
            .collect(),
    )
}

/// Format a nightly price with a currency symbol where one is known.
#[must_use]
pub fn format_price(amount: f64, currency: Option<&str>) -> String {
    let rendered = if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        format!("{amount:.2}")
    };
    match currency.map(str::to_ascii_uppercase).as_deref() {
        Some("USD") => format!("${rendered}"),
        Some("EUR") => format!("€{rendered}"),
        Some("MXN") => format!("MX${rendered}"),
        Some(code) => format!("{code} {rendered}"),
        None => rendered,
    }
}

/// Amenity rows in config order.
#[must_use]
pub fn amenities_vm(config: &SiteConfig, lang: Lang) -> Option<Vec<AmenityVm>> {
    if config.amenities.is_empty() {
        return None;
    }
    Some(
        config
            .amenities
            .iter()
            .map(|amenity| AmenityVm {
                icon: amenity.icon.clone(),
                name: amenity.name.resolve(lang).to_string(),
                description: resolved(amenity.description.as_ref(), lang),
            })
            .collect(),
    )
}

/// Gallery images in config order.
#[must_use]
pub fn gallery_vm(config: &SiteConfig, lang: Lang) -> Option<Vec<GalleryImageVm>> {
    if config.gallery.is_empty() {
        return None;
    }
    Some(
        config
            .gallery
            .iter()
            .map(|image| GalleryImageVm {
                url: image.url.clone(),
                alt: resolved(image.alt.as_ref(), lang).unwrap_or_default(),
            })
            .collect(),
    )
}

/// Location section with map deep links derived from the address.
#[must_use]
pub fn location_vm(config: &SiteConfig, lang: Lang) -> Option<LocationVm> {
    let location = config.location.as_ref()?;
    let address = location.address.clone().filter(|value| !value.is_empty());
    Some(LocationVm {
        map_link: address.as_deref().map(links::map_query),
        directions_link: address.as_deref().map(links::map_directions),
        address,
        map_embed_url: location.map_embed_url.clone(),
        note: resolved(location.note.as_ref(), lang),
    })
}

/// Testimonials in config order.
#[must_use]
pub fn testimonials_vm(config: &SiteConfig, lang: Lang) -> Option<Vec<TestimonialVm>> {
    if config.testimonials.is_empty() {
        return None;
    }
    Some(
        config
            .testimonials
            .iter()
            .map(|entry| TestimonialVm {
                quote: entry.quote.resolve(lang).to_string(),
                author: entry.author.clone(),
            })
            .collect(),
    )
}

/// Policies in config order.
#[must_use]
pub fn policies_vm(config: &SiteConfig, lang: Lang) -> Option<Vec<PolicyVm>> {
    if config.policies.is_empty() {
        return None;
    }
    Some(
        config
            .policies
            .iter()
            .map(|policy| PolicyVm {
                title: policy.title.resolve(lang).to_string(),
                body: resolved(policy.body.as_ref(), lang),
            })
            .collect(),
    )
}

/// Footer content: contact deep links, social profiles, tagline and hours.
#[must_use]
pub fn footer_vm(config: &SiteConfig, translations: &Translations, lang: Lang) -> Option<FooterVm> {
    let mut contact_links = Vec::new();
    if let Some(contact) = config.contact.as_ref() {
        if let Some(phone) = contact.phone.as_deref() {
            contact_links.push(ContactLinkVm {
                label: phone.to_string(),
                href: links::tel(phone),
            });
        }
        if let Some(number) = contact.whatsapp.as_deref() {
            contact_links.push(ContactLinkVm {
                label: translations.text("footer.whatsapp", lang),
                href: links::whatsapp(number, &translations.text("footer.whatsapp_greeting", lang)),
            });
        }
        if let Some(email) = contact.email.as_deref() {
            contact_links.push(ContactLinkVm {
                label: email.to_string(),
                href: links::mailto(email),
            });
        }
    }
    let footer = config.footer.as_ref();
    let tagline = footer.and_then(|f| resolved(f.tagline.as_ref(), lang));
    let hours = footer.and_then(|f| resolved(f.hours.as_ref(), lang));
    let social: Vec<(String, String)> = config
        .social
        .iter()
        .map(|link| (link.network.clone(), link.url.clone()))
        .collect();
    if contact_links.is_empty() && tagline.is_none() && hours.is_none() && social.is_empty() {
        return None;
    }
    Some(FooterVm {
        tagline,
        hours,
        contact_links,
        social,
    })
}

/// Search-engine metadata. UI translations take precedence over the config,
/// matching the original page's resolution order.
#[must_use]
pub fn seo_vm(config: &SiteConfig, translations: &Translations, lang: Lang) -> SeoVm {
    let seo = config.seo.as_ref();
    let title = translations
        .resolve("seo.meta_title", lang)
        .or_else(|| seo.and_then(|s| resolved(s.meta_title.as_ref(), lang)))
        .unwrap_or_default();
    let description = translations
        .resolve("seo.meta_description", lang)
        .or_else(|| seo.and_then(|s| resolved(s.meta_description.as_ref(), lang)))
        .unwrap_or_default();
    SeoVm {
        title,
        description,
        image: seo.and_then(|s| s.meta_image_url.clone()),
    }
}

/// CSS custom-property assignments from the color palette, in config order.
#[must_use]
pub fn color_vars(config: &SiteConfig) -> Vec<(String, String)> {
    config
        .colors
        .iter()
        .map(|(name, value)| (format!("--color-{name}"), value.clone()))
        .collect()
}

/// Schema.org `Hotel` JSON-LD document for the page head. `None` when the
/// config names no site title.
#[must_use]
pub fn structured_data(config: &SiteConfig) -> Option<String> {
    let title = config.site.as_ref()?.title.as_deref()?;
    let mut doc = serde_json::json!({
        "@context": "https://schema.org",
        "@type": "Hotel",
        "name": title,
    });
    let object = doc.as_object_mut()?;
    if let Some(address) = config
        .location
        .as_ref()
        .and_then(|location| location.address.as_deref())
    {
        object.insert("address".to_string(), address.into());
    }
    if let Some(phone) = config
        .contact
        .as_ref()
        .and_then(|contact| contact.phone.as_deref())
    {
        object.insert("telephone".to_string(), phone.into());
    }
    if let Some(booking) = config.booking.as_ref() {
        if let Some(check_in) = booking.check_in_time.as_deref() {
            object.insert("checkinTime".to_string(), check_in.into());
        }
        if let Some(check_out) = booking.check_out_time.as_deref() {
            object.insert("checkoutTime".to_string(), check_out.into());
        }
    }
    Some(doc.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn translations() -> Translations {
        Translations::from_parts(
            Lang::Es,
            [
                (
                    Lang::Es,
                    json!({
                        "hero": {"title": "Disfruta tu estadía"},
                        "booking": {"cta": "Reservar ahora"},
                        "seo": {"meta_title": "Hotel Paraíso", "meta_description": "El mejor alojamiento."},
                        "footer": {"whatsapp": "WhatsApp", "whatsapp_greeting": "Hola"}
                    }),
                ),
                (
                    Lang::En,
                    json!({
                        "hero": {"title": "Enjoy your stay"},
                        "booking": {"cta": "Book now"},
                        "seo": {"meta_title": "Paradise Hotel", "meta_description": "The best stay."},
                        "footer": {"whatsapp": "WhatsApp", "whatsapp_greeting": "Hello"}
                    }),
                ),
            ]
            .into_iter()
            .collect(),
        )
    }

    fn config(raw: serde_json::Value) -> SiteConfig {
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn rooms_scenario_from_the_page_contract() {
        let config = config(json!({
            "rooms": [{"name": "Suite", "price": 100.0}],
            "booking": {"currency": "USD"}
        }));
        let rooms = rooms_vm(&config, Lang::En).unwrap();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].name, "Suite");
        assert_eq!(rooms[0].price_label.as_deref(), Some("$100"));

        let without_rooms = super::rooms_vm(&SiteConfig::default(), Lang::En);
        assert!(without_rooms.is_none());
    }

    #[test]
    fn room_currency_overrides_booking_currency() {
        let config = config(json!({
            "rooms": [
                {"name": "Suite", "price": 100.0},
                {"name": "Loft", "price": 90.5, "currency": "EUR"}
            ],
            "booking": {"currency": "USD"}
        }));
        let rooms = rooms_vm(&config, Lang::Es).unwrap();
        assert_eq!(rooms[0].price_label.as_deref(), Some("$100"));
        assert_eq!(rooms[1].price_label.as_deref(), Some("€90.50"));
    }

    #[test]
    fn price_formatting_covers_unknown_currencies() {
        assert_eq!(format_price(80.0, Some("GBP")), "GBP 80");
        assert_eq!(format_price(80.0, None), "80");
        assert_eq!(format_price(1250.0, Some("mxn")), "MX$1250");
    }

    #[test]
    fn nav_preserves_config_order_and_resolves_labels() {
        let config = config(json!({
            "nav": {"items": [
                {"section": "rooms", "label": {"es": "Habitaciones", "en": "Rooms"}},
                {"section": "gallery", "label": {"es": "Galería", "en": "Gallery"}}
            ]}
        }));
        let nav = nav_vm(&config, Lang::En).unwrap();
        assert_eq!(nav[0].href, "#rooms");
        assert_eq!(nav[0].label, "Rooms");
        assert_eq!(nav[1].label, "Gallery");
        assert!(nav_vm(&SiteConfig::default(), Lang::En).is_none());
    }

    #[test]
    fn hero_falls_back_to_translations() {
        let hero = hero_vm(&SiteConfig::default(), &translations(), Lang::En).unwrap();
        assert_eq!(hero.heading, "Enjoy your stay");
        assert_eq!(hero.cta_label, "Book now");

        let configured = config(json!({
            "hero": {"heading": {"es": "Bienvenido", "en": "Welcome"}}
        }));
        let hero = hero_vm(&configured, &translations(), Lang::Es).unwrap();
        assert_eq!(hero.heading, "Bienvenido");
        assert_eq!(hero.cta_label, "Reservar ahora");
    }

    #[test]
    fn seo_prefers_translations_over_config() {
        let configured = config(json!({
            "seo": {
                "meta_title": "Config title",
                "meta_description": "Config description",
                "meta_image_url": "https://example.com/og.jpg"
            }
        }));
        let seo = seo_vm(&configured, &translations(), Lang::En);
        assert_eq!(seo.title, "Paradise Hotel");
        assert_eq!(seo.description, "The best stay.");
        assert_eq!(seo.image.as_deref(), Some("https://example.com/og.jpg"));

        let seo = seo_vm(&configured, &Translations::empty(Lang::Es), Lang::En);
        assert_eq!(seo.title, "Config title");
    }

    #[test]
    fn location_links_derive_from_address() {
        let configured = config(json!({"location": {"address": "Calle 60, Mérida"}}));
        let location = location_vm(&configured, Lang::Es).unwrap();
        assert!(location.map_link.unwrap().contains("M%C3%A9rida"));
        assert!(location.directions_link.unwrap().contains("destination="));
        assert!(location_vm(&SiteConfig::default(), Lang::Es).is_none());
    }

    #[test]
    fn footer_collects_contact_links_in_order() {
        let configured = config(json!({
            "contact": {
                "phone": "+52 999 123 4567",
                "whatsapp": "5299912345",
                "email": "hola@casona.mx"
            },
            "social": [
                {"network": "instagram", "url": "https://instagram.com/casona"}
            ]
        }));
        let footer = footer_vm(&configured, &translations(), Lang::Es).unwrap();
        assert_eq!(footer.contact_links.len(), 3);
        assert!(footer.contact_links[0].href.starts_with("tel:+52999"));
        assert!(footer.contact_links[1].href.starts_with("https://wa.me/"));
        assert_eq!(footer.contact_links[2].href, "mailto:hola@casona.mx");
        assert_eq!(footer.social[0].0, "instagram");
        assert!(footer_vm(&SiteConfig::default(), &translations(), Lang::Es).is_none());
    }

    #[test]
    fn structured_data_reflects_config() {
        let configured = config(json!({
            "site": {"title": "Casona Mérida"},
            "location": {"address": "Calle 60, Mérida"},
            "contact": {"phone": "+529991234567"},
            "booking": {"check_in_time": "15:00", "check_out_time": "11:00"}
        }));
        let doc: serde_json::Value =
            serde_json::from_str(&structured_data(&configured).unwrap()).unwrap();
        assert_eq!(doc["@type"], "Hotel");
        assert_eq!(doc["name"], "Casona Mérida");
        assert_eq!(doc["checkinTime"], "15:00");
        assert!(structured_data(&SiteConfig::default()).is_none());
    }

    #[test]
    fn builders_are_idempotent() {
        let configured = config(json!({
            "site": {"title": "Casona"},
            "rooms": [{"name": {"es": "Suite", "en": "Suite"}, "price": 100.0}],
            "gallery": [{"url": "a.jpg"}, {"url": "b.jpg"}],
            "colors": {"primary": "#aa6644"}
        }));
        let translations = translations();
        for lang in Lang::all() {
            assert_eq!(
                rooms_vm(&configured, lang),
                rooms_vm(&configured, lang)
            );
            assert_eq!(
                hero_vm(&configured, &translations, lang),
                hero_vm(&configured, &translations, lang)
            );
            assert_eq!(
                seo_vm(&configured, &translations, lang),
                seo_vm(&configured, &translations, lang)
            );
        }
        assert_eq!(
            color_vars(&configured),
            vec![("--color-primary".to_string(), "#aa6644".to_string())]
        );
    }
}
