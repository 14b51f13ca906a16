//! The site configuration document.
//!
//! Shape mirrors `config.json`. Deserialization is lenient: unknown fields
//! are ignored and every section may be absent.

use crate::text::Text;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Root of the configuration document fetched at page load.
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
pub struct SiteConfig {
    /// Site identity (title, logo, default language).
    pub site: Option<Site>,
    /// CSS custom-property palette, name → color value.
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
    /// Search-engine metadata.
    pub seo: Option<Seo>,
    /// Top navigation.
    pub nav: Option<NavSection>,
    /// Hero banner.
    pub hero: Option<Hero>,
    /// Room cards, in display order.
    #[serde(default)]
    pub rooms: Vec<Room>,
    /// Amenity list, in display order.
    #[serde(default)]
    pub amenities: Vec<Amenity>,
    /// Gallery images, in display order.
    #[serde(default)]
    pub gallery: Vec<GalleryImage>,
    /// Location section (address, embedded map).
    pub location: Option<Location>,
    /// Contact channels used for deep links.
    pub contact: Option<Contact>,
    /// Booking form behaviour.
    pub booking: Option<Booking>,
    /// House policies, in display order.
    #[serde(default)]
    pub policies: Vec<Policy>,
    /// Social profiles for the footer.
    #[serde(default)]
    pub social: Vec<SocialLink>,
    /// Guest testimonials, in display order.
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    /// Footer extras (tagline, opening hours).
    pub footer: Option<Footer>,
}

/// Site identity block.
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
pub struct Site {
    /// Site title, used for the logo fallback and structured data.
    pub title: Option<String>,
    /// Logo image URL; absent means the title is rendered as text.
    pub logo: Option<String>,
    /// Preferred language code when the visitor has no stored choice.
    pub default_lang: Option<String>,
    /// Language codes offered in the selector; unknown codes are ignored.
    #[serde(default)]
    pub languages: Vec<String>,
}

/// Search-engine metadata. Title and description may vary by language.
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
pub struct Seo {
    /// Document / Open Graph title.
    pub meta_title: Option<Text>,
    /// Meta / Open Graph description.
    pub meta_description: Option<Text>,
    /// Open Graph preview image URL.
    pub meta_image_url: Option<String>,
}

/// Top navigation section.
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
pub struct NavSection {
    /// Entries in display order.
    #[serde(default)]
    pub items: Vec<NavItem>,
}

/// One navigation entry pointing at an in-page section anchor.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NavItem {
    /// Anchor id of the target section (rendered as `#section`).
    pub section: String,
    /// Visible label.
    pub label: Text,
}

/// Hero banner content.
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
pub struct Hero {
    /// Main heading.
    pub heading: Option<Text>,
    /// Supporting line under the heading.
    pub subheading: Option<Text>,
    /// Background or side image URL.
    pub image: Option<String>,
    /// Call-to-action button label.
    pub cta_label: Option<Text>,
}

/// A bookable room.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Room {
    /// Room name.
    pub name: Text,
    /// Longer description.
    pub description: Option<Text>,
    /// Nightly price in the booking currency.
    pub price: Option<f64>,
    /// Currency override for this room; defaults to `booking.currency`.
    pub currency: Option<String>,
    /// Photo URL.
    pub image: Option<String>,
    /// Feature bullets, in display order.
    #[serde(default)]
    pub features: Vec<Text>,
}

/// An amenity entry.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Amenity {
    /// Icon name or emoji shown next to the label.
    pub icon: Option<String>,
    /// Amenity name.
    pub name: Text,
    /// Optional detail line.
    pub description: Option<Text>,
}

/// A gallery image.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GalleryImage {
    /// Image URL.
    pub url: String,
    /// Alt text.
    pub alt: Option<Text>,
}

/// Location section content.
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
pub struct Location {
    /// Street address used for map deep links and structured data.
    pub address: Option<String>,
    /// Embeddable map URL (iframe source).
    pub map_embed_url: Option<String>,
    /// Directions hint or note under the map.
    pub note: Option<Text>,
}

/// Contact channels.
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
pub struct Contact {
    /// Phone number for `tel:` links, digits and leading `+` only.
    pub phone: Option<String>,
    /// WhatsApp number in international format without `+`.
    pub whatsapp: Option<String>,
    /// Email address for `mailto:` links.
    pub email: Option<String>,
}

/// How a valid booking submission is dispatched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingMode {
    /// Open a prefilled WhatsApp conversation in a new context.
    Whatsapp,
    /// Navigate to an external booking engine with query parameters.
    External,
}

/// Booking form configuration.
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
pub struct Booking {
    /// Dispatch mode; absent or unrecognised means a valid submission is a
    /// no-op.
    #[serde(default, deserialize_with = "lenient_mode")]
    pub mode: Option<BookingMode>,
    /// External booking engine base URL (used by [`BookingMode::External`]).
    pub url: Option<String>,
    /// Display currency for room prices, e.g. `USD`.
    pub currency: Option<String>,
    /// Minimum stay in nights; absent means 1.
    pub min_nights: Option<u32>,
    /// Check-in time (`15:00`) for structured data.
    pub check_in_time: Option<String>,
    /// Check-out time (`11:00`) for structured data.
    pub check_out_time: Option<String>,
}

fn lenient_mode<'de, D>(deserializer: D) -> Result<Option<BookingMode>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value.to_ascii_lowercase().as_str() {
        "whatsapp" => Some(BookingMode::Whatsapp),
        "external" => Some(BookingMode::External),
        _ => None,
    }))
}

/// A house policy entry.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Policy {
    /// Policy title.
    pub title: Text,
    /// Policy body.
    pub body: Option<Text>,
}

/// A social profile link.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SocialLink {
    /// Network name (`instagram`, `facebook`, ...).
    pub network: String,
    /// Profile URL.
    pub url: String,
}

/// A guest testimonial.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Testimonial {
    /// Quoted text.
    pub quote: Text,
    /// Attribution line.
    pub author: Option<String>,
}

/// Footer extras.
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
pub struct Footer {
    /// Short tagline above the contact links.
    pub tagline: Option<Text>,
    /// Reception / opening hours line.
    pub hours: Option<Text>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Lang;

    #[test]
    fn empty_document_deserializes_to_defaults() {
        let config: SiteConfig = serde_json::from_str("{}").unwrap();
        assert!(config.site.is_none());
        assert!(config.rooms.is_empty());
        assert!(config.colors.is_empty());
    }

    #[test]
    fn bilingual_and_plain_fields_coexist() {
        let config: SiteConfig = serde_json::from_str(
            r#"{
                "nav": {"items": [
                    {"section": "rooms", "label": {"es": "Habitaciones", "en": "Rooms"}},
                    {"section": "contact", "label": "Contacto"}
                ]},
                "booking": {"mode": "whatsapp", "currency": "USD", "min_nights": 2}
            }"#,
        )
        .unwrap();
        let items = &config.nav.as_ref().unwrap().items;
        assert_eq!(items[0].label.resolve(Lang::En), "Rooms");
        assert_eq!(items[1].label.resolve(Lang::En), "Contacto");
        let booking = config.booking.unwrap();
        assert_eq!(booking.mode, Some(BookingMode::Whatsapp));
        assert_eq!(booking.min_nights, Some(2));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let config: SiteConfig =
            serde_json::from_str(r#"{"site": {"title": "Casona", "theme": "dark"}}"#).unwrap();
        assert_eq!(config.site.unwrap().title.as_deref(), Some("Casona"));
    }

    #[test]
    fn unknown_booking_mode_degrades_to_none() {
        let booking: Booking = serde_json::from_str(r#"{"mode": "carrier-pigeon"}"#).unwrap();
        assert_eq!(booking.mode, None);
        let booking: Booking = serde_json::from_str(r#"{"mode": "External"}"#).unwrap();
        assert_eq!(booking.mode, Some(BookingMode::External));
    }
}
