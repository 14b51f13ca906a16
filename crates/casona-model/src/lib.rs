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
//! Site configuration schema for the Casona landing page.
//!
//! The config document is fetched once at page load and treated as read-only
//! afterwards. Every section is optional; a missing section means the page
//! region is simply not rendered. Fields that face visitors may be written
//! either as a plain string or as a per-language map ([`Text`]), so the same
//! document can drive a bilingual page without duplication.

mod config;
mod lang;
mod text;

pub use config::{
    Amenity, Booking, BookingMode, Contact, Footer, GalleryImage, Hero, Location, NavItem,
    NavSection, Policy, Room, Seo, Site, SiteConfig, SocialLink, Testimonial,
};
pub use lang::{DEFAULT_LANG, Lang};
pub use text::Text;
