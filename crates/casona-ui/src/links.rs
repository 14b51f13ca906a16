//! Outbound deep-link builders.
//!
//! Everything here is pure string construction so the exact URLs the page
//! emits can be asserted in native tests.

/// `tel:` link for a phone number, keeping digits and a leading `+` only.
#[must_use]
pub fn tel(phone: &str) -> String {
    let cleaned: String = phone
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '+')
        .collect();
    format!("tel:{cleaned}")
}

/// `mailto:` link for an email address.
#[must_use]
pub fn mailto(email: &str) -> String {
    format!("mailto:{email}")
}

/// WhatsApp deep link with a URL-encoded prefilled message.
#[must_use]
pub fn whatsapp(number: &str, message: &str) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    format!("https://wa.me/{digits}?text={}", urlencoding::encode(message))
}

/// Map search link for a street address.
#[must_use]
pub fn map_query(address: &str) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        urlencoding::encode(address)
    )
}

/// Map directions link for a street address.
#[must_use]
pub fn map_directions(address: &str) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&destination={}",
        urlencoding::encode(address)
    )
}

/// External booking-engine URL with check-in/check-out/guests parameters
/// appended, joining correctly whether or not the base already carries a
/// query string.
#[must_use]
pub fn external_booking(base: &str, check_in: &str, check_out: &str, guests: u32) -> String {
    let sep = if base.contains('?') { '&' } else { '?' };
    format!(
        "{base}{sep}check_in={}&check_out={}&guests={guests}",
        urlencoding::encode(check_in),
        urlencoding::encode(check_out)
    )
}
