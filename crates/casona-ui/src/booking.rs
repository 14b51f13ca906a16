//! Booking form validation and dispatch decisions.
//!
//! # Design
//! - Validation consumes the raw field strings and returns typed per-field
//!   errors; the component maps them to translated messages.
//! - Dispatch is a pure decision (`OpenNew` vs `Navigate` vs nothing); the
//!   wasm side merely executes it, so the no-network-on-failure property is
//!   testable natively.

use crate::i18n::Translations;
use crate::links;
use casona_model::{Booking, BookingMode, Contact, Lang};
use chrono::NaiveDate;

/// Raw field values as read from the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingInput {
    /// Check-in date string (`YYYY-MM-DD`).
    pub check_in: String,
    /// Check-out date string (`YYYY-MM-DD`).
    pub check_out: String,
    /// Guest count string.
    pub guests: String,
}

/// The three form fields in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    /// Check-in date.
    CheckIn,
    /// Check-out date.
    CheckOut,
    /// Guest count.
    Guests,
}

/// Why a single field failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// The field is empty.
    Required,
    /// The value does not parse as a date or integer.
    Invalid,
    /// Check-out is not strictly after check-in.
    NotAfterCheckIn,
    /// The stay is shorter than the configured minimum.
    MinNights(u32),
    /// Guest count is below one.
    TooFew,
}

impl FieldError {
    /// Translation key for the message shown next to the field.
    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::Required => "booking.errors.required",
            Self::Invalid => "booking.errors.invalid",
            Self::NotAfterCheckIn => "booking.errors.checkout_before_checkin",
            Self::MinNights(_) => "booking.errors.min_nights",
            Self::TooFew => "booking.errors.too_few_guests",
        }
    }
}

/// Per-field validation outcome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BookingErrors {
    /// Check-in error, if any.
    pub check_in: Option<FieldError>,
    /// Check-out error, if any.
    pub check_out: Option<FieldError>,
    /// Guest-count error, if any.
    pub guests: Option<FieldError>,
}

impl BookingErrors {
    /// First invalid field in document order, for focus placement.
    #[must_use]
    pub const fn first_invalid(&self) -> Option<Field> {
        if self.check_in.is_some() {
            Some(Field::CheckIn)
        } else if self.check_out.is_some() {
            Some(Field::CheckOut)
        } else if self.guests.is_some() {
            Some(Field::Guests)
        } else {
            None
        }
    }
}

/// A validated booking request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BookingRequest {
    /// Check-in date.
    pub check_in: NaiveDate,
    /// Check-out date, strictly after check-in.
    pub check_out: NaiveDate,
    /// Guest count, at least one.
    pub guests: u32,
}

/// Validate raw form input. `min_nights` comes from the booking config
/// (absent means 1).
///
/// # Errors
/// Returns [`BookingErrors`] carrying one error per failing field.
pub fn validate(input: &BookingInput, min_nights: u32) -> Result<BookingRequest, BookingErrors> {
    let mut errors = BookingErrors::default();
    let min_nights = min_nights.max(1);

    let check_in = parse_date(&input.check_in, &mut errors.check_in);
    let check_out = parse_date(&input.check_out, &mut errors.check_out);
    if let (Some(check_in), Some(check_out)) = (check_in, check_out) {
        if check_out <= check_in {
            errors.check_out = Some(FieldError::NotAfterCheckIn);
        } else if (check_out - check_in).num_days() < i64::from(min_nights) {
            errors.check_out = Some(FieldError::MinNights(min_nights));
        }
    }

    let trimmed = input.guests.trim();
    let guests = if trimmed.is_empty() {
        errors.guests = Some(FieldError::Required);
        None
    } else {
        match trimmed.parse::<u32>() {
            Ok(0) => {
                errors.guests = Some(FieldError::TooFew);
                None
            }
            Ok(count) => Some(count),
            Err(_) => {
                errors.guests = Some(FieldError::Invalid);
                None
            }
        }
    };

    match (check_in, check_out, guests) {
        (Some(check_in), Some(check_out), Some(guests))
            if errors.first_invalid().is_none() =>
        {
            Ok(BookingRequest {
                check_in,
                check_out,
                guests,
            })
        }
        _ => Err(errors),
    }
}

fn parse_date(raw: &str, slot: &mut Option<FieldError>) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        *slot = Some(FieldError::Required);
        return None;
    }
    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            *slot = Some(FieldError::Invalid);
            None
        }
    }
}

/// What the page should do with a valid submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BookingDispatch {
    /// Open the URL in a new browsing context (WhatsApp deep link).
    OpenNew(String),
    /// Navigate the current context to the URL (external booking engine).
    Navigate(String),
}

/// Decide the dispatch for a validated request. `None` when the booking
/// mode is absent or its prerequisites (WhatsApp number, engine URL) are
/// missing from the config.
#[must_use]
pub fn dispatch(
    request: BookingRequest,
    booking: Option<&Booking>,
    contact: Option<&Contact>,
    translations: &Translations,
    lang: Lang,
) -> Option<BookingDispatch> {
    let booking = booking?;
    match booking.mode? {
        BookingMode::Whatsapp => {
            let number = contact?.whatsapp.as_deref()?;
            let intro = translations.text("booking.whatsapp_intro", lang);
            let message = format!(
                "{intro}\n{}: {}\n{}: {}\n{}: {}",
                translations.text("booking.check_in", lang),
                request.check_in,
                translations.text("booking.check_out", lang),
                request.check_out,
                translations.text("booking.guests", lang),
                request.guests
            );
            Some(BookingDispatch::OpenNew(links::whatsapp(number, &message)))
        }
        BookingMode::External => {
            let base = booking.url.as_deref()?;
            Some(BookingDispatch::Navigate(links::external_booking(
                base,
                &request.check_in.to_string(),
                &request.check_out.to_string(),
                request.guests,
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(check_in: &str, check_out: &str, guests: &str) -> BookingInput {
        BookingInput {
            check_in: check_in.to_string(),
            check_out: check_out.to_string(),
            guests: guests.to_string(),
        }
    }

    fn translations() -> Translations {
        Translations::from_parts(
            Lang::Es,
            [(
                Lang::Es,
                json!({"booking": {
                    "whatsapp_intro": "Hola, quiero reservar",
                    "check_in": "Llegada",
                    "check_out": "Salida",
                    "guests": "Huéspedes"
                }}),
            )]
            .into_iter()
            .collect(),
        )
    }

    fn whatsapp_config() -> (Booking, Contact) {
        (
            Booking {
                mode: Some(BookingMode::Whatsapp),
                ..Booking::default()
            },
            Contact {
                whatsapp: Some("5215512345678".to_string()),
                ..Contact::default()
            },
        )
    }

    #[test]
    fn empty_fields_report_in_document_order() {
        let errors = validate(&input("", "", ""), 1).unwrap_err();
        assert_eq!(errors.check_in, Some(FieldError::Required));
        assert_eq!(errors.check_out, Some(FieldError::Required));
        assert_eq!(errors.guests, Some(FieldError::Required));
        assert_eq!(errors.first_invalid(), Some(Field::CheckIn));
    }

    #[test]
    fn checkout_must_be_strictly_after_checkin() {
        let errors = validate(&input("2026-09-05", "2026-09-05", "2"), 1).unwrap_err();
        assert_eq!(errors.check_out, Some(FieldError::NotAfterCheckIn));
        assert_eq!(errors.first_invalid(), Some(Field::CheckOut));
        let errors = validate(&input("2026-09-05", "2026-09-01", "2"), 1).unwrap_err();
        assert_eq!(errors.check_out, Some(FieldError::NotAfterCheckIn));
    }

    #[test]
    fn min_nights_is_enforced() {
        let errors = validate(&input("2026-09-01", "2026-09-02", "2"), 3).unwrap_err();
        assert_eq!(errors.check_out, Some(FieldError::MinNights(3)));
        assert!(validate(&input("2026-09-01", "2026-09-04", "2"), 3).is_ok());
    }

    #[test]
    fn guests_must_be_a_positive_integer() {
        let errors = validate(&input("2026-09-01", "2026-09-05", "0"), 1).unwrap_err();
        assert_eq!(errors.guests, Some(FieldError::TooFew));
        let errors = validate(&input("2026-09-01", "2026-09-05", "two"), 1).unwrap_err();
        assert_eq!(errors.guests, Some(FieldError::Invalid));
    }

    #[test]
    fn invalid_submission_never_dispatches() {
        let result = validate(&input("2026-09-05", "2026-09-01", "2"), 1);
        // A failed validation yields no request, so dispatch is unreachable.
        assert!(result.is_err());
    }

    #[test]
    fn whatsapp_dispatch_opens_new_context_with_encoded_details() {
        let request = validate(&input("2026-09-01", "2026-09-05", "2"), 1).unwrap();
        let (booking, contact) = whatsapp_config();
        let dispatch = dispatch(
            request,
            Some(&booking),
            Some(&contact),
            &translations(),
            Lang::Es,
        )
        .unwrap();
        let BookingDispatch::OpenNew(url) = dispatch else {
            panic!("whatsapp mode must not navigate the current page");
        };
        assert!(url.starts_with("https://wa.me/5215512345678?text="));
        assert!(url.contains("2026-09-01"));
        assert!(url.contains("2026-09-05"));
        assert!(url.contains("Hu%C3%A9spedes%3A%202"));
    }

    #[test]
    fn external_dispatch_navigates_with_query_parameters() {
        let request = validate(&input("2026-09-01", "2026-09-05", "3"), 1).unwrap();
        let booking = Booking {
            mode: Some(BookingMode::External),
            url: Some("https://book.example.com".to_string()),
            ..Booking::default()
        };
        let dispatch = dispatch(request, Some(&booking), None, &translations(), Lang::Es).unwrap();
        assert_eq!(
            dispatch,
            BookingDispatch::Navigate(
                "https://book.example.com?check_in=2026-09-01&check_out=2026-09-05&guests=3"
                    .to_string()
            )
        );
    }

    #[test]
    fn missing_mode_or_prerequisites_is_a_silent_noop() {
        let request = validate(&input("2026-09-01", "2026-09-05", "2"), 1).unwrap();
        assert_eq!(
            dispatch(request, None, None, &translations(), Lang::Es),
            None
        );
        let no_mode = Booking::default();
        assert_eq!(
            dispatch(request, Some(&no_mode), None, &translations(), Lang::Es),
            None
        );
        let (booking, _) = whatsapp_config();
        // WhatsApp mode without a number cannot build a link.
        assert_eq!(
            dispatch(request, Some(&booking), None, &translations(), Lang::Es),
            None
        );
    }
}
