//! Booking form: synchronous validation, inline errors, dispatch.
//!
//! Validation and the dispatch decision are pure (`crate::booking`); this
//! component only reads the inputs, renders the errors and executes the
//! decided dispatch. No network call ever happens on a failed validation.

use crate::booking::{
    BookingDispatch, BookingErrors, BookingInput, Field, FieldError, dispatch, validate,
};
use crate::i18n::Translations;
use casona_model::{Booking, Contact, Lang};
use gloo::utils::window;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct BookingFormProps {
    pub heading: String,
    pub booking: Option<Booking>,
    pub contact: Option<Contact>,
    pub translations: Translations,
    pub lang: Lang,
}

#[function_component(BookingForm)]
pub(crate) fn booking_form(props: &BookingFormProps) -> Html {
    let errors = use_state(BookingErrors::default);
    let check_in_ref = use_node_ref();
    let check_out_ref = use_node_ref();
    let guests_ref = use_node_ref();

    let min_nights = props
        .booking
        .as_ref()
        .and_then(|booking| booking.min_nights)
        .unwrap_or(1);

    let onsubmit = {
        let errors = errors.clone();
        let check_in_ref = check_in_ref.clone();
        let check_out_ref = check_out_ref.clone();
        let guests_ref = guests_ref.clone();
        let booking = props.booking.clone();
        let contact = props.contact.clone();
        let translations = props.translations.clone();
        let lang = props.lang;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let input = BookingInput {
                check_in: input_value(&check_in_ref),
                check_out: input_value(&check_out_ref),
                guests: input_value(&guests_ref),
            };
            match validate(&input, min_nights) {
                Err(failed) => {
                    errors.set(failed);
                    let target = match failed.first_invalid() {
                        Some(Field::CheckIn) | None => &check_in_ref,
                        Some(Field::CheckOut) => &check_out_ref,
                        Some(Field::Guests) => &guests_ref,
                    };
                    focus(target);
                }
                Ok(request) => {
                    errors.set(BookingErrors::default());
                    if let Some(action) =
                        dispatch(request, booking.as_ref(), contact.as_ref(), &translations, lang)
                    {
                        execute(&action);
                    }
                    clear(&check_in_ref);
                    clear(&check_out_ref);
                    clear(&guests_ref);
                    focus(&check_in_ref);
                }
            }
        })
    };

    let field_error = |error: Option<FieldError>| {
        error.map_or_else(Html::default, |error| {
            let message = match error {
                FieldError::MinNights(nights) => format!(
                    "{} ({nights})",
                    props.translations.text(error.message_key(), props.lang)
                ),
                _ => props.translations.text(error.message_key(), props.lang),
            };
            html! { <p class="text-error text-sm mt-1" role="alert">{message}</p> }
        })
    };

    html! {
        <section id="booking" class="py-12 px-4 max-w-xl mx-auto">
            <h2 class="text-3xl font-bold mb-8">{&props.heading}</h2>
            <form id="booking-form" class="card bg-base-200 p-6 grid gap-4" onsubmit={onsubmit}>
                <label class="form-control">
                    <span class="label-text">{props.translations.text("booking.check_in", props.lang)}</span>
                    <input
                        id="booking-check-in"
                        ref={check_in_ref.clone()}
                        type="date"
                        class="input input-bordered"
                    />
                    {field_error(errors.check_in)}
                </label>
                <label class="form-control">
                    <span class="label-text">{props.translations.text("booking.check_out", props.lang)}</span>
                    <input
                        id="booking-check-out"
                        ref={check_out_ref.clone()}
                        type="date"
                        class="input input-bordered"
                    />
                    {field_error(errors.check_out)}
                </label>
                <label class="form-control">
                    <span class="label-text">{props.translations.text("booking.guests", props.lang)}</span>
                    <input
                        id="booking-guests"
                        ref={guests_ref.clone()}
                        type="number"
                        min="1"
                        class="input input-bordered"
                    />
                    {field_error(errors.guests)}
                </label>
                <button type="submit" class="btn btn-primary">
                    {props.translations.text("booking.cta", props.lang)}
                </button>
            </form>
        </section>
    }
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

fn clear(node: &NodeRef) {
    if let Some(input) = node.cast::<HtmlInputElement>() {
        input.set_value("");
    }
}

fn focus(node: &NodeRef) {
    if let Some(input) = node.cast::<HtmlInputElement>() {
        let _ = input.focus();
    }
}

fn execute(action: &BookingDispatch) {
    match action {
        BookingDispatch::OpenNew(url) => {
            let _ = window().open_with_url_and_target(url, "_blank");
        }
        BookingDispatch::Navigate(url) => {
            let _ = window().location().set_href(url);
        }
    }
}
