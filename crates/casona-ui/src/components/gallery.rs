//! Photo gallery: thumbnail grid plus a lazily-rendered modal.
//!
//! The modal DOM exists only while the state machine is open. Opening
//! records the focused element; closing restores it. A document-level
//! keydown listener is attached only while open and routes keys through
//! [`crate::gallery::interpret_key`].

use crate::gallery::{GalleryKey, GalleryState, interpret_key};
use crate::viewmodel::GalleryImageVm;
use gloo::events::EventListener;
use gloo::utils::document;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct GalleryProps {
    pub heading: String,
    pub images: Vec<GalleryImageVm>,
}

#[function_component(GallerySection)]
pub(crate) fn gallery_section(props: &GalleryProps) -> Html {
    let state = use_state(GalleryState::default);
    let restore_focus = use_mut_ref(|| None as Option<HtmlElement>);
    let len = props.images.len();

    let open = {
        let state = state.clone();
        let restore_focus = restore_focus.clone();
        Callback::from(move |index: usize| {
            *restore_focus.borrow_mut() = document()
                .active_element()
                .and_then(|element| element.dyn_into::<HtmlElement>().ok());
            state.set(GalleryState::open(index, len));
        })
    };
    let close = {
        let state = state.clone();
        let restore_focus = restore_focus.clone();
        Callback::from(move |()| {
            state.set((*state).close());
            if let Some(element) = restore_focus.borrow_mut().take() {
                let _ = element.focus();
            }
        })
    };
    let navigate = {
        let state = state.clone();
        Callback::from(move |delta: isize| {
            state.set((*state).navigate(delta, len));
        })
    };

    {
        let close = close.clone();
        let navigate = navigate.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let handler = open.then(|| {
                    EventListener::new(&document(), "keydown", move |event| {
                        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        match interpret_key(&event.key()) {
                            Some(GalleryKey::Close) => close.emit(()),
                            Some(GalleryKey::Next) => navigate.emit(1),
                            Some(GalleryKey::Prev) => navigate.emit(-1),
                            None => {}
                        }
                    })
                });
                move || drop(handler)
            },
            state.is_open(),
        );
    }

    let modal = if let GalleryState::Open { index } = *state {
        props
            .images
            .get(index)
            .map_or_else(Html::default, |image| {
                render_modal(image, index, len, &close, &navigate)
            })
    } else {
        Html::default()
    };

    html! {
        <section id="gallery" class="py-12 px-4 max-w-6xl mx-auto">
            <h2 class="text-3xl font-bold mb-8">{&props.heading}</h2>
            <div class="grid gap-4 grid-cols-2 md:grid-cols-4">
                {for props.images.iter().enumerate().map(|(index, image)| {
                    let open = open.clone();
                    let onclick = Callback::from(move |_| open.emit(index));
                    html! {
                        <button type="button" class="cursor-zoom-in" onclick={onclick}>
                            <img
                                src={image.url.clone()}
                                alt={image.alt.clone()}
                                class="rounded-box object-cover aspect-square w-full"
                                loading="lazy"
                            />
                        </button>
                    }
                })}
            </div>
            {modal}
        </section>
    }
}

fn render_modal(
    image: &GalleryImageVm,
    index: usize,
    len: usize,
    close: &Callback<()>,
    navigate: &Callback<isize>,
) -> Html {
    let on_close = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };
    let on_prev = {
        let navigate = navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(-1))
    };
    let on_next = {
        let navigate = navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(1))
    };

    html! {
        <div class="modal modal-open" role="dialog" aria-modal="true">
            <div class="modal-box max-w-4xl">
                <img src={image.url.clone()} alt={image.alt.clone()} class="w-full rounded-box" />
                <div class="flex justify-between items-center mt-4">
                    if len > 1 {
                        <button type="button" class="btn btn-circle" onclick={on_prev} aria-label="previous">{"❮"}</button>
                    }
                    <span class="opacity-70">{format!("{} / {len}", index + 1)}</span>
                    if len > 1 {
                        <button type="button" class="btn btn-circle" onclick={on_next} aria-label="next">{"❯"}</button>
                    }
                </div>
            </div>
            <button class="modal-backdrop" onclick={on_close} aria-label="close"></button>
        </div>
    }
}
