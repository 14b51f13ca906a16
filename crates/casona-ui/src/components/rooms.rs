//! Room cards.

use crate::viewmodel::RoomVm;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct RoomsProps {
    pub heading: String,
    pub rooms: Vec<RoomVm>,
}

#[function_component(RoomsSection)]
pub(crate) fn rooms_section(props: &RoomsProps) -> Html {
    html! {
        <section id="rooms" class="py-12 px-4 max-w-6xl mx-auto">
            <h2 class="text-3xl font-bold mb-8">{&props.heading}</h2>
            <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                {for props.rooms.iter().map(room_card)}
            </div>
        </section>
    }
}

fn room_card(room: &RoomVm) -> Html {
    html! {
        <div class="card shadow bg-base-200">
            {room.image.clone().map(|image| html! {
                <figure><img src={image} alt={room.name.clone()} /></figure>
            }).unwrap_or_default()}
            <div class="card-body">
                <h3 class="card-title">{&room.name}</h3>
                {room.description.clone().map(|description| html! {
                    <p class="opacity-80">{description}</p>
                }).unwrap_or_default()}
                if !room.features.is_empty() {
                    <ul class="list-disc list-inside text-sm opacity-70">
                        {for room.features.iter().map(|feature| html! { <li>{feature}</li> })}
                    </ul>
                }
                {room.price_label.clone().map(|price| html! {
                    <div class="card-actions justify-end">
                        <span class="badge badge-primary badge-lg">{price}</span>
                    </div>
                }).unwrap_or_default()}
            </div>
        </div>
    }
}
