//! Amenity list.

use crate::viewmodel::AmenityVm;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct AmenitiesProps {
    pub heading: String,
    pub amenities: Vec<AmenityVm>,
}

#[function_component(AmenitiesSection)]
pub(crate) fn amenities_section(props: &AmenitiesProps) -> Html {
    html! {
        <section id="amenities" class="py-12 px-4 max-w-6xl mx-auto">
            <h2 class="text-3xl font-bold mb-8">{&props.heading}</h2>
            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-4">
                {for props.amenities.iter().map(|amenity| html! {
                    <div class="flex items-start gap-3">
                        {amenity.icon.clone().map(|icon| html! {
                            <span class="text-2xl" aria-hidden="true">{icon}</span>
                        }).unwrap_or_default()}
                        <div>
                            <p class="font-semibold">{&amenity.name}</p>
                            {amenity.description.clone().map(|description| html! {
                                <p class="text-sm opacity-70">{description}</p>
                            }).unwrap_or_default()}
                        </div>
                    </div>
                })}
            </div>
        </section>
    }
}
