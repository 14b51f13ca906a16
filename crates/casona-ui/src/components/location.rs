//! Location section: address, embedded map, map deep links.

use crate::viewmodel::LocationVm;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LocationProps {
    pub heading: String,
    pub vm: LocationVm,
    pub map_label: String,
    pub directions_label: String,
}

#[function_component(LocationSection)]
pub(crate) fn location_section(props: &LocationProps) -> Html {
    let vm = &props.vm;
    html! {
        <section id="location" class="py-12 px-4 max-w-6xl mx-auto">
            <h2 class="text-3xl font-bold mb-8">{&props.heading}</h2>
            {vm.map_embed_url.clone().map(|url| html! {
                <iframe
                    src={url}
                    class="w-full h-80 rounded-box border-0"
                    loading="lazy"
                    title="map"
                />
            }).unwrap_or_default()}
            {vm.address.clone().map(|address| html! {
                <p class="mt-4 font-semibold">{address}</p>
            }).unwrap_or_default()}
            {vm.note.clone().map(|note| html! {
                <p class="text-sm opacity-70">{note}</p>
            }).unwrap_or_default()}
            <div class="mt-4 flex gap-2">
                {vm.map_link.clone().map(|href| html! {
                    <a class="btn btn-outline btn-sm" href={href} target="_blank" rel="noopener">
                        {&props.map_label}
                    </a>
                }).unwrap_or_default()}
                {vm.directions_link.clone().map(|href| html! {
                    <a class="btn btn-outline btn-sm" href={href} target="_blank" rel="noopener">
                        {&props.directions_label}
                    </a>
                }).unwrap_or_default()}
            </div>
        </section>
    }
}
