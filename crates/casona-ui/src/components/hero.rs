//! Hero banner with the booking call to action.

use crate::viewmodel::HeroVm;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct HeroProps {
    pub vm: HeroVm,
}

#[function_component(HeroSection)]
pub(crate) fn hero_section(props: &HeroProps) -> Html {
    let vm = &props.vm;
    html! {
        <div class="hero min-h-[360px] bg-base-200" id="hero">
            <div class="hero-content flex-col lg:flex-row">
                {vm.image.clone().map(|image| html! {
                    <img src={image} alt="" class="max-w-sm rounded-lg shadow-2xl" />
                }).unwrap_or_default()}
                <div>
                    <h1 id="hero-heading" class="text-4xl font-bold">{&vm.heading}</h1>
                    {vm.subheading.clone().map(|subheading| html! {
                        <p class="py-6 text-lg opacity-80">{subheading}</p>
                    }).unwrap_or_default()}
                    if !vm.cta_label.is_empty() {
                        <a id="booking-cta" href="#booking" class="btn btn-primary">{&vm.cta_label}</a>
                    }
                </div>
            </div>
        </div>
    }
}
