//! Page footer: tagline, contact deep links, hours, social profiles.

use crate::viewmodel::FooterVm;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct FooterProps {
    pub vm: FooterVm,
}

#[function_component(FooterSection)]
pub(crate) fn footer_section(props: &FooterProps) -> Html {
    let vm = &props.vm;
    html! {
        <footer id="footer" class="footer p-10 bg-base-200 text-base-content">
            <aside id="footer-tagline">
                {vm.tagline.clone().map(|tagline| html! { <p class="font-semibold">{tagline}</p> }).unwrap_or_default()}
                {vm.hours.clone().map(|hours| html! { <p id="footer-hours" class="opacity-70">{hours}</p> }).unwrap_or_default()}
            </aside>
            if !vm.contact_links.is_empty() {
                <nav id="footer-contact">
                    {for vm.contact_links.iter().map(|link| html! {
                        <a class="link link-hover" href={link.href.clone()}>{&link.label}</a>
                    })}
                </nav>
            }
            if !vm.social.is_empty() {
                <nav id="footer-social">
                    {for vm.social.iter().map(|(network, url)| html! {
                        <a class="link link-hover capitalize" href={url.clone()} target="_blank" rel="noopener">
                            {network}
                        </a>
                    })}
                </nav>
            }
        </footer>
    }
}
