//! Top bar: logo slot, section links, language selector.

use crate::components::lang_menu::LangMenu;
use crate::viewmodel::{LogoVm, NavLinkVm};
use casona_model::Lang;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct NavbarProps {
    pub logo: Option<LogoVm>,
    #[prop_or_default]
    pub links: Vec<NavLinkVm>,
    pub lang: Lang,
    pub on_select_lang: Callback<Lang>,
}

#[function_component(Navbar)]
pub(crate) fn navbar(props: &NavbarProps) -> Html {
    let logo = props.logo.as_ref().map_or_else(Html::default, |logo| {
        logo.image.as_ref().map_or_else(
            || html! { <span id="logo" class="logo-text text-xl font-bold">{&logo.title}</span> },
            |image| html! { <img id="logo" src={image.clone()} alt={logo.title.clone()} class="h-10" /> },
        )
    });

    html! {
        <div class="navbar bg-base-200 sticky top-0 z-10">
            <div class="navbar-start">{logo}</div>
            <div class="navbar-center">
                if !props.links.is_empty() {
                    <ul id="nav-items" class="menu menu-horizontal px-1">
                        {for props.links.iter().map(|link| html! {
                            <li><a href={link.href.clone()} tabindex="0">{&link.label}</a></li>
                        })}
                    </ul>
                }
            </div>
            <div class="navbar-end gap-2">
                <LangMenu lang={props.lang} on_select={props.on_select_lang.clone()} />
            </div>
        </div>
    }
}
