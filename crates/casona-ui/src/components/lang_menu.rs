//! Language selector, value-bound so it stays in sync with the active
//! language even when the change originated elsewhere (stored preference).

use casona_model::Lang;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LangMenuProps {
    pub lang: Lang,
    pub on_select: Callback<Lang>,
}

#[function_component(LangMenu)]
pub(crate) fn lang_menu(props: &LangMenuProps) -> Html {
    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                if let Some(next) = Lang::from_lang_tag(&select.value()) {
                    on_select.emit(next);
                }
            }
        })
    };

    html! {
        <select
            id="langSwitcher"
            class="select select-bordered select-sm"
            value={props.lang.code()}
            onchange={onchange}
        >
            {for Lang::all().iter().map(|lang| html! {
                <option value={lang.code()} selected={*lang == props.lang}>{lang.label()}</option>
            })}
        </select>
    }
}
