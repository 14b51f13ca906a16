//! House policies as a collapse list.

use crate::viewmodel::PolicyVm;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PoliciesProps {
    pub heading: String,
    pub policies: Vec<PolicyVm>,
}

#[function_component(PoliciesSection)]
pub(crate) fn policies_section(props: &PoliciesProps) -> Html {
    html! {
        <section id="policies" class="py-12 px-4 max-w-3xl mx-auto">
            <h2 class="text-3xl font-bold mb-8">{&props.heading}</h2>
            {for props.policies.iter().map(|policy| html! {
                <div class="collapse collapse-arrow bg-base-200 mb-2">
                    <input type="checkbox" />
                    <div class="collapse-title font-semibold">{&policy.title}</div>
                    {policy.body.clone().map(|body| html! {
                        <div class="collapse-content"><p>{body}</p></div>
                    }).unwrap_or_default()}
                </div>
            })}
        </section>
    }
}
