//! Guest testimonials.

use crate::viewmodel::TestimonialVm;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct TestimonialsProps {
    pub heading: String,
    pub testimonials: Vec<TestimonialVm>,
}

#[function_component(TestimonialsSection)]
pub(crate) fn testimonials_section(props: &TestimonialsProps) -> Html {
    html! {
        <section id="testimonials" class="py-12 px-4 max-w-6xl mx-auto">
            <h2 class="text-3xl font-bold mb-8">{&props.heading}</h2>
            <div class="grid gap-6 md:grid-cols-2">
                {for props.testimonials.iter().map(|entry| html! {
                    <blockquote class="card bg-base-200 p-6">
                        <p class="italic">{format!("\u{201c}{}\u{201d}", entry.quote)}</p>
                        {entry.author.clone().map(|author| html! {
                            <footer class="mt-2 text-sm opacity-70">{format!("— {author}")}</footer>
                        }).unwrap_or_default()}
                    </blockquote>
                })}
            </div>
        </section>
    }
}
