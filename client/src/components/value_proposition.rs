//! "Why choose us" feature cards.

use leptos::prelude::*;

use crate::data::testimonials::HOTEL_FEATURES;
use crate::state::ui::Section;

#[component]
pub fn ValueProposition() -> impl IntoView {
    view! {
        <section id=Section::Servicios.id() class="value-prop">
            <h2 class="section-title">"¿Por qué elegirnos?"</h2>
            <p class="section-subtitle">"Comodidad, sabor y aventura en la puerta de la Amazonía"</p>
            <div class="value-prop__grid">
                {HOTEL_FEATURES
                    .iter()
                    .map(|feature| {
                        view! {
                            <article class="value-prop__card">
                                <span class="value-prop__icon">{feature.icon}</span>
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
