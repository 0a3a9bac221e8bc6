//! Auto-advancing guest reviews with arrows and dots. Pauses while hovered.

use leptos::prelude::*;

use crate::data::testimonials::{TESTIMONIALS, Testimonial};
use crate::state::carousel::Carousel;
use crate::state::ui::Section;
use crate::util::autoplay::spawn_autoplay;

use super::format::star_row;

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(TESTIMONIALS.len()));
    spawn_autoplay(carousel);
    let index = move || carousel.with(Carousel::index);

    view! {
        <section
            id=Section::Testimonios.id()
            class="testimonials"
            on:mouseenter=move |_| carousel.update(Carousel::pause)
            on:mouseleave=move |_| carousel.update(Carousel::resume)
        >
            <h2 class="section-title">"Lo que dicen nuestros huéspedes"</h2>
            <div class="testimonials__stage">
                <button
                    class="testimonials__arrow testimonials__arrow--prev"
                    aria-label="Testimonio anterior"
                    on:click=move |_| carousel.update(Carousel::previous)
                >
                    "‹"
                </button>
                {move || TESTIMONIALS.get(index()).map(testimonial_card)}
                <button
                    class="testimonials__arrow testimonials__arrow--next"
                    aria-label="Testimonio siguiente"
                    on:click=move |_| carousel.update(Carousel::next)
                >
                    "›"
                </button>
            </div>
            <div class="testimonials__dots">
                {(0..TESTIMONIALS.len())
                    .map(|i| {
                        view! {
                            <button
                                class="carousel-dot"
                                class:carousel-dot--active=move || index() == i
                                aria-label=format!("Testimonio {}", i + 1)
                                on:click=move |_| carousel.update(|c| c.jump_to(i))
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

fn testimonial_card(testimonial: &'static Testimonial) -> impl IntoView {
    view! {
        <blockquote class="testimonial">
            <span class="stars">{star_row(usize::from(testimonial.rating))}</span>
            <p class="testimonial__comment">"“" {testimonial.comment} "”"</p>
            <footer class="testimonial__author">
                <img class="testimonial__avatar" src=testimonial.avatar alt=testimonial.name />
                <div>
                    <strong>{testimonial.name}</strong>
                    <span>{testimonial.location}</span>
                </div>
            </footer>
        </blockquote>
    }
}
