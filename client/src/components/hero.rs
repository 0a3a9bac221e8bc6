//! Full-height hero with the hotel name and the two primary calls to action.

use leptos::prelude::*;

use crate::data::hotel::HOTEL;
use crate::state::reservation::ReservationRequest;
use crate::state::ui::{Section, UiEvent};
use crate::util::scroll::scroll_to_section;

#[component]
pub fn Hero(on_event: Callback<UiEvent>) -> impl IntoView {
    view! {
        <section id=Section::Inicio.id() class="hero" style=format!("background-image: url('{}')", HOTEL.hero_image)>
            <div class="hero__overlay"></div>
            <div class="hero__content">
                <h1 class="hero__title">{HOTEL.name}</h1>
                <p class="hero__tagline">{HOTEL.tagline}</p>
                <div class="hero__actions">
                    <button
                        class="btn btn--primary"
                        on:click=move |_| on_event.run(UiEvent::OpenReservation(ReservationRequest::default()))
                    >
                        "Reservar"
                    </button>
                    <button class="btn btn--outline" on:click=move |_| scroll_to_section(Section::Habitaciones.id())>
                        "Ver Habitaciones"
                    </button>
                </div>
            </div>
        </section>
    }
}
