//! Room carousel: one featured room at a time with arrows, dots and
//! thumbnails. Autoplays and pauses while hovered.

use leptos::prelude::*;

use crate::data::rooms::{ROOMS, Room};
use crate::state::carousel::Carousel;
use crate::state::reservation::ReservationRequest;
use crate::state::ui::{Section, UiEvent};
use crate::util::autoplay::spawn_autoplay;

use super::format::{guest_label, price_label, star_row};

#[component]
pub fn RoomsSection(on_event: Callback<UiEvent>) -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(ROOMS.len()));
    spawn_autoplay(carousel);

    let index = move || carousel.with(Carousel::index);

    view! {
        <section
            id=Section::Habitaciones.id()
            class="rooms"
            on:mouseenter=move |_| carousel.update(Carousel::pause)
            on:mouseleave=move |_| carousel.update(Carousel::resume)
        >
            <h2 class="section-title">"Nuestras Habitaciones"</h2>
            <p class="section-subtitle">"Espacios diseñados para tu descanso en la Amazonía"</p>

            <div class="rooms__stage">
                <button class="rooms__arrow rooms__arrow--prev" aria-label="Anterior" on:click=move |_| carousel.update(Carousel::previous)>
                    "‹"
                </button>
                {move || ROOMS.get(index()).map(|room| view! { <RoomSlide room=room on_event=on_event /> })}
                <button class="rooms__arrow rooms__arrow--next" aria-label="Siguiente" on:click=move |_| carousel.update(Carousel::next)>
                    "›"
                </button>
            </div>

            <div class="rooms__dots">
                {ROOMS
                    .iter()
                    .enumerate()
                    .map(|(i, room)| {
                        view! {
                            <button
                                class="carousel-dot"
                                class:carousel-dot--active=move || index() == i
                                aria-label=room.name
                                on:click=move |_| carousel.update(|c| c.jump_to(i))
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="rooms__thumbs">
                {ROOMS
                    .iter()
                    .enumerate()
                    .map(|(i, room)| {
                        view! {
                            <button
                                class="rooms__thumb"
                                class:rooms__thumb--active=move || index() == i
                                on:click=move |_| carousel.update(|c| c.jump_to(i))
                            >
                                <img src=room.image alt=room.name loading="lazy" />
                                <span>{room.name}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn RoomSlide(room: &'static Room, on_event: Callback<UiEvent>) -> impl IntoView {
    let id = room.id;
    let discount = room.nightly_discount();

    view! {
        <article class="room-card">
            <div class="room-card__media">
                <img src=room.image alt=room.name />
                {(discount > 0).then(|| view! { <span class="room-card__badge">"Ahorra " {price_label(discount)}</span> })}
            </div>
            <div class="room-card__body">
                <p class="room-card__subtitle">{room.subtitle}</p>
                <h3 class="room-card__name">{room.name}</h3>
                <div class="room-card__rating">
                    <span class="stars">{star_row(room.full_stars())}</span>
                    <span>{room.rating_label()}</span>
                </div>
                <p class="room-card__description">{room.description}</p>
                <ul class="room-card__facts">
                    <li>{guest_label(room.capacity)}</li>
                    <li>{room.size}</li>
                    <li>{room.view}</li>
                </ul>
                <ul class="room-card__amenities">
                    {room.amenities.iter().take(4).map(|amenity| view! { <li>{amenity.name}</li> }).collect_view()}
                </ul>
                <div class="room-card__price">
                    {room.original_price.map(|original| view! { <s class="room-card__original">{price_label(original)}</s> })}
                    <strong>{price_label(room.price)}</strong>
                    <span>"/noche"</span>
                </div>
                <div class="room-card__actions">
                    <button class="btn btn--outline" on:click=move |_| on_event.run(UiEvent::OpenRoomDetail(id))>
                        "Ver Detalles Completos"
                    </button>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| on_event.run(UiEvent::OpenReservation(ReservationRequest::for_room(id)))
                    >
                        "Reservar Ahora"
                    </button>
                </div>
            </div>
        </article>
    }
}
