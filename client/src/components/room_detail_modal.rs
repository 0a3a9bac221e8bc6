//! Full room sheet with its own image gallery and a booking panel.
//!
//! The booking panel collects dates and guests and hands them to the
//! reservation modal; the room detail closes as part of that hand-off.

use leptos::prelude::*;

use crate::data::rooms::Room;
use crate::state::carousel::Carousel;
use crate::state::reservation::{Quote, ReservationRequest};
use crate::state::ui::UiEvent;
use crate::util::dates::{StayDates, nights_between, today};
use crate::util::focus::{focus_on_mount, is_dismiss_key};

use super::format::{counter_label, guest_label, nightly_price_label, nights_label, price_label, star_row};

#[component]
pub fn RoomDetailModal(room: &'static Room, on_event: Callback<UiEvent>) -> impl IntoView {
    let gallery = RwSignal::new(Carousel::new(room.gallery.len()));
    let checkin = RwSignal::new(String::new());
    let checkout = RwSignal::new(String::new());
    let guests = RwSignal::new(1_u32);
    let min_checkin = today();

    let stay = move || StayDates { checkin: checkin.get(), checkout: checkout.get() };
    let quote = move || {
        let stay = stay();
        stay.is_complete()
            .then(|| Quote::for_room(room, nights_between(Some(&stay.checkin), Some(&stay.checkout))))
    };

    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    focus_on_mount(dialog_ref);

    let close = move || on_event.run(UiEvent::CloseRoomDetail);
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        key if is_dismiss_key(key) => {
            ev.prevent_default();
            close();
        }
        "ArrowLeft" => gallery.update(Carousel::previous),
        "ArrowRight" => gallery.update(Carousel::next),
        _ => {}
    });
    let on_reserve = move |_| {
        let stay = stay();
        if !stay.is_complete() {
            return;
        }
        on_event.run(UiEvent::OpenReservation(ReservationRequest {
            room_id: Some(room.id),
            stay: Some(stay),
            guests: Some(guests.get_untracked()),
        }));
    };

    view! {
        <div class="modal__backdrop" on:click=move |_| close()>
            <div
                class="modal room-detail"
                node_ref=dialog_ref
                role="dialog"
                aria-modal="true"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
            >
                <button class="modal__close room-detail__close" on:click=move |_| close() title="Cerrar">
                    "✕"
                </button>

                <div class="room-detail__gallery">
                    <img src=move || room.gallery_image(gallery.with(Carousel::index)) alt=room.name />
                    <button class="room-detail__nav room-detail__nav--prev" aria-label="Anterior" on:click=move |_| gallery.update(Carousel::previous)>
                        "‹"
                    </button>
                    <button class="room-detail__nav room-detail__nav--next" aria-label="Siguiente" on:click=move |_| gallery.update(Carousel::next)>
                        "›"
                    </button>
                    <span class="room-detail__counter">
                        {move || counter_label(gallery.with(Carousel::index), room.gallery.len())}
                    </span>
                    <div class="room-detail__badges">
                        {(room.nightly_discount() > 0).then(|| view! {
                            <span class="badge badge--offer">"Oferta -" {price_label(room.nightly_discount())}</span>
                        })}
                        <span class="badge">"★ " {room.rating_label()}</span>
                    </div>
                </div>

                <div class="room-detail__content">
                    <div class="room-detail__main">
                        <p class="room-detail__subtitle">{room.subtitle}</p>
                        <h2>{room.name}</h2>
                        <div class="room-detail__rating">
                            <span class="stars">{star_row(room.full_stars())}</span>
                            <span>{room.rating_label()}</span>
                        </div>
                        <p>{room.description}</p>

                        <div class="room-detail__stats">
                            <div><strong>{guest_label(room.capacity)}</strong><span>"Capacidad"</span></div>
                            <div><strong>{room.size}</strong><span>"Tamaño"</span></div>
                            <div><strong>{room.view}</strong><span>"Vista"</span></div>
                        </div>

                        <h3>"Lo más destacado"</h3>
                        <ul class="room-detail__highlights">
                            {room.highlights.iter().map(|item| view! { <li>"✓ " {*item}</li> }).collect_view()}
                        </ul>

                        <h3>"Comodidades"</h3>
                        <ul class="room-detail__amenities">
                            {room
                                .amenities
                                .iter()
                                .map(|amenity| {
                                    view! {
                                        <li class=format!("amenity amenity--{}", amenity.icon)>{amenity.name}</li>
                                    }
                                })
                                .collect_view()}
                        </ul>

                        <h3>"Características"</h3>
                        <ul class="room-detail__features">
                            {room.features.iter().map(|feature| view! { <li>{*feature}</li> }).collect_view()}
                        </ul>

                        <div class="room-detail__thumbs">
                            {room
                                .gallery
                                .iter()
                                .enumerate()
                                .map(|(i, src)| {
                                    view! {
                                        <button
                                            class="room-detail__thumb"
                                            class:room-detail__thumb--active=move || gallery.with(Carousel::index) == i
                                            on:click=move |_| gallery.update(|g| g.jump_to(i))
                                        >
                                            <img src=*src alt=format!("{} {}", room.name, i + 1) loading="lazy" />
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <aside class="room-detail__booking">
                        <div class="room-detail__price">
                            {room.original_price.map(|original| view! { <s>{price_label(original)}</s> })}
                            <strong>{nightly_price_label(room.price)}</strong>
                        </div>
                        <label>
                            "Llegada"
                            <input
                                type="date"
                                min=min_checkin
                                prop:value=move || checkin.get()
                                on:input=move |ev| checkin.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Salida"
                            <input
                                type="date"
                                min=move || checkin.get()
                                prop:value=move || checkout.get()
                                on:input=move |ev| checkout.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Huéspedes"
                            <select
                                prop:value=move || guests.get().to_string()
                                on:change=move |ev| {
                                    if let Ok(value) = event_target_value(&ev).parse() {
                                        guests.set(value);
                                    }
                                }
                            >
                                {(1..=room.capacity)
                                    .map(|n| view! { <option value=n.to_string()>{guest_label(n)}</option> })
                                    .collect_view()}
                            </select>
                        </label>

                        {move || quote().map(|quote| {
                            view! {
                                <div class="price-breakdown">
                                    <div class="price-breakdown__row">
                                        <span>{format!("{} × {}", nightly_price_label(room.price), nights_label(quote.nights))}</span>
                                        <span>{price_label(quote.subtotal)}</span>
                                    </div>
                                    {(quote.savings > 0).then(|| view! {
                                        <div class="price-breakdown__row price-breakdown__row--savings">
                                            <span>"Ahorras"</span>
                                            <span>{price_label(quote.savings)}</span>
                                        </div>
                                    })}
                                    <div class="price-breakdown__row price-breakdown__row--total">
                                        <span>"Total"</span>
                                        <span>{price_label(quote.total)}</span>
                                    </div>
                                </div>
                            }
                        })}

                        <button
                            class="btn btn--primary room-detail__reserve"
                            disabled=move || !stay().is_complete()
                            on:click=on_reserve
                        >
                            "Reservar Ahora"
                        </button>
                    </aside>
                </div>
            </div>
        </div>
    }
}
