//! Quick booking strip under the hero.
//!
//! Holds its own check-in/check-out/guests inputs and carries them into the
//! reservation request, so the modal opens pre-filled.

use leptos::prelude::*;

use crate::state::reservation::{DEFAULT_MAX_GUESTS, ReservationRequest};
use crate::state::ui::UiEvent;
use crate::util::dates::{StayDates, today};

use super::format::guest_option_label;

const TRUST_BADGES: &[&str] = &["Mejor precio garantizado", "Confirmación inmediata", "Cancelación flexible"];

#[component]
pub fn ReservationBar(on_event: Callback<UiEvent>) -> impl IntoView {
    let checkin = RwSignal::new(String::new());
    let checkout = RwSignal::new(String::new());
    let guests = RwSignal::new(2_u32);
    let min_checkin = today();
    let min_checkout = min_checkin.clone();

    let on_search = move |_| {
        let stay = StayDates { checkin: checkin.get_untracked(), checkout: checkout.get_untracked() };
        on_event.run(UiEvent::OpenReservation(ReservationRequest {
            room_id: None,
            stay: Some(stay),
            guests: Some(guests.get_untracked()),
        }));
    };

    view! {
        <section class="reservation-bar">
            <div class="reservation-bar__fields">
                <label class="reservation-bar__field">
                    <span>"Llegada"</span>
                    <input
                        type="date"
                        min=min_checkin
                        prop:value=move || checkin.get()
                        on:input=move |ev| checkin.set(event_target_value(&ev))
                    />
                </label>
                <label class="reservation-bar__field">
                    <span>"Salida"</span>
                    <input
                        type="date"
                        min=move || {
                            let start = checkin.get();
                            if start.is_empty() { min_checkout.clone() } else { start }
                        }
                        prop:value=move || checkout.get()
                        on:input=move |ev| checkout.set(event_target_value(&ev))
                    />
                </label>
                <label class="reservation-bar__field">
                    <span>"Huéspedes"</span>
                    <select
                        prop:value=move || guests.get().to_string()
                        on:change=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse() {
                                guests.set(value);
                            }
                        }
                    >
                        {(1..=DEFAULT_MAX_GUESTS)
                            .map(|n| view! { <option value=n.to_string()>{guest_option_label(n, DEFAULT_MAX_GUESTS)}</option> })
                            .collect_view()}
                    </select>
                </label>
                <button class="btn btn--primary reservation-bar__submit" on:click=on_search>
                    "Buscar Disponibilidad"
                </button>
            </div>
            <ul class="reservation-bar__badges">
                {TRUST_BADGES.iter().map(|badge| view! { <li>"✓ " {*badge}</li> }).collect_view()}
            </ul>
        </section>
    }
}
