//! Booking form that hands the request off to WhatsApp.
//!
//! DESIGN
//! ======
//! The modal is mounted only while `UiState::reservation` is `Some`, and its
//! draft is seeded from that request on mount. Nothing survives a close: the
//! next open starts from a fresh draft.
//!
//! Submit is disabled while `ReservationDraft::validate` fails; the first
//! error is shown once the guest has edited the form.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::data::rooms::ROOMS;
use crate::state::reservation::{ReservationDraft, ReservationRequest};
use crate::state::ui::UiEvent;
use crate::util::dates::{default_reservation_dates, format_display_date, local_today, today};
use crate::util::focus::{focus_on_mount, is_dismiss_key};
use crate::util::whatsapp::open_whatsapp;

use super::format::{guest_label, nightly_price_label, nights_label, price_label};

const IMPORTANT_NOTES: &[&str] = &[
    "Check-in desde las 14:00, check-out hasta las 12:00.",
    "Desayuno incluido en todas las tarifas.",
    "La reserva se confirma por WhatsApp según disponibilidad.",
];

#[component]
pub fn ReservationModal(request: ReservationRequest, on_event: Callback<UiEvent>) -> impl IntoView {
    let draft = RwSignal::new(ReservationDraft::from_request(&request, default_reservation_dates()));
    let touched = RwSignal::new(false);
    let min_checkin = today();

    let error = Memo::new(move |_| draft.with(|d| d.validate(local_today()).err()));

    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    focus_on_mount(dialog_ref);

    let close = move || on_event.run(UiEvent::CloseReservation);
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            close();
        }
    });
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        touched.set(true);
        let current = draft.get_untracked();
        if current.validate(local_today()).is_err() {
            return;
        }
        open_whatsapp(&current.message());
        close();
    };

    view! {
        <div class="modal__backdrop" on:click=move |_| close()>
            <div
                class="modal reservation-modal"
                node_ref=dialog_ref
                role="dialog"
                aria-modal="true"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
            >
                <div class="modal__header">
                    <h2>"Reservar Habitación"</h2>
                    <button class="modal__close" on:click=move |_| close() title="Cerrar">
                        "✕"
                    </button>
                </div>

                {move || draft.with(|d| d.room()).map(|room| {
                    view! {
                        <div class="reservation-modal__room">
                            <img src=room.image alt=room.name />
                            <div>
                                <strong>{room.name}</strong>
                                <span>{nightly_price_label(room.price)}</span>
                            </div>
                        </div>
                    }
                })}

                <form class="reservation-modal__form" on:submit=on_submit>
                    <label>
                        "Nombre completo"
                        <input
                            type="text"
                            required=true
                            prop:value=move || draft.with(|d| d.name.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.name = value);
                                touched.set(true);
                            }
                        />
                    </label>
                    <label>
                        "Email"
                        <input
                            type="email"
                            required=true
                            prop:value=move || draft.with(|d| d.email.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.email = value);
                                touched.set(true);
                            }
                        />
                    </label>
                    <label>
                        "Teléfono"
                        <input
                            type="tel"
                            required=true
                            prop:value=move || draft.with(|d| d.phone.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.phone = value);
                                touched.set(true);
                            }
                        />
                    </label>
                    <label>
                        "Habitación"
                        <select
                            prop:value=move || draft.with(|d| d.room_id.map(|id| id.to_string()).unwrap_or_default())
                            on:change=move |ev| {
                                let room_id = event_target_value(&ev).parse().ok();
                                draft.update(|d| d.select_room(room_id));
                                touched.set(true);
                            }
                        >
                            <option value="">"Sin preferencia"</option>
                            {ROOMS
                                .iter()
                                .map(|room| {
                                    view! {
                                        <option value=room.id.to_string()>
                                            {format!("{} ({})", room.name, nightly_price_label(room.price))}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <div class="reservation-modal__dates">
                        <label>
                            "Llegada"
                            <input
                                type="date"
                                required=true
                                min=min_checkin
                                prop:value=move || draft.with(|d| d.checkin.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.checkin = value);
                                    touched.set(true);
                                }
                            />
                        </label>
                        <label>
                            "Salida"
                            <input
                                type="date"
                                required=true
                                min=move || draft.with(|d| d.checkin.clone())
                                prop:value=move || draft.with(|d| d.checkout.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.checkout = value);
                                    touched.set(true);
                                }
                            />
                        </label>
                    </div>
                    <p class="reservation-modal__date-summary">
                        {move || {
                            draft.with(|d| {
                                format!("{} → {}", format_display_date(&d.checkin), format_display_date(&d.checkout))
                            })
                        }}
                    </p>
                    <label>
                        "Huéspedes"
                        <select
                            prop:value=move || draft.with(|d| d.guests.to_string())
                            on:change=move |ev| {
                                if let Ok(guests) = event_target_value(&ev).parse() {
                                    draft.update(|d| d.guests = guests);
                                    touched.set(true);
                                }
                            }
                        >
                            {move || {
                                (1..=draft.with(ReservationDraft::max_guests))
                                    .map(|n| view! { <option value=n.to_string()>{guest_label(n)}</option> })
                                    .collect_view()
                            }}
                        </select>
                    </label>
                    <label>
                        "Comentarios"
                        <textarea
                            rows="3"
                            prop:value=move || draft.with(|d| d.comments.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.comments = value);
                                touched.set(true);
                            }
                        ></textarea>
                    </label>

                    {move || draft.with(ReservationDraft::quote).map(|quote| {
                        view! {
                            <div class="price-breakdown">
                                <div class="price-breakdown__row">
                                    <span>{nights_label(quote.nights)}</span>
                                    <span>{price_label(quote.original_subtotal())}</span>
                                </div>
                                {(quote.savings > 0).then(|| view! {
                                    <div class="price-breakdown__row price-breakdown__row--savings">
                                        <span>"Descuento"</span>
                                        <span>"-" {price_label(quote.savings)}</span>
                                    </div>
                                })}
                                <div class="price-breakdown__row price-breakdown__row--total">
                                    <span>"Total estimado"</span>
                                    <span>{price_label(quote.total)}</span>
                                </div>
                            </div>
                        }
                    })}

                    <Show when=move || touched.get()>
                        {move || error.get().map(|err| view! { <p class="form-error">{err.to_string()}</p> })}
                    </Show>

                    <ul class="reservation-modal__notes">
                        {IMPORTANT_NOTES.iter().map(|note| view! { <li>{*note}</li> }).collect_view()}
                    </ul>

                    <div class="modal__actions">
                        <button type="button" class="btn btn--outline" on:click=move |_| close()>
                            "Cancelar"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || error.with(Option::is_some)>
                            "Enviar por WhatsApp"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
