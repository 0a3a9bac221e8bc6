//! Sticky site header with section navigation and booking shortcuts.
//!
//! DESIGN
//! ======
//! The header turns solid once the page scrolls past the threshold in
//! `state::ui`. On narrow screens the nav collapses into a toggled menu.
//! Dropdown and menu flags live in `UiState` so opening a modal can close
//! them.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::data::hotel::HOTEL;
use crate::data::rooms::ROOMS;
use crate::state::reservation::ReservationRequest;
use crate::state::ui::{Section, UiEvent, UiState};
use crate::util::scroll::scroll_to_section;
use crate::util::whatsapp::{general_inquiry_message, open_whatsapp};

use super::format::nightly_price_label;

fn navigate(section: Section, on_event: Callback<UiEvent>) {
    scroll_to_section(section.id());
    on_event.run(UiEvent::CloseMenu);
}

#[component]
pub fn Header(ui: RwSignal<UiState>, on_event: Callback<UiEvent>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::ui::is_scrolled;
        use crate::util::scroll::page_scroll_y;

        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let scrolled = is_scrolled(page_scroll_y());
            if ui.with_untracked(|state| state.scrolled) != scrolled {
                on_event.run(UiEvent::SetScrolled(scrolled));
            }
        });
        on_cleanup(move || handle.remove());
    }

    let menu_open = move || ui.with(|state| state.menu_open);
    let on_reserve = move |_| on_event.run(UiEvent::OpenReservation(ReservationRequest::default()));
    let on_whatsapp = move |_| open_whatsapp(&general_inquiry_message());

    view! {
        <header class="site-header" class:site-header--scrolled=move || ui.with(|state| state.scrolled)>
            <div class="site-header__inner">
                <a
                    class="site-header__brand"
                    href="#inicio"
                    on:click=move |ev: MouseEvent| {
                        ev.prevent_default();
                        navigate(Section::Inicio, on_event);
                    }
                >
                    <span class="site-header__logo">"M"</span>
                    <span class="site-header__name">{HOTEL.name}</span>
                </a>

                <nav class="site-header__nav">
                    {Section::ALL
                        .into_iter()
                        .map(|section| view! { <NavEntry section=section ui=ui on_event=on_event /> })
                        .collect_view()}
                </nav>

                <div class="site-header__actions">
                    <button class="site-header__whatsapp" on:click=on_whatsapp title="Escríbenos por WhatsApp">
                        "WhatsApp"
                    </button>
                    <button class="btn btn--primary site-header__reserve" on:click=on_reserve>
                        "Reservar Ahora"
                    </button>
                    <button
                        class="site-header__menu-toggle"
                        aria-label="Menú"
                        on:click=move |_| on_event.run(UiEvent::ToggleMenu)
                    >
                        {move || if menu_open() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=menu_open>
                <nav class="site-header__mobile">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button class="site-header__mobile-link" on:click=move |_| navigate(section, on_event)>
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                    <button class="btn btn--primary site-header__mobile-reserve" on:click=on_reserve>
                        "Reservar Ahora"
                    </button>
                </nav>
            </Show>
        </header>
    }
}

/// One desktop nav entry, with its dropdown when the section has one.
#[component]
fn NavEntry(section: Section, ui: RwSignal<UiState>, on_event: Callback<UiEvent>) -> impl IntoView {
    let dropdown_open = move || ui.with(|state| state.open_dropdown == Some(section));

    view! {
        <div
            class="site-header__nav-item"
            on:mouseleave=move |_| {
                if dropdown_open() {
                    on_event.run(UiEvent::CloseDropdown);
                }
            }
        >
            <button class="site-header__nav-link" on:click=move |_| navigate(section, on_event)>
                {section.label()}
            </button>
            {section
                .has_dropdown()
                .then(|| {
                    view! {
                        <button
                            class="site-header__caret"
                            class:site-header__caret--open=dropdown_open
                            aria-label="Más opciones"
                            on:click=move |_| on_event.run(UiEvent::ToggleDropdown(section))
                        >
                            "▾"
                        </button>
                        <Show when=dropdown_open>
                            <div class="site-header__dropdown">{dropdown_links(section, on_event)}</div>
                        </Show>
                    }
                })}
        </div>
    }
}

fn dropdown_links(section: Section, on_event: Callback<UiEvent>) -> AnyView {
    match section {
        Section::Habitaciones => ROOMS
            .iter()
            .map(|room| {
                let id = room.id;
                view! {
                    <button
                        class="site-header__dropdown-link"
                        on:click=move |_| {
                            on_event.run(UiEvent::CloseDropdown);
                            on_event.run(UiEvent::OpenRoomDetail(id));
                        }
                    >
                        <span>{room.name}</span>
                        <span class="site-header__dropdown-meta">{nightly_price_label(room.price)}</span>
                    </button>
                }
            })
            .collect_view()
            .into_any(),
        Section::Contacto => view! {
            <a class="site-header__dropdown-link" href=HOTEL.phone_href>
                {HOTEL.phone_display}
            </a>
            <a class="site-header__dropdown-link" href=HOTEL.mailto_href()>
                {HOTEL.email}
            </a>
            <button class="site-header__dropdown-link" on:click=move |_| open_whatsapp(&general_inquiry_message())>
                "WhatsApp"
            </button>
        }
        .into_any(),
        _ => ().into_any(),
    }
}
