//! Full-screen viewer for gallery images.
//!
//! Keys while open: Escape closes, Left/Right step through images (stopping
//! at the ends), Z toggles zoom.

#[cfg(test)]
#[path = "lightbox_test.rs"]
mod lightbox_test;

use leptos::prelude::*;

use crate::data::gallery::GALLERY_IMAGES;
use crate::state::ui::{UiEvent, UiState};

use super::format::counter_label;

/// Map a key press to the lightbox event it triggers.
pub fn lightbox_key_event(key: &str) -> Option<UiEvent> {
    match key {
        "Escape" => Some(UiEvent::CloseLightbox),
        "ArrowLeft" => Some(UiEvent::LightboxPrevious),
        "ArrowRight" => Some(UiEvent::LightboxNext),
        "z" | "Z" => Some(UiEvent::ToggleLightboxZoom),
        _ => None,
    }
}

/// A previous image exists before `index`.
pub fn has_previous(index: usize) -> bool {
    index > 0
}

/// A next image exists after `index` in a gallery of `len`.
pub fn has_next(index: usize, len: usize) -> bool {
    index + 1 < len
}

#[component]
pub fn Lightbox(ui: RwSignal<UiState>, on_event: Callback<UiEvent>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if let Some(event) = lightbox_key_event(&ev.key()) {
                ev.prevent_default();
                on_event.run(event);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let index = move || ui.with(|state| state.lightbox.unwrap_or(0));
    let image = move || GALLERY_IMAGES.get(index());
    let zoomed = move || ui.with(|state| state.lightbox_zoomed);
    let show_previous = move || has_previous(index());
    let show_next = move || has_next(index(), GALLERY_IMAGES.len());

    view! {
        <div class="lightbox" on:click=move |_| on_event.run(UiEvent::CloseLightbox)>
            <div class="lightbox__toolbar" on:click=move |ev| ev.stop_propagation()>
                <span class="lightbox__counter">{move || counter_label(index(), GALLERY_IMAGES.len())}</span>
                <button class="lightbox__button" title="Zoom (Z)" on:click=move |_| on_event.run(UiEvent::ToggleLightboxZoom)>
                    {move || if zoomed() { "−" } else { "+" }}
                </button>
                <button class="lightbox__button" title="Cerrar (Esc)" on:click=move |_| on_event.run(UiEvent::CloseLightbox)>
                    "✕"
                </button>
            </div>

            <Show when=show_previous>
                <button
                    class="lightbox__nav lightbox__nav--prev"
                    aria-label="Anterior"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_event.run(UiEvent::LightboxPrevious);
                    }
                >
                    "‹"
                </button>
            </Show>

            <figure class="lightbox__figure" on:click=move |ev| ev.stop_propagation()>
                {move || image().map(|image| {
                    view! {
                        <img
                            class="lightbox__image"
                            class:lightbox__image--zoomed=zoomed
                            src=image.src
                            alt=image.alt
                            on:click=move |_| on_event.run(UiEvent::ToggleLightboxZoom)
                        />
                        <figcaption class="lightbox__title">{image.title}</figcaption>
                    }
                })}
            </figure>

            <Show when=show_next>
                <button
                    class="lightbox__nav lightbox__nav--next"
                    aria-label="Siguiente"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_event.run(UiEvent::LightboxNext);
                    }
                >
                    "›"
                </button>
            </Show>
        </div>
    }
}
