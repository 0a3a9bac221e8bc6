//! Photo grid; clicking a tile opens the lightbox at that image.

use leptos::prelude::*;

use crate::data::gallery::GALLERY_IMAGES;
use crate::state::ui::{Section, UiEvent};

#[component]
pub fn GallerySection(on_event: Callback<UiEvent>) -> impl IntoView {
    view! {
        <section id=Section::Galeria.id() class="gallery">
            <h2 class="section-title">"Galería"</h2>
            <p class="section-subtitle">"Descubre nuestras instalaciones"</p>
            <div class="gallery__grid">
                {GALLERY_IMAGES
                    .iter()
                    .enumerate()
                    .map(|(i, image)| {
                        view! {
                            <button class="gallery__tile" on:click=move |_| on_event.run(UiEvent::OpenLightbox(i))>
                                <img src=image.src alt=image.alt loading="lazy" />
                                <span class="gallery__caption">{image.title}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
