//! Location, directions and contact channels.

use leptos::prelude::*;

use crate::data::hotel::{HOTEL, NEARBY_ATTRACTIONS, TRAVEL_TIPS};
use crate::state::ui::Section;
use crate::util::whatsapp::{direct_chat_url, open_in_new_tab};

#[component]
pub fn MapSection() -> impl IntoView {
    view! {
        <section id=Section::Contacto.id() class="map-section">
            <h2 class="section-title">"Ubicación y Contacto"</h2>
            <p class="section-subtitle">{HOTEL.full_address()}</p>

            <div class="map-section__layout">
                <div class="map-section__info">
                    <h3>"Cómo llegar"</h3>
                    <ul class="map-section__tips">
                        {TRAVEL_TIPS
                            .iter()
                            .map(|tip| {
                                view! {
                                    <li>
                                        <strong>{tip.title}</strong>
                                        <p>{tip.description}</p>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>

                    <h3>"Contáctanos"</h3>
                    <div class="map-section__contacts">
                        <a class="map-section__contact" href=HOTEL.phone_href>
                            "📞 " {HOTEL.phone_display}
                        </a>
                        <a class="map-section__contact" href=HOTEL.mailto_href()>
                            "✉️ " {HOTEL.email}
                        </a>
                        <button class="map-section__contact" on:click=move |_| open_in_new_tab(&direct_chat_url())>
                            "💬 WhatsApp"
                        </button>
                    </div>

                    <h3>"Atracciones cercanas"</h3>
                    <ul class="map-section__attractions">
                        {NEARBY_ATTRACTIONS
                            .iter()
                            .map(|place| {
                                view! {
                                    <li>
                                        <span class="map-section__attraction-name">{place.name}</span>
                                        <span class="map-section__attraction-kind">{place.kind}</span>
                                        <span class="map-section__attraction-distance">{place.distance}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div class="map-section__map">
                    <iframe
                        src=HOTEL.map_embed_url
                        title=format!("Mapa de {}", HOTEL.name)
                        referrerpolicy="no-referrer-when-downgrade"
                        allowfullscreen=true
                    ></iframe>
                    <a class="btn btn--outline map-section__external" href=HOTEL.maps_link target="_blank" rel="noopener noreferrer">
                        "Abrir en Google Maps"
                    </a>
                </div>
            </div>
        </section>
    }
}
