//! The one-page site: every section in order plus the overlays.
//!
//! DESIGN
//! ======
//! This is the only owner of `UiState`. Children get the read signal and an
//! `on_event` callback; every change goes through `UiState::apply` here.

use leptos::prelude::*;

use crate::components::floating_whatsapp::FloatingWhatsApp;
use crate::components::footer::Footer;
use crate::components::gallery::GallerySection;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::lightbox::Lightbox;
use crate::components::map_section::MapSection;
use crate::components::reservation_bar::ReservationBar;
use crate::components::reservation_modal::ReservationModal;
use crate::components::room_detail_modal::RoomDetailModal;
use crate::components::rooms_section::RoomsSection;
use crate::components::testimonials::TestimonialsSection;
use crate::components::value_proposition::ValueProposition;
use crate::data::rooms::room_by_id;
use crate::state::ui::{UiEvent, UiState};

#[component]
pub fn HomePage() -> impl IntoView {
    let ui = RwSignal::new(UiState::default());
    let on_event = Callback::new(move |event: UiEvent| {
        #[cfg(feature = "hydrate")]
        log::debug!("ui event: {event:?}");
        ui.update(|state| state.apply(event));
    });

    // Memoized: only a change of subject remounts a modal.
    let reservation = Memo::new(move |_| ui.with(|state| state.reservation.clone()));
    let room_detail = Memo::new(move |_| ui.with(|state| state.room_detail));
    let lightbox_open = move || ui.with(|state| state.lightbox.is_some());

    // Erased so the page type stays shallow enough for the SSR build.
    let sections = view! {
        <Hero on_event=on_event />
        <ReservationBar on_event=on_event />
        <ValueProposition />
        <RoomsSection on_event=on_event />
        <GallerySection on_event=on_event />
        <TestimonialsSection />
        <MapSection />
    }
    .into_any();

    view! {
        <div class="site" class:site--locked=move || ui.with(UiState::has_overlay)>
            {view! { <Header ui=ui on_event=on_event /> }.into_any()}
            <main>{sections}</main>
            <Footer />
            <FloatingWhatsApp />

            {move || room_detail.get().and_then(room_by_id).map(|room| view! { <RoomDetailModal room=room on_event=on_event /> }.into_any())}
            {move || reservation.get().map(|request| view! { <ReservationModal request=request on_event=on_event /> }.into_any())}
            <Show when=lightbox_open>
                <Lightbox ui=ui on_event=on_event />
            </Show>
        </div>
    }
}
