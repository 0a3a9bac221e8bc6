//! Always-visible WhatsApp button in the lower-right corner.

use leptos::prelude::*;

use crate::util::whatsapp::{general_inquiry_message, open_whatsapp};

#[component]
pub fn FloatingWhatsApp() -> impl IntoView {
    view! {
        <button
            class="floating-whatsapp"
            aria-label="Contactar por WhatsApp"
            title="¿Necesitas ayuda? Escríbenos"
            on:click=move |_| open_whatsapp(&general_inquiry_message())
        >
            "💬"
        </button>
    }
}
