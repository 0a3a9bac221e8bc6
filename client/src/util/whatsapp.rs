//! Booking-intent messages and the WhatsApp deep-link hand-off.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site has no booking backend. A reservation request is rendered into a
//! fixed-layout text message and opened as `https://wa.me/<number>?text=...`
//! in a new tab, where the guest sends it to the front desk themselves.
//!
//! ERROR HANDLING
//! ==============
//! Dispatch is fire-and-forget. A blocked pop-up or missing `window` is only
//! logged to the browser console; nothing is surfaced to the guest.

#[cfg(test)]
#[path = "whatsapp_test.rs"]
mod whatsapp_test;

use std::fmt::Write as _;

use crate::data::hotel::HOTEL;
use crate::data::rooms::Room;
use crate::state::reservation::ReservationDraft;

pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Chat link to the front desk with no pre-filled text.
pub fn direct_chat_url() -> String {
    format!("{WHATSAPP_BASE_URL}/{}", HOTEL.whatsapp_number)
}

/// Deep link carrying `message` percent-encoded in the `text` parameter.
pub fn whatsapp_url(message: &str) -> String {
    format!("{}?text={}", direct_chat_url(), urlencoding::encode(message))
}

/// Opening line used by the floating button and the header shortcut.
pub fn general_inquiry_message() -> String {
    format!(
        "¡Hola! Me interesa hacer una reserva en {}. ¿Podrían ayudarme con información sobre disponibilidad y tarifas?",
        HOTEL.name
    )
}

/// Render a reservation draft into the front-desk message.
///
/// Section order is fixed: guest data, selected room (only with a room),
/// dates, estimated total (only when `total > 0`), comments (only when
/// non-empty), closing request.
pub fn reservation_message(draft: &ReservationDraft, room: Option<&Room>, nights: u32, total: u32) -> String {
    let mut message = format!("¡Hola! Me interesa hacer una reserva en {}.\n\n", HOTEL.name);

    message.push_str("📋 DATOS DE LA RESERVA:\n");
    let _ = writeln!(message, "• Nombre: {}", draft.name);
    let _ = writeln!(message, "• Email: {}", draft.email);
    let _ = write!(message, "• Teléfono: {}\n\n", draft.phone);

    if let Some(room) = room {
        message.push_str("🏨 HABITACIÓN SELECCIONADA:\n");
        let _ = writeln!(message, "• Tipo: {}", room.name);
        let _ = write!(message, "• Precio: ${}/noche\n\n", room.price);
    }

    message.push_str("📅 FECHAS:\n");
    let _ = writeln!(message, "• Check-in: {}", draft.checkin);
    let _ = writeln!(message, "• Check-out: {}", draft.checkout);
    let _ = writeln!(message, "• Noches: {nights}");
    let _ = write!(message, "• Huéspedes: {}\n\n", draft.guests);

    if total > 0 {
        let _ = write!(message, "💰 TOTAL ESTIMADO: ${total}\n\n");
    }

    if !draft.comments.is_empty() {
        let _ = write!(message, "💬 COMENTARIOS:\n{}\n\n", draft.comments);
    }

    message.push_str("¿Podrían confirmar disponibilidad y enviarme más detalles?\n\n¡Gracias!");
    message
}

/// Open the WhatsApp deep link for `message` in a new browsing context.
pub fn open_whatsapp(message: &str) {
    open_in_new_tab(&whatsapp_url(message));
}

/// Open `url` with `target="_blank"`. No-op outside the browser.
pub fn open_in_new_tab(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            log::warn!("no window available to open {url}");
            return;
        };
        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => log::debug!("opened {url}"),
            Ok(None) => log::warn!("new tab was blocked for {url}"),
            Err(err) => log::warn!("window.open failed: {err:?}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
