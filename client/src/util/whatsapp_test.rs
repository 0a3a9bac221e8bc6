use super::*;
use crate::data::rooms::room_by_id;

fn sample_draft() -> ReservationDraft {
    ReservationDraft {
        name: "Ana Pérez".to_owned(),
        email: "ana@example.com".to_owned(),
        phone: "0991234567".to_owned(),
        checkin: "2024-06-10".to_owned(),
        checkout: "2024-06-13".to_owned(),
        guests: 2,
        comments: String::new(),
        room_id: None,
    }
}

// =============================================================
// URLs
// =============================================================

#[test]
fn direct_chat_url_targets_front_desk_number() {
    assert_eq!(direct_chat_url(), "https://wa.me/593962880127");
}

#[test]
fn whatsapp_url_percent_encodes_text() {
    let url = whatsapp_url("Hola mundo\n¿Hay cupo?");
    assert_eq!(url, "https://wa.me/593962880127?text=Hola%20mundo%0A%C2%BFHay%20cupo%3F");
}

#[test]
fn whatsapp_url_with_empty_message_keeps_text_param() {
    assert_eq!(whatsapp_url(""), "https://wa.me/593962880127?text=");
}

#[test]
fn general_inquiry_message_names_hotel() {
    let message = general_inquiry_message();
    assert!(message.starts_with("¡Hola! Me interesa hacer una reserva en Hotel El Marquez."));
    assert!(message.ends_with("disponibilidad y tarifas?"));
}

// =============================================================
// reservation_message
// =============================================================

#[test]
fn reservation_message_minimal_layout() {
    let message = reservation_message(&sample_draft(), None, 3, 0);
    let expected = "¡Hola! Me interesa hacer una reserva en Hotel El Marquez.\n\n\
📋 DATOS DE LA RESERVA:\n\
• Nombre: Ana Pérez\n\
• Email: ana@example.com\n\
• Teléfono: 0991234567\n\n\
📅 FECHAS:\n\
• Check-in: 2024-06-10\n\
• Check-out: 2024-06-13\n\
• Noches: 3\n\
• Huéspedes: 2\n\n\
¿Podrían confirmar disponibilidad y enviarme más detalles?\n\n¡Gracias!";
    assert_eq!(message, expected);
}

#[test]
fn reservation_message_includes_room_and_total() {
    let room = room_by_id(1).expect("catalog has room 1");
    let message = reservation_message(&sample_draft(), Some(room), 3, room.price * 3);
    let room_block = format!("🏨 HABITACIÓN SELECCIONADA:\n• Tipo: {}\n• Precio: ${}/noche\n\n", room.name, room.price);
    assert!(message.contains(&room_block));
    assert!(message.contains(&format!("💰 TOTAL ESTIMADO: ${}\n\n", room.price * 3)));
}

#[test]
fn reservation_message_sections_keep_order() {
    let room = room_by_id(2).expect("catalog has room 2");
    let mut draft = sample_draft();
    draft.comments = "Llegamos tarde".to_owned();
    let message = reservation_message(&draft, Some(room), 2, 240);

    let order = [
        "📋 DATOS DE LA RESERVA:",
        "🏨 HABITACIÓN SELECCIONADA:",
        "📅 FECHAS:",
        "💰 TOTAL ESTIMADO:",
        "💬 COMENTARIOS:\nLlegamos tarde\n\n",
        "¿Podrían confirmar",
    ];
    let positions: Vec<usize> = order
        .iter()
        .map(|marker| message.find(marker).expect("section present"))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn reservation_message_omits_total_when_zero() {
    let room = room_by_id(1).expect("catalog has room 1");
    let message = reservation_message(&sample_draft(), Some(room), 1, 0);
    assert!(!message.contains("TOTAL ESTIMADO"));
}

#[test]
fn reservation_message_omits_empty_comments() {
    let message = reservation_message(&sample_draft(), None, 1, 0);
    assert!(!message.contains("COMENTARIOS"));
}

#[test]
fn reservation_message_encodes_into_url() {
    let message = reservation_message(&sample_draft(), None, 3, 0);
    let url = whatsapp_url(&message);
    assert!(url.starts_with("https://wa.me/593962880127?text=%C2%A1Hola%21"));
    assert!(!url.contains(' '));
    assert!(!url.contains('\n'));
}
