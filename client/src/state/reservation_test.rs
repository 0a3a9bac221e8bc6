use super::*;
use time::macros::date;

use crate::data::rooms::ROOMS;

const TODAY: Date = date!(2024 - 06 - 01);

fn stay(checkin: &str, checkout: &str) -> StayDates {
    StayDates { checkin: checkin.to_owned(), checkout: checkout.to_owned() }
}

fn defaults() -> StayDates {
    stay("2024-06-02", "2024-06-03")
}

fn complete_draft() -> ReservationDraft {
    let mut draft = ReservationDraft::from_request(&ReservationRequest::for_room(1), stay("2024-06-10", "2024-06-13"));
    draft.name = "Ana Pérez".to_owned();
    draft.email = "ana@example.com".to_owned();
    draft.phone = "0991234567".to_owned();
    draft
}

fn room_with(price: u32, original_price: Option<u32>) -> Room {
    Room { price, original_price, ..ROOMS[0] }
}

// =============================================================
// Quote
// =============================================================

#[test]
fn quote_multiplies_price_and_discount_by_nights() {
    let quote = Quote::for_room(&room_with(100, Some(120)), 3);
    assert_eq!(quote.nights, 3);
    assert_eq!(quote.total, 300);
    assert_eq!(quote.savings, 60);
    assert_eq!(quote.original_subtotal(), 360);
}

#[test]
fn quote_without_original_price_has_no_savings() {
    let quote = Quote::for_room(&room_with(100, None), 3);
    assert_eq!(quote.total, 300);
    assert_eq!(quote.savings, 0);
}

// =============================================================
// from_request
// =============================================================

#[test]
fn from_request_uses_defaults_when_no_dates_carried() {
    let draft = ReservationDraft::from_request(&ReservationRequest::default(), defaults());
    assert_eq!(draft.checkin, "2024-06-02");
    assert_eq!(draft.checkout, "2024-06-03");
    assert_eq!(draft.guests, 1);
    assert_eq!(draft.room_id, None);
}

#[test]
fn from_request_keeps_carried_dates_and_guests() {
    let request = ReservationRequest {
        room_id: Some(3),
        stay: Some(stay("2024-07-01", "2024-07-05")),
        guests: Some(3),
    };
    let draft = ReservationDraft::from_request(&request, defaults());
    assert_eq!(draft.checkin, "2024-07-01");
    assert_eq!(draft.checkout, "2024-07-05");
    assert_eq!(draft.guests, 3);
    assert_eq!(draft.nights(), 4);
}

#[test]
fn from_request_keeps_carried_checkin_when_checkout_missing() {
    let request = ReservationRequest { stay: Some(stay("2024-07-01", "")), ..ReservationRequest::default() };
    let draft = ReservationDraft::from_request(&request, defaults());
    assert_eq!(draft.checkin, "2024-07-01");
    assert_eq!(draft.checkout, "2024-07-02");
    assert_eq!(draft.nights(), 1);
}

#[test]
fn from_request_keeps_carried_checkout_when_checkin_missing() {
    let request = ReservationRequest { stay: Some(stay("", "2024-07-04")), ..ReservationRequest::default() };
    let draft = ReservationDraft::from_request(&request, defaults());
    assert_eq!(draft.checkin, "2024-06-02");
    assert_eq!(draft.checkout, "2024-07-04");
}

#[test]
fn from_request_clamps_guests_to_room_capacity() {
    let request = ReservationRequest { room_id: Some(1), guests: Some(4), ..ReservationRequest::default() };
    let draft = ReservationDraft::from_request(&request, defaults());
    assert_eq!(draft.max_guests(), 2);
    assert_eq!(draft.guests, 2);
}

#[test]
fn from_request_drops_unknown_room() {
    let draft = ReservationDraft::from_request(&ReservationRequest::for_room(42), defaults());
    assert_eq!(draft.room_id, None);
    assert_eq!(draft.max_guests(), DEFAULT_MAX_GUESTS);
    assert_eq!(draft.quote(), None);
}

#[test]
fn select_room_reclamps_guests() {
    let request = ReservationRequest { room_id: Some(4), guests: Some(6), ..ReservationRequest::default() };
    let mut draft = ReservationDraft::from_request(&request, defaults());
    assert_eq!(draft.guests, 6);
    draft.select_room(Some(2));
    assert_eq!(draft.guests, 3);
    draft.select_room(None);
    assert_eq!(draft.max_guests(), DEFAULT_MAX_GUESTS);
    assert_eq!(draft.guests, 3);
}

// =============================================================
// validate
// =============================================================

#[test]
fn complete_draft_is_valid() {
    assert_eq!(complete_draft().validate(TODAY), Ok(()));
}

#[test]
fn validate_reports_first_missing_field() {
    let mut draft = complete_draft();
    draft.email = "   ".to_owned();
    assert_eq!(draft.validate(TODAY), Err(DraftError::MissingField("email")));
}

#[test]
fn validate_rejects_inverted_dates() {
    let mut draft = complete_draft();
    draft.checkout = "2024-06-08".to_owned();
    assert_eq!(draft.validate(TODAY), Err(DraftError::CheckoutBeforeCheckin));
}

#[test]
fn validate_accepts_same_day_stay() {
    let mut draft = complete_draft();
    draft.checkout = draft.checkin.clone();
    assert_eq!(draft.validate(TODAY), Ok(()));
    assert_eq!(draft.nights(), 1);
}

#[test]
fn validate_rejects_past_checkin() {
    let mut draft = complete_draft();
    draft.checkin = "2024-05-30".to_owned();
    assert_eq!(draft.validate(TODAY), Err(DraftError::InvalidDate("fecha de llegada")));
}

#[test]
fn validate_rejects_unparseable_checkout() {
    let mut draft = complete_draft();
    draft.checkout = "pronto".to_owned();
    assert_eq!(draft.validate(TODAY), Err(DraftError::InvalidDate("fecha de salida")));
}

#[test]
fn validate_rejects_guest_count_over_capacity() {
    let mut draft = complete_draft();
    draft.guests = 3;
    assert_eq!(draft.validate(TODAY), Err(DraftError::GuestsOutOfRange { guests: 3, max: 2 }));
}

#[test]
fn draft_error_messages_are_user_facing() {
    assert_eq!(DraftError::MissingField("nombre").to_string(), "Completa el campo: nombre");
    assert_eq!(
        DraftError::GuestsOutOfRange { guests: 0, max: 4 }.to_string(),
        "Número de huéspedes no válido: 0 (máximo 4)"
    );
}

// =============================================================
// message
// =============================================================

#[test]
fn message_carries_room_and_total() {
    let draft = complete_draft();
    let message = draft.message();
    assert!(message.contains("• Tipo: Habitación Estándar"));
    assert!(message.contains("• Noches: 3"));
    assert!(message.contains("💰 TOTAL ESTIMADO: $255"));
}

#[test]
fn message_without_room_has_no_total() {
    let mut draft = complete_draft();
    draft.select_room(None);
    let message = draft.message();
    assert!(!message.contains("HABITACIÓN SELECCIONADA"));
    assert!(!message.contains("TOTAL ESTIMADO"));
}
