use super::*;
use crate::util::dates::StayDates;

fn request_for(room_id: u32) -> ReservationRequest {
    ReservationRequest::for_room(room_id)
}

// =============================================================
// Sections
// =============================================================

#[test]
fn section_ids_are_unique_anchors() {
    let ids: Vec<&str> = Section::ALL.iter().map(|section| section.id()).collect();
    assert_eq!(ids, ["inicio", "servicios", "habitaciones", "galeria", "testimonios", "contacto"]);
}

#[test]
fn only_rooms_and_contact_have_dropdowns() {
    let with_dropdown: Vec<Section> = Section::ALL.into_iter().filter(|section| section.has_dropdown()).collect();
    assert_eq!(with_dropdown, [Section::Habitaciones, Section::Contacto]);
}

// =============================================================
// Modals
// =============================================================

#[test]
fn default_state_has_no_overlay() {
    let state = UiState::default();
    assert!(!state.has_overlay());
    assert!(!state.menu_open);
    assert!(!state.scrolled);
}

#[test]
fn close_reservation_resets_subject() {
    let mut state = UiState::default();
    state.apply(UiEvent::OpenReservation(ReservationRequest::default()));
    assert!(state.reservation.is_some());
    state.apply(UiEvent::CloseReservation);
    assert_eq!(state.reservation, None);
}

#[test]
fn reservation_handoff_closes_room_detail() {
    let mut state = UiState::default();
    state.apply(UiEvent::OpenRoomDetail(2));
    assert_eq!(state.room_detail, Some(2));

    let request = ReservationRequest {
        room_id: Some(2),
        stay: Some(StayDates { checkin: "2024-06-10".to_owned(), checkout: "2024-06-12".to_owned() }),
        guests: Some(3),
    };
    state.apply(UiEvent::OpenReservation(request.clone()));
    assert_eq!(state.room_detail, None);
    assert_eq!(state.reservation, Some(request));
}

#[test]
fn opening_reservation_closes_mobile_menu() {
    let mut state = UiState::default();
    state.apply(UiEvent::ToggleMenu);
    assert!(state.menu_open);
    state.apply(UiEvent::OpenReservation(request_for(1)));
    assert!(!state.menu_open);
}

#[test]
fn room_detail_ignores_unknown_room() {
    let mut state = UiState::default();
    state.apply(UiEvent::OpenRoomDetail(999));
    assert_eq!(state.room_detail, None);
}

#[test]
fn close_room_detail_resets_subject() {
    let mut state = UiState::default();
    state.apply(UiEvent::OpenRoomDetail(1));
    state.apply(UiEvent::CloseRoomDetail);
    assert_eq!(state.room_detail, None);
    assert!(!state.has_overlay());
}

// =============================================================
// Lightbox
// =============================================================

#[test]
fn lightbox_next_stops_at_last_image() {
    let last = GALLERY_IMAGES.len() - 1;
    let mut state = UiState::default();
    state.apply(UiEvent::OpenLightbox(last - 1));
    state.apply(UiEvent::LightboxNext);
    assert_eq!(state.lightbox, Some(last));
    state.apply(UiEvent::LightboxNext);
    assert_eq!(state.lightbox, Some(last));
}

#[test]
fn lightbox_previous_stops_at_first_image() {
    let mut state = UiState::default();
    state.apply(UiEvent::OpenLightbox(1));
    state.apply(UiEvent::LightboxPrevious);
    assert_eq!(state.lightbox, Some(0));
    state.apply(UiEvent::LightboxPrevious);
    assert_eq!(state.lightbox, Some(0));
}

#[test]
fn lightbox_ignores_out_of_range_open() {
    let mut state = UiState::default();
    state.apply(UiEvent::OpenLightbox(GALLERY_IMAGES.len()));
    assert_eq!(state.lightbox, None);
}

#[test]
fn lightbox_navigation_without_open_image_is_noop() {
    let mut state = UiState::default();
    state.apply(UiEvent::LightboxNext);
    state.apply(UiEvent::ToggleLightboxZoom);
    assert_eq!(state.lightbox, None);
    assert!(!state.lightbox_zoomed);
}

#[test]
fn lightbox_zoom_resets_on_navigation_and_close() {
    let mut state = UiState::default();
    state.apply(UiEvent::OpenLightbox(0));
    state.apply(UiEvent::ToggleLightboxZoom);
    assert!(state.lightbox_zoomed);
    state.apply(UiEvent::LightboxNext);
    assert!(!state.lightbox_zoomed);

    state.apply(UiEvent::ToggleLightboxZoom);
    state.apply(UiEvent::CloseLightbox);
    assert_eq!(state.lightbox, None);
    assert!(!state.lightbox_zoomed);
}

// =============================================================
// Header chrome
// =============================================================

#[test]
fn toggle_dropdown_switches_and_closes() {
    let mut state = UiState::default();
    state.apply(UiEvent::ToggleDropdown(Section::Habitaciones));
    assert_eq!(state.open_dropdown, Some(Section::Habitaciones));
    state.apply(UiEvent::ToggleDropdown(Section::Contacto));
    assert_eq!(state.open_dropdown, Some(Section::Contacto));
    state.apply(UiEvent::ToggleDropdown(Section::Contacto));
    assert_eq!(state.open_dropdown, None);
}

#[test]
fn close_menu_also_closes_dropdown() {
    let mut state = UiState::default();
    state.apply(UiEvent::ToggleMenu);
    state.apply(UiEvent::ToggleDropdown(Section::Habitaciones));
    state.apply(UiEvent::CloseMenu);
    assert!(!state.menu_open);
    assert_eq!(state.open_dropdown, None);
}

#[test]
fn scrolled_threshold_is_exclusive() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(50.0));
    assert!(is_scrolled(50.5));
}

#[test]
fn set_scrolled_updates_flag() {
    let mut state = UiState::default();
    state.apply(UiEvent::SetScrolled(true));
    assert!(state.scrolled);
    state.apply(UiEvent::SetScrolled(false));
    assert!(!state.scrolled);
}
