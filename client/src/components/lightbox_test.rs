use super::*;

#[test]
fn escape_closes() {
    assert_eq!(lightbox_key_event("Escape"), Some(UiEvent::CloseLightbox));
}

#[test]
fn arrows_step_through_images() {
    assert_eq!(lightbox_key_event("ArrowLeft"), Some(UiEvent::LightboxPrevious));
    assert_eq!(lightbox_key_event("ArrowRight"), Some(UiEvent::LightboxNext));
}

#[test]
fn z_toggles_zoom_in_either_case() {
    assert_eq!(lightbox_key_event("z"), Some(UiEvent::ToggleLightboxZoom));
    assert_eq!(lightbox_key_event("Z"), Some(UiEvent::ToggleLightboxZoom));
}

#[test]
fn other_keys_are_ignored() {
    assert_eq!(lightbox_key_event("Enter"), None);
    assert_eq!(lightbox_key_event("x"), None);
}

#[test]
fn previous_arrow_hidden_on_first_image() {
    assert!(!has_previous(0));
    assert!(has_previous(1));
}

#[test]
fn next_arrow_hidden_on_last_image() {
    assert!(has_next(0, 6));
    assert!(has_next(4, 6));
    assert!(!has_next(5, 6));
    assert!(!has_next(0, 0));
}
