//! Page sections and overlays.
//!
//! Sections render static catalog content and report user intent upward as
//! `UiEvent`s through an `on_event` callback prop; none of them own overlay
//! state.

pub mod floating_whatsapp;
pub mod footer;
pub mod format;
pub mod gallery;
pub mod header;
pub mod hero;
pub mod lightbox;
pub mod map_section;
pub mod reservation_bar;
pub mod reservation_modal;
pub mod room_detail_modal;
pub mod rooms_section;
pub mod testimonials;
pub mod value_proposition;
