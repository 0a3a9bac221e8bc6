//! Page chrome and overlay state (menu, dropdowns, modals, lightbox).
//!
//! DESIGN
//! ======
//! Components never mutate this directly. They emit a [`UiEvent`] through the
//! `on_event` callback they receive as a prop and the page root folds it in
//! with [`UiState::apply`]. Each overlay is open exactly when its subject is
//! `Some`, so closing an overlay also forgets what it was showing.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::data::gallery::GALLERY_IMAGES;
use crate::data::rooms::room_by_id;
use crate::state::reservation::ReservationRequest;

/// Header gets its solid background once the page has scrolled past this.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Page sections reachable from the navigation, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Inicio,
    Servicios,
    Habitaciones,
    Galeria,
    Testimonios,
    Contacto,
}

impl Section {
    pub const ALL: [Self; 6] = [
        Self::Inicio,
        Self::Servicios,
        Self::Habitaciones,
        Self::Galeria,
        Self::Testimonios,
        Self::Contacto,
    ];

    /// DOM id of the section anchor.
    pub fn id(self) -> &'static str {
        match self {
            Self::Inicio => "inicio",
            Self::Servicios => "servicios",
            Self::Habitaciones => "habitaciones",
            Self::Galeria => "galeria",
            Self::Testimonios => "testimonios",
            Self::Contacto => "contacto",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Inicio => "Inicio",
            Self::Servicios => "Servicios",
            Self::Habitaciones => "Habitaciones",
            Self::Galeria => "Galería",
            Self::Testimonios => "Testimonios",
            Self::Contacto => "Contacto",
        }
    }

    /// Whether the desktop nav shows a dropdown under this entry.
    pub fn has_dropdown(self) -> bool {
        matches!(self, Self::Habitaciones | Self::Contacto)
    }
}

/// Everything a component can ask the page to change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    OpenReservation(ReservationRequest),
    CloseReservation,
    OpenRoomDetail(u32),
    CloseRoomDetail,
    OpenLightbox(usize),
    CloseLightbox,
    LightboxNext,
    LightboxPrevious,
    ToggleLightboxZoom,
    ToggleMenu,
    CloseMenu,
    ToggleDropdown(Section),
    CloseDropdown,
    SetScrolled(bool),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub reservation: Option<ReservationRequest>,
    /// Room id shown in the detail modal.
    pub room_detail: Option<u32>,
    /// Gallery index shown in the lightbox.
    pub lightbox: Option<usize>,
    pub lightbox_zoomed: bool,
    pub menu_open: bool,
    pub open_dropdown: Option<Section>,
    pub scrolled: bool,
}

impl UiState {
    /// Fold one event into the state.
    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::OpenReservation(request) => {
                self.reservation = Some(request);
                self.room_detail = None;
                self.lightbox = None;
                self.lightbox_zoomed = false;
                self.close_menu();
            }
            UiEvent::CloseReservation => self.reservation = None,
            UiEvent::OpenRoomDetail(id) => {
                if room_by_id(id).is_some() {
                    self.room_detail = Some(id);
                    self.close_menu();
                }
            }
            UiEvent::CloseRoomDetail => self.room_detail = None,
            UiEvent::OpenLightbox(index) => {
                if index < GALLERY_IMAGES.len() {
                    self.lightbox = Some(index);
                    self.lightbox_zoomed = false;
                }
            }
            UiEvent::CloseLightbox => {
                self.lightbox = None;
                self.lightbox_zoomed = false;
            }
            UiEvent::LightboxNext => {
                if let Some(index) = self.lightbox {
                    if index + 1 < GALLERY_IMAGES.len() {
                        self.lightbox = Some(index + 1);
                        self.lightbox_zoomed = false;
                    }
                }
            }
            UiEvent::LightboxPrevious => {
                if let Some(index) = self.lightbox {
                    if index > 0 {
                        self.lightbox = Some(index - 1);
                        self.lightbox_zoomed = false;
                    }
                }
            }
            UiEvent::ToggleLightboxZoom => {
                if self.lightbox.is_some() {
                    self.lightbox_zoomed = !self.lightbox_zoomed;
                }
            }
            UiEvent::ToggleMenu => {
                self.menu_open = !self.menu_open;
                self.open_dropdown = None;
            }
            UiEvent::CloseMenu => self.close_menu(),
            UiEvent::ToggleDropdown(section) => {
                self.open_dropdown = if self.open_dropdown == Some(section) { None } else { Some(section) };
            }
            UiEvent::CloseDropdown => self.open_dropdown = None,
            UiEvent::SetScrolled(scrolled) => self.scrolled = scrolled,
        }
    }

    /// Any modal overlay is on screen.
    pub fn has_overlay(&self) -> bool {
        self.reservation.is_some() || self.room_detail.is_some() || self.lightbox.is_some()
    }

    fn close_menu(&mut self) {
        self.menu_open = false;
        self.open_dropdown = None;
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}
