//! Booking draft behind the reservation modal.
//!
//! A [`ReservationRequest`] is what a booking surface (hero, reservation bar,
//! room carousel, room detail) asks for when it opens the modal. The modal
//! turns it into a [`ReservationDraft`], edits it field by field, and on
//! submit renders it into the WhatsApp message.

#[cfg(test)]
#[path = "reservation_test.rs"]
mod reservation_test;

use time::Date;

use crate::data::rooms::{Room, room_by_id};
use crate::util::dates::{StayDates, add_days_from, is_valid_future_date, nights_between, parse_iso_date};
use crate::util::whatsapp::reservation_message;

/// Guest ceiling when no room is selected.
pub const DEFAULT_MAX_GUESTS: u32 = 4;

/// Payload of `UiEvent::OpenReservation`. Anything left `None` falls back to
/// the draft defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReservationRequest {
    pub room_id: Option<u32>,
    pub stay: Option<StayDates>,
    pub guests: Option<u32>,
}

impl ReservationRequest {
    pub fn for_room(room_id: u32) -> Self {
        Self { room_id: Some(room_id), ..Self::default() }
    }
}

/// Why a draft cannot be sent yet. Messages are shown under the form.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Completa el campo: {0}")]
    MissingField(&'static str),
    #[error("Fecha no válida: {0}")]
    InvalidDate(&'static str),
    #[error("La fecha de salida debe ser posterior a la de llegada")]
    CheckoutBeforeCheckin,
    #[error("Número de huéspedes no válido: {guests} (máximo {max})")]
    GuestsOutOfRange { guests: u32, max: u32 },
}

/// Price breakdown for a room over a stay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Quote {
    pub nights: u32,
    pub subtotal: u32,
    /// Difference against the original rate, 0 when not on offer.
    pub savings: u32,
    pub total: u32,
}

impl Quote {
    pub fn for_room(room: &Room, nights: u32) -> Self {
        let subtotal = room.price.saturating_mul(nights);
        Self {
            nights,
            subtotal,
            savings: room.nightly_discount().saturating_mul(nights),
            total: subtotal,
        }
    }

    /// Subtotal at the original rate, before the discount.
    pub fn original_subtotal(&self) -> u32 {
        self.subtotal.saturating_add(self.savings)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReservationDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub checkin: String,
    pub checkout: String,
    pub guests: u32,
    pub comments: String,
    pub room_id: Option<u32>,
}

impl ReservationDraft {
    /// Seed a draft from an open request. Dates fall back per field: a
    /// missing check-in takes the default, a missing check-out is the night
    /// after the carried check-in (or the default when there is none).
    /// Guests default to 1 and are clamped to the room's capacity.
    pub fn from_request(request: &ReservationRequest, defaults: StayDates) -> Self {
        let carried = request.stay.clone().unwrap_or_default();
        let checkin_carried = !carried.checkin.trim().is_empty();
        let checkout = if carried.checkout.trim().is_empty() {
            parse_iso_date(&carried.checkin).map_or(defaults.checkout, |start| add_days_from(start, 1))
        } else {
            carried.checkout
        };
        let mut draft = Self {
            checkin: if checkin_carried { carried.checkin } else { defaults.checkin },
            checkout,
            guests: request.guests.unwrap_or(1),
            room_id: request.room_id.filter(|id| room_by_id(*id).is_some()),
            ..Self::default()
        };
        draft.clamp_guests();
        draft
    }

    pub fn room(&self) -> Option<&'static Room> {
        self.room_id.and_then(room_by_id)
    }

    /// Switch the selected room and re-clamp guests to its capacity.
    pub fn select_room(&mut self, room_id: Option<u32>) {
        self.room_id = room_id.filter(|id| room_by_id(*id).is_some());
        self.clamp_guests();
    }

    pub fn max_guests(&self) -> u32 {
        self.room().map_or(DEFAULT_MAX_GUESTS, |room| room.capacity)
    }

    pub fn nights(&self) -> u32 {
        nights_between(Some(&self.checkin), Some(&self.checkout))
    }

    /// Price breakdown, only when a room is selected.
    pub fn quote(&self) -> Option<Quote> {
        self.room().map(|room| Quote::for_room(room, self.nights()))
    }

    /// Check required fields, date order and guest range. `today` bounds the
    /// earliest acceptable check-in.
    ///
    /// # Errors
    ///
    /// The first failing check, in field order.
    pub fn validate(&self, today: Date) -> Result<(), DraftError> {
        for (label, value) in [
            ("nombre", &self.name),
            ("email", &self.email),
            ("teléfono", &self.phone),
            ("fecha de llegada", &self.checkin),
            ("fecha de salida", &self.checkout),
        ] {
            if value.trim().is_empty() {
                return Err(DraftError::MissingField(label));
            }
        }

        if !is_valid_future_date(&self.checkin, today) {
            return Err(DraftError::InvalidDate("fecha de llegada"));
        }
        let checkin = parse_iso_date(&self.checkin).ok_or(DraftError::InvalidDate("fecha de llegada"))?;
        let checkout = parse_iso_date(&self.checkout).ok_or(DraftError::InvalidDate("fecha de salida"))?;
        if checkout < checkin {
            return Err(DraftError::CheckoutBeforeCheckin);
        }

        let max = self.max_guests();
        if self.guests == 0 || self.guests > max {
            return Err(DraftError::GuestsOutOfRange { guests: self.guests, max });
        }
        Ok(())
    }

    /// Front-desk message for this draft.
    pub fn message(&self) -> String {
        let total = self.quote().map_or(0, |quote| quote.total);
        reservation_message(self, self.room(), self.nights(), total)
    }

    fn clamp_guests(&mut self) {
        self.guests = self.guests.clamp(1, self.max_guests());
    }
}
