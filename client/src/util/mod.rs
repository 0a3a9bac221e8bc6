//! Utility helpers shared across the site's sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (clock, scrolling, opening tabs)
//! and message formatting from component logic so they can be unit tested
//! without a DOM.

pub mod autoplay;
pub mod dates;
pub mod focus;
pub mod scroll;
pub mod whatsapp;
