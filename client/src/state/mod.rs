//! Client-side state for the single-page site.
//!
//! DESIGN
//! ======
//! Every type here is plain data with pure transitions. The page owns the
//! reactive signals and feeds events in, so overlay, carousel and booking
//! rules are tested without a browser.

pub mod carousel;
pub mod reservation;
pub mod ui;
