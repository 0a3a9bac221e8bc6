//! Static site content: hotel identity, room catalog, gallery and reviews.
//!
//! DESIGN
//! ======
//! Everything here is immutable `static` data compiled into both the SSR
//! binary and the WASM bundle, so server and hydrated renders always agree.

pub mod gallery;
pub mod hotel;
pub mod rooms;
pub mod testimonials;
