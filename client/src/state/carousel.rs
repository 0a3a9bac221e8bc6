//! Index state shared by the rooms and testimonials carousels.
//!
//! The carousel wraps in both directions and can be paused while the pointer
//! hovers it. Autoplay itself is a timer loop in the component that calls
//! [`Carousel::tick`] every [`AUTOPLAY_INTERVAL_MS`].

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Delay between automatic advances.
pub const AUTOPLAY_INTERVAL_MS: u64 = 5000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    paused: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len, paused: false }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advance one item, wrapping to the first after the last.
    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Step back one item, wrapping to the last before the first.
    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump straight to `index`; out-of-range targets are ignored.
    pub fn jump_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Autoplay step. Advances unless paused; returns whether it moved.
    pub fn tick(&mut self) -> bool {
        if self.paused || self.len < 2 {
            return false;
        }
        self.next();
        true
    }
}
