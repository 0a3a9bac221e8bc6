use super::*;

// =============================================================
// Navigation
// =============================================================

#[test]
fn new_starts_at_first_item() {
    let carousel = Carousel::new(4);
    assert_eq!(carousel.index(), 0);
    assert_eq!(carousel.len(), 4);
    assert!(!carousel.is_paused());
}

#[test]
fn next_wraps_after_last() {
    let mut carousel = Carousel::new(3);
    carousel.next();
    carousel.next();
    assert_eq!(carousel.index(), 2);
    carousel.next();
    assert_eq!(carousel.index(), 0);
}

#[test]
fn previous_wraps_before_first() {
    let mut carousel = Carousel::new(4);
    carousel.previous();
    assert_eq!(carousel.index(), 3);
    carousel.previous();
    assert_eq!(carousel.index(), 2);
}

#[test]
fn jump_to_sets_index_in_range() {
    let mut carousel = Carousel::new(4);
    carousel.jump_to(3);
    assert_eq!(carousel.index(), 3);
}

#[test]
fn jump_to_ignores_out_of_range() {
    let mut carousel = Carousel::new(4);
    carousel.jump_to(1);
    carousel.jump_to(4);
    assert_eq!(carousel.index(), 1);
}

#[test]
fn empty_carousel_never_moves() {
    let mut carousel = Carousel::new(0);
    assert!(carousel.is_empty());
    carousel.next();
    carousel.previous();
    carousel.jump_to(0);
    assert_eq!(carousel.index(), 0);
    assert!(!carousel.tick());
}

// =============================================================
// Autoplay
// =============================================================

#[test]
fn tick_advances_when_running() {
    let mut carousel = Carousel::new(3);
    assert!(carousel.tick());
    assert_eq!(carousel.index(), 1);
}

#[test]
fn tick_is_noop_while_paused() {
    let mut carousel = Carousel::new(3);
    carousel.pause();
    assert!(!carousel.tick());
    assert_eq!(carousel.index(), 0);
    carousel.resume();
    assert!(carousel.tick());
    assert_eq!(carousel.index(), 1);
}

#[test]
fn tick_wraps_through_full_cycle() {
    let mut carousel = Carousel::new(4);
    for _ in 0..4 {
        carousel.tick();
    }
    assert_eq!(carousel.index(), 0);
}

#[test]
fn single_item_does_not_autoplay() {
    let mut carousel = Carousel::new(1);
    assert!(!carousel.tick());
    assert_eq!(carousel.index(), 0);
}

#[test]
fn manual_navigation_works_while_paused() {
    let mut carousel = Carousel::new(3);
    carousel.pause();
    carousel.next();
    assert_eq!(carousel.index(), 1);
    assert!(carousel.is_paused());
}

#[test]
fn hover_pause_holds_review_until_pointer_leaves() {
    let mut carousel = Carousel::new(crate::data::testimonials::TESTIMONIALS.len());
    carousel.next();
    carousel.pause();
    assert!(!carousel.tick());
    assert!(!carousel.tick());
    assert_eq!(carousel.index(), 1);
    carousel.resume();
    assert!(carousel.tick());
    assert_eq!(carousel.index(), 2);
}

#[test]
fn arrows_cycle_reviews_in_both_directions() {
    let len = crate::data::testimonials::TESTIMONIALS.len();
    let mut carousel = Carousel::new(len);
    carousel.previous();
    assert_eq!(carousel.index(), len - 1);
    carousel.next();
    assert_eq!(carousel.index(), 0);
}
