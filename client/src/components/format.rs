//! Small Spanish display strings shared by several sections.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

pub fn guest_label(guests: u32) -> String {
    if guests == 1 { "1 Huésped".to_owned() } else { format!("{guests} Huéspedes") }
}

pub fn nights_label(nights: u32) -> String {
    if nights == 1 { "1 noche".to_owned() } else { format!("{nights} noches") }
}

pub fn price_label(amount: u32) -> String {
    format!("${amount}")
}

pub fn nightly_price_label(amount: u32) -> String {
    format!("${amount}/noche")
}

/// `1 / 6` style position counter for galleries.
pub fn counter_label(index: usize, len: usize) -> String {
    format!("{} / {len}", index + 1)
}

/// Filled and empty stars for a whole-star rating out of five.
pub fn star_row(full: usize) -> String {
    let full = full.min(5);
    format!("{}{}", "★".repeat(full), "☆".repeat(5 - full))
}

/// Guests select option; the `max` entry reads `4+ Huéspedes` style.
pub fn guest_option_label(guests: u32, max: u32) -> String {
    if guests == max { format!("{guests}+ Huéspedes") } else { guest_label(guests) }
}
