//! Calendar-date helpers shared by every booking surface.
//!
//! Dates travel through the UI as ISO `YYYY-MM-DD` strings, exactly what a
//! `<input type="date">` reads and writes. Each clock-reading helper has a
//! `_from` twin that takes `today` explicitly so the arithmetic stays
//! deterministic under test.
//!
//! Only the local calendar date matters here: browser builds read it from the
//! JS `Date` (via `time`'s wasm-bindgen support), server builds from the OS
//! offset and fall back to UTC when the offset cannot be determined.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::macros::format_description;
use time::{Date, Duration, Month, OffsetDateTime};

/// Check-in/check-out pair as held by the booking forms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StayDates {
    pub checkin: String,
    pub checkout: String,
}

impl StayDates {
    /// Both dates have been filled in.
    pub fn is_complete(&self) -> bool {
        !self.checkin.is_empty() && !self.checkout.is_empty()
    }
}

/// Current local calendar date.
pub fn local_today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

/// Today's local date as `YYYY-MM-DD`.
pub fn today() -> String {
    local_today().to_string()
}

/// Today plus `days` calendar days, as `YYYY-MM-DD`.
pub fn add_days(days: i64) -> String {
    add_days_from(local_today(), days)
}

pub fn add_days_from(today: Date, days: i64) -> String {
    today.saturating_add(Duration::days(days)).to_string()
}

/// Default stay used when no dates were carried over: tomorrow to the day after.
pub fn default_reservation_dates() -> StayDates {
    default_reservation_dates_from(local_today())
}

pub fn default_reservation_dates_from(today: Date) -> StayDates {
    StayDates {
        checkin: add_days_from(today, 1),
        checkout: add_days_from(today, 2),
    }
}

/// Parse an ISO `YYYY-MM-DD` date. Surrounding whitespace is ignored.
pub fn parse_iso_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")).ok()
}

/// Nights between two ISO dates.
///
/// Missing, empty or unparseable input yields 1. Otherwise the absolute day
/// difference is used, so inverted ranges still count forward; the result is
/// never below 1. Range ordering is enforced by the reservation draft, not here.
pub fn nights_between(checkin: Option<&str>, checkout: Option<&str>) -> u32 {
    let (Some(checkin), Some(checkout)) = (checkin, checkout) else {
        return 1;
    };
    let (Some(start), Some(end)) = (parse_iso_date(checkin), parse_iso_date(checkout)) else {
        return 1;
    };
    let days = (end - start).whole_days().unsigned_abs();
    u32::try_from(days).unwrap_or(u32::MAX).max(1)
}

/// True when `raw` parses and falls on or after `today`.
pub fn is_valid_future_date(raw: &str, today: Date) -> bool {
    parse_iso_date(raw).is_some_and(|date| date >= today)
}

/// Long Spanish rendering, e.g. `15 de enero de 2024`. Empty for bad input.
pub fn format_display_date(raw: &str) -> String {
    parse_iso_date(raw).map_or_else(String::new, |date| {
        format!("{} de {} de {}", date.day(), month_name_es(date.month()), date.year())
    })
}

fn month_name_es(month: Month) -> &'static str {
    match month {
        Month::January => "enero",
        Month::February => "febrero",
        Month::March => "marzo",
        Month::April => "abril",
        Month::May => "mayo",
        Month::June => "junio",
        Month::July => "julio",
        Month::August => "agosto",
        Month::September => "septiembre",
        Month::October => "octubre",
        Month::November => "noviembre",
        Month::December => "diciembre",
    }
}
