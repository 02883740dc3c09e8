use chrono::{DateTime, Utc};

const EXPIRING_SOON_DAYS: i64 = 3;
const EXPIRY_PROGRESS_WINDOW_DAYS: f64 = 7.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Whole days until `expiry_date`, rounded up.
///
/// Zero or negative once the date has passed.
pub fn days_until_expiry(expiry_date: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (expiry_date - now).num_milliseconds() as f64;
    (millis / MILLIS_PER_DAY).ceil() as i64
}

/// True within three days of expiry, including items already expired.
pub fn is_expiring_soon(expiry_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    days_until_expiry(expiry_date, now) <= EXPIRING_SOON_DAYS
}

/// Remaining shelf life over a one-week window, in percent.
pub fn expiry_progress(days_until_expiry: i64) -> u8 {
    let percent = days_until_expiry as f64 / EXPIRY_PROGRESS_WINDOW_DAYS * 100.0;
    percent.clamp(0.0, 100.0).round() as u8
}
