use chrono::{Local, NaiveDateTime};

/// Format a backend timestamp for display (e.g., "Mar 01, 2024 10:15")
pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format("%b %d, %Y %H:%M").to_string()
}

/// Whether an expiry timestamp lies before `now`
pub fn is_expired_at(expires_at: &NaiveDateTime, now: &NaiveDateTime) -> bool {
    expires_at < now
}

/// Whether an expiry timestamp lies in the past, in the browser's local time
pub fn is_expired(expires_at: &NaiveDateTime) -> bool {
    is_expired_at(expires_at, &Local::now().naive_local())
}
