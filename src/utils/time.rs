use chrono::{DateTime, Utc};

/// Compact age of `timestamp` relative to now: `now`, `5m`, `3h`, `2d`, `4mo`
pub fn format_relative_time(timestamp: &DateTime<Utc>) -> String {
    format_relative_to(timestamp, &Utc::now())
}

/// Same as [`format_relative_time`] with an explicit reference instant
pub fn format_relative_to(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(*timestamp).num_seconds();
    if seconds < 60 {
        return "now".to_string();
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{}m", minutes);
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h", hours);
    }

    let days = hours / 24;
    if days < 30 {
        format!("{}d", days)
    } else {
        format!("{}mo", days / 30)
    }
}
