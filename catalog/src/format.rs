//! Display formatting for raw video fields. Every function is total:
//! malformed input falls through unchanged, numbers never fail.

pub fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{:.1}m", seconds as f64 / 60.0)
    } else if seconds < 86400 {
        format!("{:.1}h", seconds as f64 / 3600.0)
    } else {
        format!("{:.1}d", seconds as f64 / 86400.0)
    }
}

pub fn format_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// Renders an ISO 8601 timestamp as its UTC calendar date. Offsets are
/// normalized to UTC first, so a `+11:00` upload never shifts a day.
pub fn format_upload_date(iso_date: &str) -> String {
    if let Ok(datetime) = iso_date.parse::<chrono::DateTime<chrono::Utc>>() {
        datetime.format("%Y-%m-%d").to_string()
    } else {
        iso_date.to_string()
    }
}
