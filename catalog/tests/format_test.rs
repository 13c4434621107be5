use catalog::format::{format_count, format_duration, format_upload_date};

#[test]
fn duration_under_a_minute_in_seconds() {
    assert_eq!(format_duration(0), "0s");
    assert_eq!(format_duration(59), "59s");
}

#[test]
fn duration_under_an_hour_in_minutes() {
    assert_eq!(format_duration(60), "1.0m");
    assert_eq!(format_duration(90), "1.5m");
}

#[test]
fn duration_under_a_day_in_hours() {
    assert_eq!(format_duration(3600), "1.0h");
    assert_eq!(format_duration(7200), "2.0h");
}

#[test]
fn duration_in_days_beyond_that() {
    assert_eq!(format_duration(86400), "1.0d");
    assert_eq!(format_duration(172800), "2.0d");
}

#[test]
fn count_below_a_thousand_is_plain() {
    assert_eq!(format_count(0), "0");
    assert_eq!(format_count(999), "999");
}

#[test]
fn count_in_thousands() {
    assert_eq!(format_count(1000), "1.0K");
    assert_eq!(format_count(1500), "1.5K");
}

#[test]
fn count_in_millions() {
    assert_eq!(format_count(1_000_000), "1.0M");
    assert_eq!(format_count(2_500_000), "2.5M");
}

#[test]
fn upload_date_renders_utc_calendar_date() {
    assert_eq!(format_upload_date("2025-03-09T15:04:05Z"), "2025-03-09");
}

#[test]
fn positive_offset_normalizes_back_to_utc() {
    // 05:30 on Jan 1 at +11:00 is still Dec 31 in UTC.
    assert_eq!(
        format_upload_date("2025-01-01T05:30:00+11:00"),
        "2024-12-31"
    );
}

#[test]
fn negative_offset_normalizes_forward_to_utc() {
    assert_eq!(
        format_upload_date("2024-12-31T20:00:00-05:00"),
        "2025-01-01"
    );
}

#[test]
fn malformed_date_passes_through() {
    assert_eq!(format_upload_date("not a date"), "not a date");
    assert_eq!(format_upload_date(""), "");
}
