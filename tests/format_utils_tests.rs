use chrono::{TimeZone, Utc};
use portfolio_cms::utils::format::{
    bullets_array_to_text, bullets_text_to_array, format_period,
};
use portfolio_cms::utils::storage_key::thumbnail_key;

#[test]
fn bullets_round_trip_preserves_clean_lists() {
    let bullets = vec![
        "Shipped the admin panel".to_string(),
        "Cut page load times in half".to_string(),
    ];

    let text = bullets_array_to_text(&bullets);
    assert_eq!(text, "Shipped the admin panel\nCut page load times in half");
    assert_eq!(bullets_text_to_array(&text), bullets);
}

#[test]
fn bullets_text_drops_blank_lines_and_trims() {
    let parsed = bullets_text_to_array("Did X\n\nDid Y  \n");
    assert_eq!(parsed, vec!["Did X".to_string(), "Did Y".to_string()]);
}

#[test]
fn bullets_text_preserves_order() {
    let parsed = bullets_text_to_array("  third first\nsecond\n\t\nlast  ");
    assert_eq!(
        parsed,
        vec!["third first".to_string(), "second".to_string(), "last".to_string()]
    );
}

#[test]
fn bullets_array_to_text_of_empty_list_is_empty() {
    assert_eq!(bullets_array_to_text(&[]), "");
    assert!(bullets_text_to_array("").is_empty());
    assert!(bullets_text_to_array("   \n \n").is_empty());
}

#[test]
fn format_period_renders_month_year_range() {
    assert_eq!(
        format_period(Some("2022-01-15"), Some("2023-06-01")),
        "Jan 2022 - Jun 2023"
    );
}

#[test]
fn format_period_open_range_renders_present() {
    assert_eq!(format_period(Some("2024-07-01"), None), "Jul 2024 - Present");
    assert_eq!(format_period(Some("2024-07-01"), Some("")), "Jul 2024 - Present");
}

#[test]
fn format_period_without_start_is_placeholder() {
    assert_eq!(format_period(None, Some("2024-07-01")), "-");
    assert_eq!(format_period(None, None), "-");
    assert_eq!(format_period(Some(""), Some("2024-07-01")), "-");
}

#[test]
fn format_period_falls_back_to_raw_string_for_unparsable_dates() {
    assert_eq!(
        format_period(Some("sometime in 2021"), None),
        "sometime in 2021 - Present"
    );
    assert_eq!(
        format_period(Some("2022-01-15"), Some("not-a-date")),
        "Jan 2022 - not-a-date"
    );
}

#[test]
fn format_period_accepts_rfc3339_timestamps() {
    assert_eq!(
        format_period(Some("2021-03-05T10:00:00+00:00"), None),
        "Mar 2021 - Present"
    );
}

#[test]
fn thumbnail_key_prefixes_timestamp_and_sanitizes_whitespace() {
    let now = Utc.with_ymd_and_hms(2025, 5, 4, 12, 0, 0).unwrap();
    let key = thumbnail_key("my cool  pic.png", now);

    assert_eq!(key, format!("{}-my-cool--pic.png", now.timestamp_millis()));
    assert!(!key.contains(' '));
}

#[test]
fn thumbnail_keys_differ_across_time_for_same_name() {
    let first = Utc.with_ymd_and_hms(2025, 5, 4, 12, 0, 0).unwrap();
    let second = Utc.with_ymd_and_hms(2025, 5, 4, 12, 0, 1).unwrap();

    assert_ne!(
        thumbnail_key("pic.png", first),
        thumbnail_key("pic.png", second)
    );
}
