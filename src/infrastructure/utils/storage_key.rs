use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s").expect("valid regex"));

/// Collision-resistant storage key for an uploaded thumbnail: millisecond
/// timestamp prefix plus the original filename with whitespace replaced.
pub fn thumbnail_key(original_name: &str, now: DateTime<Utc>) -> String {
    let sanitized = WHITESPACE.replace_all(original_name.trim(), "-");
    format!("{}-{}", now.timestamp_millis(), sanitized)
}
