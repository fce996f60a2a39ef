use chrono::{DateTime, NaiveDate};

/// Joins bullet lines into the newline-delimited text shown in the editor.
/// Empty input yields an empty string.
pub fn bullets_array_to_text(bullets: &[String]) -> String {
    bullets.join("\n")
}

/// Splits editor text into bullet lines: one bullet per line, each trimmed,
/// lines that are empty after trimming dropped, order preserved.
pub fn bullets_text_to_array(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Renders a date range as `"Jul 2024 - Present"` style labels.
///
/// A missing or empty `from` renders the `"-"` placeholder. A missing or
/// empty `to` renders `"Present"`. Unparsable date strings fall back to the
/// raw string instead of failing.
pub fn format_period(from: Option<&str>, to: Option<&str>) -> String {
    let Some(from) = from.filter(|s| !s.is_empty()) else {
        return "-".to_string();
    };

    let from_label = month_year(from);
    let to_label = to
        .filter(|s| !s.is_empty())
        .map(month_year)
        .unwrap_or_else(|| "Present".to_string());

    format!("{from_label} - {to_label}")
}

/// `"2024-07-01"` → `"Jul 2024"`. Accepts plain ISO dates and RFC 3339
/// timestamps; anything else comes back verbatim.
fn month_year(raw: &str) -> String {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%b %Y").to_string();
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return datetime.format("%b %Y").to_string();
    }
    raw.to_string()
}
