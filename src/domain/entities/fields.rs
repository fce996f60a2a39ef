use chrono::NaiveDate;
use url::Url;
use validator::ValidationError;

/// Form fields arrive as plain strings; an empty string means "not set"
/// and is stored as NULL.
pub fn none_if_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

pub fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("non_blank");
        error.message = Some("Cannot be empty".into());
        return Err(error);
    }
    Ok(())
}

/// Accepts the empty string (treated as "not set") or a parseable URL.
pub fn optional_url(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    if Url::parse(value).is_err() {
        let mut error = ValidationError::new("url");
        error.message = Some("Must be a valid URL".into());
        return Err(error);
    }
    Ok(())
}

/// Accepts the empty string or an ISO `YYYY-MM-DD` date.
pub fn optional_iso_date(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        let mut error = ValidationError::new("iso_date");
        error.message = Some("Must be an ISO date (YYYY-MM-DD)".into());
        return Err(error);
    }
    Ok(())
}
