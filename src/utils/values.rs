use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parse a timestamp cell, returning `None` for anything unparseable.
///
/// Offset-carrying values are normalised to UTC; naive values are taken as-is.
///
/// # Examples
/// ```
/// use flight_difficulty::utils::parse_timestamp;
///
/// assert!(parse_timestamp("2025-08-04 17:57:00").is_some());
/// assert!(parse_timestamp("not a time").is_none());
/// ```
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }

    parse_date(trimmed).and_then(|date| date.and_hms_opt(0, 0, 0))
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

/// Normalise a date key to `YYYY-MM-DD`, keeping unparseable values verbatim.
pub fn normalize_date(value: &str) -> String {
    let trimmed = value.trim();

    // Offset timestamps keep their local calendar date, not the UTC one
    parse_date(trimmed)
        .or_else(|| DateTime::parse_from_rfc3339(trimmed).ok().map(|dt| dt.date_naive()))
        .or_else(|| parse_timestamp(trimmed).map(|dt| dt.date()))
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

/// Parse a minutes cell (integer or decimal)
pub fn parse_minutes(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|minutes| minutes.is_finite())
}

/// Parse a count cell. Integral numbers and Y/N style flags are accepted.
pub fn parse_count(value: &str) -> Option<u32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" => return Some(1),
        "n" | "no" | "false" => return Some(0),
        _ => {}
    }

    if let Ok(count) = trimmed.parse::<u32>() {
        return Some(count);
    }

    trimmed
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n >= 0.0 && n.fract() == 0.0 && *n <= u32::MAX as f64)
        .map(|n| n as u32)
}
