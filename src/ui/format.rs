use chrono::{DateTime, NaiveDateTime};

const BACKEND_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DISPLAY_FORMAT: &str = "%-m/%-d/%Y %-I:%M:%S %p";

/// Formats a booking date for display, e.g. `3/7/2025 4:05:09 PM`.
pub fn format_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let parsed = NaiveDateTime::parse_from_str(raw, BACKEND_DATE_FORMAT)
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|d| d.naive_local()))?;
    Some(parsed.format(DISPLAY_FORMAT).to_string())
}
