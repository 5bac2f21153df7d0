//! Formatting utilities for display

use chrono::{DateTime, NaiveDateTime};

/// Format a backend timestamp as e.g. "Mar 14, 2025, 09:26 AM".
///
/// Accepts naive ISO timestamps and RFC 3339; anything else is returned
/// unchanged.
pub fn format_created(timestamp: &str) -> String {
    const DISPLAY: &str = "%b %-d, %Y, %I:%M %p";

    if let Ok(naive) = timestamp.parse::<NaiveDateTime>() {
        return naive.format(DISPLAY).to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return dt.naive_local().format(DISPLAY).to_string();
    }
    timestamp.to_string()
}

/// Tab label with item count, e.g. "Audio (2)"
pub fn format_count(label: &str, count: usize) -> String {
    format!("{} ({})", label, count)
}

/// File name for downloading `url` as `name`, borrowing the URL's extension
/// when `name` has none
pub fn download_name(name: &str, url: &str) -> String {
    let name = name.trim();
    if name.rsplit_once('.').is_some_and(|(stem, _)| !stem.is_empty()) {
        return name.to_string();
    }

    let path = url.split(['?', '#']).next().unwrap_or_default();
    let file = path.rsplit('/').next().unwrap_or_default();
    match file.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => {
            if name.is_empty() {
                file.to_string()
            } else {
                format!("{}.{}", name, ext)
            }
        }
        _ if name.is_empty() => "download".to_string(),
        _ => name.to_string(),
    }
}
