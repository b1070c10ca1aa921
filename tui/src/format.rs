//! Display formatting helpers.

use std::time::SystemTime;

use chrono::{DateTime, Local};

/// Short clock time for chat messages.
pub(crate) fn format_clock_time(timestamp: SystemTime) -> String {
    let local: DateTime<Local> = timestamp.into();
    local.format("%H:%M").to_string()
}

/// Full date and time for gallery entries.
pub(crate) fn format_date_time(timestamp: SystemTime) -> String {
    let local: DateTime<Local> = timestamp.into();
    local.format("%Y-%m-%d %H:%M").to_string()
}

/// Byte sizes the way the documents panel shows them: KB with two decimals
/// below a megabyte, MB above.
pub(crate) fn format_size(bytes: u64) -> String {
    const MB: f64 = 1024.0 * 1024.0;
    let bytes = bytes as f64;
    if bytes >= MB {
        format!("{:.2} MB", bytes / MB)
    } else {
        format!("{:.2} KB", bytes / 1024.0)
    }
}

pub(crate) fn truncate_with_ellipsis(raw: &str, max: usize) -> String {
    let max = max.max(3);
    let trimmed = raw.trim();
    if trimmed.chars().count() <= max {
        trimmed.to_string()
    } else {
        let head: String = trimmed.chars().take(max - 3).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::{format_clock_time, format_size, truncate_with_ellipsis};

    #[test]
    fn sizes_use_kb_below_a_megabyte() {
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(2 * 1024 * 1024), "2.00 MB");
    }

    #[test]
    fn clock_time_is_hh_mm() {
        let formatted = format_clock_time(std::time::SystemTime::now());
        assert_eq!(formatted.len(), 5);
        assert_eq!(formatted.as_bytes()[2], b':');
    }

    #[test]
    fn truncation_appends_ellipsis() {
        assert_eq!(truncate_with_ellipsis("short", 10), "short");
        assert_eq!(truncate_with_ellipsis("a very long prompt", 10), "a very ...");
    }
}
