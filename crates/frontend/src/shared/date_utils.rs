/// Utilities for date and time formatting
///
/// Provides consistent timestamp formatting across the application
use chrono::{DateTime, Utc};

/// Format an artifact timestamp for the history list.
/// Example: 2024-03-15T14:02:26Z -> "15.03 14:02"
pub fn format_history_time(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%d.%m %H:%M").to_string()
}

/// Format an artifact timestamp for the preview header.
/// Example: 2024-03-15T14:02:26Z -> "15.03.2024 14:02:26"
pub fn format_full_time(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%d.%m.%Y %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_history_time() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_history_time(&ts), "15.03 14:02");
    }

    #[test]
    fn test_format_full_time() {
        let ts = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_full_time(&ts), "31.12.2024 23:59:59");
    }
}
