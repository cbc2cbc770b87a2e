/// Utilities for date formatting
///
/// Dates travel as ISO `YYYY-MM-DD` strings and are displayed the way the
/// admin UI always has: `YYYY/M/D` without zero padding.
use chrono::NaiveDate;

/// Format an ISO date string for display.
/// Example: "2024-03-01" -> "2024/3/1"
///
/// Empty input renders as the "-" placeholder; anything unparseable is
/// echoed unchanged.
pub fn format_date(date_str: &str) -> String {
    if date_str.is_empty() {
        return "-".to_string();
    }
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%Y/%-m/%-d").to_string(),
        Err(_) => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-01"), "2024/3/1");
        assert_eq!(format_date("2024-12-31"), "2024/12/31");
        assert_eq!(format_date("2024-03-15T14:02:26Z"), "2024/3/15");
    }

    #[test]
    fn test_empty_is_placeholder() {
        assert_eq!(format_date(""), "-");
    }

    #[test]
    fn test_invalid_passthrough() {
        assert_eq!(format_date("invalid"), "invalid");
    }
}
