use chrono::NaiveDateTime;

/// Upstream timestamps arrive as local date-times without an offset.
const UPSTREAM_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Format a leg or segment duration as "7h 15m".
pub fn format_duration(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Time of day for the summary row, e.g. "12:35 PM".
pub fn format_time(timestamp: &str) -> String {
    NaiveDateTime::parse_from_str(timestamp, UPSTREAM_FORMAT)
        .map(|dt| dt.format("%I:%M %p").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

/// Full date and time for the segment panel, e.g. "Feb 20, 2024 12:35 PM".
pub fn format_date_time(timestamp: &str) -> String {
    NaiveDateTime::parse_from_str(timestamp, UPSTREAM_FORMAT)
        .map(|dt| dt.format("%b %-d, %Y %I:%M %p").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

/// Current date in YYYY-MM-DD format
pub fn today() -> String {
    use js_sys::Date;
    let now = Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}

/// Tomorrow's date in YYYY-MM-DD format, the default return date
pub fn tomorrow() -> String {
    use js_sys::Date;
    use wasm_bindgen::JsValue;
    let next = Date::new(&JsValue::from_f64(
        Date::new_0().get_time() + 24.0 * 60.0 * 60.0 * 1000.0,
    ));
    format!(
        "{:04}-{:02}-{:02}",
        next.get_full_year(),
        next.get_month() + 1,
        next.get_date()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(435), "7h 15m");
        assert_eq!(format_duration(60), "1h 0m");
        assert_eq!(format_duration(45), "0h 45m");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time("2024-02-20T12:35:00"), "12:35 PM");
        assert_eq!(format_time("2024-02-20T09:05:00"), "09:05 AM");
        // Unparseable input passes through untouched.
        assert_eq!(format_time("not-a-date"), "not-a-date");
    }

    #[test]
    fn test_format_date_time() {
        assert_eq!(format_date_time("2024-02-20T15:50:00"), "Feb 20, 2024 03:50 PM");
    }
}
