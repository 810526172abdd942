/// Current calendar year and 1-indexed month in the browser's local time zone
pub fn current_year_month() -> (i32, u32) {
    let now = js_sys::Date::new_0();
    (now.get_full_year() as i32, now.get_month() + 1)
}

/// Period heading, e.g. `2026年1月`
pub fn format_period_label(year: i32, month: u32) -> String {
    format!("{}年{}月", year, month)
}

/// Format ISO date string to YYYY/MM/DD
/// Example: "2026-01-10" -> "2026/01/10"; anything else is returned unchanged
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", year, month, day);
        }
    }
    date_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_period_label() {
        assert_eq!(format_period_label(2026, 1), "2026年1月");
        assert_eq!(format_period_label(2026, 12), "2026年12月");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-01-10"), "2026/01/10");
        assert_eq!(format_date("2026-01-10T09:00:00Z"), "2026/01/10");
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date(""), "");
    }
}
