//! Date formatting for CV entries.
//!
//! Input dates are authored as `YYYY-MM-DD`, `YYYY-MM` or `YYYY`. Anything
//! else is shown as written. Results are plain text; callers escape them.

use chrono::NaiveDate;

const PRESENT: &str = "Present";

/// "Sep 2021–Present", "Sep 2021–May 2023", "Sep 2021" or "".
pub fn format_date_range(start: Option<&str>, end: Option<&str>) -> String {
    let start = match start.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => s,
        None => return String::new(),
    };
    let start_str = format_month_year(start);

    match end.map(str::trim).filter(|e| !e.is_empty()) {
        None => start_str,
        Some(end) if end.eq_ignore_ascii_case("present") => format!("{}–{}", start_str, PRESENT),
        Some(end) => format!("{}–{}", start_str, format_month_year(end)),
    }
}

/// Abbreviated month and 4-digit year ("Sep 2021"). A bare year stays a year.
pub fn format_month_year(date: &str) -> String {
    let date = date.trim();
    if is_bare_year(date) {
        return date.to_string();
    }
    match parse_date(date) {
        Some(d) => d.format("%b %Y").to_string(),
        None => date.to_string(),
    }
}

/// Long form used for press items ("March 5, 2024").
pub fn format_long_date(date: &str) -> String {
    let date = date.trim();
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%B %-d, %Y").to_string(),
        Err(_) => format_month_year(date),
    }
}

/// Leading year of an ISO-like date ("2021-09-01" -> "2021").
pub fn year_of(date: &str) -> &str {
    date.trim().split('-').next().unwrap_or("")
}

/// "2021-2026", "2021", or "" from optional start/end dates.
pub fn year_span(start: Option<&str>, end: Option<&str>) -> String {
    let start = start.map(year_of).filter(|y| !y.is_empty());
    let end = end.map(year_of).filter(|y| !y.is_empty());
    match (start, end) {
        (Some(s), Some(e)) => format!("{}-{}", s, e),
        (Some(y), None) | (None, Some(y)) => y.to_string(),
        (None, None) => String::new(),
    }
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", date), "%Y-%m-%d"))
        .ok()
}

fn is_bare_year(date: &str) -> bool {
    date.len() == 4 && date.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_present() {
        assert_eq!(format_date_range(Some("2021-09-01"), Some("Present")), "Sep 2021–Present");
        assert_eq!(format_date_range(Some("2021-09-01"), Some("present")), "Sep 2021–Present");
    }

    #[test]
    fn test_range_open_and_missing_start() {
        assert_eq!(format_date_range(Some("2021-09-01"), None), "Sep 2021");
        assert_eq!(format_date_range(None, Some("2023-01-01")), "");
        assert_eq!(format_date_range(Some(""), Some("Present")), "");
    }

    #[test]
    fn test_range_closed() {
        assert_eq!(format_date_range(Some("2019-05"), Some("2020-08-15")), "May 2019–Aug 2020");
    }

    #[test]
    fn test_unparsable_passthrough() {
        assert_eq!(format_month_year("Summer 2020"), "Summer 2020");
        assert_eq!(format_month_year("2020"), "2020");
    }

    #[test]
    fn test_long_date() {
        assert_eq!(format_long_date("2024-03-05"), "March 5, 2024");
        assert_eq!(format_long_date("2024-03"), "Mar 2024");
    }

    #[test]
    fn test_year_span() {
        assert_eq!(year_span(Some("2021-09-01"), Some("2026-08-31")), "2021-2026");
        assert_eq!(year_span(Some("2017"), None), "2017");
        assert_eq!(year_span(None, None), "");
    }
}
