//! Date helpers for the date-range filters.

use chrono::NaiveDate;

/// Format used by `<input type="date">` and the backend's `date` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a NaiveDate as "YYYY-MM-DD"
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a date string in "YYYY-MM-DD" format
pub fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
}

/// True when both ends are set and the start falls after the end.
pub fn is_inverted_range(start: Option<&NaiveDate>, end: Option<&NaiveDate>) -> bool {
    matches!((start, end), (Some(s), Some(e)) if s > e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format() {
        let date = parse_date(" 2010-03-07 ").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2010, 3, 7).unwrap());
        assert_eq!(format_date(&date), "2010-03-07");
        assert!(parse_date("07/03/2010").is_err());
    }

    #[test]
    fn test_inverted_range() {
        let a = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
        let b = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();
        assert!(is_inverted_range(Some(&b), Some(&a)));
        assert!(!is_inverted_range(Some(&a), Some(&b)));
        assert!(!is_inverted_range(Some(&b), None));
    }
}
