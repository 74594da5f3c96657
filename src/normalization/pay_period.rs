//! Pay period parsing.
//!
//! Pay stubs print the period as `"<start> - <end>"`. Both halves are tried
//! against each supported date format in order; the first format that
//! parses both halves wins.

use chrono::NaiveDate;

/// Delimiter between the start and end dates.
pub const PAY_PERIOD_DELIMITER: &str = " - ";

/// Accepted date formats, in the order they are tried.
pub const PAY_PERIOD_DATE_FORMATS: [&str; 3] = ["%m/%d/%Y", "%m-%d-%Y", "%Y-%m-%d"];

/// Parses a pay period string into its start and end dates.
///
/// Returns `None` when the delimiter is missing or appears more than once,
/// or when no single format parses both halves.
///
/// # Examples
///
/// ```
/// use labor_rules_engine::normalization::parse_pay_period;
/// use chrono::NaiveDate;
///
/// let (start, end) = parse_pay_period("01/01/2024 - 01/15/2024").unwrap();
/// assert_eq!(start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// assert_eq!(end, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
///
/// assert!(parse_pay_period("January 2024").is_none());
/// ```
pub fn parse_pay_period(text: &str) -> Option<(NaiveDate, NaiveDate)> {
    let (start, end) = text.split_once(PAY_PERIOD_DELIMITER)?;
    if end.contains(PAY_PERIOD_DELIMITER) {
        return None;
    }
    let (start, end) = (start.trim(), end.trim());

    PAY_PERIOD_DATE_FORMATS.iter().find_map(|format| {
        let start = NaiveDate::parse_from_str(start, format).ok()?;
        let end = NaiveDate::parse_from_str(end, format).ok()?;
        Some((start, end))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_slash_format() {
        assert_eq!(
            parse_pay_period("01/01/2024 - 01/15/2024"),
            Some((date(2024, 1, 1), date(2024, 1, 15)))
        );
    }

    #[test]
    fn test_dash_month_first_format() {
        assert_eq!(
            parse_pay_period("03-01-2024 - 03-15-2024"),
            Some((date(2024, 3, 1), date(2024, 3, 15)))
        );
    }

    #[test]
    fn test_iso_format() {
        assert_eq!(
            parse_pay_period("2024-06-01 - 2024-06-15"),
            Some((date(2024, 6, 1), date(2024, 6, 15)))
        );
    }

    #[test]
    fn test_extra_whitespace_around_halves() {
        assert_eq!(
            parse_pay_period("  01/01/2024  -  01/15/2024 "),
            Some((date(2024, 1, 1), date(2024, 1, 15)))
        );
    }

    #[test]
    fn test_missing_delimiter() {
        assert_eq!(parse_pay_period("01/01/2024-01/15/2024"), None);
        assert_eq!(parse_pay_period(""), None);
    }

    #[test]
    fn test_repeated_delimiter() {
        assert_eq!(parse_pay_period("01/01/2024 - 01/08/2024 - 01/15/2024"), None);
    }

    #[test]
    fn test_mixed_formats_do_not_parse() {
        assert_eq!(parse_pay_period("01/01/2024 - 2024-01-15"), None);
    }

    #[test]
    fn test_invalid_calendar_date() {
        assert_eq!(parse_pay_period("02/30/2024 - 03/15/2024"), None);
    }
}
