/// Utilities for date formatting
///
/// Даты портала отображаются во французском формате
use chrono::{Datelike, NaiveDate};

const MONTHS_FR: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
    "octobre", "novembre", "décembre",
];

/// NaiveDate -> DD/MM/YYYY
/// Example: 2024-03-15 -> "15/03/2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Пустая дата отображается прочерком
pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| "—".to_string())
}

/// Example: 2024-03-01 -> "1 mars 2024"
pub fn format_date_long(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTHS_FR[date.month0() as usize],
        date.year()
    )
}

/// Значение `<input type="date">` (YYYY-MM-DD)
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// NaiveDate -> значение для `<input type="date">`
pub fn to_date_input(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(d(2024, 3, 15)), "15/03/2024");
        assert_eq!(format_optional_date(None), "—");
        assert_eq!(format_optional_date(Some(d(2023, 12, 1))), "01/12/2023");
    }

    #[test]
    fn test_format_date_long() {
        assert_eq!(format_date_long(d(2024, 3, 1)), "1 mars 2024");
        assert_eq!(format_date_long(d(2023, 8, 31)), "31 août 2023");
    }

    #[test]
    fn test_date_input_round_trip() {
        assert_eq!(parse_date_input("2024-06-30"), Some(d(2024, 6, 30)));
        assert_eq!(parse_date_input(" 2024-06-30 "), Some(d(2024, 6, 30)));
        assert_eq!(parse_date_input("30/06/2024"), None);
        assert_eq!(parse_date_input(""), None);
        assert_eq!(to_date_input(d(2024, 1, 5)), "2024-01-05");
    }
}
