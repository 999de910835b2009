//! Форматирование сумм и ставок во французской нотации

/// Разделитель тысяч: пробел, дробная часть через запятую
///
/// # Примеры
///
/// ```
/// use frontend::shared::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1 234,57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    // Пробел каждые 3 цифры с конца целой части
    let mut result = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            result.push(' ');
        }
        result.push(c);
    }
    let formatted_integer: String = result.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{},{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Сумма в млн динаров, 1 знак после запятой
pub fn format_amount(value: f64) -> String {
    format_number_with_decimals(value, 1)
}

/// Ставка в процентах
pub fn format_rate(value: f64) -> String {
    format!("{} %", format_number_with_decimals(value, 3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1 234,6");
        assert_eq!(format_number_with_decimals(1234567.891, 2), "1 234 567,89");
        assert_eq!(format_number_with_decimals(0.0, 2), "0,00");
        assert_eq!(format_number_with_decimals(-1234.5, 1), "-1 234,5");
        assert_eq!(format_number_with_decimals(-123.0, 0), "-123");
    }

    #[test]
    fn test_amount_and_rate() {
        assert_eq!(format_amount(150.0), "150,0");
        assert_eq!(format_amount(2500.26), "2 500,3");
        assert_eq!(format_rate(6.85), "6,850 %");
    }
}
