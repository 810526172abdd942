//! Number formatting for amounts shown in yen

/// Formats a number with a comma every three digits and the given number of decimals
///
/// # Examples
///
/// ```
/// # use frontend::shared::number_format::format_number_with_decimals;
/// let formatted = format_number_with_decimals(1234.567, 2);
/// assert_eq!(formatted, "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        3 => format!("{:.3}", value),
        _ => format!("{:.2}", value),
    };

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Yen amount: whole numbers without decimals, fractions with two
///
/// # Examples
///
/// ```
/// # use frontend::shared::number_format::format_yen;
/// assert_eq!(format_yen(1234567.0), "¥1,234,567");
/// ```
pub fn format_yen(value: f64) -> String {
    let decimals = if value.fract() == 0.0 { 0 } else { 2 };
    format!("¥{}", format_number_with_decimals(value, decimals))
}

/// Percentage with one decimal, plain `0%` for zero
pub fn format_percent(value: f64) -> String {
    if value == 0.0 {
        "0%".to_string()
    } else {
        format!("{}%", format_number_with_decimals(value, 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_yen() {
        assert_eq!(format_yen(300000.0), "¥300,000");
        assert_eq!(format_yen(2100000.0), "¥2,100,000");
        assert_eq!(format_yen(0.0), "¥0");
        assert_eq!(format_yen(-150000.0), "¥-150,000");
        assert_eq!(format_yen(1234.5), "¥1,234.50");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1,234.567");
        assert_eq!(format_number_with_decimals(-123.0, 0), "-123");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(16.7), "16.7%");
        assert_eq!(format_percent(0.0), "0%");
        assert_eq!(format_percent(100.0), "100.0%");
    }
}
