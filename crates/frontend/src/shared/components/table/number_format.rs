//! Number formatting for table cells

/// Formats a number with a thousands separator and a fixed number of decimals
///
/// # Examples
///
/// ```ignore
/// let formatted = format_number_with_decimals(1234.567, 2, ',');
/// assert_eq!(formatted, "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize, separator: char) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (unsigned, None),
    };

    // Insert the separator every 3 digits from the right
    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Formats an amount in dollars with 2 decimals
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_currency(125.99), "$125.99");
/// ```
pub fn format_currency(value: f64) -> String {
    let number = format_number_with_decimals(value.abs(), 2, ',');
    if value < 0.0 && number.chars().any(|c| c != '0' && c != '.' && c != ',') {
        format!("-${}", number)
    } else {
        format!("${}", number)
    }
}
