//! # Shared Formatting Utilities
//!
//! Number and currency formatting used by the dashboard views.
//!
//! ## Functions
//!
//! - [`format_number`] - Format numbers with comma separators
//! - [`format_amount`] - Format a monetary amount as a dollar string
//! - [`format_percentage`] - Format a 0–100 score as a percentage string

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
///
/// # Arguments
///
/// * `value` - The number to format
/// * `decimals` - Number of decimal places to show
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_number;
///
/// assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
/// assert_eq!(format_number(100.0, 2), "100.00");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals);
    let parts: Vec<&str> = formatted.split('.').collect();

    let integer_part = parts[0];
    let decimal_part = if parts.len() > 1 { parts[1] } else { "" };

    // Add commas to integer part, preserving a leading minus sign
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }

    let integer_with_commas: String = result.chars().rev().collect();

    if decimal_part.is_empty() {
        format!("{}{}", sign, integer_with_commas)
    } else {
        format!("{}{}.{}", sign, integer_with_commas, decimal_part)
    }
}

/// Format a monetary amount as a dollar string.
///
/// Whole amounts drop the decimal part; fractional amounts keep two places.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_amount;
///
/// assert_eq!(format_amount(1250.0), "$1,250");
/// assert_eq!(format_amount(1250.5), "$1,250.50");
/// assert_eq!(format_amount(0.0), "$0");
/// ```
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${}", format_number(amount, 0))
    } else {
        format!("${}", format_number(amount, 2))
    }
}

/// Format a 0–100 score as a percentage string, dropping a zero fraction.
pub fn format_percentage(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{}%", score as i64)
    } else {
        format!("{}%", score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
        assert_eq!(format_number(100.0, 2), "100.00");
        assert_eq!(format_number(0.0, 0), "0");
        assert_eq!(format_number(-4500.0, 0), "-4,500");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1250.0), "$1,250");
        assert_eq!(format_amount(1250.5), "$1,250.50");
        assert_eq!(format_amount(0.0), "$0");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(85.0), "85%");
        assert_eq!(format_percentage(85.5), "85.5%");
    }
}
