use rust_decimal::Decimal;

/// Formats a monetary amount for display: rounded to whole units, digits
/// grouped in threes, prefixed with the configured currency symbol.
///
/// This is the single display rule of the application; the engine itself
/// never formats anything.
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    let rounded = amount.round();
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{symbol}{grouped}")
    } else {
        format!("{symbol}{grouped}")
    }
}

/// Formats a percentage with exactly two decimal places, e.g. `40.00%`.
pub fn format_percent(value: Decimal) -> String {
    let mut rounded = value.round_dp(2);
    rounded.rescale(2);
    format!("{rounded}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(format_currency(dec!(0), "₹"), "₹0");
        assert_eq!(format_currency(dec!(999), "₹"), "₹999");
        assert_eq!(format_currency(dec!(1_000), "₹"), "₹1,000");
        assert_eq!(format_currency(dec!(1_500_000), "₹"), "₹1,500,000");
    }

    #[test]
    fn rounds_to_whole_units() {
        assert_eq!(format_currency(dec!(49_999.50), "$"), "$50,000");
        assert_eq!(format_currency(dec!(49_999.49), "$"), "$49,999");
    }

    #[test]
    fn negative_amounts_keep_the_sign_outside_the_symbol() {
        assert_eq!(format_currency(dec!(-1234.6), "$"), "-$1,235");
    }

    #[test]
    fn percent_always_shows_two_decimals() {
        assert_eq!(format_percent(dec!(40)), "40.00%");
        assert_eq!(format_percent(dec!(33.333)), "33.33%");
        assert_eq!(format_percent(dec!(0)), "0.00%");
    }
}
