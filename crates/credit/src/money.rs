//! Cent rounding and display formatting for monetary values.

/// Round to the nearest cent with half-up semantics: a half cent rounds
/// up, not to even. The suite only handles non-negative amounts, where
/// this means away from zero.
///
/// Most float runtimes default to round-half-even; the system under
/// test displays half-up values, so the distinction matters at the cent
/// boundary.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

/// Format with exactly two fractional digits and comma thousands
/// grouping after half-up cent rounding: `6291.5719` becomes
/// `"6,291.57"`, `0.0` becomes `"0.00"`.
pub fn format_amount(value: f64) -> String {
    let cents = (value * 100.0 + 0.5).floor() as i64;
    let units = (cents / 100).unsigned_abs();
    let frac = (cents % 100).unsigned_abs();

    let digits = units.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if cents < 0 { "-" } else { "" };
    format!("{sign}{grouped}.{frac:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.125, 0.13; "half cent rounds up")]
    #[test_case(1.125, 1.13; "half cent rounds up above one")]
    #[test_case(2.624, 2.62; "below half rounds down")]
    #[test_case(6291.5719, 6291.57; "payment magnitude")]
    #[test_case(0.0, 0.0; "zero")]
    fn rounds_half_up(input: f64, expected: f64) {
        assert_eq!(round_to_cents(input), expected);
    }

    #[test_case(0.0, "0.00")]
    #[test_case(0.125, "0.13")]
    #[test_case(369.391, "369.39")]
    #[test_case(6291.5719, "6,291.57")]
    #[test_case(105317.0, "105,317.00")]
    #[test_case(1000000.0, "1,000,000.00")]
    fn formats_grouped_two_decimals(input: f64, expected: &str) {
        assert_eq!(format_amount(input), expected);
    }

    #[test]
    fn formatted_value_always_has_two_fractional_digits() {
        for value in [0.0, 0.1, 1.0, 12.3, 999.999, 4213.565] {
            let text = format_amount(value);
            let (_, frac) = text.split_once('.').expect("decimal point present");
            assert_eq!(frac.len(), 2, "{text}");
        }
    }
}
