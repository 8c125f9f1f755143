//! Numeric helpers shared by progress gauges and value formatting.

/// Ratio of `first` to `total`, or `0.0` when `total` is zero.
///
/// Every other input is passed straight to the division, so negative and fractional
/// totals are accepted as-is.
pub fn calculate_progress_safe(first: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }

    first / total
}

/// Fractional digits needed to print any `f64` exactly.
const EXACT_F64_DIGITS: usize = 1075;

/// Formats `value` with at most `decimals` fractional digits.
///
/// Integral values print without a fractional part (`3.0` -> `"3"`). Anything else
/// prints with exactly `decimals` digits after the point. Rounding works on the exact
/// binary value and takes the larger magnitude on a tie (`2.5` -> `"3"`, `-2.5` -> `"-3"`),
/// while `1.005` stays `"1.00"` because its stored value is just below the tie.
/// Non-finite values print as `NaN`, `Infinity` and `-Infinity`.
pub fn number_to_max_decimals(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    if value.fract() == 0.0 {
        // -0.0 would otherwise print as "-0"
        if value == 0.0 {
            return "0".to_string();
        }
        return format!("{}", value);
    }

    round_half_up(value, decimals)
}

fn round_half_up(value: f64, decimals: usize) -> String {
    let precision = decimals.saturating_add(1).max(EXACT_F64_DIGITS);
    let exact = format!("{:.*}", precision, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(decimals))
        .collect();
    if frac_part.as_bytes().get(decimals).is_some_and(|d| *d >= b'5') {
        carry_one(&mut digits);
    }

    let int_len = digits.len() - decimals;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(digits[..int_len].iter().map(|d| char::from(*d)));
    if decimals > 0 {
        out.push('.');
        out.extend(digits[int_len..].iter().map(|d| char::from(*d)));
    }
    out
}

/// Adds one to the last digit of an ASCII digit string.
fn carry_one(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_with_zero_total_is_zero() {
        assert_eq!(calculate_progress_safe(5.0, 0.0), 0.0);
        assert_eq!(calculate_progress_safe(-3.5, 0.0), 0.0);
        assert_eq!(calculate_progress_safe(0.0, 0.0), 0.0);
        assert_eq!(calculate_progress_safe(f64::INFINITY, -0.0), 0.0);
    }

    #[test]
    fn test_progress_divides_otherwise() {
        assert_eq!(calculate_progress_safe(1.0, 4.0), 0.25);
        assert_eq!(calculate_progress_safe(3.0, 2.0), 1.5);
        // Negative totals are not rejected.
        assert_eq!(calculate_progress_safe(2.0, -4.0), -0.5);
        assert_eq!(calculate_progress_safe(0.1, 0.3), 0.1 / 0.3);
    }

    #[test]
    fn test_integers_have_no_fraction() {
        for decimals in [0, 1, 2, 5] {
            assert_eq!(number_to_max_decimals(3.0, decimals), "3");
            assert_eq!(number_to_max_decimals(-42.0, decimals), "-42");
            assert_eq!(number_to_max_decimals(0.0, decimals), "0");
            assert_eq!(number_to_max_decimals(-0.0, decimals), "0");
            assert!(!number_to_max_decimals(1_000_000.0, decimals).contains('.'));
        }
    }

    #[test]
    fn test_fractions_use_exact_digit_count() {
        assert_eq!(number_to_max_decimals(1.23456, 2), "1.23");
        assert_eq!(number_to_max_decimals(1.5, 3), "1.500");
        assert_eq!(number_to_max_decimals(-2.71828, 1), "-2.7");
        assert_eq!(number_to_max_decimals(0.66666, 2), "0.67");

        for decimals in 1..6 {
            let formatted = number_to_max_decimals(12.3456789, decimals);
            let (_, fraction) = formatted.split_once('.').unwrap();
            assert_eq!(fraction.len(), decimals);
        }
    }

    #[test]
    fn test_zero_decimals_drops_separator() {
        assert_eq!(number_to_max_decimals(7.8, 0), "8");
    }

    #[test]
    fn test_ties_round_to_larger_magnitude() {
        assert_eq!(number_to_max_decimals(0.5, 0), "1");
        assert_eq!(number_to_max_decimals(2.5, 0), "3");
        assert_eq!(number_to_max_decimals(-2.5, 0), "-3");
        assert_eq!(number_to_max_decimals(0.125, 2), "0.13");
        assert_eq!(number_to_max_decimals(1.25, 1), "1.3");
        assert_eq!(number_to_max_decimals(-0.125, 2), "-0.13");
    }

    #[test]
    fn test_rounding_uses_stored_value() {
        // 1.005 and 9.995 are stored slightly below the tie.
        assert_eq!(number_to_max_decimals(1.005, 2), "1.00");
        assert_eq!(number_to_max_decimals(9.995, 2), "9.99");
        assert_eq!(number_to_max_decimals(0.1, 20), "0.10000000000000000555");
    }

    #[test]
    fn test_rounding_carries_into_integer_part() {
        assert_eq!(number_to_max_decimals(9.96, 1), "10.0");
        assert_eq!(number_to_max_decimals(99.5, 0), "100");
        assert_eq!(number_to_max_decimals(-0.999, 2), "-1.00");
        assert_eq!(number_to_max_decimals(-0.001, 2), "-0.00");
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(number_to_max_decimals(f64::NAN, 2), "NaN");
        assert_eq!(number_to_max_decimals(f64::INFINITY, 2), "Infinity");
        assert_eq!(number_to_max_decimals(f64::NEG_INFINITY, 2), "-Infinity");
    }
}
