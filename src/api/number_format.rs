/// Narrow no-break space used by fr-FR digit grouping.
pub const FR_GROUP_SEPARATOR: char = '\u{202f}';

const MAX_FRACTION_DIGITS: usize = 3;

/// Formats `value` the way a `fr-FR` number formatter does by default:
/// thousands grouped with U+202F, comma decimal separator, at most three
/// fraction digits.
#[must_use]
pub fn format_fr(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_owned();
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + integer.len() / 3 + 1);
    let is_zero = integer.bytes().all(|digit| digit == b'0') && fraction.is_empty();
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            out.push(FR_GROUP_SEPARATOR);
        }
        out.push(digit);
    }
    if !fraction.is_empty() {
        out.push(',');
        out.push_str(fraction);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::format_fr;

    #[test]
    fn groups_thousands_with_narrow_spaces() {
        assert_eq!(format_fr(2_148_000.0), "2\u{202f}148\u{202f}000");
        assert_eq!(format_fr(999.0), "999");
        assert_eq!(format_fr(1_000.0), "1\u{202f}000");
    }

    #[test]
    fn keeps_up_to_three_fraction_digits() {
        assert_eq!(format_fr(1234.5), "1\u{202f}234,5");
        assert_eq!(format_fr(0.12345), "0,123");
        assert_eq!(format_fr(-42.0), "-42");
        assert_eq!(format_fr(-0.0001), "0");
    }
}
