// ============================================================================
// Number Base Converter
// Parse a numeral in one radix, render the value in all four at once
// ============================================================================

use crate::domain::{IntegerValue, Radix, RadixViews};
use crate::numeric::{CalcError, CalcResult};

/// Parse `input` as an unsigned numeral in `radix`, apply the sign flag,
/// and render the resulting signed 32-bit value in all four bases.
///
/// The sign is carried out-of-band (a toggle in the calling UI), so the
/// numeral itself never contains a minus sign.
///
/// # Errors
/// - `EmptyNumeral` for an empty string
/// - `InvalidDigit` for a character outside the radix's alphabet
/// - `MagnitudeOverflow` when the signed result does not fit 32 bits
///
/// # Example
/// ```
/// use calc_engine::engine::radix::convert;
/// use calc_engine::domain::Radix;
///
/// let views = convert("FF", Radix::Hexadecimal, false).unwrap();
/// assert_eq!(views.decimal, "255");
/// assert_eq!(views.binary, "11111111");
/// assert_eq!(views.octal, "377");
/// ```
pub fn convert(input: &str, radix: Radix, negative: bool) -> CalcResult<RadixViews> {
    let value = parse_signed(input, radix, negative)?;
    Ok(views_of(value))
}

/// Parse a numeral into a signed 32-bit integer.
///
/// # Errors
/// Same as [`convert`].
pub fn parse_signed(input: &str, radix: Radix, negative: bool) -> CalcResult<IntegerValue> {
    if input.is_empty() {
        return Err(CalcError::EmptyNumeral);
    }

    let base = radix.base();
    let mut magnitude: u64 = 0;
    for c in input.chars() {
        let digit = c.to_digit(base).ok_or(CalcError::InvalidDigit {
            digit: c,
            base,
        })?;
        magnitude = magnitude
            .checked_mul(u64::from(base))
            .and_then(|m| m.checked_add(u64::from(digit)))
            .ok_or(CalcError::MagnitudeOverflow)?;
        // Fail fast once past any representable 32-bit magnitude
        if magnitude > u64::from(u32::MAX) {
            return Err(CalcError::MagnitudeOverflow);
        }
    }

    IntegerValue::new(magnitude as u32, negative).ok_or(CalcError::MagnitudeOverflow)
}

/// Render a signed 32-bit value in all four bases.
pub fn views_of(value: IntegerValue) -> RadixViews {
    let signed = value.signed();
    let sign = if signed < 0 { "-" } else { "" };
    let magnitude = signed.unsigned_abs();

    RadixViews {
        binary: binary_representation(signed),
        octal: format!("{}{:o}", sign, magnitude),
        decimal: signed.to_string(),
        hexadecimal: format!("{}{:X}", sign, magnitude),
    }
}

/// Base-2 rendering: plain magnitude for non-negative values, the 32-bit
/// two's-complement bit pattern for negative ones.
fn binary_representation(value: i32) -> String {
    if value >= 0 {
        return format!("{:b}", value);
    }

    // Reinterpret the negative value as its unsigned bit pattern, then
    // left-pad with '1' to the full 32-bit width.
    let binary = format!("{:b}", value as u32);
    format!("{:1>32}", binary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_positive_conversion() {
        let views = convert("255", Radix::Decimal, false).unwrap();
        assert_eq!(views.binary, "11111111");
        assert_eq!(views.octal, "377");
        assert_eq!(views.decimal, "255");
        assert_eq!(views.hexadecimal, "FF");
    }

    #[test]
    fn test_lowercase_hex_accepted_uppercase_rendered() {
        let views = convert("deadbeef", Radix::Hexadecimal, false);
        // 0xDEADBEEF exceeds i32::MAX
        assert_eq!(views, Err(CalcError::MagnitudeOverflow));

        let views = convert("cafe", Radix::Hexadecimal, false).unwrap();
        assert_eq!(views.hexadecimal, "CAFE");
        assert_eq!(views.decimal, "51966");
    }

    #[test]
    fn test_negative_one_is_all_ones() {
        let views = convert("1", Radix::Decimal, true).unwrap();
        assert_eq!(views.binary.len(), 32);
        assert!(views.binary.chars().all(|c| c == '1'));
        assert_eq!(views.decimal, "-1");
        assert_eq!(views.octal, "-1");
        assert_eq!(views.hexadecimal, "-1");
    }

    #[test]
    fn test_negative_two_complement_pattern() {
        let views = convert("101", Radix::Binary, true).unwrap();
        // -5 as 32-bit two's complement
        assert_eq!(views.decimal, "-5");
        assert_eq!(views.binary, "11111111111111111111111111111011");
        assert_eq!(views.octal, "-5");
        assert_eq!(views.hexadecimal, "-5");
    }

    #[test]
    fn test_zero() {
        let views = convert("0", Radix::Binary, false).unwrap();
        assert_eq!(views.binary, "0");
        assert_eq!(views.decimal, "0");

        // A negative sign on zero is meaningless and dropped
        let views = convert("0", Radix::Decimal, true).unwrap();
        assert_eq!(views.decimal, "0");
        assert_eq!(views.binary, "0");
    }

    #[test]
    fn test_extremes() {
        let max = convert("2147483647", Radix::Decimal, false).unwrap();
        assert_eq!(max.hexadecimal, "7FFFFFFF");
        assert_eq!(max.binary, format!("{:b}", i32::MAX));

        let min = convert("2147483648", Radix::Decimal, true).unwrap();
        assert_eq!(min.decimal, "-2147483648");
        assert_eq!(min.hexadecimal, "-80000000");
        assert_eq!(min.binary, "10000000000000000000000000000000");
    }

    #[test]
    fn test_overflow_rejected() {
        assert_eq!(
            convert("2147483648", Radix::Decimal, false),
            Err(CalcError::MagnitudeOverflow)
        );
        assert_eq!(
            convert("2147483649", Radix::Decimal, true),
            Err(CalcError::MagnitudeOverflow)
        );
        assert_eq!(
            convert("FFFFFFFFFFFFFFFFFF", Radix::Hexadecimal, false),
            Err(CalcError::MagnitudeOverflow)
        );
    }

    #[test]
    fn test_malformed_input_is_an_error() {
        assert_eq!(
            convert("", Radix::Decimal, false),
            Err(CalcError::EmptyNumeral)
        );
        assert_eq!(
            convert("12G", Radix::Hexadecimal, false),
            Err(CalcError::InvalidDigit { digit: 'G', base: 16 })
        );
        assert_eq!(
            convert("8", Radix::Octal, false),
            Err(CalcError::InvalidDigit { digit: '8', base: 8 })
        );
        assert_eq!(
            convert("2", Radix::Binary, false),
            Err(CalcError::InvalidDigit { digit: '2', base: 2 })
        );
    }

    #[test]
    fn test_leading_zeros() {
        let views = convert("0010", Radix::Binary, false).unwrap();
        assert_eq!(views.decimal, "2");
        assert_eq!(views.binary, "10");
    }

    proptest! {
        #[test]
        fn prop_round_trip_through_every_radix(value in i32::MIN..=i32::MAX) {
            let views = views_of(IntegerValue::from_signed(value));
            // Binary only round-trips for non-negative values; the negative
            // rendering is a two's-complement pattern, not a magnitude.
            let radixes: &[Radix] = if value >= 0 {
                &[Radix::Binary, Radix::Octal, Radix::Decimal, Radix::Hexadecimal]
            } else {
                &[Radix::Octal, Radix::Decimal, Radix::Hexadecimal]
            };
            for &radix in radixes {
                let rendered = views.view(radix);
                let (negative, digits) = match rendered.strip_prefix('-') {
                    Some(rest) => (true, rest),
                    None => (false, rendered),
                };
                let reparsed = parse_signed(digits, radix, negative).unwrap();
                prop_assert_eq!(reparsed.signed(), value);
            }
        }

        #[test]
        fn prop_negative_binary_is_32_bits(value in i32::MIN..0i32) {
            let views = views_of(IntegerValue::from_signed(value));
            prop_assert_eq!(views.binary.len(), 32);
            prop_assert!(views.binary.starts_with('1'));
        }
    }
}
