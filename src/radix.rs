//! Conversion between hexadecimal strings and `f64` values.
//!
//! Parsing never fails: malformed input yields NaN, as a numeric literal
//! `0x…` with bad digits would.

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Parses `hexadecimal` as the digits of a `0x` literal.
///
/// Upper- and lowercase digits are accepted and trailing whitespace is
/// ignored. Empty input, signs, prefixes, leading whitespace and any other
/// character yield NaN. Results above 2⁵³ are rounded once to the nearest
/// `f64`, ties to even; values past `f64::MAX` become `+∞`.
///
/// # Examples
/// ```
/// use u_numkit::radix::hexadecimal_to_decimal;
/// assert_eq!(hexadecimal_to_decimal("ff"), 255.0);
/// assert_eq!(hexadecimal_to_decimal("FF"), 255.0);
/// assert!(hexadecimal_to_decimal("fg").is_nan());
/// ```
pub fn hexadecimal_to_decimal(hexadecimal: &str) -> f64 {
    let digits = hexadecimal.trim_end();
    if digits.is_empty() {
        tracing::trace!("empty hexadecimal input");
        return f64::NAN;
    }

    // The first 32 significant digits are held exactly; digits below them
    // only scale the value and feed a sticky bit for the final rounding.
    let mut mantissa: u128 = 0;
    let mut significant = 0_u32;
    let mut dropped = 0_i32;
    let mut sticky = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(16) else {
            tracing::trace!(input = hexadecimal, invalid = %c, "malformed hexadecimal input");
            return f64::NAN;
        };
        if significant < 32 {
            if mantissa != 0 || d != 0 {
                mantissa = mantissa * 16 + u128::from(d);
                significant += 1;
            }
        } else {
            dropped = dropped.saturating_add(1);
            sticky |= d != 0;
        }
    }

    // A full mantissa spans at least 125 bits, so its lowest bit sits far
    // below the 53-bit rounding point and can carry the sticky bit.
    if sticky {
        mantissa |= 1;
    }
    (mantissa as f64) * 2f64.powi(dropped.saturating_mul(4))
}

/// Formats `decimal` in lowercase base 16.
///
/// Negative values carry a leading `-`; `-0` formats as `"0"`. Fractional
/// parts are written after a `.` and expanded exactly, since every finite
/// `f64` has a terminating base-16 expansion. NaN and the infinities format
/// as `"NaN"`, `"Infinity"` and `"-Infinity"`.
///
/// # Examples
/// ```
/// use u_numkit::radix::decimal_to_hexadecimal;
/// assert_eq!(decimal_to_hexadecimal(255.0), "ff");
/// assert_eq!(decimal_to_hexadecimal(-255.0), "-ff");
/// assert_eq!(decimal_to_hexadecimal(0.5), "0.8");
/// ```
pub fn decimal_to_hexadecimal(decimal: f64) -> String {
    if decimal.is_nan() {
        return "NaN".to_string();
    }
    if decimal.is_infinite() {
        return if decimal > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if decimal == 0.0 {
        return "0".to_string();
    }

    let magnitude = decimal.abs();
    let mut int_part = magnitude.trunc();
    let mut frac_part = magnitude - int_part;

    // Division by 16 and `% 16` are exact on integral f64 values.
    let mut int_digits = Vec::new();
    if int_part == 0.0 {
        int_digits.push(b'0');
    }
    while int_part > 0.0 {
        let d = int_part % 16.0;
        int_digits.push(HEX_DIGITS[d as usize]);
        int_part = (int_part - d) / 16.0;
    }

    let mut out = String::with_capacity(int_digits.len() + 2);
    if decimal < 0.0 {
        out.push('-');
    }
    out.extend(int_digits.iter().rev().map(|&b| b as char));

    if frac_part > 0.0 {
        out.push('.');
        while frac_part > 0.0 {
            frac_part *= 16.0;
            let d = frac_part.trunc();
            out.push(HEX_DIGITS[d as usize] as char);
            frac_part -= d;
        }
    }
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_decimal_known_values() {
        assert_eq!(hexadecimal_to_decimal("ff"), 255.0);
        assert_eq!(hexadecimal_to_decimal("0"), 0.0);
        assert_eq!(hexadecimal_to_decimal("1a2B"), 6699.0);
        assert_eq!(hexadecimal_to_decimal("00ff"), 255.0);
        assert_eq!(hexadecimal_to_decimal("ff \n"), 255.0);
    }

    #[test]
    fn test_hex_to_decimal_malformed_is_nan() {
        for input in ["", "   ", "xyz", "-ff", "+ff", "0xff", " ff", "f f", "1.5"] {
            assert!(hexadecimal_to_decimal(input).is_nan(), "input {input:?}");
        }
    }

    #[test]
    fn test_hex_to_decimal_large() {
        assert_eq!(
            hexadecimal_to_decimal("ffffffffffffffff"),
            u64::MAX as f64
        );
        // 2^132, beyond u128
        let big = format!("1{}", "0".repeat(33));
        assert_eq!(hexadecimal_to_decimal(&big), 2f64.powi(132));
    }

    #[test]
    fn test_hex_to_decimal_rounds_once_past_128_bits() {
        // 2^132 + 2^79 + 1: just above the halfway point between 2^132 and
        // the next f64, 2^132 + 2^80.
        let input = format!("1{}8{}1", "0".repeat(13), "0".repeat(18));
        assert_eq!(input.len(), 34);
        assert_eq!(hexadecimal_to_decimal(&input), 2f64.powi(132) + 2f64.powi(80));

        // Exactly halfway rounds to even.
        let tie = format!("1{}8{}", "0".repeat(13), "0".repeat(19));
        assert_eq!(hexadecimal_to_decimal(&tie), 2f64.powi(132));

        // Leading zeros do not count towards the exact digits.
        let padded = format!("{}{}", "0".repeat(40), input);
        assert_eq!(hexadecimal_to_decimal(&padded), hexadecimal_to_decimal(&input));
    }

    #[test]
    fn test_hex_to_decimal_overflows_to_infinity() {
        let huge = format!("1{}", "0".repeat(300));
        assert_eq!(hexadecimal_to_decimal(&huge), f64::INFINITY);
    }

    #[test]
    fn test_decimal_to_hex_known_values() {
        assert_eq!(decimal_to_hexadecimal(255.0), "ff");
        assert_eq!(decimal_to_hexadecimal(0.0), "0");
        assert_eq!(decimal_to_hexadecimal(-0.0), "0");
        assert_eq!(decimal_to_hexadecimal(4096.0), "1000");
        assert_eq!(decimal_to_hexadecimal(-255.0), "-ff");
        assert_eq!(decimal_to_hexadecimal(2f64.powi(60)), "1000000000000000");
    }

    #[test]
    fn test_decimal_to_hex_fractions() {
        assert_eq!(decimal_to_hexadecimal(0.5), "0.8");
        assert_eq!(decimal_to_hexadecimal(255.5), "ff.8");
        assert_eq!(decimal_to_hexadecimal(-0.0625), "-0.1");
        assert_eq!(decimal_to_hexadecimal(10.75), "a.c");
    }

    #[test]
    fn test_decimal_to_hex_special_values() {
        assert_eq!(decimal_to_hexadecimal(f64::NAN), "NaN");
        assert_eq!(decimal_to_hexadecimal(f64::INFINITY), "Infinity");
        assert_eq!(decimal_to_hexadecimal(f64::NEG_INFINITY), "-Infinity");
    }
}
