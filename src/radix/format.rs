//! Formatter: integer value -> digit string
//!
//! Repeated division by the radix, mapping remainders through the
//! alphabet. Total for every supported alphabet; zero formats as "0".

use crate::radix::alphabet::Alphabet;
use crate::radix::RadixError;

/// Format a value in the given base
pub fn format_in_base(value: u128, radix: u32) -> Result<String, RadixError> {
    let alphabet = Alphabet::for_radix(radix)?;
    Ok(format_with(value, &alphabet))
}

/// Format a value with an explicit alphabet
pub fn format_with(value: u128, alphabet: &Alphabet) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let radix = alphabet.radix() as u128;
    let mut digits = Vec::new();
    let mut remaining = value;

    while remaining > 0 {
        digits.push(alphabet.digit_char((remaining % radix) as u32));
        remaining /= radix;
    }

    digits.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radix::parse::parse_in_base;

    #[test]
    fn test_format_examples() {
        assert_eq!(format_in_base(255, 16).unwrap(), "FF");
        assert_eq!(format_in_base(255, 2).unwrap(), "11111111");
        assert_eq!(format_in_base(255, 8).unwrap(), "377");
        assert_eq!(format_in_base(255, 10).unwrap(), "255");
    }

    #[test]
    fn test_format_zero_in_every_base() {
        for radix in 2..=64 {
            assert_eq!(format_in_base(0, radix).unwrap(), "0");
        }
    }

    #[test]
    fn test_format_crockford() {
        // 255 = 7 * 32 + 31 -> '7' then 'Z'
        assert_eq!(format_in_base(255, 32).unwrap(), "7Z");
    }

    #[test]
    fn test_format_base64() {
        assert_eq!(format_in_base(63, 64).unwrap(), "/");
        assert_eq!(format_in_base(64, 64).unwrap(), "10");
    }

    #[test]
    fn test_format_idempotent() {
        let a = format_in_base(123_456_789, 36).unwrap();
        let b = format_in_base(123_456_789, 36).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_format_u128_max() {
        let formatted = format_in_base(u128::MAX, 16).unwrap();
        assert_eq!(formatted, "F".repeat(32));
    }

    #[test]
    fn test_format_unsupported_base() {
        assert_eq!(
            format_in_base(255, 1).unwrap_err(),
            RadixError::UnsupportedBase(1)
        );
    }

    #[test]
    fn test_round_trip_across_bases() {
        let values = [0u128, 1, 7, 255, 256, 4095, 123_456_789, u128::from(u64::MAX)];
        for radix in 2..=64u32 {
            for &value in &values {
                let formatted = format_in_base(value, radix).unwrap();
                assert_eq!(
                    parse_in_base(&formatted, radix).unwrap(),
                    value,
                    "round trip failed for {} in base {}",
                    value,
                    radix
                );
            }
        }
    }
}
