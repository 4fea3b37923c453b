//! Positional-notation decoding of unbounded, non-negative integers.

use std::fmt;

use num_bigint::BigInt;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

pub const MIN_RADIX: u32 = 2;
pub const MAX_RADIX: u32 = 36;

/// A numeric base validated to lie in `MIN_RADIX..=MAX_RADIX`.
///
/// Digits use the alphabet `0-9` followed by `a-z`, case-insensitively, so
/// radix 16 accepts both `"ff"` and `"FF"`.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct Radix(u32);

impl Radix {
    pub const BINARY: Radix = Radix(2);
    pub const OCTAL: Radix = Radix(8);
    pub const DECIMAL: Radix = Radix(10);
    pub const HEXADECIMAL: Radix = Radix(16);

    pub fn new(radix: u32) -> Result<Self, DecodeError> {
        if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
            Ok(Self(radix))
        } else {
            Err(DecodeError::InvalidRadix(radix))
        }
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Value of `digit` in this radix, or `None` when it is outside the alphabet.
    #[inline]
    pub fn digit_value(self, digit: char) -> Option<u32> {
        digit.to_digit(self.0)
    }

    /// Interpret `digits` as a magnitude written in this radix.
    ///
    /// The accumulator is a [`BigInt`], so the result is exact for inputs of
    /// any length. Sign prefixes are not part of the alphabet and are
    /// reported as [`DecodeError::InvalidDigit`] at position 0.
    pub fn decode(self, digits: &str) -> Result<BigInt, DecodeError> {
        if digits.is_empty() {
            return Err(DecodeError::EmptyValue);
        }

        digits.chars().enumerate().try_fold(
            BigInt::zero(),
            |acc, (position, digit)| -> Result<BigInt, DecodeError> {
                let value = self.digit_value(digit).ok_or(
                    DecodeError::InvalidDigit {
                        digit,
                        position,
                        radix: self.0,
                    },
                )?;
                Ok(acc * self.0 + value)
            },
        )
    }
}

impl TryFrom<u32> for Radix {
    type Error = DecodeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Radix> for u32 {
    fn from(value: Radix) -> Self {
        value.0
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Decode `digits` written in base `radix` into a big integer.
///
/// ```
/// use recon_math::radix::decode_base_value;
/// use num_bigint::BigInt;
///
/// assert_eq!(decode_base_value("ff", 16).unwrap(), BigInt::from(255));
/// assert!(decode_base_value("fg", 16).is_err());
/// ```
pub fn decode_base_value(digits: &str, radix: u32) -> Result<BigInt, DecodeError> {
    Radix::new(radix)?.decode(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    use num_bigint::BigUint;
    use num_traits::{Num, pow};
    use proptest::collection::vec;
    use proptest::prelude::*;
    use test_strategy::proptest;

    mod radix_tests {
        use super::*;

        #[test]
        fn accepts_supported_range() {
            for radix in MIN_RADIX..=MAX_RADIX {
                assert_eq!(Radix::new(radix).map(Radix::get), Ok(radix));
            }
        }

        #[test]
        fn rejects_out_of_range() {
            for radix in [0, 1, 37, 64, u32::MAX] {
                assert_eq!(
                    Radix::new(radix),
                    Err(DecodeError::InvalidRadix(radix))
                );
            }
        }

        #[test]
        fn digit_values_follow_alphanumeric_alphabet() {
            let hex = Radix::HEXADECIMAL;
            assert_eq!(hex.digit_value('0'), Some(0));
            assert_eq!(hex.digit_value('a'), Some(10));
            assert_eq!(hex.digit_value('F'), Some(15));
            assert_eq!(hex.digit_value('g'), None);
            assert_eq!(Radix::BINARY.digit_value('2'), None);
        }

        #[test]
        fn serde_goes_through_validation() {
            let radix: Radix = serde_json::from_str("16").unwrap();
            assert_eq!(radix, Radix::HEXADECIMAL);
            assert_eq!(serde_json::to_string(&radix).unwrap(), "16");
            assert!(serde_json::from_str::<Radix>("40").is_err());
        }
    }

    mod decode_tests {
        use super::*;

        fn int(value: i64) -> BigInt {
            BigInt::from(value)
        }

        #[test]
        fn decodes_hex() {
            assert_eq!(decode_base_value("ff", 16), Ok(int(255)));
            assert_eq!(decode_base_value("FF", 16), Ok(int(255)));
        }

        #[test]
        fn decodes_small_bases() {
            assert_eq!(decode_base_value("111", 2), Ok(int(7)));
            assert_eq!(decode_base_value("213", 4), Ok(int(39)));
            assert_eq!(decode_base_value("zz", 36), Ok(int(1295)));
        }

        #[test]
        fn keeps_leading_zeros_harmless() {
            assert_eq!(decode_base_value("0000", 10), Ok(int(0)));
            assert_eq!(decode_base_value("007", 8), Ok(int(7)));
        }

        #[test]
        fn rejects_digit_outside_alphabet() {
            assert_eq!(
                decode_base_value("fg", 16),
                Err(DecodeError::InvalidDigit {
                    digit: 'g',
                    position: 1,
                    radix: 16
                })
            );
            assert_eq!(
                decode_base_value("102", 2),
                Err(DecodeError::InvalidDigit {
                    digit: '2',
                    position: 2,
                    radix: 2
                })
            );
        }

        #[test]
        fn rejects_empty_string() {
            assert_eq!(decode_base_value("", 10), Err(DecodeError::EmptyValue));
        }

        #[test]
        fn rejects_sign_prefix_and_whitespace() {
            for input in ["-5", "+5", " 5"] {
                assert!(matches!(
                    decode_base_value(input, 10),
                    Err(DecodeError::InvalidDigit { position: 0, .. })
                ));
            }
        }

        #[test]
        fn radix_is_checked_before_digits() {
            assert_eq!(
                decode_base_value("", 99),
                Err(DecodeError::InvalidRadix(99))
            );
        }

        #[test]
        fn exceeds_machine_width() {
            let digits = format!("1{}", "0".repeat(100));
            let expected = pow(BigInt::from(10), 100);
            assert_eq!(decode_base_value(&digits, 10), Ok(expected));

            let ones = "1".repeat(130);
            let expected = (BigInt::from(1) << 130u32) - BigInt::from(1);
            assert_eq!(decode_base_value(&ones, 2), Ok(expected));
        }
    }

    #[proptest]
    fn decimal_matches_reference_parser(
        #[strategy("[0-9]{1,120}")] digits: String,
    ) {
        let reference = BigInt::from_str_radix(&digits, 10).unwrap();
        assert_eq!(decode_base_value(&digits, 10), Ok(reference));
    }

    #[proptest]
    fn hexadecimal_matches_reference_parser(
        #[strategy("[0-9a-fA-F]{1,100}")] digits: String,
    ) {
        let reference = BigInt::from_str_radix(&digits, 16).unwrap();
        assert_eq!(decode_base_value(&digits, 16), Ok(reference));
    }

    #[proptest]
    fn any_radix_recovers_reference_rendering(
        #[strategy(MIN_RADIX..=MAX_RADIX)] radix: u32,
        #[strategy(vec(any::<u32>(), 1..8))] limbs: Vec<u32>,
    ) {
        let value = BigInt::from(BigUint::new(limbs));
        let rendered = value.to_str_radix(radix);
        assert_eq!(decode_base_value(&rendered, radix), Ok(value));
    }

    #[proptest]
    fn first_digit_past_the_alphabet_is_rejected(
        #[strategy(MIN_RADIX..MAX_RADIX)] radix: u32,
    ) {
        let outside = std::char::from_digit(radix, MAX_RADIX).unwrap();
        let digits = format!("1{outside}");
        assert_eq!(
            decode_base_value(&digits, radix),
            Err(DecodeError::InvalidDigit {
                digit: outside,
                position: 1,
                radix
            })
        );
    }
}
