//! Implementation of std::fmt traits & radix stringification
//!

use crate::arithmetic::negate_in_place;
use crate::{BigIntDigit, ImmutableBigIntRef, BIGINT_DIGIT_SIZE_IN_BITS};

use crate::stdlib::fmt;
use crate::stdlib::string::{String, ToString};
use crate::stdlib::Vec;

/// Upper bound of characters one digit can produce in `radix`.
///
/// Every character encodes at least floor(log2(radix)) bits, so the
/// quotient over-counts; the extra character absorbs the remainder.
fn max_chars_per_digit_in_radix(radix: u8) -> usize {
    let min_bits_per_char = (7 - radix.leading_zeros()) as usize;
    BIGINT_DIGIT_SIZE_IN_BITS / min_bits_per_char + 1
}

/// Divides the magnitude in place by a single-digit divisor, returning
/// the remainder.
fn udivrem_digit_in_place(digits: &mut [BigIntDigit], divisor: BigIntDigit) -> BigIntDigit {
    debug_assert!(divisor != 0);

    let mut remainder: BigIntDigit = 0;
    for digit in digits.iter_mut().rev() {
        let wide = (u128::from(remainder) << BIGINT_DIGIT_SIZE_IN_BITS) | u128::from(*digit);
        *digit = (wide / u128::from(divisor)) as BigIntDigit;
        remainder = (wide % u128::from(divisor)) as BigIntDigit;
    }
    remainder
}

/// Formats a canonical value in `radix` (2 to 36 inclusive), digits
/// `0`-`9` then `a`-`z`, with a leading `-` for negative values.
pub fn to_string_radix(src: ImmutableBigIntRef, radix: u8) -> String {
    assert!((2..=36).contains(&radix), "radix must be in [2, 36]");

    if src.num_digits() == 0 {
        return "0".to_string();
    }

    let negative = src.is_negative();
    let mut magnitude = src.digits().to_vec();
    if negative {
        // the magnitude of the most negative N-digit value still fits N
        // unsigned digits, so in-place negation cannot overflow
        negate_in_place(&mut magnitude);
    }

    // Pre-size for the largest possible output (plus a possible "-") so
    // accumulation never reallocates.
    let mut chars: Vec<u8> =
        Vec::with_capacity(1 + src.num_digits() * max_chars_per_digit_in_radix(radix));

    // Repeated division accumulates least significant character first.
    let mut len = magnitude.len();
    loop {
        while len > 0 && magnitude[len - 1] == 0 {
            len -= 1;
        }
        if len == 0 {
            break;
        }
        let remainder = udivrem_digit_in_place(&mut magnitude[..len], BigIntDigit::from(radix));
        let remainder = remainder as u8;
        chars.push(if remainder < 10 {
            b'0' + remainder
        } else {
            b'a' + remainder - 10
        });
    }

    if negative {
        chars.push(b'-');
    }

    chars.reverse();
    chars.into_iter().map(char::from).collect()
}

impl fmt::Display for ImmutableBigIntRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&to_string_radix(*self, 10))
    }
}
