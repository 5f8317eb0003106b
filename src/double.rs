//! Conversions between bigints and IEEE-754 doubles
//!
//! A double holds at most a 1024-bit magnitude, so the conversions
//! delegate the multi-word rounding work to num-bigint and move values
//! across the boundary as signed little-endian bytes, the same layout
//! the digit buffers use.

use crate::canonical::drop_extra_sign_bits;
use crate::{
    init_with_bytes, num_digits_for_size_in_bits, ImmutableBigIntRef, MutableBigIntRef,
    OperationStatus, BIGINT_DIGIT_SIZE_IN_BYTES,
};

use crate::stdlib::Vec;

use num_bigint::BigInt;
use num_traits::{FromPrimitive, ToPrimitive};

/// Digits a destination must have before `from_double(dst, src)`.
///
/// Reads the unbiased exponent straight out of the bit pattern: a
/// magnitude below one needs no digits at all, otherwise the value needs
/// `exponent + 1` magnitude bits (implicit mantissa bit included) plus
/// one sign bit.
pub fn from_double_result_size(src: f64) -> usize {
    let bits = src.to_bits();
    let exponent = ((bits >> 52) & 0x7ff) as i64 - 1023;

    if exponent < 0 {
        return 0;
    }

    num_digits_for_size_in_bits(exponent as usize + 2)
}

/// `dst = src` as a bigint, canonicalized.
///
/// The caller must have validated that `src` is integral and finite;
/// fractional or non-finite input is a contract violation, not a
/// detected error.
pub fn from_double(dst: &mut MutableBigIntRef, src: f64) -> OperationStatus {
    debug_assert!(
        dst.num_digits() >= from_double_result_size(src),
        "not enough digits provided for double conversion"
    );
    debug_assert!(src.is_finite(), "double conversion requires a finite value");

    // Integral input makes truncation exact.
    let value = BigInt::from_f64(src).unwrap_or_default();
    init_with_bytes(dst, drop_extra_sign_bits(&value.to_signed_bytes_le()))
}

/// The double nearest to `src`, honoring sign; overflowing magnitudes
/// saturate to the infinities.
pub fn to_double(src: ImmutableBigIntRef) -> f64 {
    if src.num_digits() == 0 {
        return 0.0;
    }

    let mut bytes = Vec::with_capacity(src.num_digits() * BIGINT_DIGIT_SIZE_IN_BYTES);
    for digit in src.digits() {
        bytes.extend_from_slice(&digit.to_le_bytes());
    }
    let value = BigInt::from_signed_bytes_le(&bytes);

    match value.to_f64() {
        Some(rounded) => rounded,
        None => {
            if src.is_negative() {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BigIntDigit;

    fn digits_from_double(src: f64) -> Vec<BigIntDigit> {
        let mut buf = vec![0; from_double_result_size(src)];
        let mut dst = MutableBigIntRef::new(&mut buf);
        assert_eq!(from_double(&mut dst, src), OperationStatus::Returned);
        let len = dst.num_digits();
        buf.truncate(len);
        buf
    }

    macro_rules! impl_size_case {
        ($name:ident : $src:literal => $digits:literal) => {
            #[test]
            fn $name() {
                assert_eq!(from_double_result_size($src), $digits);
            }
        };
    }

    impl_size_case!(case_size_zero : 0.0 => 0);
    impl_size_case!(case_size_half : 0.5 => 0);
    impl_size_case!(case_size_one : 1.0 => 1);
    impl_size_case!(case_size_two : 2.0 => 1);
    impl_size_case!(case_size_2_62 : 4611686018427387904.0 => 1);
    impl_size_case!(case_size_2_63 : 9223372036854775808.0 => 2);
    impl_size_case!(case_size_1e300 : 1e300 => 16);

    macro_rules! impl_case {
        ($name:ident : $src:literal => [$($digits:literal),*]) => {
            #[test]
            fn $name() {
                let expected: &[BigIntDigit] = &[$($digits),*];
                assert_eq!(digits_from_double($src), expected);
                // and back
                assert_eq!(to_double(ImmutableBigIntRef::new(expected)), $src);
            }
        };
    }

    impl_case!(case_zero : 0.0 => []);
    impl_case!(case_one : 1.0 => [1]);
    impl_case!(case_minus_one : -1.0 => [0xffff_ffff_ffff_ffff]);
    impl_case!(case_42 : 42.0 => [42]);
    impl_case!(case_minus_42 : -42.0 => [0xffff_ffff_ffff_ffd6]);
    impl_case!(case_2_53 : 9007199254740992.0 => [0x0020_0000_0000_0000]);
    impl_case!(case_max_safe_integer : 9007199254740991.0 => [0x001f_ffff_ffff_ffff]);
    impl_case!(case_minus_2_63 : -9223372036854775808.0 => [0x8000_0000_0000_0000]);
    impl_case!(case_2_64 : 18446744073709551616.0 => [0, 1]);

    #[test]
    fn test_negative_fraction_rounds_to_zero() {
        assert_eq!(from_double_result_size(-0.99), 0);
        assert_eq!(digits_from_double(-0.0), Vec::<BigIntDigit>::new());
    }

    #[test]
    fn test_to_double_of_huge_value_is_finite_until_1024_bits() {
        // 2^1000 is representable as a double
        let mut digits = vec![0; 16];
        digits[15] = 1 << (1000 - 15 * 64); // bit 1000
        let value = to_double(ImmutableBigIntRef::new(&digits));
        assert_eq!(value, 2f64.powi(1000));
    }

    #[test]
    fn test_round_trip_through_estimator_bound() {
        let samples = [
            0.0,
            1.0,
            -1.0,
            4294967296.0,
            -4294967296.0,
            9007199254740991.0,
            -9007199254740991.0,
            18446744073709551616.0,
            1e20,
            -1e20,
        ];
        for &src in samples.iter() {
            let digits = digits_from_double(src);
            assert!(digits.len() <= from_double_result_size(src).max(1));
            assert_eq!(to_double(ImmutableBigIntRef::new(&digits)), src);
        }
    }
}
