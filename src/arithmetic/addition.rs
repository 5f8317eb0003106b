//!
//! Addition over digit buffers
//!

use super::{additive_operation, postprocess_noop, DigitExt};
use crate::{BigIntDigit, ImmutableBigIntRef, MutableBigIntRef, OperationStatus};

use crate::stdlib::cmp;

/// Digits a destination must have before calling `add`. The extra digit
/// simulates infinite precision by absorbing the carry out of the top
/// digit.
pub fn add_result_size(lhs: ImmutableBigIntRef, rhs: ImmutableBigIntRef) -> usize {
    cmp::max(lhs.num_digits(), rhs.num_digits()) + 1
}

/// `dst = lhs + rhs`, canonicalized.
pub fn add(
    dst: &mut MutableBigIntRef,
    lhs: ImmutableBigIntRef,
    rhs: ImmutableBigIntRef,
) -> OperationStatus {
    // Addition is commutative, so the operands can be reordered at will;
    // the skeleton wants the one with fewer digits first.
    let (fewer, most) = if lhs.num_digits() <= rhs.num_digits() {
        (lhs, rhs)
    } else {
        (rhs, lhs)
    };

    additive_operation(
        add_digit_slices_in_place,
        add_digit_in_place,
        postprocess_noop,
        dst,
        fewer,
        most,
    )
}

/// `dst += rhs` over equal-length slices; returns the carry out of the
/// top digit.
pub(crate) fn add_digit_slices_in_place(dst: &mut [BigIntDigit], rhs: &[BigIntDigit]) -> bool {
    debug_assert_eq!(dst.len(), rhs.len(), "operands must be aligned");

    let mut carry = false;
    for (dst_digit, &rhs_digit) in dst.iter_mut().zip(rhs) {
        let (sum, carry_out) = dst_digit.carrying_add(rhs_digit, carry);
        *dst_digit = sum;
        carry = carry_out;
    }
    carry
}

/// `dst += value`, rippling the carry as far as it goes.
pub(crate) fn add_digit_in_place(dst: &mut [BigIntDigit], value: BigIntDigit) {
    let mut carry = value;
    for digit in dst.iter_mut() {
        let (sum, overflowed) = digit.overflowing_add(carry);
        *digit = sum;
        if !overflowed {
            return;
        }
        carry = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OperationStatus;

    include!("../test_helpers.rs");

    macro_rules! impl_case {
        ($name:ident : [$($a:literal),*] + [$($b:literal),*] == [$($c:literal),*]) => {
            #[test]
            fn $name() {
                let a: &[BigIntDigit] = &[$($a),*];
                let b: &[BigIntDigit] = &[$($b),*];
                let expected: &[BigIntDigit] = &[$($c),*];

                let mut buf = vec![0; add_result_size(ImmutableBigIntRef::new(a), ImmutableBigIntRef::new(b))];
                let mut dst = MutableBigIntRef::new(&mut buf);
                let status = add(&mut dst, ImmutableBigIntRef::new(a), ImmutableBigIntRef::new(b));
                assert_eq!(status, OperationStatus::Returned);
                assert_eq!(dst.digits(), expected);

                // commutes
                let mut buf = vec![0; add_result_size(ImmutableBigIntRef::new(b), ImmutableBigIntRef::new(a))];
                let mut dst = MutableBigIntRef::new(&mut buf);
                let status = add(&mut dst, ImmutableBigIntRef::new(b), ImmutableBigIntRef::new(a));
                assert_eq!(status, OperationStatus::Returned);
                assert_eq!(dst.digits(), expected);
            }
        };
    }

    impl_case!(case_0_0 : [] + [] == []);
    impl_case!(case_0_1 : [] + [1] == [1]);
    impl_case!(case_1_2 : [1] + [2] == [3]);
    impl_case!(case_1_minus_1 : [1] + [0xffff_ffff_ffff_ffff] == []);
    impl_case!(case_minus_1_minus_1 :
        [0xffff_ffff_ffff_ffff] + [0xffff_ffff_ffff_ffff] == [0xffff_ffff_ffff_fffe]);
    impl_case!(case_carry_into_new_digit :
        [0xffff_ffff_ffff_ffff, 0] + [1] == [0, 1]);
    impl_case!(case_top_sign_bits_carry_out :
        [0x8000_0000_0000_0000, 0] + [0x8000_0000_0000_0000, 0] == [0, 1]);
    impl_case!(case_negative_top_bits_grow_a_digit :
        [0x8000_0000_0000_0000] + [0x8000_0000_0000_0000] == [0, 0xffff_ffff_ffff_ffff]);
    impl_case!(case_mixed_lengths :
        [5] + [0, 0, 1] == [5, 0, 1]);
    impl_case!(case_negative_plus_positive :
        [0xffff_ffff_ffff_fffe] + [5] == [3]);

    #[test]
    fn test_add_dest_too_small() {
        let a = [1, 2, 3];
        let b = [4];
        let mut buf = [0; 2];
        let mut dst = MutableBigIntRef::new(&mut buf);
        let status = add(
            &mut dst,
            ImmutableBigIntRef::new(&a),
            ImmutableBigIntRef::new(&b),
        );
        assert_eq!(status, OperationStatus::DestinationTooSmall);
        assert_eq!(dst.num_digits(), 0);
    }

    #[test]
    fn test_add_overallocated_dest() {
        let a = [7];
        let b = [8];
        let mut buf = [0x55; 16];
        let mut dst = MutableBigIntRef::new(&mut buf);
        let status = add(
            &mut dst,
            ImmutableBigIntRef::new(&a),
            ImmutableBigIntRef::new(&b),
        );
        assert_eq!(status, OperationStatus::Returned);
        assert_eq!(dst.digits(), &[15]);
    }

    #[test]
    fn test_add_against_oracle() {
        let samples: &[&[BigIntDigit]] = &[
            &[],
            &[1],
            &[0xffff_ffff_ffff_ffff],
            &[0x8000_0000_0000_0000, 0],
            &[0, 0x8000_0000_0000_0000],
            &[0x0123_4567_89ab_cdef, 0xfedc_ba98_7654_3210],
        ];
        for &a in samples {
            for &b in samples {
                let mut buf =
                    vec![0; add_result_size(ImmutableBigIntRef::new(a), ImmutableBigIntRef::new(b))];
                let mut dst = MutableBigIntRef::new(&mut buf);
                let status =
                    add(&mut dst, ImmutableBigIntRef::new(a), ImmutableBigIntRef::new(b));
                assert_eq!(status, OperationStatus::Returned);
                let expected = oracle_from_digits(a) + oracle_from_digits(b);
                assert_eq!(dst.digits(), canonical_digits_from_oracle(&expected).as_slice());
            }
        }
    }
}
