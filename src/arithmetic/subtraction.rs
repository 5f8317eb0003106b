//!
//! Subtraction over digit buffers
//!

use super::{
    additive_operation, negate_in_place, postprocess_noop, AdditiveOpPostProcess, DigitExt,
};
use crate::{BigIntDigit, ImmutableBigIntRef, MutableBigIntRef, OperationStatus};

use crate::stdlib::cmp;

/// Digits a destination must have before calling `subtract`. Same bound
/// as addition: one extra digit absorbs the borrow out of the top digit.
pub fn subtract_result_size(lhs: ImmutableBigIntRef, rhs: ImmutableBigIntRef) -> usize {
    cmp::max(lhs.num_digits(), rhs.num_digits()) + 1
}

/// `dst = lhs - rhs`, canonicalized.
pub fn subtract(
    dst: &mut MutableBigIntRef,
    lhs: ImmutableBigIntRef,
    rhs: ImmutableBigIntRef,
) -> OperationStatus {
    // Subtraction is not commutative. The skeleton always starts from the
    // operand with fewer digits, so when that operand is rhs the fold
    // computes rhs - lhs and the result must be negated to recover
    // lhs - rhs.
    let (fewer, most, op_post): (_, _, AdditiveOpPostProcess) =
        if lhs.num_digits() <= rhs.num_digits() {
            (lhs, rhs, postprocess_noop)
        } else {
            (rhs, lhs, negate_in_place)
        };

    additive_operation(
        sub_digit_slices_in_place,
        sub_digit_in_place,
        op_post,
        dst,
        fewer,
        most,
    )
}

/// `dst -= rhs` over equal-length slices; returns the borrow out of the
/// top digit.
pub(crate) fn sub_digit_slices_in_place(dst: &mut [BigIntDigit], rhs: &[BigIntDigit]) -> bool {
    debug_assert_eq!(dst.len(), rhs.len(), "operands must be aligned");

    let mut borrow = false;
    for (dst_digit, &rhs_digit) in dst.iter_mut().zip(rhs) {
        let (diff, borrow_out) = dst_digit.borrowing_sub(rhs_digit, borrow);
        *dst_digit = diff;
        borrow = borrow_out;
    }
    borrow
}

/// `dst -= value`, rippling the borrow as far as it goes.
pub(crate) fn sub_digit_in_place(dst: &mut [BigIntDigit], value: BigIntDigit) {
    let mut borrow = value;
    for digit in dst.iter_mut() {
        let (diff, overflowed) = digit.overflowing_sub(borrow);
        *digit = diff;
        if !overflowed {
            return;
        }
        borrow = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OperationStatus;

    include!("../test_helpers.rs");

    macro_rules! impl_case {
        ($name:ident : [$($a:literal),*] - [$($b:literal),*] == [$($c:literal),*]) => {
            #[test]
            fn $name() {
                let a: &[BigIntDigit] = &[$($a),*];
                let b: &[BigIntDigit] = &[$($b),*];
                let expected: &[BigIntDigit] = &[$($c),*];

                let mut buf = vec![0; subtract_result_size(ImmutableBigIntRef::new(a), ImmutableBigIntRef::new(b))];
                let mut dst = MutableBigIntRef::new(&mut buf);
                let status = subtract(&mut dst, ImmutableBigIntRef::new(a), ImmutableBigIntRef::new(b));
                assert_eq!(status, OperationStatus::Returned);
                assert_eq!(dst.digits(), expected);
            }
        };
    }

    impl_case!(case_0_0 : [] - [] == []);
    impl_case!(case_0_1 : [] - [1] == [0xffff_ffff_ffff_ffff]);
    impl_case!(case_3_2 : [3] - [2] == [1]);
    impl_case!(case_2_3 : [2] - [3] == [0xffff_ffff_ffff_ffff]);
    impl_case!(case_0_minus_1 : [] - [0xffff_ffff_ffff_ffff] == [1]);
    impl_case!(case_borrow_across_digit :
        [0, 1] - [1] == [0xffff_ffff_ffff_ffff, 0]);
    // lhs longer than rhs exercises the negate postprocess
    impl_case!(case_long_lhs :
        [5, 0, 1] - [5] == [0, 0, 1]);
    impl_case!(case_long_negative_lhs :
        [0, 0xffff_ffff_ffff_ffff] - [1] == [0xffff_ffff_ffff_ffff, 0xffff_ffff_ffff_fffe]);

    #[test]
    fn test_subtract_dest_too_small() {
        let a = [1];
        let b = [2, 3, 4];
        let mut buf = [0; 2];
        let mut dst = MutableBigIntRef::new(&mut buf);
        let status = subtract(
            &mut dst,
            ImmutableBigIntRef::new(&a),
            ImmutableBigIntRef::new(&b),
        );
        assert_eq!(status, OperationStatus::DestinationTooSmall);
        assert_eq!(dst.num_digits(), 0);
    }

    #[test]
    fn test_subtract_against_oracle() {
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
                let mut buf = vec![
                    0;
                    subtract_result_size(ImmutableBigIntRef::new(a), ImmutableBigIntRef::new(b))
                ];
                let mut dst = MutableBigIntRef::new(&mut buf);
                let status =
                    subtract(&mut dst, ImmutableBigIntRef::new(a), ImmutableBigIntRef::new(b));
                assert_eq!(status, OperationStatus::Returned);
                let expected = oracle_from_digits(a) - oracle_from_digits(b);
                assert_eq!(dst.digits(), canonical_digits_from_oracle(&expected).as_slice());
            }
        }
    }

    #[test]
    fn test_add_then_subtract_round_trips() {
        let samples: &[&[BigIntDigit]] = &[
            &[],
            &[42],
            &[0xffff_ffff_ffff_ffd6],
            &[0x8000_0000_0000_0000, 0],
            &[1, 2, 3],
        ];
        for &a in samples {
            for &b in samples {
                let a_ref = ImmutableBigIntRef::new(a);
                let b_ref = ImmutableBigIntRef::new(b);

                let mut sum_buf = vec![0; super::super::add_result_size(a_ref, b_ref)];
                let mut sum = MutableBigIntRef::new(&mut sum_buf);
                assert_eq!(
                    super::super::add(&mut sum, a_ref, b_ref),
                    OperationStatus::Returned
                );

                let mut diff_buf =
                    vec![0; subtract_result_size(sum.as_immutable(), b_ref)];
                let mut diff = MutableBigIntRef::new(&mut diff_buf);
                assert_eq!(
                    subtract(&mut diff, sum.as_immutable(), b_ref),
                    OperationStatus::Returned
                );
                assert_eq!(diff.digits(), a, "subtract(add(a, b), b) == a");
            }
        }
    }
}
