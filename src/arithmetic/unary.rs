//!
//! Unary minus and unary not
//!

use super::init_non_canonical;
use crate::canonical::ensure_canonical_result;
use crate::{BigIntDigit, ImmutableBigIntRef, MutableBigIntRef, OperationStatus};

use crate::stdlib::cmp;

/// Two's complement negation in place: complement every digit, then add
/// one rippling up from the least significant digit.
pub(crate) fn negate_in_place(digits: &mut [BigIntDigit]) {
    let mut carry = true;
    for digit in digits.iter_mut() {
        let (value, carry_out) = (!*digit).overflowing_add(carry as BigIntDigit);
        *digit = value;
        carry = carry_out;
    }
}

pub(crate) fn complement_in_place(digits: &mut [BigIntDigit]) {
    for digit in digits.iter_mut() {
        *digit = !*digit;
    }
}

/// Negating a non-negative value never grows the representation, but a
/// negative one may need an extra digit for the sign bit: negating the
/// one-digit 0x8000000000000000 yields the two-digit
/// { 0x8000000000000000, 0x0000000000000000 }.
pub fn unary_minus_result_size(src: ImmutableBigIntRef) -> usize {
    if src.is_negative() {
        src.num_digits() + 1
    } else {
        src.num_digits()
    }
}

/// `dst = -src`, canonicalized. Negating zero is the identity.
pub fn unary_minus(dst: &mut MutableBigIntRef, src: ImmutableBigIntRef) -> OperationStatus {
    let status = init_non_canonical(dst, src);
    if status != OperationStatus::Returned {
        return status;
    }

    negate_in_place(dst.digits_mut());
    ensure_canonical_result(dst);

    debug_assert!(
        dst.as_immutable().is_negative() != src.is_negative() || src.num_digits() == 0,
        "unary minus overflow"
    );
    OperationStatus::Returned
}

/// `~0n` needs one digit; anything else fits in its own digit count.
pub fn unary_not_result_size(src: ImmutableBigIntRef) -> usize {
    cmp::max(1, src.num_digits())
}

/// `dst = !src` (bitwise complement, i.e. `-src - 1`), canonicalized.
pub fn unary_not(dst: &mut MutableBigIntRef, src: ImmutableBigIntRef) -> OperationStatus {
    let status = init_non_canonical(dst, src);
    if status != OperationStatus::Returned {
        return status;
    }

    complement_in_place(dst.digits_mut());
    ensure_canonical_result(dst);
    OperationStatus::Returned
}
