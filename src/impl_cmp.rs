//! Implementation of comparison operations
//!
//! Canonical form does most of the work here: values of the same sign
//! with different digit counts are ordered by count alone, and only
//! equal-sized buffers need a digit-by-digit look.

use crate::canonical::ensure_canonical_result;
use crate::{ImmutableBigIntRef, MutableBigIntRef, BigIntDigit, SignedBigIntDigit};

use crate::stdlib::cmp::Ordering;

/// Three-way ordering of two canonical values.
pub fn compare(lhs: ImmutableBigIntRef, rhs: ImmutableBigIntRef) -> Ordering {
    let lhs_negative = lhs.is_negative();
    let rhs_negative = rhs.is_negative();

    // Different signs decide immediately.
    if lhs_negative != rhs_negative {
        return if lhs_negative {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }

    if lhs.num_digits() == rhs.num_digits() {
        // Same sign and size: an unsigned digit compare from the most
        // significant digit down orders two's complement values of equal
        // width.
        for (lhs_digit, rhs_digit) in lhs.digits().iter().rev().zip(rhs.digits().iter().rev()) {
            match lhs_digit.cmp(rhs_digit) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        return Ordering::Equal;
    }

    // Canonical values of the same sign are ordered by their size: more
    // digits is greater for non-negative values, smaller (more negative)
    // for negative ones.
    if lhs_negative {
        if lhs.num_digits() < rhs.num_digits() {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    } else {
        if lhs.num_digits() < rhs.num_digits() {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

/// Three-way ordering against a signed machine word.
///
/// One digit always suffices for the scalar: it is signed, so its bit
/// pattern already is a complete two's complement representation. It
/// still needs canonicalization (e.g. 0 must become the empty sequence)
/// before the two-view comparison applies.
pub fn compare_scalar(lhs: ImmutableBigIntRef, rhs: SignedBigIntDigit) -> Ordering {
    let mut digits: [BigIntDigit; 1] = [rhs as BigIntDigit];
    let len = {
        let mut rhs_view = MutableBigIntRef::new(&mut digits);
        ensure_canonical_result(&mut rhs_view);
        rhs_view.num_digits()
    };
    compare(lhs, ImmutableBigIntRef::new(&digits[..len]))
}

impl PartialEq for ImmutableBigIntRef<'_> {
    fn eq(&self, rhs: &Self) -> bool {
        compare(*self, *rhs) == Ordering::Equal
    }
}

impl Eq for ImmutableBigIntRef<'_> {}

impl PartialOrd for ImmutableBigIntRef<'_> {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(compare(*self, *rhs))
    }
}

impl Ord for ImmutableBigIntRef<'_> {
    fn cmp(&self, rhs: &Self) -> Ordering {
        compare(*self, *rhs)
    }
}
