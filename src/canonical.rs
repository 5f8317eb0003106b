//! Canonical form maintenance
//!
//! A digit sequence is canonical when no digit can be inferred by
//! sign-extending the digit below it; zero is the empty sequence. Every
//! operation in the crate funnels its result through
//! `ensure_canonical_result` so callers only ever observe canonical
//! values.

use crate::{
    BigIntDigit, MutableBigIntRef, OperationStatus, SignedBigIntDigit, BIGINT_DIGIT_SIZE_IN_BYTES,
};

/// Sign extension byte implied by `byte`: 0x00 when its top bit is clear,
/// 0xFF when set.
pub(crate) fn sign_ext_byte(byte: u8) -> u8 {
    if byte & 0x80 != 0 {
        0xff
    } else {
        0x00
    }
}

pub(crate) fn sign_ext_digit(digit: BigIntDigit) -> BigIntDigit {
    if (digit as SignedBigIntDigit) < 0 {
        BigIntDigit::MAX
    } else {
        0
    }
}

/// Returns the shortest prefix of `src` that sign-extends back to the
/// same two's complement value.
///
/// `{ 0x00, 0x00, 0x00, 0xff }` keeps `{ 0x00, 0xff }`: dropping further
/// would turn a positive value negative. An all-0x00 input collapses to
/// the empty sequence (zero), an all-0xFF input to a single 0xFF (-1).
pub fn drop_extra_sign_bits(src: &[u8]) -> &[u8] {
    let drop = match src.last() {
        Some(&byte) => sign_ext_byte(byte),
        None => return src,
    };

    // A trailing byte is redundant when it equals the sign extension value
    // and the byte below it already implies the same sign.
    let mut len = src.len();
    while len > 0 && src[len - 1] == drop {
        let below = if len >= 2 { src[len - 2] } else { 0 };
        if sign_ext_byte(below) != drop {
            break;
        }
        len -= 1;
    }

    &src[..len]
}

/// Digit-granular counterpart of `drop_extra_sign_bits`.
///
/// The byte-level trim rounded up to whole digits never lands inside a
/// digit, so trimming whole digits directly yields the same count without
/// reinterpreting the buffer as bytes.
pub(crate) fn canonical_digit_len(digits: &[BigIntDigit]) -> usize {
    let drop = match digits.last() {
        Some(&digit) => sign_ext_digit(digit),
        None => return 0,
    };

    let mut len = digits.len();
    while len > 0 && digits[len - 1] == drop {
        let below = if len >= 2 { digits[len - 2] } else { 0 };
        if sign_ext_digit(below) != drop {
            break;
        }
        len -= 1;
    }

    len
}

/// Trims any digits in `dst` that can be inferred by a sign extension.
pub(crate) fn ensure_canonical_result(dst: &mut MutableBigIntRef) {
    let len = canonical_digit_len(dst.digits());
    dst.set_num_digits(len);
}

/// Loads a little-endian two's complement byte sequence into `dst`,
/// sign-extending the remaining capacity and canonicalizing.
///
/// Empty input is canonical zero. Fails with `DestinationTooSmall` (and a
/// zeroed digit count) when `dst` has fewer bytes of capacity than
/// `data`.
pub fn init_with_bytes(dst: &mut MutableBigIntRef, data: &[u8]) -> OperationStatus {
    let dst_size_in_bytes = dst.num_digits() * BIGINT_DIGIT_SIZE_IN_BYTES;

    if dst_size_in_bytes < data.len() {
        // sanitize the output so partial data can't be mistaken for a result
        dst.set_num_digits(0);
        return OperationStatus::DestinationTooSmall;
    }

    let sign_ext = match data.last() {
        Some(&byte) => sign_ext_byte(byte),
        None => {
            dst.set_num_digits(0);
            return OperationStatus::Returned;
        }
    };

    // Assemble whole digits from the byte sequence; the final partial
    // digit and everything above it are filled with the sign extension.
    for (index, digit) in dst.digits_mut().iter_mut().enumerate() {
        let mut chunk = [sign_ext; BIGINT_DIGIT_SIZE_IN_BYTES];
        let start = index * BIGINT_DIGIT_SIZE_IN_BYTES;
        if start < data.len() {
            let end = data.len().min(start + BIGINT_DIGIT_SIZE_IN_BYTES);
            chunk[..end - start].copy_from_slice(&data[start..end]);
        }
        *digit = BigIntDigit::from_le_bytes(chunk);
    }

    ensure_canonical_result(dst);
    OperationStatus::Returned
}
