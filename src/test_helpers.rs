// Oracle helpers included by test modules.
//
// num-bigint is the reference implementation: digit buffers convert to
// and from `BigInt` through the same little-endian two's complement byte
// layout the crate guarantees.

#[allow(unused_imports)]
use crate::stdlib::Vec;

#[allow(unused_imports)]
use num_bigint::BigInt as OracleInt;

#[allow(dead_code)]
fn oracle_from_digits(digits: &[crate::BigIntDigit]) -> OracleInt {
    let mut bytes = Vec::with_capacity(digits.len() * crate::BIGINT_DIGIT_SIZE_IN_BYTES);
    for digit in digits {
        bytes.extend_from_slice(&digit.to_le_bytes());
    }
    OracleInt::from_signed_bytes_le(&bytes)
}

#[allow(dead_code)]
fn canonical_digits_from_oracle(value: &OracleInt) -> Vec<crate::BigIntDigit> {
    let bytes = value.to_signed_bytes_le();
    let mut buf = vec![0; crate::num_digits_for_size_in_bytes(bytes.len())];
    let mut dst = crate::MutableBigIntRef::new(&mut buf);
    assert_eq!(
        crate::init_with_bytes(&mut dst, &bytes),
        crate::OperationStatus::Returned
    );
    let len = dst.num_digits();
    buf.truncate(len);
    buf
}

#[allow(dead_code)]
fn canonical_digits(digits: &[crate::BigIntDigit]) -> Vec<crate::BigIntDigit> {
    let mut buf = digits.to_vec();
    let mut view = crate::MutableBigIntRef::new(&mut buf);
    crate::canonical::ensure_canonical_result(&mut view);
    let len = view.num_digits();
    buf.truncate(len);
    buf
}
