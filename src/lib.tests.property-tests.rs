// Property tests to be included by lib.rs (if enabled)

use num_bigint::BigInt as OracleInt;

fn oracle_from_digits(digits: &[BigIntDigit]) -> OracleInt {
    let mut bytes = Vec::with_capacity(digits.len() * BIGINT_DIGIT_SIZE_IN_BYTES);
    for digit in digits {
        bytes.extend_from_slice(&digit.to_le_bytes());
    }
    OracleInt::from_signed_bytes_le(&bytes)
}

fn canonical_digits(digits: &[BigIntDigit]) -> Vec<BigIntDigit> {
    let mut buf = digits.to_vec();
    let mut view = MutableBigIntRef::new(&mut buf);
    crate::canonical::ensure_canonical_result(&mut view);
    let len = view.num_digits();
    buf.truncate(len);
    buf
}

fn run_binary_op(
    op: fn(&mut MutableBigIntRef, ImmutableBigIntRef, ImmutableBigIntRef) -> OperationStatus,
    size: fn(ImmutableBigIntRef, ImmutableBigIntRef) -> usize,
    a: &[BigIntDigit],
    b: &[BigIntDigit],
) -> Vec<BigIntDigit> {
    let mut buf = vec![0; size(ImmutableBigIntRef::new(a), ImmutableBigIntRef::new(b))];
    let mut dst = MutableBigIntRef::new(&mut buf);
    let status = op(&mut dst, ImmutableBigIntRef::new(a), ImmutableBigIntRef::new(b));
    assert_eq!(status, OperationStatus::Returned);
    let len = dst.num_digits();
    buf.truncate(len);
    buf
}

proptest! {
    #[test]
    fn canonicalize_is_idempotent(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let once = drop_extra_sign_bits(&bytes);
        prop_assert_eq!(drop_extra_sign_bits(once), once);
    }

    #[test]
    fn init_with_bytes_preserves_value(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut buf = vec![0; num_digits_for_size_in_bytes(bytes.len())];
        let mut dst = MutableBigIntRef::new(&mut buf);
        prop_assert_eq!(init_with_bytes(&mut dst, &bytes), OperationStatus::Returned);
        prop_assert_eq!(
            oracle_from_digits(dst.digits()),
            OracleInt::from_signed_bytes_le(&bytes)
        );
    }

    #[test]
    fn add_matches_oracle(
        a in prop::collection::vec(any::<u64>(), 0..8),
        b in prop::collection::vec(any::<u64>(), 0..8),
    ) {
        let a = canonical_digits(&a);
        let b = canonical_digits(&b);
        let sum = run_binary_op(add, add_result_size, &a, &b);
        prop_assert_eq!(
            oracle_from_digits(&sum),
            oracle_from_digits(&a) + oracle_from_digits(&b)
        );
        // estimator never under-estimates
        prop_assert!(sum.len() <= add_result_size(ImmutableBigIntRef::new(&a), ImmutableBigIntRef::new(&b)));
    }

    #[test]
    fn subtract_then_add_round_trips(
        a in prop::collection::vec(any::<u64>(), 0..8),
        b in prop::collection::vec(any::<u64>(), 0..8),
    ) {
        let a = canonical_digits(&a);
        let b = canonical_digits(&b);
        let diff = run_binary_op(subtract, subtract_result_size, &a, &b);
        let back = run_binary_op(add, add_result_size, &diff, &b);
        prop_assert_eq!(&back, &a);
    }

    #[test]
    fn unary_minus_is_involutive(a in prop::collection::vec(any::<u64>(), 0..8)) {
        let a = canonical_digits(&a);

        let mut buf = vec![0; unary_minus_result_size(ImmutableBigIntRef::new(&a))];
        let mut dst = MutableBigIntRef::new(&mut buf);
        prop_assert_eq!(
            unary_minus(&mut dst, ImmutableBigIntRef::new(&a)),
            OperationStatus::Returned
        );
        let negated: Vec<BigIntDigit> = dst.digits().to_vec();

        let mut buf = vec![0; unary_minus_result_size(ImmutableBigIntRef::new(&negated))];
        let mut dst = MutableBigIntRef::new(&mut buf);
        prop_assert_eq!(
            unary_minus(&mut dst, ImmutableBigIntRef::new(&negated)),
            OperationStatus::Returned
        );
        prop_assert_eq!(dst.digits(), a.as_slice());
    }

    #[test]
    fn compare_matches_oracle(
        a in prop::collection::vec(any::<u64>(), 0..8),
        b in prop::collection::vec(any::<u64>(), 0..8),
    ) {
        let a = canonical_digits(&a);
        let b = canonical_digits(&b);
        prop_assert_eq!(
            compare(ImmutableBigIntRef::new(&a), ImmutableBigIntRef::new(&b)),
            oracle_from_digits(&a).cmp(&oracle_from_digits(&b))
        );
    }

    #[test]
    fn integral_doubles_round_trip(value in -9007199254740991i64..9007199254740991i64) {
        let src = value as f64;
        let mut buf = vec![0; from_double_result_size(src)];
        let mut dst = MutableBigIntRef::new(&mut buf);
        prop_assert_eq!(from_double(&mut dst, src), OperationStatus::Returned);
        prop_assert_eq!(to_double(dst.as_immutable()), src);
    }
}

macro_rules! impl_string_round_trip {
    ($($radix:literal),*) => {
        paste! { proptest! {
            $(
                #[test]
                fn [< to_string_round_trips_radix_ $radix >](
                    a in prop::collection::vec(any::<u64>(), 0..8),
                ) {
                    let a = canonical_digits(&a);
                    let formatted = to_string_radix(ImmutableBigIntRef::new(&a), $radix);
                    let reparsed = OracleInt::parse_bytes(formatted.as_bytes(), $radix)
                        .expect("formatted output must reparse");
                    prop_assert_eq!(reparsed, oracle_from_digits(&a));
                }
            )*
        } }
    };
}

impl_string_round_trip!(2, 8, 10, 16, 36);
