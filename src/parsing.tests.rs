// Tests included by the parsing module.

use crate::ParsedSign;

macro_rules! impl_literal_case {
    ($name:ident : $input:literal => $digits:literal, $radix:literal, $sign:ident) => {
        #[test]
        fn $name() {
            let literal = parse_string_integer_literal($input.as_bytes()).unwrap();
            assert_eq!(literal.digits, $digits);
            assert_eq!(literal.radix, $radix);
            assert_eq!(literal.sign, ParsedSign::$sign);
        }
    };
}

impl_literal_case!(case_empty : "" => "0", 10, None);
impl_literal_case!(case_blank : "   " => "0", 10, None);
impl_literal_case!(case_zero : "0" => "0", 10, None);
impl_literal_case!(case_many_zeros : "000" => "0", 10, None);
impl_literal_case!(case_decimal : "123" => "123", 10, None);
impl_literal_case!(case_plus_decimal : "+123" => "123", 10, Plus);
impl_literal_case!(case_minus_decimal : "-123" => "123", 10, Minus);
impl_literal_case!(case_minus_42_padded : "  -42 " => "42", 10, Minus);
impl_literal_case!(case_leading_zeros : "007" => "7", 10, None);
impl_literal_case!(case_signed_leading_zeros : "-007" => "7", 10, Minus);
impl_literal_case!(case_plus_zero : "+0" => "0", 10, Plus);
impl_literal_case!(case_hex : "0x1F" => "1F", 16, None);
impl_literal_case!(case_hex_lower : "0xdeadbeef" => "deadbeef", 16, None);
impl_literal_case!(case_hex_upper_prefix : "0X10" => "10", 16, None);
impl_literal_case!(case_binary : "0b101" => "101", 2, None);
impl_literal_case!(case_binary_upper : "0B11" => "11", 2, None);
impl_literal_case!(case_binary_zero : "0b0" => "0", 2, None);
impl_literal_case!(case_octal : "0o777" => "777", 8, None);
impl_literal_case!(case_octal_upper : "0O17" => "17", 8, None);
impl_literal_case!(case_nul_terminated : "42\0" => "42", 10, None);
impl_literal_case!(case_tab_newline_trim : "\t\n42\r\n" => "42", 10, None);

macro_rules! impl_invalid_case {
    ($name:ident : $input:literal => $error:ident) => {
        #[test]
        fn $name() {
            assert_eq!(
                parse_string_integer_literal($input.as_bytes()),
                Err(ParseBigIntError::$error)
            );
        }
    };
}

impl_invalid_case!(case_bad_binary_no_digits : "0b" => InvalidLiteral);
impl_invalid_case!(case_bad_octal_no_digits : "0o" => InvalidLiteral);
impl_invalid_case!(case_bad_hex_no_digits : "0x" => InvalidLiteral);
impl_invalid_case!(case_bad_word : "hello" => InvalidLiteral);
impl_invalid_case!(case_bad_sign_only : "-" => InvalidLiteral);
impl_invalid_case!(case_bad_plus_only : "+" => InvalidLiteral);
impl_invalid_case!(case_bad_double_sign : "--1" => InvalidLiteral);
impl_invalid_case!(case_bad_sign_after_prefix : "0x-1" => InvalidLiteral);
impl_invalid_case!(case_bad_binary_digit : "0b7" => InvalidLiteral);
impl_invalid_case!(case_bad_decimal_point : "1.5" => TrailingData);
impl_invalid_case!(case_bad_hex_trailing : "0x1fz" => TrailingData);
impl_invalid_case!(case_bad_binary_trailing : "0b12" => TrailingData);
impl_invalid_case!(case_bad_octal_trailing : "0o18" => TrailingData);
impl_invalid_case!(case_bad_decimal_trailing : "12g" => TrailingData);
impl_invalid_case!(case_bad_inner_space : "1 2" => TrailingData);
impl_invalid_case!(case_bad_sign_for_hex : "-0x1" => InvalidLiteral);

#[test]
fn test_wide_input_parses_like_narrow() {
    let wide: Vec<u16> = "  -42 ".encode_utf16().collect();
    let literal = parse_string_integer_literal(&wide).unwrap();
    assert_eq!(literal.digits, "42");
    assert_eq!(literal.radix, 10);
    assert_eq!(literal.sign, ParsedSign::Minus);
}

#[test]
fn test_wide_whitespace_trims() {
    // ideographic space U+3000 on both ends
    let wide: Vec<u16> = "\u{3000}0x1F\u{3000}".encode_utf16().collect();
    let literal = parse_string_integer_literal(&wide).unwrap();
    assert_eq!(literal.digits, "1F");
    assert_eq!(literal.radix, 16);
}

#[test]
fn test_leading_zero_backtracks_to_decimal() {
    // "09" is not a valid non-decimal literal; it reparses as decimal 9
    let literal = parse_string_integer_literal(b"09".as_ref()).unwrap();
    assert_eq!(literal.digits, "9");
    assert_eq!(literal.radix, 10);
    assert_eq!(literal.sign, ParsedSign::None);

    let literal = parse_string_integer_literal(b"0099".as_ref()).unwrap();
    assert_eq!(literal.digits, "99");
    assert_eq!(literal.radix, 10);
}

macro_rules! impl_bytes_case {
    ($name:ident : $input:literal => [$($byte:literal),*]) => {
        #[test]
        fn $name() {
            let parsed: ParsedBigInt = $input.parse().unwrap();
            let expected: &[u8] = &[$($byte),*];
            assert_eq!(parsed.as_bytes(), expected);
        }
    };
}

impl_bytes_case!(case_bytes_empty : "" => []);
impl_bytes_case!(case_bytes_zero : "0" => []);
impl_bytes_case!(case_bytes_minus_zero : "-0" => []);
impl_bytes_case!(case_bytes_one : "1" => [0x01]);
impl_bytes_case!(case_bytes_minus_one : "-1" => [0xff]);
impl_bytes_case!(case_bytes_hex_1f : "0x1F" => [0x1f]);
impl_bytes_case!(case_bytes_minus_42 : "  -42 " => [0xd6]);
impl_bytes_case!(case_bytes_255 : "255" => [0xff, 0x00]);
impl_bytes_case!(case_bytes_256 : "256" => [0x00, 0x01]);
impl_bytes_case!(case_bytes_minus_256 : "-256" => [0x00, 0xff]);
impl_bytes_case!(case_bytes_binary : "0b11111111" => [0xff, 0x00]);
impl_bytes_case!(case_bytes_octal : "0o400" => [0x00, 0x01]);
impl_bytes_case!(case_bytes_2_64 :
    "18446744073709551616" => [0, 0, 0, 0, 0, 0, 0, 0, 0x01]);
impl_bytes_case!(case_bytes_minus_2_63 :
    "-9223372036854775808" => [0, 0, 0, 0, 0, 0, 0, 0x80]);

#[test]
fn test_parsed_bigint_num_digits() {
    let parsed: ParsedBigInt = "0x1F".parse().unwrap();
    assert_eq!(parsed.num_digits(), 1);

    let parsed: ParsedBigInt = "0".parse().unwrap();
    assert_eq!(parsed.num_digits(), 0);

    let parsed: ParsedBigInt = "18446744073709551616".parse().unwrap();
    assert_eq!(parsed.num_digits(), 2);
}

#[test]
fn test_parsed_bigint_into_buffer() {
    let parsed: ParsedBigInt = "-9223372036854775809".parse().unwrap(); // -2^63 - 1
    let mut buf = vec![0; parsed.num_digits()];
    let mut dst = crate::MutableBigIntRef::new(&mut buf);
    assert_eq!(
        crate::init_with_bytes(&mut dst, parsed.as_bytes()),
        crate::OperationStatus::Returned
    );
    // -2^63 - 1 spills into a second digit
    assert_eq!(dst.digits(), &[0x7fff_ffff_ffff_ffff, 0xffff_ffff_ffff_ffff]);
}

#[test]
fn test_round_trip_with_to_string() {
    let inputs = ["0", "1", "-1", "255", "-255", "123456789123456789", "-42"];
    for input in inputs.iter() {
        let parsed: ParsedBigInt = input.parse().unwrap();
        let mut buf = vec![0; parsed.num_digits()];
        let mut dst = crate::MutableBigIntRef::new(&mut buf);
        assert_eq!(
            crate::init_with_bytes(&mut dst, parsed.as_bytes()),
            crate::OperationStatus::Returned
        );
        assert_eq!(
            crate::to_string_radix(dst.as_immutable(), 10),
            *input
        );
    }
}

#[test]
fn test_new_trims_sign_extension() {
    let parsed = ParsedBigInt::new(vec![0x2a, 0x00, 0x00]);
    assert_eq!(parsed.as_bytes(), &[0x2a]);

    let parsed = ParsedBigInt::new(vec![0xd6, 0xff, 0xff]);
    assert_eq!(parsed.as_bytes(), &[0xd6]);

    let parsed = ParsedBigInt::new(vec![0x00, 0x00]);
    assert_eq!(parsed.as_bytes(), &[] as &[u8]);
}
