//! Parsing StringIntegerLiteral text into digits, radix, sign, and bytes
//!
//! The grammar is the ECMAScript StringIntegerLiteral production: after
//! trimming whitespace and line terminators, either a `0b`/`0o`/`0x`
//! prefixed literal, or an optionally signed decimal literal with
//! leading-zero tolerance; the empty string is valid and means zero.
//!
//! Scanning works over borrowed code units and accumulates digit
//! characters without interpreting them; materialization into two's
//! complement bytes is a separate step (`ParsedBigInt`), the only place
//! in the crate that allocates a value.

use crate::canonical::drop_extra_sign_bits;
use crate::{
    num_digits_for_size_in_bits, ParseBigIntError, ParsedSign, BIGINT_DIGIT_SIZE_IN_BITS,
};

use crate::stdlib::str::FromStr;
use crate::stdlib::string::String;
use crate::stdlib::Vec;

use num_bigint::BigUint;

const BINARY_DIGITS: &[u8] = b"01";
const OCTAL_DIGITS: &[u8] = b"01234567";
const DECIMAL_DIGITS: &[u8] = b"0123456789";
const HEX_DIGITS: &[u8] = b"0123456789ABCDEFabcdef";

/// One unit of literal text. The grammar itself is pure ASCII, but
/// trimming must recognize the full set of ECMAScript whitespace code
/// points, so units are widened for classification. Implemented for the
/// narrow (`u8`) and wide (`u16`) string flavors an engine stores.
pub trait CodeUnit: Copy + Eq {
    fn as_u32(self) -> u32;
}

impl CodeUnit for u8 {
    fn as_u32(self) -> u32 {
        u32::from(self)
    }
}

impl CodeUnit for u16 {
    fn as_u32(self) -> u32 {
        u32::from(self)
    }
}

/// ES WhiteSpace plus LineTerminator, the set StringToBigInt trims.
fn is_white_space_char(unit: u32) -> bool {
    matches!(
        unit,
        0x0009
            | 0x000A
            | 0x000B
            | 0x000C
            | 0x000D
            | 0x0020
            | 0x00A0
            | 0x1680
            | 0x2000..=0x200A
            | 0x2028
            | 0x2029
            | 0x202F
            | 0x205F
            | 0x3000
            | 0xFEFF
    )
}

/// Opaque resume point for backtracking.
#[derive(Clone, Copy)]
struct ScannerState(usize);

/// Utility methods shared by bigint literal parsers: single-unit
/// lookahead, arbitrary-distance peeking, and save/restore of the scan
/// position for grammars that need backtracking.
struct LiteralScanner<'a, C> {
    units: &'a [C],
    pos: usize,
}

impl<'a, C: CodeUnit> LiteralScanner<'a, C> {
    fn new(units: &'a [C]) -> Self {
        LiteralScanner { units, pos: 0 }
    }

    /// The `which`-th unit from the current position, without advancing.
    fn peek(&self, which: usize) -> Option<u32> {
        self.units.get(self.pos + which).map(|unit| unit.as_u32())
    }

    /// Advances one unit; `None` at end of input.
    fn eat(&mut self) -> Option<u32> {
        let unit = self.peek(0);
        if unit.is_some() {
            self.pos += 1;
        }
        unit
    }

    fn state(&self) -> ScannerState {
        ScannerState(self.pos)
    }

    fn restore(&mut self, state: ScannerState) {
        debug_assert!(state.0 <= self.units.len(), "state points past input end");
        self.pos = state.0;
    }

    fn next_is_any_of(&self, set: &[u8]) -> Option<u8> {
        let next = self.peek(0)?;
        set.iter().copied().find(|&ch| u32::from(ch) == next)
    }

    fn eat_if_any_of(&mut self, set: &[u8]) -> Option<u8> {
        let matched = self.next_is_any_of(set);
        if matched.is_some() {
            self.pos += 1;
        }
        matched
    }

    /// Accumulates characters from `set` into `out` until the input
    /// leaves the set.
    fn build_digits_while_any_of(&mut self, set: &[u8], out: &mut String) {
        while let Some(ch) = self.eat_if_any_of(set) {
            out.push(char::from(ch));
        }
    }
}

/// Digits, radix, and sign recognized in a StringIntegerLiteral. The
/// digit characters are kept verbatim (hex case preserved); zero parses
/// as digits `"0"`, radix 10, no sign.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringIntegerLiteral {
    pub digits: String,
    pub radix: u8,
    pub sign: ParsedSign,
}

struct StringIntegerLiteralParser<'a, C> {
    scanner: LiteralScanner<'a, C>,
    digits: String,
    radix: u8,
    sign: ParsedSign,
}

impl<'a, C: CodeUnit> StringIntegerLiteralParser<'a, C> {
    fn new(src: &'a [C]) -> Self {
        let mut units = src;

        // Engine strings may arrive NUL terminated; drop one trailing NUL
        // before trimming.
        if let Some(last) = units.last() {
            if last.as_u32() == 0 {
                units = &units[..units.len() - 1];
            }
        }

        while let Some(first) = units.first() {
            if !is_white_space_char(first.as_u32()) {
                break;
            }
            units = &units[1..];
        }
        while let Some(last) = units.last() {
            if !is_white_space_char(last.as_u32()) {
                break;
            }
            units = &units[..units.len() - 1];
        }

        StringIntegerLiteralParser {
            digits: String::with_capacity(units.len()),
            scanner: LiteralScanner::new(units),
            radix: 10,
            sign: ParsedSign::None,
        }
    }

    /// Goal production for strings passed to the BigInt constructor.
    fn goal(mut self) -> Result<StringIntegerLiteral, ParseBigIntError> {
        let first = match self.scanner.peek(0) {
            // the empty string is a valid zero
            None => {
                self.digits.push('0');
                return Ok(self.finish());
            }
            Some(first) => first,
        };

        if first == u32::from(b'0') {
            // Save the parser state in case this is not a non-decimal
            // integer, but a decimal integer with leading zeros.
            let at_zero = self.scanner.state();
            self.scanner.eat();

            if self.non_decimal_integer_literal() {
                return self.check_end();
            }

            // Put the scanner back at the initial 0 and retry the input
            // as a decimal string.
            self.scanner.restore(at_zero);
        }

        if let Some(sign_ch) = self.scanner.eat_if_any_of(b"+-") {
            self.sign = if sign_ch == b'+' {
                ParsedSign::Plus
            } else {
                ParsedSign::Minus
            };
        }

        if self.decimal_digits() {
            return self.check_end();
        }

        Err(ParseBigIntError::InvalidLiteral)
    }

    fn non_decimal_integer_literal(&mut self) -> bool {
        self.binary_integer_literal()
            || self.octal_integer_literal()
            || self.hex_integer_literal()
    }

    fn binary_integer_literal(&mut self) -> bool {
        if self.scanner.eat_if_any_of(b"Bb").is_some() {
            self.radix = 2;
            self.scanner
                .build_digits_while_any_of(BINARY_DIGITS, &mut self.digits);
            return !self.digits.is_empty();
        }
        false
    }

    fn octal_integer_literal(&mut self) -> bool {
        if self.scanner.eat_if_any_of(b"Oo").is_some() {
            self.radix = 8;
            self.scanner
                .build_digits_while_any_of(OCTAL_DIGITS, &mut self.digits);
            return !self.digits.is_empty();
        }
        false
    }

    fn hex_integer_literal(&mut self) -> bool {
        if self.scanner.eat_if_any_of(b"Xx").is_some() {
            self.radix = 16;
            self.scanner
                .build_digits_while_any_of(HEX_DIGITS, &mut self.digits);
            return !self.digits.is_empty();
        }
        false
    }

    fn decimal_digits(&mut self) -> bool {
        // Trim leading zeros, but keep the last character if the input is
        // nothing but zeros.
        while self.scanner.peek(0) == Some(u32::from(b'0')) && self.scanner.peek(1).is_some() {
            self.scanner.eat();
        }

        if self.scanner.next_is_any_of(DECIMAL_DIGITS).is_some() {
            self.radix = 10;
            self.scanner
                .build_digits_while_any_of(DECIMAL_DIGITS, &mut self.digits);
            return !self.digits.is_empty();
        }
        false
    }

    /// Parsing succeeded only if no characters remain to be consumed; an
    /// embedded NUL counts as a terminator.
    fn check_end(self) -> Result<StringIntegerLiteral, ParseBigIntError> {
        match self.scanner.peek(0) {
            Some(ch) if ch != 0 => Err(ParseBigIntError::TrailingData),
            _ => Ok(self.finish()),
        }
    }

    fn finish(self) -> StringIntegerLiteral {
        StringIntegerLiteral {
            digits: self.digits,
            radix: self.radix,
            sign: self.sign,
        }
    }
}

/// Scans `src` as a StringIntegerLiteral, returning the accumulated
/// digit characters plus the detected radix and sign. Does not build a
/// numeric value.
pub fn parse_string_integer_literal<C: CodeUnit>(
    src: &[C],
) -> Result<StringIntegerLiteral, ParseBigIntError> {
    StringIntegerLiteralParser::new(src).goal()
}

/// Bit width to materialize `digits` in `radix`, rounded up to whole
/// digits. Power-of-two radixes consume exactly their bits per
/// character; decimal is bounded by its 4-bit worst case. The extra bit
/// keeps the magnitude clear of the sign bit.
fn num_bits_for_bigint_digits(digits: &str, radix: u8) -> usize {
    debug_assert!(
        matches!(radix, 2 | 4 | 8 | 10 | 16),
        "unexpected bigint radix"
    );

    let max_bits_per_char = if radix == 10 {
        4
    } else {
        radix.trailing_zeros() as usize
    };

    num_digits_for_size_in_bits(max_bits_per_char * digits.len() + 1) * BIGINT_DIGIT_SIZE_IN_BITS
}

/// Two's complement negation of a little-endian byte sequence.
fn negate_bytes_in_place(bytes: &mut [u8]) {
    let mut carry = true;
    for byte in bytes.iter_mut() {
        let (value, carry_out) = (!*byte).overflowing_add(carry as u8);
        *byte = value;
        carry = carry_out;
    }
}

/// An owned bigint in little-endian two's complement bytes, produced by
/// literal parsing. This is the one heap-owning value in the crate;
/// callers materialize it into a digit buffer with `init_with_bytes`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedBigInt {
    bytes: Vec<u8>,
}

impl ParsedBigInt {
    /// Takes ownership of a byte sequence, trimming redundant sign
    /// extension bytes so equal values compare equal.
    pub fn new(mut bytes: Vec<u8>) -> Self {
        let len = drop_extra_sign_bits(&bytes).len();
        bytes.truncate(len);
        ParsedBigInt { bytes }
    }

    /// Parses and materializes a StringIntegerLiteral.
    pub fn from_string_integer_literal<C: CodeUnit>(
        src: &[C],
    ) -> Result<ParsedBigInt, ParseBigIntError> {
        let literal = parse_string_integer_literal(src)?;

        // The scanner only accumulates characters valid in the detected
        // radix, so magnitude construction cannot fail on them.
        let magnitude = BigUint::parse_bytes(literal.digits.as_bytes(), u32::from(literal.radix))
            .ok_or(ParseBigIntError::InvalidLiteral)?;

        let num_bits = num_bits_for_bigint_digits(&literal.digits, literal.radix);
        let mut bytes = magnitude.to_bytes_le();
        bytes.resize(num_bits / 8, 0);

        if literal.sign == ParsedSign::Minus {
            negate_bytes_in_place(&mut bytes);
        }

        Ok(ParsedBigInt::new(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Digits a destination buffer needs to hold this value.
    pub fn num_digits(&self) -> usize {
        crate::num_digits_for_size_in_bytes(self.bytes.len())
    }
}

impl FromStr for ParsedBigInt {
    type Err = ParseBigIntError;

    /// Routes ASCII text through the narrow scanner and anything else
    /// through UTF-16 code units, so multi-byte whitespace trims
    /// correctly.
    fn from_str(s: &str) -> Result<ParsedBigInt, ParseBigIntError> {
        if s.is_ascii() {
            ParsedBigInt::from_string_integer_literal(s.as_bytes())
        } else {
            let units: Vec<u16> = s.encode_utf16().collect();
            ParsedBigInt::from_string_integer_literal(&units)
        }
    }
}
