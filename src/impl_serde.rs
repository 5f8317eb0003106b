//!
//! Support for serde implementations
//!
//! `ParsedBigInt` serializes as its little-endian two's complement byte
//! sequence, the same layout the bytecode serializer persists.

use crate::ParsedBigInt;

use crate::stdlib::fmt;
use crate::stdlib::Vec;

use serde::{de, ser};

impl ser::Serialize for ParsedBigInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_bytes(self.as_bytes())
    }
}

struct ParsedBigIntVisitor;

impl<'de> de::Visitor<'de> for ParsedBigIntVisitor {
    type Value = ParsedBigInt;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "little-endian two's complement bytes")
    }

    fn visit_bytes<E>(self, value: &[u8]) -> Result<ParsedBigInt, E>
    where
        E: de::Error,
    {
        Ok(ParsedBigInt::new(value.to_vec()))
    }

    // Formats without a native byte type (e.g. JSON) deliver a sequence.
    fn visit_seq<A>(self, mut seq: A) -> Result<ParsedBigInt, A::Error>
    where
        A: de::SeqAccess<'de>,
    {
        let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(byte) = seq.next_element::<u8>()? {
            bytes.push(byte);
        }
        Ok(ParsedBigInt::new(bytes))
    }
}

impl<'de> de::Deserialize<'de> for ParsedBigInt {
    fn deserialize<D>(deserializer: D) -> Result<ParsedBigInt, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_bytes(ParsedBigIntVisitor)
    }
}
