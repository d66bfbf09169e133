//! Literal values held by `Constant` expressions

use super::super::repr::{repr_bytes, repr_float, repr_str};
use num_bigint::BigInt;
use serde::de::{self, SeqAccess, Visitor};
use serde::{ser, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The value of a `Constant` node.
///
/// In documents a constant is a plain JSON scalar (`null`, `true`, `1`, `1.5`,
/// `"text"`); bytes are an array of integers. Integers are arbitrary precision
/// like Python's `int`, so every integer a document can spell as a number
/// (the whole `i64` and `u64` ranges) keeps its exact digits.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstantValue {
    None,
    Bool(bool),
    Int(BigInt),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
}

impl fmt::Display for ConstantValue {
    /// Python `repr` of the value
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::None => write!(f, "None"),
            ConstantValue::Bool(true) => write!(f, "True"),
            ConstantValue::Bool(false) => write!(f, "False"),
            ConstantValue::Int(i) => write!(f, "{i}"),
            ConstantValue::Float(x) => write!(f, "{}", repr_float(*x)),
            ConstantValue::Str(s) => write!(f, "{}", repr_str(s)),
            ConstantValue::Bytes(b) => write!(f, "{}", repr_bytes(b)),
        }
    }
}

impl Serialize for ConstantValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ConstantValue::None => serializer.serialize_unit(),
            ConstantValue::Bool(b) => serializer.serialize_bool(*b),
            ConstantValue::Int(i) => {
                if let Ok(small) = i64::try_from(i) {
                    serializer.serialize_i64(small)
                } else if let Ok(unsigned) = u64::try_from(i) {
                    serializer.serialize_u64(unsigned)
                } else if let Ok(wide) = i128::try_from(i) {
                    serializer.serialize_i128(wide)
                } else if let Ok(wide) = u128::try_from(i) {
                    serializer.serialize_u128(wide)
                } else {
                    Err(ser::Error::custom(format!(
                        "integer constant {i} does not fit in 128 bits"
                    )))
                }
            }
            ConstantValue::Float(x) => serializer.serialize_f64(*x),
            ConstantValue::Str(s) => serializer.serialize_str(s),
            ConstantValue::Bytes(b) => b.serialize(serializer),
        }
    }
}

struct ConstantVisitor;

impl<'de> Visitor<'de> for ConstantVisitor {
    type Value = ConstantValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("null, a boolean, a number, a string or an array of bytes")
    }

    fn visit_unit<E: de::Error>(self) -> Result<ConstantValue, E> {
        Ok(ConstantValue::None)
    }

    fn visit_none<E: de::Error>(self) -> Result<ConstantValue, E> {
        Ok(ConstantValue::None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<ConstantValue, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<ConstantValue, E> {
        Ok(ConstantValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<ConstantValue, E> {
        Ok(ConstantValue::Int(v.into()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<ConstantValue, E> {
        Ok(ConstantValue::Int(v.into()))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<ConstantValue, E> {
        Ok(ConstantValue::Int(v.into()))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<ConstantValue, E> {
        Ok(ConstantValue::Int(v.into()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<ConstantValue, E> {
        Ok(ConstantValue::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ConstantValue, E> {
        Ok(ConstantValue::Str(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<ConstantValue, E> {
        Ok(ConstantValue::Str(v))
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<ConstantValue, E> {
        Ok(ConstantValue::Bytes(v.to_vec()))
    }

    fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<ConstantValue, E> {
        Ok(ConstantValue::Bytes(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<ConstantValue, A::Error> {
        let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(byte) = seq.next_element::<u8>()? {
            bytes.push(byte);
        }
        Ok(ConstantValue::Bytes(bytes))
    }
}

impl<'de> Deserialize<'de> for ConstantValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ConstantVisitor)
    }
}

impl From<bool> for ConstantValue {
    fn from(value: bool) -> Self {
        ConstantValue::Bool(value)
    }
}

impl From<i32> for ConstantValue {
    fn from(value: i32) -> Self {
        ConstantValue::Int(value.into())
    }
}

impl From<i64> for ConstantValue {
    fn from(value: i64) -> Self {
        ConstantValue::Int(value.into())
    }
}

impl From<u64> for ConstantValue {
    fn from(value: u64) -> Self {
        ConstantValue::Int(value.into())
    }
}

impl From<BigInt> for ConstantValue {
    fn from(value: BigInt) -> Self {
        ConstantValue::Int(value)
    }
}

impl From<f64> for ConstantValue {
    fn from(value: f64) -> Self {
        ConstantValue::Float(value)
    }
}

impl From<&str> for ConstantValue {
    fn from(value: &str) -> Self {
        ConstantValue::Str(value.to_string())
    }
}

impl From<String> for ConstantValue {
    fn from(value: String) -> Self {
        ConstantValue::Str(value)
    }
}

impl From<Vec<u8>> for ConstantValue {
    fn from(value: Vec<u8>) -> Self {
        ConstantValue::Bytes(value)
    }
}
