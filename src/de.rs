//! Mapping ordered field sequences back onto Rust records.
//!
//! [`RecordDeserializer`] hands the fields of one record to a serde visitor
//! positionally: the first field fills the first struct member, and so on.
//! Struct and tuple targets must match the record's field count exactly.
//!
//! Each field is parsed on demand with [`FieldDeserializer`]:
//!
//! - numbers and `bool` use their `FromStr` implementations
//! - an empty field is `None` for `Option<T>` targets
//! - unit enum variants are matched by name
//!
//! ```rust
//! use serde::Deserialize;
//! use sample_csv::from_fields;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Hit { path: String, status: u16, cached: bool, note: Option<String> }
//!
//! let fields = vec!["/".to_string(), "200".into(), "false".into(), "".into()];
//! let hit: Hit = from_fields(&fields).unwrap();
//! assert_eq!(hit, Hit { path: "/".into(), status: 200, cached: false, note: None });
//! ```

use crate::{Error, Result};
use serde::de::{self, IntoDeserializer};
use serde::forward_to_deserialize_any;
use std::str::FromStr;

/// Deserializes an instance of `T` from the fields of one record.
///
/// # Errors
///
/// - [`Error::FieldCount`] if a struct or tuple target has a different arity
/// - [`Error::InvalidField`] if a field does not parse as the target type
pub fn from_fields<'de, T>(fields: &'de [String]) -> Result<T>
where
    T: de::Deserialize<'de>,
{
    T::deserialize(RecordDeserializer::new(fields))
}

/// Deserializer over all fields of one record.
pub struct RecordDeserializer<'de> {
    fields: &'de [String],
}

impl<'de> RecordDeserializer<'de> {
    pub fn new(fields: &'de [String]) -> Self {
        RecordDeserializer { fields }
    }

    fn visit_fields<V>(self, expected: Option<usize>, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        if let Some(expected) = expected {
            if expected != self.fields.len() {
                return Err(Error::field_count(expected, self.fields.len()));
            }
        }
        visitor.visit_seq(FieldSeq {
            iter: self.fields.iter().enumerate(),
        })
    }

    /// Scalars at the top level read a single-field record.
    fn single(self) -> Result<FieldDeserializer<'de>> {
        match self.fields {
            [field] => Ok(FieldDeserializer::new(0, field)),
            _ => Err(Error::field_count(1, self.fields.len())),
        }
    }
}

/// Forwards scalar requests on a whole record to its only field.
macro_rules! delegate_single {
    ($($method:ident)*) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: de::Visitor<'de>,
            {
                de::Deserializer::$method(self.single()?, visitor)
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for RecordDeserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.visit_fields(None, visitor)
    }

    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.visit_fields(None, visitor)
    }

    fn deserialize_tuple<V>(self, len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.visit_fields(Some(len), visitor)
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        len: usize,
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.visit_fields(Some(len), visitor)
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.visit_fields(Some(fields.len()), visitor)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    delegate_single! {
        deserialize_bool deserialize_i8 deserialize_i16 deserialize_i32 deserialize_i64
        deserialize_i128 deserialize_u8 deserialize_u16 deserialize_u32 deserialize_u64
        deserialize_u128 deserialize_f32 deserialize_f64 deserialize_char deserialize_str
        deserialize_string deserialize_option deserialize_unit
    }

    fn deserialize_unit_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        de::Deserializer::deserialize_unit(self.single()?, visitor)
    }

    fn deserialize_enum<V>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        de::Deserializer::deserialize_enum(self.single()?, name, variants, visitor)
    }

    forward_to_deserialize_any! {
        bytes byte_buf map identifier ignored_any
    }
}

struct FieldSeq<'de> {
    iter: std::iter::Enumerate<std::slice::Iter<'de, String>>,
}

impl<'de> de::SeqAccess<'de> for FieldSeq<'de> {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((index, field)) => seed.deserialize(FieldDeserializer::new(index, field)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

/// Deserializer for the text of a single field.
pub struct FieldDeserializer<'de> {
    index: usize,
    value: &'de str,
}

impl<'de> FieldDeserializer<'de> {
    pub fn new(index: usize, value: &'de str) -> Self {
        FieldDeserializer { index, value }
    }

    fn parse<T: FromStr>(&self, expected: &str) -> Result<T> {
        self.value
            .parse()
            .map_err(|_| Error::invalid_field(self.index, expected, self.value))
    }
}

macro_rules! deserialize_parsed {
    ($($method:ident => $ty:ty, $visit:ident;)*) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: de::Visitor<'de>,
            {
                visitor.$visit(self.parse::<$ty>(stringify!($ty))?)
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for FieldDeserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_borrowed_str(self.value)
    }

    deserialize_parsed! {
        deserialize_bool => bool, visit_bool;
        deserialize_i8 => i8, visit_i8;
        deserialize_i16 => i16, visit_i16;
        deserialize_i32 => i32, visit_i32;
        deserialize_i64 => i64, visit_i64;
        deserialize_i128 => i128, visit_i128;
        deserialize_u8 => u8, visit_u8;
        deserialize_u16 => u16, visit_u16;
        deserialize_u32 => u32, visit_u32;
        deserialize_u64 => u64, visit_u64;
        deserialize_u128 => u128, visit_u128;
        deserialize_f32 => f32, visit_f32;
        deserialize_f64 => f64, visit_f64;
        deserialize_char => char, visit_char;
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        if self.value.is_empty() {
            visitor.visit_none()
        } else {
            visitor.visit_some(self)
        }
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        if self.value.is_empty() {
            visitor.visit_unit()
        } else {
            Err(Error::invalid_field(self.index, "empty field", self.value))
        }
    }

    fn deserialize_unit_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_enum(self.value.into_deserializer())
    }

    fn deserialize_seq<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        Err(Error::unsupported_type("nested sequences"))
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_unit()
    }

    forward_to_deserialize_any! {
        str string bytes byte_buf tuple tuple_struct map struct identifier
    }
}
