//! Flattening Rust records into ordered field sequences.
//!
//! This module provides [`RecordSerializer`], a serde serializer that turns a
//! record type into the `Vec<String>` the line formatter consumes. Each
//! struct field, tuple element or sequence element becomes one field; map
//! entries contribute their values in iteration order.
//!
//! ## Field text
//!
//! | Rust value | Field |
//! |------------|-------|
//! | integers, floats, `char` | `Display` text |
//! | `bool` | `true` / `false` |
//! | `&str`, `String` | unchanged |
//! | `None`, `()` | empty field |
//! | unit enum variant | variant name |
//!
//! Nested compound values (a `Vec` inside a struct, a struct inside a tuple)
//! have no flat representation and fail with [`Error::UnsupportedType`].
//!
//! ```rust
//! use serde::Serialize;
//! use sample_csv::to_fields;
//!
//! #[derive(Serialize)]
//! struct Hit { path: String, status: u16, cached: bool, note: Option<String> }
//!
//! let hit = Hit { path: "/".into(), status: 200, cached: false, note: None };
//! assert_eq!(to_fields(&hit).unwrap(), vec!["/", "200", "false", ""]);
//! ```

use crate::{Error, Result};
use serde::{ser, Serialize};

/// Serializes any `T: Serialize` to its ordered field values.
///
/// A scalar at the top level becomes a single-field record.
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] for nested compound values.
pub fn to_fields<T>(value: &T) -> Result<Vec<String>>
where
    T: ?Sized + Serialize,
{
    value.serialize(RecordSerializer)
}

/// Top-level serializer: produces the whole field vector.
pub struct RecordSerializer;

/// Serializer for one field: produces its text.
pub struct FieldSerializer;

/// Collects the elements of a top-level compound value.
pub struct SerializeFields {
    fields: Vec<String>,
}

impl SerializeFields {
    fn with_capacity(len: usize) -> Self {
        SerializeFields {
            fields: Vec::with_capacity(len),
        }
    }

    fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.fields.push(value.serialize(FieldSerializer)?);
        Ok(())
    }
}

fn single(field: String) -> Result<Vec<String>> {
    Ok(vec![field])
}

impl ser::Serializer for RecordSerializer {
    type Ok = Vec<String>;
    type Error = Error;

    type SerializeSeq = SerializeFields;
    type SerializeTuple = SerializeFields;
    type SerializeTupleStruct = SerializeFields;
    type SerializeTupleVariant = ser::Impossible<Vec<String>, Error>;
    type SerializeMap = SerializeFields;
    type SerializeStruct = SerializeFields;
    type SerializeStructVariant = ser::Impossible<Vec<String>, Error>;

    fn serialize_bool(self, v: bool) -> Result<Self::Ok> {
        single(ser::Serializer::serialize_bool(FieldSerializer, v)?)
    }

    fn serialize_i8(self, v: i8) -> Result<Self::Ok> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Self::Ok> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Self::Ok> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Self::Ok> {
        single(v.to_string())
    }

    fn serialize_u8(self, v: u8) -> Result<Self::Ok> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Self::Ok> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Self::Ok> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Self::Ok> {
        single(v.to_string())
    }

    fn serialize_f32(self, v: f32) -> Result<Self::Ok> {
        single(v.to_string())
    }

    fn serialize_f64(self, v: f64) -> Result<Self::Ok> {
        single(v.to_string())
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok> {
        single(v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok> {
        single(v.to_string())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Self::Ok> {
        Err(Error::unsupported_type("byte arrays"))
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        single(String::new())
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        single(String::new())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        self.serialize_unit()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok> {
        single(variant.to_string())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported_type("newtype variants"))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeFields> {
        Ok(SerializeFields::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeFields> {
        Ok(SerializeFields::with_capacity(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeFields> {
        Ok(SerializeFields::with_capacity(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported_type("tuple variants"))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeFields> {
        Ok(SerializeFields::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeFields> {
        Ok(SerializeFields::with_capacity(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported_type("struct variants"))
    }
}

impl ser::SerializeSeq for SerializeFields {
    type Ok = Vec<String>;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Vec<String>> {
        Ok(self.fields)
    }
}

impl ser::SerializeTuple for SerializeFields {
    type Ok = Vec<String>;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Vec<String>> {
        Ok(self.fields)
    }
}

impl ser::SerializeTupleStruct for SerializeFields {
    type Ok = Vec<String>;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Vec<String>> {
        Ok(self.fields)
    }
}

impl ser::SerializeMap for SerializeFields {
    type Ok = Vec<String>;
    type Error = Error;

    // keys are positional metadata only
    fn serialize_key<T>(&mut self, _key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Vec<String>> {
        Ok(self.fields)
    }
}

impl ser::SerializeStruct for SerializeFields {
    type Ok = Vec<String>;
    type Error = Error;

    fn serialize_field<T>(&mut self, _key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Vec<String>> {
        Ok(self.fields)
    }
}

impl ser::Serializer for FieldSerializer {
    type Ok = String;
    type Error = Error;

    type SerializeSeq = ser::Impossible<String, Error>;
    type SerializeTuple = ser::Impossible<String, Error>;
    type SerializeTupleStruct = ser::Impossible<String, Error>;
    type SerializeTupleVariant = ser::Impossible<String, Error>;
    type SerializeMap = ser::Impossible<String, Error>;
    type SerializeStruct = ser::Impossible<String, Error>;
    type SerializeStructVariant = ser::Impossible<String, Error>;

    fn serialize_bool(self, v: bool) -> Result<String> {
        Ok(if v { "true" } else { "false" }.to_string())
    }

    fn serialize_i8(self, v: i8) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i16(self, v: i16) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i32(self, v: i32) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i64(self, v: i64) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u8(self, v: u8) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u16(self, v: u16) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u32(self, v: u32) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u64(self, v: u64) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_f32(self, v: f32) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_f64(self, v: f64) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_char(self, v: char) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String> {
        Err(Error::unsupported_type("byte arrays"))
    }

    fn serialize_none(self) -> Result<String> {
        Ok(String::new())
    }

    fn serialize_some<T>(self, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<String> {
        Ok(String::new())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String> {
        Ok(String::new())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String> {
        Ok(variant.to_string())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported_type("newtype variants"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(Error::unsupported_type("nested sequences"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(Error::unsupported_type("nested tuples"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(Error::unsupported_type("nested tuple structs"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported_type("tuple variants"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error::unsupported_type("nested maps"))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(Error::unsupported_type("nested structs"))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported_type("struct variants"))
    }
}
