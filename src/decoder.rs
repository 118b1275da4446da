//! Record Decoder Module
//!
//! One generic routine walks a [`RecordSchema`] over a buffer and produces a
//! [`Record`]; its mirror re-encodes a record through the same layout. Typed
//! records convert to and from the dynamic form through [`TypedRecord`].
//!
//! Decoding is strict about shape (truncation, bad UTF-8, bad option flags all
//! fail) but ignores trailing bytes after the last field, since accounts are
//! allocated at their maximum size.

use tracing::debug;

use crate::codec::{Reader, Writer};
use crate::error::{MetadataError, Result};
use crate::schema::{FieldType, RecordKind, SchemaRegistry};
use crate::value::{Record, Value};

/// A statically typed view of a registered record kind.
pub trait TypedRecord: Sized {
    const KIND: RecordKind;

    fn from_record(record: &Record) -> Result<Self>;

    fn to_record(&self) -> Record;
}

/// Schema walker bound to a registry.
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'r> {
    registry: &'r SchemaRegistry,
}

impl Decoder<'static> {
    /// Decoder over the built-in layouts.
    pub fn standard() -> Self {
        Self::new(SchemaRegistry::standard())
    }
}

impl<'r> Decoder<'r> {
    pub fn new(registry: &'r SchemaRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r SchemaRegistry {
        self.registry
    }

    /// Decodes `buf` as `kind`. Bytes after the last field are ignored.
    pub fn decode(&self, kind: RecordKind, buf: &[u8]) -> Result<Record> {
        let mut reader = Reader::new(buf);
        let record = self.decode_from(kind, &mut reader)?;
        debug!(
            "Decoded {} ({} of {} bytes)",
            kind,
            reader.position(),
            buf.len()
        );
        Ok(record)
    }

    /// Decodes one record at the reader's cursor.
    pub fn decode_from(&self, kind: RecordKind, reader: &mut Reader<'_>) -> Result<Record> {
        let schema = self.registry.schema_for(kind)?;
        let mut record = Record {
            kind,
            fields: Vec::with_capacity(schema.fields.len()),
        };
        for (name, ty) in schema.fields {
            let value = self
                .read_value(ty, reader)
                .map_err(|e| e.in_field(kind, *name))?;
            record.fields.push((*name, value));
        }
        Ok(record)
    }

    fn read_value(&self, ty: &FieldType, reader: &mut Reader<'_>) -> Result<Value> {
        Ok(match ty {
            FieldType::U8 => Value::U8(reader.read_u8()?),
            FieldType::U16 => Value::U16(reader.read_u16()?),
            FieldType::U64 => Value::U64(reader.read_u64()?),
            FieldType::String => Value::String(reader.read_string()?),
            FieldType::Address => Value::Address(reader.read_address()?),
            FieldType::Option(inner) => {
                Value::Option(reader.read_option(|r| self.read_value(inner, r).map(Box::new))?)
            }
            FieldType::Array(FieldType::U8, len) => {
                Value::byte_array(&reader.read_fixed_bytes(*len)?)
            }
            FieldType::Array(inner, len) => {
                let mut items = Vec::with_capacity(*len);
                for _ in 0..*len {
                    items.push(self.read_value(inner, reader)?);
                }
                Value::Array(items)
            }
            FieldType::List(inner) => Value::List(reader.read_list(|r| self.read_value(inner, r))?),
            FieldType::Record(kind) => Value::Record(self.decode_from(*kind, reader)?),
        })
    }

    pub fn encode(&self, record: &Record) -> Result<Vec<u8>> {
        let mut writer = Writer::new();
        self.encode_into(record, &mut writer)?;
        Ok(writer.into_bytes())
    }

    /// Writes `record` in layout order. Fields are matched by name, so the
    /// record's own field order does not matter, but a field the layout does
    /// not name is an error.
    pub fn encode_into(&self, record: &Record, writer: &mut Writer) -> Result<()> {
        let schema = self.registry.schema_for(record.kind)?;
        if let Some((extra, _)) = record
            .fields
            .iter()
            .find(|(name, _)| schema.field(name).is_none())
        {
            return Err(MetadataError::mismatch("no such field in layout")
                .in_field(record.kind, *extra));
        }
        for (name, ty) in schema.fields {
            let value = record.field(*name)?;
            self.write_value(ty, value, writer)
                .map_err(|e| e.in_field(record.kind, *name))?;
        }
        Ok(())
    }

    fn write_value(&self, ty: &FieldType, value: &Value, writer: &mut Writer) -> Result<()> {
        match (ty, value) {
            (FieldType::U8, Value::U8(v)) => writer.write_u8(*v),
            (FieldType::U16, Value::U16(v)) => writer.write_u16(*v),
            (FieldType::U64, Value::U64(v)) => writer.write_u64(*v),
            (FieldType::String, Value::String(v)) => writer.write_string(v)?,
            (FieldType::Address, Value::Address(v)) => writer.write_address(v),
            (FieldType::Option(inner), Value::Option(v)) => {
                writer.write_option(v.as_deref(), |w, v| self.write_value(inner, v, w))?
            }
            (FieldType::Array(inner, len), Value::Array(items)) => {
                if items.len() != *len {
                    return Err(MetadataError::mismatch(format!(
                        "array of {} elements, got {}",
                        len,
                        items.len()
                    )));
                }
                for item in items {
                    self.write_value(inner, item, writer)?;
                }
            }
            (FieldType::List(inner), Value::List(items)) => {
                writer.write_list(items, |w, item| self.write_value(inner, item, w))?
            }
            (FieldType::Record(kind), Value::Record(nested)) => {
                if nested.kind != *kind {
                    return Err(MetadataError::mismatch(format!(
                        "{} record, got {}",
                        kind, nested.kind
                    )));
                }
                self.encode_into(nested, writer)?;
            }
            (ty, _) => return Err(MetadataError::mismatch(format!("{:?}", ty))),
        }
        Ok(())
    }

    pub fn decode_typed<T: TypedRecord>(&self, buf: &[u8]) -> Result<T> {
        T::from_record(&self.decode(T::KIND, buf)?)
    }

    pub fn encode_typed<T: TypedRecord>(&self, value: &T) -> Result<Vec<u8>> {
        self.encode(&value.to_record())
    }
}

/// Decodes `buf` as `kind` with the built-in layouts.
pub fn decode(kind: RecordKind, buf: &[u8]) -> Result<Record> {
    Decoder::standard().decode(kind, buf)
}

/// Encodes `record` with the built-in layouts.
pub fn encode(record: &Record) -> Result<Vec<u8>> {
    Decoder::standard().encode(record)
}

/// Decodes a typed record with the built-in layouts.
pub fn decode_record<T: TypedRecord>(buf: &[u8]) -> Result<T> {
    Decoder::standard().decode_typed(buf)
}

/// Encodes a typed record with the built-in layouts.
pub fn encode_record<T: TypedRecord>(value: &T) -> Result<Vec<u8>> {
    Decoder::standard().encode_typed(value)
}
