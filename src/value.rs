//! Dynamic values produced by the schema walker.
//!
//! A [`Record`] keeps its fields in layout order, so re-encoding a decoded
//! record reproduces the original bytes.

use serde_json::json;
use solana_program::pubkey::Pubkey;

use crate::error::{MetadataError, Result};
use crate::schema::RecordKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    U8(u8),
    U16(u16),
    U64(u64),
    String(String),
    Address(Pubkey),
    Option(Option<Box<Value>>),
    Array(Vec<Value>),
    List(Vec<Value>),
    Record(Record),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub kind: RecordKind,
    pub fields: Vec<(&'static str, Value)>,
}

impl Value {
    pub fn as_u8(&self) -> Result<u8> {
        match self {
            Value::U8(v) => Ok(*v),
            _ => Err(MetadataError::mismatch("u8")),
        }
    }

    pub fn as_u16(&self) -> Result<u16> {
        match self {
            Value::U16(v) => Ok(*v),
            _ => Err(MetadataError::mismatch("u16")),
        }
    }

    pub fn as_u64(&self) -> Result<u64> {
        match self {
            Value::U64(v) => Ok(*v),
            _ => Err(MetadataError::mismatch("u64")),
        }
    }

    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::String(v) => Ok(v),
            _ => Err(MetadataError::mismatch("string")),
        }
    }

    pub fn as_address(&self) -> Result<Pubkey> {
        match self {
            Value::Address(v) => Ok(*v),
            _ => Err(MetadataError::mismatch("address")),
        }
    }

    pub fn as_option(&self) -> Result<Option<&Value>> {
        match self {
            Value::Option(v) => Ok(v.as_deref()),
            _ => Err(MetadataError::mismatch("option")),
        }
    }

    pub fn as_list(&self) -> Result<&[Value]> {
        match self {
            Value::List(v) => Ok(v),
            _ => Err(MetadataError::mismatch("list")),
        }
    }

    pub fn as_record(&self) -> Result<&Record> {
        match self {
            Value::Record(v) => Ok(v),
            _ => Err(MetadataError::mismatch("record")),
        }
    }

    /// Reads a fixed array of u8 elements into a byte array of length `N`.
    pub fn as_byte_array<const N: usize>(&self) -> Result<[u8; N]> {
        let Value::Array(items) = self else {
            return Err(MetadataError::mismatch(format!("[u8; {}]", N)));
        };
        if items.len() != N {
            return Err(MetadataError::mismatch(format!("[u8; {}]", N)));
        }
        let mut out = [0u8; N];
        for (slot, item) in out.iter_mut().zip(items) {
            *slot = item.as_u8()?;
        }
        Ok(out)
    }

    pub fn byte_array(bytes: &[u8]) -> Value {
        Value::Array(bytes.iter().copied().map(Value::U8).collect())
    }

    pub fn some(value: Value) -> Value {
        Value::Option(Some(Box::new(value)))
    }

    pub fn none() -> Value {
        Value::Option(None)
    }

    /// JSON rendering with addresses in base58.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::U8(v) => json!(v),
            Value::U16(v) => json!(v),
            Value::U64(v) => json!(v),
            Value::String(v) => json!(v),
            Value::Address(v) => json!(v.to_string()),
            Value::Option(None) => serde_json::Value::Null,
            Value::Option(Some(v)) => v.to_json(),
            Value::Array(items) | Value::List(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Record(record) => record.to_json(),
        }
    }
}

impl Record {
    pub fn new(kind: RecordKind) -> Self {
        Self {
            kind,
            fields: Vec::new(),
        }
    }

    /// Builder-style field append.
    pub fn with(mut self, name: &'static str, value: Value) -> Self {
        self.fields.push((name, value));
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    /// Looks up a field, failing with the missing field's path.
    pub fn field(&self, name: &'static str) -> Result<&Value> {
        self.get(name).ok_or_else(|| {
            MetadataError::mismatch(format!("field {}", name)).in_field(self.kind, name)
        })
    }

    /// Applies `read` to a field, attaching the field path to any error.
    pub fn read_field<T>(
        &self,
        name: &'static str,
        read: impl FnOnce(&Value) -> Result<T>,
    ) -> Result<T> {
        read(self.field(name)?).map_err(|e| e.in_field(self.kind, name))
    }

    pub fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        for (name, value) in &self.fields {
            map.insert((*name).to_string(), value.to_json());
        }
        serde_json::Value::Object(map)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Record(record)
    }
}
