//! Dynamic slot value and the declared value types it is checked against.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A value held in (or offered to) a child slot.
///
/// Covers the primitive datatypes a structural model carries:
/// - Scalars: Boolean, Integer, Decimal, String, Bytes
/// - Temporal: Date, DateTime
///
/// `Null` is the untyped absent value. It is accepted by every slot and
/// clears a scalar slot when written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Decimal(f64),
    String(String),
    Bytes(Vec<u8>),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
}

/// Declared value type of a slot.
///
/// `Any` is the top type: every non-null value is assignable to it. All
/// other types accept only values of exactly that type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueType {
    Any,
    Boolean,
    Integer,
    Decimal,
    String,
    Bytes,
    Date,
    DateTime,
}

// ============================================================================
// Type checking
// ============================================================================

impl Value {
    /// Runtime type of this value. `None` for `Null`.
    pub fn value_type(&self) -> Option<ValueType> {
        match self {
            Value::Null => None,
            Value::Boolean(_) => Some(ValueType::Boolean),
            Value::Integer(_) => Some(ValueType::Integer),
            Value::Decimal(_) => Some(ValueType::Decimal),
            Value::String(_) => Some(ValueType::String),
            Value::Bytes(_) => Some(ValueType::Bytes),
            Value::Date(_) => Some(ValueType::Date),
            Value::DateTime(_) => Some(ValueType::DateTime),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.value_type().map_or("null", ValueType::name)
    }

    pub fn is_null(&self) -> bool { matches!(self, Value::Null) }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl ValueType {
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Any => "any",
            ValueType::Boolean => "boolean",
            ValueType::Integer => "integer",
            ValueType::Decimal => "decimal",
            ValueType::String => "string",
            ValueType::Bytes => "bytes",
            ValueType::Date => "date",
            ValueType::DateTime => "dateTime",
        }
    }

    /// Whether `value` may be stored in a slot declared with this type.
    /// `Null` is always assignable.
    pub fn accepts(self, value: &Value) -> bool {
        match value.value_type() {
            None => true,
            Some(_) if self == ValueType::Any => true,
            Some(actual) => actual == self,
        }
    }
}

// ============================================================================
// Conversions (From impls)
// ============================================================================

impl From<bool> for Value { fn from(v: bool) -> Self { Value::Boolean(v) } }
impl From<i32> for Value { fn from(v: i32) -> Self { Value::Integer(v as i64) } }
impl From<i64> for Value { fn from(v: i64) -> Self { Value::Integer(v) } }
impl From<f64> for Value { fn from(v: f64) -> Self { Value::Decimal(v) } }
impl From<String> for Value { fn from(v: String) -> Self { Value::String(v) } }
impl From<&str> for Value { fn from(v: &str) -> Self { Value::String(v.to_owned()) } }
impl From<Vec<u8>> for Value { fn from(v: Vec<u8>) -> Self { Value::Bytes(v) } }
impl From<NaiveDate> for Value { fn from(v: NaiveDate) -> Self { Value::Date(v) } }
impl From<DateTime<Utc>> for Value { fn from(v: DateTime<Utc>) -> Self { Value::DateTime(v) } }
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self { v.map(Into::into).unwrap_or(Value::Null) }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Decimal(v) => write!(f, "{v}"),
            Value::String(s) => write!(f, "\"{}\"", s.replace('"', "\\\"")),
            Value::Bytes(b) => write!(f, "<bytes[{}]>", b.len()),
            Value::Date(d) => write!(f, "{d}"),
            Value::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
