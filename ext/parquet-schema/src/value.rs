use bytes::Bytes;
use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use parquet::basic::Type as PhysicalType;
use std::sync::Arc;

/// A nested record, field name to value, in declaration order
pub type Record = IndexMap<Arc<str>, Value>;

/// Values carried by records before shredding and after materialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Boolean(bool),
    Int32(i32),
    Int64(i64),
    Float(OrderedFloat<f32>),
    Double(OrderedFloat<f64>),
    String(Arc<str>),
    Bytes(Bytes),

    // Complex types
    List(Vec<Value>),
    Record(Record),

    // Null value
    Null,
}

impl Value {
    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the type name of the value
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Boolean(_) => "Boolean",
            Value::Int32(_) => "Int32",
            Value::Int64(_) => "Int64",
            Value::Float(_) => "Float",
            Value::Double(_) => "Double",
            Value::String(_) => "String",
            Value::Bytes(_) => "Bytes",
            Value::List(_) => "List",
            Value::Record(_) => "Record",
            Value::Null => "Null",
        }
    }

    /// Whether this scalar can be stored in a column of the given physical type
    pub fn fits(&self, primitive_type: PhysicalType, type_length: Option<i32>) -> bool {
        match (primitive_type, self) {
            (PhysicalType::BOOLEAN, Value::Boolean(_))
            | (PhysicalType::INT32, Value::Int32(_))
            | (PhysicalType::INT64, Value::Int64(_))
            | (PhysicalType::FLOAT, Value::Float(_))
            | (PhysicalType::DOUBLE, Value::Double(_))
            | (PhysicalType::BYTE_ARRAY, Value::String(_) | Value::Bytes(_)) => true,
            (PhysicalType::INT96, Value::Bytes(b)) => b.len() == 12,
            (PhysicalType::FIXED_LEN_BYTE_ARRAY, Value::String(_) | Value::Bytes(_)) => {
                match (type_length, self.byte_len()) {
                    (Some(expected), Some(len)) => usize::try_from(expected) == Ok(len),
                    _ => true,
                }
            }
            _ => false,
        }
    }

    fn byte_len(&self) -> Option<usize> {
        match self {
            Value::String(s) => Some(s.len()),
            Value::Bytes(b) => Some(b.len()),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int32(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int64(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(OrderedFloat(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(OrderedFloat(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(Arc::from(value))
    }
}

impl From<Bytes> for Value {
    fn from(value: Bytes) -> Self {
        Value::Bytes(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Value::Record(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

/// Build a [`Record`] from `(name, value)` pairs
pub fn record<K, V, I>(entries: I) -> Record
where
    K: AsRef<str>,
    V: Into<Value>,
    I: IntoIterator<Item = (K, V)>,
{
    entries
        .into_iter()
        .map(|(name, value)| (Arc::from(name.as_ref()), value.into()))
        .collect()
}
