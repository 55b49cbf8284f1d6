//! User-facing schema declarations
//!
//! A [`SchemaDefinition`] is what callers hand to
//! [`ParquetSchema`](crate::ParquetSchema): an ordered mapping from field
//! name to [`FieldSpec`]. Declarations can be assembled in code or parsed
//! from JSON:
//!
//! ```json
//! {
//!   "name": { "type": "UTF8" },
//!   "tags": { "type": "UTF8", "repeated": true },
//!   "address": {
//!     "optional": true,
//!     "fields": { "city": { "type": "UTF8", "compression": "SNAPPY" } }
//!   }
//! }
//! ```

use crate::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered mapping from field name to its declaration
pub type SchemaDefinition = IndexMap<String, FieldSpec>;

/// Declaration of a single field, leaf or nested
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub repeated: bool,
    /// Scalar type name, resolved against the type registry
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    /// Nested children, in declaration order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<SchemaDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compression: Option<String>,
    /// Overrides the type's default physical length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_length: Option<i32>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl FieldSpec {
    /// A required leaf of the given type
    pub fn leaf(type_name: impl Into<String>) -> Self {
        Self {
            type_name: Some(type_name.into()),
            ..Self::default()
        }
    }

    /// A required group with the given children
    pub fn group<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, FieldSpec)>,
    {
        Self {
            fields: Some(
                fields
                    .into_iter()
                    .map(|(name, spec)| (name.into(), spec))
                    .collect(),
            ),
            ..Self::default()
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn repeated(mut self) -> Self {
        self.repeated = true;
        self
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    pub fn with_compression(mut self, compression: impl Into<String>) -> Self {
        self.compression = Some(compression.into());
        self
    }

    pub fn with_type_length(mut self, type_length: i32) -> Self {
        self.type_length = Some(type_length);
        self
    }

    pub fn is_group(&self) -> bool {
        self.fields.is_some()
    }
}

/// Build a definition from `(name, spec)` pairs, keeping their order
pub fn definition<K, I>(fields: I) -> SchemaDefinition
where
    K: Into<String>,
    I: IntoIterator<Item = (K, FieldSpec)>,
{
    fields
        .into_iter()
        .map(|(name, spec)| (name.into(), spec))
        .collect()
}

/// Parse a definition from its JSON form
pub fn parse_definition(json: &str) -> Result<SchemaDefinition> {
    Ok(serde_json::from_str(json)?)
}
