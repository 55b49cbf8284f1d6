//! Schema resolution for Dremel-style nested columnar storage
//!
//! `parquet-schema` turns a declared, nested record schema into the field
//! metadata a Parquet column writer or reader needs: for every node its
//! path, repetition, and maximum repetition/definition levels.
//!
//! # Key Components
//!
//! - **Declarations**: [`FieldSpec`] / [`SchemaDefinition`], built in code or
//!   parsed from JSON
//!
//! - **Resolution**: [`FieldTreeBuilder`] resolves a declaration against an
//!   injected [`Registry`] of types, encodings and compression methods
//!   - Level arithmetic per node
//!   - All-or-nothing: one invalid field fails the whole schema
//!
//! - **Schema**: [`ParquetSchema`] owns the declaration and the resolved tree
//!   - Pre-order field listing
//!   - Lookup of a field, or its whole branch, by path
//!   - Uniform compression propagation
//!   - Export to parquet-rs and Arrow schemas
//!
//! - **Shredding**: [`DremelShredder`] flattens records into a
//!   [`ColumnarBuffer`] and materializes them back
//!
//! # Example Usage
//!
//! ```
//! use parquet_schema::{FieldSpec, ParquetSchema, definition};
//!
//! let schema = ParquetSchema::new(definition([
//!     ("id", FieldSpec::leaf("INT64")),
//!     ("tags", FieldSpec::leaf("UTF8").repeated()),
//! ]))
//! .unwrap();
//!
//! let tags = schema.find_field("tags").unwrap();
//! assert_eq!((tags.r_level_max, tags.d_level_max), (1, 1));
//! ```

pub mod buffer;
pub mod builder;
pub mod compression;
pub mod conversion;
pub mod declaration;
pub mod error;
pub mod field;
pub mod index;
pub mod materialize;
pub mod path;
pub mod registry;
pub mod schema;
pub mod shred;
pub mod traits;
pub mod value;

#[cfg(test)]
pub mod test_utils;

pub use buffer::{ColumnData, ColumnarBuffer};
pub use builder::FieldTreeBuilder;
pub use declaration::{definition, parse_definition, FieldSpec, SchemaDefinition};
pub use error::{display_path, ParquetError, Result};
pub use field::{Field, FieldKind, FieldMap, LeafColumn, Levels, Repetition};
pub use index::{list_fields, FieldIndex};
pub use materialize::RecordMaterializer;
pub use path::FieldPath;
pub use registry::{
    CodecRegistry, CompressionRegistry, Registry, TypeDescriptor, TypeRegistry,
    DEFAULT_COMPRESSION, DEFAULT_ENCODING,
};
pub use schema::{ParquetSchema, SchemaBuilder};
pub use shred::{DremelShredder, RecordShredder};
pub use traits::SchemaInspector;
pub use value::{record, Record, Value};
