//! Export of the resolved tree to parquet-rs and Arrow schemas

use crate::{
    field::{Field, FieldKind, FieldMap},
    Result,
};
use parquet::arrow::parquet_to_arrow_schema;
use parquet::basic::ConvertedType;
use parquet::schema::types::{SchemaDescriptor, Type, TypePtr};
use std::sync::Arc;

/// Name given to the message type wrapping the root-level fields
pub const ROOT_NAME: &str = "root";

/// Convert a resolved tree to a parquet-rs message type
pub fn to_parquet_type(fields: &FieldMap) -> Result<TypePtr> {
    let children = fields
        .values()
        .map(field_to_parquet_type)
        .collect::<Result<Vec<_>>>()?;

    let root = Type::group_type_builder(ROOT_NAME)
        .with_fields(children)
        .build()?;
    Ok(Arc::new(root))
}

fn field_to_parquet_type(field: &Field) -> Result<TypePtr> {
    let tp = match &field.kind {
        FieldKind::Group { fields } => {
            let children = fields
                .values()
                .map(field_to_parquet_type)
                .collect::<Result<Vec<_>>>()?;
            Type::group_type_builder(&field.name)
                .with_repetition(field.repetition.into())
                .with_fields(children)
                .build()?
        }
        FieldKind::Leaf(column) => {
            let mut builder = Type::primitive_type_builder(&field.name, column.primitive_type)
                .with_repetition(field.repetition.into())
                .with_converted_type(column.original_type.unwrap_or(ConvertedType::NONE));
            if let Some(length) = column.type_length {
                builder = builder.with_length(length);
            }
            builder.build()?
        }
    };
    Ok(Arc::new(tp))
}

/// Build the parquet-rs descriptor, with its own leaf level computation
pub fn schema_descriptor(fields: &FieldMap) -> Result<SchemaDescriptor> {
    Ok(SchemaDescriptor::new(to_parquet_type(fields)?))
}

/// Convert a resolved tree to an Arrow schema
pub fn to_arrow_schema(fields: &FieldMap) -> Result<arrow_schema::Schema> {
    let descriptor = schema_descriptor(fields)?;
    Ok(parquet_to_arrow_schema(&descriptor, None)?)
}
