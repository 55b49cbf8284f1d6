//! Record shredding
//!
//! Each leaf of a record contributes one `(r_level, d_level)` entry per
//! occurrence, and absent values contribute an entry at the definition level
//! of their deepest present ancestor. A value is stored only when its
//! definition level reaches the leaf's `d_level_max`.

use crate::{
    buffer::{ColumnData, ColumnarBuffer},
    display_path,
    field::{FieldKind, FieldMap, Repetition},
    ParquetError, Record, Result, Value,
};
use indexmap::IndexMap;

/// Flattens a record into per-leaf column buffers
pub trait RecordShredder: std::fmt::Debug + Send + Sync {
    /// Append one record to `buffer`. Nothing is appended if the record is invalid.
    fn shred(&self, fields: &FieldMap, record: &Record, buffer: &mut ColumnarBuffer)
        -> Result<()>;
}

/// Default shredder and materializer following the Dremel encoding
#[derive(Debug, Clone, Copy, Default)]
pub struct DremelShredder;

impl RecordShredder for DremelShredder {
    fn shred(
        &self,
        fields: &FieldMap,
        record: &Record,
        buffer: &mut ColumnarBuffer,
    ) -> Result<()> {
        let mut staged = IndexMap::new();
        shred_level(fields, Some(record), &mut staged, 0, 0)?;

        for (key, data) in staged {
            buffer.columns.entry(key).or_default().append(data);
        }
        buffer.row_count += 1;
        Ok(())
    }
}

fn shred_level(
    fields: &FieldMap,
    record: Option<&Record>,
    staged: &mut IndexMap<String, ColumnData>,
    r_level: i16,
    d_level: i16,
) -> Result<()> {
    for (name, field) in fields {
        let values: Vec<&Value> = match record.and_then(|r| r.get(name.as_str())) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::List(items)) => items.iter().collect(),
            Some(value) => vec![value],
        };

        if values.is_empty() {
            if record.is_some() && field.repetition == Repetition::Required {
                return Err(ParquetError::MissingRequiredField {
                    path: display_path(&field.path),
                });
            }
            match &field.kind {
                FieldKind::Group { fields: children } => {
                    shred_level(children, None, staged, r_level, d_level)?
                }
                FieldKind::Leaf(_) => staged
                    .entry(field.column_key())
                    .or_default()
                    .push_level(r_level, d_level),
            }
            continue;
        }

        if values.len() > 1 && !field.is_repeated() {
            return Err(ParquetError::TooManyValues {
                path: display_path(&field.path),
                count: values.len(),
            });
        }

        for (idx, value) in values.into_iter().enumerate() {
            let r_level = if idx == 0 { r_level } else { field.r_level_max };
            match (&field.kind, value) {
                (FieldKind::Group { fields: children }, Value::Record(child)) => {
                    shred_level(children, Some(child), staged, r_level, field.d_level_max)?
                }
                (FieldKind::Group { .. }, other) => {
                    return Err(ParquetError::type_mismatch(
                        &field.path,
                        "Record",
                        other.type_name(),
                    ));
                }
                (FieldKind::Leaf(column), value) => {
                    if !value.fits(column.primitive_type, column.type_length) {
                        return Err(ParquetError::type_mismatch(
                            &field.path,
                            column.type_name(),
                            value.type_name(),
                        ));
                    }
                    staged.entry(field.column_key()).or_default().push_value(
                        r_level,
                        field.d_level_max,
                        value.clone(),
                    );
                }
            }
        }
    }
    Ok(())
}
