//! Record assembly from shredded columns
//!
//! Columns are replayed one at a time. For each level entry the repetition
//! level picks which record and which repeated element it belongs to, and the
//! definition level says how deep the ancestor chain is present.

use crate::{
    buffer::{ColumnData, ColumnarBuffer},
    field::{Field, FieldMap},
    index::list_fields,
    path::find_field_branch,
    shred::DremelShredder,
    ParquetError, Record, Result, Value,
};
use std::sync::Arc;

/// Rebuilds records from per-leaf column buffers
pub trait RecordMaterializer: std::fmt::Debug + Send + Sync {
    fn materialize(&self, fields: &FieldMap, buffer: &ColumnarBuffer) -> Result<Vec<Record>>;
}

impl RecordMaterializer for DremelShredder {
    fn materialize(&self, fields: &FieldMap, buffer: &ColumnarBuffer) -> Result<Vec<Record>> {
        let mut records = Vec::with_capacity(buffer.row_count);
        for (key, column) in &buffer.columns {
            let branch = find_field_branch(fields, key.as_str())?;
            materialize_column(key, &branch, column, buffer.row_count, &mut records)?;
        }

        if buffer.row_count > 0 {
            for leaf in list_fields(fields).into_iter().filter(|f| f.is_leaf()) {
                let key = leaf.column_key();
                if buffer.column(&key).is_none() {
                    return Err(ParquetError::invalid_column(key, "column missing from buffer"));
                }
            }
        }

        // a schema without leaves has no column to size the records
        records.resize_with(buffer.row_count, Record::new);
        Ok(records)
    }
}

fn materialize_column(
    key: &str,
    branch: &[&Field],
    column: &ColumnData,
    row_count: usize,
    records: &mut Vec<Record>,
) -> Result<()> {
    let Some(field) = branch.last() else {
        return Err(ParquetError::FieldNotFound {
            path: key.to_string(),
        });
    };
    if field.is_nested() {
        return Err(ParquetError::invalid_column(key, "column refers to a group"));
    }
    if column.r_levels.len() != column.count || column.d_levels.len() != column.count {
        return Err(ParquetError::invalid_column(
            key,
            format!(
                "{} entries but {} repetition and {} definition levels",
                column.count,
                column.r_levels.len(),
                column.d_levels.len()
            ),
        ));
    }

    let starts = column.r_levels.iter().filter(|&&r| r == 0).count();
    if starts != row_count {
        return Err(ParquetError::invalid_column(
            key,
            format!("column describes {starts} records but buffer holds {row_count}"),
        ));
    }

    // counters[0] counts records, counters[k] indexes the k-th repeated ancestor
    let mut counters = vec![0usize; field.r_level_max as usize + 1];
    let mut values = column.values.iter();

    for (&r_level, &d_level) in column.r_levels.iter().zip(&column.d_levels) {
        let r_in_range = (0..=field.r_level_max).contains(&r_level);
        if !r_in_range || !(0..=field.d_level_max).contains(&d_level) {
            return Err(ParquetError::invalid_column(
                key,
                format!("levels ({r_level}, {d_level}) out of range"),
            ));
        }

        let r_level = r_level as usize;
        counters[r_level] += 1;
        counters[r_level + 1..].iter_mut().for_each(|c| *c = 0);

        let value = if d_level == field.d_level_max {
            let value = values
                .next()
                .ok_or_else(|| ParquetError::invalid_column(key, "fewer values than levels"))?;
            Some(value.clone())
        } else {
            None
        };

        let Some(row) = counters[0].checked_sub(1) else {
            return Err(ParquetError::invalid_column(
                key,
                "column does not start at repetition level 0",
            ));
        };
        if records.len() <= row {
            records.resize_with(row + 1, Record::new);
        }

        let indices = &counters[1..];
        materialize_field(key, &mut records[row], branch, indices, d_level, value)?;
    }

    if values.next().is_some() {
        return Err(ParquetError::invalid_column(key, "more values than levels"));
    }
    Ok(())
}

fn materialize_field(
    key: &str,
    record: &mut Record,
    branch: &[&Field],
    indices: &[usize],
    d_level: i16,
    value: Option<Value>,
) -> Result<()> {
    let Some((node, rest)) = branch.split_first() else {
        return Ok(());
    };
    if d_level < node.d_level_max {
        return Ok(());
    }

    let entry = record.entry(Arc::from(node.name.as_str()));
    let (slot, indices) = if node.is_repeated() {
        let Some((&idx, indices)) = indices.split_first() else {
            return Err(ParquetError::invalid_column(key, "repetition index missing"));
        };
        let Value::List(items) = entry.or_insert_with(|| Value::List(Vec::new())) else {
            return Err(ParquetError::invalid_column(key, format!("{} is not a list", node.name)));
        };
        if items.len() <= idx {
            let filler = if rest.is_empty() {
                Value::Null
            } else {
                Value::Record(Record::new())
            };
            items.resize(idx + 1, filler);
        }
        (&mut items[idx], indices)
    } else if rest.is_empty() {
        (entry.or_insert(Value::Null), indices)
    } else {
        (entry.or_insert_with(|| Value::Record(Record::new())), indices)
    };

    if rest.is_empty() {
        if let Some(value) = value {
            *slot = value;
        }
        return Ok(());
    }

    match slot {
        Value::Record(child) => materialize_field(key, child, rest, indices, d_level, value),
        other => Err(ParquetError::invalid_column(
            key,
            format!("{} holds {} instead of a record", node.name, other.type_name()),
        )),
    }
}
