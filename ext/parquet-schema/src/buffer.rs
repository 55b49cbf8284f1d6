use crate::{field::FieldMap, index::list_fields, Value};
use indexmap::IndexMap;

/// Values and levels of a single leaf column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnData {
    /// Present values only; absent slots are described by the levels
    pub values: Vec<Value>,
    pub r_levels: Vec<i16>,
    pub d_levels: Vec<i16>,
    /// Number of level entries
    pub count: usize,
}

impl ColumnData {
    pub(crate) fn push_level(&mut self, r_level: i16, d_level: i16) {
        self.r_levels.push(r_level);
        self.d_levels.push(d_level);
        self.count += 1;
    }

    pub(crate) fn push_value(&mut self, r_level: i16, d_level: i16, value: Value) {
        self.push_level(r_level, d_level);
        self.values.push(value);
    }

    pub(crate) fn append(&mut self, mut other: ColumnData) {
        self.values.append(&mut other.values);
        self.r_levels.append(&mut other.r_levels);
        self.d_levels.append(&mut other.d_levels);
        self.count += other.count;
    }
}

/// Shredded records, one column per leaf keyed by its comma-joined path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnarBuffer {
    pub row_count: usize,
    pub columns: IndexMap<String, ColumnData>,
}

impl ColumnarBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty buffer with a column for every leaf of `fields`
    pub fn for_fields(fields: &FieldMap) -> Self {
        let columns = list_fields(fields)
            .into_iter()
            .filter(|field| field.is_leaf())
            .map(|field| (field.column_key(), ColumnData::default()))
            .collect();
        Self {
            row_count: 0,
            columns,
        }
    }

    pub fn column(&self, key: &str) -> Option<&ColumnData> {
        self.columns.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }
}
