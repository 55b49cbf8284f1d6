use crate::{display_path, field::Levels, ParquetSchema};

/// Trait for schema introspection
///
/// This trait provides methods for examining and querying schemas
/// without modifying them.
pub trait SchemaInspector {
    /// Get the total number of fields (including groups)
    fn field_count(&self) -> usize;

    /// Check if schema contains a field at `path` (e.g. "address,city")
    fn has_field(&self, path: &str) -> bool;

    /// Get all field paths in the schema, dot-separated, in pre-order
    fn all_field_paths(&self) -> Vec<String>;

    /// Get the column key of every leaf
    fn column_keys(&self) -> Vec<String>;

    /// Get the deepest repetition and definition levels of any leaf
    fn max_levels(&self) -> Levels;
}

impl SchemaInspector for ParquetSchema {
    fn field_count(&self) -> usize {
        self.index().len()
    }

    fn has_field(&self, path: &str) -> bool {
        self.find_field(path).is_ok()
    }

    fn all_field_paths(&self) -> Vec<String> {
        self.field_list()
            .into_iter()
            .map(|field| display_path(&field.path))
            .collect()
    }

    fn column_keys(&self) -> Vec<String> {
        self.leaves()
            .into_iter()
            .map(|field| field.column_key())
            .collect()
    }

    fn max_levels(&self) -> Levels {
        self.leaves()
            .into_iter()
            .fold(Levels::default(), |acc, field| Levels {
                r_level_max: acc.r_level_max.max(field.r_level_max),
                d_level_max: acc.d_level_max.max(field.d_level_max),
            })
    }
}
