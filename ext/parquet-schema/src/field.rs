use indexmap::IndexMap;
use parquet::basic::{Compression, ConvertedType, Encoding, Type as PhysicalType};
use std::fmt;

/// Ordered mapping from field name to its resolved definition
pub type FieldMap = IndexMap<String, Field>;

/// Represents how values are repeated in Parquet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Repetition {
    /// Field must have exactly one value
    Required,
    /// Field can have 0 or 1 value
    Optional,
    /// Field can have 0 or more values
    Repeated,
}

impl Repetition {
    /// Derive the repetition from a declaration's flags; `repeated` wins
    pub fn from_flags(optional: bool, repeated: bool) -> Self {
        match (optional, repeated) {
            (_, true) => Repetition::Repeated,
            (true, false) => Repetition::Optional,
            (false, false) => Repetition::Required,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Repetition::Required => "REQUIRED",
            Repetition::Optional => "OPTIONAL",
            Repetition::Repeated => "REPEATED",
        }
    }
}

impl fmt::Display for Repetition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Repetition> for parquet::basic::Repetition {
    fn from(repetition: Repetition) -> Self {
        match repetition {
            Repetition::Required => parquet::basic::Repetition::REQUIRED,
            Repetition::Optional => parquet::basic::Repetition::OPTIONAL,
            Repetition::Repeated => parquet::basic::Repetition::REPEATED,
        }
    }
}

/// Maximum repetition and definition levels of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Levels {
    pub r_level_max: i16,
    pub d_level_max: i16,
}

impl Levels {
    /// Levels of a child declared with the given repetition under `self`
    pub fn child(self, optional: bool, repeated: bool) -> Self {
        let mut levels = self;
        if optional || repeated {
            levels.d_level_max += 1;
        }
        if repeated {
            levels.r_level_max += 1;
        }
        levels
    }
}

/// Physical storage metadata of a leaf column
#[derive(Debug, Clone, PartialEq)]
pub struct LeafColumn {
    pub primitive_type: PhysicalType,
    pub original_type: Option<ConvertedType>,
    pub encoding: Encoding,
    pub compression: Compression,
    pub type_length: Option<i32>,
}

impl LeafColumn {
    /// Name used when reporting the column's type
    pub fn type_name(&self) -> String {
        match self.original_type {
            Some(original) => format!("{original:?}"),
            None => format!("{:?}", self.primitive_type),
        }
    }
}

/// Leaf or interior payload of a resolved field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// A group of named child fields
    Group { fields: FieldMap },
    /// A scalar column
    Leaf(LeafColumn),
}

/// A resolved node of the schema tree
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    /// Names from the root down to this field
    pub path: Vec<String>,
    pub repetition: Repetition,
    pub r_level_max: i16,
    pub d_level_max: i16,
    pub kind: FieldKind,
}

impl Field {
    pub fn levels(&self) -> Levels {
        Levels {
            r_level_max: self.r_level_max,
            d_level_max: self.d_level_max,
        }
    }

    pub fn is_nested(&self) -> bool {
        matches!(self.kind, FieldKind::Group { .. })
    }

    pub fn is_leaf(&self) -> bool {
        !self.is_nested()
    }

    /// Direct children, if this is a group
    pub fn children(&self) -> Option<&FieldMap> {
        match &self.kind {
            FieldKind::Group { fields } => Some(fields),
            FieldKind::Leaf(_) => None,
        }
    }

    /// Number of direct children; zero for leaves
    pub fn field_count(&self) -> usize {
        self.children().map_or(0, IndexMap::len)
    }

    pub fn leaf(&self) -> Option<&LeafColumn> {
        match &self.kind {
            FieldKind::Leaf(column) => Some(column),
            FieldKind::Group { .. } => None,
        }
    }

    pub fn is_repeated(&self) -> bool {
        self.repetition == Repetition::Repeated
    }

    /// Key identifying this field's column in a [`ColumnarBuffer`](crate::ColumnarBuffer)
    pub fn column_key(&self) -> String {
        self.path.join(",")
    }
}
