use crate::{
    buffer::ColumnarBuffer,
    builder::FieldTreeBuilder,
    compression::{set_declared_compression, set_resolved_compression},
    conversion::{self, ROOT_NAME},
    declaration::parse_definition,
    field::{Field, FieldMap},
    index::FieldIndex,
    materialize::RecordMaterializer,
    path::{self, FieldPath},
    registry::Registry,
    shred::{DremelShredder, RecordShredder},
    ParquetError, Record, Result, SchemaDefinition,
};
use parquet::schema::types::{SchemaDescriptor, TypePtr};
use std::sync::Arc;

/// A resolved Parquet schema
///
/// Holds the declaration it was built from and the resolved field tree.
/// Once built the tree is read-only apart from [`ParquetSchema::compress`],
/// which needs exclusive access.
#[derive(Debug, Clone)]
pub struct ParquetSchema {
    schema: SchemaDefinition,
    fields: FieldMap,
    index: FieldIndex,
    registry: Arc<Registry>,
    shredder: Arc<dyn RecordShredder>,
    materializer: Arc<dyn RecordMaterializer>,
}

impl ParquetSchema {
    /// Resolve a declaration against the standard registry
    pub fn new(definition: SchemaDefinition) -> Result<Self> {
        SchemaBuilder::new().build(definition)
    }

    /// Resolve a JSON declaration against the standard registry
    pub fn from_json(json: &str) -> Result<Self> {
        Self::new(parse_definition(json)?)
    }

    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// The declaration this schema was built from
    pub fn schema(&self) -> &SchemaDefinition {
        &self.schema
    }

    /// Root-level resolved fields
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// Pre-order index built alongside the tree
    pub fn index(&self) -> &FieldIndex {
        &self.index
    }

    /// Every node in pre-order, groups before their children
    pub fn field_list(&self) -> Vec<&Field> {
        self.index.fields(&self.fields)
    }

    /// Leaf columns in pre-order
    pub fn leaves(&self) -> Vec<&Field> {
        self.index.leaves(&self.fields)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Retrieve a field definition
    pub fn find_field<P: FieldPath + ?Sized>(&self, path: &P) -> Result<&Field> {
        path::find_field(&self.fields, path)
    }

    /// Retrieve a field definition and all the field's ancestors
    pub fn find_field_branch<P: FieldPath + ?Sized>(&self, path: &P) -> Result<Vec<&Field>> {
        path::find_field_branch(&self.fields, path)
    }

    /// Force every leaf, in the declaration and the resolved tree, to `method`.
    ///
    /// The method must be known to the registry; otherwise the schema is left unchanged.
    pub fn compress(&mut self, method: &str) -> Result<&mut Self> {
        let compression = self.registry.compressions.get(method).ok_or_else(|| {
            ParquetError::UnsupportedCompression {
                path: ROOT_NAME.to_string(),
                compression: method.to_string(),
            }
        })?;

        set_declared_compression(&mut self.schema, method);
        set_resolved_compression(&mut self.fields, compression);
        log::debug!("compression of all leaf columns set to {}", method);
        Ok(self)
    }

    /// An empty buffer with one column per leaf
    pub fn new_buffer(&self) -> ColumnarBuffer {
        ColumnarBuffer::for_fields(&self.fields)
    }

    /// Shred a record into `buffer`
    pub fn shred_record(&self, record: &Record, buffer: &mut ColumnarBuffer) -> Result<()> {
        self.shredder.shred(&self.fields, record, buffer)
    }

    /// Rebuild the records held in `buffer`
    pub fn materialize_records(&self, buffer: &ColumnarBuffer) -> Result<Vec<Record>> {
        self.materializer.materialize(&self.fields, buffer)
    }

    pub fn to_parquet_type(&self) -> Result<TypePtr> {
        conversion::to_parquet_type(&self.fields)
    }

    pub fn schema_descriptor(&self) -> Result<SchemaDescriptor> {
        conversion::schema_descriptor(&self.fields)
    }

    pub fn to_arrow_schema(&self) -> Result<arrow_schema::Schema> {
        conversion::to_arrow_schema(&self.fields)
    }
}

/// Builder for creating schemas
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    registry: Arc<Registry>,
    shredder: Arc<dyn RecordShredder>,
    materializer: Arc<dyn RecordMaterializer>,
    strict: bool,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Registry::default()),
            shredder: Arc::new(DremelShredder),
            materializer: Arc::new(DremelShredder),
            strict: true,
        }
    }

    /// Resolve types, encodings and compressions against `registry`
    pub fn with_registry(mut self, registry: impl Into<Arc<Registry>>) -> Self {
        self.registry = registry.into();
        self
    }

    pub fn with_shredder(mut self, shredder: impl RecordShredder + 'static) -> Self {
        self.shredder = Arc::new(shredder);
        self
    }

    pub fn with_materializer(mut self, materializer: impl RecordMaterializer + 'static) -> Self {
        self.materializer = Arc::new(materializer);
        self
    }

    /// Whether a field declaring both `fields` and `type` is an error
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn build(self, definition: SchemaDefinition) -> Result<ParquetSchema> {
        let fields = FieldTreeBuilder::new(&self.registry)
            .strict(self.strict)
            .build(&definition)?;
        let index = FieldIndex::new(&fields);

        Ok(ParquetSchema {
            schema: definition,
            fields,
            index,
            registry: self.registry,
            shredder: self.shredder,
            materializer: self.materializer,
        })
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}
