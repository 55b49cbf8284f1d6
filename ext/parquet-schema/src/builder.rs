//! Resolution of a declaration into the field tree
//!
//! Every node gets its repetition and level maxima from its parent's:
//!
//! | declaration             | repetition | r_level_max | d_level_max |
//! |-------------------------|------------|-------------|-------------|
//! | neither flag            | REQUIRED   | parent      | parent      |
//! | `optional`              | OPTIONAL   | parent      | parent + 1  |
//! | `repeated`              | REPEATED   | parent + 1  | parent + 1  |
//! | `optional` + `repeated` | REPEATED   | parent + 1  | parent + 1  |
//!
//! Root-level fields start from `(0, 0)`.

use crate::{
    display_path,
    field::{Field, FieldKind, FieldMap, LeafColumn, Levels, Repetition},
    registry::{Registry, DEFAULT_COMPRESSION, DEFAULT_ENCODING},
    FieldSpec, ParquetError, Result, SchemaDefinition,
};

/// Builds resolved field trees against a registry
#[derive(Debug, Clone, Copy)]
pub struct FieldTreeBuilder<'a> {
    registry: &'a Registry,
    strict: bool,
}

impl<'a> FieldTreeBuilder<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            registry,
            strict: true,
        }
    }

    /// Reject specs declaring both `fields` and `type` (the default).
    ///
    /// When disabled, `fields` wins and the type is ignored.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Resolve a whole declaration, starting from root levels `(0, 0)`
    pub fn build(&self, definition: &SchemaDefinition) -> Result<FieldMap> {
        let fields = self.build_level(definition, Levels::default(), &[])?;
        log::debug!("resolved schema with {} root fields", fields.len());
        Ok(fields)
    }

    /// Resolve one level of a declaration under the given parent context
    pub fn build_level(
        &self,
        definition: &SchemaDefinition,
        parent: Levels,
        parent_path: &[String],
    ) -> Result<FieldMap> {
        let mut fields = FieldMap::with_capacity(definition.len());
        for (name, spec) in definition {
            let field = self.build_field(name, spec, parent, parent_path)?;
            fields.insert(name.clone(), field);
        }
        Ok(fields)
    }

    fn build_field(
        &self,
        name: &str,
        spec: &FieldSpec,
        parent: Levels,
        parent_path: &[String],
    ) -> Result<Field> {
        let repetition = Repetition::from_flags(spec.optional, spec.repeated);
        let levels = parent.child(spec.optional, spec.repeated);

        let mut path = Vec::with_capacity(parent_path.len() + 1);
        path.extend_from_slice(parent_path);
        path.push(name.to_string());

        if name.contains(',') {
            return Err(ParquetError::InvalidFieldName {
                path: display_path(&path),
            });
        }

        let kind = match (&spec.fields, &spec.type_name) {
            (Some(_), Some(_)) if self.strict => {
                return Err(ParquetError::AmbiguousFieldSpec {
                    path: display_path(&path),
                });
            }
            (Some(children), type_name) => {
                if let Some(type_name) = type_name {
                    log::warn!(
                        "field {} declares nested fields, ignoring type {}",
                        display_path(&path),
                        type_name
                    );
                }
                FieldKind::Group {
                    fields: self.build_level(children, levels, &path)?,
                }
            }
            (None, Some(type_name)) => {
                FieldKind::Leaf(self.resolve_leaf(type_name, spec, &path)?)
            }
            (None, None) => {
                return Err(ParquetError::MissingFieldType {
                    path: display_path(&path),
                });
            }
        };

        log::trace!(
            "{} {}: r_level_max={} d_level_max={}",
            repetition,
            display_path(&path),
            levels.r_level_max,
            levels.d_level_max
        );

        Ok(Field {
            name: name.to_string(),
            path,
            repetition,
            r_level_max: levels.r_level_max,
            d_level_max: levels.d_level_max,
            kind,
        })
    }

    fn resolve_leaf(
        &self,
        type_name: &str,
        spec: &FieldSpec,
        path: &[String],
    ) -> Result<LeafColumn> {
        let descriptor = self
            .registry
            .types
            .lookup(type_name)
            .ok_or_else(|| ParquetError::UnknownType {
                path: display_path(path),
                type_name: type_name.to_string(),
            })?;

        let encoding_name = spec.encoding.as_deref().unwrap_or(DEFAULT_ENCODING);
        let encoding = self.registry.codecs.get(encoding_name).ok_or_else(|| {
            ParquetError::UnsupportedEncoding {
                path: display_path(path),
                encoding: encoding_name.to_string(),
            }
        })?;

        let compression_name = spec.compression.as_deref().unwrap_or(DEFAULT_COMPRESSION);
        let compression = self
            .registry
            .compressions
            .get(compression_name)
            .ok_or_else(|| ParquetError::UnsupportedCompression {
                path: display_path(path),
                compression: compression_name.to_string(),
            })?;

        Ok(LeafColumn {
            primitive_type: descriptor.primitive_type,
            original_type: descriptor.original_type,
            encoding,
            compression,
            type_length: spec.type_length.or(descriptor.type_length),
        })
    }
}
