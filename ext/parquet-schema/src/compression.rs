use crate::{
    field::{FieldKind, FieldMap},
    SchemaDefinition,
};
use parquet::basic::Compression;

/// Overwrite the compression of every leaf declaration
pub fn set_declared_compression(definition: &mut SchemaDefinition, method: &str) {
    for spec in definition.values_mut() {
        match spec.fields.as_mut() {
            Some(children) => set_declared_compression(children, method),
            None => spec.compression = Some(method.to_string()),
        }
    }
}

/// Overwrite the compression of every resolved leaf column
pub fn set_resolved_compression(fields: &mut FieldMap, compression: Compression) {
    for field in fields.values_mut() {
        match &mut field.kind {
            FieldKind::Group { fields } => set_resolved_compression(fields, compression),
            FieldKind::Leaf(column) => column.compression = compression,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        builder::FieldTreeBuilder, declaration::definition, index::list_fields, FieldSpec,
        Registry,
    };
    use parquet::basic::ZstdLevel;

    #[test]
    fn test_both_representations_updated() {
        let mut declared = definition([
            ("id", FieldSpec::leaf("INT64")),
            (
                "doc",
                FieldSpec::group([("body", FieldSpec::leaf("UTF8").with_compression("SNAPPY"))]),
            ),
        ]);
        let mut fields = FieldTreeBuilder::new(&Registry::default())
            .build(&declared)
            .unwrap();

        set_declared_compression(&mut declared, "ZSTD");
        set_resolved_compression(&mut fields, Compression::ZSTD(ZstdLevel::default()));

        assert_eq!(declared["id"].compression.as_deref(), Some("ZSTD"));
        let doc = &declared["doc"];
        assert!(doc.compression.is_none());
        assert_eq!(
            doc.fields.as_ref().unwrap()["body"].compression.as_deref(),
            Some("ZSTD")
        );

        for field in list_fields(&fields) {
            if let Some(column) = field.leaf() {
                assert_eq!(column.compression, Compression::ZSTD(ZstdLevel::default()));
            }
        }
    }
}
