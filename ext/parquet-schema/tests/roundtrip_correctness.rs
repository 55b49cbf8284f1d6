use parquet::basic::Type as PhysicalType;
use parquet_schema::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use test_helpers::*;

fn assert_column(
    buffer: &ColumnarBuffer,
    key: &str,
    r_levels: &[i16],
    d_levels: &[i16],
    values: &[Value],
) {
    let column = buffer
        .column(key)
        .unwrap_or_else(|| panic!("missing column {key}"));
    assert_eq!(column.r_levels, r_levels, "repetition levels of {key}");
    assert_eq!(column.d_levels, d_levels, "definition levels of {key}");
    assert_eq!(column.values, values, "values of {key}");
    assert_eq!(column.count, r_levels.len());
}

// ====== Document Records ======

#[test]
fn test_document_columns() {
    let schema = document_schema();
    let mut buffer = schema.new_buffer();
    for record in document_records() {
        schema.shred_record(&record, &mut buffer).unwrap();
    }

    assert_eq!(buffer.row_count, 2);
    assert_eq!(buffer.columns.len(), 6);

    assert_column(&buffer, "DocId", &[0, 0], &[0, 0], &[10i64.into(), 20i64.into()]);
    assert_column(
        &buffer,
        "Links,Backward",
        &[0, 0, 1],
        &[1, 2, 2],
        &[10i64.into(), 30i64.into()],
    );
    assert_column(
        &buffer,
        "Links,Forward",
        &[0, 1, 1, 0],
        &[2, 2, 2, 2],
        &[20i64.into(), 40i64.into(), 60i64.into(), 80i64.into()],
    );
    assert_column(
        &buffer,
        "Name,Language,Code",
        &[0, 2, 1, 1, 0],
        &[2, 2, 1, 2, 1],
        &["en-us".into(), "en".into(), "en-gb".into()],
    );
    assert_column(
        &buffer,
        "Name,Language,Country",
        &[0, 2, 1, 1, 0],
        &[3, 2, 1, 3, 1],
        &["us".into(), "gb".into()],
    );
    assert_column(
        &buffer,
        "Name,Url",
        &[0, 1, 1, 0],
        &[2, 2, 1, 2],
        &["http://A".into(), "http://B".into(), "http://C".into()],
    );
}

#[test]
fn test_document_roundtrip() {
    let schema = document_schema();
    let records = document_records();

    let mut buffer = schema.new_buffer();
    for record in &records {
        schema.shred_record(record, &mut buffer).unwrap();
    }

    assert_eq!(schema.materialize_records(&buffer).unwrap(), records);
}

#[test]
fn test_empty_buffer() {
    let schema = document_schema();
    let buffer = schema.new_buffer();

    assert!(buffer.is_empty());
    assert!(schema.materialize_records(&buffer).unwrap().is_empty());
}

// ====== Shredding Failures ======

#[test]
fn test_missing_required_leaves_buffer_untouched() {
    let schema = document_schema();
    let mut buffer = schema.new_buffer();
    schema
        .shred_record(&document_records()[0], &mut buffer)
        .unwrap();
    let before = buffer.clone();

    // Code is required inside every Language entry
    let bad = record([
        ("DocId", Value::from(30i64)),
        (
            "Name",
            Value::List(vec![Value::from(record([(
                "Language",
                Value::List(vec![Value::from(record([("Country", Value::from("fr"))]))]),
            )]))]),
        ),
    ]);

    let err = schema.shred_record(&bad, &mut buffer).unwrap_err();
    assert!(matches!(err, ParquetError::MissingRequiredField { .. }));
    assert_eq!(err.path(), Some("Name.Language.Code"));
    assert_eq!(buffer, before);
}

#[test]
fn test_too_many_values() {
    let schema = document_schema();
    let mut buffer = schema.new_buffer();

    let bad = record([("DocId", Value::from(vec![1i64, 2]))]);
    let err = schema.shred_record(&bad, &mut buffer).unwrap_err();
    assert!(matches!(err, ParquetError::TooManyValues { count: 2, .. }));
    assert_eq!(buffer.row_count, 0);
}

#[test]
fn test_type_mismatch() {
    let schema = document_schema();
    let mut buffer = schema.new_buffer();

    let wrong_leaf = record([("DocId", Value::from("ten"))]);
    let err = schema.shred_record(&wrong_leaf, &mut buffer).unwrap_err();
    assert!(matches!(err, ParquetError::TypeMismatch { .. }));

    let wrong_group = record([("DocId", Value::from(1i64)), ("Links", Value::from(5i64))]);
    let err = schema.shred_record(&wrong_group, &mut buffer).unwrap_err();
    assert!(matches!(err, ParquetError::TypeMismatch { .. }));
    assert_eq!(err.path(), Some("Links"));

    assert!(buffer.is_empty());
}

// ====== Randomized Records ======

fn mixed_schema() -> ParquetSchema {
    init_logging();
    ParquetSchema::new(definition([
        ("id", FieldSpec::leaf("INT64")),
        ("active", FieldSpec::leaf("BOOLEAN").optional()),
        ("scores", FieldSpec::leaf("DOUBLE").repeated()),
        (
            "owner",
            FieldSpec::group([
                ("name", FieldSpec::leaf("UTF8")),
                ("age", FieldSpec::leaf("INT32").optional()),
            ])
            .optional(),
        ),
        (
            "events",
            FieldSpec::group([
                ("kind", FieldSpec::leaf("UTF8")),
                ("tags", FieldSpec::leaf("UTF8").repeated()),
                (
                    "payload",
                    FieldSpec::group([
                        ("size", FieldSpec::leaf("INT32").optional()),
                        ("chunks", FieldSpec::leaf("INT64").repeated()),
                    ])
                    .optional(),
                ),
            ])
            .repeated(),
        ),
    ]))
    .unwrap()
}

fn random_leaf(rng: &mut StdRng, primitive_type: PhysicalType) -> Value {
    match primitive_type {
        PhysicalType::BOOLEAN => Value::from(rng.random_bool(0.5)),
        PhysicalType::INT32 => Value::from(rng.random_range(-1000..1000i32)),
        PhysicalType::INT64 => Value::from(rng.random_range(0..1_000_000i64)),
        PhysicalType::DOUBLE => Value::from(rng.random_range(0.0..100.0f64)),
        _ => Value::from(format!("s{}", rng.random_range(0..100u32)).as_str()),
    }
}

fn random_value(rng: &mut StdRng, field: &Field) -> Value {
    match &field.kind {
        FieldKind::Group { fields } => Value::Record(random_record(rng, fields)),
        FieldKind::Leaf(column) => random_leaf(rng, column.primitive_type),
    }
}

/// Absent optionals and empty repeated fields are omitted, as materialization drops them
fn random_record(rng: &mut StdRng, fields: &FieldMap) -> Record {
    let mut record = Record::new();
    for (name, field) in fields {
        let value = match field.repetition {
            Repetition::Required => random_value(rng, field),
            Repetition::Optional => {
                if rng.random_bool(0.3) {
                    continue;
                }
                random_value(rng, field)
            }
            Repetition::Repeated => {
                let count = rng.random_range(0..4);
                if count == 0 {
                    continue;
                }
                Value::List((0..count).map(|_| random_value(rng, field)).collect())
            }
        };
        record.insert(name.as_str().into(), value);
    }
    record
}

#[test]
fn test_random_roundtrip() {
    let schema = mixed_schema();
    let mut rng = StdRng::seed_from_u64(42);

    let records: Vec<Record> = (0..200)
        .map(|_| random_record(&mut rng, schema.fields()))
        .collect();

    let mut buffer = schema.new_buffer();
    for record in &records {
        schema.shred_record(record, &mut buffer).unwrap();
    }
    assert_eq!(buffer.row_count, records.len());

    // every column describes every record
    for (key, column) in &buffer.columns {
        let starts = column.r_levels.iter().filter(|&&r| r == 0).count();
        assert_eq!(starts, records.len(), "{key}");
    }

    let restored = schema.materialize_records(&buffer).unwrap();
    assert_eq!(restored.len(), records.len());
    for (idx, (restored, original)) in restored.iter().zip(&records).enumerate() {
        assert_eq!(restored, original, "record {idx}");
    }
}

#[test]
fn test_values_stored_only_at_max_definition() {
    let schema = mixed_schema();
    let mut rng = StdRng::seed_from_u64(7);

    let mut buffer = schema.new_buffer();
    for _ in 0..50 {
        let record = random_record(&mut rng, schema.fields());
        schema.shred_record(&record, &mut buffer).unwrap();
    }

    for leaf in schema.leaves() {
        let column = buffer.column(&leaf.column_key()).unwrap();
        let defined = column
            .d_levels
            .iter()
            .filter(|&&d| d == leaf.d_level_max)
            .count();
        assert_eq!(defined, column.values.len(), "{}", leaf.column_key());
        assert!(column.r_levels.iter().all(|&r| r <= leaf.r_level_max));
        assert!(column.d_levels.iter().all(|&d| d <= leaf.d_level_max));
    }
}

// ====== Corrupt Buffers ======

#[test]
fn test_materialize_rejects_out_of_range_levels() {
    let schema = document_schema();
    let mut buffer = schema.new_buffer();
    for record in document_records() {
        schema.shred_record(&record, &mut buffer).unwrap();
    }

    let column = buffer.columns.get_mut("DocId").unwrap();
    column.d_levels[0] = 3;

    let err = schema.materialize_records(&buffer).unwrap_err();
    assert!(matches!(err, ParquetError::InvalidColumn { .. }));
}

#[test]
fn test_materialize_rejects_extra_rows() {
    let schema = document_schema();
    let mut buffer = schema.new_buffer();
    for record in document_records() {
        schema.shred_record(&record, &mut buffer).unwrap();
    }

    buffer.row_count = 3;
    let err = schema.materialize_records(&buffer).unwrap_err();
    assert!(matches!(err, ParquetError::InvalidColumn { .. }));
    assert_eq!(err.path(), Some("DocId"));
}

#[test]
fn test_materialize_rejects_truncated_column() {
    let schema = document_schema();
    let mut buffer = schema.new_buffer();
    for record in document_records() {
        schema.shred_record(&record, &mut buffer).unwrap();
    }

    let doc_id = buffer.columns.get_mut("DocId").unwrap();
    doc_id.values.pop();
    doc_id.r_levels.pop();
    doc_id.d_levels.pop();
    doc_id.count -= 1;

    let err = schema.materialize_records(&buffer).unwrap_err();
    assert!(matches!(err, ParquetError::InvalidColumn { .. }));
    assert_eq!(err.path(), Some("DocId"));
}

#[test]
fn test_materialize_rejects_missing_column() {
    let schema = document_schema();
    let mut buffer = schema.new_buffer();
    for record in document_records() {
        schema.shred_record(&record, &mut buffer).unwrap();
    }

    buffer.columns.shift_remove("Name,Url");
    let err = schema.materialize_records(&buffer).unwrap_err();
    assert!(matches!(err, ParquetError::InvalidColumn { .. }));
    assert_eq!(err.path(), Some("Name,Url"));
}

#[test]
fn test_materialize_rejects_unknown_column() {
    let schema = document_schema();
    let mut buffer = schema.new_buffer();
    buffer.columns.insert("Nope".to_string(), ColumnData::default());

    let err = schema.materialize_records(&buffer).unwrap_err();
    assert!(matches!(err, ParquetError::FieldNotFound { .. }));
}
