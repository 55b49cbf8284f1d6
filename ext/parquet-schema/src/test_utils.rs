//! Test utilities for parquet-schema

#[cfg(test)]
pub mod test {
    use crate::{declaration::definition, value::record, FieldSpec, Record, SchemaDefinition, Value};

    /// The `Document` schema from the Dremel paper
    pub fn document_definition() -> SchemaDefinition {
        definition([
            ("DocId", FieldSpec::leaf("INT64")),
            (
                "Links",
                FieldSpec::group([
                    ("Backward", FieldSpec::leaf("INT64").repeated()),
                    ("Forward", FieldSpec::leaf("INT64").repeated()),
                ])
                .optional(),
            ),
            (
                "Name",
                FieldSpec::group([
                    (
                        "Language",
                        FieldSpec::group([
                            ("Code", FieldSpec::leaf("UTF8")),
                            ("Country", FieldSpec::leaf("UTF8").optional()),
                        ])
                        .repeated(),
                    ),
                    ("Url", FieldSpec::leaf("UTF8").optional()),
                ])
                .repeated(),
            ),
        ])
    }

    /// The two sample records from the Dremel paper
    pub fn document_records() -> Vec<Record> {
        let r1 = record([
            ("DocId", Value::from(10i64)),
            (
                "Links",
                Value::from(record([("Forward", Value::from(vec![20i64, 40, 60]))])),
            ),
            (
                "Name",
                Value::List(vec![
                    Value::from(record([
                        (
                            "Language",
                            Value::List(vec![
                                Value::from(record([
                                    ("Code", Value::from("en-us")),
                                    ("Country", Value::from("us")),
                                ])),
                                Value::from(record([("Code", Value::from("en"))])),
                            ]),
                        ),
                        ("Url", Value::from("http://A")),
                    ])),
                    Value::from(record([("Url", Value::from("http://B"))])),
                    Value::from(record([(
                        "Language",
                        Value::List(vec![Value::from(record([
                            ("Code", Value::from("en-gb")),
                            ("Country", Value::from("gb")),
                        ]))]),
                    )])),
                ]),
            ),
        ]);

        let r2 = record([
            ("DocId", Value::from(20i64)),
            (
                "Links",
                Value::from(record([
                    ("Backward", Value::from(vec![10i64, 30])),
                    ("Forward", Value::from(vec![80i64])),
                ])),
            ),
            (
                "Name",
                Value::List(vec![Value::from(record([("Url", Value::from("http://C"))]))]),
            ),
        ]);

        vec![r1, r2]
    }
}
