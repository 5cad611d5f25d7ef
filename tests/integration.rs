//! Integration tests for epochmap


use epochmap::test_utils::{
    Embedded, Sample, SampleWithEmbedded, SampleWithInternal, SampleWithNested,
    SampleWithOmitEmpty, SampleWithOptionals, SampleWithSeq, SampleWithSkipTag, unix,
};
use epochmap::{ConvertError, Value, convert};
use harness::{assert_converts, map_of, nested};

#[test]
fn test_valid_record() {
    let input = Sample {
        int_field: 1,
        string_field: "Sample".to_string(),
        time_field: unix(1633024900),
    };

    assert_converts(
        &input,
        map_of(vec![
            ("intField", Value::Int(1)),
            ("stringField", Value::from("Sample")),
            ("timeField", Value::Timestamp(1633024900)),
        ]),
    );
}

#[test]
fn test_valid_record_behind_references() {
    let input = Sample {
        int_field: 1,
        string_field: "Sample".to_string(),
        time_field: unix(1633024900),
    };
    let expected = map_of(vec![
        ("intField", Value::Int(1)),
        ("stringField", Value::from("Sample")),
        ("timeField", Value::Timestamp(1633024900)),
    ]);

    assert_converts(&&input, expected.clone());
    assert_converts(&Some(input.clone()), expected.clone());
    assert_converts(&Box::new(input), expected);
}

#[test]
fn test_omit_empty_string() {
    let input = SampleWithOmitEmpty {
        int_field: 1,
        time_field: unix(1633024862),
        ..Default::default()
    };

    assert_converts(
        &input,
        map_of(vec![
            ("intField", Value::Int(1)),
            ("timeField", Value::Timestamp(1633024862)),
        ]),
    );
}

#[test]
fn test_omit_empty_keeps_populated_fields() {
    let input = SampleWithOmitEmpty {
        int_field: 1,
        string_field: "s".to_string(),
        string_opt_field: Some(String::new()),
        time_field: unix(1633024862),
    };

    // An optional holding an empty string is present, so it is kept
    assert_converts(
        &input,
        map_of(vec![
            ("intField", Value::Int(1)),
            ("stringField", Value::from("s")),
            ("stringOptField", Value::from("")),
            ("timeField", Value::Timestamp(1633024862)),
        ]),
    );
}

#[test]
fn test_nested_records() {
    let input = SampleWithNested {
        int_field: 1,
        string_field: "SampleWithNested".to_string(),
        nested_field: Sample {
            int_field: 2,
            string_field: "Sample".to_string(),
            time_field: unix(1633024900),
        },
        nested_omit_field: SampleWithOmitEmpty {
            int_field: 3,
            time_field: unix(1633025000),
            ..Default::default()
        },
    };

    assert_converts(
        &input,
        map_of(vec![
            ("intField", Value::Int(1)),
            ("stringField", Value::from("SampleWithNested")),
            (
                "nestedField",
                nested(vec![
                    ("intField", Value::Int(2)),
                    ("stringField", Value::from("Sample")),
                    ("timeField", Value::Timestamp(1633024900)),
                ]),
            ),
            (
                "nestedOmit",
                nested(vec![
                    ("intField", Value::Int(3)),
                    ("timeField", Value::Timestamp(1633025000)),
                ]),
            ),
        ]),
    );
}

#[test]
fn test_sequences() {
    let input = SampleWithSeq {
        int_field: vec![1, 2],
        time_field: vec![unix(1633024860), unix(1633024861)],
        records: vec![
            Sample {
                int_field: 2,
                string_field: "Sample1".to_string(),
                time_field: unix(1633024862),
            },
            Sample {
                int_field: 3,
                string_field: "Sample2".to_string(),
                time_field: unix(1633024864),
            },
        ],
        nested_records: vec![SampleWithNested {
            int_field: 4,
            string_field: "SampleWithNested1".to_string(),
            nested_field: Sample {
                int_field: 5,
                string_field: "Sample1".to_string(),
                time_field: unix(1633024866),
            },
            nested_omit_field: SampleWithOmitEmpty {
                int_field: 6,
                time_field: unix(1633024867),
                ..Default::default()
            },
        }],
    };

    assert_converts(
        &input,
        map_of(vec![
            ("intField", Value::Seq(vec![Value::Int(1), Value::Int(2)])),
            (
                "timeField",
                Value::Seq(vec![
                    Value::Timestamp(1633024860),
                    Value::Timestamp(1633024861),
                ]),
            ),
            (
                "records",
                Value::Seq(vec![
                    nested(vec![
                        ("intField", Value::Int(2)),
                        ("stringField", Value::from("Sample1")),
                        ("timeField", Value::Timestamp(1633024862)),
                    ]),
                    nested(vec![
                        ("intField", Value::Int(3)),
                        ("stringField", Value::from("Sample2")),
                        ("timeField", Value::Timestamp(1633024864)),
                    ]),
                ]),
            ),
            (
                "nestedRecords",
                Value::Seq(vec![nested(vec![
                    ("intField", Value::Int(4)),
                    ("stringField", Value::from("SampleWithNested1")),
                    (
                        "nestedField",
                        nested(vec![
                            ("intField", Value::Int(5)),
                            ("stringField", Value::from("Sample1")),
                            ("timeField", Value::Timestamp(1633024866)),
                        ]),
                    ),
                    (
                        "nestedOmit",
                        nested(vec![
                            ("intField", Value::Int(6)),
                            ("timeField", Value::Timestamp(1633024867)),
                        ]),
                    ),
                ])]),
            ),
        ]),
    );
}

#[test]
fn test_embedded_record_is_spliced() {
    let input = SampleWithEmbedded {
        int_field: 1,
        embedded: Embedded {
            int_field: 2,
            time_field: unix(1633024862),
        },
    };

    assert_converts(
        &input,
        map_of(vec![
            ("intField", Value::Int(2)),
            ("timeField", Value::Timestamp(1633024862)),
        ]),
    );
}

#[test]
fn test_skip_tag() {
    let input = SampleWithSkipTag {
        int_field: 1,
        string_field: "Sample".to_string(),
        time_field: unix(1633024862),
        date_field: unix(1633024863),
    };

    assert_converts(
        &input,
        map_of(vec![
            ("intField", Value::Int(1)),
            ("timeField", Value::Timestamp(1633024862)),
        ]),
    );
}

#[test]
fn test_internal_fields_are_hidden() {
    let input = SampleWithInternal {
        int_field: 1,
        string_field: "Sample".to_string(),
        time_field: unix(1633024862),
        date_field: unix(1633024863),
    };

    assert_converts(
        &input,
        map_of(vec![
            ("stringField", Value::from("Sample")),
            ("timeField", Value::Timestamp(1633024862)),
        ]),
    );
}

#[test]
fn test_optional_fields() {
    let input = SampleWithOptionals {
        int_field: None,
        string_field: Some("Sample".to_string()),
        date_field: None,
        time_field: Some(unix(1633024861)),
        nested_field: Some(Box::new(Sample {
            int_field: 1,
            string_field: "Sample".to_string(),
            time_field: unix(1633024862),
        })),
        nested_none_field: None,
    };

    assert_converts(
        &input,
        map_of(vec![
            ("stringField", Value::from("Sample")),
            ("timeField", Value::Timestamp(1633024861)),
            (
                "nestedField",
                nested(vec![
                    ("intField", Value::Int(1)),
                    ("stringField", Value::from("Sample")),
                    ("timeField", Value::Timestamp(1633024862)),
                ]),
            ),
        ]),
    );
}

#[test]
fn test_nil_input() {
    assert_eq!(convert(&None::<Sample>), Err(ConvertError::NilInput));
}

#[test]
fn test_zero_input() {
    assert_eq!(convert(&Sample::default()), Err(ConvertError::ZeroInput));
    // The zero check applies to the pointee, not the wrapper
    assert_eq!(
        convert(&Some(Sample::default())),
        Err(ConvertError::ZeroInput)
    );
}

#[test]
fn test_non_record_input() {
    assert_eq!(
        convert(&123_i64),
        Err(ConvertError::NotAStruct { found: "int" })
    );
    assert_eq!(
        convert("text"),
        Err(ConvertError::NotAStruct { found: "string" })
    );
}

#[test]
fn test_json_rendering() {
    let input = Sample {
        int_field: 1,
        string_field: "x".to_string(),
        time_field: unix(1633024900),
    };

    let json = epochmap::to_json(convert(&input).unwrap());
    assert_eq!(
        json,
        serde_json::json!({"intField": 1, "stringField": "x", "timeField": 1633024900})
    );
}
