//! Sample records for tests and benchmarks.
//!
//! This module is only compiled for tests and with the `test-utils` feature.

use chrono::{DateTime, TimeZone, Utc};

use crate::reflect::{Field, Reflect, Reflected};

/// The UTC instant `secs` seconds after the epoch.
///
/// Panics if `secs` is outside chrono's supported range.
pub fn unix(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0)
        .single()
        .expect("timestamp out of range")
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sample {
    pub int_field: i64,
    pub string_field: String,
    pub time_field: DateTime<Utc>,
}

impl Reflect for Sample {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Record(vec![
            Field::new("IntField", &self.int_field).tag("intField"),
            Field::new("StringField", &self.string_field).tag("stringField"),
            Field::new("TimeField", &self.time_field).tag("timeField"),
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleWithOmitEmpty {
    pub int_field: i64,
    pub string_field: String,
    pub string_opt_field: Option<String>,
    pub time_field: DateTime<Utc>,
}

impl Reflect for SampleWithOmitEmpty {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Record(vec![
            Field::new("IntField", &self.int_field).tag("intField"),
            Field::new("StringField", &self.string_field).tag("stringField,omitempty"),
            Field::new("StringOptField", &self.string_opt_field).tag("stringOptField,omitempty"),
            Field::new("TimeField", &self.time_field).tag("timeField"),
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleWithNested {
    pub int_field: i64,
    pub string_field: String,
    pub nested_field: Sample,
    pub nested_omit_field: SampleWithOmitEmpty,
}

impl Reflect for SampleWithNested {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Record(vec![
            Field::new("IntField", &self.int_field).tag("intField"),
            Field::new("StringField", &self.string_field).tag("stringField"),
            Field::new("NestedField", &self.nested_field).tag("nestedField"),
            Field::new("NestedOmitField", &self.nested_omit_field).tag("nestedOmit"),
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleWithSeq {
    pub int_field: Vec<i64>,
    pub time_field: Vec<DateTime<Utc>>,
    pub records: Vec<Sample>,
    pub nested_records: Vec<SampleWithNested>,
}

impl Reflect for SampleWithSeq {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Record(vec![
            Field::new("IntField", &self.int_field).tag("intField"),
            Field::new("TimeField", &self.time_field).tag("timeField"),
            Field::new("Records", &self.records).tag("records"),
            Field::new("NestedRecords", &self.nested_records).tag("nestedRecords"),
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Embedded {
    pub int_field: i64,
    pub time_field: DateTime<Utc>,
}

impl Reflect for Embedded {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Record(vec![
            Field::new("IntField", &self.int_field).tag("intField"),
            Field::new("TimeField", &self.time_field).tag("timeField"),
        ])
    }
}

/// `int_field` precedes the embedded record, so the embedded `intField` wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleWithEmbedded {
    pub int_field: i64,
    pub embedded: Embedded,
}

impl Reflect for SampleWithEmbedded {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Record(vec![
            Field::new("IntField", &self.int_field).tag("intField"),
            Field::new("Embedded", &self.embedded).embedded(),
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleWithInternal {
    pub int_field: i64,
    pub string_field: String,
    pub time_field: DateTime<Utc>,
    pub date_field: DateTime<Utc>,
}

impl Reflect for SampleWithInternal {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Record(vec![
            Field::new("intField", &self.int_field).tag("intField").internal(),
            Field::new("StringField", &self.string_field).tag("stringField"),
            Field::new("TimeField", &self.time_field).tag("timeField"),
            Field::new("dateField", &self.date_field).tag("dateField").internal(),
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleWithSkipTag {
    pub int_field: i64,
    pub string_field: String,
    pub time_field: DateTime<Utc>,
    pub date_field: DateTime<Utc>,
}

impl Reflect for SampleWithSkipTag {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Record(vec![
            Field::new("IntField", &self.int_field).tag("intField"),
            Field::new("StringField", &self.string_field).tag("-"),
            Field::new("TimeField", &self.time_field).tag("timeField"),
            Field::new("DateField", &self.date_field).tag("-"),
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleWithOptionals {
    pub int_field: Option<i64>,
    pub string_field: Option<String>,
    pub date_field: Option<DateTime<Utc>>,
    pub time_field: Option<DateTime<Utc>>,
    pub nested_field: Option<Box<Sample>>,
    pub nested_none_field: Option<Box<Sample>>,
}

impl Reflect for SampleWithOptionals {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Record(vec![
            Field::new("IntField", &self.int_field).tag("intField"),
            Field::new("StringField", &self.string_field).tag("stringField"),
            Field::new("DateField", &self.date_field).tag("dateField"),
            Field::new("TimeField", &self.time_field).tag("timeField"),
            Field::new("NestedField", &self.nested_field).tag("nestedField"),
            Field::new("NestedNoneField", &self.nested_none_field).tag("nestedNoneField"),
        ])
    }
}

/// A nested-sequence record of the given width, for benchmarks.
pub fn wide_sample(width: usize) -> SampleWithSeq {
    let base = 1_633_024_860;
    SampleWithSeq {
        int_field: (0..width as i64).collect(),
        time_field: (0..width as i64).map(|i| unix(base + i)).collect(),
        records: (0..width as i64)
            .map(|i| Sample {
                int_field: i,
                string_field: format!("record-{i}"),
                time_field: unix(base + i),
            })
            .collect(),
        nested_records: (0..width as i64)
            .map(|i| SampleWithNested {
                int_field: i,
                string_field: format!("nested-{i}"),
                nested_field: Sample {
                    int_field: i + 1,
                    string_field: String::new(),
                    time_field: unix(base - i),
                },
                nested_omit_field: SampleWithOmitEmpty {
                    int_field: i + 2,
                    string_opt_field: Some("x".to_string()),
                    time_field: unix(base + 2 * i),
                    ..Default::default()
                },
            })
            .collect(),
    }
}
