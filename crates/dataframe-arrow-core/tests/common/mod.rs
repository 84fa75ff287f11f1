//! Shared fixtures for integration tests.
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use dataframe_arrow_core::frame::{DataFrame, Field, FieldType, Value};
use dataframe_arrow_core::metadata::{FieldConfig, FrameMeta, Labels};
use serde_json::json;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn ts_millis(ms: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(ms)
        .single()
        .expect("valid millisecond timestamp")
}

/// A frame with one field of every semantic type that survives a round trip,
/// plus labels, config and frame metadata.
pub fn sample_frame() -> DataFrame {
    let time = Field::new(
        "time",
        FieldType::Time,
        vec![
            Value::Time(ts_millis(1_700_000_000_000)),
            Value::Time(ts_millis(1_700_000_001_500)),
            Value::Null,
        ],
    );

    let value = Field::new(
        "value",
        FieldType::Number,
        vec![Value::Number(1.5), Value::Null, Value::Number(-2.0)],
    )
    .with_labels(
        [("host", "web-01"), ("region", "eu-west")]
            .into_iter()
            .collect::<Labels>(),
    )
    .with_config(
        FieldConfig::new()
            .with("unit", "ms")
            .with("decimals", 2)
            .with("custom", json!({"lineWidth": 2})),
    );

    let up = Field::new(
        "up",
        FieldType::Boolean,
        vec![Value::Boolean(true), Value::Boolean(false), Value::Null],
    );

    let host = Field::new(
        "host",
        FieldType::String,
        vec![Value::from("a"), Value::Null, Value::from("c")],
    )
    .with_labels(Labels::new());

    DataFrame::new(vec![time, value, up, host])
        .with_name("cpu")
        .with_ref_id("A")
        .with_meta(
            FrameMeta::new()
                .with("executedQueryString", "SELECT * FROM cpu")
                .with("custom", json!({"rows": [1, 2, 3], "nested": {"ok": true}})),
        )
}

pub fn single_value_frame(name: &str, value: f64) -> DataFrame {
    DataFrame::new(vec![Field::new(
        "value",
        FieldType::Number,
        vec![Value::Number(value)],
    )])
    .with_name(name)
}
