//! Vector builder: semantic field values -> physical Arrow array.

use std::sync::Arc;

use arrow::array::{
    ArrayRef, BooleanBuilder, Float64Builder, StringBuilder, TimestampMillisecondBuilder,
};
use snafu::prelude::*;

use crate::{
    convert::error::{ConvertError, IncompatibleValueSnafu, ValuesSnafu},
    frame::{Field, FieldType, Value},
    type_mapper::physical_type_for,
};

/// Build the Arrow array for `field`.
///
/// The physical type comes from [`physical_type_for`]. Each value is appended
/// in row order; [`Value::Null`] becomes a physical null. If the field already
/// views an Arrow column of exactly that type, the column is returned as is.
///
/// Time fields also accept numbers, read as epoch milliseconds; `NaN` and
/// infinities have no instant and become nulls. String and other fields render
/// non-string values with their `Display` form.
pub fn build_vector(field: &Field) -> Result<ArrayRef, ConvertError> {
    let target = physical_type_for(field.field_type);
    if let Some(array) = field.values.as_array() {
        if array.data_type() == &target {
            return Ok(Arc::clone(array));
        }
    }

    let values = field
        .values
        .to_vec()
        .context(ValuesSnafu { field: &field.name })?;

    let array: ArrayRef = match field.field_type {
        FieldType::Number => {
            let mut builder = Float64Builder::with_capacity(values.len());
            for (index, value) in values.iter().enumerate() {
                match value {
                    Value::Null => builder.append_null(),
                    Value::Number(v) => builder.append_value(*v),
                    other => return incompatible(field, index, other),
                }
            }
            Arc::new(builder.finish())
        }
        FieldType::Time => {
            let mut builder = TimestampMillisecondBuilder::with_capacity(values.len());
            for (index, value) in values.iter().enumerate() {
                match value {
                    Value::Null => builder.append_null(),
                    Value::Time(ts) => builder.append_value(ts.timestamp_millis()),
                    Value::Number(ms) if ms.is_finite() => builder.append_value(*ms as i64),
                    Value::Number(_) => builder.append_null(),
                    other => return incompatible(field, index, other),
                }
            }
            Arc::new(builder.finish())
        }
        FieldType::Boolean => {
            let mut builder = BooleanBuilder::with_capacity(values.len());
            for (index, value) in values.iter().enumerate() {
                match value {
                    Value::Null => builder.append_null(),
                    Value::Boolean(v) => builder.append_value(*v),
                    other => return incompatible(field, index, other),
                }
            }
            Arc::new(builder.finish())
        }
        FieldType::String | FieldType::Other => {
            let mut builder = StringBuilder::new();
            for value in &values {
                match value {
                    Value::Null => builder.append_null(),
                    Value::String(s) => builder.append_value(s),
                    other => builder.append_value(other.to_string()),
                }
            }
            Arc::new(builder.finish())
        }
    };
    Ok(array)
}

fn incompatible<T>(field: &Field, index: usize, value: &Value) -> Result<T, ConvertError> {
    IncompatibleValueSnafu {
        field: &field.name,
        index,
        expected: field.field_type,
        found: value.kind(),
    }
    .fail()
}
