//! Row value sequences for fields.
//!
//! A decoded field does not copy its column: [`FieldValues::Column`] holds the
//! Arrow array behind an `Arc` and materializes a [`Value`] only when a row is
//! read. Fields built in memory use [`FieldValues::Owned`].

use arrow::{
    array::{Array, ArrayRef, AsArray},
    compute::cast,
    datatypes::{
        DataType, Decimal32Type, Decimal64Type, Decimal128Type, Float32Type, Float64Type,
        Int8Type, Int16Type, Int32Type, Int64Type, TimeUnit, TimestampMicrosecondType,
        TimestampMillisecondType, TimestampNanosecondType, TimestampSecondType, UInt8Type,
        UInt16Type, UInt32Type, UInt64Type,
    },
    error::ArrowError,
    util::display::{ArrayFormatter, FormatOptions},
};
use chrono::DateTime;
use snafu::prelude::*;

use crate::frame::Value;

/// Errors raised while reading a row out of a [`FieldValues`].
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ValuesError {
    /// The requested row does not exist.
    #[snafu(display("Index {index} out of bounds for {len} values"))]
    OutOfBounds {
        /// Requested row index.
        index: usize,
        /// Number of rows available.
        len: usize,
    },

    /// Arrow failed to cast or render the cell.
    #[snafu(display("Arrow error reading value at index {index}: {source}"))]
    Arrow {
        /// Row index being read.
        index: usize,
        /// Underlying Arrow error.
        source: ArrowError,
    },

    /// A timestamp cell cannot be represented as a UTC date-time.
    #[snafu(display("Timestamp {value} ({unit:?}) at index {index} is out of range"))]
    TimestampOutOfRange {
        /// Row index being read.
        index: usize,
        /// Raw stored value.
        value: i64,
        /// Unit of the stored value.
        unit: TimeUnit,
    },
}

/// The ordered values of a field.
#[derive(Debug, Clone)]
pub enum FieldValues {
    /// Shared view over an Arrow column; rows are read lazily.
    Column(ArrayRef),
    /// Values held in memory.
    Owned(Vec<Value>),
}

impl FieldValues {
    /// Number of rows.
    pub fn len(&self) -> usize {
        match self {
            FieldValues::Column(array) => array.len(),
            FieldValues::Owned(values) => values.len(),
        }
    }

    /// Returns `true` if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The backing Arrow column, if these values are a column view.
    pub fn as_array(&self) -> Option<&ArrayRef> {
        match self {
            FieldValues::Column(array) => Some(array),
            FieldValues::Owned(_) => None,
        }
    }

    /// Read the value at `index`.
    pub fn get(&self, index: usize) -> Result<Value, ValuesError> {
        let len = self.len();
        ensure!(index < len, OutOfBoundsSnafu { index, len });
        match self {
            FieldValues::Column(array) => value_at(array.as_ref(), index),
            FieldValues::Owned(values) => Ok(values[index].clone()),
        }
    }

    /// Iterate over all rows in order.
    pub fn iter(&self) -> impl Iterator<Item = Result<Value, ValuesError>> + '_ {
        (0..self.len()).map(move |index| self.get(index))
    }

    /// Materialize every row into an owned vector.
    pub fn to_vec(&self) -> Result<Vec<Value>, ValuesError> {
        match self {
            FieldValues::Owned(values) => Ok(values.clone()),
            FieldValues::Column(_) => self.iter().collect(),
        }
    }
}

impl From<ArrayRef> for FieldValues {
    fn from(array: ArrayRef) -> Self {
        FieldValues::Column(array)
    }
}

impl From<Vec<Value>> for FieldValues {
    fn from(values: Vec<Value>) -> Self {
        FieldValues::Owned(values)
    }
}

impl<V: Into<Value>> FromIterator<V> for FieldValues {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        FieldValues::Owned(iter.into_iter().map(Into::into).collect())
    }
}

macro_rules! number_at {
    ($array:expr, $ty:ty, $index:expr) => {
        Value::Number($array.as_primitive::<$ty>().value($index) as f64)
    };
}

/// Read a single cell from an Arrow array as a semantic [`Value`].
///
/// The caller guarantees `index < array.len()`.
fn value_at(array: &dyn Array, index: usize) -> Result<Value, ValuesError> {
    if array.is_null(index) || matches!(array.data_type(), DataType::Null) {
        return Ok(Value::Null);
    }

    let value = match array.data_type() {
        DataType::Boolean => Value::Boolean(array.as_boolean().value(index)),
        DataType::Int8 => number_at!(array, Int8Type, index),
        DataType::Int16 => number_at!(array, Int16Type, index),
        DataType::Int32 => number_at!(array, Int32Type, index),
        DataType::Int64 => number_at!(array, Int64Type, index),
        DataType::UInt8 => number_at!(array, UInt8Type, index),
        DataType::UInt16 => number_at!(array, UInt16Type, index),
        DataType::UInt32 => number_at!(array, UInt32Type, index),
        DataType::UInt64 => number_at!(array, UInt64Type, index),
        DataType::Float32 => number_at!(array, Float32Type, index),
        DataType::Float64 => number_at!(array, Float64Type, index),
        DataType::Decimal32(_, scale) => {
            let raw = array.as_primitive::<Decimal32Type>().value(index);
            decimal_number(f64::from(raw), *scale)
        }
        DataType::Decimal64(_, scale) => {
            let raw = array.as_primitive::<Decimal64Type>().value(index);
            decimal_number(raw as f64, *scale)
        }
        DataType::Decimal128(_, scale) => {
            let raw = array.as_primitive::<Decimal128Type>().value(index);
            decimal_number(raw as f64, *scale)
        }
        DataType::Float16 | DataType::Decimal256(_, _) => number_via_cast(array, index)?,
        DataType::Timestamp(unit, _) => time_at(array, *unit, index)?,
        DataType::Utf8 => Value::String(array.as_string::<i32>().value(index).to_string()),
        DataType::LargeUtf8 => Value::String(array.as_string::<i64>().value(index).to_string()),
        DataType::Utf8View => Value::String(array.as_string_view().value(index).to_string()),
        _ => {
            let formatter = ArrayFormatter::try_new(array, &FormatOptions::default())
                .context(ArrowSnafu { index })?;
            let rendered = formatter
                .value(index)
                .try_to_string()
                .context(ArrowSnafu { index })?;
            Value::String(rendered)
        }
    };
    Ok(value)
}

fn decimal_number(unscaled: f64, scale: i8) -> Value {
    Value::Number(unscaled / 10f64.powi(i32::from(scale)))
}

fn number_via_cast(array: &dyn Array, index: usize) -> Result<Value, ValuesError> {
    let single = array.slice(index, 1);
    let casted = cast(&single, &DataType::Float64).context(ArrowSnafu { index })?;
    match casted.as_primitive_opt::<Float64Type>() {
        Some(floats) if !floats.is_null(0) => Ok(Value::Number(floats.value(0))),
        _ => Ok(Value::Null),
    }
}

fn time_at(array: &dyn Array, unit: TimeUnit, index: usize) -> Result<Value, ValuesError> {
    let (raw, ts) = match unit {
        TimeUnit::Second => {
            let raw = array.as_primitive::<TimestampSecondType>().value(index);
            (raw, DateTime::from_timestamp(raw, 0))
        }
        TimeUnit::Millisecond => {
            let raw = array.as_primitive::<TimestampMillisecondType>().value(index);
            (raw, DateTime::from_timestamp_millis(raw))
        }
        TimeUnit::Microsecond => {
            let raw = array.as_primitive::<TimestampMicrosecondType>().value(index);
            (raw, DateTime::from_timestamp_micros(raw))
        }
        TimeUnit::Nanosecond => {
            let raw = array.as_primitive::<TimestampNanosecondType>().value(index);
            (raw, Some(DateTime::from_timestamp_nanos(raw)))
        }
    };
    ts.map(Value::Time).context(TimestampOutOfRangeSnafu {
        index,
        value: raw,
        unit,
    })
}
