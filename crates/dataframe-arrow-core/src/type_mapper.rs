//! Mapping between Arrow physical types and semantic field types.
//!
//! Decoding classifies each column's Arrow [`DataType`] into a
//! [`PhysicalKind`] and from there into a [`FieldType`]. The mapping is total:
//! any type without a semantic counterpart becomes [`FieldType::Other`] and
//! keeps the original Arrow type in [`PhysicalKind::Unmapped`] so callers can
//! report it.
//!
//! Encoding goes the other way with [`physical_type_for`].

use arrow::datatypes::{DataType, TimeUnit};

use crate::frame::FieldType;

/// Physical type family of an Arrow column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhysicalKind {
    /// Fixed-point decimals of any width.
    Decimal,
    /// Signed and unsigned integers of any width.
    Int,
    /// Half, single and double precision floats.
    FloatingPoint,
    /// Booleans.
    Bool,
    /// Timestamps of any unit, with or without timezone.
    Timestamp,
    /// UTF-8 strings (regular, large, view).
    Utf8,
    /// Any type without a semantic mapping.
    Unmapped(DataType),
}

impl PhysicalKind {
    /// Classify an Arrow data type.
    pub fn classify(data_type: &DataType) -> Self {
        match data_type {
            DataType::Decimal32(_, _)
            | DataType::Decimal64(_, _)
            | DataType::Decimal128(_, _)
            | DataType::Decimal256(_, _) => PhysicalKind::Decimal,
            DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64 => PhysicalKind::Int,
            DataType::Float16 | DataType::Float32 | DataType::Float64 => {
                PhysicalKind::FloatingPoint
            }
            DataType::Boolean => PhysicalKind::Bool,
            DataType::Timestamp(_, _) => PhysicalKind::Timestamp,
            DataType::Utf8 | DataType::LargeUtf8 | DataType::Utf8View => PhysicalKind::Utf8,
            other => PhysicalKind::Unmapped(other.clone()),
        }
    }

    /// Semantic type for this physical family.
    pub fn field_type(&self) -> FieldType {
        match self {
            PhysicalKind::Decimal | PhysicalKind::Int | PhysicalKind::FloatingPoint => {
                FieldType::Number
            }
            PhysicalKind::Bool => FieldType::Boolean,
            PhysicalKind::Timestamp => FieldType::Time,
            PhysicalKind::Utf8 => FieldType::String,
            PhysicalKind::Unmapped(_) => FieldType::Other,
        }
    }
}

/// Semantic type of an Arrow data type.
pub fn field_type_for(data_type: &DataType) -> FieldType {
    PhysicalKind::classify(data_type).field_type()
}

/// Arrow type the vector builder produces for a semantic type.
///
/// Numbers are always written as `Float64` and times as millisecond
/// timestamps without timezone; `Other` falls back to `Utf8`.
pub fn physical_type_for(field_type: FieldType) -> DataType {
    match field_type {
        FieldType::Number => DataType::Float64,
        FieldType::Time => DataType::Timestamp(TimeUnit::Millisecond, None),
        FieldType::Boolean => DataType::Boolean,
        FieldType::String | FieldType::Other => DataType::Utf8,
    }
}

/// A decoded column whose Arrow type has no semantic mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmappedColumn {
    /// Column position in the table.
    pub index: usize,
    /// Column name.
    pub name: String,
    /// The Arrow type that was not recognized.
    pub data_type: DataType,
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::datatypes::{Field, IntervalUnit};
    use std::sync::Arc;

    #[test]
    fn numeric_families_map_to_number() {
        for dt in [
            DataType::Int8,
            DataType::Int64,
            DataType::UInt32,
            DataType::Float16,
            DataType::Float32,
            DataType::Float64,
            DataType::Decimal32(9, 2),
            DataType::Decimal64(18, 2),
            DataType::Decimal128(10, 2),
            DataType::Decimal256(40, 4),
        ] {
            assert_eq!(field_type_for(&dt), FieldType::Number, "{dt}");
        }
    }

    #[test]
    fn bool_and_timestamp_map() {
        assert_eq!(field_type_for(&DataType::Boolean), FieldType::Boolean);
        assert_eq!(
            field_type_for(&DataType::Timestamp(TimeUnit::Nanosecond, Some("UTC".into()))),
            FieldType::Time
        );
        assert_eq!(
            field_type_for(&DataType::Timestamp(TimeUnit::Second, None)),
            FieldType::Time
        );
    }

    #[test]
    fn utf8_maps_to_string() {
        assert_eq!(field_type_for(&DataType::Utf8), FieldType::String);
        assert_eq!(field_type_for(&DataType::LargeUtf8), FieldType::String);
    }

    #[test]
    fn everything_else_is_other_and_keeps_the_type() {
        let list = DataType::List(Arc::new(Field::new("item", DataType::Int32, true)));
        for dt in [
            DataType::Date32,
            DataType::Binary,
            DataType::Null,
            DataType::Interval(IntervalUnit::DayTime),
            list,
        ] {
            let kind = PhysicalKind::classify(&dt);
            assert_eq!(kind, PhysicalKind::Unmapped(dt.clone()));
            assert_eq!(kind.field_type(), FieldType::Other);
        }
    }

    #[test]
    fn builder_types_follow_the_semantic_type() {
        assert_eq!(physical_type_for(FieldType::Number), DataType::Float64);
        assert_eq!(
            physical_type_for(FieldType::Time),
            DataType::Timestamp(TimeUnit::Millisecond, None)
        );
        assert_eq!(physical_type_for(FieldType::Boolean), DataType::Boolean);
        assert_eq!(physical_type_for(FieldType::String), DataType::Utf8);
        assert_eq!(physical_type_for(FieldType::Other), DataType::Utf8);
    }
}
