//! Arrow table -> DataFrame.

use std::{ops::Deref, sync::Arc};

use arrow::array::RecordBatch;
use log::warn;
use snafu::prelude::*;

use crate::{
    convert::error::{ColumnMetadataSnafu, ConvertError, TableMetadataSnafu},
    frame::{DataFrame, Field, FieldValues},
    metadata::{LABELS_KEY, META_KEY, NAME_KEY, REF_ID_KEY, read_config, read_json, read_raw},
    type_mapper::{PhysicalKind, UnmappedColumn},
};

/// A DataFrame decoded from an Arrow table.
///
/// Field values are views over the columns of `table`, which is kept here so
/// the shared column storage and the original schema stay reachable.
#[derive(Debug, Clone)]
pub struct ArrowDataFrame {
    /// The decoded frame.
    pub frame: DataFrame,
    /// The source table.
    pub table: RecordBatch,
    /// Columns whose Arrow type degraded to `FieldType::Other`.
    pub unmapped: Vec<UnmappedColumn>,
}

impl ArrowDataFrame {
    /// Drop the table handle and keep only the frame.
    pub fn into_frame(self) -> DataFrame {
        self.frame
    }
}

impl Deref for ArrowDataFrame {
    type Target = DataFrame;

    fn deref(&self) -> &Self::Target {
        &self.frame
    }
}

/// Decode an Arrow table into a DataFrame.
///
/// Columns are walked in schema order. Each field gets its semantic type from
/// [`PhysicalKind`], its `labels`/`config` from column metadata, and a shared
/// view of the column as its values. Frame `name`, `refId` and `meta` come
/// from the table metadata; `length` is the table row count.
///
/// Columns of an unrecognized type are logged and reported in
/// [`ArrowDataFrame::unmapped`]; they never fail the decode. Malformed JSON
/// metadata does.
pub fn table_to_dataframe(table: &RecordBatch) -> Result<ArrowDataFrame, ConvertError> {
    let schema = table.schema();
    let mut fields = Vec::with_capacity(table.num_columns());
    let mut unmapped = Vec::new();

    for (index, (column, arrow_field)) in table
        .columns()
        .iter()
        .zip(schema.fields().iter())
        .enumerate()
    {
        let name = arrow_field.name();
        let kind = PhysicalKind::classify(arrow_field.data_type());
        if let PhysicalKind::Unmapped(data_type) = &kind {
            warn!("Unknown arrow type for column {name} (index {index}): {data_type}");
            unmapped.push(UnmappedColumn {
                index,
                name: name.clone(),
                data_type: data_type.clone(),
            });
        }

        let metadata = arrow_field.metadata();
        let labels = read_json(metadata, LABELS_KEY).context(ColumnMetadataSnafu { column: name })?;
        let config = read_config(metadata).context(ColumnMetadataSnafu { column: name })?;

        fields.push(Field {
            name: name.clone(),
            field_type: kind.field_type(),
            config,
            labels,
            values: FieldValues::Column(Arc::clone(column)),
        });
    }

    let metadata = schema.metadata();
    let frame = DataFrame {
        name: read_raw(metadata, NAME_KEY).map(str::to_string),
        ref_id: read_raw(metadata, REF_ID_KEY).map(str::to_string),
        meta: read_json(metadata, META_KEY).context(TableMetadataSnafu)?,
        fields,
        length: table.num_rows(),
    };

    Ok(ArrowDataFrame {
        frame,
        table: table.clone(),
        unmapped,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use arrow::{
        array::{ArrayRef, BooleanArray, Date32Array, Float64Array, Int64Array},
        datatypes::{DataType, Field as ArrowField, Schema},
    };

    use super::*;
    use crate::{frame::FieldType, metadata::MetadataError};

    fn batch(fields: Vec<ArrowField>, columns: Vec<ArrayRef>, md: HashMap<String, String>) -> RecordBatch {
        let schema = Arc::new(Schema::new(fields).with_metadata(md));
        RecordBatch::try_new(schema, columns).unwrap()
    }

    #[test]
    fn decodes_types_metadata_and_length() {
        let value_md = HashMap::from([
            ("labels".to_string(), r#"{"host":"a"}"#.to_string()),
            ("config".to_string(), r#"{"unit":"ms"}"#.to_string()),
        ]);
        let table = batch(
            vec![
                ArrowField::new("count", DataType::Int64, true).with_metadata(value_md),
                ArrowField::new("ok", DataType::Boolean, true),
            ],
            vec![
                Arc::new(Int64Array::from(vec![1, 2, 3])),
                Arc::new(BooleanArray::from(vec![true, false, true])),
            ],
            HashMap::from([
                ("name".to_string(), "cpu".to_string()),
                ("refId".to_string(), "A".to_string()),
                ("meta".to_string(), r#"{"executedQueryString":"q"}"#.to_string()),
            ]),
        );

        let decoded = table_to_dataframe(&table).unwrap();
        assert_eq!(decoded.length, 3);
        assert_eq!(decoded.name.as_deref(), Some("cpu"));
        assert_eq!(decoded.ref_id.as_deref(), Some("A"));
        assert_eq!(
            decoded.meta.as_ref().and_then(|m| m.executed_query_string()),
            Some("q")
        );

        let count = &decoded.fields[0];
        assert_eq!(count.field_type, FieldType::Number);
        assert_eq!(count.labels.as_ref().and_then(|l| l.get("host")).map(String::as_str), Some("a"));
        assert_eq!(count.config.unit(), Some("ms"));

        let ok = &decoded.fields[1];
        assert_eq!(ok.field_type, FieldType::Boolean);
        assert!(ok.labels.is_none());
        assert!(ok.config.is_empty());
        assert!(decoded.unmapped.is_empty());
    }

    #[test]
    fn values_share_the_column_buffers() {
        let column: ArrayRef = Arc::new(Float64Array::from(vec![1.0, 2.0]));
        let table = batch(
            vec![ArrowField::new("v", DataType::Float64, false)],
            vec![column.clone()],
            HashMap::new(),
        );
        let decoded = table_to_dataframe(&table).unwrap();
        let values = decoded.fields[0].values.as_array().unwrap();
        assert!(Arc::ptr_eq(values, &column));
    }

    #[test]
    fn unknown_types_degrade_to_other() {
        let table = batch(
            vec![ArrowField::new("day", DataType::Date32, true)],
            vec![Arc::new(Date32Array::from(vec![1]))],
            HashMap::new(),
        );
        let decoded = table_to_dataframe(&table).unwrap();
        assert_eq!(decoded.fields[0].field_type, FieldType::Other);
        assert_eq!(
            decoded.unmapped,
            vec![UnmappedColumn {
                index: 0,
                name: "day".to_string(),
                data_type: DataType::Date32,
            }]
        );
    }

    #[test]
    fn malformed_column_json_fails() {
        let md = HashMap::from([("labels".to_string(), "[oops".to_string())]);
        let table = batch(
            vec![ArrowField::new("v", DataType::Float64, false).with_metadata(md)],
            vec![Arc::new(Float64Array::from(vec![1.0]))],
            HashMap::new(),
        );
        let err = table_to_dataframe(&table).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::ColumnMetadata { ref column, source: MetadataError::InvalidJson { .. } }
                if column == "v"
        ));
    }

    #[test]
    fn malformed_meta_fails() {
        let table = batch(
            vec![ArrowField::new("v", DataType::Float64, false)],
            vec![Arc::new(Float64Array::from(vec![1.0]))],
            HashMap::from([("meta".to_string(), "nope".to_string())]),
        );
        let err = table_to_dataframe(&table).unwrap_err();
        assert!(matches!(err, ConvertError::TableMetadata { .. }));
    }
}
