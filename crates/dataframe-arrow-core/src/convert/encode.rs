//! DataFrame -> Arrow table.

use std::sync::Arc;

use arrow::{
    array::{RecordBatch, RecordBatchOptions},
    datatypes::{Field as ArrowField, Schema},
};
use snafu::prelude::*;

use crate::{
    convert::{
        builder::build_vector,
        error::{AssembleTableSnafu, ColumnMetadataSnafu, ConvertError, TableMetadataSnafu},
    },
    frame::DataFrame,
    metadata::{
        CONFIG_KEY, LABELS_KEY, META_KEY, MetadataMap, NAME_KEY, REF_ID_KEY, write_json,
        write_raw,
    },
};

/// Encode a DataFrame as an Arrow table.
///
/// Every field becomes one nullable column, built by [`build_vector`].
/// `labels` are written when present and `config` when non-empty; table
/// metadata gets `name`, `refId` and `meta` when set. Field names are passed
/// through as is, duplicates included.
///
/// The table row count is `frame.length`; fields of a different length make
/// the assembly fail.
pub fn dataframe_to_table(frame: &DataFrame) -> Result<RecordBatch, ConvertError> {
    let mut arrow_fields = Vec::with_capacity(frame.fields.len());
    let mut columns = Vec::with_capacity(frame.fields.len());

    for field in &frame.fields {
        let array = build_vector(field)?;

        let mut metadata = MetadataMap::new();
        write_json(&mut metadata, LABELS_KEY, field.labels.as_ref())
            .context(ColumnMetadataSnafu { column: &field.name })?;
        let config = (!field.config.is_empty()).then_some(&field.config);
        write_json(&mut metadata, CONFIG_KEY, config)
            .context(ColumnMetadataSnafu { column: &field.name })?;

        arrow_fields.push(
            ArrowField::new(field.name.clone(), array.data_type().clone(), true)
                .with_metadata(metadata),
        );
        columns.push(array);
    }

    let mut metadata = MetadataMap::new();
    write_raw(&mut metadata, NAME_KEY, frame.name.as_deref());
    write_raw(&mut metadata, REF_ID_KEY, frame.ref_id.as_deref());
    write_json(&mut metadata, META_KEY, frame.meta.as_ref()).context(TableMetadataSnafu)?;

    let schema = Arc::new(Schema::new(arrow_fields).with_metadata(metadata));
    let options = RecordBatchOptions::new().with_row_count(Some(frame.length));
    RecordBatch::try_new_with_options(schema, columns, &options).context(AssembleTableSnafu)
}

#[cfg(test)]
mod tests {
    use arrow::datatypes::DataType;

    use super::*;
    use crate::{
        frame::{Field, FieldType, Value},
        metadata::{FieldConfig, FrameMeta, Labels},
    };

    #[test]
    fn writes_columns_and_metadata() {
        let frame = DataFrame::new(vec![
            Field::new("v", FieldType::Number, vec![Value::Number(1.0)])
                .with_labels([("host", "a")].into_iter().collect::<Labels>())
                .with_config(FieldConfig::new().with("unit", "ms")),
        ])
        .with_name("cpu")
        .with_ref_id("A")
        .with_meta(FrameMeta::new().with("executedQueryString", "q"));

        let table = dataframe_to_table(&frame).unwrap();
        assert_eq!(table.num_rows(), 1);

        let schema = table.schema();
        assert_eq!(schema.metadata().get("name").map(String::as_str), Some("cpu"));
        assert_eq!(schema.metadata().get("refId").map(String::as_str), Some("A"));
        assert_eq!(
            schema.metadata().get("meta").map(String::as_str),
            Some(r#"{"executedQueryString":"q"}"#)
        );

        let field = schema.field(0);
        assert_eq!(field.data_type(), &DataType::Float64);
        assert_eq!(
            field.metadata().get("labels").map(String::as_str),
            Some(r#"{"host":"a"}"#)
        );
        assert_eq!(
            field.metadata().get("config").map(String::as_str),
            Some(r#"{"unit":"ms"}"#)
        );
    }

    #[test]
    fn absent_metadata_is_not_written() {
        let frame = DataFrame::new(vec![Field::new(
            "s",
            FieldType::String,
            vec![Value::from("x")],
        )]);
        let table = dataframe_to_table(&frame).unwrap();
        assert!(table.schema().metadata().is_empty());
        assert!(table.schema().field(0).metadata().is_empty());
    }

    #[test]
    fn duplicate_field_names_pass_through() {
        let frame = DataFrame::new(vec![
            Field::new("v", FieldType::Number, vec![Value::Number(1.0)]),
            Field::new("v", FieldType::Boolean, vec![Value::Boolean(true)]),
        ]);
        let table = dataframe_to_table(&frame).unwrap();
        assert_eq!(table.num_columns(), 2);
        assert_eq!(table.schema().field(0).name(), "v");
        assert_eq!(table.schema().field(1).name(), "v");
    }

    #[test]
    fn empty_frame_keeps_its_length() {
        let mut frame = DataFrame::new(vec![]).with_name("empty");
        frame.length = 4;
        let table = dataframe_to_table(&frame).unwrap();
        assert_eq!(table.num_columns(), 0);
        assert_eq!(table.num_rows(), 4);
    }

    #[test]
    fn mismatched_lengths_fail_assembly() {
        let frame = DataFrame::new(vec![
            Field::new("a", FieldType::Number, vec![Value::Number(1.0)]),
            Field::new("b", FieldType::Number, vec![Value::Number(1.0), Value::Null]),
        ]);
        let err = dataframe_to_table(&frame).unwrap_err();
        assert!(matches!(err, ConvertError::AssembleTable { .. }));
    }
}
