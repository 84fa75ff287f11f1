//! Conversion between [`DataFrame`](crate::frame::DataFrame)s and Arrow tables.
//!
//! - [`decode`]: `RecordBatch` -> DataFrame. Columns are shared, not copied.
//! - [`encode`]: DataFrame -> `RecordBatch`, one column per field.
//! - [`builder`]: builds the physical Arrow vector for a single field.
//!
//! Both directions carry `labels`/`config` column metadata and
//! `name`/`refId`/`meta` table metadata through [`crate::metadata`].

pub mod builder;
pub mod decode;
pub mod encode;
pub mod error;

pub use builder::build_vector;
pub use decode::{ArrowDataFrame, table_to_dataframe};
pub use encode::dataframe_to_table;
pub use error::ConvertError;
