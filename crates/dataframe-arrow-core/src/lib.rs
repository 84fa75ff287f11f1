//! Core engine for converting semantic DataFrames to and from Arrow tables.
//!
//! This crate provides the foundational pieces for `dataframe-arrow`:
//!
//! - A language-level tabular model: `DataFrame`, `Field`, the closed
//!   `FieldType` set and lazily read `FieldValues` (`frame` module).
//! - The mapping between Arrow physical types and semantic field types,
//!   with structured reporting of unrecognized columns (`type_mapper` module).
//! - A JSON side-channel codec for `labels`, `config`, `name`, `refId` and
//!   `meta` stored in Arrow metadata maps (`metadata` module).
//! - Bidirectional, metadata-preserving table conversion and the per-field
//!   vector builder (`convert` module).
//! - Base64 Arrow IPC payloads and the multi-result response envelope
//!   (`transport` module).
//!
//! All operations are synchronous and pure: each call reads its input and
//! returns a new, independently owned value. Decoded fields share column
//! storage with the source table through `Arc`.
#![deny(missing_docs)]
pub mod convert;
pub mod frame;
pub mod metadata;
pub mod transport;
pub mod type_mapper;
