//! Data models for residue-keyed report records.
//!
//! Records are produced by the report readers in [`crate::core::io`] and are
//! immutable once created. [`ResidueKey`](residue_key::ResidueKey) is the
//! shared grouping and alignment key, and [`ResidueIndexed`](indexed::ResidueIndexed)
//! is the dense container the engine builds on top of it.

pub mod ddg;
pub mod hpp;
pub mod indexed;
pub mod record;
pub mod residue_key;
pub mod value;
