//! # Core Module
//!
//! Stateless building blocks shared by the engine and the workflows.
//!
//! - **Record Models** ([`models`]) - DDG and H++ records, residue keys and
//!   the dense residue-indexed container
//! - **File I/O** ([`io`]) - Text report parsing, report terminators, CSV
//!   reading and writing, and filename list handling
//!
//! Numeric fields keep the text they were read from, so a record written
//! back out reproduces its input verbatim.

pub mod io;
pub mod models;
