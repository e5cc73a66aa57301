//! # Engine Module
//!
//! The residue-keyed algorithms that sit between report parsing and output.
//!
//! ## Overview
//!
//! Every operation here works on records already parsed by [`crate::core::io`]
//! and keyed by [`ResidueKey`](crate::core::models::residue_key::ResidueKey).
//! Working structures are dense, key-addressed containers sized to the largest
//! residue seen, so grouping and alignment stay linear in the input size.
//!
//! ## Architecture
//!
//! - **Binning** ([`binning`]) - Per-residue means and significance-threshold counts
//! - **Alignment** ([`aligner`]) - Merging N residue tables into one column-stable table
//! - **Differences** ([`difference`]) - Elementwise subtraction of residue-ordered series
//! - **Configuration** ([`config`]) - Analysis parameters and their builder
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - The engine error taxonomy
//!
//! Every operation is all-or-nothing: a failure anywhere in an invocation
//! yields an error and no partial result.

pub mod aligner;
pub mod binning;
pub mod config;
pub mod difference;
pub mod error;
pub mod progress;
