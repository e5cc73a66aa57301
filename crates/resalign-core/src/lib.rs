//! # resalign Core Library
//!
//! Parsing, residue alignment and per-residue statistics for protein
//! mutation-scan (DDG) reports and H++ pKa reports.
//!
//! ## Architecture
//!
//! The library follows a three-layer layout.
//!
//! - **[`core`]: The Foundation.** Record models ([`core::models`]) such as
//!   `DdgRecord`, `HppRecord` and the `ResidueKey` extracted from residue
//!   labels, plus readers and writers for the text and CSV report formats
//!   ([`core::io`]).
//!
//! - **[`engine`]: The Logic Core.** Residue-indexed binning for means and
//!   significance counts, multi-table alignment, differences between mean
//!   series, the analysis configuration and progress reporting.
//!
//! - **[`workflows`]: The Public API.** Complete operations that read report
//!   files, drive the engine and write the resulting CSV tables.

pub mod core;
pub mod engine;
pub mod workflows;
