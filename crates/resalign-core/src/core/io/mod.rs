//! Reading and writing of DDG and H++ reports.
//!
//! Text reports are parsed line by line through [`parser::RecordParser`] and
//! rendered back out as CSV. All readers implement [`traits::ReportReader`]
//! and build the complete report in memory before returning; writers only
//! run once a result is fully constructed.

pub mod ddg;
pub mod error;
pub mod filenames;
pub mod hpp;
pub mod parser;
pub mod tabular;
pub mod terminator;
pub mod traits;
