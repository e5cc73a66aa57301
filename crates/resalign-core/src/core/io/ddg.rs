use super::error::ReportError;
use super::parser::RecordParser;
use super::tabular;
use super::traits::{ReportReader, ReportWriter};
use crate::core::models::ddg::DdgRecord;
use crate::core::models::record::ResidueRecord;
use std::io::{BufRead, Write};

pub const DDG_CSV_HEADER: [&str; 5] = [
    "#chain",
    "WT",
    "ResID",
    "Mut",
    "ddG_(kcal/mol;_>0_is_stable;_<0 is unstable)",
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DdgReport {
    pub records: Vec<DdgRecord>,
}

/// Whitespace-delimited DDG text report: one header line, then one mutation
/// per line.
pub struct DdgTextReport;

impl ReportReader for DdgTextReport {
    type Report = DdgReport;
    type Options = ();
    type Error = ReportError;

    fn read_from(reader: &mut impl BufRead, _options: &()) -> Result<DdgReport, ReportError> {
        let mut records = Vec::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            if line_num == 1 || line.trim().is_empty() {
                continue;
            }
            let record = RecordParser::parse_ddg(&line)
                .map_err(|kind| ReportError::malformed(line_num, kind))?;
            record
                .residue_key()
                .map_err(|source| ReportError::ResidueKey {
                    line: line_num,
                    source,
                })?;
            records.push(record);
        }

        Ok(DdgReport { records })
    }
}

/// DDG CSV output with the fixed `#chain,WT,ResID,Mut,ddG_...` header.
pub struct DdgCsv;

impl ReportWriter for DdgCsv {
    type Report = DdgReport;
    type Error = ReportError;

    fn write_to(report: &DdgReport, writer: &mut impl Write) -> Result<(), ReportError> {
        let mut csv = tabular::csv_writer(writer);
        csv.write_record(DDG_CSV_HEADER)?;
        for record in &report.records {
            csv.write_record(record.csv_fields())?;
        }
        csv.flush()?;
        Ok(())
    }
}
