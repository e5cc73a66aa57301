use super::error::ReportError;
use super::parser::RecordParser;
use super::tabular;
use super::terminator::TerminatorPolicy;
use super::traits::{ReportReader, ReportWriter};
use crate::core::models::hpp::HppRecord;
use crate::core::models::record::ResidueRecord;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

pub const HPP_CSV_COLUMNS: [&str; 3] = ["Residue", "pKint", "pK_(1/2)"];

const DEFAULT_PREAMBLE_LINES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HppParseOptions {
    /// Title and header lines preceding the first data row.
    pub preamble_lines: usize,
    pub terminator: TerminatorPolicy,
}

impl Default for HppParseOptions {
    fn default() -> Self {
        Self {
            preamble_lines: DEFAULT_PREAMBLE_LINES,
            terminator: TerminatorPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HppReport {
    /// Table name written into the CSV title line.
    pub name: String,
    pub records: Vec<HppRecord>,
    /// CSV header rows as read, when the report came from an H++ CSV.
    pub preamble: Option<Vec<Vec<String>>>,
}

impl HppReport {
    /// Renames the table. A stored title row gets the new name in its
    /// second field; every other header field is left untouched.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        if let Some(title) = self.preamble.as_mut().and_then(|rows| rows.first_mut()) {
            if title.len() < 2 {
                title.resize(2, String::new());
            }
            title[1] = self.name.clone();
        }
        self
    }

    /// The two CSV lines that precede the data rows, split into fields.
    ///
    /// Header rows read from a CSV are returned verbatim; otherwise the
    /// title `,<name>,` and [`HPP_CSV_COLUMNS`] are generated.
    pub fn csv_preamble(&self) -> Vec<Vec<String>> {
        match &self.preamble {
            Some(rows) => rows.clone(),
            None => vec![
                vec![String::new(), self.name.clone(), String::new()],
                HPP_CSV_COLUMNS.iter().map(|c| c.to_string()).collect(),
            ],
        }
    }
}

/// H++ text report: a title and header line, then `label pKint pK_(1/2)` rows
/// until the end-of-data condition chosen by [`TerminatorPolicy`].
pub struct HppTextReport;

impl ReportReader for HppTextReport {
    type Report = HppReport;
    type Options = HppParseOptions;
    type Error = ReportError;

    fn read_from(
        reader: &mut impl BufRead,
        options: &HppParseOptions,
    ) -> Result<HppReport, ReportError> {
        let mut terminator = options.terminator.terminator();
        let mut records = Vec::new();
        let mut terminated = false;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            if line_num <= options.preamble_lines {
                continue;
            }
            let Some(label) = line.split_whitespace().next() else {
                continue;
            };
            if terminator.is_end(label) {
                debug!("End of H++ data marked by '{}' on line {}.", label, line_num);
                terminated = true;
                break;
            }

            let record = RecordParser::parse_hpp(&line)
                .map_err(|kind| ReportError::malformed(line_num, kind))?;
            record
                .residue_key()
                .map_err(|source| ReportError::ResidueKey {
                    line: line_num,
                    source,
                })?;
            records.push(record);
        }

        if !terminated && terminator.expects_marker() {
            warn!(
                "H++ report ended without its footer marker; read {} record(s) up to end of input.",
                records.len()
            );
        }

        Ok(HppReport {
            name: String::new(),
            records,
            preamble: None,
        })
    }
}

/// H++ CSV as written by [`HppCsv::write_to`]: `,<name>,`, the column header,
/// then one record per row.
pub struct HppCsv;

impl ReportReader for HppCsv {
    type Report = HppReport;
    type Options = ();
    type Error = ReportError;

    fn read_from(reader: &mut impl BufRead, _options: &()) -> Result<HppReport, ReportError> {
        let mut csv = tabular::csv_reader(reader);
        let mut rows = csv.records();

        let title = rows
            .next()
            .ok_or_else(|| ReportError::MissingRecord("H++ CSV title line".into()))??;
        let header = rows
            .next()
            .ok_or_else(|| ReportError::MissingRecord("H++ CSV column header".into()))??;
        let name = title.get(1).unwrap_or("").trim().to_string();
        let preamble: Vec<Vec<String>> = [&title, &header]
            .into_iter()
            .map(|row| row.iter().map(str::to_string).collect())
            .collect();

        let mut records = Vec::new();
        for row in rows {
            let row = row?;
            let line_num = row.position().map_or(0, |p| p.line() as usize);
            let fields: Vec<&str> = row.iter().collect();

            let record = RecordParser::parse_hpp_fields(&fields)
                .map_err(|kind| ReportError::malformed(line_num, kind))?;
            record
                .residue_key()
                .map_err(|source| ReportError::ResidueKey {
                    line: line_num,
                    source,
                })?;
            records.push(record);
        }

        Ok(HppReport {
            name,
            records,
            preamble: Some(preamble),
        })
    }
}

impl ReportWriter for HppCsv {
    type Report = HppReport;
    type Error = ReportError;

    fn write_to(report: &HppReport, writer: &mut impl Write) -> Result<(), ReportError> {
        let mut csv = tabular::csv_writer(writer);
        for line in report.csv_preamble() {
            csv.write_record(&line)?;
        }
        for record in &report.records {
            csv.write_record(record.csv_fields())?;
        }
        csv.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::error::ParseErrorKind;
    use crate::core::models::hpp::PkHalf;
    use crate::core::models::residue_key::ResidueKeyError;
    use std::io::Cursor;

    const REPORT: &str = "\
pKa summary for 1abc
Residue      pKint     pK_(1/2)
NTMET-1      7.208     7.715
LYS-3       10.176    >12.000
GLU-18       4.965     4.857
CTLYS-313    4.524     1.716
NTMET-1      0.000     0.000
LYS-3        9.999     9.999
";

    fn read(text: &str, options: HppParseOptions) -> Result<HppReport, ReportError> {
        HppTextReport::read_from(&mut Cursor::new(text), &options)
    }

    #[test]
    fn read_from_stops_at_repeated_first_label() {
        let report = read(REPORT, HppParseOptions::default()).unwrap();
        let labels: Vec<_> = report
            .records
            .iter()
            .map(|r| r.residue_label.as_str())
            .collect();
        assert_eq!(labels, vec!["NTMET-1", "LYS-3", "GLU-18", "CTLYS-313"]);
        assert_eq!(
            report.records[1].pk_half,
            PkHalf::OutOfRange(">12.000".to_string())
        );
    }

    #[test]
    fn read_from_with_end_of_input_policy_reads_everything() {
        let options = HppParseOptions {
            terminator: TerminatorPolicy::EndOfInput,
            ..Default::default()
        };
        assert_eq!(read(REPORT, options).unwrap().records.len(), 6);
    }

    #[test]
    fn read_from_accepts_missing_footer_marker() {
        let text = "title\nheader\nLYS-3 10.1 9.5\nGLU-18 4.9 4.8\n";
        let report = read(text, HppParseOptions::default()).unwrap();
        assert_eq!(report.records.len(), 2);
    }

    #[test]
    fn read_from_honours_configured_preamble_length() {
        let text = "header\nLYS-3 10.1 9.5\n";
        let options = HppParseOptions {
            preamble_lines: 1,
            ..Default::default()
        };
        assert_eq!(read(text, options).unwrap().records.len(), 1);
    }

    #[test]
    fn read_from_reports_line_of_malformed_record() {
        let text = "title\nheader\nLYS-3 10.1 9.5\nGLU-18 4.9\n";
        match read(text, HppParseOptions::default()).unwrap_err() {
            ReportError::MalformedRecord { line, kind } => {
                assert_eq!(line, 4);
                assert_eq!(
                    kind,
                    ParseErrorKind::TooFewFields {
                        expected: 3,
                        found: 2
                    }
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn read_from_rejects_label_without_residue_number() {
        let text = "title\nheader\nLIGAND 10.1 9.5\n";
        match read(text, HppParseOptions::default()).unwrap_err() {
            ReportError::ResidueKey { line, source } => {
                assert_eq!(line, 3);
                assert!(matches!(source, ResidueKeyError::NoResidueNumber { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn write_to_renders_named_title_and_column_header() {
        let report = read(REPORT, HppParseOptions::default())
            .unwrap()
            .with_name("1abc");
        let mut out = Vec::new();
        HppCsv::write_to(&report, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            ",1abc,\n\
             Residue,pKint,pK_(1/2)\n\
             NTMET-1,7.208,7.715\n\
             LYS-3,10.176,>12.000\n\
             GLU-18,4.965,4.857\n\
             CTLYS-313,4.524,1.716\n"
        );
    }

    #[test]
    fn csv_reader_recovers_name_and_records_written_by_csv_writer() {
        let report = read(REPORT, HppParseOptions::default())
            .unwrap()
            .with_name("1abc");
        let mut out = Vec::new();
        HppCsv::write_to(&report, &mut out).unwrap();

        let reread = HppCsv::read_from(&mut Cursor::new(out), &()).unwrap();
        assert_eq!(reread.name, report.name);
        assert_eq!(reread.records, report.records);
        assert_eq!(reread.csv_preamble(), report.csv_preamble());
    }

    #[test]
    fn csv_reader_keeps_header_rows_verbatim() {
        let text = "Run 7,1abc,pH 7.0\nRes,pKa_int,pK_half\nLYS-3,10.1,9.5\n";
        let report = HppCsv::read_from(&mut Cursor::new(text), &()).unwrap();
        assert_eq!(report.name, "1abc");
        assert_eq!(
            report.csv_preamble(),
            vec![
                vec!["Run 7", "1abc", "pH 7.0"],
                vec!["Res", "pKa_int", "pK_half"],
            ]
        );

        let mut out = Vec::new();
        HppCsv::write_to(&report, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), text);
    }

    #[test]
    fn renaming_a_csv_report_only_replaces_the_title_name() {
        let text = ",,\nRes,pKa_int,pK_half\nLYS-3,10.1,9.5\n";
        let report = HppCsv::read_from(&mut Cursor::new(text), &())
            .unwrap()
            .with_name("derived");
        assert_eq!(
            report.csv_preamble(),
            vec![vec!["", "derived", ""], vec!["Res", "pKa_int", "pK_half"]]
        );
    }

    #[test]
    fn readers_reject_residue_numbers_above_the_key_range() {
        let text = "title\nheader\nLYS-3 10.1 9.5\nLYS-2000000 4.9 4.8\n";
        match read(text, HppParseOptions::default()).unwrap_err() {
            ReportError::ResidueKey { line, source } => {
                assert_eq!(line, 4);
                assert!(matches!(source, ResidueKeyError::OutOfRange { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let csv = ",x,\nResidue,pKint,pK_(1/2)\nLYS-99999999999,10.1,9.5\n";
        match HppCsv::read_from(&mut Cursor::new(csv), &()).unwrap_err() {
            ReportError::ResidueKey { line, source } => {
                assert_eq!(line, 3);
                assert!(matches!(source, ResidueKeyError::OutOfRange { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn csv_reader_requires_both_preamble_lines() {
        let result = HppCsv::read_from(&mut Cursor::new(",1abc,\n"), &());
        assert!(matches!(result, Err(ReportError::MissingRecord(_))));
    }

    #[test]
    fn csv_reader_reports_line_of_bad_row() {
        let text = ",x,\nResidue,pKint,pK_(1/2)\nLYS-3,10.1,9.5\nGLU-18,oops,4.8\n";
        match HppCsv::read_from(&mut Cursor::new(text), &()).unwrap_err() {
            ReportError::MalformedRecord { line, .. } => assert_eq!(line, 4),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
