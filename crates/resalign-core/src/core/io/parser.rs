use super::error::ParseErrorKind;
use crate::core::models::ddg::DdgRecord;
use crate::core::models::hpp::{HppRecord, PkHalf};
use crate::core::models::value::ReportedValue;

const DDG_FIELDS: usize = 5;
const HPP_FIELDS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportFormat {
    Ddg,
    Hpp,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParsedRecord {
    Ddg(DdgRecord),
    Hpp(HppRecord),
}

/// Turns single report lines into typed records.
pub struct RecordParser;

impl RecordParser {
    pub fn parse(format: ReportFormat, line: &str) -> Result<ParsedRecord, ParseErrorKind> {
        match format {
            ReportFormat::Ddg => Self::parse_ddg(line).map(ParsedRecord::Ddg),
            ReportFormat::Hpp => Self::parse_hpp(line).map(ParsedRecord::Hpp),
        }
    }

    /// Parses `chain wildtype residue_number mutant ddg`; extra trailing
    /// fields are ignored.
    pub fn parse_ddg(line: &str) -> Result<DdgRecord, ParseErrorKind> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < DDG_FIELDS {
            return Err(ParseErrorKind::TooFewFields {
                expected: DDG_FIELDS,
                found: fields.len(),
            });
        }

        let residue_number = fields[2]
            .parse::<i64>()
            .map_err(|_| ParseErrorKind::InvalidInt {
                field: "ResID",
                value: fields[2].to_string(),
            })?;
        let ddg_value = ReportedValue::parse(fields[4]).ok_or_else(|| {
            ParseErrorKind::InvalidFloat {
                field: "ddG",
                value: fields[4].to_string(),
            }
        })?;

        Ok(DdgRecord {
            chain: fields[0].to_string(),
            wildtype_residue: fields[1].to_string(),
            residue_number,
            mutant_residue: fields[3].to_string(),
            ddg_value,
        })
    }

    pub fn parse_hpp(line: &str) -> Result<HppRecord, ParseErrorKind> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        Self::parse_hpp_fields(&fields)
    }

    /// Builds an H++ record from `label pKint pK_(1/2)` fields.
    pub fn parse_hpp_fields<S: AsRef<str>>(fields: &[S]) -> Result<HppRecord, ParseErrorKind> {
        if fields.len() < HPP_FIELDS {
            return Err(ParseErrorKind::TooFewFields {
                expected: HPP_FIELDS,
                found: fields.len(),
            });
        }
        if fields.len() > HPP_FIELDS {
            return Err(ParseErrorKind::TooManyFields {
                expected: HPP_FIELDS,
                found: fields.len(),
            });
        }

        let label = fields[0].as_ref().trim();
        let pk_int_str = fields[1].as_ref().trim();
        let pk_half_str = fields[2].as_ref().trim();

        let pk_intrinsic =
            ReportedValue::parse(pk_int_str).ok_or_else(|| ParseErrorKind::InvalidFloat {
                field: "pKint",
                value: pk_int_str.to_string(),
            })?;

        Ok(HppRecord {
            residue_label: label.to_string(),
            pk_intrinsic,
            pk_half: Self::parse_pk_half(pk_half_str)?,
        })
    }

    fn parse_pk_half(text: &str) -> Result<PkHalf, ParseErrorKind> {
        if let Some(value) = ReportedValue::parse(text) {
            return Ok(PkHalf::Value(value));
        }
        let is_bound = text
            .strip_prefix(['>', '<'])
            .is_some_and(|rest| rest.parse::<f64>().is_ok());
        if is_bound {
            Ok(PkHalf::OutOfRange(text.to_string()))
        } else {
            Err(ParseErrorKind::InvalidPkHalf {
                value: text.to_string(),
            })
        }
    }
}
