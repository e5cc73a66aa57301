//! Shared CSV plumbing for every table the crate writes.

use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Builds the CSV writer used for all output tables.
///
/// Writers are flexible because several formats put a header line with a
/// different field count above the data rows.
pub fn csv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_writer(writer)
}

pub fn csv_reader<R: io::Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader)
}

/// Writes already-rendered rows to `writer`.
pub fn write_rows<W, R, F>(writer: W, rows: R) -> Result<(), csv::Error>
where
    W: Write,
    R: IntoIterator<Item = Vec<F>>,
    F: AsRef<[u8]>,
{
    let mut csv = csv_writer(writer);
    for row in rows {
        csv.write_record(&row)?;
    }
    csv.flush()?;
    Ok(())
}

pub fn write_rows_to_path<P, R, F>(path: P, rows: R) -> Result<(), csv::Error>
where
    P: AsRef<Path>,
    R: IntoIterator<Item = Vec<F>>,
    F: AsRef<[u8]>,
{
    let file = File::create(path)?;
    write_rows(BufWriter::new(file), rows)
}

/// Writes a fixed header line followed by one serialized row per item.
pub fn write_table<W, H, T>(writer: W, header: &[H], rows: &[T]) -> Result<(), csv::Error>
where
    W: Write,
    H: AsRef<[u8]>,
    T: Serialize,
{
    let mut csv = csv_writer(writer);
    csv.write_record(header)?;
    for row in rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

pub fn write_table_to_path<P, H, T>(path: P, header: &[H], rows: &[T]) -> Result<(), csv::Error>
where
    P: AsRef<Path>,
    H: AsRef<[u8]>,
    T: Serialize,
{
    let file = File::create(path)?;
    write_table(BufWriter::new(file), header, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_rows_allows_differing_field_counts() {
        let mut out = Vec::new();
        write_rows(
            &mut out,
            vec![vec!["residue", "a", "b", "(note)"], vec!["1", "2", "3"]],
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "residue,a,b,(note)\n1,2,3\n");
    }

    #[test]
    fn write_rows_keeps_empty_fields_positional() {
        let mut out = Vec::new();
        write_rows(&mut out, vec![vec!["", "", "", "LYS-3", "1", "2"]]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), ",,,LYS-3,1,2\n");
    }

    #[derive(Serialize)]
    struct Row {
        residue: u32,
        mean: f64,
    }

    #[test]
    fn write_table_serializes_rows_under_a_fixed_header() {
        let mut out = Vec::new();
        let rows = [
            Row {
                residue: 1,
                mean: 3.0,
            },
            Row {
                residue: 2,
                mean: -0.25,
            },
        ];
        write_table(&mut out, &["residue", "mean_ddG"], &rows).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "residue,mean_ddG\n1,3.0\n2,-0.25\n"
        );
    }

    #[test]
    fn write_rows_to_path_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_rows_to_path(&path, vec![vec!["x".to_string(), "y".to_string()]]).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "x,y\n");
    }
}
