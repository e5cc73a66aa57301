use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading a report format into memory.
///
/// Implementors parse the whole input in one pass; there is no partial or
/// streaming result.
pub trait ReportReader {
    /// The in-memory report produced by this format.
    type Report;

    /// Format-specific reading options.
    type Options: Default;

    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Reads a complete report from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if any line fails to parse or the reader fails.
    fn read_from(
        reader: &mut impl BufRead,
        options: &Self::Options,
    ) -> Result<Self::Report, Self::Error>;

    /// Reads a report from a file path.
    ///
    /// The file is opened, read to completion and closed before this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(
        path: P,
        options: &Self::Options,
    ) -> Result<Self::Report, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader, options)
    }
}

/// Defines the interface for rendering an in-memory report.
pub trait ReportWriter {
    /// The report type this format renders.
    type Report;

    /// The error type for write operations.
    type Error: Error + From<io::Error>;

    /// Writes a complete report to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(report: &Self::Report, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Writes a report to a file path, creating or truncating the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(report: &Self::Report, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(report, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
