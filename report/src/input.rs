use crate::error::{ReportError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// One data row from a benchmark results CSV.
///
/// Harness CSV reporters emit one row per aggregate (mean, median, stddev)
/// with many columns; only the case name and the throughput counter matter
/// here, and header-based deserialization skips the rest.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    /// Full benchmark case name as emitted by the harness
    pub name: String,
    /// Throughput sample in bytes per second
    pub bytes_per_second: f64,
}

/// Read all data rows from a results CSV file.
///
/// The header row must name at least `name` and `bytes_per_second`.
/// A file with a header but no data rows is rejected.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<RawRecord>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in rdr.deserialize() {
        let record: RawRecord = row?;
        records.push(record);
    }
    if records.is_empty() {
        return Err(ReportError::EmptyInput);
    }
    debug!("read {} data rows", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn reads_named_columns_and_ignores_the_rest() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "name,iterations,real_time,bytes_per_second").unwrap();
        writeln!(file, "BM_memcpy_suite::rust/4096,100,0.5,1000000000").unwrap();
        writeln!(file, "BM_memcpy_suite::rust/4096,100,0.5,1100000000").unwrap();
        file.flush().unwrap();

        let records = read_records(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "BM_memcpy_suite::rust/4096");
        assert_eq!(records[0].bytes_per_second, 1.0e9);
        assert_eq!(records[1].bytes_per_second, 1.1e9);
    }

    #[test]
    fn rejects_header_only_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "name,bytes_per_second").unwrap();
        file.flush().unwrap();

        let err = read_records(file.path()).unwrap_err();
        assert!(matches!(err, ReportError::EmptyInput));
    }

    #[test]
    fn missing_throughput_column_is_a_csv_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "name,iterations").unwrap();
        writeln!(file, "BM_memcpy_suite::rust/4096,100").unwrap();
        file.flush().unwrap();

        let err = read_records(file.path()).unwrap_err();
        assert!(matches!(err, ReportError::Csv(_)));
    }

    #[test]
    fn missing_file_is_a_csv_error() {
        let err = read_records("no/such/results.csv").unwrap_err();
        assert!(matches!(err, ReportError::Csv(_)));
    }
}
