use crate::identifier::CaseKey;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Unrecognized benchmark name: {0}")]
    MalformedIdentifier(String),

    #[error("Expected a multiple of 3 data rows (mean, median, stddev), got {0}")]
    TruncatedInput(usize),

    #[error("Aggregate rows disagree at data row {row}: case began as {expected}, found {found}")]
    MismatchedCase {
        row: usize,
        expected: CaseKey,
        found: CaseKey,
    },

    #[error("Duplicate benchmark case: {0}")]
    DuplicateCase(CaseKey),

    #[error("No benchmark case for method {method} at size {size} bytes")]
    MissingDataPoint { method: String, size: u64 },

    #[error("No byte-size label for {0} bytes (1 GiB and above is out of range)")]
    SizeOutOfRange(u64),

    #[error("No data rows found in input")]
    EmptyInput,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
