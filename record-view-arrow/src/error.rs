use arrow::error::ArrowError;

/// Errors raised by [`crate::BatchRecordSet`].
#[derive(Debug, thiserror::Error)]
pub enum RecordSetError {
    #[error("batch {index} does not match the record set schema")]
    SchemaMismatch { index: usize },
    #[error("rows {start}..{end} are outside 0..{num_rows}")]
    RowsOutOfRange {
        start: usize,
        end: usize,
        num_rows: usize,
    },
    #[error(transparent)]
    Arrow(#[from] ArrowError),
}
