use std::sync::Arc;

use arrow::datatypes::{Schema, SchemaRef};
use arrow::error::ArrowError;
use arrow::ipc::writer::{DictionaryTracker, IpcDataGenerator, IpcWriteOptions, write_message};
use arrow::record_batch::RecordBatch;
use futures::FutureExt;
use futures::future;
use record_view::{RecordSet, RowRange, RowsFuture};

use crate::RecordSetError;

/// An in-memory record set made of record batches sharing one schema.
///
/// Schema bytes are a single Arrow IPC schema message. Row bytes are the IPC dictionary and
/// record batch messages for the slices of every batch overlapping the requested range, so
/// that `schema ++ rows` reads as an IPC stream.
#[derive(Clone, Debug)]
pub struct BatchRecordSet {
    schema: SchemaRef,
    batches: Vec<RecordBatch>,
    num_rows: usize,
    schema_bytes: Vec<u8>,
}

impl BatchRecordSet {
    pub fn new(schema: SchemaRef, batches: Vec<RecordBatch>) -> Result<Self, RecordSetError> {
        if let Some(index) = batches.iter().position(|b| b.schema() != schema) {
            return Err(RecordSetError::SchemaMismatch { index });
        }
        let num_rows = batches.iter().map(RecordBatch::num_rows).sum();
        let schema_bytes = encode_schema(&schema)?;
        Ok(Self {
            schema,
            batches,
            num_rows,
            schema_bytes,
        })
    }

    /// A record set with no columns and no rows.
    pub fn empty() -> Result<Self, RecordSetError> {
        let schema: SchemaRef = Arc::new(Schema::empty());
        Self::new(Arc::clone(&schema), vec![RecordBatch::new_empty(schema)])
    }

    pub fn schema(&self) -> &SchemaRef {
        &self.schema
    }

    pub fn batches(&self) -> &[RecordBatch] {
        &self.batches
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// The IPC schema message.
    pub fn encode_schema(&self) -> &[u8] {
        &self.schema_bytes
    }

    /// Encodes rows `rows.start..rows.end` as IPC record batch messages.
    ///
    /// A range spanning several batches yields one message per overlapping batch, each preceded
    /// by the dictionary batches it needs. No schema message and no end-of-stream marker are
    /// written.
    pub fn encode_rows(&self, rows: RowRange) -> Result<Vec<u8>, RecordSetError> {
        if rows.start > rows.end || rows.end > self.num_rows {
            return Err(RecordSetError::RowsOutOfRange {
                start: rows.start,
                end: rows.end,
                num_rows: self.num_rows,
            });
        }

        let options = IpcWriteOptions::default();
        let generator = IpcDataGenerator::default();
        let mut tracker = DictionaryTracker::new(false);
        let mut buffer = Vec::new();
        let mut offset = 0;
        for batch in &self.batches {
            let batch_rows = RowRange::new(offset, offset + batch.num_rows());
            offset = batch_rows.end;
            if batch_rows.end <= rows.start {
                continue;
            }
            if batch_rows.start >= rows.end {
                break;
            }
            let start = rows.start.max(batch_rows.start) - batch_rows.start;
            let end = rows.end.min(batch_rows.end) - batch_rows.start;
            let slice = batch.slice(start, end - start);

            let (dictionaries, encoded) =
                generator.encoded_batch(&slice, &mut tracker, &options)?;
            for dictionary in dictionaries {
                write_message(&mut buffer, dictionary, &options)?;
            }
            write_message(&mut buffer, encoded, &options)?;
        }
        Ok(buffer)
    }
}

impl TryFrom<Vec<RecordBatch>> for BatchRecordSet {
    type Error = RecordSetError;

    /// Uses the schema of the first batch, or an empty schema when there are no batches.
    fn try_from(batches: Vec<RecordBatch>) -> Result<Self, Self::Error> {
        let schema = batches
            .first()
            .map_or_else(|| Arc::new(Schema::empty()), RecordBatch::schema);
        Self::new(schema, batches)
    }
}

impl RecordSet for BatchRecordSet {
    type Error = RecordSetError;

    fn schema_bytes(&self) -> &[u8] {
        &self.schema_bytes
    }

    fn num_rows(&self) -> usize {
        self.num_rows
    }

    fn get_rows(&self, rows: RowRange) -> RowsFuture<RecordSetError> {
        future::ready(self.encode_rows(rows)).boxed_local()
    }
}

fn encode_schema(schema: &Schema) -> Result<Vec<u8>, ArrowError> {
    let options = IpcWriteOptions::default();
    let generator = IpcDataGenerator::default();
    let mut tracker = DictionaryTracker::new(false);
    let encoded =
        generator.schema_to_bytes_with_dictionary_tracker(schema, &mut tracker, &options);

    let mut buffer = Vec::new();
    write_message(&mut buffer, encoded, &options)?;
    Ok(buffer)
}
