use std::fmt;
use std::io::Read;

use arrow::array::{Array, ArrayRef};
use arrow::compute::concat_batches;
use arrow::datatypes::DataType;
use arrow::error::ArrowError;
use arrow::ipc::reader::StreamReader;
use arrow::record_batch::RecordBatch;
use arrow::util::display::array_value_to_string;
use record_view::{Codec, Column, PageData};

/// Decodes Arrow IPC streaming-format bytes.
///
/// Schema bytes must hold the stream's schema message; row bytes hold the messages that follow
/// it (dictionary and record batches). A page is the concatenation of every record batch in the
/// row bytes.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArrowIpcCodec;

impl Codec for ArrowIpcCodec {
    type Page = ArrowPage;
    type Error = ArrowError;

    fn decode_schema(&self, schema: &[u8]) -> Result<Vec<Column>, ArrowError> {
        let reader = StreamReader::try_new(schema, None)?;
        Ok(reader
            .schema()
            .fields()
            .iter()
            .map(|field| Column::new(field.name().as_str()))
            .collect())
    }

    fn decode_page(&self, schema: &[u8], rows: &[u8]) -> Result<ArrowPage, ArrowError> {
        let reader = StreamReader::try_new(schema.chain(rows), None)?;
        let schema = reader.schema();
        let mut batches = reader.collect::<Result<Vec<_>, _>>()?;
        let batch = if batches.len() == 1 {
            batches.remove(0)
        } else {
            concat_batches(&schema, &batches)?
        };
        Ok(ArrowPage(batch))
    }
}

/// One decoded page of rows.
#[derive(Clone, Debug)]
pub struct ArrowPage(pub RecordBatch);

impl ArrowPage {
    pub fn batch(&self) -> &RecordBatch {
        &self.0
    }
}

impl PageData for ArrowPage {
    type Value = ArrowCell;

    fn num_rows(&self) -> usize {
        self.0.num_rows()
    }

    fn value(&self, row: usize, column: usize) -> Option<ArrowCell> {
        if row >= self.0.num_rows() || column >= self.0.num_columns() {
            return None;
        }
        Some(ArrowCell {
            array: self.0.column(column).slice(row, 1),
        })
    }
}

/// A single cell: a one-row slice of its column.
///
/// `Display` renders the value the way Arrow's pretty printer does; nulls render as an empty
/// string.
#[derive(Clone, Debug)]
pub struct ArrowCell {
    array: ArrayRef,
}

impl ArrowCell {
    /// The one-row array backing this cell. Use `arrow::array::AsArray` to read typed values.
    pub fn array(&self) -> &ArrayRef {
        &self.array
    }

    pub fn data_type(&self) -> &DataType {
        self.array.data_type()
    }

    pub fn is_null(&self) -> bool {
        self.array.is_null(0)
    }
}

impl fmt::Display for ArrowCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return Ok(());
        }
        let s = array_value_to_string(self.array.as_ref(), 0).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}
