//! Arrow IPC support for the `record-view` crate.
//!
//! The `record-view` crate only knows record sets and codecs as traits. This crate provides:
//!
//! - [`ArrowIpcCodec`]: decodes schema and row bytes written in the Arrow IPC streaming format
//! - [`BatchRecordSet`]: serves row ranges of in-memory `RecordBatch`es as Arrow IPC bytes
//!
//! Together they are enough to drive a [`record_view::WindowedRecordView`] over any data that
//! can be collected into record batches.
#![forbid(unsafe_code)]

mod codec;
mod error;
mod record_set;


pub use codec::{ArrowCell, ArrowIpcCodec, ArrowPage};
pub use error::RecordSetError;
pub use record_set::BatchRecordSet;

/// A windowed view over Arrow IPC data.
pub type ArrowRecordView<R> = record_view::WindowedRecordView<R, ArrowIpcCodec>;
