use alloc::vec::Vec;
use core::fmt;

use futures::future::LocalBoxFuture;

use crate::{Column, RowRange};

/// Future returned by [`RecordSet::get_rows`].
pub type RowsFuture<E> = LocalBoxFuture<'static, Result<Vec<u8>, E>>;

/// An immutable, row-addressable dataset reachable only through serialized bytes.
///
/// `get_rows` may be called while earlier calls are still pending, and the returned futures
/// may resolve in any order. The view never requests rows past `num_rows()`.
pub trait RecordSet {
    /// Only ever logged; a failed fetch leaves its page absent.
    type Error: fmt::Display + 'static;

    fn schema_bytes(&self) -> &[u8];

    fn num_rows(&self) -> usize;

    /// Fetches rows `rows.start..rows.end` as bytes decodable together with `schema_bytes()`.
    ///
    /// The future must not borrow `self`: it is parked inside the view until it resolves.
    fn get_rows(&self, rows: RowRange) -> RowsFuture<Self::Error>;
}

/// Decoded content of one page.
pub trait PageData {
    type Value;

    fn num_rows(&self) -> usize;

    /// The value at `(row, column)` where `row` is relative to the page start.
    fn value(&self, row: usize, column: usize) -> Option<Self::Value>;
}

/// Turns schema and row bytes into columns and pages.
pub trait Codec {
    type Page: PageData;
    type Error: fmt::Display;

    fn decode_schema(&self, schema: &[u8]) -> Result<Vec<Column>, Self::Error>;

    fn decode_page(&self, schema: &[u8], rows: &[u8]) -> Result<Self::Page, Self::Error>;
}
