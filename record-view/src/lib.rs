//! A windowed page cache for rendering huge record sets in a virtualized grid.
//!
//! For an Arrow IPC codec and in-memory record sets, see the `record-view-arrow` crate.
//!
//! The dataset is reached only through a narrow asynchronous contract ([`RecordSet`]): a row
//! count, schema bytes, and a function fetching any row range as bytes. Decoding is delegated
//! to a [`Codec`]. This crate decides which fixed-size pages to fetch for the visible rows
//! (plus overscan), keeps only the pages of the current window resident, and exposes a
//! synchronous, possibly-incomplete read path to the rendering layer.
//!
//! It is UI-agnostic. A grid/table layer is expected to:
//! - call [`WindowedRecordView::set_visible_range`] whenever the visible rows change
//! - call [`WindowedRecordView::process_ready`] each frame (or await
//!   [`WindowedRecordView::settle`]) so resolved fetches are applied
//! - read cells with [`WindowedRecordView::cell_value`], rendering `None` as a blank cell
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod addressing;
mod error;
mod key;
mod options;
mod scheduler;
mod source;
mod state;
mod store;
mod types;
mod view;


pub use addressing::{DEFAULT_BATCH_SIZE, DEFAULT_OVERSCAN, PageLayout};
pub use error::ViewError;
pub use options::{OnChangeCallback, ViewOptions};
pub use scheduler::FetchScheduler;
pub use source::{Codec, PageData, RecordSet, RowsFuture};
pub use state::ViewStats;
pub use store::PageStore;
pub use types::{Column, PageEvent, PageIndex, PageWindow, Resolution, RowRange};
pub use view::{CellValue, WindowedRecordView};
