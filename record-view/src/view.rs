use alloc::vec::Vec;
use core::future::poll_fn;
use core::task::{Context, Poll};

use crate::state::Counters;
use crate::{
    Codec, Column, FetchScheduler, PageData, PageEvent, PageLayout, PageStore, PageWindow,
    RecordSet, Resolution, RowRange, ViewError, ViewOptions, ViewStats,
};

/// The value type produced by a codec's pages.
pub type CellValue<C> = <<C as Codec>::Page as PageData>::Value;

/// A synchronous, windowed view over an asynchronous [`RecordSet`].
///
/// This type is intentionally UI-agnostic:
/// - Reads (`cell_value*`) never block and never fetch. A cell whose page is not resident
///   reads as `None`.
/// - `set_visible_range` is the only operation that starts fetches or evicts pages.
/// - Fetches resolve on the owner's thread, when the owner drives them via `process_ready`
///   (non-blocking, once per frame) or `settle` / `next_resolution` (async).
///
/// Pending fetches are `!Send` boxed futures, so a view stays on the thread that created it.
pub struct WindowedRecordView<R: RecordSet, C: Codec> {
    record_set: R,
    codec: C,
    options: ViewOptions,
    columns: Vec<Column>,
    num_rows: usize,
    store: PageStore<C::Page>,
    scheduler: FetchScheduler<R::Error>,
}

impl<R: RecordSet, C: Codec> WindowedRecordView<R, C> {
    /// Creates a view over `record_set`. No rows are fetched until `set_visible_range`.
    ///
    /// Decodes the column list once from the record set's schema bytes.
    pub fn new(
        record_set: R,
        codec: C,
        options: ViewOptions,
    ) -> Result<Self, ViewError<C::Error>> {
        if options.layout.batch_size == 0 {
            return Err(ViewError::ZeroBatchSize);
        }
        let columns = codec
            .decode_schema(record_set.schema_bytes())
            .map_err(ViewError::Schema)?;
        let num_rows = record_set.num_rows();
        rdebug!(
            num_rows,
            columns = columns.len(),
            batch_size = options.layout.batch_size,
            overscan = options.layout.overscan,
            "WindowedRecordView::new"
        );
        Ok(Self {
            scheduler: FetchScheduler::new(options.layout, num_rows),
            store: PageStore::new(),
            record_set,
            codec,
            options,
            columns,
            num_rows,
        })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn layout(&self) -> PageLayout {
        self.options.layout
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    pub fn record_set(&self) -> &R {
        &self.record_set
    }

    /// The page window requested by the latest `set_visible_range`.
    pub fn window(&self) -> PageWindow {
        self.scheduler.window()
    }

    pub fn pages(&self) -> &PageStore<C::Page> {
        &self.store
    }

    pub fn in_flight(&self) -> usize {
        self.scheduler.in_flight()
    }

    /// Reads a cell by column name. Returns `None` for unknown columns, rows past the end,
    /// and rows whose page is not resident.
    pub fn cell_value(&self, row: usize, column: &str) -> Option<CellValue<C>> {
        let column = self.column_index(column)?;
        self.cell_value_at(row, column)
    }

    /// Same as `cell_value`, addressing the column by position in `columns()`.
    pub fn cell_value_at(&self, row: usize, column: usize) -> Option<CellValue<C>> {
        if row >= self.num_rows || column >= self.columns.len() {
            return None;
        }
        let layout = self.options.layout;
        let page = self.store.get(layout.page_of(row))?;
        page.value(layout.offset_of(row), column)
    }

    pub fn is_resident(&self, row: usize) -> bool {
        row < self.num_rows && self.store.has(self.options.layout.page_of(row))
    }

    /// Tells the view which rows are visible.
    ///
    /// Fetches pages newly covered by `[start, end)` plus overscan and evicts resident pages no
    /// longer covered. Never blocks.
    pub fn set_visible_range(&mut self, start: usize, end: usize) {
        debug_assert!(start <= end, "set_visible_range: start ({start}) > end ({end})");
        let viewport = if start <= end {
            RowRange::new(start, end)
        } else {
            rwarn!(start, end, "set_visible_range: start > end, treating as empty");
            RowRange::new(start, start)
        };
        rtrace!(start = viewport.start, end = viewport.end, "set_visible_range");

        let window = self.options.layout.window_of(viewport, self.num_rows);
        let evicted = self
            .scheduler
            .advance(window, &self.record_set, &mut self.store);
        if evicted > 0 {
            self.notify(PageEvent::Evicted {
                window,
                count: evicted,
            });
        }
    }

    /// Polls for the next resolved fetch and applies it.
    ///
    /// Returns `Ready(None)` when no fetch is in flight.
    pub fn poll_resolution(&mut self, cx: &mut Context<'_>) -> Poll<Option<Resolution>> {
        let schema = self.record_set.schema_bytes();
        let codec = &self.codec;
        let polled = self
            .scheduler
            .poll_resolution(cx, &mut self.store, |rows| codec.decode_page(schema, rows));
        if let Poll::Ready(Some(Resolution::Resident(page))) = polled {
            self.notify(PageEvent::Resident { page });
        }
        polled
    }

    /// Applies every fetch that has already resolved, without waiting for the rest.
    ///
    /// Intended to be called once per frame by the rendering loop. Returns the number of
    /// fetches handled (including stale and failed ones).
    pub fn process_ready(&mut self) -> usize {
        let mut cx = Context::from_waker(futures::task::noop_waker_ref());
        let mut handled = 0;
        while let Poll::Ready(Some(_)) = self.poll_resolution(&mut cx) {
            handled += 1;
        }
        handled
    }

    /// Drives fetches until none are in flight.
    pub fn poll_settled(&mut self, cx: &mut Context<'_>) -> Poll<()> {
        loop {
            match self.poll_resolution(cx) {
                Poll::Ready(Some(_)) => continue,
                Poll::Ready(None) => return Poll::Ready(()),
                Poll::Pending => return Poll::Pending,
            }
        }
    }

    /// Waits for every in-flight fetch to resolve and applies the results.
    pub async fn settle(&mut self) {
        poll_fn(|cx| self.poll_settled(cx)).await
    }

    /// Waits for the next fetch to resolve and applies it. Returns `None` when nothing is in
    /// flight.
    pub async fn next_resolution(&mut self) -> Option<Resolution> {
        poll_fn(|cx| self.poll_resolution(cx)).await
    }

    /// Returns a snapshot of the cache state and lifetime counters.
    pub fn stats(&self) -> ViewStats {
        let Counters {
            fetches_issued,
            pages_stored,
            pages_evicted,
            stale_discards,
            fetch_failures,
            decode_failures,
        } = self.scheduler.counters();
        ViewStats {
            window: self.scheduler.window(),
            resident_pages: self.store.len(),
            in_flight: self.scheduler.in_flight(),
            fetches_issued,
            pages_stored,
            pages_evicted,
            stale_discards,
            fetch_failures,
            decode_failures,
        }
    }

    fn notify(&self, event: PageEvent) {
        if let Some(cb) = &self.options.on_change {
            cb(event);
        }
    }
}

impl<R, C> core::fmt::Debug for WindowedRecordView<R, C>
where
    R: RecordSet,
    C: Codec,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowedRecordView")
            .field("num_rows", &self.num_rows)
            .field("columns", &self.columns)
            .field("options", &self.options)
            .field("resident_pages", &self.store.len())
            .field("scheduler", &self.scheduler)
            .finish_non_exhaustive()
    }
}
