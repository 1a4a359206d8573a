use alloc::vec::Vec;
use core::fmt;
use core::task::{Context, Poll};

use futures::future::{FutureExt, LocalBoxFuture};
use futures::ready;
use futures::stream::{FuturesUnordered, StreamExt};

use crate::state::Counters;
use crate::{PageIndex, PageLayout, PageStore, PageWindow, RecordSet, Resolution, RowRange};

struct Fetched<E> {
    page: PageIndex,
    rows: RowRange,
    result: Result<Vec<u8>, E>,
}

/// Decides which pages to fetch and which resolved fetches to keep.
///
/// The scheduler remembers only the most recently requested window. A page is fetched when it
/// enters the window; a resolved fetch is stored only if its page is inside the window current
/// at resolution time ("last requested window wins"). There is no cancellation: fetches for
/// pages that scrolled away still run to completion and are then dropped.
pub struct FetchScheduler<E> {
    layout: PageLayout,
    num_rows: usize,
    window: PageWindow,
    in_flight: FuturesUnordered<LocalBoxFuture<'static, Fetched<E>>>,
    counters: Counters,
}

impl<E: fmt::Display + 'static> FetchScheduler<E> {
    pub fn new(layout: PageLayout, num_rows: usize) -> Self {
        Self {
            layout,
            num_rows,
            window: PageWindow::EMPTY,
            in_flight: FuturesUnordered::new(),
            counters: Counters::default(),
        }
    }

    pub fn layout(&self) -> PageLayout {
        self.layout
    }

    /// The most recently requested window.
    pub fn window(&self) -> PageWindow {
        self.window
    }

    /// Number of fetches that have not resolved yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    pub(crate) fn counters(&self) -> Counters {
        self.counters
    }

    /// Moves the scheduler to `window`.
    ///
    /// Fetches every page of `window` that was not part of the previous window, then evicts
    /// every resident page outside `window`. Pages in both windows are left alone, even if
    /// their earlier fetch failed. Returns the number of evicted pages.
    pub fn advance<R, P>(
        &mut self,
        window: PageWindow,
        record_set: &R,
        store: &mut PageStore<P>,
    ) -> usize
    where
        R: RecordSet<Error = E> + ?Sized,
    {
        let previous = self.window;
        for page in window.pages() {
            if previous.contains(page) {
                continue;
            }
            let rows = self.layout.page_rows(page, self.num_rows);
            rtrace!(page, start = rows.start, end = rows.end, "fetch page");
            let fetch = record_set
                .get_rows(rows)
                .map(move |result| Fetched { page, rows, result });
            self.in_flight.push(fetch.boxed_local());
            self.counters.fetches_issued += 1;
        }

        let evicted = store.retain_only(|page| window.contains(page));
        self.counters.pages_evicted += evicted as u64;
        self.window = window;

        rdebug!(
            start_page = window.start_page,
            end_page = window.end_page,
            evicted,
            in_flight = self.in_flight.len(),
            "advance"
        );
        evicted
    }

    /// Polls for the next resolved fetch and applies it to `store`.
    ///
    /// Returns `Ready(None)` when nothing is in flight. Stale results are discarded before
    /// `decode` is called.
    pub fn poll_resolution<P, D>(
        &mut self,
        cx: &mut Context<'_>,
        store: &mut PageStore<P>,
        decode: impl FnOnce(&[u8]) -> Result<P, D>,
    ) -> Poll<Option<Resolution>>
    where
        D: fmt::Display,
    {
        let Some(fetched) = ready!(self.in_flight.poll_next_unpin(cx)) else {
            return Poll::Ready(None);
        };
        Poll::Ready(Some(self.resolve(fetched, store, decode)))
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn resolve<P, D>(
        &mut self,
        fetched: Fetched<E>,
        store: &mut PageStore<P>,
        decode: impl FnOnce(&[u8]) -> Result<P, D>,
    ) -> Resolution
    where
        D: fmt::Display,
    {
        let Fetched { page, rows, result } = fetched;

        let bytes = match result {
            Ok(bytes) => bytes,
            Err(err) => {
                rwarn!(page, start = rows.start, end = rows.end, error = %err, "fetch failed");
                self.counters.fetch_failures += 1;
                return Resolution::FetchFailed(page);
            }
        };

        if !self.window.contains(page) {
            rtrace!(
                page,
                start_page = self.window.start_page,
                end_page = self.window.end_page,
                "discarding stale page"
            );
            self.counters.stale_discards += 1;
            return Resolution::Stale(page);
        }

        match decode(&bytes) {
            Ok(content) => {
                store.put(page, content);
                self.counters.pages_stored += 1;
                Resolution::Resident(page)
            }
            Err(err) => {
                rwarn!(page, len = bytes.len(), error = %err, "failed to decode page");
                self.counters.decode_failures += 1;
                Resolution::DecodeFailed(page)
            }
        }
    }
}

impl<E> fmt::Debug for FetchScheduler<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchScheduler")
            .field("layout", &self.layout)
            .field("num_rows", &self.num_rows)
            .field("window", &self.window)
            .field("in_flight", &self.in_flight.len())
            .field("counters", &self.counters)
            .finish()
    }
}
