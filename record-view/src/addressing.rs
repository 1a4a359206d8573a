use crate::{PageIndex, PageWindow, RowRange};

pub const DEFAULT_BATCH_SIZE: usize = 50;
pub const DEFAULT_OVERSCAN: usize = 20;

/// Maps rows to pages for a fixed batch size and overscan margin.
///
/// All functions are pure. `batch_size` must be non-zero; `WindowedRecordView::new` rejects a
/// zero batch size before any of these are called.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageLayout {
    /// Rows per page. Every fetch requests exactly one page.
    pub batch_size: usize,
    /// Rows fetched either side of the visible range.
    pub overscan: usize,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            overscan: DEFAULT_OVERSCAN,
        }
    }
}

impl PageLayout {
    pub const fn new(batch_size: usize, overscan: usize) -> Self {
        Self {
            batch_size,
            overscan,
        }
    }

    pub fn page_of(&self, row: usize) -> PageIndex {
        row / self.batch_size
    }

    pub fn offset_of(&self, row: usize) -> usize {
        row - self.page_of(row) * self.batch_size
    }

    /// Returns the pages covering `viewport` widened by `overscan` rows on each side and
    /// clamped to `[0, num_rows)`.
    ///
    /// `start_page <= end_page` always holds, even for a viewport past the end of the data.
    /// The last page of the window may be short.
    pub fn window_of(&self, viewport: RowRange, num_rows: usize) -> PageWindow {
        let first_row = viewport.start.saturating_sub(self.overscan);
        let last_row = viewport.end.saturating_add(self.overscan).min(num_rows);

        let end_page = last_row.div_ceil(self.batch_size);
        let start_page = (first_row / self.batch_size).min(end_page);
        PageWindow::new(start_page, end_page)
    }

    /// The rows requested for `page`, with the end clamped to `num_rows`.
    pub fn page_rows(&self, page: PageIndex, num_rows: usize) -> RowRange {
        let start = page.saturating_mul(self.batch_size).min(num_rows);
        let end = start.saturating_add(self.batch_size).min(num_rows);
        RowRange::new(start, end)
    }
}
