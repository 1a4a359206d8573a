use alloc::string::String;

/// Index of a fixed-size row batch.
pub type PageIndex = usize;

/// A contiguous span of row indices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowRange {
    pub start: usize,
    pub end: usize, // exclusive
}

impl RowRange {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, row: usize) -> bool {
        row >= self.start && row < self.end
    }
}

impl From<core::ops::Range<usize>> for RowRange {
    fn from(r: core::ops::Range<usize>) -> Self {
        Self::new(r.start, r.end)
    }
}

/// The half-open page-index range required to cover a viewport plus overscan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageWindow {
    pub start_page: PageIndex,
    pub end_page: PageIndex, // exclusive
}

impl PageWindow {
    pub const EMPTY: Self = Self {
        start_page: 0,
        end_page: 0,
    };

    pub const fn new(start_page: PageIndex, end_page: PageIndex) -> Self {
        Self {
            start_page,
            end_page,
        }
    }

    pub fn contains(&self, page: PageIndex) -> bool {
        page >= self.start_page && page < self.end_page
    }

    pub fn len(&self) -> usize {
        self.end_page.saturating_sub(self.start_page)
    }

    pub fn is_empty(&self) -> bool {
        self.start_page >= self.end_page
    }

    pub fn pages(&self) -> core::ops::Range<PageIndex> {
        self.start_page..self.end_page
    }
}

/// A field of the record set's schema, as seen by the rendering layer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    pub name: String,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// What happened to a page, reported through `ViewOptions::on_change`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageEvent {
    /// A fetch resolved and its page is now readable.
    Resident { page: PageIndex },
    /// A viewport update dropped `count` pages that fell outside the new window.
    Evicted { window: PageWindow, count: usize },
}

/// Outcome of a single resolved fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Resolution {
    /// The page was still wanted and has been stored.
    Resident(PageIndex),
    /// The page left the window before the fetch resolved; the bytes were dropped undecoded.
    Stale(PageIndex),
    /// The record set rejected the request.
    FetchFailed(PageIndex),
    /// The codec could not decode the returned bytes.
    DecodeFailed(PageIndex),
}

impl Resolution {
    pub fn page(&self) -> PageIndex {
        match *self {
            Self::Resident(p) | Self::Stale(p) | Self::FetchFailed(p) | Self::DecodeFailed(p) => p,
        }
    }

    pub fn is_resident(&self) -> bool {
        matches!(self, Self::Resident(_))
    }
}
