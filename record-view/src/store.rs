use crate::PageIndex;
use crate::key::PageMap;

/// Resident pages, keyed by page index.
///
/// The store does no I/O and no synchronization of its own: it is owned by a single
/// [`crate::WindowedRecordView`] and mutated only through `&mut self`.
#[derive(Clone, Debug)]
pub struct PageStore<P> {
    pages: PageMap<P>,
}

impl<P> Default for PageStore<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> PageStore<P> {
    pub fn new() -> Self {
        Self {
            pages: PageMap::new(),
        }
    }

    pub fn get(&self, page: PageIndex) -> Option<&P> {
        self.pages.get(&page)
    }

    pub fn has(&self, page: PageIndex) -> bool {
        self.pages.contains_key(&page)
    }

    /// Stores `content` for `page`, returning whatever it replaced.
    pub fn put(&mut self, page: PageIndex, content: P) -> Option<P> {
        self.pages.insert(page, content)
    }

    /// Drops every page for which `keep` returns `false`. Returns the number of pages dropped.
    pub fn retain_only(&mut self, mut keep: impl FnMut(PageIndex) -> bool) -> usize {
        let before = self.pages.len();
        self.pages.retain(|&page, _| keep(page));
        before - self.pages.len()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn clear(&mut self) {
        self.pages.clear();
    }

    /// Resident page indices in no particular order.
    pub fn page_indices(&self) -> impl Iterator<Item = PageIndex> + '_ {
        self.pages.keys().copied()
    }
}
