use crate::PageWindow;

/// A lightweight, serializable snapshot of the cache's current state and lifetime counters.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewStats {
    pub window: PageWindow,
    pub resident_pages: usize,
    /// Fetches issued but not yet resolved, including ones that will be discarded as stale.
    pub in_flight: usize,
    pub fetches_issued: u64,
    pub pages_stored: u64,
    pub pages_evicted: u64,
    pub stale_discards: u64,
    pub fetch_failures: u64,
    pub decode_failures: u64,
}

/// Lifetime counters kept by the scheduler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Counters {
    pub fetches_issued: u64,
    pub pages_stored: u64,
    pub pages_evicted: u64,
    pub stale_discards: u64,
    pub fetch_failures: u64,
    pub decode_failures: u64,
}
