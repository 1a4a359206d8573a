use alloc::sync::Arc;

use crate::{PageEvent, PageLayout};

/// A callback fired when the set of resident pages changes.
///
/// Rendering layers use it to schedule a repaint: cells read through `cell_value` only change
/// when one of these events fires.
pub type OnChangeCallback = Arc<dyn Fn(PageEvent) + Send + Sync>;

/// Configuration for [`crate::WindowedRecordView`].
///
/// Cheap to clone: the callback lives in an `Arc`.
#[derive(Clone, Default)]
pub struct ViewOptions {
    pub layout: PageLayout,
    pub on_change: Option<OnChangeCallback>,
}

impl ViewOptions {
    /// Default options: pages of 50 rows with 20 rows of overscan.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.layout.batch_size = batch_size;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.layout.overscan = overscan;
        self
    }

    pub fn with_layout(mut self, layout: PageLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: impl Fn(PageEvent) + Send + Sync + 'static,
    ) -> Self {
        self.on_change = Some(Arc::new(on_change));
        self
    }

    /// Removes a callback set by [`Self::with_on_change`].
    pub fn without_on_change(mut self) -> Self {
        self.on_change = None;
        self
    }
}

impl core::fmt::Debug for ViewOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ViewOptions")
            .field("batch_size", &self.layout.batch_size)
            .field("overscan", &self.layout.overscan)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
