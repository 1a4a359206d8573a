#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::PageIndex;

#[cfg(feature = "std")]
pub(crate) type PageMap<P> = HashMap<PageIndex, P>;
#[cfg(not(feature = "std"))]
pub(crate) type PageMap<P> = BTreeMap<PageIndex, P>;
