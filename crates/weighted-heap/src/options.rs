use serde::{Deserialize, Serialize};

use crate::mode::HeapMode;

/// Construction options for [`Heap::from_options`](crate::Heap::from_options).
///
/// Every field is optional when deserialized, so an empty table yields a
/// min-heap with no preallocation. A capacity that cannot be allocated is
/// reported by `from_options` as [`HeapError::Capacity`](crate::HeapError::Capacity).
///
/// ```
/// use weighted_heap::{HeapMode, HeapOptions};
///
/// let opts = HeapOptions::new().mode(HeapMode::Max).capacity(64);
/// assert_eq!(opts.mode, HeapMode::Max);
/// assert_eq!(opts.capacity, 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeapOptions {
    pub mode: HeapMode,
    /// Number of nodes to preallocate.
    pub capacity: usize,
}

impl HeapOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: HeapMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}
