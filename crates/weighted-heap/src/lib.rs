//! weighted-heap - array-backed binary heap of weighted payloads.
//!
//! A [`Heap`] keeps `(weight, payload)` pairs in a `Vec` laid out as an
//! implicit complete binary tree. Position `i` (1-indexed) has its parent at
//! `i / 2` and its children at `2i` and `2i + 1`. The [`HeapMode`] chosen at
//! construction decides which extreme sits at the root.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`heap`] | [`Heap`], percolate-up/down, merge, drain iterators |
//! | [`mode`] | [`HeapMode`] and its ordering predicate |
//! | [`node`] | [`Node`] weight/payload pair |
//! | [`options`] | [`HeapOptions`] serde-loadable configuration |
//! | [`error`] | [`HeapError`] |
//!
//! # Examples
//!
//! ```
//! use weighted_heap::{Heap, HeapMode};
//!
//! let mut heap = Heap::new(HeapMode::Min);
//! heap.insert(3, "first");
//! heap.insert(1, "second");
//! assert_eq!(heap.extract_top(), Some((1, "second")));
//! assert_eq!(heap.extract_top(), Some((3, "first")));
//! assert_eq!(heap.extract_top(), None);
//! ```

pub mod error;
pub mod heap;
pub mod mode;
pub mod node;
pub mod options;

pub use error::HeapError;
pub use heap::{DrainSorted, Heap};
pub use mode::HeapMode;
pub use node::Node;
pub use options::HeapOptions;
