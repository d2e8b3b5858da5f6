use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HeapError;

/// Which extreme a heap keeps at its root.
///
/// The mode is fixed when a heap is built. To re-order an existing heap under
/// the other mode use [`Heap::into_mode`](crate::Heap::into_mode), which
/// rebuilds it from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum HeapMode {
    /// Smallest weight on top.
    #[default]
    Min,
    /// Largest weight on top.
    Max,
}

impl HeapMode {
    /// Returns `true` when `a` must sit above `b`.
    ///
    /// Equal weights are never better than each other, so ties never force a
    /// swap.
    #[inline]
    pub fn better<W: PartialOrd + ?Sized>(self, a: &W, b: &W) -> bool {
        match self {
            HeapMode::Min => a < b,
            HeapMode::Max => a > b,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            HeapMode::Min => HeapMode::Max,
            HeapMode::Max => HeapMode::Min,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HeapMode::Min => "min",
            HeapMode::Max => "max",
        }
    }
}

impl fmt::Display for HeapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeapMode {
    type Err = HeapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("min") {
            Ok(HeapMode::Min)
        } else if trimmed.eq_ignore_ascii_case("max") {
            Ok(HeapMode::Max)
        } else {
            Err(HeapError::InvalidMode(s.to_string()))
        }
    }
}

impl TryFrom<&str> for HeapMode {
    type Error = HeapError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for HeapMode {
    type Error = HeapError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HeapMode> for &'static str {
    fn from(mode: HeapMode) -> Self {
        mode.as_str()
    }
}
