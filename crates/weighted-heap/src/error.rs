use thiserror::Error;

/// Errors raised while configuring a heap.
///
/// Querying an empty heap is not an error: those calls return `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("invalid heap mode {0:?}: expected \"min\" or \"max\"")]
    InvalidMode(String),
    #[error("cannot allocate heap capacity of {0} nodes")]
    Capacity(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_mode_message_names_the_value() {
        let err = HeapError::InvalidMode("median".to_string());
        assert_eq!(
            err.to_string(),
            "invalid heap mode \"median\": expected \"min\" or \"max\""
        );
    }

    #[test]
    fn test_capacity_message() {
        let err = HeapError::Capacity(7);
        assert_eq!(err.to_string(), "cannot allocate heap capacity of 7 nodes");
    }
}
