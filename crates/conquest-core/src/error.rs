use thiserror::Error;

/// Rejections raised while decoding or validating a turn snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("board must be non-empty (got {width}x{height})")]
    EmptyBoard { width: usize, height: usize },

    #[error("board of {width}x{height} tiles is not addressable")]
    BoardTooLarge { width: usize, height: usize },

    #[error("{field} has {actual} entries, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("flat map is truncated: need at least {expected} entries, got {actual}")]
    TruncatedMap { expected: usize, actual: usize },

    #[error("malformed diff at offset {offset}: {reason}")]
    MalformedDiff { offset: usize, reason: &'static str },
}
