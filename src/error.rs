//! Error types for trie operations.
//!
//! Absent values are never errors: lookups and removals report them as
//! `None` or `false`. Errors are reserved for caller misuse.

use std::fmt;

/// Error type for trie operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    /// An argument violated a precondition, e.g. storing an absent value.
    InvalidArgument(&'static str),
    /// An operation was invoked in a state which does not permit it, e.g.
    /// removing through a cursor which has not yielded anything.
    IllegalState(&'static str),
    /// The trie was modified by something other than the cursor observing
    /// it.
    ConcurrentModification,
}

impl fmt::Display for TrieError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrieError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            TrieError::IllegalState(msg) => write!(f, "illegal state: {msg}"),
            TrieError::ConcurrentModification => {
                write!(f, "trie modified outside of the active cursor")
            }
        }
    }
}

impl std::error::Error for TrieError {}

/// Result type alias for trie operations.
pub type Result<T> = std::result::Result<T, TrieError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_formats_errors() {
        assert_eq!(
            "invalid argument: cannot store an absent value",
            TrieError::InvalidArgument("cannot store an absent value").to_string()
        );
        assert_eq!(
            "trie modified outside of the active cursor",
            TrieError::ConcurrentModification.to_string()
        );
    }
}
