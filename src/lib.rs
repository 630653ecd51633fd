//! Provides a segmented Trie: a container which stores values addressed
//! by a path of segments derived from each value.
//!
//! The derivation is a strategy, a [`crate::segment::Segmenter`], supplied
//! when the trie is created. It decides what a segment is (a char, a
//! grapheme cluster, a path component, a byte, ...) and when two values
//! are the same value. Any `Fn(&V) -> Vec<S>` closure will do.
//!
//! On top of put / contains / remove the trie answers partial-path
//! questions: [`crate::trie::Trie::search`] walks a query's path as far as
//! it exists and reports the values stored along the way as well as those
//! stored beneath the point where the walk stopped. Nodes which no longer
//! lead to any value are pruned as soon as a removal empties them.
//!
//! [`crate::map::TrieMap`] stores key/value entries in a trie, segmenting
//! and comparing by key only.
//!
//! Examples:
//! * trie : [`crate::trie`]
//! * search : [`crate::search`]
//! * iterator : [`crate::iterator`]
//! * map : [`crate::map`]
//!
//! Typical usages for this data structure:
//!  - Routing tables and path lookups (longest stored prefix of a path)
//!  - Autocompletion (everything stored beneath a prefix)
//!  - Storing large numbers of values with significant amounts of
//!    shared leading segments

pub mod error;

pub mod iterator;

pub mod map;

mod node;

pub mod search;

pub mod segment;

pub mod trie;

#[cfg(test)]
mod proptests;

pub use error::{Result, TrieError};
pub use map::TrieMap;
pub use search::SearchResult;
pub use segment::Segmenter;
pub use trie::Trie;
