//! Partial-path search.
//!
//! A search walks the query's path from the root for as long as edges
//! exist. Besides the value at the end of the path it can report the
//! values met on the way down (shallowest first) and every value stored
//! beneath the node where the walk stopped.
//!
//! ```
//! use segtrie::segment::Chars;
//! use segtrie::trie::Trie;
//!
//! let mut trie = Trie::new(Chars);
//! for w in ["ca", "cat", "car", "cart", "dog"] {
//!     trie.put(w);
//! }
//!
//! // "cab" runs out of edges after "ca".
//! let result = trie.search(&"cab", true, true);
//! assert_eq!(result.found, None);
//! assert_eq!(result.moves, 2);
//! assert_eq!(result.encountered, vec![&"ca"]);
//! let mut remainder = result.remainder.clone();
//! remainder.sort();
//! assert_eq!(remainder, vec![&"ca", &"car", &"cart", &"cat"]);
//! ```

use crate::node::NodeId;
use crate::segment::Segmenter;
use crate::trie::Trie;

/// The outcome of [`Trie::search`].
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult<'a, V, S> {
    /// The stored value equivalent to the query, when the query's whole
    /// path was followed.
    pub found: Option<&'a V>,
    /// The stored value equivalent to the query at the node where the walk
    /// stopped short of the end of the query's path. Only possible when
    /// the segmenter maps equivalent values to different paths.
    pub shallow_match: Option<&'a V>,
    /// Values stored at the nodes visited before the stop node, root first.
    /// Empty unless requested.
    pub encountered: Vec<&'a V>,
    /// Values stored at the stop node and beneath it, in no guaranteed
    /// order. Empty unless requested.
    pub remainder: Vec<&'a V>,
    /// The query's path.
    pub segments: Vec<S>,
    /// How many edges the walk followed.
    pub moves: usize,
}

impl<V, S> SearchResult<'_, V, S> {
    /// Did the walk follow the query's whole path?
    pub fn is_complete(&self) -> bool {
        self.moves == self.segments.len()
    }
}

impl<V, G: Segmenter<V>> Trie<V, G> {
    /// Walk the path of `value` as far as it exists.
    ///
    /// With `include_encountered` the result lists the values stored on
    /// the way down, i.e. stored values whose paths are strict prefixes of
    /// the walked part of the query's path. With `include_descendants` it
    /// lists every value at or beneath the node the walk stopped at.
    pub fn search(
        &self,
        value: &V,
        include_encountered: bool,
        include_descendants: bool,
    ) -> SearchResult<'_, V, G::Segment> {
        let segments = self.segmenter.segments(value);
        self.search_where(
            segments,
            include_encountered,
            include_descendants,
            |segmenter, stored| segmenter.equivalent(value, stored),
        )
    }

    pub(crate) fn search_where<P>(
        &self,
        segments: Vec<G::Segment>,
        include_encountered: bool,
        include_descendants: bool,
        matches: P,
    ) -> SearchResult<'_, V, G::Segment>
    where
        P: Fn(&G, &V) -> bool,
    {
        let mut encountered = vec![];
        let walk = self.walk(&segments, |value| {
            if include_encountered {
                encountered.push(value);
            }
        });

        let matched = self.nodes[walk.stop]
            .value
            .as_ref()
            .filter(|stored| matches(&self.segmenter, *stored));
        let (found, shallow_match) = if walk.moves == segments.len() {
            (matched, None)
        } else {
            (None, matched)
        };

        let remainder = if include_descendants {
            self.descendants(walk.stop)
        } else {
            vec![]
        };

        SearchResult {
            found,
            shallow_match,
            encountered,
            remainder,
            segments,
            moves: walk.moves,
        }
    }

    /// Pre-order: a node's own value, then each child subtree.
    fn descendants(&self, from: NodeId) -> Vec<&V> {
        let mut values = vec![];
        let mut stack = vec![from];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            if let Some(value) = &node.value {
                values.push(value);
            }
            stack.extend(node.edges.children().rev());
        }
        values
    }
}
