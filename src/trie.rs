//! Provides a segmented Trie: a container of values, each addressed by the
//! path of segments its [`Segmenter`] derives from it.
//!
//! Unlike a map keyed by whole values, the trie shares storage between
//! values with common leading segments and can answer prefix questions
//! about them: which stored values lie on the way to a query, and which lie
//! beneath the point where the query's path runs out (see
//! [`Trie::search`]).
//!
//! The segmenter decides the granularity. Here are three ways to store
//! strings:
//!  - chars
//!  - grapheme clusters
//!  - delimited components ('path parts')
//!
//! Example 1
//! ```
//! use segtrie::segment::Chars;
//! use segtrie::trie::Trie;
//!
//! let mut trie = Trie::new(Chars);
//! trie.put("cat");
//! trie.put("car");
//! trie.put("cart");
//!
//! assert!(trie.contains(&"car"));
//! assert_eq!(trie.len(), 3);
//! assert_eq!(trie.remove(&"car"), Some("car"));
//! assert!(!trie.contains(&"car"));
//! assert!(trie.contains(&"cart"));
//! ```
//!
//! Example 2
//! ```
//! use segtrie::segment::Graphemes;
//! use segtrie::trie::Trie;
//!
//! let mut trie = Trie::new(Graphemes);
//! trie.put("a̐éö̲\r\n".to_string());
//! assert!(trie.contains(&"a̐éö̲\r\n".to_string()));
//! assert!(trie.contains_prefix(&"a̐é".to_string()));
//! ```
//!
//! Example 3
//! ```
//! use segtrie::segment::Split;
//! use segtrie::trie::Trie;
//!
//! let mut trie = Trie::new(Split::new('/'));
//! trie.put("usr/local/bin");
//! trie.put("usr/local");
//!
//! let result = trie.search(&"usr/local/bin", true, false);
//! assert_eq!(result.found, Some(&"usr/local/bin"));
//! assert_eq!(result.encountered, vec![&"usr/local"]);
//! ```
//!
//! A Trie is not synchronised. Share one between threads behind a single
//! lock covering every operation, reads included: a removal restructures
//! several levels of the trie at once.

use slab::Slab;

use crate::error::{Result, TrieError};
use crate::node::{Node, NodeId};
use crate::segment::Segmenter;

/// Stores values as paths of segments.
#[derive(Clone, Debug)]
pub struct Trie<V, G: Segmenter<V>> {
    pub(crate) nodes: Slab<Node<V, G::Segment>>,
    pub(crate) root: NodeId,
    count: usize,
    pub(crate) modifications: u64,
    pub(crate) segmenter: G,
}

/// Where a walk along a segment path stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Walk {
    pub(crate) stop: NodeId,
    /// Edges actually followed.
    pub(crate) moves: usize,
}

impl<V, G: Segmenter<V>> Trie<V, G> {
    /// Create a new Trie which derives paths with `segmenter`.
    pub fn new(segmenter: G) -> Self {
        Self::with_capacity(segmenter, 1)
    }

    /// Create a new Trie with room for `capacity` nodes (root included)
    /// before the arena reallocates.
    pub fn with_capacity(segmenter: G, capacity: usize) -> Self {
        let mut nodes = Slab::with_capacity(capacity.max(1));
        let root = nodes.insert(Node::new());
        Self {
            nodes,
            root,
            count: 0,
            modifications: 0,
            segmenter,
        }
    }

    pub fn segmenter(&self) -> &G {
        &self.segmenter
    }

    /// Clear the Trie.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = self.nodes.insert(Node::new());
        self.count = 0;
        self.touch();
    }

    /// How many values does the Trie contain?
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Is the Trie empty?
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// How many nodes does the Trie hold, root included? Nodes without a
    /// value are only kept while some value lies beneath them.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Store `value` at the end of its path, creating missing nodes on the
    /// way. A value already stored at that node is replaced, whether or not
    /// it is equivalent to `value`, and returned.
    pub fn put(&mut self, value: V) -> Option<V> {
        let segments = self.segmenter.segments(&value);
        let node = self.make_path(segments);
        self.store(node, value)
    }

    /// As [`Trie::put`], for callers holding a value which may be absent.
    pub fn try_put(&mut self, value: Option<V>) -> Result<Option<V>> {
        let value = value.ok_or(TrieError::InvalidArgument("cannot store an absent value"))?;
        Ok(self.put(value))
    }

    /// Does the Trie contain a value equivalent to `value` at the end of its
    /// path?
    pub fn contains(&self, value: &V) -> bool {
        self.get(value).is_some()
    }

    /// Get a reference to the stored value equivalent to `value`.
    pub fn get(&self, value: &V) -> Option<&V> {
        self.search(value, false, false).found
    }

    /// Does the whole path of `value` exist, whether or not anything is
    /// stored at its end?
    pub fn contains_prefix(&self, value: &V) -> bool {
        let segments = self.segmenter.segments(value);
        self.walk(&segments, |_| ()).moves == segments.len()
    }

    /// Remove the value equivalent to `value` and return it. Nodes left
    /// with neither a value nor children are pruned.
    ///
    /// The descent follows the path of `value` and stops at the first node
    /// along it holding an equivalent value.
    pub fn remove(&mut self, value: &V) -> Option<V> {
        let segments = self.segmenter.segments(value);
        self.remove_where(&segments, |segmenter, _, stored| {
            segmenter.equivalent(value, stored)
        })
    }

    /// Follow `segments` from the root for as long as edges exist, handing
    /// every value met before each attempted step to `visit`.
    pub(crate) fn walk<'a, F>(&'a self, segments: &[G::Segment], mut visit: F) -> Walk
    where
        F: FnMut(&'a V),
    {
        let nodes = &self.nodes;
        let mut node = self.root;
        let mut moves = 0;
        for segment in segments {
            let current = &nodes[node];
            if let Some(value) = &current.value {
                visit(value);
            }
            match current.edges.get(segment) {
                Some(child) => {
                    node = child;
                    moves += 1;
                }
                None => break,
            }
        }
        Walk { stop: node, moves }
    }

    /// Find or create the node at the end of `segments`.
    pub(crate) fn make_path(&mut self, segments: Vec<G::Segment>) -> NodeId {
        let mut node = self.root;
        for segment in segments {
            node = match self.nodes[node].edges.get(&segment) {
                Some(child) => child,
                None => {
                    let child = self.nodes.insert(Node::new());
                    self.nodes[node].edges.insert(segment, child);
                    child
                }
            };
        }
        node
    }

    pub(crate) fn store(&mut self, node: NodeId, value: V) -> Option<V> {
        let previous = self.nodes[node].value.replace(value);
        if previous.is_none() {
            self.count += 1;
        }
        self.touch();
        previous
    }

    /// Descend along `segments`, taking the value of the first node that
    /// `matches` accepts, then prune whatever that leaves expired.
    pub(crate) fn remove_where<P>(&mut self, segments: &[G::Segment], mut matches: P) -> Option<V>
    where
        P: FnMut(&G, NodeId, &V) -> bool,
    {
        // (parent, child) per edge followed; the edge's segment is
        // segments[depth].
        let mut path: Vec<(NodeId, NodeId)> = Vec::with_capacity(segments.len());
        let mut node = self.root;
        loop {
            let current = &self.nodes[node];
            if let Some(stored) = &current.value {
                if matches(&self.segmenter, node, stored) {
                    break;
                }
            }
            let segment = segments.get(path.len())?;
            let child = current.edges.get(segment)?;
            path.push((node, child));
            node = child;
        }

        let removed = self.nodes[node].value.take();
        self.count -= 1;
        self.touch();
        self.prune(&path, segments);
        removed
    }

    fn prune(&mut self, path: &[(NodeId, NodeId)], segments: &[G::Segment]) {
        for (depth, &(parent, child)) in path.iter().enumerate().rev() {
            if !self.nodes[child].is_expired() {
                break;
            }
            self.nodes[parent].edges.remove(&segments[depth]);
            self.nodes.remove(child);
        }
    }

    fn touch(&mut self) {
        self.modifications = self.modifications.wrapping_add(1);
    }
}

impl<V, G: Segmenter<V> + Default> Default for Trie<V, G> {
    fn default() -> Self {
        Self::new(G::default())
    }
}

impl<V, G: Segmenter<V>> Extend<V> for Trie<V, G> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            self.put(value);
        }
    }
}

impl<V, G: Segmenter<V> + Default> FromIterator<V> for Trie<V, G> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut trie = Self::default();
        trie.extend(iter);
        trie
    }
}
