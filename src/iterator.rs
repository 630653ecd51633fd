//! Provides Trie iterators.
//!
//! All of them visit values breadth first: shallower values before deeper
//! ones, siblings in no guaranteed order.
//!
//! [`Iter`] borrows the trie, so the trie cannot change underneath it.
//! [`Cursor`] does not: it can remove the values it yields, and it fails
//! with [`TrieError::ConcurrentModification`] once anything else has
//! changed the trie.
//!
//! ```
//! use segtrie::segment::Chars;
//! use segtrie::trie::Trie;
//!
//! let mut trie = Trie::new(Chars);
//! trie.extend(["a", "ab", "b", "abc"]);
//!
//! let mut cursor = trie.cursor();
//! while let Some(value) = cursor.next(&trie).unwrap() {
//!     if value.len() > 1 {
//!         cursor.remove(&mut trie).unwrap();
//!     }
//! }
//! assert_eq!(trie.len(), 2);
//! ```
use std::collections::VecDeque;
use std::iter::FusedIterator;

use slab::Slab;

use crate::error::{Result, TrieError};
use crate::node::{Node, NodeId};
use crate::segment::Segmenter;
use crate::trie::Trie;

/// Iterator over references to the values of a Trie.
#[derive(Debug)]
pub struct Iter<'a, V, S> {
    nodes: &'a Slab<Node<V, S>>,
    queue: VecDeque<NodeId>,
    remaining: usize,
}

impl<'a, V, S: PartialEq> Iterator for Iter<'a, V, S> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        while let Some(id) = self.queue.pop_front() {
            let node = &nodes[id];
            self.queue.extend(node.edges.children());
            if let Some(value) = &node.value {
                self.remaining -= 1;
                return Some(value);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V, S: PartialEq> ExactSizeIterator for Iter<'_, V, S> {}

impl<V, S: PartialEq> FusedIterator for Iter<'_, V, S> {}

/// Iterator over the values of a consumed Trie.
#[derive(Debug)]
pub struct IntoIter<V> {
    values: std::vec::IntoIter<V>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.values.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}

impl<V> FusedIterator for IntoIter<V> {}

impl<V, G: Segmenter<V>> IntoIterator for Trie<V, G> {
    type Item = V;
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        let mut values = Vec::with_capacity(self.len());
        let mut queue = VecDeque::from([self.root]);
        let mut nodes = self.nodes;
        while let Some(id) = queue.pop_front() {
            let node = &mut nodes[id];
            queue.extend(node.edges.children());
            if let Some(value) = node.value.take() {
                values.push(value);
            }
        }
        IntoIter {
            values: values.into_iter(),
        }
    }
}

impl<'a, V, G: Segmenter<V>> IntoIterator for &'a Trie<V, G> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V, G::Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V, G: Segmenter<V>> Trie<V, G> {
    /// Create an iterator over the Trie.
    pub fn iter(&self) -> Iter<'_, V, G::Segment> {
        Iter {
            nodes: &self.nodes,
            queue: VecDeque::from([self.root]),
            remaining: self.len(),
        }
    }

    /// Create a cursor positioned before the first value of the Trie.
    pub fn cursor(&self) -> Cursor {
        Cursor {
            queue: VecDeque::from([self.root]),
            last: None,
            stamp: self.modifications,
        }
    }
}

/// A resettable breadth-first cursor which can remove what it yields.
///
/// A cursor holds no borrow of its trie; every call takes the trie it was
/// created from. Passing any other trie is a logic error.
#[derive(Clone, Debug)]
pub struct Cursor {
    queue: VecDeque<NodeId>,
    last: Option<NodeId>,
    stamp: u64,
}

impl Cursor {
    /// The next value, or `None` once every value has been visited.
    pub fn next<'a, V, G: Segmenter<V>>(&mut self, trie: &'a Trie<V, G>) -> Result<Option<&'a V>> {
        self.check(trie.modifications)?;
        while let Some(id) = self.queue.pop_front() {
            let node = &trie.nodes[id];
            self.queue.extend(node.edges.children());
            if let Some(value) = &node.value {
                self.last = Some(id);
                return Ok(Some(value));
            }
        }
        self.last = None;
        Ok(None)
    }

    /// Remove the value most recently returned by [`Cursor::next`].
    ///
    /// The trie is descended again along the value's path to record the
    /// nodes to prune, but only the node the cursor yielded can match, so
    /// an equivalent value elsewhere on the path is left alone.
    pub fn remove<V, G: Segmenter<V>>(&mut self, trie: &mut Trie<V, G>) -> Result<V> {
        self.check(trie.modifications)?;
        let target = self
            .last
            .take()
            .ok_or(TrieError::IllegalState("no value to remove at this position"))?;
        let segments = match trie.nodes.get(target).and_then(|n| n.value.as_ref()) {
            Some(value) => trie.segmenter.segments(value),
            None => return Err(TrieError::ConcurrentModification),
        };
        let removed = trie
            .remove_where(&segments, |_, id, _| id == target)
            .ok_or(TrieError::ConcurrentModification)?;
        self.stamp = trie.modifications;
        Ok(removed)
    }

    /// Start again from the root, accepting the trie as it is now.
    pub fn reset<V, G: Segmenter<V>>(&mut self, trie: &Trie<V, G>) {
        self.queue.clear();
        self.queue.push_back(trie.root);
        self.last = None;
        self.stamp = trie.modifications;
    }

    fn check(&self, modifications: u64) -> Result<()> {
        if self.stamp == modifications {
            Ok(())
        } else {
            Err(TrieError::ConcurrentModification)
        }
    }
}
