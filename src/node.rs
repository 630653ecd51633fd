//! Arena nodes and their edge maps.
//!
//! Nodes live in a [`slab::Slab`] owned by the trie and refer to their
//! children by arena index. A node is owned by exactly one parent edge,
//! except the root which has no parent.

/// Index of a node within the trie arena.
pub(crate) type NodeId = usize;

/// A node's outgoing edges: segment to child index. Segments are unique.
///
/// Nodes rarely have more than a handful of children, so a vector with
/// linear lookup beats hashing here. Iteration follows insertion order,
/// but callers must not depend on that.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Edges<S> {
    entries: Vec<(S, NodeId)>,
}

impl<S: PartialEq> Edges<S> {
    pub(crate) fn new() -> Self {
        Self { entries: vec![] }
    }

    pub(crate) fn get(&self, segment: &S) -> Option<NodeId> {
        self.entries
            .iter()
            .find(|(s, _)| s == segment)
            .map(|(_, child)| *child)
    }

    /// Add an edge. The caller guarantees `segment` is not present yet.
    pub(crate) fn insert(&mut self, segment: S, child: NodeId) {
        debug_assert!(self.get(&segment).is_none());
        self.entries.push((segment, child));
    }

    pub(crate) fn remove(&mut self, segment: &S) -> Option<NodeId> {
        let position = self.entries.iter().position(|(s, _)| s == segment)?;
        Some(self.entries.swap_remove(position).1)
    }

    pub(crate) fn children(&self) -> impl DoubleEndedIterator<Item = NodeId> + '_ {
        self.entries.iter().map(|(_, child)| *child)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Node<V, S> {
    pub(crate) value: Option<V>,
    pub(crate) edges: Edges<S>,
}

impl<V, S: PartialEq> Node<V, S> {
    pub(crate) fn new() -> Self {
        Self {
            value: None,
            edges: Edges::new(),
        }
    }

    /// No value and no children: the node must be pruned (unless it is the
    /// root).
    pub(crate) fn is_expired(&self) -> bool {
        self.value.is_none() && self.edges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_keeps_segments_unique() {
        let mut edges = Edges::new();
        edges.insert('a', 1);
        edges.insert('b', 2);
        assert_eq!(edges.get(&'a'), Some(1));
        assert_eq!(edges.get(&'b'), Some(2));
        assert_eq!(edges.get(&'c'), None);
        assert_eq!(edges.children().count(), 2);
    }

    #[test]
    fn it_removes_edges() {
        let mut edges = Edges::new();
        edges.insert('a', 1);
        edges.insert('b', 2);
        edges.insert('c', 3);
        assert_eq!(edges.remove(&'a'), Some(1));
        assert_eq!(edges.remove(&'a'), None);
        assert_eq!(edges.get(&'c'), Some(3));
        let mut children: Vec<NodeId> = edges.children().collect();
        children.sort_unstable();
        assert_eq!(children, vec![2, 3]);
    }

    #[test]
    fn it_detects_expired_nodes() {
        let mut node: Node<&str, char> = Node::new();
        assert!(node.is_expired());
        node.value = Some("x");
        assert!(!node.is_expired());
        node.value = None;
        node.edges.insert('x', 7);
        assert!(!node.is_expired());
    }
}
