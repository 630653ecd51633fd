//! A map built on a [`Trie`] of key/value entries.
//!
//! Entries are segmented and compared by key only; the value rides along.
//!
//! ```
//! use segtrie::map::TrieMap;
//! use segtrie::segment::Split;
//!
//! let mut routes = TrieMap::new(Split::new('/'));
//! routes.insert("api/users", 1);
//! routes.insert("api/users/me", 2);
//! assert_eq!(routes.insert("api/users", 3), Some(1));
//!
//! assert_eq!(routes.get(&"api/users"), Some(&3));
//! assert!(routes.contains_key(&"api/users/me"));
//! assert_eq!(routes.remove(&"api/users"), Some(3));
//! assert_eq!(routes.get(&"api/users"), None);
//! assert_eq!(routes.len(), 1);
//! ```

use std::mem;

use crate::node::NodeId;
use crate::search::SearchResult;
use crate::segment::Segmenter;
use crate::trie::Trie;

/// A key and its value, as stored in a [`TrieMap`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

/// Segments and compares entries by key with the wrapped key segmenter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ByKey<G>(pub G);

impl<K, V, G: Segmenter<K>> Segmenter<Entry<K, V>> for ByKey<G> {
    type Segment = G::Segment;

    fn segments(&self, entry: &Entry<K, V>) -> Vec<G::Segment> {
        self.0.segments(&entry.key)
    }

    fn equivalent(&self, a: &Entry<K, V>, b: &Entry<K, V>) -> bool {
        self.0.equivalent(&a.key, &b.key)
    }
}

/// Maps keys to values, storing keys as paths of segments.
#[derive(Clone, Debug)]
pub struct TrieMap<K, V, G: Segmenter<K>> {
    trie: Trie<Entry<K, V>, ByKey<G>>,
}

impl<K, V, G: Segmenter<K>> TrieMap<K, V, G> {
    pub fn new(segmenter: G) -> Self {
        Self {
            trie: Trie::new(ByKey(segmenter)),
        }
    }

    pub fn with_capacity(segmenter: G, capacity: usize) -> Self {
        Self {
            trie: Trie::with_capacity(ByKey(segmenter), capacity),
        }
    }

    pub fn segmenter(&self) -> &G {
        &self.trie.segmenter().0
    }

    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    pub fn clear(&mut self) {
        self.trie.clear();
    }

    /// Associate `value` with `key`. If the key is present its value is
    /// replaced and returned; the stored key is kept.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let segments = self.trie.segmenter.0.segments(&key);
        let node = self.trie.make_path(segments);
        if let Some(entry) = self.trie.nodes[node].value.as_mut() {
            if self.trie.segmenter.0.equivalent(&key, &entry.key) {
                return Some(mem::replace(&mut entry.value, value));
            }
        }
        self.trie.store(node, Entry { key, value });
        None
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let node = self.find(key)?;
        self.trie.nodes[node].value.as_ref().map(|e| &e.value)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let node = self.find(key)?;
        self.trie.nodes[node].value.as_mut().map(|e| &mut e.value)
    }

    /// The stored key equivalent to `key`, with its value.
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        let node = self.find(key)?;
        self.trie.nodes[node].value.as_ref().map(|e| (&e.key, &e.value))
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Remove `key`, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, value)| value)
    }

    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let segments = self.trie.segmenter.0.segments(key);
        self.trie
            .remove_where(&segments, |segmenter, _, entry| {
                segmenter.0.equivalent(key, &entry.key)
            })
            .map(|entry| (entry.key, entry.value))
    }

    /// Search by key; see [`Trie::search`].
    pub fn search(
        &self,
        key: &K,
        include_encountered: bool,
        include_descendants: bool,
    ) -> SearchResult<'_, Entry<K, V>, G::Segment> {
        let segments = self.trie.segmenter.0.segments(key);
        self.trie.search_where(
            segments,
            include_encountered,
            include_descendants,
            |segmenter, entry| segmenter.0.equivalent(key, &entry.key),
        )
    }

    /// Iterate over the entries, breadth first.
    pub fn iter(&self) -> Iter<'_, K, V, G::Segment> {
        Iter {
            inner: self.trie.iter(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, value)| value)
    }

    /// The node holding an entry for `key`, if the whole path exists.
    fn find(&self, key: &K) -> Option<NodeId> {
        let segments = self.trie.segmenter.0.segments(key);
        let walk = self.trie.walk(&segments, |_| ());
        if walk.moves != segments.len() {
            return None;
        }
        let entry = self.trie.nodes[walk.stop].value.as_ref()?;
        self.trie
            .segmenter
            .0
            .equivalent(key, &entry.key)
            .then_some(walk.stop)
    }
}

/// Iterator over the entries of a [`TrieMap`].
#[derive(Debug)]
pub struct Iter<'a, K, V, S> {
    inner: crate::iterator::Iter<'a, Entry<K, V>, S>,
}

impl<'a, K, V, S: PartialEq> Iterator for Iter<'a, K, V, S> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| (&e.key, &e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, S: PartialEq> ExactSizeIterator for Iter<'_, K, V, S> {}

impl<'a, K, V, G: Segmenter<K>> IntoIterator for &'a TrieMap<K, V, G> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, G::Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, G: Segmenter<K>> IntoIterator for TrieMap<K, V, G> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.trie.into_iter(),
        }
    }
}

/// Iterator over the entries of a consumed [`TrieMap`].
#[derive(Debug)]
pub struct IntoIter<K, V> {
    inner: crate::iterator::IntoIter<Entry<K, V>>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| (e.key, e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, G: Segmenter<K> + Default> Default for TrieMap<K, V, G> {
    fn default() -> Self {
        Self::new(G::default())
    }
}

impl<K, V, G: Segmenter<K>> Extend<(K, V)> for TrieMap<K, V, G> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, G: Segmenter<K> + Default> FromIterator<(K, V)> for TrieMap<K, V, G> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}
