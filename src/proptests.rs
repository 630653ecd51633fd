use crate::map::TrieMap;
use crate::segment::{Chars, Segmenter};
use crate::trie::Trie;

use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

/// Walk every node reachable from the root and check the structural
/// invariants of the trie.
pub(crate) fn validate<V, G: Segmenter<V>>(t: &Trie<V, G>) {
    let mut stack = vec![t.root];
    let mut reachable = 0usize;
    let mut valued = 0usize;
    while let Some(id) = stack.pop() {
        let node = t.nodes.get(id).expect("edge points at a freed node");
        reachable += 1;
        if node.value.is_some() {
            valued += 1;
        }
        if id != t.root {
            assert!(!node.is_expired(), "expired node {id} was not pruned");
        }
        stack.extend(node.edges.children());
    }

    assert_eq!(valued, t.len(), "len must match the number of stored values");
    assert_eq!(
        reachable,
        t.node_count(),
        "every allocated node must be reachable from the root"
    );
}

#[derive(Clone, Debug)]
enum Op {
    Put(String),
    Remove(String),
    Contains(String),
}

fn word_strategy() -> impl Strategy<Value = String> + Clone {
    // A small alphabet makes shared prefixes common.
    "[abc]{0,5}"
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let word = word_strategy();
    let op = prop_oneof![
        50 => word.clone().prop_map(Op::Put),
        30 => word.clone().prop_map(Op::Remove),
        20 => word.prop_map(Op::Contains),
    ];
    prop::collection::vec(op, 0..=200)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence_with_set(ops in ops_strategy()) {
        let mut t: Trie<String, Chars> = Trie::new(Chars);
        let mut m: BTreeSet<String> = BTreeSet::new();

        for op in ops {
            match op {
                Op::Put(word) => {
                    let old_t = t.put(word.clone());
                    let had_m = !m.insert(word.clone());
                    prop_assert_eq!(old_t, had_m.then_some(word));
                }
                Op::Remove(word) => {
                    let old_t = t.remove(&word);
                    let had_m = m.remove(&word);
                    prop_assert_eq!(old_t, had_m.then_some(word));
                }
                Op::Contains(word) => {
                    prop_assert_eq!(t.contains(&word), m.contains(&word));
                }
            }

            prop_assert_eq!(t.len(), m.len());
            validate(&t);
        }

        let got: BTreeSet<String> = t.iter().cloned().collect();
        prop_assert_eq!(got, m.clone());

        for word in &m {
            prop_assert!(t.remove(word).is_some());
        }
        prop_assert!(t.is_empty());
        prop_assert_eq!(t.node_count(), 1);
    }

    #[test]
    fn prop_search_matches_prefix_model(
        words in prop::collection::btree_set(word_strategy(), 0..=30),
        query in word_strategy(),
    ) {
        let t: Trie<String, Chars> = words.iter().cloned().collect();
        let result = t.search(&query, true, true);

        // Stored words which are strict prefixes of the query, shortest
        // first.
        let encountered: Vec<&String> = words
            .iter()
            .filter(|w| w.len() < query.len() && query.starts_with(w.as_str()))
            .map(|w| (w.len(), w))
            .collect::<BTreeMap<usize, &String>>()
            .into_values()
            .collect();
        let got: Vec<&String> = result.encountered.clone();
        prop_assert_eq!(got, encountered);

        // The walk stops at the longest prefix of the query which leads to
        // some stored word.
        let matched = (0..=query.len())
            .rev()
            .map(|n| &query[..n])
            .find(|p| words.iter().any(|w| w.starts_with(*p)))
            .unwrap_or("");
        prop_assert_eq!(result.moves, matched.len());

        let remainder: BTreeSet<&String> = words.iter().filter(|w| w.starts_with(matched)).collect();
        let got: BTreeSet<&String> = result.remainder.iter().copied().collect();
        prop_assert_eq!(got.len(), result.remainder.len());
        prop_assert_eq!(got, remainder);

        prop_assert_eq!(result.found.is_some(), words.contains(&query));
    }

    #[test]
    fn prop_map_equivalence(ops in prop::collection::vec((word_strategy(), any::<Option<u8>>()), 0..=200)) {
        let mut t: TrieMap<String, u8, Chars> = TrieMap::default();
        let mut m: BTreeMap<String, u8> = BTreeMap::new();

        for (key, value) in ops {
            match value {
                Some(value) => {
                    prop_assert_eq!(t.insert(key.clone(), value), m.insert(key, value));
                }
                None => {
                    prop_assert_eq!(t.remove(&key), m.remove(&key));
                }
            }
            prop_assert_eq!(t.len(), m.len());
        }

        for (key, value) in &m {
            prop_assert_eq!(t.get(key), Some(value));
        }
        let got: BTreeMap<String, u8> = t.into_iter().collect();
        prop_assert_eq!(got, m);
    }
}
