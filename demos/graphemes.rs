use segtrie::segment::Graphemes;
use segtrie::trie::Trie;
use unicode_segmentation::UnicodeSegmentation;

fn main() {
    // Create our trie
    let mut trie = Trie::new(Graphemes);

    // Insert a string segmented by grapheme cluster
    let s = "a̐éö̲\r\n";
    let count = s.graphemes(true).count();
    trie.put(s);
    assert!(trie.contains(&s));
    assert_eq!(trie.node_count(), count + 1);

    // Every cluster prefix of the string is a path in the trie
    assert!(trie.contains_prefix(&"a̐é"));
    assert!(!trie.contains(&"a̐é"));
    println!("{} clusters, {} nodes", count, trie.node_count());
}
