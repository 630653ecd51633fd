use rand::{distributions::Alphanumeric, thread_rng, Rng};
use segtrie::segment::Chars;
use segtrie::trie::Trie;

fn main() {
    static POPULATION_SIZE: usize = 10;
    static SIZE: usize = 10;

    // Create our trie and a collection of searches
    let mut trie = Trie::new(Chars);
    let mut searches = vec![];

    // Store 10 random strings composed of between 1 and 10
    // characters in our search collection and our trie.
    for _i in 0..POPULATION_SIZE {
        let entry: String = thread_rng()
            .sample_iter(&Alphanumeric)
            .take(thread_rng().gen_range(1..=SIZE))
            .map(char::from)
            .collect();
        searches.push(entry.clone());
        trie.put(entry);
    }

    // Iterate breadth first and confirm that all values are in
    // our search collection
    println!("breadth first");
    for value in trie.iter() {
        assert!(searches.contains(value));
        println!("value: {}", value);
    }

    // Drain the trie through a cursor, removing the short values first
    println!("draining");
    let mut cursor = trie.cursor();
    while let Ok(Some(value)) = cursor.next(&trie) {
        println!("removing: {}", value);
        if cursor.remove(&mut trie).is_err() {
            break;
        }
    }
    assert!(trie.is_empty());
    assert_eq!(trie.node_count(), 1);
}
