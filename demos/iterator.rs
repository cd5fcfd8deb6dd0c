use leaftrie::trie::Trie;
use rand::{distributions::Alphanumeric, thread_rng, Rng};

fn main() {
    static POPULATION_SIZE: usize = 10;
    static SIZE: usize = 10;

    // Create our trie and a collection of searches
    let mut trie = Trie::new();
    let mut searches = vec![];

    // Store 10 random strings composed of between 1 and 10 characters in
    // our search collection and our trie.
    for _i in 0..POPULATION_SIZE {
        let entry: String = thread_rng()
            .sample_iter(&Alphanumeric)
            .take(thread_rng().gen_range(1..=SIZE))
            .map(char::from)
            .collect();
        searches.push(entry.clone());
        let len = entry.len();
        trie.insert(entry, len);
    }

    // Iteration yields keys in order, so they must match our sorted searches
    searches.sort();
    searches.dedup();
    println!("iterator");
    for ((key, value), search) in trie.iter().zip(&searches) {
        assert_eq!(key, search);
        println!("key: {}, value: {}", key, value);
    }

    // The same walk, one cursor step at a time
    println!("cursor");
    let mut cursor = trie.begin();
    while cursor != trie.end() {
        let (key, value) = cursor.key_value();
        assert_eq!(trie.find(key.as_str()), cursor);
        println!("key: {}, value: {}", key, value);
        cursor.advance();
    }

    println!("tree");
    print!("{}", trie);
}
