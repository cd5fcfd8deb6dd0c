use crate::trie::Trie;

use proptest::prelude::*;
use std::collections::BTreeMap;

fn validate<V>(trie: &Trie<V>) {
    match &trie.root {
        Some(root) => assert_eq!(root.validate(), trie.len(), "leaf count must match len"),
        None => assert_eq!(trie.len(), 0, "rootless trie must be empty"),
    }
}

#[derive(Clone, Debug)]
enum Op {
    Insert(String, u32),
    Remove(String),
    Clear,
}

fn key() -> impl Strategy<Value = String> {
    // A small alphabet forces shared prefixes and prefix keys
    "[abc]{0,5}"
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (key(), any::<u32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        3 => key().prop_map(Op::Remove),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    #[test]
    fn prop_matches_btreemap(ops in prop::collection::vec(op(), 0..200)) {
        let mut trie = Trie::new();
        let mut model = BTreeMap::new();
        for op in ops {
            match op {
                Op::Insert(k, v) => {
                    prop_assert_eq!(trie.insert(k.clone(), v), model.insert(k, v));
                }
                Op::Remove(k) => {
                    prop_assert_eq!(trie.remove(k.as_str()), model.remove(&k));
                    prop_assert_eq!(trie.find(k.as_str()), trie.end());
                }
                Op::Clear => {
                    trie.clear();
                    model.clear();
                }
            }
            validate(&trie);
            prop_assert_eq!(trie.len(), model.len());
            prop_assert_eq!(trie.is_empty(), model.is_empty());
        }
        prop_assert!(trie.iter().eq(model.iter()));
        for (k, v) in &model {
            prop_assert_eq!(trie.find(k.as_str()).key_value(), (k, v));
        }
        prop_assert!(trie.into_iter().eq(model.into_iter()));
    }

    #[test]
    fn prop_removing_everything_leaves_an_empty_trie(
        entries in prop::collection::vec((key(), any::<u32>()), 0..64)
    ) {
        let mut trie: Trie<u32> = entries.iter().cloned().collect();
        for (k, _) in &entries {
            trie.remove(k.as_str());
            validate(&trie);
        }
        prop_assert!(trie.is_empty());
        prop_assert!(trie.root.is_none());
        prop_assert_eq!(trie.begin(), trie.end());
        prop_assert_eq!(trie.to_string(), "");
    }

    #[test]
    fn prop_cursor_walk_counts_every_key(
        entries in prop::collection::vec((key(), any::<u32>()), 0..64)
    ) {
        let trie: Trie<u32> = entries.into_iter().collect();
        let mut cursor = trie.begin();
        let mut previous: Option<&String> = None;
        let mut count = 0;
        while !cursor.is_end() {
            let (k, _) = cursor.key_value();
            prop_assert!(previous < Some(k));
            prop_assert_eq!(trie.find(k.as_str()), cursor.clone());
            previous = Some(k);
            count += 1;
            cursor.advance();
        }
        prop_assert_eq!(count, trie.len());
    }
}
