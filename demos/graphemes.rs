use leaftrie::trie::Trie;
use unicode_segmentation::UnicodeSegmentation;

fn main() {
    // Create our trie
    let mut trie = Trie::new();

    // Insert some graphemes
    let s = "a̐éö̲\r\n";
    let input: Vec<&str> = s.graphemes(true).collect();
    let count = input.len();
    trie.insert(input.clone(), count);
    assert!(trie.contains_key(&input));
    assert!(trie.get(&input[..]).is_some());
    assert_eq!(trie.get(&input), Some(&count));
    assert_eq!(trie.find(&input).key_value(), (&input, &count));
}
