//! Provides an ordered map whose keys are sequences of symbols, stored as a
//! prefix tree.
//!
//! Each symbol of a key selects a child of the current branch. Once the key
//! is consumed, the value lives in a leaf hanging off the branch's
//! terminator slot. The terminator sorts before every real symbol, so a
//! branch can hold the value of a short key and the paths of longer keys it
//! prefixes at the same time, and iteration yields the shorter key first.
//!
//! Keys must support the [`TrieKey`] trait, which breaks them into
//! [`TrieSymbol`]s. `String`/`str` (symbols are `char`) and `Vec<S>`/`[S]`
//! (symbols are `S`) are supported out of the box.
//!
//! Example 1
//! ```
//! use leaftrie::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("wer".to_string(), "who");
//! trie.insert("wir".to_string(), "we");
//! trie.insert("wird".to_string(), "will");
//!
//! assert_eq!(trie.get("wir"), Some(&"we"));
//! assert!(!trie.contains_key("wi"));
//! assert_eq!(trie.remove("wir"), Some("we"));
//! assert_eq!(trie.len(), 2);
//! ```
//!
//! Example 2
//! ```
//! use leaftrie::trie::Trie;
//! use unicode_segmentation::UnicodeSegmentation;
//!
//! let mut trie: Trie<usize, Vec<&str>> = Trie::new();
//! let key: Vec<&str> = "a̐éö̲\r\n".graphemes(true).collect();
//! trie.insert(key.clone(), key.len());
//! assert_eq!(trie.get(&key[..]), Some(&4));
//! ```
//!
//! The [`std::fmt::Display`] rendering draws the tree, two spaces of
//! indentation per level, with stored values on `:` lines.
//!
//! Example 3
//! ```
//! use leaftrie::trie::Trie;
//!
//! let trie: Trie<&str> = [("wer".to_string(), "who"), ("we".to_string(), "us")]
//!     .into_iter()
//!     .collect();
//! assert_eq!(trie.to_string(), "w\n  e\n    :us\n    r\n      :who\n");
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::io;

use crate::iterator::{Cursor, IntoIter, Iter};
use crate::node::{Branch, Node};

/// Symbols which make up the keys of a Trie must implement
/// TrieSymbol.
pub trait TrieSymbol: Clone + Ord {}

// Blanket implementation which satisfies the compiler
impl<S> TrieSymbol for S where S: Clone + Ord {}

/// Keys which can be broken down into a sequence of symbols.
pub trait TrieKey {
    type Symbol: TrieSymbol;

    fn symbols(&self) -> impl Iterator<Item = Self::Symbol> + '_;
}

impl TrieKey for str {
    type Symbol = char;

    fn symbols(&self) -> impl Iterator<Item = Self::Symbol> + '_ {
        self.chars()
    }
}

impl TrieKey for String {
    type Symbol = char;

    fn symbols(&self) -> impl Iterator<Item = Self::Symbol> + '_ {
        self.chars()
    }
}

impl<S: TrieSymbol> TrieKey for [S] {
    type Symbol = S;

    fn symbols(&self) -> impl Iterator<Item = Self::Symbol> + '_ {
        self.iter().cloned()
    }
}

impl<S: TrieSymbol> TrieKey for Vec<S> {
    type Symbol = S;

    fn symbols(&self) -> impl Iterator<Item = Self::Symbol> + '_ {
        self.iter().cloned()
    }
}

pub(crate) type TrieBranch<V, K> = Branch<<K as TrieKey>::Symbol, K, V>;
pub(crate) type TrieNode<V, K> = Node<<K as TrieKey>::Symbol, K, V>;

/// Maps keys to values, one leaf per key.
///
/// The root branch only exists while the trie holds at least one key.
pub struct Trie<V, K: TrieKey = String> {
    pub(crate) root: Option<TrieBranch<V, K>>,
    pub(crate) len: usize,
}

impl<V, K: TrieKey> Trie<V, K> {
    /// Create a new, empty Trie.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Cursor at the smallest key, or the end cursor if the trie is empty.
    pub fn begin(&self) -> Cursor<'_, V, K> {
        Cursor::first(self.root.as_ref())
    }

    /// The end cursor.
    pub fn end(&self) -> Cursor<'_, V, K> {
        Cursor::end()
    }

    /// Clear the Trie.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
        #[cfg(feature = "tracing")]
        tracing::trace!("cleared trie");
    }

    /// Does the Trie contain the supplied key?
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: TrieKey<Symbol = K::Symbol> + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Cursor at the entry for exactly `key`, or the end cursor if there is
    /// no such entry.
    pub fn find<Q>(&self, key: &Q) -> Cursor<'_, V, K>
    where
        K: Borrow<Q>,
        Q: TrieKey<Symbol = K::Symbol> + ?Sized,
    {
        Cursor::seek(self.root.as_ref(), key.symbols())
    }

    /// Get a reference to a key's associated value.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: TrieKey<Symbol = K::Symbol> + ?Sized,
    {
        self.root
            .as_ref()?
            .descendant(key.symbols())?
            .leaf()
            .map(|(_, value)| value)
    }

    /// Insert the key and value into the Trie. If the key is already present
    /// its leaf is replaced and the previously associated value returned.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut branch = self.root.get_or_insert_with(Branch::default);
        for symbol in key.symbols() {
            branch = branch.child_or_insert(symbol);
        }
        let previous = branch.set_leaf(key, value).map(|(_, value)| value);
        if previous.is_none() {
            self.len += 1;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(
            replaced = previous.is_some(),
            len = self.len,
            "inserted key"
        );
        previous
    }

    /// Is the Trie empty?
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Iterate over the entries in key order.
    pub fn iter(&self) -> Iter<'_, V, K> {
        Iter::new(self.begin(), self.len)
    }

    /// Iterate over the keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// Iterate over the values in key order.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, value)| value)
    }

    /// How many keys does the Trie contain?
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Remove the key from the Trie, returning its value. Branches left
    /// without children are removed with it. Removing a missing key does
    /// nothing.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: TrieKey<Symbol = K::Symbol> + ?Sized,
    {
        let root = self.root.as_mut()?;
        let (_, value) = root.remove(key.symbols())?;
        if root.children.is_empty() {
            self.root = None;
        }
        self.len -= 1;
        #[cfg(feature = "tracing")]
        tracing::trace!(len = self.len, "removed key");
        Some(value)
    }
}

impl<V: fmt::Display, K: TrieKey> Trie<V, K>
where
    K::Symbol: fmt::Display,
{
    /// Write the tree rendering of [`fmt::Display`] to `sink`.
    pub fn print_on<W: io::Write>(&self, sink: &mut W) -> io::Result<()> {
        write!(sink, "{self}")
    }
}

impl<V, K: TrieKey> Default for Trie<V, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone, K: TrieKey + Clone> Clone for Trie<V, K> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<V: PartialEq, K: TrieKey + PartialEq> PartialEq for Trie<V, K> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.root == other.root
    }
}

impl<V: Eq, K: TrieKey + Eq> Eq for Trie<V, K> {}

impl<V: fmt::Debug, K: TrieKey + fmt::Debug> fmt::Debug for Trie<V, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V: fmt::Display, K: TrieKey> fmt::Display for Trie<V, K>
where
    K::Symbol: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            Some(root) => root.render(f),
            None => Ok(()),
        }
    }
}

impl<V, K: TrieKey> FromIterator<(K, V)> for Trie<V, K> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<V, K: TrieKey> Extend<(K, V)> for Trie<V, K> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<V, K: TrieKey> IntoIterator for Trie<V, K> {
    type Item = (K, V);
    type IntoIter = IntoIter<V, K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.root, self.len)
    }
}

impl<'a, V, K: TrieKey> IntoIterator for &'a Trie<V, K> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, V, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
