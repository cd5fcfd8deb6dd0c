//! Provides Trie cursors and iterators.
//!
//! A [`Cursor`] records the path from the root to the leaf it is positioned
//! on, one frame per branch, instead of recursing. The empty path is the end
//! cursor. Cursors borrow the trie, so it cannot change under them.
//!
//! ```
//! use leaftrie::trie::Trie;
//!
//! let trie: Trie<u8> = [("b", 2), ("a", 1), ("ab", 3)]
//!     .into_iter()
//!     .map(|(k, v)| (k.to_string(), v))
//!     .collect();
//!
//! let mut cursor = trie.begin();
//! assert_eq!(cursor.key_value(), (&"a".to_string(), &1));
//! cursor.advance();
//! assert_eq!(cursor.key_value(), (&"ab".to_string(), &3));
//! let previous = cursor.post_advance();
//! assert_eq!(previous, trie.find("ab"));
//! assert_eq!(cursor, trie.find("b"));
//! cursor.advance();
//! assert_eq!(cursor, trie.end());
//! ```
use std::collections::btree_map;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;
use std::ops::Bound;
use std::ptr;

use crate::error::{Error, Result};
use crate::node::{Edge, Node};
use crate::trie::{TrieBranch, TrieKey, TrieNode};

struct Frame<'a, V, K: TrieKey> {
    branch: &'a TrieBranch<V, K>,
    edge: &'a Edge<K::Symbol>,
    node: &'a TrieNode<V, K>,
}

impl<'a, V, K: TrieKey> Clone for Frame<'a, V, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, V, K: TrieKey> Copy for Frame<'a, V, K> {}

impl<'a, V, K: TrieKey> PartialEq for Frame<'a, V, K> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.branch, other.branch) && self.edge == other.edge
    }
}

/// Position in a Trie: either on one entry or at the end.
///
/// Two cursors are equal when they took the same path through the same
/// trie.
pub struct Cursor<'a, V, K: TrieKey = String> {
    path: Vec<Frame<'a, V, K>>,
}

impl<'a, V, K: TrieKey> Cursor<'a, V, K> {
    pub(crate) fn end() -> Self {
        Self { path: Vec::new() }
    }

    pub(crate) fn first(root: Option<&'a TrieBranch<V, K>>) -> Self {
        let mut cursor = Self::end();
        if let Some(root) = root {
            cursor.enter(root);
            cursor.descend();
        }
        cursor
    }

    pub(crate) fn seek<I>(root: Option<&'a TrieBranch<V, K>>, symbols: I) -> Self
    where
        I: IntoIterator<Item = K::Symbol>,
    {
        let Some(mut branch) = root else {
            return Self::end();
        };
        let mut path = Vec::new();
        for symbol in symbols {
            let Some((edge, node)) = branch.children.get_key_value(&Edge::Symbol(symbol)) else {
                return Self::end();
            };
            match node {
                Node::Branch(child) => {
                    path.push(Frame { branch, edge, node });
                    branch = child;
                }
                Node::Leaf(..) => return Self::end(),
            }
        }
        match branch.children.get_key_value(&Edge::End) {
            Some((edge, node)) => {
                path.push(Frame { branch, edge, node });
                Self { path }
            }
            None => Self::end(),
        }
    }

    // Push a frame for the first child of `branch`.
    fn enter(&mut self, branch: &'a TrieBranch<V, K>) {
        match branch.children.iter().next() {
            Some((edge, node)) => self.path.push(Frame { branch, edge, node }),
            None => unreachable!("empty branches are pruned"),
        }
    }

    // Follow first children until the deepest frame sits on a leaf. The
    // terminator is always a branch's first child, so a key is reached
    // before any key it prefixes.
    fn descend(&mut self) {
        while let Some(frame) = self.path.last() {
            let node: &'a TrieNode<V, K> = frame.node;
            match node {
                Node::Branch(branch) => self.enter(branch),
                Node::Leaf(..) => break,
            }
        }
    }

    /// Is this the end cursor?
    pub fn is_end(&self) -> bool {
        self.path.is_empty()
    }

    /// The entry under the cursor, or None at the end.
    pub fn get(&self) -> Option<(&'a K, &'a V)> {
        let node: &'a TrieNode<V, K> = self.path.last()?.node;
        match node {
            Node::Leaf(key, value) => Some((key, value)),
            Node::Branch(_) => None,
        }
    }

    /// The entry under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if this is the end cursor.
    pub fn key_value(&self) -> (&'a K, &'a V) {
        match self.get() {
            Some(entry) => entry,
            None => panic!("dereferenced the end cursor of a trie"),
        }
    }

    /// The entry under the cursor, or [`Error::EndOfTrie`] at the end.
    pub fn try_key_value(&self) -> Result<(&'a K, &'a V)> {
        self.get().ok_or(Error::EndOfTrie)
    }

    /// Move to the next key in order, or to the end after the last one.
    ///
    /// # Panics
    ///
    /// Panics if this is already the end cursor.
    pub fn advance(&mut self) -> &mut Self {
        assert!(!self.is_end(), "advanced the end cursor of a trie");
        while let Some(frame) = self.path.pop() {
            let mut siblings = frame
                .branch
                .children
                .range::<Edge<K::Symbol>, _>((Bound::Excluded(frame.edge), Bound::Unbounded));
            if let Some((edge, node)) = siblings.next() {
                self.path.push(Frame {
                    branch: frame.branch,
                    edge,
                    node,
                });
                self.descend();
                break;
            }
        }
        self
    }

    /// Advance, returning the cursor as it was before moving.
    ///
    /// # Panics
    ///
    /// Panics if this is already the end cursor.
    pub fn post_advance(&mut self) -> Self {
        let previous = self.clone();
        self.advance();
        previous
    }

    /// Advance, or fail with [`Error::EndOfTrie`] if this is the end cursor.
    pub fn try_advance(&mut self) -> Result<&mut Self> {
        if self.is_end() {
            return Err(Error::EndOfTrie);
        }
        Ok(self.advance())
    }
}

impl<'a, V, K: TrieKey> Clone for Cursor<'a, V, K> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
        }
    }
}

impl<'a, V, K: TrieKey> PartialEq for Cursor<'a, V, K> {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl<'a, V, K: TrieKey> Eq for Cursor<'a, V, K> {}

impl<'a, V: fmt::Debug, K: TrieKey + fmt::Debug> fmt::Debug for Cursor<'a, V, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("entry", &self.get())
            .field("depth", &self.path.len())
            .finish()
    }
}

/// Iterator over a Trie.
pub struct Iter<'a, V, K: TrieKey = String> {
    cursor: Cursor<'a, V, K>,
    remaining: usize,
}

impl<'a, V, K: TrieKey> Iter<'a, V, K> {
    pub(crate) fn new(cursor: Cursor<'a, V, K>, remaining: usize) -> Self {
        Self { cursor, remaining }
    }
}

impl<'a, V, K: TrieKey> Clone for Iter<'a, V, K> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, V, K: TrieKey> Iterator for Iter<'a, V, K> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.cursor.get()?;
        self.cursor.advance();
        self.remaining -= 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, V, K: TrieKey> ExactSizeIterator for Iter<'a, V, K> {}

impl<'a, V, K: TrieKey> FusedIterator for Iter<'a, V, K> {}

/// Consuming iterator over a Trie.
pub struct IntoIter<V, K: TrieKey = String> {
    stack: Vec<btree_map::IntoIter<Edge<K::Symbol>, TrieNode<V, K>>>,
    remaining: usize,
}

impl<V, K: TrieKey> IntoIter<V, K> {
    pub(crate) fn new(root: Option<TrieBranch<V, K>>, remaining: usize) -> Self {
        Self {
            stack: root
                .map(|mut root| mem::take(&mut root.children).into_iter())
                .into_iter()
                .collect(),
            remaining,
        }
    }
}

impl<V, K: TrieKey> Iterator for IntoIter<V, K> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let children = self.stack.last_mut()?;
            match children.next() {
                Some((_, Node::Leaf(key, value))) => {
                    self.remaining -= 1;
                    return Some((key, value));
                }
                Some((_, Node::Branch(mut branch))) => {
                    self.stack.push(mem::take(&mut branch.children).into_iter())
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V, K: TrieKey> ExactSizeIterator for IntoIter<V, K> {}

impl<V, K: TrieKey> FusedIterator for IntoIter<V, K> {}
