//! Provides an ordered map keyed by sequences of symbols, stored as a
//! prefix tree with values at its leaves.
//!
//! Keys must support the [`crate::trie::TrieKey`] trait, which breaks a key
//! into symbols satisfying [`crate::trie::TrieSymbol`]. Strings break into
//! `char`s and vectors into their elements, so the same container serves
//! text, grapheme clusters, words or numeric sequences, depending on what
//! granularity makes sense for the keys being stored.
//!
//! Every branch of the tree keeps its children sorted, with a terminator
//! slot ordered before every real symbol. A key's value hangs off the
//! terminator slot of the branch its symbols lead to, so iteration visits
//! keys in lexicographic order and a key always comes before the keys it
//! prefixes.
//!
//! Traversal is driven by [`crate::iterator::Cursor`], an explicit stack of
//! (branch, position) frames. [`crate::trie::Trie::begin`],
//! [`crate::trie::Trie::end`] and [`crate::trie::Trie::find`] hand out
//! cursors; [`crate::iterator::Iter`] wraps one as a standard iterator.
//!
//! Examples:
//! * trie : [`crate::trie`]
//! * iterator : [`crate::iterator`]
//!
//! Enable the `tracing` feature to get `trace` level events for every
//! structural change.

pub mod error;

pub mod iterator;

mod node;

pub mod trie;

#[cfg(test)]
mod proptests;
