//! Errors raised by checked cursor operations.
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The cursor is the end sentinel and has no entry to yield or move past.
    #[error("cursor is positioned at the end of the trie")]
    EndOfTrie,
}

pub type Result<T> = std::result::Result<T, Error>;
