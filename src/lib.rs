//! # Hemlock Trie
//!
//! A mutable character trie for storing words and answering prefix questions about them.
//!
//! Every edge of the trie is labelled by a single `char`, and each node remembers whether the
//! path leading to it spells a complete stored word. Removing a word prunes every node that is
//! left with no children and no word of its own, so the tree never holds dead branches.
//!
//! ## Features
//!
//! - **Word storage**: add, remove and check whole words
//! - **Prefix queries**: check whether any stored word starts with a prefix
//! - **Child listing**: list the next characters reachable from a prefix, sorted
//! - **Case policy**: fixed per trie at construction, case-sensitive by default
//! - **Prefix Views**: borrow a subtrie and iterate its words in lexicographic order
//!
//! ## Example
//!
//! ```rust
//! use hemlock_trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.add_word("Test")?;
//! trie.add_word("Tests")?;
//!
//! assert!(trie.check_word("Test"));
//! assert!(trie.check_prefix("Tes"));
//! assert_eq!(trie.get_children("Test")?, vec!['s']);
//!
//! trie.remove_word("Test")?;
//! assert!(!trie.check_word("Test"));
//! assert!(trie.check_word("Tests"));
//! # Ok::<(), hemlock_trie::Error>(())
//! ```

mod config;
mod node;
mod prefix_view;
mod trie;

// Re-export public types
pub use crate::config::TrieConfig;
pub use crate::prefix_view::{PrefixView, PrefixViewIter};
pub use crate::trie::Trie;

/// Errors that can occur in trie operations
///
/// The not-found variants carry the caller's input exactly as it was passed in, before any
/// case folding, so the message points at what the caller actually asked for.
///
/// ```rust
/// use hemlock_trie::{Error, Trie};
///
/// let mut trie = Trie::with_case_sensitivity(false);
/// trie.add_word("Tests").unwrap();
///
/// let err = trie.remove_word("TEST").unwrap_err();
/// assert_eq!(err, Error::WordNotFound("TEST".to_string()));
/// assert_eq!(err.to_string(), "No such word: TEST");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The word is not stored, either because its path is missing or because the path only
    /// exists as a prefix of longer words
    #[error("No such word: {0}")]
    WordNotFound(String),
    /// No node exists at the requested prefix
    #[error("No such prefix: {0}")]
    PrefixNotFound(String),
    /// The empty string cannot be stored as a word
    #[error("Cannot add an empty word")]
    EmptyWord,
}

/// Result type for fallible trie operations.
pub type Result<T> = std::result::Result<T, Error>;
