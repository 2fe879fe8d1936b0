//! Per-trie configuration and the input normalization it implies.
use std::borrow::Cow;

/// Settings fixed for the lifetime of a [`Trie`](crate::Trie).
///
/// The only setting is the case policy. When case sensitivity is off, every word and prefix
/// handed to the trie is lowercased before it touches the tree, so stored keys are never
/// mixed-case.
///
/// ```rust
/// use hemlock_trie::{Trie, TrieConfig};
///
/// let config = TrieConfig::new().case_sensitive(false);
/// let mut trie = Trie::with_config(config);
/// trie.add_word("Test").unwrap();
///
/// assert!(trie.check_word("TEST"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrieConfig {
    case_sensitive: bool,
}

impl TrieConfig {
    /// Creates the default configuration, which is case-sensitive
    pub fn new() -> Self {
        TrieConfig {
            case_sensitive: true,
        }
    }

    /// Sets whether words are matched with their case preserved
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Returns `true` if words are matched with their case preserved
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Applies this configuration's case policy to `input`.
    ///
    /// Borrows the input untouched in case-sensitive mode and lowercases it into an owned
    /// string otherwise. Each character is folded on its own, so the folded form of a prefix
    /// is always a prefix of the folded word.
    pub(crate) fn normalize<'a>(&self, input: &'a str) -> Cow<'a, str> {
        if self.case_sensitive {
            Cow::Borrowed(input)
        } else {
            Cow::Owned(input.chars().flat_map(char::to_lowercase).collect())
        }
    }
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self::new()
    }
}
