//! The word store itself.
//!
//! `Trie` owns the root node and the case policy, folds every argument through that policy,
//! and keeps the word count in step with the terminal flags as words come and go.

use std::iter::FromIterator;

use tracing::{debug, warn};

use crate::config::TrieConfig;
use crate::node::TrieNode;
use crate::prefix_view::{PrefixView, PrefixViewIter};
use crate::{Error, Result};

/// A mutable character trie storing whole words.
///
/// Each edge of the tree is labelled by one `char` and each node records whether the path to
/// it spells a stored word. The case policy is chosen at construction and never changes;
/// every word and prefix passed to any method goes through it before touching the tree.
///
/// Mutating methods take `&mut self` and queries take `&self`, so a trie shared between
/// threads needs an external lock around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trie {
    /// The root node of the trie, which never holds a word itself
    pub(crate) root: TrieNode,

    /// The case policy fixed at construction
    pub(crate) config: TrieConfig,

    /// The number of words stored in the trie
    size: usize,
}

impl Trie {
    /// Creates a new, empty, case-sensitive trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use hemlock_trie::Trie;
    ///
    /// let trie = Trie::new();
    /// assert!(trie.is_empty());
    /// assert!(trie.is_case_sensitive());
    /// ```
    pub fn new() -> Self {
        Self::with_config(TrieConfig::new())
    }

    /// Creates a new, empty trie with the given case policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use hemlock_trie::Trie;
    ///
    /// let mut trie = Trie::with_case_sensitivity(false);
    /// trie.add_word("Test").unwrap();
    /// assert!(trie.check_word("tEsT"));
    /// ```
    pub fn with_case_sensitivity(case_sensitive: bool) -> Self {
        Self::with_config(TrieConfig::new().case_sensitive(case_sensitive))
    }

    /// Creates a new, empty trie from a configuration.
    pub fn with_config(config: TrieConfig) -> Self {
        Trie {
            root: TrieNode::new(),
            config,
            size: 0,
        }
    }

    /// Returns the configuration this trie was built with.
    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// Returns `true` if words are matched with their case preserved.
    pub fn is_case_sensitive(&self) -> bool {
        self.config.is_case_sensitive()
    }

    /// Returns the number of words stored in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use hemlock_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert_eq!(trie.len(), 0);
    ///
    /// trie.add_word("hello").unwrap();
    /// trie.add_word("hello").unwrap();
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the trie contains no words.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes every word, keeping the case policy.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.size = 0;
    }

    /// Stores a word in the trie.
    ///
    /// Missing nodes along the word's path are created and the last one is marked as ending a
    /// word. Adding a word that is already stored changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyWord`] for the empty string, without modifying the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use hemlock_trie::{Error, Trie};
    ///
    /// let mut trie = Trie::new();
    /// trie.add_word("Test").unwrap();
    ///
    /// assert!(trie.check_word("Test"));
    /// assert_eq!(trie.add_word(""), Err(Error::EmptyWord));
    /// ```
    pub fn add_word(&mut self, word: &str) -> Result<()> {
        let normalized = self.config.normalize(word);

        if normalized.is_empty() {
            return Err(Error::EmptyWord);
        }

        let node = self.root.walk_or_insert(normalized.chars());
        if node.terminal {
            return Ok(());
        }
        node.terminal = true;
        self.size += 1;

        debug!(word = %normalized, len = self.size, "added word");
        Ok(())
    }

    /// Removes a word from the trie, pruning every node left without words.
    ///
    /// Pruning walks back from the end of the word towards the root and stops at the first
    /// node that still ends a word or still has other children, so shorter words and words
    /// sharing a prefix are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WordNotFound`] carrying `word` as given if the word is not stored,
    /// including when its path only exists as the prefix of longer words. The trie is not
    /// modified in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use hemlock_trie::{Error, Trie};
    ///
    /// let mut trie = Trie::new();
    /// trie.add_word("Test").unwrap();
    /// trie.add_word("Tests").unwrap();
    ///
    /// trie.remove_word("Tests").unwrap();
    /// assert!(trie.check_word("Test"));
    /// assert!(!trie.check_prefix("Tests"));
    ///
    /// assert_eq!(trie.remove_word("Te"), Err(Error::WordNotFound("Te".to_string())));
    /// ```
    pub fn remove_word(&mut self, word: &str) -> Result<()> {
        let normalized = self.config.normalize(word);
        let path: Vec<char> = normalized.chars().collect();

        let stored = self
            .root
            .walk(path.iter().copied())
            .map_or(false, |node| node.terminal);

        if !stored {
            debug!(word, "cannot remove missing word");
            return Err(Error::WordNotFound(word.to_string()));
        }

        // The root is never pruned, whatever it reports
        self.root.unmark_and_prune(&path);
        self.size -= 1;

        debug!(word = %normalized, len = self.size, "removed word");
        Ok(())
    }

    /// Returns `true` if the word is stored in the trie.
    ///
    /// A path that only exists as the prefix of longer words does not count.
    ///
    /// # Examples
    ///
    /// ```
    /// use hemlock_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.add_word("Test").unwrap();
    ///
    /// assert!(trie.check_word("Test"));
    /// assert!(!trie.check_word("Tes"));
    /// assert!(!trie.check_word("test"));
    /// ```
    pub fn check_word(&self, word: &str) -> bool {
        let normalized = self.config.normalize(word);

        self.root
            .walk(normalized.chars())
            .map_or(false, |node| node.terminal)
    }

    /// Returns `true` if some stored word starts with `prefix`.
    ///
    /// The empty prefix names the root and is always present.
    ///
    /// # Examples
    ///
    /// ```
    /// use hemlock_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.add_word("Test").unwrap();
    ///
    /// assert!(trie.check_prefix("Te"));
    /// assert!(trie.check_prefix("Test"));
    /// assert!(!trie.check_prefix("te"));
    /// ```
    pub fn check_prefix(&self, prefix: &str) -> bool {
        let normalized = self.config.normalize(prefix);

        self.root.walk(normalized.chars()).is_some()
    }

    /// Lists the characters that can follow `prefix`, in ascending code point order.
    ///
    /// A prefix that is present but ends at a leaf yields an empty list. The empty prefix
    /// lists the first characters of all stored words.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PrefixNotFound`] carrying `prefix` as given if no node exists at the
    /// prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use hemlock_trie::{Error, Trie};
    ///
    /// let mut trie = Trie::new();
    /// for word in &["Test", "Te", "talk", "Town", "Tectonic"] {
    ///     trie.add_word(word).unwrap();
    /// }
    ///
    /// assert_eq!(trie.get_children("T").unwrap(), vec!['e', 'o']);
    /// assert_eq!(trie.get_children("Te").unwrap(), vec!['c', 's']);
    /// assert!(trie.get_children("Town").unwrap().is_empty());
    /// assert_eq!(trie.get_children("x"), Err(Error::PrefixNotFound("x".to_string())));
    /// ```
    pub fn get_children(&self, prefix: &str) -> Result<Vec<char>> {
        let normalized = self.config.normalize(prefix);

        match self.root.walk(normalized.chars()) {
            Some(node) => Ok(node.sorted_children()),
            None => {
                debug!(prefix, "cannot list children of missing prefix");
                Err(Error::PrefixNotFound(prefix.to_string()))
            }
        }
    }

    /// Creates a view of the subtrie at the given prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use hemlock_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.add_word("hello").unwrap();
    /// trie.add_word("help").unwrap();
    ///
    /// let view = trie.view_subtrie("hel");
    /// assert!(view.contains_word("hello"));
    /// assert_eq!(view.len(), 2);
    /// ```
    pub fn view_subtrie(&self, prefix: &str) -> PrefixView<'_> {
        PrefixView::new(self, prefix)
    }

    /// Returns an iterator over every stored word in lexicographic order.
    ///
    /// # Examples
    ///
    /// ```
    /// use hemlock_trie::Trie;
    ///
    /// let trie: Trie = vec!["b", "ab", "a"].into_iter().collect();
    /// let words: Vec<String> = trie.words().collect();
    ///
    /// assert_eq!(words, vec!["a", "ab", "b"]);
    /// ```
    pub fn words(&self) -> PrefixViewIter<'_> {
        self.view_subtrie("").iter()
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    /// Adds every word, skipping the ones the trie refuses.
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            if let Err(err) = self.add_word(word.as_ref()) {
                warn!(%err, "skipping word");
            }
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    /// Builds a case-sensitive trie from the words.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}
