//! Prefix view into a trie.
//!
//! This module provides the `PrefixView` type, which borrows the subtrie found at a prefix and
//! answers questions about just that part of the tree.

use std::fmt;

use crate::node::TrieNode;
use crate::Trie;

/// A borrowed view into the subtrie at a prefix.
///
/// The prefix is normalized with the trie's case policy when the view is created, and the
/// words the view yields are in their stored (normalized) form.
///
/// # Examples
///
/// ```
/// use hemlock_trie::Trie;
///
/// let mut trie = Trie::new();
/// trie.extend(vec!["hello", "help", "world"]);
///
/// let view = trie.view_subtrie("hel");
///
/// assert!(view.exists());
/// assert_eq!(view.len(), 2);
/// assert_eq!(view.children(), vec!['l', 'p']);
/// assert!(view.contains_word("hello"));
/// assert!(!view.contains_word("world"));
///
/// let words: Vec<String> = view.iter().collect();
/// assert_eq!(words, vec!["hello", "help"]);
/// ```
#[derive(Clone)]
pub struct PrefixView<'a> {
    /// The source trie for this view
    trie: &'a Trie,

    /// The normalized prefix defining this view
    prefix: String,

    /// The subtrie node at the prefix, if it exists
    subtrie_node: Option<&'a TrieNode>,
}

/// An iterator over the words of a [`PrefixView`].
///
/// This iterator performs a depth-first traversal with children visited in ascending
/// character order, so words come out in lexicographic (code point) order.
pub struct PrefixViewIter<'a> {
    /// Nodes still to visit, each with the word spelled by the path to it
    stack: Vec<(&'a TrieNode, String)>,
}

impl<'a> PrefixView<'a> {
    /// Creates a new prefix view for the given trie and prefix.
    pub(crate) fn new(trie: &'a Trie, prefix: &str) -> Self {
        let prefix = trie.config.normalize(prefix).into_owned();
        let subtrie_node = trie.root.walk(prefix.chars());

        PrefixView {
            trie,
            prefix,
            subtrie_node,
        }
    }

    /// Returns the normalized prefix for this view.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the underlying trie.
    pub fn trie(&self) -> &'a Trie {
        self.trie
    }

    /// Returns whether the prefix exists in the trie.
    pub fn exists(&self) -> bool {
        self.subtrie_node.is_some()
    }

    /// Returns whether the prefix is itself a stored word.
    pub fn is_word(&self) -> bool {
        self.subtrie_node.map_or(false, |node| node.terminal)
    }

    /// Returns the sorted characters that can follow the prefix.
    ///
    /// Empty both when the prefix is absent and when it ends at a leaf; use
    /// [`exists`](Self::exists) to tell the two apart.
    pub fn children(&self) -> Vec<char> {
        self.subtrie_node
            .map(TrieNode::sorted_children)
            .unwrap_or_default()
    }

    /// Returns the number of words in this subtrie view.
    pub fn len(&self) -> usize {
        self.subtrie_node.map_or(0, TrieNode::subtree_size)
    }

    /// Returns whether this view is empty (contains no words).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks if the view contains a word.
    ///
    /// Only returns true if the word is stored in the trie and starts with the prefix.
    pub fn contains_word(&self, word: &str) -> bool {
        let word = self.trie.config.normalize(word);

        // The prefix is already normalized, so only the word needs folding
        if !word.starts_with(self.prefix.as_str()) {
            return false;
        }

        match self.subtrie_node {
            Some(node) => node
                .walk(word[self.prefix.len()..].chars())
                .map_or(false, |end| end.terminal),
            None => false,
        }
    }

    /// Returns an iterator over the words in the prefix view.
    ///
    /// The iterator yields owned words in lexicographic order.
    pub fn iter(&self) -> PrefixViewIter<'a> {
        let mut stack = Vec::new();

        if let Some(node) = self.subtrie_node {
            stack.push((node, self.prefix.clone()));
        }

        PrefixViewIter { stack }
    }
}

impl<'a> fmt::Debug for PrefixView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixView")
            .field("prefix", &self.prefix)
            .field("exists", &self.exists())
            .field("len", &self.len())
            .finish()
    }
}

// Views compare by the shape of their subtries, regardless of the prefix they hang off
impl<'a, 'b> PartialEq<PrefixView<'b>> for PrefixView<'a> {
    fn eq(&self, other: &PrefixView<'b>) -> bool {
        match (self.subtrie_node, other.subtrie_node) {
            (None, None) => true,
            (Some(a), Some(b)) => std::ptr::eq(a, b) || a == b,
            _ => false,
        }
    }
}

impl<'a> Eq for PrefixView<'a> {}

impl<'a, 'v> IntoIterator for &'v PrefixView<'a> {
    type Item = String;
    type IntoIter = PrefixViewIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> Iterator for PrefixViewIter<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, path)) = self.stack.pop() {
            // Push children in reverse so the smallest character is visited first
            for c in node.sorted_children().into_iter().rev() {
                if let Some(child) = node.children.get(&c) {
                    let mut child_path = path.clone();
                    child_path.push(c);
                    self.stack.push((child, child_path));
                }
            }

            if node.terminal {
                return Some(path);
            }
        }

        None
    }
}
