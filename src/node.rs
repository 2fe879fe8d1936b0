//! Internal node implementation for the trie.
//!
//! This module contains the internal `TrieNode` structure that forms the backbone of the
//! trie. Every node exclusively owns its children, so the whole tree is dropped with its root
//! and there are never shared or back references to keep in sync.

use std::collections::HashMap;

use tracing::trace;

/// Internal node type for the trie.
///
/// Each node maps a single character to the child node reached by that character, and
/// records whether the path from the root to this node spells a stored word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TrieNode {
    /// Child nodes indexed by the character on the edge leading to them
    pub children: HashMap<char, TrieNode>,

    /// Whether the path to this node is itself a stored word
    pub terminal: bool,
}

impl TrieNode {
    /// Creates a new node with no children that does not end a word
    pub fn new() -> Self {
        TrieNode::default()
    }

    /// Returns `true` if this node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns `true` if this node carries nothing: no word ends here and nothing hangs below.
    ///
    /// Such nodes must not survive in the tree, apart from the root.
    pub fn is_prunable(&self) -> bool {
        !self.terminal && self.is_leaf()
    }

    /// Returns the number of words stored in this subtree
    pub fn subtree_size(&self) -> usize {
        let mut count = if self.terminal { 1 } else { 0 };

        for child in self.children.values() {
            count += child.subtree_size();
        }

        count
    }

    /// Returns the characters of the immediate children in ascending code point order
    pub fn sorted_children(&self) -> Vec<char> {
        let mut chars: Vec<char> = self.children.keys().copied().collect();
        chars.sort_unstable();
        chars
    }

    /// Follows `path` one character at a time starting at this node.
    ///
    /// Returns `None` as soon as a character has no matching child, otherwise the node reached
    /// once the whole path is consumed. An empty path yields this node.
    pub fn walk<I>(&self, path: I) -> Option<&TrieNode>
    where
        I: IntoIterator<Item = char>,
    {
        let mut current = self;

        for c in path {
            current = current.children.get(&c)?;
        }

        Some(current)
    }

    /// Follows `path` from this node, creating every missing node on the way, and returns the
    /// node at the end of the path.
    pub fn walk_or_insert<I>(&mut self, path: I) -> &mut TrieNode
    where
        I: IntoIterator<Item = char>,
    {
        let mut current = self;

        for c in path {
            current = current.children.entry(c).or_insert_with(TrieNode::new);
        }

        current
    }

    /// Clears the terminal flag at the end of `path` and prunes on the way back up.
    ///
    /// Returns `true` if this node is left prunable, so the caller can drop its reference to
    /// it. The caller must have checked that `path` leads to a terminal node; if it does not,
    /// nothing is modified.
    pub fn unmark_and_prune(&mut self, path: &[char]) -> bool {
        let (head, tail) = match path.split_first() {
            Some(split) => split,
            None => {
                self.terminal = false;
                return self.is_prunable();
            }
        };

        let child_prunable = match self.children.get_mut(head) {
            Some(child) => child.unmark_and_prune(tail),
            None => return false,
        };

        if child_prunable {
            self.children.remove(head);
            trace!(character = %head, remaining = tail.len(), "pruned empty node");
        }

        self.is_prunable()
    }
}
