//! Read-side node primitives for the B-tree.
//!
//! This module contains the recursive search primitive and the small
//! node-level helpers (branch index computation, fullness checks, extreme
//! key descent) that the insert and delete machinery is built on.

use crate::types::{Key, Node};

impl Node {
    // ============================================================================
    // SEARCH
    // ============================================================================

    /// Search for `key` in the subtree rooted at this node.
    ///
    /// Returns the owning node and the index of the key within it, or `None`
    /// if the key is not present in this subtree. Purely read-only.
    pub fn search(&self, key: Key) -> Option<(&Node, usize)> {
        let index = self.position_of(key);

        if index < self.keys.len() && self.keys[index] == key {
            return Some((self, index));
        }

        if self.is_leaf {
            None
        } else {
            self.children[index].search(key)
        }
    }

    /// Index of the first key `>= key`; also the branch index of the child
    /// subtree that may contain `key`. Linear scan, order-preserving.
    pub(crate) fn position_of(&self, key: Key) -> usize {
        let mut index = 0;
        while index < self.keys.len() && key > self.keys[index] {
            index += 1;
        }
        index
    }

    // ============================================================================
    // STATUS CHECKS
    // ============================================================================

    /// Returns true if this node holds the maximum `2t - 1` keys.
    pub(crate) fn is_full(&self, order: usize) -> bool {
        self.keys.len() == 2 * order - 1
    }

    /// Returns true if this node can give up a key without dropping below
    /// the `t - 1` minimum.
    pub(crate) fn can_spare(&self, order: usize) -> bool {
        self.keys.len() >= order
    }

    // ============================================================================
    // EXTREME KEY DESCENT
    // ============================================================================

    /// Largest key in the subtree rooted at this node: descend to the
    /// rightmost leaf. Used as the in-order predecessor during deletion.
    pub(crate) fn max_key(&self) -> Key {
        let mut node = self;
        while !node.is_leaf {
            node = node.children.last().unwrap();
        }
        *node.keys.last().unwrap()
    }

    /// Smallest key in the subtree rooted at this node: descend to the
    /// leftmost leaf. Used as the in-order successor during deletion.
    pub(crate) fn min_key(&self) -> Key {
        let mut node = self;
        while !node.is_leaf {
            node = &node.children[0];
        }
        node.keys[0]
    }
}
