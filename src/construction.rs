//! Construction and initialization logic for the B-tree and its nodes.
//!
//! This module contains order validation, root setup, and the node
//! constructors used by the split and merge machinery.

use crate::error::{BTreeError, InitResult};
use crate::types::{BTree, Node, DEFAULT_ORDER, MIN_ORDER};

impl BTree {
    /// Create a B-tree with the specified order (minimum degree).
    ///
    /// The root is created as an empty leaf; the tree grows upward from it
    /// when the root splits.
    ///
    /// # Arguments
    ///
    /// * `order` - Minimum degree `t` of the tree (minimum 2)
    ///
    /// # Returns
    ///
    /// Returns `Ok(BTree)` if the order is valid, `Err(BTreeError)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let tree = BTree::new(2).unwrap();
    /// assert!(tree.is_empty());
    ///
    /// assert!(BTree::new(1).is_err());
    /// ```
    pub fn new(order: usize) -> InitResult<Self> {
        if order < MIN_ORDER {
            return Err(BTreeError::invalid_order(order, MIN_ORDER));
        }

        Ok(Self {
            order,
            root: Box::new(Node::new_leaf()),
        })
    }

    /// Create a B-tree with the default order.
    ///
    /// This is equivalent to calling `new(DEFAULT_ORDER)`.
    pub fn with_default_order() -> Self {
        Self {
            order: DEFAULT_ORDER,
            root: Box::new(Node::new_leaf()),
        }
    }

    /// Returns the order (minimum degree) of the tree.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Maximum number of keys any node may hold, `2t - 1`.
    pub(crate) fn max_keys(&self) -> usize {
        2 * self.order - 1
    }
}

impl Default for BTree {
    fn default() -> Self {
        Self::with_default_order()
    }
}

impl Node {
    /// Creates an empty leaf node.
    pub(crate) fn new_leaf() -> Self {
        Self {
            is_leaf: true,
            keys: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates an empty internal node. Used transiently while growing the
    /// tree; callers are responsible for attaching children.
    pub(crate) fn new_internal() -> Self {
        Self {
            is_leaf: false,
            keys: Vec::new(),
            children: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_order_below_minimum() {
        for order in [0, 1] {
            let err = BTree::new(order).unwrap_err();
            assert!(err.is_configuration_error(), "order {} must be rejected", order);
        }
    }

    #[test]
    fn test_new_tree_starts_as_empty_leaf_root() {
        let tree = BTree::new(2).unwrap();
        assert_eq!(tree.order(), 2);
        assert_eq!(tree.max_keys(), 3);
        assert!(tree.root.is_leaf());
        assert!(tree.root.is_empty());
    }

    #[test]
    fn test_default_order() {
        let tree = BTree::default();
        assert_eq!(tree.order(), DEFAULT_ORDER);
        assert!(tree.is_empty());
    }
}
