//! B-tree implementation in Rust with ordered integer keys.
//!
//! This crate provides a classic B-tree (minimum-degree formulation):
//! insertion splits full nodes proactively on the way down, deletion
//! borrows or merges proactively on the way down, and every mutation
//! preserves the structural invariants — bounded fanout, strictly sorted
//! keys, and uniform leaf depth. Diagnostic self-checks and a hierarchical
//! dump are included for test harnesses.

mod construction;
mod delete_operations;
mod error;
mod insert_operations;
mod node;
mod types;
mod validation;

pub use error::{BTreeError, BTreeResult, InitResult, ModifyResult};
pub use types::{BTree, Key, Node, DEFAULT_ORDER};

impl BTree {
    // ============================================================================
    // SEARCH OPERATIONS
    // ============================================================================

    /// Search for a key in the tree.
    ///
    /// Returns the node holding the key and the key's index within that
    /// node, or `None` if the key is not present.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let mut tree = BTree::new(2).unwrap();
    /// tree.insert(10).unwrap();
    ///
    /// let (node, index) = tree.search(10).unwrap();
    /// assert_eq!(node.keys()[index], 10);
    /// assert!(tree.search(11).is_none());
    /// ```
    pub fn search(&self, key: Key) -> Option<(&Node, usize)> {
        self.root.search(key)
    }

    /// Returns true if the key is present in the tree.
    pub fn contains(&self, key: Key) -> bool {
        self.search(key).is_some()
    }

    // ============================================================================
    // OTHER API OPERATIONS
    // ============================================================================

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        Self::len_recursive(&self.root)
    }

    fn len_recursive(node: &Node) -> usize {
        node.keys.len()
            + node
                .children
                .iter()
                .map(|child| Self::len_recursive(child))
                .sum::<usize>()
    }

    /// Returns true if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_leaf && self.root.keys.is_empty()
    }

    /// Returns the height of the tree: the number of edges from the root
    /// to any leaf. An empty tree or a lone leaf root has height 0.
    pub fn height(&self) -> usize {
        let mut node = &self.root;
        let mut height = 0;
        while !node.is_leaf {
            node = &node.children[0];
            height += 1;
        }
        height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_insert_search_remove_cycle() {
        let mut tree = BTree::new(2).unwrap();
        for key in [10, 20, 5, 6, 12, 30, 7, 17] {
            tree.insert(key).unwrap();
        }

        assert_eq!(tree.len(), 8);
        assert!(tree.contains(6));
        assert!(!tree.contains(8));

        tree.remove(6).unwrap();
        assert!(!tree.contains(6));
        assert_eq!(tree.len(), 7);
        assert!(tree.verify_properties());
    }

    #[test]
    fn test_search_returns_handle_into_owning_node() {
        let mut tree = BTree::new(2).unwrap();
        for key in [10, 20, 30, 15] {
            tree.insert(key).unwrap();
        }

        // After the root split, 20 sits alone in the internal root.
        let (node, index) = tree.search(20).unwrap();
        assert!(!node.is_leaf());
        assert_eq!(node.keys(), &[20]);
        assert_eq!(index, 0);

        let (node, index) = tree.search(15).unwrap();
        assert!(node.is_leaf());
        assert_eq!((node.keys()[index], index), (15, 1));
    }

    #[test]
    fn test_empty_tree_reports_itself() {
        let tree = BTree::new(3).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert!(tree.search(1).is_none());
        assert!(tree.verify_properties());
        assert!(tree.all_leaves_same_depth());
    }
}
