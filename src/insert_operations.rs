//! Insert operations for the B-tree.
//!
//! Insertion descends from the root, splitting any full node before it is
//! entered so that a leaf always has room for the new key. The root split
//! is handled at the tree level; it is the only point where the tree grows
//! in height.

use crate::error::{BTreeError, ModifyResult};
use crate::types::{BTree, Key, Node};

impl BTree {
    /// Insert a key into the tree.
    ///
    /// # Errors
    ///
    /// Returns `PreconditionViolation` if the key is already present. The
    /// check happens before any structural change, so a rejected insert
    /// leaves the tree untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let mut tree = BTree::new(2).unwrap();
    /// tree.insert(10).unwrap();
    /// assert!(tree.insert(10).is_err());
    /// ```
    pub fn insert(&mut self, key: Key) -> ModifyResult<()> {
        if self.search(key).is_some() {
            return Err(BTreeError::duplicate_key(key));
        }

        if self.root.keys.len() == self.max_keys() {
            // Grow upward: the old root becomes the sole child of a fresh
            // internal root, then splits into two siblings under it.
            let old_root = std::mem::replace(&mut self.root, Box::new(Node::new_internal()));
            self.root.children.push(old_root);
            self.root.split_child(0, self.order);
        }

        let order = self.order;
        self.root.insert_non_full(key, order);
        Ok(())
    }
}

impl Node {
    /// Insert `key` into the subtree rooted at this node, which must not be
    /// full. Any full child on the descent path is split before entering it.
    pub(crate) fn insert_non_full(&mut self, key: Key, order: usize) {
        if self.is_leaf {
            // Shift from the right to find the sorted position.
            let mut index = self.keys.len();
            while index > 0 && key < self.keys[index - 1] {
                index -= 1;
            }
            self.keys.insert(index, key);
        } else {
            let mut index = self.position_of(key);
            if self.children[index].is_full(order) {
                self.split_child(index, order);
                // The promoted median now sits at `index`; step right of it
                // when the key belongs in the upper half.
                if key > self.keys[index] {
                    index += 1;
                }
            }
            self.children[index].insert_non_full(key, order);
        }
    }

    /// Split the full child at `index`, promoting its median key into this
    /// node and inserting the new right sibling at `index + 1`.
    ///
    /// The child keeps the lower `t - 1` keys (and, if internal, the lower
    /// `t` children); the new sibling takes the upper `t - 1` keys (and the
    /// upper `t` children).
    pub(crate) fn split_child(&mut self, index: usize, order: usize) {
        debug_assert!(self.children[index].is_full(order));

        let (median, right) = {
            let full = &mut self.children[index];
            let right_keys = full.keys.split_off(order);
            let median = full.keys.pop().unwrap();
            let right_children = if full.is_leaf {
                Vec::new()
            } else {
                full.children.split_off(order)
            };
            let right = Node {
                is_leaf: full.is_leaf,
                keys: right_keys,
                children: right_children,
            };
            (median, Box::new(right))
        };

        self.keys.insert(index, median);
        self.children.insert(index + 1, right);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_leaf(order: usize, start: Key) -> Box<Node> {
        let mut node = Node::new_leaf();
        node.keys = (0..(2 * order as Key - 1)).map(|i| start + i).collect();
        Box::new(node)
    }

    #[test]
    fn test_split_child_partitions_keys_around_median() {
        // t = 2: full child [10, 11, 12] splits into [10] / median 11 / [12]
        let mut parent = Node::new_internal();
        parent.children.push(full_leaf(2, 10));
        parent.split_child(0, 2);

        assert_eq!(parent.keys, vec![11]);
        assert_eq!(parent.children.len(), 2);
        assert_eq!(parent.children[0].keys(), &[10]);
        assert_eq!(parent.children[1].keys(), &[12]);
    }

    #[test]
    fn test_split_child_at_order_three() {
        // t = 3: full child [0..=4] splits into [0, 1] / median 2 / [3, 4]
        let mut parent = Node::new_internal();
        parent.children.push(full_leaf(3, 0));
        parent.split_child(0, 3);

        assert_eq!(parent.keys, vec![2]);
        assert_eq!(parent.children[0].keys(), &[0, 1]);
        assert_eq!(parent.children[1].keys(), &[3, 4]);
    }

    #[test]
    fn test_split_internal_child_moves_upper_children() {
        // t = 2 internal child with keys [10, 20, 30] and four leaves.
        let mut child = Node::new_internal();
        child.keys = vec![10, 20, 30];
        for start in [0, 12, 22, 32] {
            let mut grandchild = Node::new_leaf();
            grandchild.keys = vec![start, start + 1];
            child.children.push(Box::new(grandchild));
        }

        let mut parent = Node::new_internal();
        parent.children.push(Box::new(child));
        parent.split_child(0, 2);

        assert_eq!(parent.keys, vec![20]);
        let left = &parent.children[0];
        let right = &parent.children[1];
        assert_eq!(left.keys(), &[10]);
        assert_eq!(left.children.len(), 2);
        assert_eq!(right.keys(), &[30]);
        assert_eq!(right.children.len(), 2);
        assert_eq!(right.children[0].keys(), &[22, 23]);
    }

    #[test]
    fn test_insert_non_full_keeps_leaf_sorted() {
        let mut node = Node::new_leaf();
        for key in [20, 10, 30] {
            node.insert_non_full(key, 3);
        }
        assert_eq!(node.keys(), &[10, 20, 30]);
    }
}
