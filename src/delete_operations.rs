//! Delete operations for the B-tree.
//!
//! Deletion descends from the root, refilling any underfull child before it
//! is entered so that removing a key never leaves a node below the `t - 1`
//! minimum. Refilling prefers borrowing over merging, and borrowing from
//! the left sibling over the right; when a merge is unavoidable the child
//! merges with its right sibling unless it is the last child, in which case
//! it merges with its left. The root collapse at the end of `remove` is the
//! only point where the tree shrinks in height.

use crate::error::{BTreeError, ModifyResult, TreeResult};
use crate::types::{BTree, Key, Node};

impl BTree {
    /// Remove a key from the tree.
    ///
    /// # Errors
    ///
    /// Returns `PreconditionViolation` if the key is not present. The check
    /// happens before any structural change, so a rejected remove leaves
    /// the tree untouched. Removing from an empty tree is the same case:
    /// no key is present, so the precondition rejects it.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let mut tree = BTree::new(2).unwrap();
    /// tree.insert(10).unwrap();
    /// tree.remove(10).unwrap();
    /// assert!(tree.remove(10).is_err());
    /// ```
    pub fn remove(&mut self, key: Key) -> ModifyResult<()> {
        if self.search(key).is_none() {
            return Err(BTreeError::missing_key(key));
        }

        let order = self.order;
        self.root.remove_key(key, order)?;

        // A merge can drain the root; promote its sole remaining child,
        // shrinking the tree by one level.
        if self.root.keys.is_empty() && !self.root.is_leaf {
            let child = self.root.children.remove(0);
            self.root = child;
        }
        Ok(())
    }
}

impl Node {
    /// Remove `key` from the subtree rooted at this node. On entry the node
    /// holds at least `t` keys unless it is the root, so removal cannot
    /// leave it underfull.
    pub(crate) fn remove_key(&mut self, key: Key, order: usize) -> TreeResult<()> {
        let mut index = self.position_of(key);

        if index < self.keys.len() && self.keys[index] == key {
            if self.is_leaf {
                self.keys.remove(index);
                Ok(())
            } else {
                self.remove_from_internal(index, order)
            }
        } else if self.is_leaf {
            // Unreachable when the tree-level precondition held; kept as a
            // typed error so a defect surfaces instead of silently passing.
            Err(BTreeError::missing_key(key))
        } else {
            if self.children[index].keys.len() < order {
                self.fill_child(index, order);
                // A merge with the left sibling shifts the target child
                // down one slot.
                if index > self.keys.len() {
                    index -= 1;
                }
            }
            self.children[index].remove_key(key, order)
        }
    }

    /// Remove the key at `index` of this internal node.
    ///
    /// If the left child can spare a key, the target is replaced by its
    /// in-order predecessor and the predecessor is deleted from that
    /// subtree; symmetrically with the successor on the right. When neither
    /// side can spare one, the two children merge around the target key and
    /// deletion recurses into the merged node.
    fn remove_from_internal(&mut self, index: usize, order: usize) -> TreeResult<()> {
        let key = self.keys[index];

        if self.children[index].can_spare(order) {
            let predecessor = self.children[index].max_key();
            self.keys[index] = predecessor;
            self.children[index].remove_key(predecessor, order)
        } else if self.children[index + 1].can_spare(order) {
            let successor = self.children[index + 1].min_key();
            self.keys[index] = successor;
            self.children[index + 1].remove_key(successor, order)
        } else {
            self.merge_children(index);
            self.children[index].remove_key(key, order)
        }
    }

    /// Bring the child at `index` up to at least `t` keys before descending
    /// into it: borrow from a sibling with spare capacity, or merge with
    /// one when neither side can spare a key.
    fn fill_child(&mut self, index: usize, order: usize) {
        if index > 0 && self.children[index - 1].can_spare(order) {
            self.borrow_from_left(index);
        } else if index < self.keys.len() && self.children[index + 1].can_spare(order) {
            self.borrow_from_right(index);
        } else if index < self.keys.len() {
            self.merge_children(index);
        } else {
            self.merge_children(index - 1);
        }
    }

    /// Rotate one key through the parent from the left sibling into the
    /// child at `index`: the separator drops to the child's front, the
    /// sibling's last key replaces the separator, and (for internal
    /// siblings) the sibling's last child moves across with it.
    fn borrow_from_left(&mut self, index: usize) {
        let (sibling_key, sibling_child) = {
            let sibling = &mut self.children[index - 1];
            let key = sibling.keys.pop().unwrap();
            let child = if sibling.is_leaf {
                None
            } else {
                Some(sibling.children.pop().unwrap())
            };
            (key, child)
        };

        let separator = std::mem::replace(&mut self.keys[index - 1], sibling_key);
        let child = &mut self.children[index];
        child.keys.insert(0, separator);
        if let Some(grandchild) = sibling_child {
            child.children.insert(0, grandchild);
        }
    }

    /// Mirror of [`borrow_from_left`]: rotate the right sibling's first key
    /// through the parent onto the back of the child at `index`.
    fn borrow_from_right(&mut self, index: usize) {
        let (sibling_key, sibling_child) = {
            let sibling = &mut self.children[index + 1];
            let key = sibling.keys.remove(0);
            let child = if sibling.is_leaf {
                None
            } else {
                Some(sibling.children.remove(0))
            };
            (key, child)
        };

        let separator = std::mem::replace(&mut self.keys[index], sibling_key);
        let child = &mut self.children[index];
        child.keys.push(separator);
        if let Some(grandchild) = sibling_child {
            child.children.push(grandchild);
        }
    }

    /// Merge the child at `index + 1` into the child at `index`, pulling
    /// the separator key at `index` down between them.
    fn merge_children(&mut self, index: usize) {
        let separator = self.keys.remove(index);
        let mut sibling = self.children.remove(index + 1);

        let child = &mut self.children[index];
        child.keys.push(separator);
        child.keys.append(&mut sibling.keys);
        child.children.append(&mut sibling.children);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(keys: &[Key]) -> Box<Node> {
        let mut node = Node::new_leaf();
        node.keys = keys.to_vec();
        Box::new(node)
    }

    fn parent(keys: &[Key], children: Vec<Box<Node>>) -> Node {
        let mut node = Node::new_internal();
        node.keys = keys.to_vec();
        node.children = children;
        node
    }

    #[test]
    fn test_borrow_from_left_rotates_through_separator() {
        // [20] over [5, 10] and [30]: the underfull right child borrows.
        let mut node = parent(&[20], vec![leaf(&[5, 10]), leaf(&[30])]);
        node.borrow_from_left(1);

        assert_eq!(node.keys(), &[10]);
        assert_eq!(node.children[0].keys(), &[5]);
        assert_eq!(node.children[1].keys(), &[20, 30]);
    }

    #[test]
    fn test_borrow_from_right_rotates_through_separator() {
        let mut node = parent(&[20], vec![leaf(&[10]), leaf(&[30, 40])]);
        node.borrow_from_right(0);

        assert_eq!(node.keys(), &[30]);
        assert_eq!(node.children[0].keys(), &[10, 20]);
        assert_eq!(node.children[1].keys(), &[40]);
    }

    #[test]
    fn test_borrow_between_internal_siblings_moves_child() {
        let left = Box::new(parent(&[10, 20], vec![leaf(&[5]), leaf(&[15]), leaf(&[25])]));
        let right = Box::new(parent(&[50], vec![leaf(&[45]), leaf(&[55])]));
        let mut node = parent(&[40], vec![left, right]);

        node.borrow_from_left(1);

        assert_eq!(node.keys(), &[20]);
        assert_eq!(node.children[0].keys(), &[10]);
        assert_eq!(node.children[0].children.len(), 2);
        assert_eq!(node.children[1].keys(), &[40, 50]);
        assert_eq!(node.children[1].children.len(), 3);
        assert_eq!(node.children[1].children[0].keys(), &[25]);
    }

    #[test]
    fn test_merge_children_pulls_separator_down() {
        let mut node = parent(&[20, 40], vec![leaf(&[10]), leaf(&[30]), leaf(&[50, 60])]);
        node.merge_children(0);

        assert_eq!(node.keys(), &[40]);
        assert_eq!(node.children.len(), 2);
        assert_eq!(node.children[0].keys(), &[10, 20, 30]);
        assert_eq!(node.children[1].keys(), &[50, 60]);
    }

    #[test]
    fn test_fill_child_prefers_left_borrow_over_right() {
        let mut node = parent(
            &[20, 40],
            vec![leaf(&[5, 10]), leaf(&[30]), leaf(&[50, 60])],
        );
        node.fill_child(1, 2);

        // Both siblings could donate; the left one must be chosen.
        assert_eq!(node.keys(), &[10, 40]);
        assert_eq!(node.children[1].keys(), &[20, 30]);
        assert_eq!(node.children[2].keys(), &[50, 60]);
    }

    #[test]
    fn test_fill_child_merges_last_child_with_left_sibling() {
        let mut node = parent(&[20, 40], vec![leaf(&[10]), leaf(&[30]), leaf(&[50])]);
        node.fill_child(2, 2);

        assert_eq!(node.keys(), &[20]);
        assert_eq!(node.children.len(), 2);
        assert_eq!(node.children[1].keys(), &[30, 40, 50]);
    }
}
