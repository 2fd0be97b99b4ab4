//! Validation and debugging utilities for the B-tree.
//!
//! This module contains the invariant checks, the leaf-depth check, the
//! hierarchical tree dump, and the diagnostic traversals used by the test
//! harnesses. Nothing here is on the hot path or mutates the tree.

use std::io;

use crate::error::{BTreeError, BTreeResult, TreeResult};
use crate::types::{BTree, Key, Node};

// ============================================================================
// INVARIANT CHECKING
// ============================================================================

impl BTree {
    /// Check whether the tree satisfies the B-tree structural invariants.
    ///
    /// Returns true if all invariants hold. Diagnostic only; a false return
    /// indicates an algorithm defect, not a normal runtime condition.
    pub fn verify_properties(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    ///
    /// Returns the first violation found as an `InvariantViolation` with
    /// enough context to locate the offending node.
    pub fn check_invariants_detailed(&self) -> BTreeResult<()> {
        self.check_node_invariants(&self.root, None, None, true)
    }

    /// Recursively check invariants for a node and its children.
    ///
    /// `min_key` and `max_key` are the exclusive bounds inherited from the
    /// separator keys above this node; checking every key against them
    /// covers both the key/child ordering invariant and tree-wide key
    /// uniqueness.
    fn check_node_invariants(
        &self,
        node: &Node,
        min_key: Option<Key>,
        max_key: Option<Key>,
        is_root: bool,
    ) -> TreeResult<()> {
        let max_keys = self.max_keys();
        if node.keys.len() > max_keys {
            return Err(BTreeError::invariant(
                &format!("Node {:?}", node.keys),
                &format!("holds more than {} keys", max_keys),
            ));
        }

        if !is_root && node.keys.len() < self.order - 1 {
            return Err(BTreeError::invariant(
                &format!("Node {:?}", node.keys),
                &format!("holds fewer than {} keys", self.order - 1),
            ));
        }

        if !node.is_leaf && node.children.len() != node.keys.len() + 1 {
            return Err(BTreeError::invariant(
                &format!("Internal node {:?}", node.keys),
                &format!(
                    "has {} children for {} keys",
                    node.children.len(),
                    node.keys.len()
                ),
            ));
        }

        for i in 0..node.keys.len() {
            if i > 0 && node.keys[i - 1] >= node.keys[i] {
                return Err(BTreeError::invariant(
                    &format!("Node {:?}", node.keys),
                    "keys are not in strictly ascending order",
                ));
            }
            if let Some(min) = min_key {
                if node.keys[i] <= min {
                    return Err(BTreeError::invariant(
                        &format!("Node {:?}", node.keys),
                        &format!("key {} is not greater than separator {}", node.keys[i], min),
                    ));
                }
            }
            if let Some(max) = max_key {
                if node.keys[i] >= max {
                    return Err(BTreeError::invariant(
                        &format!("Node {:?}", node.keys),
                        &format!("key {} is not less than separator {}", node.keys[i], max),
                    ));
                }
            }
        }

        if !node.is_leaf {
            for (i, child) in node.children.iter().enumerate() {
                let child_min = if i == 0 { min_key } else { Some(node.keys[i - 1]) };
                let child_max = if i == node.keys.len() {
                    max_key
                } else {
                    Some(node.keys[i])
                };
                self.check_node_invariants(child, child_min, child_max, false)?;
            }
        }

        Ok(())
    }

    /// Check that every leaf sits at the same depth from the root.
    pub fn all_leaves_same_depth(&self) -> bool {
        let mut depths = Vec::new();
        Self::collect_leaf_depths(&self.root, 0, &mut depths);
        depths.windows(2).all(|pair| pair[0] == pair[1])
    }

    /// Collect the depth of every leaf via a full traversal.
    fn collect_leaf_depths(node: &Node, depth: usize, depths: &mut Vec<usize>) {
        if node.is_leaf {
            depths.push(depth);
        } else {
            for child in &node.children {
                Self::collect_leaf_depths(child, depth + 1, depths);
            }
        }
    }

    // ============================================================================
    // DIAGNOSTIC TRAVERSALS
    // ============================================================================

    /// Returns all keys in ascending order via an in-order traversal.
    ///
    /// Diagnostic helper for test harnesses; the crate deliberately has no
    /// iterator API.
    pub fn keys_in_order(&self) -> Vec<Key> {
        let mut keys = Vec::new();
        Self::collect_keys_in_order(&self.root, &mut keys);
        keys
    }

    fn collect_keys_in_order(node: &Node, keys: &mut Vec<Key>) {
        if node.is_leaf {
            keys.extend_from_slice(&node.keys);
        } else {
            for i in 0..node.keys.len() {
                Self::collect_keys_in_order(&node.children[i], keys);
                keys.push(node.keys[i]);
            }
            if let Some(last) = node.children.last() {
                Self::collect_keys_in_order(last, keys);
            }
        }
    }

    // ============================================================================
    // TREE DUMP
    // ============================================================================

    /// Write a hierarchical dump of the tree to `out`, one node per line,
    /// indented two spaces per level.
    pub fn write_tree<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        Self::write_node(&self.root, 0, out)
    }

    /// Print the hierarchical dump to stdout.
    pub fn print_tree(&self) -> io::Result<()> {
        let stdout = io::stdout();
        self.write_tree(&mut stdout.lock())
    }

    fn write_node<W: io::Write>(node: &Node, depth: usize, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}Level {}: {:?}", "  ".repeat(depth), depth, node.keys)?;
        for child in &node.children {
            Self::write_node(child, depth + 1, out)?;
        }
        Ok(())
    }
}
