//! Core types and data structures for the B-tree.
//!
//! This module contains the fundamental data structures, type definitions,
//! and constants used throughout the B-tree implementation.

// ============================================================================
// CONSTANTS
// ============================================================================

/// Minimum order (minimum degree) for any B-tree.
pub(crate) const MIN_ORDER: usize = 2;

/// Default order used by [`BTree::with_default_order`].
pub const DEFAULT_ORDER: usize = 3;

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Key type stored in the tree.
pub type Key = i64;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// B-tree holding a set of ordered integer keys.
///
/// A B-tree is a self-balancing multiway search tree that keeps its keys
/// sorted and all of its leaves at the same depth. Insertion splits full
/// nodes on the way down; deletion refills underfull nodes on the way down,
/// so every mutation leaves the structural invariants intact.
///
/// Keys are unique: inserting a key that is already present, or removing one
/// that is not, is a precondition violation and is rejected before any
/// mutation takes place.
///
/// # Examples
///
/// ```
/// use btree::BTree;
///
/// let mut tree = BTree::new(2).unwrap();
/// tree.insert(10).unwrap();
/// tree.insert(20).unwrap();
/// tree.insert(30).unwrap();
///
/// assert!(tree.contains(20));
/// assert_eq!(tree.len(), 3);
///
/// tree.remove(20).unwrap();
/// assert!(!tree.contains(20));
/// assert!(tree.verify_properties());
/// ```
///
/// # Performance Characteristics
///
/// - **Search**: O(log n)
/// - **Insertion**: O(log n)
/// - **Deletion**: O(log n)
///
/// # Order Guidelines
///
/// The order `t` is the minimum degree: every non-root node holds between
/// `t - 1` and `2t - 1` keys, and every internal node has between `t` and
/// `2t` children. The minimum order is 2 (enforced). Higher orders give
/// shallower trees with wider nodes.
///
/// # Concurrency
///
/// The tree is single-threaded; callers needing shared access must wrap it
/// in an external lock.
#[derive(Debug)]
pub struct BTree {
    /// Minimum degree `t` of the tree.
    pub(crate) order: usize,
    /// The root node. Always present; starts as an empty leaf.
    pub(crate) root: Box<Node>,
}

/// A single B-tree node, either a leaf or an internal node.
///
/// Each node owns its children outright; the structure is a strict tree
/// with no back-pointers, so all algorithms descend top-down with explicit
/// index tracking.
#[derive(Debug, Clone)]
pub struct Node {
    /// True iff this node has no children.
    pub(crate) is_leaf: bool,
    /// Sorted list of keys, strictly increasing.
    pub(crate) keys: Vec<Key>,
    /// Child nodes; empty for leaves, `keys.len() + 1` entries otherwise.
    pub(crate) children: Vec<Box<Node>>,
}

impl Node {
    /// Returns the keys held by this node, in ascending order.
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Returns true if this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        self.is_leaf
    }

    /// Returns the number of keys in this node.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if this node holds no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
