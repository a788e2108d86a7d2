use thiserror::Error;

use crate::NodeId;

/// The first structural breach found by [`RbTree::verify`](crate::RbTree::verify).
///
/// Produced only by the diagnostic verifier. A correctly used tree never
/// yields one; an inconsistent [`Ordered`](crate::Ordered) implementation
/// can surface as [`InvariantViolation::OrderViolation`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The root is red
    #[error("root {root:?} is red")]
    RedRoot {
        /// The root node
        root: NodeId,
    },

    /// The root carries a parent link
    #[error("root {root:?} has a parent link")]
    RootHasParent {
        /// The root node
        root: NodeId,
    },

    /// A red node has a red child
    #[error("red node {node:?} has red child {child:?}")]
    RedRedEdge {
        /// The red parent
        node: NodeId,
        /// The red child
        child: NodeId,
    },

    /// The two subtrees of a node have different black heights
    #[error("node {node:?} has black height {left} on the left and {right} on the right")]
    BlackHeightMismatch {
        /// The unbalanced node
        node: NodeId,
        /// Black height of the left subtree
        left: usize,
        /// Black height of the right subtree
        right: usize,
    },

    /// A child's parent link does not point back to its actual parent
    #[error("node {node:?} links to parent {found:?}, expected {expected:?}")]
    ParentMismatch {
        /// The child node
        node: NodeId,
        /// Its actual parent
        expected: NodeId,
        /// The parent its back-reference names, if any
        found: Option<NodeId>,
    },

    /// A child sits on the wrong side of its parent under the ordering contract
    #[error("node {node:?} is out of order with respect to its parent {parent:?}")]
    OrderViolation {
        /// The misplaced child
        node: NodeId,
        /// Its parent
        parent: NodeId,
    },

    /// A node was reached twice, i.e. the links form a cycle or a shared subtree
    #[error("node {node:?} is reachable through more than one link")]
    NodeRevisited {
        /// The node reached twice
        node: NodeId,
    },

    /// The number of reachable nodes differs from the tree's length
    #[error("tree reports {expected} nodes but {found} are reachable")]
    LenMismatch {
        /// The length tracked by the tree
        expected: usize,
        /// The number of nodes reachable from the root
        found: usize,
    },
}
