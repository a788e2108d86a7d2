use ahash::RandomState;
use alloc::vec::Vec;
use hashbrown::HashSet;

use super::{NIL, NodeId, RbTree, Side};
use crate::{InvariantViolation, Ordered};

impl<V: Ordered> RbTree<V> {
    /// Walks the whole tree and checks every structural invariant.
    ///
    /// Checked, in order of discovery: the root is black and has no parent,
    /// each child links back to its parent, each child sits on the correct
    /// side under the ordering contract, no red node has a red child, both
    /// subtrees of every node have the same black height, no node is reached
    /// twice, and the number of reachable nodes matches [`RbTree::len`].
    ///
    /// Runs in O(n). Mutating operations call it only in debug builds.
    ///
    /// # Returns
    ///
    /// * `Result<usize, InvariantViolation>` - The number of black nodes on
    ///   every root-to-leaf path, or the first violation found
    pub fn verify(&self) -> Result<usize, InvariantViolation> {
        if self.root == NIL {
            return self.check_len(0).map(|_| 0);
        }

        let root = self.node_at(self.root);
        if root.parent != NIL {
            return Err(InvariantViolation::RootHasParent {
                root: NodeId(self.root),
            });
        }
        if self.is_red(self.root) {
            return Err(InvariantViolation::RedRoot {
                root: NodeId(self.root),
            });
        }

        let mut visited = HashSet::with_capacity_and_hasher(self.len, RandomState::new());
        let height = self.verify_subtree(self.root, &mut visited)?;
        self.check_len(visited.len())?;
        Ok(height)
    }

    fn check_len(&self, found: usize) -> Result<(), InvariantViolation> {
        if found == self.len {
            Ok(())
        } else {
            Err(InvariantViolation::LenMismatch {
                expected: self.len,
                found,
            })
        }
    }

    /// Post-order walk with an explicit stack; returns the black height of
    /// the subtree rooted at `start`.
    fn verify_subtree(
        &self,
        start: usize,
        visited: &mut HashSet<usize, RandomState>,
    ) -> Result<usize, InvariantViolation> {
        // (node, children already pushed)
        let mut stack: Vec<(usize, bool)> = vec![(start, false)];
        let mut heights: Vec<usize> = Vec::new();

        while let Some((idx, expanded)) = stack.pop() {
            if idx == NIL {
                heights.push(0);
                continue;
            }

            if !expanded {
                if !visited.insert(idx) {
                    return Err(InvariantViolation::NodeRevisited { node: NodeId(idx) });
                }
                self.check_links(idx)?;
                let node = self.node_at(idx);
                stack.push((idx, true));
                stack.push((node.right, false));
                stack.push((node.left, false));
                continue;
            }

            let right = heights.pop().unwrap_or_default();
            let left = heights.pop().unwrap_or_default();
            if left != right {
                return Err(InvariantViolation::BlackHeightMismatch {
                    node: NodeId(idx),
                    left,
                    right,
                });
            }
            heights.push(left + usize::from(self.is_black(idx)));
        }

        Ok(heights.pop().unwrap_or_default())
    }

    /// Checks the parent link, ordering and coloring of both children of `idx`
    fn check_links(&self, idx: usize) -> Result<(), InvariantViolation> {
        let node = self.node_at(idx);
        for side in [Side::Left, Side::Right] {
            let child_idx = node.child(side);
            if child_idx == NIL {
                continue;
            }
            let child = self.node_at(child_idx);

            if child.parent != idx {
                return Err(InvariantViolation::ParentMismatch {
                    node: NodeId(child_idx),
                    expected: NodeId(idx),
                    found: (child.parent != NIL).then_some(NodeId(child.parent)),
                });
            }

            let out_of_order = match side {
                Side::Left => node.value.less(&child.value),
                Side::Right => child.value.less(&node.value),
            };
            if out_of_order {
                return Err(InvariantViolation::OrderViolation {
                    node: NodeId(child_idx),
                    parent: NodeId(idx),
                });
            }

            if self.is_red(idx) && self.is_red(child_idx) {
                return Err(InvariantViolation::RedRedEdge {
                    node: NodeId(idx),
                    child: NodeId(child_idx),
                });
            }
        }
        Ok(())
    }
}
