//! Ordered walks over any [`Traversable`] tree.

use alloc::vec::Vec;

use crate::Traversable;

/// In-order iterator over the nodes of any [`Traversable`] tree.
///
/// Yields nodes in non-decreasing order of their values for a valid search
/// tree. Uses an explicit stack bounded by the tree height.
#[derive(Debug, Clone)]
pub struct InOrder<N> {
    stack: Vec<N>,
}

impl<N: Traversable> InOrder<N> {
    /// Creates an iterator starting at `root`; `None` yields nothing
    pub fn new(root: Option<N>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<N>) {
        while let Some(current) = node {
            node = current.child_at(0);
            self.stack.push(current);
        }
    }
}

impl<N: Traversable> Iterator for InOrder<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.child_at(1));
        Some(node)
    }
}

/// Pre-order iterator: each node before its left then right subtree.
#[derive(Debug, Clone)]
pub struct PreOrder<N> {
    stack: Vec<N>,
}

impl<N: Traversable> PreOrder<N> {
    /// Creates an iterator starting at `root`; `None` yields nothing
    pub fn new(root: Option<N>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<N: Traversable> Iterator for PreOrder<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let node = self.stack.pop()?;
        self.stack.extend(node.child_at(1));
        self.stack.extend(node.child_at(0));
        Some(node)
    }
}

/// Calls `visit` on every value in order
pub fn in_order<N: Traversable>(root: Option<N>, mut visit: impl FnMut(&N::Value)) {
    for node in InOrder::new(root) {
        visit(node.get_value());
    }
}

/// Calls `visit` on every value in pre-order
pub fn pre_order<N: Traversable>(root: Option<N>, mut visit: impl FnMut(&N::Value)) {
    for node in PreOrder::new(root) {
        visit(node.get_value());
    }
}

/// Returns the number of nodes on the longest path from `root` down to a
/// leaf, 0 for an absent root
pub fn depth<N: Traversable>(root: Option<N>) -> usize {
    let mut deepest = 0;
    let mut stack: Vec<(N, usize)> = root.into_iter().map(|node| (node, 1)).collect();
    while let Some((node, level)) = stack.pop() {
        deepest = deepest.max(level);
        stack.extend(node.child_at(0).map(|child| (child, level + 1)));
        stack.extend(node.child_at(1).map(|child| (child, level + 1)));
    }
    deepest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RbTree;

    fn tree_of(values: &[i32]) -> RbTree<i32> {
        let mut tree = RbTree::new();
        for &v in values {
            tree.insert(v);
        }
        tree
    }

    #[test]
    fn test_in_order_is_sorted() {
        let tree = tree_of(&[5, 3, 8, 1, 4, 7, 9, 2, 6, 5, 5]);
        let mut seen = Vec::new();
        in_order(tree.root(), |v| seen.push(*v));
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 5, 5, 6, 7, 8, 9]);
        assert!(tree.iter().copied().eq(seen.into_iter()));
    }

    #[test]
    fn test_pre_order_visits_root_first() {
        // 2(1, 4(3, 6(5, 7)))
        let tree = tree_of(&[1, 2, 3, 4, 5, 6, 7]);
        let mut seen = Vec::new();
        pre_order(tree.root(), |v| seen.push(*v));
        assert_eq!(seen, vec![2, 1, 4, 3, 6, 5, 7]);
    }

    #[test]
    fn test_depth() {
        assert_eq!(depth::<crate::NodeRef<'_, i32>>(None), 0);
        assert_eq!(depth(tree_of(&[1]).root()), 1);
        assert_eq!(depth(tree_of(&[1, 2, 3, 4, 5, 6, 7]).root()), 4);
    }

    #[test]
    fn test_empty_traversals() {
        let tree = RbTree::<i32>::new();
        assert_eq!(InOrder::new(tree.root()).count(), 0);
        assert_eq!(PreOrder::new(tree.root()).count(), 0);
    }
}
