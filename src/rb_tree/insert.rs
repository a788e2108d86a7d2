use log::trace;

use super::{Color, NIL, Node, NodeId, RbTree, Side};
use crate::Ordered;

impl<V: Ordered> RbTree<V> {
    /// Inserts a value, keeping any equal values already stored.
    ///
    /// The new node is placed as an ordinary binary search tree leaf, then
    /// the Red-Black invariants are restored by recoloring and rotating on
    /// the way up.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to insert
    ///
    /// # Returns
    ///
    /// * `NodeId` - The node that received the value. Later mutations may
    ///   move it or, through deletion's value swap, change what it holds.
    pub fn insert(&mut self, value: V) -> NodeId {
        let parent = self.find_insertion_parent(&value);
        let side = if parent != NIL && self.node_at(parent).value.less(&value) {
            Side::Right
        } else {
            Side::Left
        };

        let new_idx = self.allocate_node(Node::leaf(value, parent));
        self.link(parent, side, new_idx);
        self.len += 1;

        if parent == NIL {
            self.set_color(new_idx, Color::Black);
        } else if self.is_red(parent) {
            self.fix_insertion_violations(new_idx);
        }

        #[cfg(debug_assertions)]
        debug_assert!(
            self.verify().is_ok(),
            "RB tree invariants violated after insertion"
        );

        NodeId(new_idx)
    }

    /// Descends by the ordering test. Ties go left.
    fn find_insertion_parent(&self, value: &V) -> usize {
        let mut current = self.root;
        let mut parent = NIL;

        while current != NIL {
            parent = current;
            let node = self.node_at(current);
            current = if node.value.less(value) {
                node.right
            } else {
                node.left
            };
        }
        parent
    }

    /// Restores the root color and the red-red rule above the red node `node`.
    fn fix_insertion_violations(&mut self, mut node: usize) {
        loop {
            let parent = self.get_parent(node);
            if parent == NIL {
                self.set_color(node, Color::Black);
                return;
            }
            if self.is_black(parent) {
                return;
            }

            let grandparent = self.get_parent(parent);
            if grandparent == NIL {
                self.set_color(parent, Color::Black);
                return;
            }

            let uncle = self.sibling_of(parent);
            if self.is_red(uncle) {
                trace!("insert fixup at {node}: red uncle {uncle}, recolor");
                self.set_color(uncle, Color::Black);
                self.set_color(parent, Color::Black);
                self.set_color(grandparent, Color::Red);
                node = grandparent;
                continue;
            }

            if self.side_of(node) == self.side_of(parent) {
                trace!("insert fixup at {node}: black uncle, line");
                self.swap_colors(parent, grandparent);
                self.rotate(parent);
            } else {
                trace!("insert fixup at {node}: black uncle, triangle");
                self.swap_colors(node, grandparent);
                self.rotate(node);
                self.rotate(node);
            }
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::shape::{black, build, red, shape};
    use crate::RbTree;
    use alloc::vec::Vec;

    #[test]
    fn test_insert_into_empty_tree() {
        let tree = build(&[1]);
        assert_eq!(shape(&tree), black(1, None, None));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_insert_under_black_parent() {
        let tree = build(&[1, 2]);
        assert_eq!(shape(&tree), black(1, None, red(2, None, None)));
    }

    #[test]
    fn test_insert_red_uncle_recolors_to_root() {
        let mut tree = build(&[2, 1, 3]);
        assert_eq!(
            shape(&tree),
            black(2, red(1, None, None), red(3, None, None))
        );

        tree.insert(4);
        assert_eq!(
            shape(&tree),
            black(2, black(1, None, None), black(3, None, red(4, None, None)))
        );
    }

    #[test]
    fn test_insert_black_uncle_line_rotates_once() {
        // 3 is black, 4 red; 5 lands right of 4: a straight line
        let mut tree = build(&[3, 2, 4, 1]);
        tree.delete(&1);
        assert_eq!(
            shape(&tree),
            black(3, black(2, None, None), black(4, None, None))
        );
        tree.insert(5);
        tree.insert(6);
        assert_eq!(
            shape(&tree),
            black(
                3,
                black(2, None, None),
                black(5, red(4, None, None), red(6, None, None))
            )
        );
    }

    #[test]
    fn test_insert_black_uncle_triangle_rotates_twice() {
        let mut tree = build(&[4, 2, 5]);
        tree.delete(&5);
        tree.insert(3);
        assert_eq!(
            shape(&tree),
            black(3, red(2, None, None), red(4, None, None))
        );
    }

    #[test]
    fn test_insert_root_moves_on_rotation() {
        let tree = build(&[1, 2, 3]);
        assert_eq!(
            shape(&tree),
            black(2, red(1, None, None), red(3, None, None))
        );
        assert!(!tree.root().unwrap().has_parent());

        let tree = build(&[3, 2, 1]);
        assert_eq!(
            shape(&tree),
            black(2, red(1, None, None), red(3, None, None))
        );
    }

    #[test]
    fn test_insert_duplicates_go_left() {
        let mut tree = build(&[5]);
        tree.insert(5);
        assert_eq!(shape(&tree), black(5, red(5, None, None), None));
        tree.insert(5);
        assert_eq!(tree.len(), 3);
        assert!(tree.iter().all(|&v| v == 5));
        assert_eq!(tree.verify(), Ok(1));
    }

    #[test]
    fn test_insert_returns_node_holding_value() {
        let mut tree = RbTree::new();
        let ids: Vec<_> = (0..20).map(|i| (i, tree.insert(i))).collect();
        for (value, id) in ids {
            assert_eq!(tree.get(id).map(|n| *n.value()), Some(value));
        }
    }

    #[test]
    fn test_insert_keeps_invariants_ascending_and_descending() {
        let mut tree = RbTree::new();
        for i in 0..200 {
            tree.insert(i);
            assert!(tree.verify().is_ok(), "broken after inserting {i}");
        }
        for i in (200..400).rev() {
            tree.insert(i);
            assert!(tree.verify().is_ok(), "broken after inserting {i}");
        }
        assert!(tree.iter().copied().eq(0..400));
    }
}
