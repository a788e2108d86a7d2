use log::{debug, trace};

use super::{Color, NIL, RbTree, Side};
use crate::Ordered;

impl<V: Ordered> RbTree<V> {
    /// Removes one value equal to `key`.
    ///
    /// Deleting a key that is not stored is a no-op. When the matching node
    /// has two children its value is first exchanged with its in-order
    /// predecessor and the predecessor's node is removed instead, so a
    /// [`NodeId`](crate::NodeId) held by the caller may observe its value
    /// change even though a different key was targeted.
    ///
    /// # Arguments
    ///
    /// * `key` - The value to remove
    ///
    /// # Returns
    ///
    /// * `Option<V>` - The removed value, or `None` if no value equals `key`
    pub fn delete(&mut self, key: &V) -> Option<V> {
        let target = self.find_node(key);
        if target == NIL {
            debug!("delete: key not present, tree unchanged");
            return None;
        }

        let removed = self.delete_node(target);
        self.len -= 1;

        #[cfg(debug_assertions)]
        debug_assert!(
            self.verify().is_ok(),
            "RB tree invariants violated after removal"
        );

        Some(removed)
    }

    fn delete_node(&mut self, mut node: usize) -> V {
        let (left, right) = {
            let n = self.node_at(node);
            (n.left, n.right)
        };

        if left != NIL && right != NIL {
            let predecessor = self.find_maximum(left);
            trace!("delete {node}: two children, swap with predecessor {predecessor}");
            self.swap_values(node, predecessor);
            node = predecessor;
        }

        let child = {
            let n = self.node_at(node);
            if n.left != NIL { n.left } else { n.right }
        };
        let parent = self.node_at(node).parent;
        let side = self.side_of(node);

        if child == NIL && self.is_red(node) {
            self.link(parent, side.unwrap_or(Side::Left), NIL);
            return self.deallocate_node(node);
        }

        let sibling = self.sibling_of(node);
        let was_black = self.is_black(node);
        let Some(side) = side else {
            self.link(NIL, Side::Left, child);
            self.set_color(child, Color::Black);
            return self.deallocate_node(node);
        };

        self.link(parent, side, child);
        let value = self.deallocate_node(node);

        if self.is_red(child) {
            self.set_color(child, Color::Black);
        } else if was_black {
            self.fix_deletion_violations(side, sibling);
        }
        value
    }

    /// Restores black height after a black node was spliced out.
    ///
    /// The subtree hanging on `side` of the sibling's parent is one black
    /// node short; `sibling` is the node on the other side.
    fn fix_deletion_violations(&mut self, mut side: Side, mut sibling: usize) {
        loop {
            let parent = self.get_parent(sibling);
            if parent == NIL {
                self.set_color(sibling, Color::Black);
                return;
            }

            if self.is_red(sibling) {
                trace!("delete fixup under {parent}: red sibling {sibling}");
                self.set_color(sibling, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate(sibling);
                sibling = self.get_child(parent, side.flip());
                continue;
            }

            let near = self.get_child(sibling, side);
            let far = self.get_child(sibling, side.flip());

            if self.is_black(near) && self.is_black(far) {
                self.set_color(sibling, Color::Red);
                if self.is_red(parent) {
                    trace!("delete fixup under {parent}: red parent absorbs");
                    self.set_color(parent, Color::Black);
                    return;
                }
                match self.side_of(parent) {
                    Some(parent_side) => {
                        trace!("delete fixup under {parent}: deficit moves up");
                        side = parent_side;
                        sibling = self.sibling_of(parent);
                        continue;
                    }
                    None => {
                        debug!("delete fixup: deficit absorbed at root {parent}");
                        return;
                    }
                }
            }

            if self.is_black(far) {
                trace!("delete fixup under {parent}: near child {near} red");
                self.set_color(near, Color::Black);
                self.set_color(sibling, Color::Red);
                self.rotate(near);
                sibling = near;
            }

            trace!("delete fixup under {parent}: far child red, rotate {sibling}");
            let far = self.get_child(sibling, side.flip());
            self.swap_colors(sibling, parent);
            self.rotate(sibling);
            self.set_color(far, Color::Black);
            return;
        }
    }
}
