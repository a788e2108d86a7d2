use alloc::vec::Vec;
use log::trace;
use ordered_float::{FloatCore, OrderedFloat};

use crate::{Ordered, utils::traversal::InOrder};

mod delete;
mod insert;
mod node;
mod verify;

#[cfg(test)]
mod shape;

pub(crate) use node::Node;
pub use node::{Color, NodeId, NodeRef, Side};

/// Sentinel index standing for an absent node (a black nil leaf)
pub(crate) const NIL: usize = usize::MAX;

/// A Red-Black tree multiset with parent links, stored in a node arena.
///
/// Insertion, deletion, exact-key lookup and predecessor queries all run in
/// O(log n). Equal values may be inserted any number of times; they coexist
/// without a defined relative order.
///
/// Key features:
/// - Nodes live in a growable arena addressed by index; parent links are
///   plain indices, so there is no shared ownership
/// - Vacated slots are recycled through an internal free list
/// - Every mutation re-verifies the Red-Black invariants in debug builds
#[derive(Debug, Clone)]
pub struct RbTree<V> {
    /// Arena of node slots, `None` for vacated slots
    nodes: Vec<Option<Node<V>>>,

    /// Stack of vacated slot indices, reused before the arena grows
    free_list: Vec<usize>,

    /// Number of values currently stored, duplicates included
    len: usize,

    /// Index of the root node, nil when the tree is empty
    root: usize,
}

/// A tree of floating point values, totally ordered through [`OrderedFloat`]
pub type FloatTree<T> = RbTree<OrderedFloat<T>>;

impl<V> Default for RbTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> RbTree<V> {
    /// Creates an empty tree
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free_list: Vec::new(),
            len: 0,
            root: NIL,
        }
    }

    /// Creates an empty tree with room for `capacity` nodes before the
    /// arena has to grow
    ///
    /// # Arguments
    ///
    /// * `capacity` - The number of nodes to reserve
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            free_list: Vec::with_capacity(capacity),
            len: 0,
            root: NIL,
        }
    }

    /// Returns the number of stored values, duplicates included
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree holds no values
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of node slots the arena can hold without
    /// reallocating
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Removes every value, keeping the arena allocation for reuse
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free_list.clear();
        self.len = 0;
        self.root = NIL;
    }

    /// Returns the root node, or `None` for the empty tree
    pub fn root(&self) -> Option<NodeRef<'_, V>> {
        self.get_ref(self.root)
    }

    /// Returns a view of the node behind `id`, or `None` if the node has
    /// since been detached by a deletion
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_, V>> {
        match self.nodes.get(id.0) {
            Some(Some(_)) => Some(NodeRef::new(self, id.0)),
            _ => None,
        }
    }

    /// Returns the color of an optional node; an absent node is black
    pub fn color_of(&self, id: Option<NodeId>) -> Color {
        match id {
            Some(id) => self.get_color(id.0),
            None => Color::Black,
        }
    }

    /// Returns the in-order predecessor of `id` within its own subtree:
    /// the rightmost node of its left subtree, or `None` without a left
    /// child
    pub fn predecessor(&self, id: NodeId) -> Option<NodeRef<'_, V>> {
        self.get(id)?;
        self.get_ref(self.predecessor_of(id.0))
    }

    /// Returns the smallest value
    pub fn min(&self) -> Option<&V> {
        if self.root == NIL {
            return None;
        }
        Some(&self.node_at(self.find_minimum(self.root)).value)
    }

    /// Returns the largest value
    pub fn max(&self) -> Option<&V> {
        if self.root == NIL {
            return None;
        }
        Some(&self.node_at(self.find_maximum(self.root)).value)
    }

    /// Returns the number of nodes on the longest root-to-leaf path,
    /// 0 for the empty tree
    pub fn depth(&self) -> usize {
        crate::utils::traversal::depth(self.root())
    }

    /// Returns an iterator over the values in non-decreasing order
    pub fn iter(&self) -> impl Iterator<Item = &V> + '_ {
        InOrder::new(self.root()).map(|node| node.value())
    }

    fn get_ref(&self, idx: usize) -> Option<NodeRef<'_, V>> {
        (idx != NIL).then(|| NodeRef::new(self, idx))
    }

    #[inline]
    pub(crate) fn node_at(&self, idx: usize) -> &Node<V> {
        match &self.nodes[idx] {
            Some(node) => node,
            None => panic!("node slot {idx} is vacant"),
        }
    }

    #[inline]
    fn node_at_mut(&mut self, idx: usize) -> &mut Node<V> {
        match &mut self.nodes[idx] {
            Some(node) => node,
            None => panic!("node slot {idx} is vacant"),
        }
    }

    fn allocate_node(&mut self, node: Node<V>) -> usize {
        match self.free_list.pop() {
            Some(idx) => {
                self.nodes[idx] = Some(node);
                idx
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    fn deallocate_node(&mut self, idx: usize) -> V {
        match self.nodes[idx].take() {
            Some(node) => {
                self.free_list.push(idx);
                node.value
            }
            None => panic!("node slot {idx} freed twice"),
        }
    }

    #[inline]
    fn get_color(&self, idx: usize) -> Color {
        if idx == NIL {
            Color::Black
        } else {
            self.node_at(idx).color
        }
    }

    #[inline]
    fn set_color(&mut self, idx: usize, color: Color) {
        if idx != NIL {
            self.node_at_mut(idx).color = color;
        }
    }

    #[inline]
    fn is_red(&self, idx: usize) -> bool {
        self.get_color(idx) == Color::Red
    }

    #[inline]
    fn is_black(&self, idx: usize) -> bool {
        self.get_color(idx) == Color::Black
    }

    fn swap_colors(&mut self, a: usize, b: usize) {
        let (ca, cb) = (self.get_color(a), self.get_color(b));
        self.set_color(a, cb);
        self.set_color(b, ca);
    }

    #[inline]
    fn get_parent(&self, idx: usize) -> usize {
        if idx == NIL {
            NIL
        } else {
            self.node_at(idx).parent
        }
    }

    #[inline]
    fn get_child(&self, idx: usize, side: Side) -> usize {
        if idx == NIL {
            NIL
        } else {
            self.node_at(idx).child(side)
        }
    }

    /// Which side of its parent `idx` hangs on; `None` for the root
    pub(crate) fn side_of(&self, idx: usize) -> Option<Side> {
        let parent = self.get_parent(idx);
        if parent == NIL {
            None
        } else if self.node_at(parent).left == idx {
            Some(Side::Left)
        } else {
            Some(Side::Right)
        }
    }

    pub(crate) fn sibling_of(&self, idx: usize) -> usize {
        match self.side_of(idx) {
            Some(side) => self.get_child(self.get_parent(idx), side.flip()),
            None => NIL,
        }
    }

    pub(crate) fn predecessor_of(&self, idx: usize) -> usize {
        let left = self.get_child(idx, Side::Left);
        if left == NIL {
            NIL
        } else {
            self.find_maximum(left)
        }
    }

    fn find_minimum(&self, mut idx: usize) -> usize {
        while self.get_child(idx, Side::Left) != NIL {
            idx = self.node_at(idx).left;
        }
        idx
    }

    fn find_maximum(&self, mut idx: usize) -> usize {
        while self.get_child(idx, Side::Right) != NIL {
            idx = self.node_at(idx).right;
        }
        idx
    }

    /// Points `parent`'s link on `side` at `child` and `child`'s parent link
    /// back at `parent`. A nil `parent` makes `child` the root.
    fn link(&mut self, parent: usize, side: Side, child: usize) {
        if parent == NIL {
            self.root = child;
        } else {
            self.node_at_mut(parent).set_child(side, child);
        }
        if child != NIL {
            self.node_at_mut(child).parent = parent;
        }
    }

    /// Promotes `idx` into its parent's position.
    ///
    /// With `p` the parent and `g` the grandparent, `idx` becomes `g`'s child
    /// (or the root), `p` becomes the child of `idx` on the side opposite to
    /// where `idx` hung, and the inner subtree of `idx` moves across to `p`.
    /// Colors are left untouched. A node without a parent is left as is.
    fn rotate(&mut self, idx: usize) {
        let Some(side) = self.side_of(idx) else {
            return;
        };
        let parent = self.node_at(idx).parent;
        let grandparent = self.node_at(parent).parent;
        let parent_side = self.side_of(parent);

        trace!("rotate node {idx} over parent {parent}");

        let inner = self.node_at(idx).child(side.flip());
        self.link(parent, side, inner);
        self.link(idx, side.flip(), parent);
        match parent_side {
            Some(parent_side) => self.link(grandparent, parent_side, idx),
            None => {
                self.root = idx;
                self.node_at_mut(idx).parent = NIL;
            }
        }
    }

    /// Swaps the stored values of two live nodes, leaving links and colors
    fn swap_values(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.nodes.split_at_mut(hi);
        match (&mut head[lo], &mut tail[0]) {
            (Some(x), Some(y)) => core::mem::swap(&mut x.value, &mut y.value),
            _ => panic!("value swap between vacant slots {a} and {b}"),
        }
    }
}

impl<V: Ordered> RbTree<V> {
    /// Looks up a node whose value equals `key`.
    ///
    /// With duplicates present, any one of the equal nodes may be returned.
    ///
    /// # Arguments
    ///
    /// * `key` - The value to look for
    ///
    /// # Returns
    ///
    /// * `Option<NodeRef<V>>` - The matching node, or `None` if absent
    pub fn find(&self, key: &V) -> Option<NodeRef<'_, V>> {
        self.get_ref(self.find_node(key))
    }

    /// Returns true if a value equal to `key` is stored
    pub fn contains(&self, key: &V) -> bool {
        self.find_node(key) != NIL
    }

    fn find_node(&self, key: &V) -> usize {
        let mut current = self.root;
        while current != NIL {
            let node = self.node_at(current);
            if node.value.equal(key) {
                return current;
            }
            current = if node.value.less(key) {
                node.right
            } else {
                node.left
            };
        }
        NIL
    }
}

impl<T: FloatCore> FloatTree<T> {
    /// Inserts a float value, see [`RbTree::insert`]
    pub fn insert_float(&mut self, value: T) -> NodeId {
        self.insert(OrderedFloat(value))
    }

    /// Deletes one occurrence of a float value, see [`RbTree::delete`]
    pub fn delete_float(&mut self, value: T) -> Option<T> {
        self.delete(&OrderedFloat(value)).map(OrderedFloat::into_inner)
    }

    /// Looks up a float value, see [`RbTree::find`]
    pub fn find_float(&self, value: T) -> Option<NodeRef<'_, OrderedFloat<T>>> {
        self.find(&OrderedFloat(value))
    }
}

impl<V: core::fmt::Display> core::fmt::Display for RbTree<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        crate::utils::print::write_tree(f, self.root())
    }
}
