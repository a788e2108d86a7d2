use super::{NIL, RbTree};

/// Red-Black tree node colors used to maintain tree balance properties.
///
/// Red-Black trees maintain balance by ensuring:
/// - Red nodes have black children
/// - All paths from a node to its nil leaves have equal black node counts
///
/// An absent child is treated as a black nil leaf everywhere in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Red node - cannot be adjacent to another red node
    Red,
    /// Black node - contributes to black height
    Black,
}

/// The side of a child link: `Left` is child slot 0, `Right` is child slot 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Child slot 0
    Left,
    /// Child slot 1
    Right,
}

impl Side {
    /// Returns the opposite side
    #[inline]
    pub const fn flip(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Maps a child slot index (0 or 1) to a side
    ///
    /// # Arguments
    ///
    /// * `index` - The child slot index
    ///
    /// # Returns
    ///
    /// * `Option<Side>` - The side, or `None` if the index is neither 0 nor 1
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Side::Left),
            1 => Some(Side::Right),
            _ => None,
        }
    }
}

/// Opaque handle to a node slot inside an [`RbTree`].
///
/// A handle stays valid until the node is physically detached by a deletion.
/// The slot may later be reused by another insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Returns the raw arena index of the node
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A node in the Red-Black tree containing data and structural information.
#[derive(Debug, Clone)]
pub(crate) struct Node<V> {
    /// The stored value
    pub(crate) value: V,

    /// Index of parent node in the arena (nil if this is root)
    pub(crate) parent: usize,

    /// Index of left child node in the arena (nil if no left child)
    pub(crate) left: usize,

    /// Index of right child node in the arena (nil if no right child)
    pub(crate) right: usize,

    /// Color of this node used for Red-Black tree balancing
    pub(crate) color: Color,
}

impl<V> Node<V> {
    /// Freshly placed leaf: red, no children
    pub(crate) const fn leaf(value: V, parent: usize) -> Self {
        Self {
            value,
            parent,
            left: NIL,
            right: NIL,
            color: Color::Red,
        }
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> usize {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) const fn set_child(&mut self, side: Side, child: usize) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }
}

/// A borrowed, read-only view of one node of an [`RbTree`].
///
/// Exposes the structural queries used to navigate the tree. Views are tied
/// to a shared borrow of the tree, so no mutation can move the node while a
/// view is alive.
pub struct NodeRef<'a, V> {
    tree: &'a RbTree<V>,
    idx: usize,
}

impl<V> Clone for NodeRef<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for NodeRef<'_, V> {}

impl<V> core::fmt::Debug for NodeRef<'_, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.idx)
            .field("color", &self.color())
            .finish()
    }
}

impl<V> PartialEq for NodeRef<'_, V> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.tree, other.tree) && self.idx == other.idx
    }
}

impl<'a, V> NodeRef<'a, V> {
    pub(crate) const fn new(tree: &'a RbTree<V>, idx: usize) -> Self {
        Self { tree, idx }
    }

    fn wrap(&self, idx: usize) -> Option<NodeRef<'a, V>> {
        (idx != NIL).then(|| NodeRef::new(self.tree, idx))
    }

    fn node(&self) -> &'a Node<V> {
        self.tree.node_at(self.idx)
    }

    /// Returns the handle of this node
    #[inline]
    pub fn id(&self) -> NodeId {
        NodeId(self.idx)
    }

    /// Returns the stored value
    #[inline]
    pub fn value(&self) -> &'a V {
        &self.node().value
    }

    /// Returns the color of this node
    #[inline]
    pub fn color(&self) -> Color {
        self.node().color
    }

    /// Returns true if the node is red
    #[inline]
    pub fn is_red(&self) -> bool {
        self.color() == Color::Red
    }

    /// Returns true if the node is black
    #[inline]
    pub fn is_black(&self) -> bool {
        self.color() == Color::Black
    }

    /// Returns true if the node has a parent, i.e. it is not the root
    #[inline]
    pub fn has_parent(&self) -> bool {
        self.node().parent != NIL
    }

    /// Returns true if the node has a left child
    #[inline]
    pub fn has_left_child(&self) -> bool {
        self.node().left != NIL
    }

    /// Returns true if the node has a right child
    #[inline]
    pub fn has_right_child(&self) -> bool {
        self.node().right != NIL
    }

    /// Returns true if the node is the left child of its parent.
    /// The root is neither a left nor a right child.
    #[inline]
    pub fn is_left_child(&self) -> bool {
        self.tree.side_of(self.idx) == Some(Side::Left)
    }

    /// Returns true if the node is the right child of its parent.
    /// The root is neither a left nor a right child.
    #[inline]
    pub fn is_right_child(&self) -> bool {
        self.tree.side_of(self.idx) == Some(Side::Right)
    }

    /// Returns the parent node, if any
    pub fn parent(&self) -> Option<NodeRef<'a, V>> {
        self.wrap(self.node().parent)
    }

    /// Returns the left child, if any
    pub fn left(&self) -> Option<NodeRef<'a, V>> {
        self.wrap(self.node().left)
    }

    /// Returns the right child, if any
    pub fn right(&self) -> Option<NodeRef<'a, V>> {
        self.wrap(self.node().right)
    }

    /// Returns the child on the given side, if any
    pub fn child(&self, side: Side) -> Option<NodeRef<'a, V>> {
        self.wrap(self.node().child(side))
    }

    /// Returns the parent's other child, or `None` for the root or a
    /// missing sibling
    pub fn sibling(&self) -> Option<NodeRef<'a, V>> {
        self.wrap(self.tree.sibling_of(self.idx))
    }

    /// Returns the rightmost node of the left subtree, or `None` if this
    /// node has no left child
    pub fn predecessor(&self) -> Option<NodeRef<'a, V>> {
        self.wrap(self.tree.predecessor_of(self.idx))
    }
}
