use crate::rb_tree::{NodeRef, Side};

/// Minimal read-only capability handed to traversal and printing utilities.
///
/// A traversable node exposes its stored value and its children by slot
/// index (0 for left, 1 for right). Nothing reachable through this trait
/// can mutate the tree.
pub trait Traversable: Sized {
    /// The stored value type
    type Value;

    /// Returns the stored value
    fn get_value(&self) -> &Self::Value;

    /// Returns the child in slot `index` (0 or 1), or `None` if absent or
    /// if the index is out of range
    fn child_at(&self, index: usize) -> Option<Self>;

    /// Returns true if the node is red; nodes without a color report false
    fn is_red(&self) -> bool {
        false
    }
}

impl<V> Traversable for NodeRef<'_, V> {
    type Value = V;

    #[inline]
    fn get_value(&self) -> &V {
        self.value()
    }

    #[inline]
    fn child_at(&self, index: usize) -> Option<Self> {
        Side::from_index(index).and_then(|side| self.child(side))
    }

    #[inline]
    fn is_red(&self) -> bool {
        NodeRef::is_red(self)
    }
}
