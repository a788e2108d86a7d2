//! Diagnostic text rendering of trees.

use alloc::string::String;
use core::fmt::{self, Display, Write};

use crate::Traversable;

/// Writes the diagnostic text form of a subtree.
///
/// An absent node prints as `<nil>`, a present one as
/// `{Color value [left, right]}`.
pub fn write_tree<W, N>(out: &mut W, node: Option<N>) -> fmt::Result
where
    W: Write + ?Sized,
    N: Traversable,
    N::Value: Display,
{
    let Some(node) = node else {
        return out.write_str("<nil>");
    };
    let color = if node.is_red() { "Red" } else { "Black" };
    write!(out, "{{{color} {} [", node.get_value())?;
    write_tree(out, node.child_at(0))?;
    out.write_str(", ")?;
    write_tree(out, node.child_at(1))?;
    out.write_str("]}")
}

/// Renders a subtree into a new string, see [`write_tree`]
pub fn render<N>(node: Option<N>) -> String
where
    N: Traversable,
    N::Value: Display,
{
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_tree(&mut out, node);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RbTree;

    #[test]
    fn test_render_empty() {
        assert_eq!(render(RbTree::<i32>::new().root()), "<nil>");
    }

    #[test]
    fn test_render_after_recolor() {
        let mut tree = RbTree::new();
        for v in [2, 1, 3, 4] {
            tree.insert(v);
        }
        assert_eq!(
            render(tree.root()),
            "{Black 2 [{Black 1 [<nil>, <nil>]}, {Black 3 [<nil>, {Red 4 [<nil>, <nil>]}]}]}"
        );
    }

    #[test]
    fn test_render_subtree() {
        let mut tree = RbTree::new();
        for v in [2, 1, 3, 4] {
            tree.insert(v);
        }
        assert_eq!(
            render(tree.find(&3)),
            "{Black 3 [<nil>, {Red 4 [<nil>, <nil>]}]}"
        );
    }
}
