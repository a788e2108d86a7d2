//! Structural snapshots of small trees for exact-shape assertions in tests.

use alloc::boxed::Box;

use super::{Color, NodeRef, RbTree, Side};

/// Color, value and both children of a subtree
#[derive(Debug, PartialEq)]
pub(crate) struct Shape {
    color: Color,
    value: i32,
    children: [Option<Box<Shape>>; 2],
}

pub(crate) fn shape(tree: &RbTree<i32>) -> Option<Box<Shape>> {
    fn walk(node: Option<NodeRef<'_, i32>>) -> Option<Box<Shape>> {
        let node = node?;
        Some(Box::new(Shape {
            color: node.color(),
            value: *node.value(),
            children: [walk(node.child(Side::Left)), walk(node.child(Side::Right))],
        }))
    }
    walk(tree.root())
}

pub(crate) fn black(
    value: i32,
    left: Option<Box<Shape>>,
    right: Option<Box<Shape>>,
) -> Option<Box<Shape>> {
    Some(Box::new(Shape {
        color: Color::Black,
        value,
        children: [left, right],
    }))
}

pub(crate) fn red(
    value: i32,
    left: Option<Box<Shape>>,
    right: Option<Box<Shape>>,
) -> Option<Box<Shape>> {
    Some(Box::new(Shape {
        color: Color::Red,
        value,
        children: [left, right],
    }))
}

pub(crate) fn build(values: &[i32]) -> RbTree<i32> {
    let mut tree = RbTree::new();
    for &v in values {
        tree.insert(v);
    }
    tree
}
