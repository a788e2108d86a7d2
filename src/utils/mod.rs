//! Read-only consumers of the [`Traversable`](crate::Traversable) capability.

pub mod print;
pub mod traversal;
