#![doc = include_str!("../README.md")]
#![no_std]
#![deny(
    unsafe_code,
    unused_imports,
    unused_variables,
    unused_must_use,
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented
)]
#![allow(clippy::len_without_is_empty)]

#[macro_use]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
pub use error::InvariantViolation;

mod traits;
pub use traits::{Ordered, Traversable};

mod rb_tree;
pub use rb_tree::{Color, FloatTree, NodeId, NodeRef, RbTree, Side};

pub mod utils;
pub use utils::traversal::{InOrder, PreOrder};
