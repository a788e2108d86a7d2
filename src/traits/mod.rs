mod ordered;
pub use ordered::Ordered;

mod traversable;
pub use traversable::Traversable;
