/// The ordering contract every value stored in an [`RbTree`](crate::RbTree) must satisfy.
///
/// The tree only ever asks two questions of its values: is `self` strictly
/// less than `other`, and is `self` equal to `other`. For correct placement
/// and lookup, exactly one of `a.less(b)`, `b.less(a)` and `a.equal(b)` must
/// hold for any pair. An inconsistent implementation leads to unspecified
/// lookup results but never to memory unsafety.
///
/// Every `T: Ord` satisfies the contract through the blanket implementation.
/// Types without a total order implement it by hand.
pub trait Ordered {
    /// Strict ordering test: returns true if `self` sorts before `other`
    fn less(&self, other: &Self) -> bool;

    /// Equality test used by lookups and deletions
    fn equal(&self, other: &Self) -> bool;
}

impl<T: Ord + ?Sized> Ordered for T {
    #[inline]
    fn less(&self, other: &Self) -> bool {
        self < other
    }

    #[inline]
    fn equal(&self, other: &Self) -> bool {
        self == other
    }
}

#[cfg(test)]
mod tests {
    use super::Ordered;
    use ordered_float::OrderedFloat;

    #[test]
    fn test_ord_blanket_impl() {
        assert!(1i32.less(&2));
        assert!(!2i32.less(&1));
        assert!(!2i32.less(&2));
        assert!(2i32.equal(&2));
        assert!("abc".less("abd"));
    }

    #[test]
    fn test_ordered_float_nan_is_totally_ordered() {
        let nan = OrderedFloat(f64::NAN);
        let one = OrderedFloat(1.0);
        assert!(nan.equal(&nan));
        assert!(one.less(&nan));
        assert!(!nan.less(&one));
    }
}
