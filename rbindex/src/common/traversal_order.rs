/// Specifies the direction of a cursor traversal pass.
///
/// # Purpose
/// A [`crate::tree::TreeCursor`] walks the tree in one direction per pass.
/// The order is chosen implicitly by the first stepping call of a pass:
/// `next()` starts an ascending pass, `prev()` a descending one, and
/// `seek()` always begins an ascending pass from the sought position.
///
/// # Variants
/// - `Ascending`: visit items from smallest to largest under the comparator
/// - `Descending`: visit items from largest to smallest under the comparator
///
/// # Characteristics
/// - **Copy**: Can be copied instead of cloned
/// - **Comparable**: Can be compared for equality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Visit items from smallest to largest under the comparator
    Ascending,
    /// Visit items from largest to smallest under the comparator
    Descending,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traversal_order_equality() {
        assert_eq!(TraversalOrder::Ascending, TraversalOrder::Ascending);
        assert_ne!(TraversalOrder::Ascending, TraversalOrder::Descending);
    }
}
