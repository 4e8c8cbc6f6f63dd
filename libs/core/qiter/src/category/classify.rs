use super::{Bidirectional, Category, Forward, RandomAccess, Unreachable};

// -----------------------------------------------------------------------------
// Classify
// -----------------------------------------------------------------------------
/// Declares the traversal capability of a type.
///
/// Cursors and iterables state their own category. Tuples are classified by
/// the weakest of their members, recursively, so a tuple of tuples reduces
/// through every level of nesting.
///
/// # Example
/// ```
/// use qiter::category::{Bidirectional, Classify, Forward, RandomAccess};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<(RandomAccess, Bidirectional) as Classify>::Category, Bidirectional);
/// assert_type_eq_all!(
///     <((RandomAccess, Forward), RandomAccess) as Classify>::Category,
///     Forward
/// );
/// ```
pub trait Classify {
    type Category: Category;
}

macro_rules! impl_classify_marker {
    ($($marker:ident),*) => {
        $(
            impl Classify for $marker {
                type Category = $marker;
            }
        )*
    };
}

impl_classify_marker!(Unreachable, Forward, Bidirectional, RandomAccess);

impl<T: Classify + ?Sized> Classify for &T {
    type Category = T::Category;
}
