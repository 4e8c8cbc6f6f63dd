use super::{Category, Classify};

// -----------------------------------------------------------------------------
// Min
// Reduced
// -----------------------------------------------------------------------------
/// The weaker of two categories.
pub type Min<A, B> = <A as Category>::Meet<B>;

/// The weakest category among the members of a tuple.
pub type Reduced<T> = <T as Classify>::Category;

macro_rules! impl_classify_tuple {
    ($head:ident) => {
        impl<$head: Classify> Classify for ($head,) {
            type Category = <$head as Classify>::Category;
        }
    };
    ($head:ident, $($tail:ident),+) => {
        impl<$head: Classify, $($tail: Classify),+> Classify for ($head, $($tail),+) {
            type Category = Min<<$head as Classify>::Category, <($($tail,)+) as Classify>::Category>;
        }

        impl_classify_tuple!($($tail),+);
    };
}

impl_classify_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);
