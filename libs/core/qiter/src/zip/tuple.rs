use crate::{
    category::{BidirectionalCategory, Category, Classify, Level, RandomAccessCategory},
    cursor::{
        single_pass, BidirectionalCursor, Cursor, Dereference, Iterable, RandomAccessCursor,
        SinglePass,
    },
};

// -----------------------------------------------------------------------------
// CursorTuple
// BidirectionalTuple
// RandomAccessTuple
// -----------------------------------------------------------------------------
/// Fixed-arity group of cursors moved in lockstep.
///
/// Implemented for tuples of 1 to 12 cursors. The empty tuple is not a cursor tuple:
/// there is no shortest of no sequences.
pub trait CursorTuple: Classify + Clone {
    const ARITY: usize;

    /// Level of every member, in order.
    const LEVELS: &'static [Level];

    type Item;

    /// Items of every member, in order.
    fn current(&self) -> Self::Item;

    /// Advances every member, in order.
    fn advance(&mut self);

    /// True iff at least one member equals its counterpart.
    fn any_eq(&self, other: &Self) -> bool;

    /// Bounds on the steps to `end` of the shortest member.
    fn steps_hint(&self, end: &Self) -> (usize, Option<usize>);
}

/// Cursor tuples whose reduced category allows stepping backward.
pub trait BidirectionalTuple: CursorTuple + Classify<Category: BidirectionalCategory> {
    /// Retreats every member, in order.
    fn retreat(&mut self);
}

/// Cursor tuples whose reduced category is random access.
pub trait RandomAccessTuple: BidirectionalTuple + Classify<Category: RandomAccessCategory> {
    /// Moves every member by `n`, in order.
    fn advance_by(&mut self, n: isize);

    /// Minimum over the members of the distance to their counterpart.
    fn min_distance(&self, other: &Self) -> isize;

    /// True iff every member is strictly before its counterpart.
    fn all_before(&self, other: &Self) -> bool;

    /// True iff every member is strictly after its counterpart.
    fn all_after(&self, other: &Self) -> bool;
}

// -----------------------------------------------------------------------------
// IterableTuple
// -----------------------------------------------------------------------------
/// Fixed-arity group of iterables, the inputs of a zip.
pub trait IterableTuple: Classify {
    const ARITY: usize;

    type Cursors<'a>: CursorTuple<Category = Self::Category>
    where
        Self: 'a;

    fn begins(&self) -> Self::Cursors<'_>;

    fn ends(&self) -> Self::Cursors<'_>;
}

// -----------------------------------------------------------------------------
// SinglePassTuple
// -----------------------------------------------------------------------------
/// Fixed-arity group of [`IntoIterator`]s, each walked once as a [`SinglePass`].
pub trait SinglePassTuple {
    type Streams: IterableTuple;

    fn into_streams(self) -> Self::Streams;
}

macro_rules! impl_tuples {
    ($($t:ident $n:tt),+) => {
        impl<$($t: Cursor),+> CursorTuple for ($($t,)+) {
            const ARITY: usize = [$($n),+].len();

            const LEVELS: &'static [Level] = &[$(<<$t as Classify>::Category as Category>::LEVEL),+];

            type Item = ($(<$t as Dereference>::Item,)+);

            #[inline]
            fn current(&self) -> Self::Item {
                ($(self.$n.current(),)+)
            }

            #[inline]
            fn advance(&mut self) {
                $(self.$n.advance();)+
            }

            #[inline]
            fn any_eq(&self, other: &Self) -> bool {
                $(self.$n == other.$n)||+
            }

            fn steps_hint(&self, end: &Self) -> (usize, Option<usize>) {
                let lo = usize::MAX;
                let hi: Option<usize> = None;
                $(
                    let (l, h) = self.$n.steps_hint(&end.$n);
                    let lo = lo.min(l);
                    let hi = match (hi, h) {
                        (Some(a), Some(b)) => Some(a.min(b)),
                        (a, b) => a.or(b),
                    };
                )+
                (lo, hi)
            }
        }

        impl<$($t: BidirectionalCursor),+> BidirectionalTuple for ($($t,)+)
        where
            <Self as Classify>::Category: BidirectionalCategory,
        {
            #[inline]
            fn retreat(&mut self) {
                $(self.$n.retreat();)+
            }
        }

        impl<$($t: RandomAccessCursor),+> RandomAccessTuple for ($($t,)+)
        where
            <Self as Classify>::Category: RandomAccessCategory,
        {
            #[inline]
            fn advance_by(&mut self, n: isize) {
                $(self.$n.advance_by(n);)+
            }

            #[inline]
            fn min_distance(&self, other: &Self) -> isize {
                let dist = isize::MAX;
                $(let dist = dist.min(self.$n.distance_to(&other.$n));)+
                dist
            }

            #[inline]
            fn all_before(&self, other: &Self) -> bool {
                $(self.$n.distance_to(&other.$n) > 0)&&+
            }

            #[inline]
            fn all_after(&self, other: &Self) -> bool {
                $(self.$n.distance_to(&other.$n) < 0)&&+
            }
        }

        impl<$($t: Iterable),+> IterableTuple for ($($t,)+) {
            const ARITY: usize = [$($n),+].len();

            type Cursors<'a> = ($(<$t as Iterable>::Cursor<'a>,)+)
            where
                Self: 'a;

            #[inline]
            fn begins(&self) -> Self::Cursors<'_> {
                ($(self.$n.begin(),)+)
            }

            #[inline]
            fn ends(&self) -> Self::Cursors<'_> {
                ($(self.$n.end(),)+)
            }
        }

        impl<$($t: IntoIterator),+> SinglePassTuple for ($($t,)+) {
            type Streams = ($(SinglePass<<$t as IntoIterator>::IntoIter>,)+);

            #[inline]
            fn into_streams(self) -> Self::Streams {
                ($(single_pass(self.$n),)+)
            }
        }
    };
}

impl_tuples!(A 0);
impl_tuples!(A 0, B 1);
impl_tuples!(A 0, B 1, C 2);
impl_tuples!(A 0, B 1, C 2, D 3);
impl_tuples!(A 0, B 1, C 2, D 3, E 4);
impl_tuples!(A 0, B 1, C 2, D 3, E 4, F 5);
impl_tuples!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_tuples!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
impl_tuples!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8);
impl_tuples!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9);
impl_tuples!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10);
impl_tuples!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11);
