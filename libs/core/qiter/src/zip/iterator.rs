use std::{
    cmp::Ordering,
    ops::{Add, AddAssign, Sub, SubAssign},
};

use crate::{
    category::{Category, Classify, ForwardCategory, Level},
    cursor::{BidirectionalCursor, Cursor, Dereference, RandomAccessCursor},
};

use super::{BidirectionalTuple, CursorTuple, RandomAccessTuple};

// -----------------------------------------------------------------------------
// ZipIterator
// -----------------------------------------------------------------------------
/// Cursor over several sequences at once.
///
/// It holds one cursor per input and moves all of them together.
/// Its category is the weakest among its members, and it implements exactly the
/// cursor traits allowed by that category:
///
/// | reduced category | implemented                                 |
/// |------------------|---------------------------------------------|
/// | forward          | [`Cursor`]                                  |
/// | bidirectional    | [`Cursor`], [`BidirectionalCursor`]         |
/// | random access    | all of the above and [`RandomAccessCursor`] |
///
/// Two zip iterators are equal iff **any** pair of corresponding members is equal.
/// Comparing against the end of the inputs therefore stops at the shortest one.
/// Note this equality is not transitive.
///
/// # Example
/// ```
/// use qiter::cursor::{Cursor, Dereference, Iterable, RandomAccessCursor};
/// use qiter::ZipIterator;
///
/// let xs = [1, 2, 3, 4];
/// let ys = vec!['a', 'b', 'c', 'd'];
/// let mut it = ZipIterator::new((xs.begin(), ys.begin()));
/// let end = ZipIterator::new((xs.end(), ys.end()));
///
/// assert_eq!(it.distance_to(&end), 4);
/// it.advance_by(2);
/// assert_eq!(it.current(), (&3, &'c'));
/// assert_eq!(it.distance_to(&end), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ZipIterator<T> {
    cursors: T,
}

//
// ctors
//
impl<T> ZipIterator<T>
where
    T: CursorTuple,
    T::Category: ForwardCategory,
{
    /// Zip the given cursors.
    ///
    /// Cursors whose reduced category is [`Unreachable`](crate::category::Unreachable)
    /// cannot be zipped; that is rejected when compiling.
    #[inline]
    pub fn new(cursors: T) -> Self {
        const {
            assert!(
                matches!(
                    Level::min_of(T::LEVELS),
                    Some(lvl) if lvl as u8 == <T::Category as Category>::LEVEL as u8
                ),
                "Reduced category should agree with the levels of its members"
            )
        };
        Self { cursors }
    }
}

impl<T> ZipIterator<T> {
    #[inline]
    pub fn cursors(&self) -> &T {
        &self.cursors
    }

    #[inline]
    pub fn into_cursors(self) -> T {
        self.cursors
    }
}

impl<T: CursorTuple> ZipIterator<T> {
    /// Level of the reduced category.
    pub const LEVEL: Level = <T::Category as Category>::LEVEL;
}

//
// cursor
//
impl<T: CursorTuple> Classify for ZipIterator<T> {
    type Category = T::Category;
}

impl<T: CursorTuple> Dereference for ZipIterator<T> {
    type Item = T::Item;

    /// Items of every input, in input order.
    #[inline]
    fn current(&self) -> T::Item {
        self.cursors.current()
    }
}

impl<T: CursorTuple> PartialEq for ZipIterator<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cursors.any_eq(&other.cursors)
    }
}

impl<T> Cursor for ZipIterator<T>
where
    T: CursorTuple,
    T::Category: ForwardCategory,
{
    #[inline]
    fn advance(&mut self) {
        self.cursors.advance();
    }

    /// Bounds of the shortest input.
    #[inline]
    fn steps_hint(&self, end: &Self) -> (usize, Option<usize>) {
        self.cursors.steps_hint(&end.cursors)
    }
}

impl<T> BidirectionalCursor for ZipIterator<T>
where
    T: BidirectionalTuple,
{
    #[inline]
    fn retreat(&mut self) {
        self.cursors.retreat();
    }
}

impl<T> RandomAccessCursor for ZipIterator<T>
where
    T: RandomAccessTuple,
{
    #[inline]
    fn advance_by(&mut self, n: isize) {
        self.cursors.advance_by(n);
    }

    /// Minimum over the inputs of the pairwise distances.
    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        self.cursors.min_distance(&other.cursors)
    }
}

//
// random access extras
//
impl<T: RandomAccessTuple> ZipIterator<T> {
    /// Items at `n` steps from the current position.
    #[inline]
    pub fn get(&self, n: isize) -> T::Item {
        let mut it = self.clone();
        it.advance_by(n);
        it.current()
    }
}

impl<T: RandomAccessTuple> AddAssign<isize> for ZipIterator<T> {
    #[inline]
    fn add_assign(&mut self, n: isize) {
        self.advance_by(n);
    }
}

impl<T: RandomAccessTuple> SubAssign<isize> for ZipIterator<T> {
    #[inline]
    fn sub_assign(&mut self, n: isize) {
        self.advance_by(-n);
    }
}

impl<T: RandomAccessTuple> Add<isize> for ZipIterator<T> {
    type Output = Self;

    #[inline]
    fn add(mut self, n: isize) -> Self {
        self += n;
        self
    }
}

impl<T: RandomAccessTuple> Sub<isize> for ZipIterator<T> {
    type Output = Self;

    #[inline]
    fn sub(mut self, n: isize) -> Self {
        self -= n;
        self
    }
}

/// `a - b` is the distance from `b` to `a`.
impl<T: RandomAccessTuple> Sub for ZipIterator<T> {
    type Output = isize;

    #[inline]
    fn sub(self, rhs: Self) -> isize {
        rhs.distance_to(&self)
    }
}

/// `a < b` iff every member of `a` is before its counterpart in `b`.
/// Zips whose members are on different sides of each other are incomparable.
impl<T: RandomAccessTuple> PartialOrd for ZipIterator<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.cursors.all_before(&other.cursors) {
            Some(Ordering::Less)
        } else if self.cursors.all_after(&other.cursors) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::LinkedList;

    use rstest::rstest;
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

    use crate::{
        category::{Bidirectional, Forward, RandomAccess, Unreachable},
        cursor::{CharCursor, IterCursor, Iterable, SliceCursor},
    };

    type Slice = SliceCursor<'static, i32>;
    type Chars = CharCursor<'static>;
    type List = IterCursor<std::collections::linked_list::Iter<'static, i32>>;

    /// A cursor which declares no traversal capability.
    #[derive(Debug, Clone, PartialEq)]
    struct Opaque;

    impl Classify for Opaque {
        type Category = Unreachable;
    }

    impl Dereference for Opaque {
        type Item = ();

        fn current(&self) {}
    }

    impl Cursor for Opaque {
        fn advance(&mut self) {}
    }

    assert_type_eq_all!(<ZipIterator<(Slice, Slice)> as Classify>::Category, RandomAccess);
    assert_type_eq_all!(<ZipIterator<(Slice, Chars)> as Classify>::Category, Bidirectional);
    assert_type_eq_all!(<ZipIterator<(Chars, List, Slice)> as Classify>::Category, Forward);

    assert_impl_all!(ZipIterator<(Slice, Slice)>: RandomAccessCursor, PartialOrd);
    assert_impl_all!(ZipIterator<(Slice, Chars)>: BidirectionalCursor);
    assert_not_impl_any!(ZipIterator<(Slice, Chars)>: RandomAccessCursor, PartialOrd);
    assert_impl_all!(ZipIterator<(List, Slice)>: Cursor);
    assert_not_impl_any!(ZipIterator<(List, Slice)>: BidirectionalCursor, RandomAccessCursor);

    // capability collapse: such a zip is not a cursor at all
    assert_type_eq_all!(<ZipIterator<(Slice, Opaque)> as Classify>::Category, Unreachable);
    assert_not_impl_any!(ZipIterator<(Slice, Opaque)>: Cursor);

    // nested zips reduce over every member
    assert_type_eq_all!(
        <ZipIterator<(ZipIterator<(Slice, Chars)>, Slice)> as Classify>::Category,
        Bidirectional
    );
    assert_type_eq_all!(
        <ZipIterator<(Slice, ZipIterator<(Slice, List)>)> as Classify>::Category,
        Forward
    );

    #[test]
    fn test_current_in_order() {
        let xs = [10, 20, 30];
        let ys = ['a', 'b', 'c', 'd', 'e'];
        let it = ZipIterator::new((xs.begin(), ys.begin()));
        assert_eq!(it.current(), (&10, &'a'));
        assert_eq!(it.get(2), (&30, &'c'));
    }

    #[test]
    fn test_short_circuit_equality() {
        let xs = [1, 2, 3];
        let ys = [1, 2, 3, 4, 5];
        let mut it = ZipIterator::new((xs.begin(), ys.begin()));
        let end = ZipIterator::new((xs.end(), ys.end()));

        let mut steps = 0;
        while it != end {
            it.advance();
            steps += 1;
        }
        assert_eq!(steps, 3);
        // only the shorter input reached its end
        assert!(it.cursors().0 == xs.end());
        assert!(it.cursors().1 != ys.end());
        assert_eq!(it.cursors().1.current(), &4);
    }

    #[test]
    fn test_retreat_inverts_advance() {
        let xs = [1, 2, 3];
        let text = "añb";
        let begin = ZipIterator::new((xs.begin(), text.begin()));
        let end = ZipIterator::new((xs.end(), text.end()));

        let mut it = begin;
        while it != end {
            let before = it;
            it.advance();
            let mut back = it;
            back.retreat();
            assert!(back == before);
            assert_eq!(back.current(), before.current());
        }
        it.retreat();
        assert_eq!(it.current(), (&3, 'b'));
    }

    #[test]
    fn test_from_end_back() {
        let xs = [1, 2, 3, 4];
        let ys = [5, 6, 7, 8];
        let mut it = ZipIterator::new((xs.end(), ys.end()));
        it.retreat();
        assert_eq!(it.current(), (&4, &8));
    }

    #[rstest]
    #[case(0, 4)]
    #[case(1, 3)]
    #[case(2, 2)]
    #[case(4, 0)]
    fn test_distance(#[case] offset: isize, #[case] expected: isize) {
        let xs = [1, 2, 3, 4];
        let ys = vec![5, 6, 7, 8];
        let begin = ZipIterator::new((xs.begin(), ys.begin()));
        let end = ZipIterator::new((xs.end(), ys.end()));

        let it = begin + offset;
        assert_eq!(it.distance_to(&end), expected);
        assert_eq!(end - it, expected);
        assert_eq!(it - begin, offset);
        assert!(end - expected == it);
    }

    #[test]
    fn test_distance_is_min() {
        let xs = [1, 2, 3];
        let ys = [1, 2, 3, 4, 5];
        let begin = ZipIterator::new((xs.begin(), ys.begin()));
        let end = ZipIterator::new((xs.end(), ys.end()));
        assert_eq!(begin.distance_to(&end), 3);

        // members out of lockstep: the smaller gap binds
        let skewed = ZipIterator::new((xs.begin(), {
            let mut c = ys.begin();
            c.advance_by(4);
            c
        }));
        assert_eq!(skewed.distance_to(&end), 1);
    }

    #[test]
    fn test_compound_assign() {
        let xs = [1, 2, 3, 4, 5];
        let mut it = ZipIterator::new((xs.begin(),));
        it += 3;
        assert_eq!(it.current(), (&4,));
        it -= 2;
        assert_eq!(it.current(), (&2,));
    }

    #[test]
    fn test_ordering() {
        let xs = [1, 2, 3];
        let ys = [4, 5, 6];
        let begin = ZipIterator::new((xs.begin(), ys.begin()));
        let mid = begin + 1;
        let end = ZipIterator::new((xs.end(), ys.end()));

        assert!(begin < mid);
        assert!(mid < end);
        assert!(end > begin);
        assert!(begin <= begin);
        assert_eq!(begin.partial_cmp(&begin), Some(Ordering::Equal));

        let skewed = ZipIterator::new(((begin + 2).cursors().0, ys.begin()));
        assert_eq!(skewed.partial_cmp(&mid), None);
    }

    #[test]
    fn test_level() {
        assert_eq!(ZipIterator::<(Slice, Slice)>::LEVEL, Level::RandomAccess);
        assert_eq!(ZipIterator::<(Slice, Chars)>::LEVEL, Level::Bidirectional);
        assert_eq!(ZipIterator::<(Slice, List)>::LEVEL, Level::Forward);
        assert_eq!(ZipIterator::<(Slice, Opaque)>::LEVEL, Level::None);
    }

    #[test]
    fn test_forward_only() {
        let list = LinkedList::from([1, 2]);
        let xs = [7, 8, 9];
        let mut it = ZipIterator::new((list.begin(), xs.begin()));
        let end = ZipIterator::new((list.end(), xs.end()));
        let mut seen = Vec::new();
        while it != end {
            seen.push(it.current());
            it.advance();
        }
        assert_eq!(seen, vec![(&1, &7), (&2, &8)]);
    }
}
