use crate::{
    category::{Category, Classify, ForwardCategory},
    cursor::Iterable,
};

use super::{IterableTuple, Walk, ZipIterator};

// -----------------------------------------------------------------------------
// ZipContainer
// -----------------------------------------------------------------------------
/// Several sequences viewed as one sequence of tuples.
///
/// The container owns its inputs; pass references to zip borrowed sequences.
/// Its length is the length of the shortest input and its category is the
/// weakest among the inputs. Since it is [`Iterable`] itself, it can be zipped again.
///
/// # Example
/// ```
/// use qiter::zip;
///
/// let nums = vec![10, 20, 30];
/// let text = "abcde";
/// let mut seen = Vec::new();
/// for (n, c) in &zip((&nums, text)) {
///     seen.push(format!("{n}{c}"));
/// }
/// assert_eq!(seen, vec!["10a", "20b", "30c"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZipContainer<T> {
    inputs: T,
}

//
// ctors
//
impl<T> ZipContainer<T>
where
    T: IterableTuple,
    T::Category: ForwardCategory,
{
    pub fn new(inputs: T) -> Self {
        log::trace!(
            "Zipping {} inputs, reduced category is {}",
            T::ARITY,
            <T::Category as Category>::LEVEL
        );
        Self { inputs }
    }
}

//
// methods
//
impl<T> ZipContainer<T> {
    #[inline]
    pub fn inputs(&self) -> &T {
        &self.inputs
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.inputs
    }
}

impl<T> ZipContainer<T>
where
    T: IterableTuple,
    T::Category: ForwardCategory,
{
    /// Zip of the begin cursors of the inputs.
    #[inline]
    pub fn begin(&self) -> ZipIterator<T::Cursors<'_>> {
        ZipIterator::new(self.inputs.begins())
    }

    /// Zip of the end cursors of the inputs. Same type as [`Self::begin`].
    #[inline]
    pub fn end(&self) -> ZipIterator<T::Cursors<'_>> {
        ZipIterator::new(self.inputs.ends())
    }

    /// Standard iterator over the tuples, stopping with the shortest input.
    #[inline]
    pub fn iter(&self) -> Walk<ZipIterator<T::Cursors<'_>>> {
        Walk::new(self.begin(), self.end())
    }
}

impl<T: IterableTuple> Classify for ZipContainer<T> {
    type Category = T::Category;
}

impl<T> Iterable for ZipContainer<T>
where
    T: IterableTuple,
    T::Category: ForwardCategory,
{
    type Cursor<'a> = ZipIterator<T::Cursors<'a>>
    where
        Self: 'a;

    #[inline]
    fn begin(&self) -> Self::Cursor<'_> {
        ZipContainer::begin(self)
    }

    #[inline]
    fn end(&self) -> Self::Cursor<'_> {
        ZipContainer::end(self)
    }
}

impl<'a, T> IntoIterator for &'a ZipContainer<T>
where
    T: IterableTuple,
    T::Category: ForwardCategory,
{
    type Item = <ZipIterator<T::Cursors<'a>> as crate::cursor::Dereference>::Item;
    type IntoIter = Walk<ZipIterator<T::Cursors<'a>>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::LinkedList;

    use itertools::multizip;
    use rstest::rstest;
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

    use crate::{
        category::{Bidirectional, Forward, Level, RandomAccess},
        cursor::{BidirectionalCursor, Cursor, Dereference, RandomAccessCursor},
        forward_only, zip, Counting,
    };

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn level_of<I: Iterable>(_: &I) -> Level {
        <I::Category as Category>::LEVEL
    }

    type Slices = ZipContainer<(Vec<i32>, [u8; 4])>;
    type Mixed = ZipContainer<(Vec<i32>, String)>;
    type Listed = ZipContainer<(Vec<i32>, LinkedList<i32>, String)>;

    assert_type_eq_all!(<Slices as Classify>::Category, RandomAccess);
    assert_type_eq_all!(<Mixed as Classify>::Category, Bidirectional);
    assert_type_eq_all!(<Listed as Classify>::Category, Forward);
    assert_type_eq_all!(
        <ZipContainer<(Mixed, Slices)> as Classify>::Category,
        Bidirectional
    );
    assert_impl_all!(Slices: Iterable, Clone, Send, Sync);
    assert_impl_all!(Walk<<Slices as Iterable>::Cursor<'static>>: DoubleEndedIterator);
    assert_not_impl_any!(Walk<<Mixed as Iterable>::Cursor<'static>>: DoubleEndedIterator);

    #[test]
    fn test_shortest_input() {
        init();
        let nums = vec![10, 20, 30];
        let text = "abcde";
        let got = zip((&nums, text)).iter().collect::<Vec<_>>();
        assert_eq!(got, vec![(&10, 'a'), (&20, 'b'), (&30, 'c')]);
    }

    #[rstest]
    #[case(vec![1, 2, 3], vec![4, 5, 6, 7, 8])]
    #[case(vec![1, 2, 3, 4, 5], vec![6, 7])]
    #[case(vec![], vec![1])]
    #[case(vec![1, 2], vec![3, 4])]
    fn test_agrees_with_multizip(#[case] lhs: Vec<i32>, #[case] rhs: Vec<i32>) {
        init();
        let list: LinkedList<i32> = rhs.iter().copied().collect();
        let zipped = zip((&lhs, &rhs, &list));
        let got = zipped.iter().collect::<Vec<_>>();
        let expected = multizip((&lhs, &rhs, &list)).collect::<Vec<_>>();

        assert_eq!(got.len(), lhs.len().min(rhs.len()));
        assert_eq!(got, expected);
    }

    #[test]
    fn test_random_access() {
        init();
        let xs = [1, 2, 3, 4];
        let ys = vec!['a', 'b', 'c', 'd'];
        let zipped = zip((&xs, &ys));
        let mut it = zipped.begin();

        assert_eq!(it.distance_to(&zipped.end()), 4);
        it.advance_by(2);
        assert_eq!(it.current(), (&3, &'c'));
        assert_eq!(it.distance_to(&zipped.end()), 2);
        assert_eq!(zipped.iter().len(), 4);
    }

    #[test]
    fn test_forward_only_input() {
        init();
        let xs = [1, 2, 3];
        let zipped = zip((&xs, forward_only(xs.iter().map(|x| x * 10))));

        assert_eq!(level_of(&zipped), Level::Forward);
        assert_eq!(
            zipped.iter().collect::<Vec<_>>(),
            vec![(&1, 10), (&2, 20), (&3, 30)]
        );
    }

    #[test]
    fn test_nested() {
        init();
        let a = vec![1, 2, 3];
        let b = "wxyz";
        let c = [0.5, 1.5, 2.5];

        let inner = zip((&a, &c));
        let outer = zip((&inner, b));
        assert_eq!(level_of(&outer), Level::Bidirectional);

        let got = outer.iter().collect::<Vec<_>>();
        assert_eq!(
            got,
            vec![((&1, &0.5), 'w'), ((&2, &1.5), 'x'), ((&3, &2.5), 'y')]
        );

        let mut it = outer.begin();
        it.advance();
        it.advance();
        it.retreat();
        assert_eq!(it.current(), ((&2, &1.5), 'x'));
    }

    #[test]
    fn test_begin_end_same_type() {
        let xs = vec![1, 2];
        let zipped = zip((&xs, Counting::new(0u8)));
        let mut it = zipped.begin();
        let end = zipped.end();
        let mut count = 0;
        while it != end {
            it.advance();
            count += 1;
        }
        assert_eq!(count, 2);
    }

    #[test]
    fn test_yields_references() {
        let words = vec![String::from("alpha"), String::from("beta")];
        let zipped = zip((&words, Counting::new(0usize)));
        for (word, idx) in &zipped {
            assert!(std::ptr::eq(word, &words[idx]));
        }
    }

    #[test]
    fn test_double_ended() {
        init();
        let xs = [1, 2, 3, 4, 5];
        let ys = vec!['a', 'b', 'c'];
        let zipped = zip((&xs, &ys));

        let back = zipped.iter().rev().collect::<Vec<_>>();
        assert_eq!(back, vec![(&3, &'c'), (&2, &'b'), (&1, &'a')]);

        let mut walk = zipped.iter();
        assert_eq!(walk.next_back(), Some((&3, &'c')));
        assert_eq!(walk.next(), Some((&1, &'a')));
        assert_eq!(walk.len(), 1);
    }

    #[test]
    fn test_bidirectional_not_random_access() {
        let xs = vec![1, 2, 3];
        let zipped = zip((&xs, "abc"));
        let mut it = zipped.end();
        it.retreat();
        assert_eq!(it.current(), (&3, 'c'));
    }
}
