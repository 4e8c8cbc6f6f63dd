use std::{collections::VecDeque, ops::Index};

use crate::category::{Classify, RandomAccess};

use super::{BidirectionalCursor, Cursor, Dereference, Iterable, RandomAccessCursor};

// -----------------------------------------------------------------------------
// IndexCursor
// -----------------------------------------------------------------------------
/// Random access cursor over any sequence indexable by `usize`.
///
/// The cursor borrows the sequence and holds a position into it.
/// Dereferencing a position outside of the sequence panics through the indexing.
#[derive(Debug)]
pub struct IndexCursor<'a, S: ?Sized> {
    seq: &'a S,
    pos: usize,
}

pub type SliceCursor<'a, T> = IndexCursor<'a, [T]>;
pub type DequeCursor<'a, T> = IndexCursor<'a, VecDeque<T>>;

//
// ctors
//
impl<'a, S: ?Sized> IndexCursor<'a, S> {
    #[inline]
    pub fn new(seq: &'a S, pos: usize) -> Self {
        Self { seq, pos }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<S: ?Sized> Clone for IndexCursor<'_, S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for IndexCursor<'_, S> {}

impl<S: ?Sized> PartialEq for IndexCursor<'_, S> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<S: ?Sized> Eq for IndexCursor<'_, S> {}

//
// methods
//
impl<S: ?Sized> Classify for IndexCursor<'_, S> {
    type Category = RandomAccess;
}

impl<'a, S> Dereference for IndexCursor<'a, S>
where
    S: ?Sized + Index<usize>,
    S::Output: 'a,
{
    type Item = &'a S::Output;

    #[inline]
    fn current(&self) -> Self::Item {
        &self.seq[self.pos]
    }
}

impl<'a, S> Cursor for IndexCursor<'a, S>
where
    S: ?Sized + Index<usize>,
    S::Output: 'a,
{
    #[inline]
    fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    fn steps_hint(&self, end: &Self) -> (usize, Option<usize>) {
        let n = end.pos.saturating_sub(self.pos);
        (n, Some(n))
    }
}

impl<'a, S> BidirectionalCursor for IndexCursor<'a, S>
where
    S: ?Sized + Index<usize>,
    S::Output: 'a,
{
    #[inline]
    fn retreat(&mut self) {
        self.pos -= 1;
    }
}

impl<'a, S> RandomAccessCursor for IndexCursor<'a, S>
where
    S: ?Sized + Index<usize>,
    S::Output: 'a,
{
    #[inline]
    fn advance_by(&mut self, n: isize) {
        self.pos = self
            .pos
            .checked_add_signed(n)
            .expect("Should not move before the beginning of the sequence");
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        other.pos as isize - self.pos as isize
    }
}

// -----------------------------------------------------------------------------
// Iterable impls
// -----------------------------------------------------------------------------
macro_rules! impl_slice_iterable {
    ($({$($gen:tt)*} $ty:ty),* $(,)?) => {
        $(
            impl<$($gen)*> Classify for $ty {
                type Category = RandomAccess;
            }

            impl<$($gen)*> Iterable for $ty {
                type Cursor<'a> = SliceCursor<'a, T>
                where
                    Self: 'a;

                #[inline]
                fn begin(&self) -> Self::Cursor<'_> {
                    IndexCursor::new(self.as_ref(), 0)
                }

                #[inline]
                fn end(&self) -> Self::Cursor<'_> {
                    let slice: &[T] = self.as_ref();
                    IndexCursor::new(slice, slice.len())
                }

                #[inline]
                fn size(&self) -> usize {
                    let slice: &[T] = self.as_ref();
                    slice.len()
                }
            }
        )*
    };
}

impl_slice_iterable!({T} [T], {T} Vec<T>, {T, const N: usize} [T; N]);

impl<T> Classify for VecDeque<T> {
    type Category = RandomAccess;
}

impl<T> Iterable for VecDeque<T> {
    type Cursor<'a> = DequeCursor<'a, T>
    where
        Self: 'a;

    #[inline]
    fn begin(&self) -> Self::Cursor<'_> {
        IndexCursor::new(self, 0)
    }

    #[inline]
    fn end(&self) -> Self::Cursor<'_> {
        IndexCursor::new(self, self.len())
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}
