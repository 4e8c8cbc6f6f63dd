use crate::category::{BidirectionalCategory, Classify, RandomAccessCategory};

// -----------------------------------------------------------------------------
// Dereference
// -----------------------------------------------------------------------------
/// Types which yield an item at their current position.
pub trait Dereference {
    type Item;

    /// Item at the current position.
    ///
    /// Calling this on a cursor which equals the end of its sequence is a
    /// contract violation. Implementations panic rather than check.
    fn current(&self) -> Self::Item;
}

// -----------------------------------------------------------------------------
// Cursor
// BidirectionalCursor
// RandomAccessCursor
// -----------------------------------------------------------------------------
/// A position within a sequence which can step forward.
///
/// Two cursors over the same sequence compare equal iff they are at the same position.
/// Comparing cursors of different sequences is meaningless.
pub trait Cursor: Dereference + Classify + Clone + PartialEq {
    fn advance(&mut self);

    /// Bounds on the number of steps from `self` to `end`, in the form of
    /// [`Iterator::size_hint`].
    fn steps_hint(&self, end: &Self) -> (usize, Option<usize>) {
        if self == end {
            (0, Some(0))
        } else {
            (1, None)
        }
    }
}

/// A cursor which can also step backward.
///
/// Only types classified as bidirectional or stronger can implement this.
pub trait BidirectionalCursor: Cursor + Classify<Category: BidirectionalCategory> {
    /// Step back by one. Retreating from the beginning is a contract violation.
    fn retreat(&mut self);
}

/// A cursor which can jump by any offset and measure distances in constant time.
pub trait RandomAccessCursor: BidirectionalCursor + Classify<Category: RandomAccessCategory> {
    /// Move by `n` steps, backward if `n` is negative.
    fn advance_by(&mut self, n: isize);

    /// Number of steps from `self` to `other`, negative if `other` is before `self`.
    fn distance_to(&self, other: &Self) -> isize;
}

// -----------------------------------------------------------------------------
// Iterable
// -----------------------------------------------------------------------------
/// Sequences which hand out a begin and an end cursor.
///
/// The cursors are cheap, independent values; each call creates new ones.
pub trait Iterable: Classify {
    type Cursor<'a>: Cursor<Category = Self::Category>
    where
        Self: 'a;

    fn begin(&self) -> Self::Cursor<'_>;

    fn end(&self) -> Self::Cursor<'_>;

    /// Number of items.
    ///
    /// Walks from begin to end unless the sequence knows its length,
    /// so a single-pass sequence is consumed by it.
    fn size(&self) -> usize {
        let mut it = self.begin();
        let end = self.end();
        let mut n = 0;
        while it != end {
            it.advance();
            n += 1;
        }
        n
    }
}

/// Cursors of a borrowed sequence live as long as the borrow, not as the reference.
impl<'r, I: Iterable + ?Sized> Iterable for &'r I {
    type Cursor<'a> = I::Cursor<'r>
    where
        Self: 'a;

    #[inline]
    fn begin(&self) -> I::Cursor<'r> {
        (*self).begin()
    }

    #[inline]
    fn end(&self) -> I::Cursor<'r> {
        (*self).end()
    }

    #[inline]
    fn size(&self) -> usize {
        (*self).size()
    }
}
