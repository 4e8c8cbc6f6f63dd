use std::iter::FusedIterator;

use crate::cursor::{Cursor, RandomAccessCursor};

// -----------------------------------------------------------------------------
// Walk
// -----------------------------------------------------------------------------
/// Standard [`Iterator`] over the half-open range `[begin, end)` of two cursors.
///
/// It is what `for` loops over a zip use. The walk stops at the first position
/// where `front == back`, so for a zip it stops with the shortest input.
///
/// Walking from the back needs to know where the shortest input ends,
/// which only random-access cursors can tell. [`DoubleEndedIterator`] and
/// [`Walk::len`] are therefore only available for them.
#[derive(Debug, Clone)]
pub struct Walk<C> {
    front: C,
    back: C,
}

impl<C: Cursor> Walk<C> {
    #[inline]
    pub fn new(begin: C, end: C) -> Self {
        Self {
            front: begin,
            back: end,
        }
    }

    /// Remaining range as a pair of cursors.
    #[inline]
    pub fn into_range(self) -> (C, C) {
        (self.front, self.back)
    }
}

impl<C: Cursor> Iterator for Walk<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.front.current();
        self.front.advance();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.front == self.back {
            (0, Some(0))
        } else {
            self.front.steps_hint(&self.back)
        }
    }
}

impl<C: Cursor> FusedIterator for Walk<C> {}

impl<C: RandomAccessCursor> Walk<C> {
    #[inline]
    fn remaining(&self) -> usize {
        if self.front == self.back {
            0
        } else {
            self.front.distance_to(&self.back).max(0) as usize
        }
    }
}

impl<C: RandomAccessCursor> DoubleEndedIterator for Walk<C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let remaining = self.remaining();
        if remaining == 0 {
            return None;
        }
        let mut last = self.front.clone();
        last.advance_by(remaining as isize - 1);
        let item = last.current();
        self.back = last;
        Some(item)
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        let remaining = self.remaining();
        if remaining <= n {
            self.back = self.front.clone();
            return None;
        }
        let mut last = self.front.clone();
        last.advance_by((remaining - n) as isize - 1);
        let item = last.current();
        self.back = last;
        Some(item)
    }
}

impl<C: RandomAccessCursor> Walk<C> {
    /// Number of items left.
    #[inline]
    pub fn len(&self) -> usize {
        self.remaining()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}
