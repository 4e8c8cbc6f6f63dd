use std::{cell::RefCell, rc::Rc};

use crate::category::{Classify, Forward};

use super::{Cursor, Dereference, Iterable};

// -----------------------------------------------------------------------------
// _Stream
// -----------------------------------------------------------------------------
enum Slot<T> {
    /// The item at the current position is not pulled yet.
    Pending,
    Ready(T),
    Taken,
    Done,
}

struct _Stream<I: Iterator> {
    iter: I,
    slot: Slot<I::Item>,
}

impl<I: Iterator> _Stream<I> {
    fn fill(&mut self) {
        if matches!(self.slot, Slot::Pending) {
            self.slot = match self.iter.next() {
                Some(item) => Slot::Ready(item),
                None => Slot::Done,
            };
        }
    }

    fn is_done(&mut self) -> bool {
        self.fill();
        matches!(self.slot, Slot::Done)
    }

    fn take(&mut self) -> Option<I::Item> {
        self.fill();
        match std::mem::replace(&mut self.slot, Slot::Taken) {
            Slot::Ready(item) => Some(item),
            other => {
                self.slot = other;
                None
            }
        }
    }

    fn skip(&mut self) {
        self.fill();
        if !matches!(self.slot, Slot::Done) {
            self.slot = Slot::Pending;
        }
    }

    fn hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.iter.size_hint();
        match self.slot {
            Slot::Pending => (lo, hi),
            Slot::Ready(_) | Slot::Taken => (lo.saturating_add(1), hi.and_then(|hi| hi.checked_add(1))),
            Slot::Done => (0, Some(0)),
        }
    }
}

// -----------------------------------------------------------------------------
// SinglePass
// SinglePassCursor
// -----------------------------------------------------------------------------
/// Iterable made of an iterator which can be walked only once.
///
/// Neither the iterator nor its items need to be [`Clone`]. All cursors of the
/// sequence share one position: advancing any of them advances all, and the
/// item at a position can be dereferenced once, moving it out.
/// Always classified as [`Forward`].
pub struct SinglePass<I: Iterator>(Rc<RefCell<_Stream<I>>>);

/// Use any iterator as a forward-only input of a zip.
///
/// # Example
/// ```
/// use qiter::{single_pass, zip};
///
/// let (tx, rx) = std::sync::mpsc::channel();
/// for word in ["x", "y", "z"] {
///     tx.send(word.to_string()).unwrap();
/// }
/// drop(tx);
///
/// let ids = vec![1, 2];
/// let got = zip((single_pass(rx), &ids)).iter().collect::<Vec<_>>();
/// assert_eq!(got, vec![("x".to_string(), &1), ("y".to_string(), &2)]);
/// ```
#[inline]
pub fn single_pass<I: IntoIterator>(iter: I) -> SinglePass<I::IntoIter> {
    SinglePass(Rc::new(RefCell::new(_Stream {
        iter: iter.into_iter(),
        slot: Slot::Pending,
    })))
}

impl<I: Iterator> std::fmt::Debug for SinglePass<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SinglePass").finish_non_exhaustive()
    }
}

impl<I: Iterator> Classify for SinglePass<I> {
    type Category = Forward;
}

impl<I: Iterator> Iterable for SinglePass<I> {
    type Cursor<'a> = SinglePassCursor<I>
    where
        Self: 'a;

    #[inline]
    fn begin(&self) -> SinglePassCursor<I> {
        SinglePassCursor {
            stream: self.0.clone(),
            end: false,
        }
    }

    #[inline]
    fn end(&self) -> SinglePassCursor<I> {
        SinglePassCursor {
            stream: self.0.clone(),
            end: true,
        }
    }
}

/// Cursor of a [`SinglePass`] sequence.
pub struct SinglePassCursor<I: Iterator> {
    stream: Rc<RefCell<_Stream<I>>>,
    end: bool,
}

impl<I: Iterator> SinglePassCursor<I> {
    /// True iff the underlying iterator has no more items.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.stream.borrow_mut().is_done()
    }
}

impl<I: Iterator> Clone for SinglePassCursor<I> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            stream: self.stream.clone(),
            end: self.end,
        }
    }
}

impl<I: Iterator> std::fmt::Debug for SinglePassCursor<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SinglePassCursor")
            .field("end", &self.end)
            .finish_non_exhaustive()
    }
}

impl<I: Iterator> PartialEq for SinglePassCursor<I> {
    /// Live cursors share their position, so they are always equal.
    /// A live cursor equals the end once the iterator is exhausted.
    fn eq(&self, other: &Self) -> bool {
        if self.end == other.end {
            true
        } else {
            self.is_exhausted()
        }
    }
}

impl<I: Iterator> Classify for SinglePassCursor<I> {
    type Category = Forward;
}

impl<I: Iterator> Dereference for SinglePassCursor<I> {
    type Item = I::Item;

    #[inline]
    fn current(&self) -> I::Item {
        debug_assert!(!self.end, "Should not dereference the end of a single-pass sequence");
        self.stream
            .borrow_mut()
            .take()
            .expect("Should dereference a single-pass cursor once per position")
    }
}

impl<I: Iterator> Cursor for SinglePassCursor<I> {
    #[inline]
    fn advance(&mut self) {
        if !self.end {
            self.stream.borrow_mut().skip();
        }
    }

    fn steps_hint(&self, end: &Self) -> (usize, Option<usize>) {
        match (self.end, end.end) {
            (true, _) => (0, Some(0)),
            (false, true) => {
                let mut stream = self.stream.borrow_mut();
                stream.fill();
                stream.hint()
            }
            (false, false) => (0, Some(0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use static_assertions::{assert_impl_all, assert_not_impl_any};

    use crate::cursor::BidirectionalCursor;

    /// An item which cannot be copied around.
    #[derive(Debug, PartialEq)]
    struct Token(u32);

    assert_impl_all!(SinglePassCursor<std::vec::IntoIter<Token>>: Cursor);
    assert_not_impl_any!(SinglePassCursor<std::vec::IntoIter<Token>>: BidirectionalCursor);
    assert_impl_all!(SinglePass<std::vec::IntoIter<Token>>: Iterable);

    #[test]
    fn test_moves_items_out() {
        let seq = single_pass(vec![Token(1), Token(2), Token(3)]);
        let mut it = seq.begin();
        let end = seq.end();

        let mut seen = Vec::new();
        while it != end {
            seen.push(it.current());
            it.advance();
        }
        assert_eq!(seen, vec![Token(1), Token(2), Token(3)]);
        assert!(it.is_exhausted());
    }

    #[test]
    fn test_cursors_share_position() {
        let seq = single_pass(1..5);
        let mut lhs = seq.begin();
        let rhs = lhs.clone();
        lhs.advance();
        assert!(lhs == rhs);
        assert_eq!(rhs.current(), 2);

        // a fresh begin resumes where the stream is
        let mut again = seq.begin();
        again.advance();
        assert_eq!(again.current(), 3);
    }

    #[test]
    fn test_advance_without_deref() {
        let seq = single_pass("abc".chars());
        let mut it = seq.begin();
        it.advance();
        it.advance();
        assert_eq!(it.current(), 'c');
        it.advance();
        assert!(it == seq.end());
    }

    #[test]
    #[should_panic(expected = "once per position")]
    fn test_deref_twice() {
        let seq = single_pass(vec![Token(7)]);
        let it = seq.begin();
        let _ = it.current();
        let _ = it.current();
    }

    #[test]
    fn test_steps_hint() {
        let seq = single_pass(vec![1, 2, 3]);
        let mut it = seq.begin();
        assert_eq!(it.steps_hint(&seq.end()), (3, Some(3)));
        it.advance();
        assert_eq!(it.steps_hint(&seq.end()), (2, Some(2)));

        let empty = single_pass(Vec::<i32>::new());
        assert!(empty.begin() == empty.end());
        assert_eq!(empty.begin().steps_hint(&empty.end()), (0, Some(0)));
    }
}
