use crate::{category::Classify, Error};

use super::{Cursor, Iterable, RandomAccessCursor};

// -----------------------------------------------------------------------------
// Span
// -----------------------------------------------------------------------------
/// A cursor paired with the end of its sequence.
///
/// A bare cursor has no notion of where its sequence ends,
/// so it needs this pairing to be used as an input of a zip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<C> {
    begin: C,
    end: C,
}

//
// ctors
//
impl<C: Cursor> Span<C> {
    #[inline]
    pub fn new(begin: C, end: C) -> Self {
        Self { begin, end }
    }

    /// Construct a span, checking that `end` is not before `begin`.
    pub fn checked(begin: C, end: C) -> Result<Self, Error>
    where
        C: RandomAccessCursor,
    {
        let dist = begin.distance_to(&end);
        if dist < 0 {
            log::debug!("Rejected a span whose end is {} steps before its beginning", -dist);
            Err(Error::InvertedSpan(dist.unsigned_abs()))
        } else {
            Ok(Self { begin, end })
        }
    }

    #[inline]
    pub fn into_inner(self) -> (C, C) {
        (self.begin, self.end)
    }
}

impl<C: Cursor> From<(C, C)> for Span<C> {
    #[inline]
    fn from((begin, end): (C, C)) -> Self {
        Self::new(begin, end)
    }
}

//
// methods
//
impl<C: Classify> Classify for Span<C> {
    type Category = C::Category;
}

impl<C: Cursor> Iterable for Span<C> {
    type Cursor<'a> = C
    where
        Self: 'a;

    #[inline]
    fn begin(&self) -> C {
        self.begin.clone()
    }

    #[inline]
    fn end(&self) -> C {
        self.end.clone()
    }
}
