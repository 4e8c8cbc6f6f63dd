use std::collections::{btree_set, linked_list, BTreeSet, LinkedList};

use crate::category::{Classify, Forward};

use super::{Cursor, Dereference, Iterable};

// -----------------------------------------------------------------------------
// IterCursor
// -----------------------------------------------------------------------------
/// Forward cursor on top of a clonable [`Iterator`].
///
/// The item at the current position is pulled eagerly and kept, so that it can be
/// dereferenced any number of times. Cloning the cursor clones the iterator,
/// which gives an independent position (multi-pass), but there is no way back.
///
/// An exhausted cursor equals any other exhausted cursor, which makes it usable as
/// the end of the sequence.
pub struct IterCursor<I: Iterator> {
    rest: I,
    front: Option<I::Item>,
    pos: usize,
}

impl<I: Iterator> IterCursor<I> {
    /// Cursor at the first item of `iter`.
    #[inline]
    pub fn new(mut iter: I) -> Self {
        let front = iter.next();
        Self {
            rest: iter,
            front,
            pos: 0,
        }
    }

    /// Cursor past the last item. `iter` is only kept to fill the type.
    #[inline]
    pub fn exhausted(iter: I) -> Self {
        Self {
            rest: iter,
            front: None,
            pos: usize::MAX,
        }
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.front.is_none()
    }
}

impl<I> Clone for IterCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            rest: self.rest.clone(),
            front: self.front.clone(),
            pos: self.pos,
        }
    }
}

impl<I> std::fmt::Debug for IterCursor<I>
where
    I: Iterator,
    I::Item: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IterCursor")
            .field("front", &self.front)
            .field("pos", &self.pos)
            .finish_non_exhaustive()
    }
}

impl<I: Iterator> PartialEq for IterCursor<I> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        match (self.is_exhausted(), other.is_exhausted()) {
            (true, true) => true,
            (false, false) => self.pos == other.pos,
            _ => false,
        }
    }
}

impl<I: Iterator> Classify for IterCursor<I> {
    type Category = Forward;
}

impl<I> Dereference for IterCursor<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    #[inline]
    fn current(&self) -> I::Item {
        self.front
            .clone()
            .expect("Should not dereference an exhausted cursor")
    }
}

impl<I> Cursor for IterCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    #[inline]
    fn advance(&mut self) {
        self.front = self.rest.next();
        self.pos += 1;
    }

    fn steps_hint(&self, end: &Self) -> (usize, Option<usize>) {
        match (self.is_exhausted(), end.is_exhausted()) {
            (true, _) => (0, Some(0)),
            (false, true) => {
                let (lo, hi) = self.rest.size_hint();
                (lo.saturating_add(1), hi.and_then(|hi| hi.checked_add(1)))
            }
            (false, false) => (usize::from(self != end), None),
        }
    }
}

// -----------------------------------------------------------------------------
// ForwardOnly
// -----------------------------------------------------------------------------
/// Iterable made of a clonable iterator. Always classified as [`Forward`].
#[derive(Debug, Clone)]
pub struct ForwardOnly<I>(I);

/// Use a clonable iterator as a forward-only input of a zip.
///
/// # Example
/// ```
/// use qiter::{forward_only, zip};
///
/// let words = "x y z".split(' ');
/// let zipped = zip((forward_only(words), vec![1, 2, 3, 4]));
/// let pairs = zipped.iter().collect::<Vec<_>>();
/// assert_eq!(pairs, vec![("x", &1), ("y", &2), ("z", &3)]);
/// ```
#[inline]
pub fn forward_only<I>(iter: I) -> ForwardOnly<I::IntoIter>
where
    I: IntoIterator,
    I::IntoIter: Clone,
    I::Item: Clone,
{
    ForwardOnly(iter.into_iter())
}

impl<I> Classify for ForwardOnly<I> {
    type Category = Forward;
}

impl<I> Iterable for ForwardOnly<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Cursor<'a> = IterCursor<I>
    where
        Self: 'a;

    #[inline]
    fn begin(&self) -> IterCursor<I> {
        IterCursor::new(self.0.clone())
    }

    #[inline]
    fn end(&self) -> IterCursor<I> {
        IterCursor::exhausted(self.0.clone())
    }
}

// -----------------------------------------------------------------------------
// Iterable impls
// -----------------------------------------------------------------------------
macro_rules! impl_node_iterable {
    ($($ty:ident => $iter:ident),*) => {
        $(
            impl<T> Classify for $ty<T> {
                type Category = Forward;
            }

            impl<T> Iterable for $ty<T> {
                type Cursor<'a> = IterCursor<$iter::Iter<'a, T>>
                where
                    Self: 'a;

                #[inline]
                fn begin(&self) -> Self::Cursor<'_> {
                    IterCursor::new(self.iter())
                }

                #[inline]
                fn end(&self) -> Self::Cursor<'_> {
                    IterCursor::exhausted(self.iter())
                }
            }
        )*
    };
}

impl_node_iterable!(LinkedList => linked_list, BTreeSet => btree_set);
