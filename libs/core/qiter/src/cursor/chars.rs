use crate::category::{Bidirectional, Classify};

use super::{BidirectionalCursor, Cursor, Dereference, Iterable};

// -----------------------------------------------------------------------------
// CharCursor
// -----------------------------------------------------------------------------
/// Bidirectional cursor over the `char`s of a string slice.
///
/// UTF-8 has variable width, so stepping is possible in both directions
/// but jumping by an arbitrary offset is not.
#[derive(Debug, Clone, Copy)]
pub struct CharCursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> CharCursor<'a> {
    #[inline]
    pub fn begin_of(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    #[inline]
    pub fn end_of(text: &'a str) -> Self {
        Self {
            text,
            pos: text.len(),
        }
    }

    /// Byte offset of the cursor in the text.
    #[inline]
    pub fn byte_offset(&self) -> usize {
        self.pos
    }
}

impl PartialEq for CharCursor<'_> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for CharCursor<'_> {}

impl Classify for CharCursor<'_> {
    type Category = Bidirectional;
}

impl Dereference for CharCursor<'_> {
    type Item = char;

    #[inline]
    fn current(&self) -> char {
        self.text[self.pos..]
            .chars()
            .next()
            .expect("Should not dereference a cursor at the end of the text")
    }
}

impl Cursor for CharCursor<'_> {
    #[inline]
    fn advance(&mut self) {
        self.pos += self.current().len_utf8();
    }

    /// A `char` takes 1 to 4 bytes.
    #[inline]
    fn steps_hint(&self, end: &Self) -> (usize, Option<usize>) {
        let bytes = end.pos.saturating_sub(self.pos);
        (bytes.div_ceil(4), Some(bytes))
    }
}

impl BidirectionalCursor for CharCursor<'_> {
    #[inline]
    fn retreat(&mut self) {
        let prev = self.text[..self.pos]
            .chars()
            .next_back()
            .expect("Should not retreat past the beginning of the text");
        self.pos -= prev.len_utf8();
    }
}

macro_rules! impl_str_iterable {
    ($($ty:ty),*) => {
        $(
            impl Classify for $ty {
                type Category = Bidirectional;
            }

            impl Iterable for $ty {
                type Cursor<'a> = CharCursor<'a>
                where
                    Self: 'a;

                #[inline]
                fn begin(&self) -> CharCursor<'_> {
                    CharCursor::begin_of(self)
                }

                #[inline]
                fn end(&self) -> CharCursor<'_> {
                    CharCursor::end_of(self)
                }

                #[inline]
                fn size(&self) -> usize {
                    self.chars().count()
                }
            }
        )*
    };
}

impl_str_iterable!(str, String);
