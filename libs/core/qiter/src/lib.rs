//! Lockstep iteration over heterogeneous sequences.
//!
//! A zip walks several sequences at once and stops with the shortest one.
//! Its traversal capability is the weakest of its inputs, decided when compiling:
//! zipping a slice with a string gives a bidirectional zip, adding a linked list
//! makes it forward only.
//!
//! ```
//! use qiter::category::{Category, Classify, Level};
//! use qiter::zip;
//!
//! let nums = vec![10, 20, 30];
//! let zipped = zip((&nums, "abcde"));
//!
//! fn level<Z: Classify>(_: &Z) -> Level {
//!     <Z::Category as Category>::LEVEL
//! }
//! assert_eq!(level(&zipped), Level::Bidirectional);
//!
//! let got = zipped.iter().collect::<Vec<_>>();
//! assert_eq!(got, vec![(&10, 'a'), (&20, 'b'), (&30, 'c')]);
//! ```
pub mod category;
pub mod cursor;

mod counter;
mod error;
mod zip;

pub use counter::{Counter, Counting};
pub use cursor::{forward_only, single_pass};
pub use error::Error;
pub use zip::{
    enumerate, enumerate_mut, enumerate_with, zip, zip_mut, BidirectionalTuple, CursorTuple,
    IterableTuple, RandomAccessTuple, SinglePassTuple, Walk, ZipContainer, ZipIterator,
};
