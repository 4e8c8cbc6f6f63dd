mod chars;
mod indexed;
mod iter;
mod single;
mod span;
mod traits;

pub use chars::CharCursor;
pub use indexed::{DequeCursor, IndexCursor, SliceCursor};
pub use iter::{forward_only, ForwardOnly, IterCursor};
pub use single::{single_pass, SinglePass, SinglePassCursor};
pub use span::Span;
pub use traits::{BidirectionalCursor, Cursor, Dereference, Iterable, RandomAccessCursor};
