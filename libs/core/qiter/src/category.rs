mod classify;
mod level;
mod reduce;

pub use classify::Classify;
pub use level::{
    Bidirectional, BidirectionalCategory, Category, CategoryOf, Forward, ForwardCategory,
    FromLevel, Level, LevelTag, RandomAccess, RandomAccessCategory, Unreachable,
};
pub use reduce::{Min, Reduced};
