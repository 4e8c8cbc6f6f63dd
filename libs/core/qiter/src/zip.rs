mod container;
mod iterator;
mod tuple;
mod walk;

pub use container::ZipContainer;
pub use iterator::ZipIterator;
pub use tuple::{
    BidirectionalTuple, CursorTuple, IterableTuple, RandomAccessTuple, SinglePassTuple,
};
pub use walk::Walk;

use num::PrimInt;

use crate::{
    category::{Category, Classify, ForwardCategory, Level},
    counter::Counting,
    cursor::{single_pass, Iterable, SinglePass},
    Error,
};

/// Zip a tuple of iterables.
///
/// # Example
/// ```
/// use qiter::zip;
///
/// let names = ["ann", "bob"];
/// let ages = vec![31, 47, 12];
/// let zipped = zip((&names, &ages));
/// assert_eq!(zipped.iter().count(), 2);
/// ```
#[inline]
pub fn zip<T>(inputs: T) -> ZipContainer<T>
where
    T: IterableTuple,
    T::Category: ForwardCategory,
{
    ZipContainer::new(inputs)
}

/// Zip any number of iterables given as separate arguments.
///
/// `zip!(a, b, c)` is `zip((a, b, c))`. At least one input is required.
///
/// # Example
/// ```
/// use qiter::zip;
///
/// let xs = [1, 2, 3];
/// let zipped = zip!(&xs, "ab", &xs);
/// let got = zipped.iter().collect::<Vec<_>>();
/// assert_eq!(got, vec![(&1, 'a', &1), (&2, 'b', &2)]);
/// ```
#[macro_export]
macro_rules! zip {
    ($($input:expr),+ $(,)?) => {
        $crate::ZipContainer::new(($($input,)+))
    };
}

/// Pair every element of `seq` with its index, counted from 0.
///
/// For a bidirectional or random-access `seq` the indices stop with it,
/// so the end of the result can be stepped back from.
///
/// # Example
/// ```
/// use qiter::cursor::{BidirectionalCursor, Dereference};
/// use qiter::enumerate;
///
/// let letters = vec!['x', 'y'];
/// let got = enumerate(&letters).iter().collect::<Vec<_>>();
/// assert_eq!(got, vec![(0, &'x'), (1, &'y')]);
///
/// let zipped = enumerate(&letters);
/// let mut last = zipped.end();
/// last.retreat();
/// assert_eq!(last.current(), (1, &'y'));
/// ```
#[inline]
pub fn enumerate<S>(seq: S) -> ZipContainer<(Counting<usize>, S)>
where
    S: Iterable,
    <(Counting<usize>, S) as Classify>::Category: ForwardCategory,
{
    let idx = if can_step_back::<S>() {
        Counting::indices(seq.size())
    } else {
        Counting::new(0)
    };
    ZipContainer::new((idx, seq))
}

/// Pair every element of `seq` with `start`, `start + step`, ...
///
/// Fails if `step` is zero, or if `seq` can be stepped back from and the value
/// past its last element does not fit in `T`.
pub fn enumerate_with<S, T>(
    seq: S,
    start: T,
    step: T,
) -> Result<ZipContainer<(Counting<T>, S)>, Error>
where
    S: Iterable,
    T: PrimInt,
    <(Counting<T>, S) as Classify>::Category: ForwardCategory,
{
    let idx = if can_step_back::<S>() {
        Counting::bounded(start, step, seq.size())?
    } else {
        Counting::with_step(start, step)?
    };
    Ok(ZipContainer::new((idx, seq)))
}

#[inline]
fn can_step_back<S: Classify>() -> bool {
    <S::Category as Category>::LEVEL >= Level::Bidirectional
}

/// Zip sequences walked once, such as mutable borrows of containers.
///
/// Every input is wrapped by [`single_pass`], so the zip is forward only and each
/// item is yielded by value: zipping `&mut` containers yields `&mut` elements.
/// The inputs are compared in order, so an input placed after the shortest one
/// may lose one item.
///
/// # Example
/// ```
/// use qiter::zip_mut;
///
/// let mut prices = vec![10, 20, 30];
/// let rates = [2, 3];
/// for (price, rate) in &zip_mut((&mut prices, &rates)) {
///     *price *= rate;
/// }
/// assert_eq!(prices, vec![20, 60, 30]);
/// ```
#[inline]
pub fn zip_mut<T>(inputs: T) -> ZipContainer<T::Streams>
where
    T: SinglePassTuple,
    <T::Streams as Classify>::Category: ForwardCategory,
{
    ZipContainer::new(inputs.into_streams())
}

/// Pair every element of a sequence walked once with its index, counted from 0.
///
/// # Example
/// ```
/// use qiter::enumerate_mut;
///
/// let mut slots = vec![0; 3];
/// for (i, slot) in &enumerate_mut(&mut slots) {
///     *slot = i * i;
/// }
/// assert_eq!(slots, vec![0, 1, 4]);
/// ```
#[inline]
pub fn enumerate_mut<S>(seq: S) -> ZipContainer<(Counting<usize>, SinglePass<S::IntoIter>)>
where
    S: IntoIterator,
    <(Counting<usize>, SinglePass<S::IntoIter>) as Classify>::Category: ForwardCategory,
{
    ZipContainer::new((Counting::new(0), single_pass(seq)))
}
