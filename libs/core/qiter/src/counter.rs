use num::{NumCast, PrimInt, ToPrimitive};

use crate::{
    category::{Classify, RandomAccess},
    cursor::{BidirectionalCursor, Cursor, Dereference, Iterable, RandomAccessCursor},
    Error,
};

// -----------------------------------------------------------------------------
// Counting
// -----------------------------------------------------------------------------
/// Arithmetic sequence `start, start + step, start + 2 * step, ...`.
///
/// Nothing is stored but a few numbers, yet the sequence is random access.
/// Unless it is bounded, its end is never reached, so a zip over it ends with
/// its other inputs.
///
/// Counters panic when they would leave the range of `T`. Walking an
/// unbounded sequence from the back does exactly that, since its remaining
/// length is `isize::MAX`.
///
/// # Example
/// ```
/// use qiter::{zip, Counting};
///
/// let idx = Counting::with_step(10, -5).unwrap();
/// let zipped = zip((idx, ["a", "b", "c"]));
/// let got = zipped.iter().collect::<Vec<_>>();
/// assert_eq!(got, vec![(10, &"a"), (5, &"b"), (0, &"c")]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Counting<T> {
    start: T,
    step: T,
    len: Option<usize>,
    stop: Option<T>,
}

//
// ctors
//
impl<T: PrimInt> Counting<T> {
    /// Consecutive integers from `start`, without end.
    #[inline]
    pub fn new(start: T) -> Self {
        Self {
            start,
            step: T::one(),
            len: None,
            stop: None,
        }
    }

    /// Integers from `start` by `step`, without end. A zero step is rejected.
    pub fn with_step(start: T, step: T) -> Result<Self, Error> {
        if step.is_zero() {
            log::debug!("Rejected a counting sequence with zero step");
            return Err(Error::ZeroStep);
        }
        Ok(Self {
            start,
            step,
            len: None,
            stop: None,
        })
    }

    /// The first `len` integers from `start` by `step`.
    ///
    /// The end is a real position, so it can be stepped back from.
    /// Fails if the step is zero or if the end does not fit in `T`.
    pub fn bounded(start: T, step: T, len: usize) -> Result<Self, Error> {
        let res = Self::with_step(start, step)?;
        let stop = len
            .to_i128()
            .and_then(|n| shift(start, step, n))
            .ok_or_else(|| {
                log::debug!("Rejected a counting sequence of {len} items overflowing its type");
                Error::CountOverflow { len }
            })?;
        Ok(Self {
            len: Some(len),
            stop: Some(stop),
            ..res
        })
    }
}

impl Counting<usize> {
    /// Indices `0, 1, ..., len - 1`.
    #[inline]
    pub fn indices(len: usize) -> Self {
        Self {
            start: 0,
            step: 1,
            len: Some(len),
            stop: Some(len),
        }
    }
}

impl<T: PrimInt> Default for Counting<T> {
    #[inline]
    fn default() -> Self {
        Self::new(T::zero())
    }
}

//
// methods
//
impl<T: PrimInt> Counting<T> {
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    #[inline]
    pub fn step(&self) -> T {
        self.step
    }

    /// Number of items, [None] when unbounded.
    #[inline]
    pub fn len(&self) -> Option<usize> {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == Some(0)
    }
}

impl<T> Classify for Counting<T> {
    type Category = RandomAccess;
}

impl<T: PrimInt> Iterable for Counting<T> {
    type Cursor<'a> = Counter<T>
    where
        Self: 'a;

    #[inline]
    fn begin(&self) -> Counter<T> {
        Counter {
            value: self.start,
            step: self.step,
            unbounded: false,
        }
    }

    #[inline]
    fn end(&self) -> Counter<T> {
        match self.stop {
            Some(stop) => Counter {
                value: stop,
                step: self.step,
                unbounded: false,
            },
            None => Counter {
                value: self.start,
                step: self.step,
                unbounded: true,
            },
        }
    }

    #[inline]
    fn size(&self) -> usize {
        self.len.unwrap_or(usize::MAX)
    }
}

// -----------------------------------------------------------------------------
// Counter
// -----------------------------------------------------------------------------
/// Cursor of a [`Counting`] sequence.
///
/// The end of an unbounded sequence is an unbounded counter, which is never
/// equal to a live one. Distances towards it are `isize::MAX`, distances from
/// it are `isize::MIN`. Moving it forward does nothing; stepping back from it
/// is a contract violation, checked in debug builds only.
#[derive(Debug, Clone, Copy, Hash)]
pub struct Counter<T> {
    value: T,
    step: T,
    unbounded: bool,
}

impl<T: PrimInt> Counter<T> {
    /// Current value, or [None] for the unbounded end.
    #[inline]
    pub fn value(&self) -> Option<T> {
        (!self.unbounded).then_some(self.value)
    }

    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.unbounded
    }
}

impl<T: PrimInt> PartialEq for Counter<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        match (self.unbounded, other.unbounded) {
            (false, false) => self.value == other.value,
            (true, true) => true,
            _ => false,
        }
    }
}

impl<T: PrimInt> Eq for Counter<T> {}

impl<T> Classify for Counter<T> {
    type Category = RandomAccess;
}

impl<T: PrimInt> Dereference for Counter<T> {
    type Item = T;

    #[inline]
    fn current(&self) -> T {
        debug_assert!(!self.unbounded, "Should not dereference the end of a counting sequence");
        self.value
    }
}

impl<T: PrimInt> Cursor for Counter<T> {
    #[inline]
    fn advance(&mut self) {
        if !self.unbounded {
            self.value = self.value + self.step;
        }
    }

    fn steps_hint(&self, end: &Self) -> (usize, Option<usize>) {
        match (self.unbounded, end.unbounded) {
            (false, false) => {
                let n = self.distance_to(end).max(0) as usize;
                (n, Some(n))
            }
            (false, true) => (usize::MAX, None),
            (true, _) => (0, Some(0)),
        }
    }
}

impl<T: PrimInt> BidirectionalCursor for Counter<T> {
    #[inline]
    fn retreat(&mut self) {
        debug_assert!(
            !self.unbounded,
            "Should not step back from the end of an unbounded counting sequence"
        );
        if !self.unbounded {
            self.value = self.value - self.step;
        }
    }
}

impl<T: PrimInt> RandomAccessCursor for Counter<T> {
    fn advance_by(&mut self, n: isize) {
        if self.unbounded {
            debug_assert!(
                n >= 0,
                "Should not step back from the end of an unbounded counting sequence"
            );
            return;
        }
        self.value = shift(self.value, self.step, n as i128)
            .expect("Should keep a counter within the range of its value type");
    }

    fn distance_to(&self, other: &Self) -> isize {
        match (self.unbounded, other.unbounded) {
            (false, false) => {
                let diff = widen(other.value) - widen(self.value);
                (diff / widen(self.step)) as isize
            }
            (false, true) => isize::MAX,
            (true, false) => isize::MIN,
            (true, true) => 0,
        }
    }
}

#[inline]
fn widen<T: ToPrimitive>(v: T) -> i128 {
    v.to_i128().expect("Should fit counter values in i128")
}

/// `value + n * step`, if it fits in `T`.
#[inline]
fn shift<T: PrimInt>(value: T, step: T, n: i128) -> Option<T> {
    let delta = n.checked_mul(widen(step))?;
    NumCast::from(widen(value).checked_add(delta)?)
}
