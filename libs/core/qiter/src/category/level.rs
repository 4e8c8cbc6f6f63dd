// -----------------------------------------------------------------------------
// Level
// -----------------------------------------------------------------------------
/// Runtime mirror of a traversal capability.
///
/// Levels are totally ordered, `None < Forward < Bidirectional < RandomAccess`,
/// and the discriminant is the ordinal used by [`CategoryOf`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::FromRepr,
)]
#[repr(u8)]
pub enum Level {
    None = 0,
    Forward = 1,
    Bidirectional = 2,
    RandomAccess = 3,
}

impl Level {
    /// Weakest of the given levels.
    ///
    /// Returns [None] for an empty slice, since there is no minimum of nothing.
    ///
    /// # Example
    /// ```
    /// use qiter::category::Level;
    ///
    /// assert_eq!(
    ///     Level::min_of(&[Level::RandomAccess, Level::Forward, Level::Bidirectional]),
    ///     Some(Level::Forward)
    /// );
    /// assert_eq!(Level::min_of(&[]), None);
    /// ```
    pub const fn min_of(levels: &[Level]) -> Option<Level> {
        let mut res = None;
        let mut i = 0;
        while i < levels.len() {
            let lvl = levels[i];
            res = match res {
                Some(cur) if (cur as u8) <= (lvl as u8) => Some(cur),
                _ => Some(lvl),
            };
            i += 1;
        }
        res
    }

    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }
}

// -----------------------------------------------------------------------------
// Category
// -----------------------------------------------------------------------------
pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Type-level traversal capability.
///
/// Implemented only by the four marker types of this module.
/// Each marker knows its [`Level`] and how to meet (take the weaker of)
/// itself with any other marker, which is what makes the reduction over
/// heterogeneous inputs expressible without specialization.
pub trait Category: sealed::Sealed + std::fmt::Debug + 'static {
    const LEVEL: Level;

    #[doc(hidden)]
    type MeetForward: Category;
    #[doc(hidden)]
    type MeetBidirectional: Category;
    #[doc(hidden)]
    type MeetRandomAccess: Category;

    /// The weaker of `Self` and `C`.
    type Meet<C: Category>: Category;
}

/// Categories a zip can be built on.
pub trait ForwardCategory: Category {}

/// Categories which allow stepping backward.
pub trait BidirectionalCategory: ForwardCategory {}

/// Categories which allow offsetting by any amount and measuring distances.
pub trait RandomAccessCategory: BidirectionalCategory {}

/// No traversal capability could be determined. Never instantiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unreachable {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Forward {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bidirectional {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RandomAccess {}

impl sealed::Sealed for Unreachable {}
impl sealed::Sealed for Forward {}
impl sealed::Sealed for Bidirectional {}
impl sealed::Sealed for RandomAccess {}

impl Category for Unreachable {
    const LEVEL: Level = Level::None;

    type MeetForward = Unreachable;
    type MeetBidirectional = Unreachable;
    type MeetRandomAccess = Unreachable;
    type Meet<C: Category> = Unreachable;
}

impl Category for Forward {
    const LEVEL: Level = Level::Forward;

    type MeetForward = Forward;
    type MeetBidirectional = Forward;
    type MeetRandomAccess = Forward;
    type Meet<C: Category> = C::MeetForward;
}

impl Category for Bidirectional {
    const LEVEL: Level = Level::Bidirectional;

    type MeetForward = Forward;
    type MeetBidirectional = Bidirectional;
    type MeetRandomAccess = Bidirectional;
    type Meet<C: Category> = C::MeetBidirectional;
}

impl Category for RandomAccess {
    const LEVEL: Level = Level::RandomAccess;

    type MeetForward = Forward;
    type MeetBidirectional = Bidirectional;
    type MeetRandomAccess = RandomAccess;
    type Meet<C: Category> = C::MeetRandomAccess;
}

impl ForwardCategory for Forward {}
impl ForwardCategory for Bidirectional {}
impl ForwardCategory for RandomAccess {}

impl BidirectionalCategory for Bidirectional {}
impl BidirectionalCategory for RandomAccess {}

impl RandomAccessCategory for RandomAccess {}

// -----------------------------------------------------------------------------
// CategoryOf
// -----------------------------------------------------------------------------
/// Carrier of a [`Level`] ordinal at type level.
pub struct LevelTag<const L: u8>;

/// Inverse of [`Category::LEVEL`].
pub trait FromLevel {
    type Category: Category;
}

impl FromLevel for LevelTag<0> {
    type Category = Unreachable;
}

impl FromLevel for LevelTag<1> {
    type Category = Forward;
}

impl FromLevel for LevelTag<2> {
    type Category = Bidirectional;
}

impl FromLevel for LevelTag<3> {
    type Category = RandomAccess;
}

/// Marker type of the level with ordinal `L`. Ordinal 0 is [`Unreachable`].
pub type CategoryOf<const L: u8> = <LevelTag<L> as FromLevel>::Category;
