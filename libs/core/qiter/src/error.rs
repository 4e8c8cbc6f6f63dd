// -----------------------------------------------------------------------------
// Error
// -----------------------------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    #[error("Step of a counting sequence must not be zero")]
    ZeroStep,
    #[error("End of the span is {} steps before its beginning", .0)]
    InvertedSpan(usize),
    #[error("Counting sequence of {} items overflows its value type", .len)]
    CountOverflow { len: usize },
}
