/// Solver errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NapError
{
    /// Exceed the breakpoint-search iteration bound.
    ///
    /// The search is proven to finish within \\(2n+1\\) outer iterations
    /// whenever the weights are nonnegative and the starting guess lies on
    /// the promised side of the true multiplier. Hitting this error means
    /// one of those preconditions was violated; the result would be
    /// meaningless, so no multiplier is returned.
    ExcessIter,
    /// Shortage of workspace slice length.
    WorkShortage,
    /// A negative (or NaN) weight entry.
    BadWeight,
}

impl core::fmt::Display for NapError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", match &self {
            NapError::ExcessIter   => "ExcessIter: exceed breakpoint-search iteration bound",
            NapError::WorkShortage => "WorkShortage: shortage of workspace slice length",
            NapError::BadWeight    => "BadWeight: negative or NaN weight entry",
        })
    }
}

//

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
impl std::error::Error for NapError {}
