use thiserror::Error;

/// A packed operator whose parallel arrays do not describe a valid term list.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("`boundaries` ({boundaries}) must be one element longer than `coeffs` ({coeffs})")]
    MismatchedTermCount { coeffs: usize, boundaries: usize },
    #[error("`actions` ({actions}) and `indices` ({indices}) must have the same length")]
    MismatchedActionCount { actions: usize, indices: usize },
    #[error("the first entry of `boundaries` must be 0, not {0}")]
    BadInitialBoundary(usize),
    #[error("the last entry of `boundaries` ({last}) must equal the number of stored actions ({actions})")]
    BadFinalBoundary { last: usize, actions: usize },
    #[error("`boundaries` must be non-decreasing")]
    DecreasingBoundaries,
}

/// Checks the shared boundary invariants of the packed layout.
pub(crate) fn check_boundaries(boundaries: &[usize], action_count: usize) -> Result<(), LayoutError> {
    if boundaries[0] != 0 {
        return Err(LayoutError::BadInitialBoundary(boundaries[0]));
    }
    let last = boundaries[boundaries.len() - 1];
    if last != action_count {
        return Err(LayoutError::BadFinalBoundary { last, actions: action_count });
    }
    if boundaries.windows(2).any(|pair| pair[0] > pair[1]) {
        return Err(LayoutError::DecreasingBoundaries);
    }
    Ok(())
}

/// Failure of a scalar arithmetic operation on an operator.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("cannot divide an operator by zero")]
    DivisionByZero,
}
