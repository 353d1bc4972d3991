//! Argument-count validators
//!
//! Result-returning checks consumed by `Command::parse`. A violation is an
//! ordinary `ArityError` value, not a panic - arity failures are expected,
//! frequent input errors.

use crate::errors::{Result, VecCalcError};

/// Check `actual` against the half-open range `[low, high)`
///
/// `None` for `high` leaves the range unbounded above.
///
/// # Errors
/// Returns `ArityError` identifying the expected range and the actual
/// count when `actual` falls outside the range.
pub fn count_in_range(keyword: &str, actual: usize, low: usize, high: Option<usize>) -> Result<()> {
    let in_range = actual >= low && high.map_or(true, |h| actual < h);
    if in_range {
        return Ok(());
    }

    let expected = match high {
        Some(h) => format!("between {} and {}", low, h - 1),
        None => format!("at least {}", low),
    };

    Err(VecCalcError::ArityError {
        keyword: keyword.to_string(),
        expected,
        actual,
    })
}

/// Check `actual` against a fixed set of accepted counts
///
/// # Errors
/// Returns `ArityError` listing the accepted counts and the actual count
/// when `actual` is not in the set.
pub fn count_in_set(keyword: &str, actual: usize, allowed: &[usize]) -> Result<()> {
    if allowed.contains(&actual) {
        return Ok(());
    }

    let expected = allowed
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(" or ");

    Err(VecCalcError::ArityError {
        keyword: keyword.to_string(),
        expected,
        actual,
    })
}
