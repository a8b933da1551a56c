#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::error::SnapError;

/// Return the member of `sorted` closest to `target`.
///
/// `sorted` must be ascending. An exact match is returned as-is. Otherwise the
/// search settles on the two keys bracketing `target` and picks the nearer;
/// on an exact tie the lower key wins.
///
/// # Errors
///
/// Returns `EmptyCandidates` if `sorted` is empty.
pub fn nearest(target: f64, sorted: &[f64]) -> Result<f64, SnapError> {
    let (&first, &last) = match (sorted.first(), sorted.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(SnapError::EmptyCandidates),
    };

    // Index of the first key >= target.
    let upper = sorted.partition_point(|&k| k < target);
    if upper == 0 {
        return Ok(first);
    }
    if upper == sorted.len() {
        return Ok(last);
    }

    // `below < target <= above`, so an exact match always wins the comparison.
    let (below, above) = (sorted[upper - 1], sorted[upper]);
    if (below - target).abs() <= (above - target).abs() {
        Ok(below)
    } else {
        Ok(above)
    }
}
