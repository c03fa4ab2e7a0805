//! Fuzzy string similarity
//!
//! The ratio of two strings is the share of their elements that survive the
//! edit script: `(len(a) + len(b) - edits) / (len(a) + len(b))`. Identical
//! strings score 1, strings with nothing in common score 0.
//!
//! [`similarity_bounded`] is meant for fuzzy lookups, where most candidates
//! are rejected: it rules out hopeless pairs with two cheap upper bounds and
//! stops the comparison as soon as the edit count guarantees a ratio below
//! the caller's threshold.

mod pool;

use crate::artifacts::myers::Comparison;
use crate::artifacts::myers::hook::EditCounter;
use crate::artifacts::myers::options::DiffOptions;

/// Threshold floor used for similarity comparisons
pub const SIMILARITY_COST_FLOOR: isize = 4096;

/// Combined length below which the occurrence bound is not worth computing
const OCCURRENCE_BOUND_MIN_LENGTH: usize = 20;

/// Neutralises rounding errors when turning a ratio into an edit limit
const EDIT_LIMIT_EPSILON: f64 = 0.000001;

/// Similarity ratio of two strings, compared byte by byte
///
/// ```rust
/// use diffseq::artifacts::similarity::similarity;
///
/// assert_eq!(similarity("", "").unwrap(), 1.0);
/// assert_eq!(similarity("abc", "").unwrap(), 0.0);
/// assert_eq!(similarity("abc", "abc").unwrap(), 1.0);
/// ```
pub fn similarity(a: &str, b: &str) -> anyhow::Result<f64> {
    similarity_bounded(a, b, 0.0)
}

/// Similarity ratio that may give up early below `lower_bound`
///
/// The result is exact whenever it is at least `lower_bound`. Otherwise any
/// value below `lower_bound` may be returned (currently `0.0`).
pub fn similarity_bounded(a: &str, b: &str, lower_bound: f64) -> anyhow::Result<f64> {
    similarity_bytes_bounded(a.as_bytes(), b.as_bytes(), lower_bound)
}

/// [`similarity_bounded`] over raw bytes, which need not be valid UTF-8
pub fn similarity_bytes_bounded(x: &[u8], y: &[u8], lower_bound: f64) -> anyhow::Result<f64> {
    if !(0.0..=1.0).contains(&lower_bound) {
        anyhow::bail!("Similarity lower bound must lie in [0, 1], got {lower_bound}");
    }

    let length = x.len() + y.len();

    if x.is_empty() || y.is_empty() {
        return Ok(if length == 0 { 1.0 } else { 0.0 });
    }

    if lower_bound > 0.0 {
        // Every edit changes the length by one, so at least |len(a) - len(b)|
        // edits are needed.
        let upper_bound = (2 * x.len().min(y.len())) as f64 / length as f64;
        if upper_bound < lower_bound {
            return Ok(0.0);
        }

        // Every edit changes the occurrence count of one byte by one.
        if length >= OCCURRENCE_BOUND_MIN_LENGTH {
            let upper_bound = 1.0 - occurrence_distance(x, y) as f64 / length as f64;
            if upper_bound < lower_bound {
                return Ok(0.0);
            }
        }
    }

    let edit_limit = if lower_bound < 1.0 {
        (length as f64 * (1.0 - lower_bound + EDIT_LIMIT_EPSILON)) as usize
    } else {
        0
    };

    match count_edits(x, y, |l: &u8, r: &u8| l == r, Some(edit_limit))? {
        Some(edits) => Ok((length - edits) as f64 / length as f64),
        None => Ok(0.0),
    }
}

/// Similarity ratio of arbitrary sequences under a custom equality
pub fn similarity_by<A, B, F>(x: &[A], y: &[B], eq: F) -> anyhow::Result<f64>
where
    F: Fn(&A, &B) -> bool,
{
    let length = x.len() + y.len();

    if x.is_empty() || y.is_empty() {
        return Ok(if length == 0 { 1.0 } else { 0.0 });
    }

    match count_edits(x, y, eq, None)? {
        Some(edits) => Ok((length - edits) as f64 / length as f64),
        None => Ok(0.0),
    }
}

/// Total edits between `x` and `y`, or `None` once `limit` was exceeded
fn count_edits<A, B, F>(x: &[A], y: &[B], eq: F, limit: Option<usize>) -> anyhow::Result<Option<usize>>
where
    F: Fn(&A, &B) -> bool,
{
    let comparison = Comparison::new(x, y, eq)
        .with_options(DiffOptions::default().with_cost_floor(SIMILARITY_COST_FLOOR));

    pool::with_pooled(|scratch| {
        let mut counter = limit.map(EditCounter::with_limit).unwrap_or_default();
        let outcome = comparison.run_with_scratch(scratch, &mut counter)?;

        Ok((!outcome.aborted).then_some(counter.total()))
    })
}

/// Sum over all byte values of the difference in occurrence counts
fn occurrence_distance(x: &[u8], y: &[u8]) -> usize {
    let mut occurrences = [0isize; 256];

    for &byte in x {
        occurrences[byte as usize] += 1;
    }
    for &byte in y {
        occurrences[byte as usize] -= 1;
    }

    occurrences.iter().map(|d| d.unsigned_abs()).sum()
}
