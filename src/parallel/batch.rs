//! Batch distribution for parallel build evaluation.
//!
//! Requests are split into one contiguous range per worker; each range is
//! evaluated in order so results line up with the input.

use rayon::prelude::*;
use rayon::ThreadPoolBuildError;

use crate::calc::performance::{calculate_build_performance, PerformanceResult};
use crate::data::database::GameDatabase;
use crate::error::CalcError;
use crate::parallel::pool::WorkerPool;
use crate::state::request::CalcRequest;

/// Split `total` items into up to `num_batches` ranges `[start, end)`.
/// Batches are as equal in size as possible; later batches may be smaller.
///
/// # Example
/// ```
/// # use mhrb::parallel::batch_ranges;
/// let ranges = batch_ranges(100, 4);
/// assert_eq!(ranges, vec![(0, 25), (25, 50), (50, 75), (75, 100)]);
/// ```
pub fn batch_ranges(total: usize, num_batches: usize) -> Vec<(usize, usize)> {
    if total == 0 || num_batches == 0 {
        return Vec::new();
    }
    let num_batches = num_batches.min(total);
    let base = total / num_batches;
    let remainder = total % num_batches;
    let mut ranges = Vec::with_capacity(num_batches);
    let mut start = 0;
    for i in 0..num_batches {
        let size = base + usize::from(i < remainder);
        let end = start + size;
        ranges.push((start, end));
        start = end;
    }
    ranges
}

/// Evaluate every request against `db` on `pool`. One result per request, in
/// input order; a failing request does not stop the others.
pub fn evaluate_batch(
    db: &GameDatabase,
    requests: &[CalcRequest],
    pool: &WorkerPool,
) -> Result<Vec<Result<PerformanceResult, CalcError>>, ThreadPoolBuildError> {
    pool.install(|| {
        let ranges = batch_ranges(requests.len(), rayon::current_num_threads());
        tracing::debug!(
            requests = requests.len(),
            batches = ranges.len(),
            "evaluating batch"
        );
        let chunks: Vec<Vec<_>> = ranges
            .into_par_iter()
            .map(|(start, end)| {
                requests[start..end]
                    .iter()
                    .map(|request| {
                        calculate_build_performance(db, &request.build, &request.calc_state)
                    })
                    .collect()
            })
            .collect();
        chunks.into_iter().flatten().collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_ranges_even_split() {
        let r = batch_ranges(100, 4);
        assert_eq!(r, vec![(0, 25), (25, 50), (50, 75), (75, 100)]);
    }

    #[test]
    fn batch_ranges_with_remainder() {
        let r = batch_ranges(10, 3);
        assert_eq!(r, vec![(0, 4), (4, 7), (7, 10)]);
    }

    #[test]
    fn batch_ranges_more_batches_than_items() {
        let r = batch_ranges(3, 10);
        assert_eq!(r, vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn batch_ranges_empty() {
        assert!(batch_ranges(0, 5).is_empty());
        assert!(batch_ranges(10, 0).is_empty());
    }

    #[test]
    fn empty_batch_evaluates_to_nothing() {
        let db = GameDatabase::empty();
        let results =
            evaluate_batch(&db, &[], &WorkerPool::with_workers(1)).expect("pool builds");
        assert!(results.is_empty());
    }
}
